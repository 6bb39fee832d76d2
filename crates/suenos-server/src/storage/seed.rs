//! Seed inventory for the mock backend
//!
//! Hand-authored dataset from inventario.txt: 14 colchones + 12 almohadas.

use suenos_catalog::brand;
use suenos_catalog::images::product_image;
use suenos_catalog::slug::generate_slug;
use suenos_catalog::{Category, Product, ProductOption};

/// Build a product with the slug derived from its name (unless overridden)
/// and the image resolved from the slug table.
pub fn product(
    name: &str,
    description: &str,
    category_id: &str,
    options: &[(&str, f64)],
    slug_override: Option<&str>,
) -> Product {
    let slug = match slug_override {
        Some(slug) => slug.to_string(),
        None => generate_slug(name),
    };
    Product {
        image_url: product_image(&slug).to_string(),
        slug,
        name: name.to_string(),
        description: description.to_string(),
        category_id: category_id.to_string(),
        options: options
            .iter()
            .map(|&(label, price)| ProductOption {
                label: label.to_string(),
                price,
            })
            .collect(),
        is_active: true,
    }
}

pub fn categories() -> Vec<Category> {
    vec![
        Category {
            id: brand::categories::COLCHONES.to_string(),
            name: "Colchones".to_string(),
            slug: "colchones".to_string(),
        },
        Category {
            id: brand::categories::ALMOHADAS.to_string(),
            name: "Almohadas".to_string(),
            slug: "almohadas".to_string(),
        },
    ]
}

pub fn products() -> Vec<Product> {
    let colchones = brand::categories::COLCHONES;
    let almohadas = brand::categories::ALMOHADAS;

    vec![
        // Colchones
        product(
            "Alternativa",
            "Colchón económico ideal para todo tipo de uso. Excelente relación calidad-precio.",
            colchones,
            &[("1 Plaza", 65.0), ("1 ½ Plaza", 70.0), ("2 Plazas", 81.0)],
            None,
        ),
        product(
            "Zafiro 24cm",
            "Colchón Zafiro con altura de 24cm para mayor comodidad y soporte.",
            colchones,
            &[("1 ½ Plaza", 73.0), ("2 Plazas", 87.0)],
            None,
        ),
        product(
            "Zafiro 29cm",
            "Colchón Zafiro premium con altura de 29cm para máximo confort.",
            colchones,
            &[("1 ½ Plaza", 85.0), ("2 Plazas", 100.0), ("2 ½ Plazas", 125.0)],
            None,
        ),
        product(
            "Imperial 23",
            "Línea Imperial con diseño clásico y soporte firme. Altura de 23cm.",
            colchones,
            &[("1 ½ Plaza", 100.0), ("2 Plazas", 120.0)],
            None,
        ),
        product(
            "Imperial 30",
            "Línea Imperial premium con altura de 30cm para máximo lujo y descanso.",
            colchones,
            &[
                ("1 ½ Plaza", 105.0),
                ("2 Plazas", 130.0),
                ("2 ½ Plazas", 160.0),
                ("3 Plazas", 200.0),
            ],
            None,
        ),
        product(
            "Suave Brisa",
            "Colchón con tecnología de ventilación para un descanso fresco y confortable.",
            colchones,
            &[("1 ½ Plaza", 135.0), ("2 Plazas", 170.0), ("2 ½ Plazas", 205.0)],
            None,
        ),
        product(
            "Continental de Lujo Tradicional",
            "Colchón de lujo con diseño tradicional y máxima durabilidad.",
            colchones,
            &[
                ("1 ½ Plaza", 145.0),
                ("2 Plazas", 185.0),
                ("2 ½ Plazas", 225.0),
                ("3 Plazas", 290.0),
            ],
            None,
        ),
        product(
            "Continental de Lujo Pillow Top",
            "Colchón de lujo con capa Pillow Top para suavidad extra en la superficie.",
            colchones,
            &[
                ("1 ½ Plaza", 160.0),
                ("2 Plazas", 205.0),
                ("2 ½ Plazas", 255.0),
                ("3 Plazas", 320.0),
            ],
            None,
        ),
        product(
            "Dream Box Soft",
            "Colchón en caja con sensación suave y adaptable. Fácil transporte.",
            colchones,
            &[
                ("1 ½ Plaza", 185.0),
                ("2 Plazas", 230.0),
                ("2 ½ Plazas", 270.0),
                ("3 Plazas", 325.0),
            ],
            None,
        ),
        product(
            "Continental de Lujo FB",
            "Colchón Continental de Lujo con tecnología FB para soporte optimizado.",
            colchones,
            &[
                ("1 ½ Plaza", 195.0),
                ("2 Plazas", 230.0),
                ("2 ½ Plazas", 275.0),
                ("3 Plazas", 330.0),
            ],
            None,
        ),
        product(
            "Fussion",
            "Colchón premium que fusiona tecnologías avanzadas para el mejor descanso.",
            colchones,
            &[
                ("1 ½ Plaza", 215.0),
                ("2 Plazas", 265.0),
                ("2 ½ Plazas", 330.0),
                ("3 Plazas", 425.0),
            ],
            None,
        ),
        product(
            "Dream Box MF",
            "Colchón en caja con Memory Foam para adaptación perfecta al cuerpo.",
            colchones,
            &[
                ("1 ½ Plaza", 220.0),
                ("2 Plazas", 275.0),
                ("2 ½ Plazas", 315.0),
                ("3 Plazas", 385.0),
            ],
            None,
        ),
        product(
            "Prensado Clínico",
            "Colchón con firmeza clínica ideal para soporte ortopédico.",
            colchones,
            &[
                ("1 ½ Plaza", 135.0),
                ("2 Plazas", 170.0),
                ("2 ½ Plazas", 205.0),
                ("3 Plazas", 255.0),
            ],
            // Override slug to match the image file
            Some("prensado-clinico"),
        ),
        product(
            "Restapedic",
            "Colchón ortopédico diseñado para aliviar puntos de presión y mejorar el descanso.",
            colchones,
            &[
                ("1 ½ Plaza", 140.0),
                ("2 Plazas", 175.0),
                ("2 ½ Plazas", 210.0),
                ("3 Plazas", 265.0),
            ],
            None,
        ),
        // Almohadas
        product(
            "Almohada Low Back Bamboo",
            "Almohada de bambú para soporte lumbar. Ideal para aliviar dolores de espalda.",
            almohadas,
            &[("33cm x 32cm", 23.64)],
            None,
        ),
        product(
            "Almohada Cervical Memory Foam Fresh",
            "Almohada cervical con espuma de memoria y tecnología Fresh para frescura.",
            almohadas,
            &[("61cm x 38cm", 36.02)],
            None,
        ),
        product(
            "Almohada Memory Foam King Fresh",
            "Almohada King size con espuma de memoria y tecnología Fresh.",
            almohadas,
            &[("61cm x 38cm", 45.72)],
            None,
        ),
        product(
            "Almohada Cervical Fresh Air",
            "Almohada cervical con tecnología Fresh Air para máxima ventilación.",
            almohadas,
            &[("60cm x 38cm", 36.89)],
            None,
        ),
        product(
            "Almohada Antireflujo Vita Pillow",
            "Almohada con inclinación especial para prevenir el reflujo gastroesofágico.",
            almohadas,
            &[("65cm x 68cm x 17cm", 44.15)],
            None,
        ),
        product(
            "Almohada Memory Foam Lavanda",
            "Almohada con espuma de memoria y esencia de lavanda para relajación.",
            almohadas,
            &[("62cm x 42cm x 14cm", 28.62)],
            None,
        ),
        product(
            "Almohada Memory Foam Manzanilla",
            "Almohada con espuma de memoria y esencia de manzanilla para un sueño tranquilo.",
            almohadas,
            &[("62cm x 42cm x 14cm", 28.62)],
            None,
        ),
        product(
            "Almohada Dual Confort",
            "Almohada con dos niveles de firmeza para adaptarse a tu preferencia.",
            almohadas,
            &[("60cm x 40cm", 27.57)],
            None,
        ),
        product(
            "Almohada Aurora Soft",
            "Almohada suave y económica, ideal para uso diario.",
            almohadas,
            &[("60cm x 40cm", 4.99)],
            None,
        ),
        product(
            "Almohada Chaide Rubí",
            "Almohada clásica de la línea Rubí con excelente relación calidad-precio.",
            almohadas,
            &[("70cm x 50cm", 6.45)],
            // Override slug to match the image file
            Some("almohada-chaide-rubi"),
        ),
        product(
            "Almohada Hotelera",
            "Almohada de calidad hotelera disponible en dos tamaños.",
            almohadas,
            &[("70cm x 50cm", 10.85), ("90cm x 50cm", 10.85)],
            None,
        ),
        product(
            "Almohada Modelo Bianca",
            "Almohada de espuma viscoelástica, diseño ergonómico para máximo confort.",
            almohadas,
            &[("60cm x 40cm", 4.35)],
            Some("almohada-modelo-bianca"),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_shape() {
        let products = products();
        assert_eq!(products.len(), 26);
        assert_eq!(
            products
                .iter()
                .filter(|p| p.category_id == brand::categories::COLCHONES)
                .count(),
            14
        );
        assert_eq!(
            products
                .iter()
                .filter(|p| p.category_id == brand::categories::ALMOHADAS)
                .count(),
            12
        );
    }

    #[test]
    fn test_slugs_unique_and_all_active() {
        let products = products();
        let mut slugs: Vec<&str> = products.iter().map(|p| p.slug.as_str()).collect();
        slugs.sort();
        slugs.dedup();
        assert_eq!(slugs.len(), products.len());
        assert!(products.iter().all(|p| p.is_active));
    }

    #[test]
    fn test_category_ids_resolve() {
        let ids: Vec<String> = categories().into_iter().map(|c| c.id).collect();
        for p in products() {
            assert!(ids.contains(&p.category_id), "dangling category for {}", p.slug);
        }
    }

    #[test]
    fn test_every_seeded_product_has_mapped_image() {
        for p in products() {
            assert!(p.image_url.starts_with("/images/"), "unmapped image for {}", p.slug);
        }
    }
}
