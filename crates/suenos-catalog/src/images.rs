//! Image path resolution
//!
//! Maps product slugs to display-image paths so product data stays
//! decoupled from image file naming conventions. Slugs without a mapped
//! image resolve to an inline SVG placeholder.

/// Placeholder for missing images (inline SVG data URI).
pub const PLACEHOLDER_IMAGE: &str = "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 400 300'%3E%3Crect fill='%23D5D7D6' width='400' height='300'/%3E%3Ctext fill='%23677789' x='50%25' y='50%25' text-anchor='middle' dy='.3em' font-family='sans-serif' font-size='16'%3EImagen no disponible%3C/text%3E%3C/svg%3E";

/// Image paths by product slug.
pub const PRODUCT_IMAGES: &[(&str, &str)] = &[
    // Colchones
    ("alternativa", "/images/colchones/colchon-modelo-alternativa.png"),
    ("zafiro-24cm", "/images/colchones/colchon-modelo-zafiro-24cm.png"),
    ("zafiro-29cm", "/images/colchones/colchon-modelo-zafiro-29cm.png"),
    ("imperial-23", "/images/colchones/colchon-modelo-imperial-23.png"),
    ("imperial-30", "/images/colchones/colchon-modelo-imperial-30.png"),
    ("suave-brisa", "/images/colchones/colchon-modelo-suave-brisa.png"),
    (
        "continental-de-lujo-tradicional",
        "/images/colchones/colchon-modelo-continental-lujo-tradicional.png",
    ),
    (
        "continental-de-lujo-pillow-top",
        "/images/colchones/colchon-modelo-continental-lujo-pillow-top.png",
    ),
    ("dream-box-soft", "/images/colchones/colchon-modelo-dream-box-soft.png"),
    ("continental-de-lujo-fb", "/images/colchones/colchon-modelo-continental-fb.png"),
    ("fussion", "/images/colchones/colchon-modelo-fussion.png"),
    ("dream-box-mf", "/images/colchones/colchon-modelo-dream-box-mf.png"),
    ("prensado-clinico", "/images/colchones/colchon-modelo-prensado-clinico.png"),
    ("restapedic", "/images/colchones/colchon-modelo-restapedic.png"),
    // Almohadas
    (
        "almohada-low-back-bamboo",
        "/images/almohadas/almohada-modelo-low-back-bamboo.png",
    ),
    (
        "almohada-cervical-memory-foam-fresh",
        "/images/almohadas/almohada-modelo-cervical-memory-foam-fresh.png",
    ),
    (
        "almohada-memory-foam-king-fresh",
        "/images/almohadas/almohada-modelo-memory-foam-king-fresh.png",
    ),
    (
        "almohada-cervical-fresh-air",
        "/images/almohadas/almohada-modelo-cervical-fresh-air.png",
    ),
    (
        "almohada-antireflujo-vita-pillow",
        "/images/almohadas/almohada-modelo-antireflujo-vita-pillow.png",
    ),
    (
        "almohada-memory-foam-lavanda",
        "/images/almohadas/almohada-modelo-memory-foam-lavanda.png",
    ),
    (
        "almohada-memory-foam-manzanilla",
        "/images/almohadas/almohada-modelo-memory-foam-manzanilla.png",
    ),
    ("almohada-dual-confort", "/images/almohadas/almohada-modelo-dual-confort.png"),
    ("almohada-aurora-soft", "/images/almohadas/almohada-modelo-aurora-soft.png"),
    ("almohada-chaide-rubi", "/images/almohadas/almohada-modelo-rubi.png"),
    ("almohada-hotelera", "/images/almohadas/almohada-modelo-hotelera.png"),
    ("almohada-modelo-bianca", "/images/almohadas/almohada-modelo-bianca.png"),
];

/// Get the image path for a product slug, falling back to the placeholder.
pub fn product_image(slug: &str) -> &'static str {
    PRODUCT_IMAGES
        .iter()
        .find(|(s, _)| *s == slug)
        .map(|(_, path)| *path)
        .unwrap_or(PLACEHOLDER_IMAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapped_slug() {
        assert_eq!(
            product_image("zafiro-24cm"),
            "/images/colchones/colchon-modelo-zafiro-24cm.png"
        );
        assert_eq!(
            product_image("almohada-chaide-rubi"),
            "/images/almohadas/almohada-modelo-rubi.png"
        );
    }

    #[test]
    fn test_unmapped_slug_gets_placeholder() {
        assert_eq!(product_image("no-such-product"), PLACEHOLDER_IMAGE);
        assert!(!product_image("no-such-product").is_empty());
    }
}
