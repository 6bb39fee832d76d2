//! In-memory catalog backend seeded from the inventory dataset

use async_trait::async_trait;
use tokio::sync::RwLock;

use suenos_catalog::{CatalogRepo, Category, Product, Result};

use super::seed;

/// Array-backed catalog, seeded once at construction.
///
/// Reads clone out of the backing vec so callers get snapshots that can
/// never alias the store. The lock exists for `update_product_active_state`:
/// handlers run on a multi-threaded runtime, so the flag mutation must not
/// race concurrent scans. Changes live for the process lifetime only.
pub struct MockCatalog {
    categories: Vec<Category>,
    products: RwLock<Vec<Product>>,
}

impl MockCatalog {
    pub fn new() -> Self {
        Self {
            categories: seed::categories(),
            products: RwLock::new(seed::products()),
        }
    }
}

impl Default for MockCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogRepo for MockCatalog {
    async fn get_categories(&self) -> Result<Vec<Category>> {
        let mut categories = self.categories.clone();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }

    async fn get_products_by_category(&self, category_id: &str) -> Result<Vec<Product>> {
        let products = self.products.read().await;
        let mut matches: Vec<Product> = products
            .iter()
            .filter(|p| p.category_id == category_id && p.is_active)
            .cloned()
            .collect();
        matches.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(matches)
    }

    async fn get_product_by_slug(&self, slug: &str) -> Result<Option<Product>> {
        let products = self.products.read().await;
        Ok(products
            .iter()
            .find(|p| p.slug == slug && p.is_active)
            .cloned())
    }

    async fn get_all_products(&self) -> Result<Vec<Product>> {
        let products = self.products.read().await;
        let mut matches: Vec<Product> =
            products.iter().filter(|p| p.is_active).cloned().collect();
        matches.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(matches)
    }

    async fn update_product_active_state(&self, slug: &str, is_active: bool) -> Result<()> {
        let mut products = self.products.write().await;
        // Unknown slugs are a no-op, not an error
        if let Some(product) = products.iter_mut().find(|p| p.slug == slug) {
            product.is_active = is_active;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use suenos_catalog::brand;
    use suenos_catalog::images::PLACEHOLDER_IMAGE;

    #[tokio::test]
    async fn test_categories_sorted_by_name() {
        let repo = MockCatalog::new();
        let categories = repo.get_categories().await.unwrap();
        let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Almohadas", "Colchones"]);
    }

    #[tokio::test]
    async fn test_get_product_by_slug() {
        let repo = MockCatalog::new();

        let product = repo.get_product_by_slug("zafiro-24cm").await.unwrap();
        let product = product.expect("seeded product should be visible");
        assert_eq!(product.name, "Zafiro 24cm");
        assert_eq!(product.category_id, brand::categories::COLCHONES);
        assert_eq!(product.options.len(), 2);

        assert!(repo.get_product_by_slug("no-such-slug").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_slug_overrides_kept_verbatim() {
        let repo = MockCatalog::new();
        // These carry explicit overrides in the seed; the lookup must use
        // the override, not a re-derived form.
        for slug in ["almohada-chaide-rubi", "prensado-clinico", "almohada-modelo-bianca"] {
            assert!(
                repo.get_product_by_slug(slug).await.unwrap().is_some(),
                "missing {}",
                slug
            );
        }
    }

    #[tokio::test]
    async fn test_products_by_category_filtered_and_sorted() {
        let repo = MockCatalog::new();

        let colchones = repo
            .get_products_by_category(brand::categories::COLCHONES)
            .await
            .unwrap();
        assert_eq!(colchones.len(), 14);
        assert!(colchones.iter().all(|p| p.category_id == brand::categories::COLCHONES));
        let names: Vec<&str> = colchones.iter().map(|p| p.name.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[tokio::test]
    async fn test_unknown_category_is_empty() {
        let repo = MockCatalog::new();
        let products = repo.get_products_by_category("sabanas").await.unwrap();
        assert!(products.is_empty());
    }

    #[tokio::test]
    async fn test_deactivate_hides_product_everywhere() {
        let repo = MockCatalog::new();
        let before = repo.get_all_products().await.unwrap().len();

        repo.update_product_active_state("fussion", false).await.unwrap();

        assert!(repo.get_product_by_slug("fussion").await.unwrap().is_none());
        assert_eq!(repo.get_all_products().await.unwrap().len(), before - 1);
        assert!(repo
            .get_products_by_category(brand::categories::COLCHONES)
            .await
            .unwrap()
            .iter()
            .all(|p| p.slug != "fussion"));

        repo.update_product_active_state("fussion", true).await.unwrap();
        assert!(repo.get_product_by_slug("fussion").await.unwrap().is_some());
        assert_eq!(repo.get_all_products().await.unwrap().len(), before);
    }

    #[tokio::test]
    async fn test_update_unknown_slug_is_noop() {
        let repo = MockCatalog::new();
        let before = repo.get_all_products().await.unwrap();
        repo.update_product_active_state("no-such-slug", false).await.unwrap();
        assert_eq!(repo.get_all_products().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_returned_products_are_snapshots() {
        let repo = MockCatalog::new();
        let mut product = repo
            .get_product_by_slug("restapedic")
            .await
            .unwrap()
            .unwrap();
        product.name = "Mutated".to_string();
        product.is_active = false;

        let again = repo.get_product_by_slug("restapedic").await.unwrap().unwrap();
        assert_eq!(again.name, "Restapedic");
        assert!(again.is_active);
    }

    #[tokio::test]
    async fn test_unmapped_slug_seeds_placeholder_image() {
        // A product whose derived slug has no image table entry falls back
        // to the inline SVG placeholder, never an empty string.
        let product = seed::product(
            "Modelo Sin Foto",
            "Producto de prueba.",
            brand::categories::COLCHONES,
            &[("2 Plazas", 99.0)],
            None,
        );
        assert_eq!(product.slug, "modelo-sin-foto");
        assert_eq!(product.image_url, PLACEHOLDER_IMAGE);
        assert!(!product.image_url.is_empty());
    }
}
