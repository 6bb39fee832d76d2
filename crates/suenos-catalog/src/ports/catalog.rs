//! Catalog repository trait

use crate::types::{Category, Product};
use crate::Result;
use async_trait::async_trait;

/// Read-mostly catalog store.
///
/// Both backends (the in-memory mock and the remote row store) satisfy
/// this contract, so presentation code never knows which one it holds.
/// There is no caching layer behind these methods; every call is a fresh
/// scan or query.
#[async_trait]
pub trait CatalogRepo: Send + Sync {
    /// All categories, sorted by name ascending.
    async fn get_categories(&self) -> Result<Vec<Category>>;

    /// Active products in one category, sorted by name ascending.
    /// An unknown `category_id` yields an empty vec, not an error.
    async fn get_products_by_category(&self, category_id: &str) -> Result<Vec<Product>>;

    /// Single active product by slug. Inactive products behave exactly
    /// like missing ones: `Ok(None)`.
    async fn get_product_by_slug(&self, slug: &str) -> Result<Option<Product>>;

    /// All active products, sorted by name ascending.
    async fn get_all_products(&self) -> Result<Vec<Product>>;

    /// Set the visibility flag for the product with this slug.
    async fn update_product_active_state(&self, slug: &str, is_active: bool) -> Result<()>;
}
