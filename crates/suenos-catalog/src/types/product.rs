//! Product types

use serde::{Deserialize, Serialize};

/// A purchasable size/variant of a product.
///
/// Options have no identity of their own; their order within the parent
/// product is the display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductOption {
    pub label: String,
    /// Non-negative amount in the store currency.
    pub price: f64,
}

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// URL-safe identifier, unique across the catalog, immutable.
    pub slug: String,
    pub name: String,
    pub description: String,
    /// References `Category::id`.
    pub category_id: String,
    pub options: Vec<ProductOption>,
    /// Resolved display path. The mock backend guarantees a placeholder
    /// when no image is mapped; the remote backend may yield "".
    pub image_url: String,
    /// Visibility flag; inactive products are invisible to all reads.
    pub is_active: bool,
}
