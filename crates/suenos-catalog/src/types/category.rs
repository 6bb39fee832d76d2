//! Category types

use serde::{Deserialize, Serialize};

/// A product category. Small, closed, rarely-changing set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Stable identifier, the foreign-key target of `Product::category_id`.
    pub id: String,
    pub name: String,
    pub slug: String,
}
