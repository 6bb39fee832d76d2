//! Category handlers

use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use suenos_catalog::{Category, Product};

#[derive(Debug, Serialize)]
pub struct CategoryListResponse {
    categories: Vec<Category>,
}

pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<CategoryListResponse>, StatusCode> {
    match state.repo.get_categories().await {
        Ok(categories) => Ok(Json(CategoryListResponse { categories })),
        Err(e) => {
            tracing::error!("Failed to list categories: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CategoryProductsResponse {
    products: Vec<Product>,
}

/// Active products of one category. An unknown category id is an empty
/// list, matching the repository contract.
pub async fn products(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CategoryProductsResponse>, StatusCode> {
    match state.repo.get_products_by_category(&id).await {
        Ok(products) => Ok(Json(CategoryProductsResponse { products })),
        Err(e) => {
            tracing::error!("Failed to list products for category {}: {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
