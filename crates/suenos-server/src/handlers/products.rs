//! Product handlers

use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use suenos_catalog::whatsapp::{build_whatsapp_link, Inquiry};
use suenos_catalog::Product;

#[derive(Debug, Serialize)]
pub struct ProductListResponse {
    products: Vec<Product>,
}

pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<ProductListResponse>, StatusCode> {
    match state.repo.get_all_products().await {
        Ok(products) => Ok(Json(ProductListResponse { products })),
        Err(e) => {
            tracing::error!("Failed to list products: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    product: Product,
    /// Prefilled wa.me inquiry link for the detail page.
    whatsapp_url: String,
}

pub async fn get(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ProductResponse>, StatusCode> {
    match state.repo.get_product_by_slug(&slug).await {
        Ok(Some(product)) => {
            let inquiry = Inquiry {
                product_name: product.name.clone(),
                option: None,
                price: product.options.first().map(|o| o.price),
            };
            Ok(Json(ProductResponse {
                whatsapp_url: build_whatsapp_link(Some(&inquiry)),
                product,
            }))
        }
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to get product {}: {}", slug, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ActivateRequest {
    is_active: bool,
}

#[derive(Debug, Serialize)]
pub struct ActivateResponse {
    success: bool,
}

/// Toggle product visibility. Unknown slugs are a successful no-op, so
/// the response only turns into an error when the store itself fails.
pub async fn activate(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(req): Json<ActivateRequest>,
) -> Result<Json<ActivateResponse>, StatusCode> {
    match state
        .repo
        .update_product_active_state(&slug, req.is_active)
        .await
    {
        Ok(()) => Ok(Json(ActivateResponse { success: true })),
        Err(e) => {
            tracing::error!("Failed to update active state for {}: {}", slug, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
