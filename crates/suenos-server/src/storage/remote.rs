//! Remote catalog backend
//!
//! Thin adapter over a PostgREST-style row store (Supabase shape): every
//! port method is a single HTTP query against `{base}/rest/v1/…`, rows are
//! mapped into domain objects on the way out. No caching, no retries; a
//! failed call surfaces immediately.

use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use suenos_catalog::{CatalogError, CatalogRepo, Category, Product, Result};

/// Environment variables carrying the store connection values. Both are
/// required; a half-configured client must refuse to start.
pub const ENV_STORE_URL: &str = "SUPABASE_URL";
pub const ENV_STORE_KEY: &str = "SUPABASE_ANON_KEY";

const PRODUCT_COLUMNS: &str = "slug,name,description,category_id,options,image_url,is_active";
const CATEGORY_COLUMNS: &str = "id,name,slug";

/// PostgREST error code for "zero rows" when a single object was requested.
const PGRST_NO_ROWS: &str = "PGRST116";

pub struct RemoteCatalog {
    http: Client,
    base_url: String,
    anon_key: String,
}

impl RemoteCatalog {
    /// Read the connection values from the environment. Missing values are
    /// a configuration error, to be raised once at startup.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var(ENV_STORE_URL);
        let anon_key = std::env::var(ENV_STORE_KEY);
        match (base_url, anon_key) {
            (Ok(base_url), Ok(anon_key)) => Ok(Self::new(base_url, anon_key)),
            _ => Err(CatalogError::Config(format!(
                "store env vars missing: {} and/or {} must be set",
                ENV_STORE_URL, ENV_STORE_KEY
            ))),
        }
    }

    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn get(&self, table: &str) -> reqwest::RequestBuilder {
        self.http
            .get(self.table_url(table))
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
    }

    /// Fetch a list query and decode the row array.
    async fn fetch_rows<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<Vec<T>> {
        let response = request
            .send()
            .await
            .map_err(|e| CatalogError::Transport(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(store_error(status, &body));
        }
        serde_json::from_str(&body).map_err(|e| CatalogError::Decode(e.to_string()))
    }
}

#[async_trait]
impl CatalogRepo for RemoteCatalog {
    async fn get_categories(&self) -> Result<Vec<Category>> {
        let rows: Vec<CategoryRow> = self
            .fetch_rows(
                self.get("categories")
                    .query(&[("select", CATEGORY_COLUMNS), ("order", "name.asc")]),
            )
            .await?;
        Ok(rows.into_iter().map(Category::from).collect())
    }

    async fn get_products_by_category(&self, category_id: &str) -> Result<Vec<Product>> {
        let category_filter = format!("eq.{}", category_id);
        let rows: Vec<ProductRow> = self
            .fetch_rows(self.get("products").query(&[
                ("select", PRODUCT_COLUMNS),
                ("category_id", category_filter.as_str()),
                ("is_active", "eq.true"),
                ("order", "name.asc"),
            ]))
            .await?;
        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn get_product_by_slug(&self, slug: &str) -> Result<Option<Product>> {
        let slug_filter = format!("eq.{}", slug);
        let response = self
            .get("products")
            .query(&[
                ("select", PRODUCT_COLUMNS),
                ("slug", slug_filter.as_str()),
                ("is_active", "eq.true"),
            ])
            // Single-object mode: zero rows becomes a PGRST116 error body
            // instead of an empty array
            .header(header::ACCEPT, "application/vnd.pgrst.object+json")
            .send()
            .await
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        if status.is_success() {
            let row: ProductRow =
                serde_json::from_str(&body).map_err(|e| CatalogError::Decode(e.to_string()))?;
            return Ok(Some(row.into()));
        }

        let parsed: StoreErrorBody = serde_json::from_str(&body).unwrap_or_default();
        if parsed.code == PGRST_NO_ROWS {
            // Absent or inactive: a normal empty result
            Ok(None)
        } else {
            Err(store_error(status, &body))
        }
    }

    async fn get_all_products(&self) -> Result<Vec<Product>> {
        let rows: Vec<ProductRow> = self
            .fetch_rows(self.get("products").query(&[
                ("select", PRODUCT_COLUMNS),
                ("is_active", "eq.true"),
                ("order", "name.asc"),
            ]))
            .await?;
        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn update_product_active_state(&self, slug: &str, is_active: bool) -> Result<()> {
        let slug_filter = format!("eq.{}", slug);
        let response = self
            .http
            .patch(self.table_url("products"))
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .query(&[("slug", slug_filter.as_str())])
            .header("Prefer", "return=minimal")
            .json(&serde_json::json!({ "is_active": is_active }))
            .send()
            .await
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            // Zero matched rows still answers 2xx; that is not an error
            Ok(())
        } else {
            let body = response
                .text()
                .await
                .map_err(|e| CatalogError::Transport(e.to_string()))?;
            Err(store_error(status, &body))
        }
    }
}

/// Product row as stored remotely. The lenient columns keep their raw JSON
/// shape so mapping can normalize them instead of failing the whole query.
#[derive(Debug, Deserialize)]
struct ProductRow {
    slug: String,
    name: String,
    description: String,
    category_id: String,
    #[serde(default)]
    options: Value,
    #[serde(default)]
    image_url: Option<String>,
    #[serde(default)]
    is_active: Value,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            slug: row.slug,
            name: row.name,
            description: row.description,
            category_id: row.category_id,
            // Anything that is not an array of {label, price} becomes empty
            options: serde_json::from_value(row.options).unwrap_or_default(),
            image_url: row.image_url.unwrap_or_default(),
            // Only the literal boolean counts; null/1/"true" stay inactive
            is_active: matches!(row.is_active, Value::Bool(true)),
        }
    }
}

#[derive(Debug, Deserialize)]
struct CategoryRow {
    id: String,
    name: String,
    slug: String,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Category {
            id: row.id,
            name: row.name,
            slug: row.slug,
        }
    }
}

/// Error body as reported by the store.
#[derive(Debug, Default, Deserialize)]
struct StoreErrorBody {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
}

fn store_error(status: StatusCode, body: &str) -> CatalogError {
    let parsed: StoreErrorBody = serde_json::from_str(body).unwrap_or_default();
    if parsed.message.is_empty() {
        CatalogError::Store(format!("HTTP {}", status))
    } else {
        CatalogError::Store(format!("{} ({})", parsed.message, parsed.code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn product_row(value: Value) -> ProductRow {
        serde_json::from_value(value).expect("row should deserialize")
    }

    #[test]
    fn test_well_formed_row_maps_through() {
        let product: Product = product_row(json!({
            "slug": "zafiro-24cm",
            "name": "Zafiro 24cm",
            "description": "Colchón Zafiro con altura de 24cm.",
            "category_id": "colchones",
            "options": [
                { "label": "1 ½ Plaza", "price": 73.0 },
                { "label": "2 Plazas", "price": 87.0 }
            ],
            "image_url": "/images/colchones/colchon-modelo-zafiro-24cm.png",
            "is_active": true
        }))
        .into();

        assert_eq!(product.slug, "zafiro-24cm");
        assert_eq!(product.options.len(), 2);
        assert_eq!(product.options[1].price, 87.0);
        assert!(product.is_active);
    }

    #[test]
    fn test_non_array_options_coerce_to_empty() {
        for options in [json!(null), json!("1 Plaza"), json!(42), json!({"label": "x"})] {
            let product: Product = product_row(json!({
                "slug": "s",
                "name": "n",
                "description": "d",
                "category_id": "colchones",
                "options": options,
                "image_url": "/img.png",
                "is_active": true
            }))
            .into();
            assert!(product.options.is_empty());
        }
    }

    #[test]
    fn test_missing_options_column_coerces_to_empty() {
        let product: Product = product_row(json!({
            "slug": "s",
            "name": "n",
            "description": "d",
            "category_id": "colchones",
            "image_url": "/img.png",
            "is_active": true
        }))
        .into();
        assert!(product.options.is_empty());
    }

    #[test]
    fn test_missing_image_url_maps_to_empty_string() {
        // The remote backend yields "" here; only the mock backend
        // substitutes the placeholder
        let null_image: Product = product_row(json!({
            "slug": "s",
            "name": "n",
            "description": "d",
            "category_id": "colchones",
            "options": [],
            "image_url": null,
            "is_active": true
        }))
        .into();
        assert_eq!(null_image.image_url, "");

        let absent_image: Product = product_row(json!({
            "slug": "s",
            "name": "n",
            "description": "d",
            "category_id": "colchones",
            "options": [],
            "is_active": true
        }))
        .into();
        assert_eq!(absent_image.image_url, "");
    }

    #[test]
    fn test_is_active_requires_literal_true() {
        for (value, expected) in [
            (json!(true), true),
            (json!(false), false),
            (json!(null), false),
            (json!(1), false),
            (json!("true"), false),
        ] {
            let product: Product = product_row(json!({
                "slug": "s",
                "name": "n",
                "description": "d",
                "category_id": "colchones",
                "options": [],
                "image_url": "/img.png",
                "is_active": value
            }))
            .into();
            assert_eq!(product.is_active, expected);
        }
    }

    #[test]
    fn test_store_error_extracts_message() {
        let err = store_error(
            StatusCode::BAD_REQUEST,
            r#"{"code":"22P02","message":"invalid input syntax","details":null}"#,
        );
        assert!(err.to_string().contains("invalid input syntax"));

        let err = store_error(StatusCode::BAD_GATEWAY, "<html>nope</html>");
        assert!(err.to_string().contains("502"));
    }

    #[test]
    fn test_no_rows_code_is_recognized() {
        let parsed: StoreErrorBody = serde_json::from_str(
            r#"{"code":"PGRST116","message":"JSON object requested, multiple (or no) rows returned","details":"The result contains 0 rows"}"#,
        )
        .unwrap();
        assert_eq!(parsed.code, PGRST_NO_ROWS);
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let repo = RemoteCatalog::new("https://example.supabase.co/", "anon-key");
        assert_eq!(
            repo.table_url("products"),
            "https://example.supabase.co/rest/v1/products"
        );
    }
}
