//! Error types for the catalog layer

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

/// Failures a repository backend can surface.
///
/// "Not found" is not represented here: single-item lookups return
/// `Ok(None)` and list queries return an empty vec.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Store request failed: {0}")]
    Transport(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Malformed store response: {0}")]
    Decode(String),
}
