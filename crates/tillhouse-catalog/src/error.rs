//! Error types for catalog construction.
//!
//! Errors can only surface while a catalog is being built or parsed, at
//! process start. Every read operation on a constructed catalog is
//! infallible: unknown names yield absent or empty results, never errors.

use thiserror::Error;

/// Errors raised while building a capability catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two capabilities in the definition share a name.
    #[error("duplicate capability name: {0}")]
    DuplicateName(String),

    /// The catalog definition document could not be parsed.
    #[error("failed to parse catalog definition: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type for catalog operations.
pub type CatalogResult<T> = std::result::Result<T, CatalogError>;
