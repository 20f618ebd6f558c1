//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic failures of the floor model (bad input,
/// broken catalog invariants, lookups that hit nothing).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. empty product name, bad layout).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A location code could not be parsed or is not on the floor.
    #[error("invalid location: {0}")]
    InvalidLocation(String),

    /// The catalog breaks the one-product-per-location invariant.
    #[error("catalog integrity violated: {0}")]
    CatalogIntegrity(String),

    /// A requested location holds no product.
    #[error("not found: {0}")]
    NotFound(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_location(msg: impl Into<String>) -> Self {
        Self::InvalidLocation(msg.into())
    }

    pub fn catalog_integrity(msg: impl Into<String>) -> Self {
        Self::CatalogIntegrity(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_render_with_their_category() {
        assert_eq!(
            DomainError::invalid_location("x5").to_string(),
            "invalid location: x5"
        );
        assert_eq!(
            DomainError::catalog_integrity("b3 holds 2 products").to_string(),
            "catalog integrity violated: b3 holds 2 products"
        );
    }
}
