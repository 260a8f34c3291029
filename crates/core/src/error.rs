//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// invariants). Infrastructure concerns (file IO, malformed persisted data)
/// belong to the store layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. input mode does not match the category).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A direct quantity input was negative. Rejected before any side effect.
    #[error("quantity cannot be negative: {0}")]
    NegativeInput(i64),

    /// The named category is not part of the catalog.
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// The named product is not part of the category.
    #[error("unknown product {product:?} in category {category:?}")]
    UnknownProduct { category: String, product: String },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn unknown_category(name: impl Into<String>) -> Self {
        Self::UnknownCategory(name.into())
    }

    pub fn unknown_product(category: impl Into<String>, product: impl Into<String>) -> Self {
        Self::UnknownProduct {
            category: category.into(),
            product: product.into(),
        }
    }
}
