//! Error types for employee domain operations

use thiserror::Error;

use crate::domain::{InvalidAmount, InvalidPercentage, InvalidRegistration, PercentageError};

/// Errors that can occur when building employee value objects from raw input
///
/// Each value object reports its own closed error enum; this type collects
/// them for callers that handle several value objects at once.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Registration number rejected
    #[error("Invalid registration number: {0}")]
    Registration(#[from] InvalidRegistration),

    /// Monetary amount rejected
    #[error("Invalid amount: {0}")]
    Amount(#[from] InvalidAmount),

    /// Percentage rejected
    #[error("Invalid percentage: {0}")]
    Percentage(#[from] InvalidPercentage),

    /// Text input is not a decimal number
    #[error("Not a decimal number: {0:?}")]
    Unparseable(String),
}

/// Result type for employee domain operations
pub type DomainResult<T> = Result<T, DomainError>;

impl From<PercentageError> for DomainError {
    fn from(err: PercentageError) -> Self {
        match err {
            PercentageError::Percentage(inner) => DomainError::Percentage(inner),
            PercentageError::Amount(inner) => DomainError::Amount(inner),
        }
    }
}
