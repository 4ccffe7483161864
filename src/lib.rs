//! Employee domain value objects for the Composable Information Machine
//!
//! Self-validating, immutable wrappers for the primitives an employee record
//! is built from. Boundary layers (HTTP handlers, persistence, rendering)
//! construct these from raw input and serialize them back to primitives.

pub mod domain;
pub mod errors;

// Re-export commonly used types
pub use domain::{
    InvalidAmount, InvalidPercentage, InvalidRegistration, MonetaryAmount, PercentageError,
    RegistrationId,
};
pub use errors::{DomainError, DomainResult};
