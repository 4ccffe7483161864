// Copyright (c) 2025 - Cowboy AI, Inc.
//! Employee Domain Models
//!
//! Value objects with validation invariants used by the employee aggregate.
//! Every value object is immutable and can only be obtained through a
//! validating constructor, so an aggregate holding them never carries an
//! illegal primitive.
//!
//! # Value Objects with Invariants
//!
//! - [`RegistrationId`] - Positive whole number with 5 or 6 digits
//! - [`MonetaryAmount`] - Positive decimal with at most 2 fractional digits
//!
//! # Invariants
//!
//! Shared rule sets live in [`invariants`] as pure functions.

pub mod invariants;
pub mod monetary_amount;
pub mod registration_id;

// Re-export value objects
pub use monetary_amount::{InvalidAmount, InvalidPercentage, MonetaryAmount, PercentageError};
pub use registration_id::{InvalidRegistration, RegistrationId};
