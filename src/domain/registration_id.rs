// Copyright (c) 2025 - Cowboy AI, Inc.
//! Employee Registration Number Value Object

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

use super::invariants;
use crate::errors::DomainError;

/// Registration number validation error
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InvalidRegistration {
    #[error("Registration number must be positive")]
    NotPositive,

    #[error("Registration number must have 5 or 6 digits, got {0}")]
    BadLength(u32),

    #[error("Registration number must be a whole number")]
    NotInteger,
}

/// Employee registration number value object
///
/// Wraps a positive whole number with invariants:
/// - Value > 0
/// - 5 or 6 decimal digits
/// - No fractional component
///
/// The only way to obtain a `RegistrationId` is through [`RegistrationId::new`]
/// (or the `TryFrom`/`FromStr`/`Deserialize` paths that delegate to it).
///
/// # Examples
///
/// ```rust
/// use cim_domain_employee::domain::RegistrationId;
/// use rust_decimal::Decimal;
///
/// let id = RegistrationId::new(Decimal::from(12345)).unwrap();
/// assert_eq!(id.value(), 12345);
///
/// assert!(RegistrationId::try_from(1234_i64).is_err()); // Too short
/// assert!(RegistrationId::try_from(0_i64).is_err()); // Not positive
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "Decimal")]
pub struct RegistrationId(u32);

impl RegistrationId {
    /// Fewest digits a registration number may have
    pub const MIN_DIGITS: u32 = invariants::MIN_REGISTRATION_DIGITS;

    /// Most digits a registration number may have
    pub const MAX_DIGITS: u32 = invariants::MAX_REGISTRATION_DIGITS;

    /// Create a new registration number with validation
    ///
    /// # Invariants (first violation reported)
    /// 1. `NotPositive` if `raw <= 0`
    /// 2. `BadLength` if the integer part has fewer than 5 or more than 6 digits
    /// 3. `NotInteger` if `raw` has a fractional component
    pub fn new(raw: Decimal) -> Result<Self, InvalidRegistration> {
        invariants::validate_registration(raw).map_err(|error| {
            debug!(%raw, %error, "Rejected registration number");
            error
        })?;

        raw.to_u32()
            .map(Self)
            .ok_or(InvalidRegistration::NotInteger)
    }

    /// Get the registration number
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Canonical primitive form for storage and wire formats
    pub fn serialize(&self) -> u32 {
        self.0
    }

    /// Structural equality on the wrapped value
    pub fn equals(&self, other: &Self) -> bool {
        self == other
    }
}

impl fmt::Display for RegistrationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<RegistrationId> for u32 {
    fn from(id: RegistrationId) -> Self {
        id.0
    }
}

impl TryFrom<Decimal> for RegistrationId {
    type Error = InvalidRegistration;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<i64> for RegistrationId {
    type Error = InvalidRegistration;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(Decimal::from(value))
    }
}

impl TryFrom<u32> for RegistrationId {
    type Error = InvalidRegistration;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(Decimal::from(value))
    }
}

impl FromStr for RegistrationId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = Decimal::from_str(s.trim())
            .map_err(|_| DomainError::Unparseable(s.to_string()))?;
        Ok(Self::new(raw)?)
    }
}
