// Copyright (c) 2025 - Cowboy AI, Inc.
//! Monetary Amount Value Object with Replacement Arithmetic
//!
//! Salary amounts are strictly positive decimals with at most two fractional
//! digits. Arithmetic never mutates the receiver: `add`, `subtract` and
//! `increase_by_percentage` return a fresh, fully re-validated instance or a
//! typed error. Nothing is rounded or clamped.
//!
//! Arithmetic runs on whole cents in `i128`, so a result is either exact or
//! rejected. Amounts are stored in canonical form: two fractional digits
//! whenever the decimal can hold them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

use super::invariants;
use crate::errors::DomainError;

/// Monetary amount validation error
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InvalidAmount {
    #[error("Amount cannot be negative")]
    Negative,

    #[error("Amount must be greater than zero")]
    Zero,

    #[error("Amount allows at most 2 decimal places, got {0}")]
    TooPrecise(u32),

    #[error("Amount cannot be represented exactly")]
    Overflow,
}

/// Percentage validation error
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InvalidPercentage {
    #[error("Percentage must be greater than zero")]
    NotPositive,

    #[error("Percentage cannot exceed 100")]
    OutOfRange,
}

/// Failure of [`MonetaryAmount::increase_by_percentage`]
///
/// Either the percentage itself is illegal, or the raised amount fails
/// re-validation (for example it ends up with more than two decimal places).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PercentageError {
    #[error(transparent)]
    Percentage(#[from] InvalidPercentage),

    #[error(transparent)]
    Amount(#[from] InvalidAmount),
}

/// Monetary amount value object
///
/// Invariants:
/// - Amount > 0 (zero is rejected, not only negatives)
/// - At most 2 fractional digits (trailing zeros do not count)
///
/// # Examples
///
/// ```rust
/// use cim_domain_employee::domain::MonetaryAmount;
/// use rust_decimal::Decimal;
///
/// let salary = MonetaryAmount::new(Decimal::from(5000)).unwrap();
/// let raised = salary.add(Decimal::from(1000)).unwrap();
/// assert_eq!(raised.amount(), Decimal::from(6000));
/// assert_eq!(salary.amount(), Decimal::from(5000));
///
/// assert!(MonetaryAmount::new(Decimal::ZERO).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "Decimal", try_from = "Decimal")]
pub struct MonetaryAmount(Decimal);

impl MonetaryAmount {
    /// Maximum number of fractional digits
    pub const MAX_FRACTIONAL_DIGITS: u32 = invariants::MAX_FRACTIONAL_DIGITS;

    /// Create a new amount with validation
    ///
    /// # Invariants (first violation reported)
    /// 1. `Negative` if `raw < 0`
    /// 2. `Zero` if `raw == 0`
    /// 3. `TooPrecise` if `raw` has more than 2 fractional digits
    ///
    /// The stored value equals `raw` numerically but is rescaled to two
    /// fractional digits, so `1100.000` and `1100` both serialize as `1100.00`.
    pub fn new(raw: Decimal) -> Result<Self, InvalidAmount> {
        invariants::validate_amount(raw).map_err(|error| rejected("new", raw, error))?;

        let canonical = to_cents(raw)
            .and_then(from_cents)
            .ok_or_else(|| rejected("new", raw, InvalidAmount::Overflow))?;

        Ok(Self(canonical))
    }

    /// Get the amount
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Canonical primitive form for storage and wire formats
    pub fn serialize(&self) -> Decimal {
        self.0
    }

    /// Structural (numeric) equality, so `10.5` equals `10.50`
    pub fn equals(&self, other: &Self) -> bool {
        self == other
    }

    /// Return a new amount increased by `delta`
    ///
    /// `delta` must itself satisfy the creation invariants: a zero or
    /// negative delta is rejected exactly like a zero or negative amount.
    pub fn add(&self, delta: Decimal) -> Result<Self, InvalidAmount> {
        invariants::validate_amount(delta).map_err(|error| rejected("add", delta, error))?;

        let sum = to_cents(self.0)
            .zip(to_cents(delta))
            .and_then(|(base, delta)| base.checked_add(delta))
            .and_then(from_cents)
            .ok_or_else(|| rejected("add", delta, InvalidAmount::Overflow))?;

        Self::new(sum)
    }

    /// Return a new amount decreased by `delta`
    ///
    /// `delta` may be zero but not negative. A negative result fails with
    /// `Negative`; a result of exactly zero fails with `Zero`, since a zero
    /// amount cannot exist.
    pub fn subtract(&self, delta: Decimal) -> Result<Self, InvalidAmount> {
        invariants::validate_deduction(delta)
            .map_err(|error| rejected("subtract", delta, error))?;

        let difference = to_cents(self.0)
            .zip(to_cents(delta))
            .and_then(|(base, delta)| base.checked_sub(delta))
            .ok_or_else(|| rejected("subtract", delta, InvalidAmount::Overflow))?;

        if difference < 0 {
            return Err(rejected("subtract", delta, InvalidAmount::Negative));
        }

        let difference = from_cents(difference)
            .ok_or_else(|| rejected("subtract", delta, InvalidAmount::Overflow))?;

        Self::new(difference)
    }

    /// Return a new amount raised by `pct` percent
    ///
    /// `pct` must be in `(0, 100]`. The result is `amount + amount * pct / 100`
    /// and must itself be a valid amount; it is never rounded.
    pub fn increase_by_percentage(&self, pct: Decimal) -> Result<Self, PercentageError> {
        invariants::validate_percentage(pct).map_err(|error| {
            debug!(amount = %self.0, %pct, %error, "Rejected percentage increase");
            error
        })?;

        let overflow = || rejected("increase_by_percentage", pct, InvalidAmount::Overflow);

        // increase in cents = base * mantissa / 10^(scale + 2)
        let pct = pct.normalize();
        let base = to_cents(self.0).ok_or_else(overflow)?;
        let exponent = pct.scale() + 2;
        let product = base.checked_mul(pct.mantissa()).ok_or_else(overflow)?;
        let divisor = 10_i128.checked_pow(exponent).ok_or_else(overflow)?;

        if product % divisor != 0 {
            let digits = invariants::MAX_FRACTIONAL_DIGITS + exponent - trailing_zeros(product);
            let error = InvalidAmount::TooPrecise(digits);
            return Err(rejected("increase_by_percentage", pct, error).into());
        }

        let raised = base
            .checked_add(product / divisor)
            .and_then(from_cents)
            .ok_or_else(overflow)?;

        Ok(Self::new(raised)?)
    }
}

/// Whole cents of a value with at most two significant fractional digits
fn to_cents(value: Decimal) -> Option<i128> {
    let value = value.normalize();
    let shift = invariants::MAX_FRACTIONAL_DIGITS.checked_sub(value.scale())?;
    value.mantissa().checked_mul(10_i128.pow(shift))
}

/// Decimal holding exactly `cents / 100`, at two fractional digits when it fits
fn from_cents(cents: i128) -> Option<Decimal> {
    let (mut mantissa, mut scale) = (cents, invariants::MAX_FRACTIONAL_DIGITS);
    loop {
        if let Ok(value) = Decimal::try_from_i128_with_scale(mantissa, scale) {
            return Some(value);
        }
        if scale == 0 || mantissa % 10 != 0 {
            return None;
        }
        mantissa /= 10;
        scale -= 1;
    }
}

fn trailing_zeros(mut value: i128) -> u32 {
    let mut zeros = 0;
    while value != 0 && value % 10 == 0 {
        value /= 10;
        zeros += 1;
    }
    zeros
}

fn rejected(operation: &'static str, input: Decimal, error: InvalidAmount) -> InvalidAmount {
    debug!(operation, %input, %error, "Rejected monetary amount");
    error
}

impl fmt::Display for MonetaryAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl From<MonetaryAmount> for Decimal {
    fn from(amount: MonetaryAmount) -> Self {
        amount.0
    }
}

impl TryFrom<Decimal> for MonetaryAmount {
    type Error = InvalidAmount;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<i64> for MonetaryAmount {
    type Error = InvalidAmount;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(Decimal::from(value))
    }
}

impl FromStr for MonetaryAmount {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = Decimal::from_str(s.trim())
            .map_err(|_| DomainError::Unparseable(s.to_string()))?;
        Ok(Self::new(raw)?)
    }
}
