// Copyright (c) 2025 - Cowboy AI, Inc.
//! Pure Validation Functions - Domain Invariants
//!
//! Business rules shared by the employee value objects. Every function is
//! pure: no I/O, no mutation, deterministic. Each returns the first violated
//! rule so callers surface exactly one error per rejected input.
//!
//! # Rule Sets
//!
//! 1. **Registration rules**: positive, 5-6 digits, whole number
//! 2. **Amount rules** (creation and additive adjustments): not negative,
//!    not zero, at most 2 fractional digits
//! 3. **Subtractive adjustment rules**: not negative, at most 2 fractional
//!    digits (zero is allowed)
//! 4. **Percentage rules**: strictly positive, at most 100

use rust_decimal::Decimal;

use crate::domain::monetary_amount::{InvalidAmount, InvalidPercentage};
use crate::domain::registration_id::InvalidRegistration;

/// Maximum fractional digits of a monetary value
pub const MAX_FRACTIONAL_DIGITS: u32 = 2;

/// Fewest digits a registration number may have
pub const MIN_REGISTRATION_DIGITS: u32 = 5;

/// Most digits a registration number may have
pub const MAX_REGISTRATION_DIGITS: u32 = 6;

/// Upper bound of a percentage increase
pub const MAX_PERCENTAGE: Decimal = Decimal::ONE_HUNDRED;

/// Number of base-10 digits in the integer part of `value`
///
/// The sign is ignored and the fractional part truncated, so `123456.5`
/// counts as six digits and `0.5` as one.
pub fn digit_count(value: Decimal) -> u32 {
    let integer_part = value.abs().trunc();
    if integer_part.is_zero() {
        return 1;
    }
    integer_part.normalize().to_string().len() as u32
}

/// Number of significant fractional digits, ignoring trailing zeros
pub fn fractional_digits(value: Decimal) -> u32 {
    value.normalize().scale()
}

/// Whether `value` has no fractional component
pub fn is_whole(value: Decimal) -> bool {
    value.fract().is_zero()
}

/// Validate a raw registration number
///
/// # Rules (checked in order)
/// - `NotPositive`: value must be > 0
/// - `BadLength`: integer part must have 5 or 6 digits
/// - `NotInteger`: no fractional component
pub fn validate_registration(raw: Decimal) -> Result<(), InvalidRegistration> {
    if raw <= Decimal::ZERO {
        return Err(InvalidRegistration::NotPositive);
    }

    let digits = digit_count(raw);
    if !(MIN_REGISTRATION_DIGITS..=MAX_REGISTRATION_DIGITS).contains(&digits) {
        return Err(InvalidRegistration::BadLength(digits));
    }

    if !is_whole(raw) {
        return Err(InvalidRegistration::NotInteger);
    }

    Ok(())
}

/// Validate a monetary value under the creation rules
///
/// Used for constructing amounts and for additive adjustments.
///
/// # Rules (checked in order)
/// - `Negative`: value must be >= 0
/// - `Zero`: value must not be 0
/// - `TooPrecise`: at most 2 fractional digits
pub fn validate_amount(raw: Decimal) -> Result<(), InvalidAmount> {
    if raw < Decimal::ZERO {
        return Err(InvalidAmount::Negative);
    }

    if raw.is_zero() {
        return Err(InvalidAmount::Zero);
    }

    validate_precision(raw)
}

/// Validate a subtractive adjustment
///
/// Same as [`validate_amount`] except that zero is accepted.
pub fn validate_deduction(raw: Decimal) -> Result<(), InvalidAmount> {
    if raw < Decimal::ZERO {
        return Err(InvalidAmount::Negative);
    }

    validate_precision(raw)
}

/// Validate a percentage increase
///
/// # Rules (checked in order)
/// - `NotPositive`: percentage must be > 0
/// - `OutOfRange`: percentage must be <= 100
pub fn validate_percentage(pct: Decimal) -> Result<(), InvalidPercentage> {
    if pct <= Decimal::ZERO {
        return Err(InvalidPercentage::NotPositive);
    }

    if pct > MAX_PERCENTAGE {
        return Err(InvalidPercentage::OutOfRange);
    }

    Ok(())
}

fn validate_precision(raw: Decimal) -> Result<(), InvalidAmount> {
    let digits = fractional_digits(raw);
    if digits > MAX_FRACTIONAL_DIGITS {
        return Err(InvalidAmount::TooPrecise(digits));
    }
    Ok(())
}
