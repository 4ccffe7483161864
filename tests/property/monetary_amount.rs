// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for MonetaryAmount
//!
//! Amounts are generated as integer cents with scale 2, so every generated
//! value carries at most two fractional digits.

use cim_domain_employee::{InvalidAmount, MonetaryAmount, PercentageError};
use proptest::prelude::*;
use rust_decimal::Decimal;

// ============================================================================
// Strategies
// ============================================================================

/// Positive amounts with at most two fractional digits
fn valid_amount() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Positive amounts with three to six significant fractional digits
fn over_precise_amount() -> impl Strategy<Value = Decimal> {
    (3u32..=6, 1i64..1_000_000_000)
        .prop_filter_map("last digit must be significant", |(scale, units)| {
            (units % 10 != 0).then(|| Decimal::new(units, scale))
        })
}

/// Whole percentages in (0, 100]
fn whole_percentage() -> impl Strategy<Value = Decimal> {
    (1i64..=100).prop_map(Decimal::from)
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: valid amounts round-trip through serialize unchanged
    #[test]
    fn prop_valid_amount_round_trips(raw in valid_amount()) {
        let amount = MonetaryAmount::new(raw).unwrap();
        prop_assert_eq!(amount.amount(), raw);
        prop_assert_eq!(amount.serialize(), raw);
        prop_assert!(amount.equals(&amount));
    }

    /// Property: negative amounts fail with Negative
    #[test]
    fn prop_negative_rejected(raw in valid_amount()) {
        prop_assert_eq!(MonetaryAmount::new(-raw), Err(InvalidAmount::Negative));
    }

    /// Property: more than two fractional digits fail with TooPrecise
    #[test]
    fn prop_over_precise_rejected(raw in over_precise_amount()) {
        prop_assert_eq!(
            MonetaryAmount::new(raw),
            Err(InvalidAmount::TooPrecise(raw.scale()))
        );
    }

    /// Property: add yields the exact sum and leaves the receiver untouched
    #[test]
    fn prop_add_is_exact(base in valid_amount(), delta in valid_amount()) {
        let amount = MonetaryAmount::new(base).unwrap();
        let sum = amount.add(delta).unwrap();
        prop_assert_eq!(sum.amount(), base + delta);
        prop_assert_eq!(amount.amount(), base);
    }

    /// Property: add then subtract the same delta returns the original amount
    #[test]
    fn prop_add_subtract_inverse(base in valid_amount(), delta in valid_amount()) {
        let amount = MonetaryAmount::new(base).unwrap();
        let restored = amount.add(delta).unwrap().subtract(delta).unwrap();
        prop_assert!(restored.equals(&amount));
    }

    /// Property: subtract never yields a zero or negative amount
    #[test]
    fn prop_subtract_result_stays_positive(base in valid_amount(), delta in valid_amount()) {
        let amount = MonetaryAmount::new(base).unwrap();
        match amount.subtract(delta) {
            Ok(result) => {
                prop_assert!(result.amount() > Decimal::ZERO);
            }
            Err(InvalidAmount::Zero) => {
                prop_assert_eq!(base, delta);
            }
            Err(InvalidAmount::Negative) => {
                prop_assert!(delta > base);
            }
            Err(other) => {
                prop_assert!(false, "unexpected error {:?}", other);
            }
        }
    }

    /// Property: a whole-percentage raise of a whole amount is exact
    #[test]
    fn prop_percentage_raise_is_exact(units in 1i64..10_000_000, pct in whole_percentage()) {
        let base = Decimal::from(units);
        let raised = MonetaryAmount::new(base)
            .unwrap()
            .increase_by_percentage(pct)
            .unwrap();
        prop_assert_eq!(raised.amount(), base + base * pct / Decimal::ONE_HUNDRED);
        prop_assert!(raised.amount() > base);
    }

    /// Property: percentages above 100 are always rejected
    #[test]
    fn prop_percentage_above_range_rejected(raw in valid_amount(), extra in 1i64..1_000_000) {
        let pct = Decimal::ONE_HUNDRED + Decimal::new(extra, 2);
        let result = MonetaryAmount::new(raw).unwrap().increase_by_percentage(pct);
        prop_assert!(matches!(result, Err(PercentageError::Percentage(_))));
    }
}
