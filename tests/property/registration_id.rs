// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for RegistrationId

use cim_domain_employee::{InvalidRegistration, RegistrationId};
use proptest::prelude::*;
use rust_decimal::Decimal;

// ============================================================================
// Strategies
// ============================================================================

/// Registration numbers with 5 or 6 digits
fn valid_registration() -> impl Strategy<Value = i64> {
    10_000i64..1_000_000
}

/// Positive numbers outside the 5-6 digit window
fn wrong_length() -> impl Strategy<Value = i64> {
    prop_oneof![1i64..10_000, 1_000_000i64..i64::MAX]
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: every 5-6 digit positive integer is accepted unchanged
    #[test]
    fn prop_valid_registration_preserves_value(raw in valid_registration()) {
        let id = RegistrationId::try_from(raw).unwrap();
        prop_assert_eq!(i64::from(id.value()), raw);
        prop_assert_eq!(id.serialize(), id.value());
    }

    /// Property: non-positive values fail with NotPositive
    #[test]
    fn prop_non_positive_rejected(raw in i64::MIN..=0) {
        prop_assert_eq!(
            RegistrationId::try_from(raw),
            Err(InvalidRegistration::NotPositive)
        );
    }

    /// Property: positive values of the wrong length fail with BadLength
    #[test]
    fn prop_wrong_length_rejected(raw in wrong_length()) {
        let digits = raw.to_string().len() as u32;
        prop_assert_eq!(
            RegistrationId::try_from(raw),
            Err(InvalidRegistration::BadLength(digits))
        );
    }

    /// Property: fractional values of valid length fail with NotInteger
    #[test]
    fn prop_fractional_rejected(raw in valid_registration(), tenths in 1i64..10) {
        let fractional = Decimal::new(raw * 10 + tenths, 1);
        prop_assert_eq!(
            RegistrationId::new(fractional),
            Err(InvalidRegistration::NotInteger)
        );
    }

    /// Property: equality is reflexive and structural
    #[test]
    fn prop_equality_is_structural(a in valid_registration(), b in valid_registration()) {
        let left = RegistrationId::try_from(a).unwrap();
        let right = RegistrationId::try_from(b).unwrap();
        prop_assert!(left.equals(&left));
        prop_assert_eq!(left.equals(&right), a == b);
    }
}
