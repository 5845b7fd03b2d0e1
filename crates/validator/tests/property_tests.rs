//! Property-based tests for fieldwise-validator.

use fieldwise_validator::prelude::*;
use proptest::prelude::*;

// ============================================================================
// TOTAL FUNCTION: any input yields a verdict, never a panic
// ============================================================================

proptest! {
    #[test]
    fn any_input_yields_a_verdict(s in ".*") {
        let validator = Decimal::new(5, 2).unwrap();
        let _ = validator.is_valid(Some(s.as_str()));
    }

    #[test]
    fn surfaces_agree(s in ".*") {
        let validator = Decimal::new(5, 2).unwrap().only_positive();
        prop_assert_eq!(validator.is_valid(Some(s.as_str())), validator.validate(&s).is_ok());
    }
}

// ============================================================================
// IDEMPOTENCY: same validator, same input, same verdict
// ============================================================================

proptest! {
    #[test]
    fn verdict_is_idempotent(s in ".*") {
        let validator = Decimal::new(7, 3).unwrap();
        let first = validator.is_valid(Some(s.as_str()));
        let second = validator.is_valid(Some(s.as_str()));
        prop_assert_eq!(first, second);
    }
}

// ============================================================================
// GRAMMAR MODEL: verdict matches the digit-budget arithmetic
// ============================================================================

proptest! {
    #[test]
    fn verdict_matches_digit_budget_model(
        sign in prop::sample::select(vec!["", "+", "-"]),
        int_part in "[0-9]{1,12}",
        frac_part in proptest::option::of("[0-9]{1,8}"),
    ) {
        let text = match &frac_part {
            Some(frac) => format!("{sign}{int_part}.{frac}"),
            None => format!("{sign}{int_part}"),
        };

        let frac_digits = frac_part.as_ref().map_or(0, String::len);
        let total_digits = int_part.len() + frac_digits;
        let expected = total_digits <= 10 && frac_digits <= 4;

        let validator = Decimal::new(10, 4).unwrap();
        prop_assert_eq!(validator.is_valid(Some(text.as_str())), expected, "{}", text);
    }
}

// ============================================================================
// SEPARATOR EQUIVALENCE: `.` and `,` are interchangeable
// ============================================================================

proptest! {
    #[test]
    fn separators_are_interchangeable(int_part in "[0-9]{1,6}", frac_part in "[0-9]{1,6}") {
        let validator = Decimal::new(8, 4).unwrap();
        let dotted = format!("{int_part}.{frac_part}");
        let commaed = format!("{int_part},{frac_part}");
        prop_assert_eq!(
            validator.is_valid(Some(dotted.as_str())),
            validator.is_valid(Some(commaed.as_str()))
        );
    }
}

// ============================================================================
// SIGN INDEPENDENCE: the sign is not a digit
// ============================================================================

proptest! {
    #[test]
    fn plus_sign_never_changes_the_verdict(int_part in "[0-9]{1,8}") {
        let validator = Decimal::new(4, 2).unwrap().only_positive();
        let signed = format!("+{int_part}");
        prop_assert_eq!(
            validator.is_valid(Some(signed.as_str())),
            validator.is_valid(Some(int_part.as_str()))
        );
    }

    #[test]
    fn minus_sign_alone_decides_under_only_positive(int_part in "[0-9]{1,4}") {
        let permissive = Decimal::new(8, 2).unwrap();
        let positive = permissive.only_positive();
        let text = format!("-{int_part}");

        prop_assert!(permissive.is_valid(Some(text.as_str())));
        prop_assert!(!positive.is_valid(Some(text.as_str())));
    }
}

// ============================================================================
// COMBINATOR LAWS: a.and(b) fails iff a fails or b fails
// ============================================================================

proptest! {
    #[test]
    fn and_fails_iff_either_fails(s in ".{0,12}") {
        let tight = Decimal::new(3, 1).unwrap();
        let positive = Decimal::new(6, 2).unwrap().only_positive();
        let combined = tight.and(positive);

        let tight_ok = tight.validate(&s).is_ok();
        let positive_ok = positive.validate(&s).is_ok();

        prop_assert_eq!(combined.validate(&s).is_ok(), tight_ok && positive_ok);
    }

    #[test]
    fn or_passes_iff_either_passes(s in ".{0,12}") {
        let whole = Decimal::new(5, 0).unwrap();
        let fractional = Decimal::new(3, 1).unwrap();
        let combined = whole.or(fractional);

        let whole_ok = whole.validate(&s).is_ok();
        let fractional_ok = fractional.validate(&s).is_ok();

        prop_assert_eq!(combined.validate(&s).is_ok(), whole_ok || fractional_ok);
    }

    #[test]
    fn double_negation(s in ".{0,12}") {
        let validator = Decimal::new(4, 2).unwrap();
        let double_neg = not(not(validator));

        prop_assert_eq!(
            validator.validate(&s).is_ok(),
            double_neg.validate(&s).is_ok()
        );
    }
}
