//! Decimal number format validator
//!
//! Validates that a string denotes a plain decimal number within
//! precision and scale limits, the way a database `DECIMAL(p, s)` column
//! or a money form field would constrain it.

use std::sync::LazyLock;

use crate::foundation::{Validate, ValidationError};

// Anchored grammar for an accepted literal: optional sign, a non-empty
// run of ASCII digits, optionally one `.` or `,` followed by another
// non-empty digit run. No whitespace, grouping, or exponent.
static DECIMAL_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^([+-])?([0-9]+)(?:[.,]([0-9]+))?$").unwrap());

// ============================================================================
// CONSTRUCTION ERROR
// ============================================================================

/// Error returned when a [`Decimal`] validator is constructed with
/// inconsistent limits.
///
/// These are programmer errors: the validator must never exist in an
/// invalid state, so they surface at construction, not at validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DecimalLimitsError {
    /// `precision` was zero.
    #[error("precision must be a positive number")]
    PrecisionNotPositive,

    /// `scale` was not strictly below `precision`.
    #[error("scale must be a non-negative number less than precision")]
    ScaleNotBelowPrecision,
}

// ============================================================================
// DECIMAL VALIDATOR
// ============================================================================

/// Validates decimal-number literals against precision and scale limits.
///
/// - `precision` - maximum total count of significant digits (integer
///   plus fractional; the sign is not counted).
/// - `scale` - maximum count of fractional digits; always strictly less
///   than `precision`.
/// - the [`only_positive`](Decimal::only_positive) builder additionally
///   rejects a leading `-` (a leading `+` is always accepted).
///
/// Both `.` and `,` are accepted as the fractional separator. The check
/// is a pure format decision: nothing is parsed into a numeric type, so
/// arbitrarily long digit runs are handled without overflow.
///
/// The instance is immutable once constructed and can be shared across
/// threads freely.
///
/// # Examples
///
/// ```rust
/// use fieldwise_validator::validators::Decimal;
///
/// let amount = Decimal::new(5, 2)?.only_positive();
///
/// assert!(amount.is_valid(Some("314.15")));
/// assert!(amount.is_valid(Some("314,15")));
/// assert!(amount.is_valid(Some("+42")));
///
/// assert!(!amount.is_valid(Some("314.159"))); // three fractional digits
/// assert!(!amount.is_valid(Some("123456")));  // six digits total
/// assert!(!amount.is_valid(Some("-42")));     // negative
/// assert!(!amount.is_valid(Some("42.")));     // trailing separator
/// assert!(!amount.is_valid(None));
/// # Ok::<(), fieldwise_validator::validators::DecimalLimitsError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decimal {
    precision: usize,
    scale: usize,
    only_positive: bool,
}

impl Decimal {
    /// Creates a decimal validator with the given limits.
    ///
    /// # Errors
    ///
    /// Fails when `precision` is zero or `scale` is not strictly below
    /// `precision`.
    pub fn new(precision: usize, scale: usize) -> Result<Self, DecimalLimitsError> {
        if precision == 0 {
            return Err(DecimalLimitsError::PrecisionNotPositive);
        }
        if scale >= precision {
            return Err(DecimalLimitsError::ScaleNotBelowPrecision);
        }
        Ok(Self {
            precision,
            scale,
            only_positive: false,
        })
    }

    /// Rejects negative numbers (a leading `-`).
    ///
    /// A leading `+` stays accepted either way.
    #[must_use = "builder methods must be chained or built"]
    pub fn only_positive(mut self) -> Self {
        self.only_positive = true;
        self
    }

    /// Returns whether `candidate` denotes a decimal number within this
    /// validator's limits.
    ///
    /// The predicate form of [`validate`](Validate::validate) for callers
    /// holding possibly-absent field input: `None` and every malformed or
    /// out-of-limits string yield `false`, and nothing ever fails.
    #[must_use]
    pub fn is_valid(&self, candidate: Option<&str>) -> bool {
        candidate.is_some_and(|text| self.validate(text).is_ok())
    }
}

impl Validate for Decimal {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let Some(groups) = DECIMAL_REGEX.captures(input) else {
            return Err(ValidationError::new(
                "decimal_format",
                "String must be a decimal number",
            ));
        };

        let negative = groups.get(1).is_some_and(|sign| sign.as_str() == "-");
        let int_digits = groups.get(2).map_or(0, |digits| digits.as_str().len());
        let frac_digits = groups.get(3).map_or(0, |digits| digits.as_str().len());

        let total_digits = int_digits + frac_digits;
        if total_digits > self.precision {
            return Err(ValidationError::new(
                "decimal_precision",
                format!(
                    "Number must have at most {} digits (found {})",
                    self.precision, total_digits
                ),
            )
            .with_param("precision", self.precision.to_string())
            .with_param("actual", total_digits.to_string()));
        }

        if frac_digits > self.scale {
            return Err(ValidationError::new(
                "decimal_scale",
                format!(
                    "Number must have at most {} fractional digits (found {})",
                    self.scale, frac_digits
                ),
            )
            .with_param("scale", self.scale.to_string())
            .with_param("actual", frac_digits.to_string()));
        }

        if self.only_positive && negative {
            return Err(ValidationError::new(
                "decimal_negative",
                "Number must not be negative",
            ));
        }

        Ok(())
    }
}

/// Creates a decimal validator with the given limits.
///
/// # Errors
///
/// Fails when `precision` is zero or `scale` is not strictly below
/// `precision`.
pub fn decimal(precision: usize, scale: usize) -> Result<Decimal, DecimalLimitsError> {
    Decimal::new(precision, scale)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // Construction invariants
    mod limits {
        use super::*;

        #[test]
        fn test_zero_precision_rejected() {
            let error = Decimal::new(0, 0).unwrap_err();
            assert_eq!(error, DecimalLimitsError::PrecisionNotPositive);
            assert_eq!(error.to_string(), "precision must be a positive number");
        }

        #[test]
        fn test_scale_equal_to_precision_rejected() {
            let error = Decimal::new(2, 2).unwrap_err();
            assert_eq!(error, DecimalLimitsError::ScaleNotBelowPrecision);
            assert_eq!(
                error.to_string(),
                "scale must be a non-negative number less than precision"
            );
        }

        #[test]
        fn test_scale_above_precision_rejected() {
            assert!(Decimal::new(2, 3).is_err());
        }

        #[test]
        fn test_valid_limits_accepted() {
            assert!(Decimal::new(1, 0).is_ok());
            assert!(Decimal::new(2, 1).is_ok());
            assert!(Decimal::new(17, 16).is_ok());
        }
    }

    // The accepted-literal grammar, independent of limits
    mod grammar {
        use super::*;

        fn roomy() -> Decimal {
            Decimal::new(20, 10).unwrap()
        }

        #[test]
        fn test_plain_forms_accepted() {
            let validator = roomy();
            for text in ["0", "42", "+42", "-42", "3.14", "3,14", "-0.5", "+0,5"] {
                assert!(validator.is_valid(Some(text)), "{text} should match");
            }
        }

        #[test]
        fn test_separator_needs_digits_on_both_sides() {
            let validator = roomy();
            for text in ["10.", ".1", "+.1", "-.1", ".", "1..2", "1.2.3"] {
                assert!(!validator.is_valid(Some(text)), "{text} should not match");
            }
        }

        #[test]
        fn test_sign_is_single_and_leading() {
            let validator = roomy();
            for text in ["+-1", "-+1", "++1", "--1", "1-", "1+1", "-"] {
                assert!(!validator.is_valid(Some(text)), "{text} should not match");
            }
        }

        #[test]
        fn test_ascii_digits_only() {
            let validator = roomy();
            // Unicode decimal digits (Arabic-Indic) are not plain ASCII
            assert!(!validator.is_valid(Some("٤٢")));
        }

        #[test]
        fn test_none_is_invalid() {
            assert!(!roomy().is_valid(None));
        }

        #[test]
        fn test_format_error_code() {
            let error = roomy().validate("abc").unwrap_err();
            assert_eq!(error.code, "decimal_format");
        }
    }

    // Digit budgets
    mod budget {
        use super::*;

        #[test]
        fn test_precision_counts_all_digits() {
            let validator = Decimal::new(3, 2).unwrap();
            assert!(validator.is_valid(Some("1.23")));
            assert!(!validator.is_valid(Some("12.34")));
        }

        #[test]
        fn test_sign_does_not_count_toward_precision() {
            let validator = Decimal::new(2, 0).unwrap();
            assert!(validator.is_valid(Some("-13")));
            assert!(validator.is_valid(Some("+13")));
            assert!(!validator.is_valid(Some("134")));
        }

        #[test]
        fn test_leading_zeros_count() {
            let validator = Decimal::new(2, 0).unwrap();
            assert!(!validator.is_valid(Some("001")));
        }

        #[test]
        fn test_scale_bounds_fractional_digits() {
            let validator = Decimal::new(10, 2).unwrap();
            assert!(validator.is_valid(Some("1.2")));
            assert!(validator.is_valid(Some("1.23")));
            assert!(!validator.is_valid(Some("1.234")));
        }

        #[test]
        fn test_precision_error_params() {
            let error = Decimal::new(3, 1).unwrap().validate("12345").unwrap_err();
            assert_eq!(error.code, "decimal_precision");
            assert_eq!(error.param("precision"), Some("3"));
            assert_eq!(error.param("actual"), Some("5"));
        }

        #[test]
        fn test_scale_error_params() {
            let error = Decimal::new(9, 1).unwrap().validate("1.234").unwrap_err();
            assert_eq!(error.code, "decimal_scale");
            assert_eq!(error.param("scale"), Some("1"));
            assert_eq!(error.param("actual"), Some("3"));
        }
    }

    // The only-positive constraint
    mod sign {
        use super::*;

        #[test]
        fn test_minus_rejected_when_only_positive() {
            let validator = Decimal::new(3, 1).unwrap().only_positive();
            assert!(!validator.is_valid(Some("-1.1")));
            assert!(!validator.is_valid(Some("-0")));
            let error = validator.validate("-1.1").unwrap_err();
            assert_eq!(error.code, "decimal_negative");
        }

        #[test]
        fn test_plus_always_accepted() {
            let validator = Decimal::new(3, 1).unwrap().only_positive();
            assert!(validator.is_valid(Some("+1.1")));
            assert!(validator.is_valid(Some("+0")));
        }

        #[test]
        fn test_minus_accepted_by_default() {
            let validator = Decimal::new(3, 1).unwrap();
            assert!(validator.is_valid(Some("-1.1")));
        }
    }
}
