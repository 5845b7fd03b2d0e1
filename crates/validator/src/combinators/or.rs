//! OR combinator - logical disjunction of validators
//!
//! This module provides the [`Or`] combinator which combines two validators
//! with logical OR semantics - at least one validator must pass for the
//! combined validator to succeed.

use crate::foundation::{Validate, ValidationError};

/// Combines two validators with logical OR.
///
/// At least one validator must pass for the combined validator to succeed.
/// If the first validator passes, the second is not evaluated (short-circuits).
/// If both fail, the combined error carries both failures as nested errors.
///
/// # Type Parameters
///
/// * `L` - The left (first) validator type
/// * `R` - The right (second) validator type
///
/// # Examples
///
/// ```rust
/// use fieldwise_validator::combinators::Or;
/// use fieldwise_validator::validators::Decimal;
/// use fieldwise_validator::foundation::Validate;
///
/// // Whole numbers up to 5 digits, or short fractional values
/// let validator = Or::new(Decimal::new(5, 0)?, Decimal::new(3, 1)?);
///
/// assert!(validator.validate("51400").is_ok());
/// assert!(validator.validate("51.4").is_ok());
/// assert!(validator.validate("51400.4").is_err());
/// # Ok::<(), fieldwise_validator::validators::DecimalLimitsError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<L, R> {
    /// The left (first) validator.
    pub(crate) left: L,
    /// The right (second) validator.
    pub(crate) right: R,
}

impl<L, R> Or<L, R> {
    /// Creates a new `Or` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left validator.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right validator.
    pub fn right(&self) -> &R {
        &self.right
    }

    /// Extracts the left and right validators.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match self.left.validate(input) {
            Ok(()) => Ok(()),
            Err(left_error) => match self.right.validate(input) {
                Ok(()) => Ok(()),
                Err(right_error) => {
                    Err(ValidationError::new("or_failed", "All alternatives failed")
                        .with_nested(vec![left_error, right_error]))
                }
            },
        }
    }
}

/// Creates an `Or` combinator from two validators.
pub fn or<L, R>(left: L, right: R) -> Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    Or::new(left, right)
}
