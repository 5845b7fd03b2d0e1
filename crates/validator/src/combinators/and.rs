//! AND combinator - logical conjunction of validators
//!
//! This module provides the [`And`] combinator which combines two validators
//! with logical AND semantics - both validators must pass for the combined
//! validator to succeed.

use crate::foundation::{Validate, ValidationError};

/// Combines two validators with logical AND.
///
/// Both validators must pass for the combined validator to succeed.
/// Errors are returned from the first failing validator.
///
/// # Type Parameters
///
/// * `L` - The left (first) validator type
/// * `R` - The right (second) validator type
///
/// # Examples
///
/// ```rust
/// use fieldwise_validator::combinators::And;
/// use fieldwise_validator::validators::Decimal;
/// use fieldwise_validator::foundation::Validate;
///
/// let validator = And::new(Decimal::new(6, 2)?, Decimal::new(9, 1)?);
///
/// // Within both limit profiles
/// assert!(validator.validate("1234.5").is_ok());
///
/// // Second profile allows only one fractional digit
/// assert!(validator.validate("1234.56").is_err());
/// # Ok::<(), fieldwise_validator::validators::DecimalLimitsError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    /// The left (first) validator.
    pub(crate) left: L,
    /// The right (second) validator.
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
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

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.left.validate(input)?;
        self.right.validate(input)?;
        Ok(())
    }
}

/// Creates an `And` combinator from two validators.
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    And::new(left, right)
}
