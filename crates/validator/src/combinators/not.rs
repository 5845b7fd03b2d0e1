//! NOT combinator - logical negation of validators
//!
//! This module provides the [`Not`] combinator which inverts the result
//! of a validator - it succeeds when the inner validator fails and vice versa.

use crate::foundation::{Validate, ValidationError};

/// Inverts a validator with logical NOT.
///
/// The `Not` combinator reverses the validation result:
/// - If the inner validator succeeds, `Not` fails
/// - If the inner validator fails, `Not` succeeds
///
/// # Type Parameters
///
/// * `V` - The inner validator type
///
/// # Examples
///
/// ```rust
/// use fieldwise_validator::combinators::Not;
/// use fieldwise_validator::validators::Decimal;
/// use fieldwise_validator::foundation::Validate;
///
/// // A free-text field that must NOT look like a bare number
/// let validator = Not::new(Decimal::new(10, 4)?);
///
/// assert!(validator.validate("three forty").is_ok());
/// assert!(validator.validate("340").is_err());
/// # Ok::<(), fieldwise_validator::validators::DecimalLimitsError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Not<V> {
    /// The inner validator to invert.
    pub(crate) inner: V,
}

impl<V> Not<V> {
    /// Creates a new `Not` combinator.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for Not<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match self.inner.validate(input) {
            Ok(()) => Err(ValidationError::new(
                "not_failed",
                "Validation should have failed but passed",
            )),
            Err(_) => Ok(()),
        }
    }
}

/// Creates a `Not` combinator from a validator.
pub fn not<V>(inner: V) -> Not<V>
where
    V: Validate,
{
    Not::new(inner)
}
