//! Core traits for the validation system
//!
//! This module defines the fundamental traits that all validators must implement.

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators must implement.
///
/// This trait is generic over the input type, allowing for compile-time
/// type safety while maintaining flexibility. All validators return
/// `Result<(), ValidationError>` for a consistent API.
///
/// # Type Parameters
///
/// * `Input` - The type being validated (can be `?Sized` for DSTs like `str`)
///
/// # Examples
///
/// ```rust
/// use fieldwise_validator::foundation::{Validate, ValidationError};
///
/// struct MaxDigits {
///     max: usize,
/// }
///
/// impl Validate for MaxDigits {
///     type Input = str;
///
///     fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
///         let digits = input.chars().filter(char::is_ascii_digit).count();
///         if digits <= self.max {
///             Ok(())
///         } else {
///             Err(ValidationError::new(
///                 "max_digits",
///                 format!("Must have at most {} digits", self.max),
///             ))
///         }
///     }
/// }
///
/// let validator = MaxDigits { max: 3 };
/// assert!(validator.validate("123").is_ok());
/// assert!(validator.validate("1234").is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str` and `[T]`.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if validation succeeds
    /// * `Err(ValidationError)` if validation fails
    fn validate(&self, input: &Self::Input) -> Result<(), crate::foundation::ValidationError>;
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// This trait is automatically implemented for all types that implement
/// `Validate`, providing a fluent API for composing validators.
///
/// # Examples
///
/// ```rust
/// use fieldwise_validator::prelude::*;
///
/// let amount = Decimal::new(6, 2)?.and(Decimal::new(9, 4)?);
/// assert!(amount.validate("1234.56").is_ok());
/// # Ok::<(), fieldwise_validator::validators::DecimalLimitsError>(())
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Combines two validators with logical AND.
    ///
    /// Both validators must pass for the combined validator to succeed.
    /// Short-circuits on the first failure.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// Combines two validators with logical OR.
    ///
    /// At least one validator must pass for the combined validator to succeed.
    /// Short-circuits on the first success.
    fn or<V>(self, other: V) -> Or<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        Or::new(self, other)
    }

    /// Inverts the validator with logical NOT.
    ///
    /// The combined validator succeeds if the original validator fails,
    /// and vice versa.
    fn not(self) -> Not<Self> {
        Not::new(self)
    }
}

// Automatically implement ValidateExt for all Validate implementations
impl<T: Validate> ValidateExt for T {}

// ============================================================================
// IMPORT COMBINATOR TYPES
// ============================================================================
// Import the actual combinator implementations instead of duplicating them

pub use crate::combinators::and::And;
pub use crate::combinators::not::Not;
pub use crate::combinators::or::Or;

// ============================================================================
// TESTS
// ============================================================================
