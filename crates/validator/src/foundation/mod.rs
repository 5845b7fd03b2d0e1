//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation
//! system:
//!
//! - **Traits**: `Validate`, `ValidateExt`
//! - **Errors**: `ValidationError`, `ValidationErrors`
//!
//! Validators are generic over their input type, compose through logical
//! combinators, and report failures as structured errors:
//!
//! ```rust
//! use fieldwise_validator::prelude::*;
//!
//! let quantity = Decimal::new(4, 0)?.only_positive();
//! let error = quantity.validate("-7").unwrap_err();
//! assert_eq!(error.code, "decimal_negative");
//! # Ok::<(), fieldwise_validator::validators::DecimalLimitsError>(())
//! ```

// Module declarations
pub mod error;
pub mod traits;

// Re-export everything at the foundation level for convenience
pub use error::{ValidationError, ValidationErrors};
pub use traits::{Validate, ValidateExt};

// ============================================================================
// UTILITIES
// ============================================================================

/// Validates a value with multiple validators.
///
/// All validators must pass for this to succeed; every failure is
/// collected, not just the first.
///
/// # Examples
///
/// ```rust
/// use fieldwise_validator::foundation::validate_with_all;
/// use fieldwise_validator::validators::Decimal;
///
/// let strict = Decimal::new(4, 1)?;
/// let lenient = Decimal::new(9, 4)?;
/// assert!(validate_with_all("12.3", &[&strict, &lenient]).is_ok());
/// assert!(validate_with_all("12.345", &[&strict, &lenient]).is_err());
/// # Ok::<(), fieldwise_validator::validators::DecimalLimitsError>(())
/// ```
pub fn validate_with_all<V>(value: &V::Input, validators: &[&V]) -> Result<(), ValidationErrors>
where
    V: Validate + ?Sized,
{
    let mut errors = ValidationErrors::new();

    for validator in validators {
        if let Err(e) = validator.validate(value) {
            errors.add(e);
        }
    }

    if errors.has_errors() { Err(errors) } else { Ok(()) }
}

/// Validates a value with multiple validators (at least one must pass).
///
/// Returns the collected failures when every validator rejects the value.
pub fn validate_with_any<V>(value: &V::Input, validators: &[&V]) -> Result<(), ValidationErrors>
where
    V: Validate + ?Sized,
{
    let mut errors = ValidationErrors::new();

    for validator in validators {
        match validator.validate(value) {
            Ok(()) => return Ok(()),
            Err(e) => {
                errors.add(e);
            }
        }
    }

    Err(errors)
}

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;

// ============================================================================
// TESTS
// ============================================================================
