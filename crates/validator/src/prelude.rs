//! Prelude module for convenient imports.
//!
//! Provides a single `use fieldwise_validator::prelude::*;` import that
//! brings in all commonly needed traits, types, validators, and
//! combinators.
//!
//! # Examples
//!
//! ```rust
//! use fieldwise_validator::prelude::*;
//!
//! let amount = Decimal::new(9, 2)?.only_positive();
//! assert!(amount.validate("120.50").is_ok());
//! # Ok::<(), fieldwise_validator::validators::DecimalLimitsError>(())
//! ```

// ============================================================================
// FOUNDATION: Core traits and errors
// ============================================================================

pub use crate::foundation::{
    Validate, ValidateExt, ValidationError, ValidationErrors, ValidationResult, validate_with_all,
    validate_with_any,
};

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{And, Not, Or, and, not, or};
