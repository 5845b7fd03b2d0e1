//! Built-in validators
//!
//! Ready-to-use validators for field input.
//!
//! # Examples
//!
//! ```rust
//! use fieldwise_validator::prelude::*;
//!
//! // A percentage-like field: three digits, one of them fractional
//! let percent = Decimal::new(3, 1)?.only_positive();
//! assert!(percent.is_valid(Some("99.5")));
//! assert!(!percent.is_valid(Some("-1")));
//! # Ok::<(), fieldwise_validator::validators::DecimalLimitsError>(())
//! ```

// Numeric-format validators
pub mod decimal;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use decimal::{Decimal, DecimalLimitsError, decimal};
