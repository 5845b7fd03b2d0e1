//! # fieldwise-validator
//!
//! Composable validation for untrusted field input.
//!
//! ## Quick Start
//!
//! ```rust
//! use fieldwise_validator::prelude::*;
//!
//! // A money field: up to 17 significant digits, 2 of them fractional,
//! // negative amounts rejected.
//! let price = Decimal::new(17, 2)?.only_positive();
//!
//! assert!(price.is_valid(Some("120.50")));
//! assert!(price.is_valid(Some("120,50")));
//! assert!(!price.is_valid(Some("-120.50")));
//! assert!(!price.is_valid(None));
//! # Ok::<(), fieldwise_validator::validators::DecimalLimitsError>(())
//! ```
//!
//! ## Composition
//!
//! Validators compose with `.and()` / `.or()` / `.not()`:
//!
//! ```rust
//! use fieldwise_validator::prelude::*;
//!
//! // Either a whole-number quantity or a short percentage-like value.
//! let field = Decimal::new(5, 0)?.or(Decimal::new(3, 1)?);
//! assert!(field.validate("12345").is_ok());
//! assert!(field.validate("99.5").is_ok());
//! assert!(field.validate("12345.5").is_err());
//! # Ok::<(), fieldwise_validator::validators::DecimalLimitsError>(())
//! ```
//!
//! Malformed input is the normal case here, not an exceptional one: the
//! [`Validate`](foundation::Validate) seam reports structured, coded
//! errors, and the boolean predicate surfaces never fail. Only
//! constructing a validator with nonsensical limits is an error.

pub mod combinators;
pub mod foundation;
pub mod prelude;
pub mod validators;
