//! Validator combinators
//!
//! Combinators wrap existing validators to build composite ones:
//!
//! - [`And`] - both validators must pass
//! - [`Or`] - at least one validator must pass
//! - [`Not`] - inverts a validator
//!
//! They are usually reached through the fluent
//! [`ValidateExt`](crate::foundation::ValidateExt) methods rather than
//! constructed directly:
//!
//! ```rust
//! use fieldwise_validator::prelude::*;
//!
//! let field = Decimal::new(5, 0)?.or(Decimal::new(7, 2)?);
//! assert!(field.validate("12345").is_ok());
//! # Ok::<(), fieldwise_validator::validators::DecimalLimitsError>(())
//! ```

pub mod and;
pub mod not;
pub mod or;

pub use and::{And, and};
pub use not::{Not, not};
pub use or::{Or, or};
