//! # fieldwise-record
//!
//! Explicit structural equivalence for record hierarchies.
//!
//! Two records are *equivalent* when every semantically relevant field
//! matches, recursively through owned sub-records. Equivalence is a
//! separate relation from identity: records carry a unique id that never
//! participates in the comparison, so two independently built records
//! with the same content compare as equivalent.
//!
//! Each type declares its own comparison explicitly - there is no runtime
//! field enumeration. Adding a field to a record means extending its
//! [`StructuralEq`] impl, and the tests that build fixtures of that type
//! surface the omission.
//!
//! ## Quick Start
//!
//! ```rust
//! use fieldwise_record::{Person, StructuralEq};
//!
//! let a = Person::new("June Reed", 54, 170, 70, None);
//! let b = Person::new("June Reed", 54, 170, 70, None);
//!
//! assert_ne!(a.id, b.id);
//! assert!(a.structural_eq(&b));
//! ```

pub mod equivalence;
pub mod person;

pub use equivalence::StructuralEq;
pub use person::Person;
