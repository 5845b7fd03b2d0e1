//! The person record hierarchy
//!
//! A self-referential record: each person exclusively owns zero or one
//! parent record of the same type, forming a finite chain.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::equivalence::StructuralEq;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// A person record with a process-unique identity and an optional,
/// exclusively owned parent.
///
/// The `id` distinguishes instances; it is allocated on construction and
/// never takes part in [`StructuralEq`]. Everything else - name, age,
/// height, weight, and the whole parent chain - does.
#[derive(Debug, Clone)]
pub struct Person {
    /// Process-unique identity, excluded from structural comparison.
    pub id: u64,
    pub name: String,
    pub age: u32,
    pub height: u32,
    pub weight: u32,
    /// Zero-or-one owned parent; chains are finite by contract.
    pub parent: Option<Box<Person>>,
}

impl Person {
    /// Creates a person, allocating a fresh id.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        age: u32,
        height: u32,
        weight: u32,
        parent: Option<Person>,
    ) -> Self {
        Self {
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
            name: name.into(),
            age,
            height,
            weight,
            parent: parent.map(Box::new),
        }
    }

    /// Walks the parent chain, starting at `self`.
    pub fn lineage(&self) -> impl Iterator<Item = &Person> {
        std::iter::successors(Some(self), |person| person.parent.as_deref())
    }
}

impl StructuralEq for Person {
    fn structural_eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.age == other.age
            && self.height == other.height
            && self.weight == other.weight
            && self.parent.structural_eq(&other.parent)
    }
}

// ============================================================================
// TESTS
// ============================================================================
