//! # Record Store
//!
//! The [`RecordStore`] trait hands the rest of the library an ordered, read-only
//! slice of records. Nothing above this layer cares where the records came from.
//!
//! ## Implementations
//!
//! - [`seed::SeedStore`]: the fixed collection of posts the binary ships with.
//! - [`memory::InMemoryStore`]: caller-supplied records, used by tests and by
//!   embedders that bring their own posts.
//!
//! Store order is significant: filtering preserves it and pagination slices it,
//! so the first record of the store is always the first record of page 1 when
//! no criteria are set.

use crate::model::Record;

pub mod memory;
pub mod seed;

/// Read-only access to an ordered collection of records.
pub trait RecordStore {
    /// All records, in store order.
    fn records(&self) -> &[Record];

    /// Number of records in the store.
    fn len(&self) -> usize {
        self.records().len()
    }

    fn is_empty(&self) -> bool {
        self.records().is_empty()
    }
}
