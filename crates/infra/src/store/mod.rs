//! Persistence gateway boundary.
//!
//! The catalogue core writes through [`CatalogueStore`] and never assumes a
//! concrete backend. [`InMemoryCatalogueStore`] backs tests and the seeding
//! binary.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::{DuplicatePolicy, InMemoryCatalogueStore};
pub use r#trait::{CatalogueStore, Persistable, Record, RecordKey, StoreError, StoreExt};
