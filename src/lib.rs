//! tomb-table: a string-keyed, string-valued hash table using open
//! addressing over a fixed slot array, with tombstone deletion.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: a small key/value store whose entire design content is the
//!   probing/tombstone algorithm, kept in one component (`HashTable`).
//! - Layers:
//!   - `hash`: seedless FNV-1a, the default `BuildHasher`.
//!   - `probe`: `ProbeSeq`, a full-cycle iterator of slot indices (linear or
//!     double hashing).
//!   - `slot`: `Slot::{Empty, Occupied(Entry), Deleted}` stored by value.
//!   - `HashTable<S>`: insert/search/delete/resize over the slot array.
//!   - `SharedHashTable<S>`: the same table behind one `parking_lot::Mutex`.
//!
//! Constraints
//! - Every key inserted and not deleted sits in exactly one `Occupied`
//!   slot reachable by its probe sequence.
//! - Search stops at the first `Empty` slot and steps over `Deleted` ones.
//!   Insert places a new key in the first `Deleted` or `Empty` slot of its
//!   run, which is never past an `Empty` slot, so the early stop is sound.
//! - `Deleted` never reverts to `Empty` on its own; only `clear` and
//!   `resize` rebuild the array.
//! - The table owns copies of every key and value; callers keep theirs.
//!
//! Capacity policy
//! - By default the capacity is fixed and inserting a new key into a table
//!   with no `Empty` or `Deleted` slot fails with `TableError::TableFull`.
//! - `TableConfig::max_load_factor` enables growth: the table at least
//!   doubles before a new key would exceed the threshold. `resize` is also
//!   available directly.
//!
//! Notes and non-goals
//! - No iteration order beyond slot position.
//! - No persistence or serialization.
//! - `HashTable` itself is not synchronized; wrap it in `SharedHashTable`
//!   for cross-thread use.

pub mod config;
pub mod error;
pub mod hash;
pub mod hash_table;
#[cfg(test)]
mod hash_table_proptest;
pub mod probe;
pub mod shared;
pub mod slot;

// Public surface
pub use config::TableConfig;
pub use error::{Result, TableError};
pub use hash::{hash_str, FnvBuildHasher};
pub use hash_table::HashTable;
pub use probe::ProbeStrategy;
pub use shared::SharedHashTable;
pub use slot::{Entry, Slot};
