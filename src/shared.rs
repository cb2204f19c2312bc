//! SharedHashTable: a `HashTable` behind one exclusive lock.
//!
//! Probing reads and writes slot state across the whole array, so every
//! operation holds the single lock from first probe to return. Lookups hand
//! back owned copies because a borrow cannot outlive the guard.

use crate::config::TableConfig;
use crate::error::Result;
use crate::hash::FnvBuildHasher;
use crate::hash_table::HashTable;
use core::hash::BuildHasher;
use parking_lot::Mutex;
use std::sync::Arc;

pub struct SharedHashTable<S = FnvBuildHasher> {
    inner: Arc<Mutex<HashTable<S>>>,
}

impl SharedHashTable {
    pub fn new(capacity: usize) -> Result<Self> {
        HashTable::new(capacity).map(Self::from)
    }

    pub fn with_config(config: TableConfig) -> Result<Self> {
        HashTable::with_config(config).map(Self::from)
    }
}

impl<S> From<HashTable<S>> for SharedHashTable<S> {
    fn from(table: HashTable<S>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(table)),
        }
    }
}

impl<S> Clone for SharedHashTable<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S> SharedHashTable<S>
where
    S: BuildHasher,
{
    pub fn insert(&self, key: &str, value: &str) -> Result<Option<String>> {
        self.inner.lock().insert(key, value)
    }

    pub fn search(&self, key: &str) -> Option<String> {
        self.inner.lock().search(key).map(str::to_owned)
    }

    pub fn delete(&self, key: &str) -> Option<String> {
        self.inner.lock().delete(key)
    }

    /// `(count, capacity)` read under one lock acquisition.
    pub fn occupancy(&self) -> (usize, usize) {
        let t = self.inner.lock();
        (t.count(), t.capacity())
    }

    /// Run `f` with exclusive access to the underlying table.
    pub fn with_table<R>(&self, f: impl FnOnce(&mut HashTable<S>) -> R) -> R {
        f(&mut *self.inner.lock())
    }
}
