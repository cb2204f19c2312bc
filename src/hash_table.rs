//! HashTable: open addressing over a fixed slot array with tombstone deletion.

use crate::config::TableConfig;
use crate::error::{Result, TableError};
use crate::hash::FnvBuildHasher;
use crate::probe::{ProbeSeq, ProbeStrategy};
use crate::slot::{Entry, Slot};
use core::fmt;
use core::hash::BuildHasher;
use tracing::{debug, trace, warn};

/// Outcome of walking a key's probe sequence.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Locate {
    /// Occupied slot holding the key.
    Found(usize),
    /// Key absent; first `Deleted` or `Empty` slot on the probe run.
    Vacant(usize),
    /// Key absent and every slot occupied.
    Full,
}

pub struct HashTable<S = FnvBuildHasher> {
    slots: Vec<Slot>,
    count: usize,
    tombstones: usize,
    probe: ProbeStrategy,
    max_load_factor: Option<f64>,
    hasher: S,
}

fn alloc_slots(capacity: usize) -> Result<Vec<Slot>> {
    let mut slots = Vec::new();
    slots.try_reserve_exact(capacity)?;
    slots.resize_with(capacity, Slot::default);
    Ok(slots)
}

impl HashTable {
    /// Fixed-capacity table with linear probing and no growth.
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_config(TableConfig::new(capacity))
    }

    pub fn with_config(config: TableConfig) -> Result<Self> {
        Self::with_config_and_hasher(config, FnvBuildHasher)
    }
}

impl<S> HashTable<S>
where
    S: BuildHasher,
{
    pub fn with_hasher(capacity: usize, hasher: S) -> Result<Self> {
        Self::with_config_and_hasher(TableConfig::new(capacity), hasher)
    }

    pub fn with_config_and_hasher(config: TableConfig, hasher: S) -> Result<Self> {
        config.validate()?;
        let slots = alloc_slots(config.capacity)?;
        debug!(
            capacity = config.capacity,
            probe = ?config.probe,
            max_load_factor = ?config.max_load_factor,
            "Created hash table."
        );
        Ok(Self {
            slots,
            count: 0,
            tombstones: 0,
            probe: config.probe,
            max_load_factor: config.max_load_factor,
            hasher,
        })
    }

    /// Number of live entries.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of `Deleted` slots.
    pub fn tombstones(&self) -> usize {
        self.tombstones
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn load_factor(&self) -> f64 {
        self.count as f64 / self.capacity() as f64
    }

    pub fn probe_strategy(&self) -> ProbeStrategy {
        self.probe
    }

    fn probe_seq(&self, key: &str) -> ProbeSeq {
        let hash = self.hasher.hash_one(key);
        ProbeSeq::new(hash, self.slots.len(), self.probe)
    }

    fn locate(&self, key: &str) -> Locate {
        let mut reuse = None;
        for i in self.probe_seq(key) {
            match &self.slots[i] {
                Slot::Occupied(e) if e.key() == key => return Locate::Found(i),
                Slot::Occupied(_) => {}
                Slot::Deleted => {
                    reuse.get_or_insert(i);
                }
                // Inserts fill the first reusable slot of a run, so the key
                // cannot sit past an Empty slot.
                Slot::Empty => return Locate::Vacant(reuse.unwrap_or(i)),
            }
        }
        reuse.map_or(Locate::Full, Locate::Vacant)
    }

    fn find_index(&self, key: &str) -> Option<usize> {
        if key.is_empty() {
            return None;
        }
        match self.locate(key) {
            Locate::Found(i) => Some(i),
            Locate::Vacant(_) | Locate::Full => None,
        }
    }

    fn over_threshold(&self) -> bool {
        self.max_load_factor
            .is_some_and(|lf| (self.count + 1) as f64 / self.capacity() as f64 > lf)
    }

    /// Live entries plus tombstones would pass the threshold: probe runs are
    /// clogged even though the live load is fine.
    fn needs_rebuild(&self) -> bool {
        self.max_load_factor.is_some_and(|lf| {
            (self.count + self.tombstones + 1) as f64 / self.capacity() as f64 > lf
        })
    }

    fn table_full(&self) -> TableError {
        warn!(capacity = self.capacity(), "Insert rejected: table is full.");
        TableError::TableFull {
            capacity: self.capacity(),
        }
    }

    /// Insert or update `key`.
    ///
    /// Both strings are copied into the table. Returns the previous value
    /// when the key was already present; an update never needs a free slot
    /// and never changes `count`.
    pub fn insert(&mut self, key: &str, value: &str) -> Result<Option<String>> {
        if key.is_empty() {
            return Err(TableError::EmptyKey);
        }

        let idx = match self.locate(key) {
            Locate::Found(i) => {
                let Slot::Occupied(entry) = &mut self.slots[i] else {
                    unreachable!("located slot is occupied");
                };
                trace!(key, slot = i, "Updated value in place.");
                return Ok(Some(entry.replace_value(value)));
            }
            Locate::Vacant(i) if !self.needs_rebuild() => i,
            Locate::Full if self.max_load_factor.is_none() => return Err(self.table_full()),
            Locate::Vacant(_) | Locate::Full => {
                if self.over_threshold() {
                    self.grow()?;
                } else {
                    // Same capacity: only the tombstones go.
                    self.resize(self.capacity())?;
                }
                match self.locate(key) {
                    Locate::Vacant(i) => i,
                    Locate::Found(_) | Locate::Full => return Err(self.table_full()),
                }
            }
        };

        if self.slots[idx].is_deleted() {
            self.tombstones -= 1;
        }
        self.slots[idx] = Slot::Occupied(Entry::new(key, value));
        self.count += 1;
        trace!(key, slot = idx, count = self.count, "Inserted entry.");
        Ok(None)
    }

    /// Look up the value stored for `key`.
    pub fn search(&self, key: &str) -> Option<&str> {
        self.find_index(key)
            .and_then(|i| self.slots[i].entry())
            .map(Entry::value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.find_index(key).is_some()
    }

    /// Remove `key`, leaving a tombstone in its slot. Absent keys are a no-op.
    pub fn delete(&mut self, key: &str) -> Option<String> {
        let i = self.find_index(key)?;
        let entry = self.slots[i].take_entry()?;
        self.count -= 1;
        self.tombstones += 1;
        trace!(key, slot = i, count = self.count, "Deleted entry.");
        let (_key, value) = entry.into_parts();
        Some(value)
    }

    fn grow(&mut self) -> Result<()> {
        let lf = self.max_load_factor.unwrap_or(1.0);
        let mut new_capacity = self.capacity();
        loop {
            new_capacity = new_capacity.checked_mul(2).ok_or_else(|| {
                TableError::Configuration("capacity overflow while growing".into())
            })?;
            if (self.count + 1) as f64 / new_capacity as f64 <= lf {
                break;
            }
        }
        self.resize(new_capacity)
    }

    /// Rebuild the slot array at `new_capacity`.
    ///
    /// Live entries are moved into the new array and tombstones are dropped.
    /// The table is left untouched if the new array cannot be allocated.
    pub fn resize(&mut self, new_capacity: usize) -> Result<()> {
        if new_capacity == 0 || new_capacity < self.count {
            return Err(TableError::Configuration(format!(
                "cannot resize to {new_capacity} slots with {} live entries",
                self.count
            )));
        }
        let fresh = alloc_slots(new_capacity)?;
        let old = core::mem::replace(&mut self.slots, fresh);
        let old_capacity = old.len();
        let dropped_tombstones = self.tombstones;
        self.tombstones = 0;

        for slot in old {
            if let Slot::Occupied(entry) = slot {
                // No tombstones or duplicates in the fresh array: the first
                // Empty slot is the home.
                let i = self
                    .probe_seq(entry.key())
                    .find(|&i| self.slots[i].is_empty())
                    .expect("resized array has a free slot for every live entry");
                self.slots[i] = Slot::Occupied(entry);
            }
        }

        debug!(
            old_capacity,
            new_capacity,
            count = self.count,
            dropped_tombstones,
            "Resized hash table."
        );
        Ok(())
    }

    /// Reset every slot to `Empty`, releasing all entries.
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|s| *s = Slot::Empty);
        self.count = 0;
        self.tombstones = 0;
        debug!(capacity = self.capacity(), "Cleared hash table.");
    }

    /// Release the table and every entry it owns.
    pub fn destroy(self) {
        debug!(
            capacity = self.capacity(),
            count = self.count,
            tombstones = self.tombstones,
            "Destroying hash table."
        );
        drop(self);
    }
}

impl<S> HashTable<S> {
    /// Every slot in array order, including `Empty` and `Deleted` ones.
    pub fn slots(&self) -> Slots<'_> {
        Slots {
            it: self.slots.iter().enumerate(),
        }
    }

    /// Live entries in slot order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            it: self.slots.iter(),
        }
    }
}

/// Iterator over `(index, &Slot)` pairs of a [`HashTable`].
pub struct Slots<'a> {
    it: core::iter::Enumerate<core::slice::Iter<'a, Slot>>,
}

impl<'a> Iterator for Slots<'a> {
    type Item = (usize, &'a Slot);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.it.next()
    }
}

/// Iterator over live `(key, value)` pairs of a [`HashTable`].
pub struct Iter<'a> {
    it: core::slice::Iter<'a, Slot>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.it
            .by_ref()
            .find_map(Slot::entry)
            .map(|e| (e.key(), e.value()))
    }
}

impl<'a, S> IntoIterator for &'a HashTable<S> {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S> fmt::Debug for HashTable<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
