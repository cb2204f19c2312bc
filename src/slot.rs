//! Slot states of the bucket array.

/// A live key/value pair. Both strings are owned by the table.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Entry {
    key: Box<str>,
    value: String,
}

impl Entry {
    pub(crate) fn new(key: &str, value: &str) -> Self {
        Self {
            key: key.into(),
            value: value.to_owned(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub(crate) fn replace_value(&mut self, value: &str) -> String {
        core::mem::replace(&mut self.value, value.to_owned())
    }

    pub(crate) fn into_parts(self) -> (Box<str>, String) {
        (self.key, self.value)
    }
}

/// One position of the bucket array.
///
/// Transitions: `Empty -> Occupied` and `Deleted -> Occupied` on insert,
/// `Occupied -> Occupied` on update, `Occupied -> Deleted` on delete.
/// A `Deleted` slot never reverts to `Empty` except through
/// [`HashTable::clear`](crate::HashTable::clear) or a resize.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum Slot {
    #[default]
    Empty,
    Occupied(Entry),
    /// Tombstone: not a match for lookups, not a stopping point for probes,
    /// reusable by inserts.
    Deleted,
}

impl Slot {
    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    pub fn is_deleted(&self) -> bool {
        matches!(self, Slot::Deleted)
    }

    pub fn is_occupied(&self) -> bool {
        matches!(self, Slot::Occupied(_))
    }

    pub fn entry(&self) -> Option<&Entry> {
        match self {
            Slot::Occupied(e) => Some(e),
            _ => None,
        }
    }

    /// Move the entry out, leaving a tombstone behind.
    pub(crate) fn take_entry(&mut self) -> Option<Entry> {
        match core::mem::replace(self, Slot::Deleted) {
            Slot::Occupied(e) => Some(e),
            other => {
                *self = other;
                None
            }
        }
    }
}
