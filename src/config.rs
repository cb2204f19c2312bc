//! Table configuration.

use crate::error::{Result, TableError};
use crate::probe::ProbeStrategy;

/// Construction parameters for [`crate::HashTable`].
///
/// Growth is off unless a `max_load_factor` is set: the table then keeps
/// its capacity for life and inserts can fail with `TableFull`.
#[derive(Clone, Debug, PartialEq)]
pub struct TableConfig {
    pub(crate) capacity: usize,
    pub(crate) probe: ProbeStrategy,
    pub(crate) max_load_factor: Option<f64>,
}

impl TableConfig {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            probe: ProbeStrategy::default(),
            max_load_factor: None,
        }
    }

    pub fn probe(mut self, probe: ProbeStrategy) -> Self {
        self.probe = probe;
        self
    }

    /// Double the capacity whenever a new key would push `count / capacity`
    /// above `lf`.
    pub fn max_load_factor(mut self, lf: f64) -> Self {
        self.max_load_factor = Some(lf);
        self
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(TableError::Configuration(
                "capacity must be strictly positive".into(),
            ));
        }
        if let Some(lf) = self.max_load_factor {
            if !(lf > 0.0 && lf <= 1.0) {
                return Err(TableError::Configuration(format!(
                    "max load factor must be in (0, 1], got {lf}"
                )));
            }
        }
        Ok(())
    }
}
