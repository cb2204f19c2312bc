use std::collections::TryReserveError;

pub type Result<T, E = TableError> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("Invalid table configuration: {0}")]
    Configuration(String),

    #[error("Unable to allocate slot array: {0}")]
    Allocation(#[from] TryReserveError),

    #[error("Table is full: no reusable slot among {capacity} slots")]
    TableFull { capacity: usize },

    #[error("Keys must be non-empty")]
    EmptyKey,
}
