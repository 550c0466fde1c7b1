use std::path::PathBuf;

/// Errors that can occur in bus transport operations.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Failed to open the bus device node.
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to select the target device address on the bus.
    #[error("failed to select device address {address:#04x}: {source}")]
    Address {
        address: u16,
        source: std::io::Error,
    },

    /// An I/O error occurred during a bus transaction.
    #[error("transport I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The bus transferred fewer bytes than requested.
    #[error("short transfer ({actual} of {expected} bytes)")]
    ShortTransfer { expected: usize, actual: usize },

    /// The transport has no more data and will never produce more.
    #[error("transport closed")]
    Closed,
}

pub type Result<T> = std::result::Result<T, TransportError>;
