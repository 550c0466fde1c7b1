use crate::session::SessionState;

/// Errors that can occur in session operations.
#[derive(Debug, thiserror::Error)]
pub enum DeviceError {
    /// The bus could not be opened.
    #[error("transport error: {0}")]
    Transport(#[from] shtp_transport::TransportError),

    /// Packet-level error.
    #[error("frame error: {0}")]
    Frame(#[from] shtp_frame::FrameError),

    /// A sensor report could not be decoded.
    #[error("report error: {0}")]
    Report(#[from] shtp_report::ReportError),

    /// The identity response did not start with the product-id response id.
    #[error("handshake failed: expected product id response {expected:#04x}, got {actual:?}")]
    HandshakeFailed { expected: u8, actual: Option<u8> },

    /// The operation needs a session that completed its handshake.
    #[error("session not ready (state: {0})")]
    NotReady(SessionState),
}

pub type Result<T> = std::result::Result<T, DeviceError>;
