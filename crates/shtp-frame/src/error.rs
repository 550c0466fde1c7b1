use shtp_transport::TransportError;

/// Errors that can occur while sending or receiving SHTP packets.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// The underlying bus transaction failed.
    #[error("frame transport error: {0}")]
    Transport(#[from] TransportError),

    /// The payload does not fit the 15-bit length field.
    #[error("payload too large ({size} bytes, max {max})")]
    PayloadTooLarge { size: usize, max: usize },

    /// The channel id is outside 0-5.
    #[error("invalid channel {0}")]
    InvalidChannel(u8),

    /// The hub answered with a header shorter than a packet header, which
    /// is how it signals that nothing is queued.
    #[error("no packet available (declared length {length})")]
    NoData { length: usize },
}

pub type Result<T> = std::result::Result<T, FrameError>;
