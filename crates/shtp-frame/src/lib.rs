//! SHTP packet framing with channel multiplexing.
//!
//! Every packet on the bus carries a 4-byte header:
//! - A 2-byte little-endian total length (header included, bit 15 reserved)
//! - A 1-byte channel id (0-5)
//! - A 1-byte per-channel sequence number
//!
//! The [`Framer`] owns the sequence bookkeeping for all six channels and the
//! scratch buffers used for both directions.

pub mod channel;
pub mod codec;
pub mod error;
pub mod framer;
pub mod sequence;

pub use channel::{
    channel_name, CHANNEL_COUNT, COMMAND, CONTROL, EXECUTABLE, GYRO_ROTATION_VECTOR,
    INPUT_SENSOR_REPORTS, WAKE_INPUT_SENSOR_REPORTS,
};
pub use codec::{decode_header, encode_frame, Frame, Header, HEADER_SIZE, MAX_PAYLOAD};
pub use error::{FrameError, Result};
pub use framer::Framer;
pub use sequence::SequenceTable;
