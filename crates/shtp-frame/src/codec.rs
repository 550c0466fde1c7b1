use bytes::{BufMut, Bytes, BytesMut};

use crate::channel;
use crate::error::{FrameError, Result};

/// Packet header: length (2) + channel (1) + sequence (1) = 4 bytes.
pub const HEADER_SIZE: usize = 4;

/// Bits of the length field that carry the packet length.
pub const LENGTH_MASK: u16 = 0x7FFF;

/// Reserved top bit of the length field. The hub sets it on continuation
/// packets; it is stripped and never reassembled.
pub const CONTINUATION_FLAG: u16 = 0x8000;

/// Largest payload that fits the 15-bit length field.
pub const MAX_PAYLOAD: usize = LENGTH_MASK as usize - HEADER_SIZE;

/// A decoded packet header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Total packet length including this header, top bit masked off.
    pub length: u16,
    /// Channel the packet travels on.
    pub channel: u8,
    /// Sender's sequence number for that channel.
    pub sequence: u8,
    /// Whether the reserved continuation bit was set.
    pub continuation: bool,
}

impl Header {
    /// Payload length implied by the header, zero if the declared length is
    /// shorter than the header itself.
    pub fn payload_len(&self) -> usize {
        usize::from(self.length).saturating_sub(HEADER_SIZE)
    }
}

/// A framed SHTP packet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Total length including the 4-byte header.
    pub length: u16,
    /// The channel this packet belongs to.
    pub channel: u8,
    /// Sequence number carried in the header.
    pub sequence: u8,
    /// Reserved continuation bit as received.
    pub continuation: bool,
    /// The packet payload (header excluded).
    pub payload: Bytes,
}

impl Frame {
    /// The total wire size of this frame (header + payload).
    pub fn wire_size(&self) -> usize {
        HEADER_SIZE + self.payload.len()
    }
}

/// Encode a packet into the wire format.
///
/// Wire format:
/// ```text
/// ┌──────────────┬───────────┬──────────┬──────────────────┐
/// │ Length (2B)  │ Channel   │ Sequence │ Payload          │
/// │ LE, bit15=0  │ (1B)      │ (1B)     │ (Length-4 bytes) │
/// └──────────────┴───────────┴──────────┴──────────────────┘
/// ```
pub fn encode_frame(channel: u8, sequence: u8, payload: &[u8], dst: &mut BytesMut) -> Result<()> {
    if payload.len() > MAX_PAYLOAD {
        return Err(FrameError::PayloadTooLarge {
            size: payload.len(),
            max: MAX_PAYLOAD,
        });
    }
    if !channel::is_valid(channel) {
        return Err(FrameError::InvalidChannel(channel));
    }
    dst.reserve(HEADER_SIZE + payload.len());
    dst.put_u16_le((payload.len() + HEADER_SIZE) as u16);
    dst.put_u8(channel);
    dst.put_u8(sequence);
    dst.put_slice(payload);
    Ok(())
}

/// Decode a packet header.
pub fn decode_header(src: &[u8; HEADER_SIZE]) -> Header {
    let raw = u16::from_le_bytes([src[0], src[1]]);
    Header {
        length: raw & LENGTH_MASK,
        channel: src[2],
        sequence: src[3],
        continuation: raw & CONTINUATION_FLAG != 0,
    }
}
