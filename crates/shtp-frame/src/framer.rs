use bytes::{Bytes, BytesMut};
use shtp_transport::Transport;
use tracing::{debug, trace};

use crate::channel::{self, channel_name};
use crate::codec::{decode_header, encode_frame, Frame, HEADER_SIZE};
use crate::error::{FrameError, Result};
use crate::sequence::SequenceTable;

const INITIAL_BUFFER_CAPACITY: usize = 1024;

/// Sends and receives complete SHTP packets over a [`Transport`].
///
/// Holds the sequence table for all channels and the raw bytes of the most
/// recently received packet.
pub struct Framer<T> {
    inner: T,
    sequences: SequenceTable,
    tx: BytesMut,
    rx: BytesMut,
}

impl<T: Transport> Framer<T> {
    pub fn new(inner: T) -> Self {
        Self {
            inner,
            sequences: SequenceTable::new(),
            tx: BytesMut::with_capacity(INITIAL_BUFFER_CAPACITY),
            rx: BytesMut::with_capacity(INITIAL_BUFFER_CAPACITY),
        }
    }

    /// Frame `payload` on `channel` and write it in one transaction.
    ///
    /// The channel's outbound sequence number advances only once the write
    /// has gone out.
    pub fn send(&mut self, channel: u8, payload: &[u8]) -> Result<()> {
        let sequence = self
            .sequences
            .outbound(channel)
            .ok_or(FrameError::InvalidChannel(channel))?;

        self.tx.clear();
        encode_frame(channel, sequence, payload, &mut self.tx)?;

        debug!(
            channel = channel_name(channel),
            sequence,
            length = self.tx.len(),
            "sending packet"
        );
        trace!(payload = ?payload, "outbound payload");

        self.inner.write_exact(&self.tx)?;
        self.sequences.advance_outbound(channel);
        Ok(())
    }

    /// Read the next packet (blocking).
    ///
    /// The header is read on its own to learn the length, then the whole
    /// packet, header included, is read again as one block. The continuation
    /// bit is reported on the frame but multi-part packets are not
    /// reassembled.
    pub fn receive(&mut self) -> Result<Frame> {
        let mut raw = [0u8; HEADER_SIZE];
        self.inner.read_exact(&mut raw)?;
        let header = decode_header(&raw);

        let length = usize::from(header.length);
        if length < HEADER_SIZE {
            return Err(FrameError::NoData { length });
        }
        if !channel::is_valid(header.channel) {
            return Err(FrameError::InvalidChannel(header.channel));
        }

        self.sequences
            .record_inbound(header.channel, header.sequence);

        self.rx.clear();
        self.rx.resize(length, 0);
        self.inner.read_exact(&mut self.rx)?;

        debug!(
            channel = channel_name(header.channel),
            sequence = header.sequence,
            length,
            continuation = header.continuation,
            "received packet"
        );
        trace!(payload = ?&self.rx[HEADER_SIZE..], "inbound payload");

        Ok(Frame {
            length: header.length,
            channel: header.channel,
            sequence: header.sequence,
            continuation: header.continuation,
            payload: Bytes::copy_from_slice(&self.rx[HEADER_SIZE..]),
        })
    }

    /// Raw bytes (header included) of the most recently received packet.
    pub fn last_packet(&self) -> &[u8] {
        &self.rx
    }

    /// Sequence number the next packet sent on `channel` will carry.
    pub fn outbound_sequence(&self, channel: u8) -> Option<u8> {
        self.sequences.outbound(channel)
    }

    /// Sequence number of the last packet received on `channel`.
    pub fn inbound_sequence(&self, channel: u8) -> Option<u8> {
        self.sequences.inbound(channel)
    }

    /// Current sequence bookkeeping for every channel.
    pub fn sequences(&self) -> &SequenceTable {
        &self.sequences
    }

    /// Borrow the underlying transport.
    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Mutably borrow the underlying transport.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Consume the framer and return the inner transport.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T> std::fmt::Debug for Framer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Framer")
            .field("sequences", &self.sequences)
            .field("last_packet_len", &self.rx.len())
            .finish_non_exhaustive()
    }
}
