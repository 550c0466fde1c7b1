use crate::channel::CHANNEL_COUNT;

/// Per-channel sequence numbers for both directions.
///
/// Outbound counters start at zero and wrap modulo 256. Inbound entries hold
/// the sequence byte of the most recent packet seen on that channel; no gap
/// or ordering check is made.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequenceTable {
    outbound: [u8; CHANNEL_COUNT],
    inbound: [Option<u8>; CHANNEL_COUNT],
}

impl SequenceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sequence number the next outbound packet on `channel` will carry.
    pub fn outbound(&self, channel: u8) -> Option<u8> {
        self.outbound.get(usize::from(channel)).copied()
    }

    /// Step the outbound counter for `channel`, wrapping 255 to 0.
    pub fn advance_outbound(&mut self, channel: u8) {
        if let Some(seq) = self.outbound.get_mut(usize::from(channel)) {
            *seq = seq.wrapping_add(1);
        }
    }

    /// Sequence number of the last packet received on `channel`.
    pub fn inbound(&self, channel: u8) -> Option<u8> {
        self.inbound.get(usize::from(channel)).copied().flatten()
    }

    /// Record the sequence number carried by a received packet.
    pub fn record_inbound(&mut self, channel: u8, sequence: u8) {
        if let Some(slot) = self.inbound.get_mut(usize::from(channel)) {
            *slot = Some(sequence);
        }
    }
}
