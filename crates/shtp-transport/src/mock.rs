use std::collections::VecDeque;

use crate::error::{Result, TransportError};
use crate::traits::Transport;

/// Scripted in-memory transport.
///
/// Reads are served from a queue of per-transaction responses; writes are
/// recorded for later inspection. An exhausted read queue reports
/// [`TransportError::Closed`], which callers see as "no data ready".
#[derive(Debug, Default)]
pub struct MockTransport {
    reads: VecDeque<Vec<u8>>,
    writes: Vec<Vec<u8>>,
    fail_writes: bool,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the response to one read transaction.
    ///
    /// A longer response is truncated to the requested size, as a bus
    /// device simply stops clocking out bytes; a shorter one fails with
    /// [`TransportError::ShortTransfer`].
    pub fn push_read(&mut self, bytes: impl Into<Vec<u8>>) {
        self.reads.push_back(bytes.into());
    }

    /// Queue a complete SHTP packet the way a hub serves it over I2C: the
    /// 4-byte header read first, then the whole packet again from the start.
    pub fn push_packet(&mut self, packet: &[u8]) {
        let header_len = packet.len().min(4);
        self.reads.push_back(packet[..header_len].to_vec());
        self.reads.push_back(packet.to_vec());
    }

    /// Builder form of [`push_packet`](Self::push_packet).
    pub fn with_packet(mut self, packet: &[u8]) -> Self {
        self.push_packet(packet);
        self
    }

    /// Make every subsequent write fail with an I/O error.
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Every buffer written so far, in order.
    pub fn writes(&self) -> &[Vec<u8>] {
        &self.writes
    }

    /// Number of queued read responses not yet consumed.
    pub fn pending_reads(&self) -> usize {
        self.reads.len()
    }
}

impl Transport for MockTransport {
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<()> {
        let chunk = self.reads.pop_front().ok_or(TransportError::Closed)?;
        if chunk.len() < buf.len() {
            return Err(TransportError::ShortTransfer {
                expected: buf.len(),
                actual: chunk.len(),
            });
        }
        buf.copy_from_slice(&chunk[..buf.len()]);
        Ok(())
    }

    fn write_exact(&mut self, buf: &[u8]) -> Result<()> {
        if self.fail_writes {
            return Err(TransportError::Io(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "mock write failure",
            )));
        }
        self.writes.push(buf.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_packet_serves_header_then_whole_packet() {
        let mut mock = MockTransport::new().with_packet(&[6, 0, 2, 9, 0xAA, 0xBB]);
        assert_eq!(mock.pending_reads(), 2);

        let mut header = [0u8; 4];
        mock.read_exact(&mut header).unwrap();
        assert_eq!(header, [6, 0, 2, 9]);

        let mut packet = [0u8; 6];
        mock.read_exact(&mut packet).unwrap();
        assert_eq!(packet, [6, 0, 2, 9, 0xAA, 0xBB]);
    }

    #[test]
    fn empty_queue_reports_closed() {
        let mut mock = MockTransport::new();
        let mut buf = [0u8; 4];
        assert!(matches!(
            mock.read_exact(&mut buf),
            Err(TransportError::Closed)
        ));
    }

    #[test]
    fn short_response_is_short_transfer() {
        let mut mock = MockTransport::new();
        mock.push_read(vec![1, 2]);
        let mut buf = [0u8; 4];
        let err = mock.read_exact(&mut buf).unwrap_err();
        assert!(matches!(
            err,
            TransportError::ShortTransfer {
                expected: 4,
                actual: 2
            }
        ));
    }

    #[test]
    fn writes_are_recorded_until_failure_injected() {
        let mut mock = MockTransport::new();
        mock.write_exact(&[1, 2, 3]).unwrap();
        mock.fail_writes(true);
        assert!(mock.write_exact(&[4]).is_err());
        assert_eq!(mock.writes(), &[vec![1, 2, 3]]);
    }

    #[test]
    fn mutable_reference_forwards() {
        let mut mock = MockTransport::new();
        {
            let mut by_ref: &mut MockTransport = &mut mock;
            Transport::write_exact(&mut by_ref, &[7]).unwrap();
        }
        assert_eq!(mock.writes(), &[vec![7]]);
    }
}
