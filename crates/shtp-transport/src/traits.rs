use crate::error::Result;

/// A blocking, bidirectional byte channel to a sensor hub.
///
/// Each call is one complete bus transaction. In particular, on I2C a read
/// always starts at the beginning of the packet the hub has queued, which is
/// why the framer reads the header once and then re-reads the whole packet.
pub trait Transport {
    /// Fill `buf` completely from the device.
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<()>;

    /// Write all of `buf` to the device.
    fn write_exact(&mut self, buf: &[u8]) -> Result<()>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<()> {
        (**self).read_exact(buf)
    }

    fn write_exact(&mut self, buf: &[u8]) -> Result<()> {
        (**self).write_exact(buf)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<()> {
        (**self).read_exact(buf)
    }

    fn write_exact(&mut self, buf: &[u8]) -> Result<()> {
        (**self).write_exact(buf)
    }
}
