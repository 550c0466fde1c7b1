use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Read, Write};
use std::os::fd::AsRawFd;
use std::path::{Path, PathBuf};

use tracing::{debug, info, trace};

use crate::error::{Result, TransportError};
use crate::traits::Transport;

/// `ioctl` request selecting the 7-bit slave address for subsequent transfers.
const I2C_SLAVE: u64 = 0x0703;

/// A sensor hub attached to a Linux I2C adapter through `/dev/i2c-N`.
///
/// Every `read`/`write` on the character device is a single I2C transfer
/// addressed to the selected slave.
pub struct I2cDevice {
    file: File,
    path: PathBuf,
    address: u16,
}

impl I2cDevice {
    /// Default 7-bit address of a BNO08x with SA0 pulled low.
    pub const DEFAULT_ADDRESS: u16 = 0x4A;
    /// Default adapter on Raspberry Pi class boards.
    pub const DEFAULT_BUS: u8 = 1;

    /// Open adapter `bus` and select `address` as the transfer target.
    pub fn open(bus: u8, address: u16) -> Result<Self> {
        Self::open_path(format!("/dev/i2c-{bus}"), address)
    }

    /// Open an explicit adapter device node and select `address`.
    pub fn open_path(path: impl AsRef<Path>, address: u16) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(&path)
            .map_err(|source| TransportError::Open {
                path: path.clone(),
                source,
            })?;

        // SAFETY: `file` is an open descriptor owned by this function, and
        // I2C_SLAVE takes the address by value, so no pointers are involved.
        let rc = unsafe {
            libc::ioctl(
                file.as_raw_fd(),
                I2C_SLAVE as _,
                libc::c_ulong::from(address),
            )
        };
        if rc < 0 {
            return Err(TransportError::Address {
                address,
                source: std::io::Error::last_os_error(),
            });
        }

        info!(?path, address, "opened i2c device");

        Ok(Self {
            file,
            path,
            address,
        })
    }

    /// The adapter device node.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The selected slave address.
    pub fn address(&self) -> u16 {
        self.address
    }

    /// Transport name for diagnostics.
    pub fn transport_name(&self) -> &'static str {
        "linux-i2c-dev"
    }
}

impl Transport for I2cDevice {
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<()> {
        loop {
            match self.file.read(buf) {
                Ok(n) if n == buf.len() => {
                    trace!(len = n, "i2c read");
                    return Ok(());
                }
                Ok(n) => {
                    return Err(TransportError::ShortTransfer {
                        expected: buf.len(),
                        actual: n,
                    })
                }
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(TransportError::Io(err)),
            }
        }
    }

    fn write_exact(&mut self, buf: &[u8]) -> Result<()> {
        loop {
            match self.file.write(buf) {
                Ok(n) if n == buf.len() => {
                    trace!(len = n, "i2c write");
                    return Ok(());
                }
                Ok(n) => {
                    return Err(TransportError::ShortTransfer {
                        expected: buf.len(),
                        actual: n,
                    })
                }
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(TransportError::Io(err)),
            }
        }
    }
}

impl std::fmt::Debug for I2cDevice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I2cDevice")
            .field("path", &self.path)
            .field("address", &format_args!("{:#04x}", self.address))
            .finish()
    }
}

impl Drop for I2cDevice {
    fn drop(&mut self) {
        debug!(path = ?self.path, "closing i2c device");
    }
}
