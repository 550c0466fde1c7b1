//! Host-side driver for BNO08x 9-axis sensor hubs speaking SHTP.
//!
//! # Crate Structure
//!
//! - [`transport`] — Blocking byte transport (Linux I2C, test mock)
//! - [`frame`] — SHTP packet framing and per-channel sequence numbers
//! - [`report`] — Report catalog, fixed-point decoding, product id
//! - [`device`] — Session: handshake, feature enables, latest readings
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(target_os = "linux")]
//! # fn main() -> Result<(), bno08x::device::DeviceError> {
//! use bno08x::device::{Session, SessionConfig};
//! use bno08x::report::ids::{ACCELEROMETER, GYROSCOPE};
//!
//! let mut imu = Session::open_i2c(1, 0x4A, SessionConfig::default())?;
//! imu.enable_report(ACCELEROMETER)?;
//! imu.enable_report(GYROSCOPE)?;
//! let accel = imu.acceleration()?;
//! if let [x, y, z] = accel[..] {
//!     println!("accel: {x} {y} {z}");
//! }
//! # Ok(())
//! # }
//! # #[cfg(not(target_os = "linux"))]
//! # fn main() {}
//! ```

/// Re-export transport types.
pub mod transport {
    pub use shtp_transport::*;
}

/// Re-export frame types.
pub mod frame {
    pub use shtp_frame::*;
}

/// Re-export report types.
pub mod report {
    pub use shtp_report::*;
}

/// Re-export session types.
pub mod device {
    pub use shtp_device::*;
}
