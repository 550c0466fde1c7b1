//! Blocking byte transport abstraction for SHTP sensor hubs.
//!
//! The protocol layers above only ever need two operations: read exactly
//! `n` bytes and write exactly `n` bytes, each as a single bus transaction.
//! This crate provides the [`Transport`] trait carrying that contract and
//! the concrete adapters:
//! - Linux I2C character devices (`/dev/i2c-N`)
//! - An in-memory scripted transport for tests (behind the `mock` feature)

pub mod error;
pub mod traits;

#[cfg(target_os = "linux")]
pub mod i2c;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use error::{Result, TransportError};
pub use traits::Transport;

#[cfg(target_os = "linux")]
pub use i2c::I2cDevice;

#[cfg(any(test, feature = "mock"))]
pub use mock::MockTransport;
