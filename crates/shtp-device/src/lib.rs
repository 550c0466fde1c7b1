//! Session management for a BNO08x sensor hub.
//!
//! This is the "just works" layer. Open a session over any
//! [`Transport`](shtp_transport::Transport), enable the reports you want and
//! read the latest values; the reset/identify handshake, sequence numbers and
//! report decoding are handled underneath.

pub mod config;
pub mod delay;
pub mod error;
pub mod feature;
pub mod handshake;
pub mod session;

pub use config::SessionConfig;
pub use delay::{Delay, NoDelay, StdDelay};
pub use error::{DeviceError, Result};
pub use feature::{set_feature_command, SET_FEATURE_LEN};
pub use handshake::{check_id, soft_reset};
pub use session::{Session, SessionState};
