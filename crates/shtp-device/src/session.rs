use std::fmt;

use shtp_frame::{Framer, CONTROL, INPUT_SENSOR_REPORTS};
use shtp_report::ids::{ACCELEROMETER, GYROSCOPE};
use shtp_report::{decode_sensor_reports, ProductId, Readings};
use shtp_transport::Transport;
use tracing::{debug, info, trace, warn};

use crate::config::SessionConfig;
use crate::delay::{Delay, StdDelay};
use crate::error::{DeviceError, Result};
use crate::feature::set_feature_command;
use crate::handshake::{check_id, soft_reset};

/// Lifecycle of a [`Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Uninitialized,
    Resetting,
    IdentityPending,
    Ready,
    /// Terminal: the handshake did not complete.
    Failed,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionState::Uninitialized => "uninitialized",
            SessionState::Resetting => "resetting",
            SessionState::IdentityPending => "identity-pending",
            SessionState::Ready => "ready",
            SessionState::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// A connection to one sensor hub.
///
/// Owns the framer (sequence numbers and receive buffer), the cache of
/// latest readings and the delay used for settle times. All access goes
/// through `&mut self`; a session is never shared between threads.
pub struct Session<T, D = StdDelay> {
    framer: Framer<T>,
    delay: D,
    config: SessionConfig,
    state: SessionState,
    readings: Readings,
    product_id: Option<ProductId>,
}

impl<T: Transport> Session<T, StdDelay> {
    /// Open a session with real sleeps and default timing.
    pub fn connect(transport: T) -> Result<Self> {
        Self::open(transport, StdDelay, SessionConfig::default())
    }
}

#[cfg(target_os = "linux")]
impl Session<shtp_transport::I2cDevice, StdDelay> {
    /// Open `/dev/i2c-{bus}`, select `address` and run the handshake.
    pub fn open_i2c(bus: u8, address: u16, config: SessionConfig) -> Result<Self> {
        let device = shtp_transport::I2cDevice::open(bus, address)?;
        Self::open(device, StdDelay, config)
    }
}

impl<T: Transport, D: Delay> Session<T, D> {
    /// Create a session without touching the bus.
    pub fn new(transport: T, delay: D, config: SessionConfig) -> Self {
        Self {
            framer: Framer::new(transport),
            delay,
            config,
            state: SessionState::Uninitialized,
            readings: Readings::new(),
            product_id: None,
        }
    }

    /// Create a session and run the handshake; only a ready session is
    /// returned.
    pub fn open(transport: T, delay: D, config: SessionConfig) -> Result<Self> {
        let mut session = Self::new(transport, delay, config);
        session.start()?;
        Ok(session)
    }

    /// Reset the hub and verify its identity.
    ///
    /// Moves through `Resetting` and `IdentityPending` to `Ready`, or to
    /// `Failed` on the first error. Only an `Uninitialized` session can be
    /// started; `Failed` is terminal.
    pub fn start(&mut self) -> Result<()> {
        if self.state != SessionState::Uninitialized {
            return Err(DeviceError::NotReady(self.state));
        }
        let result = self.run_handshake();
        if let Err(err) = &result {
            warn!(%err, state = %self.state, "handshake aborted");
            self.transition(SessionState::Failed);
        }
        result
    }

    fn run_handshake(&mut self) -> Result<()> {
        self.transition(SessionState::Resetting);
        soft_reset(&mut self.framer, &mut self.delay, &self.config)?;

        self.transition(SessionState::IdentityPending);
        self.product_id = check_id(&mut self.framer, &mut self.delay, &self.config)?;

        self.transition(SessionState::Ready);
        info!("sensor hub ready");
        Ok(())
    }

    fn transition(&mut self, next: SessionState) {
        debug!(from = %self.state, to = %next, "session state");
        self.state = next;
    }

    fn ensure_ready(&self) -> Result<()> {
        if self.state == SessionState::Ready {
            Ok(())
        } else {
            Err(DeviceError::NotReady(self.state))
        }
    }

    /// Ask the hub to start producing `report_id` every `interval_us`.
    pub fn enable_feature(
        &mut self,
        report_id: u8,
        interval_us: u32,
        sensor_specific_config: u32,
    ) -> Result<()> {
        self.ensure_ready()?;
        let body = set_feature_command(report_id, interval_us, sensor_specific_config);
        debug!(report_id, interval_us, "enabling feature");
        self.framer.send(CONTROL, &body)?;
        self.delay.delay(self.config.feature_delay);
        Ok(())
    }

    /// [`enable_feature`](Self::enable_feature) with the configured default
    /// interval and no sensor-specific configuration.
    pub fn enable_report(&mut self, report_id: u8) -> Result<()> {
        self.enable_feature(report_id, self.config.default_interval_us, 0)
    }

    /// Read up to `max_frames` packets, decoding those on the input-report
    /// channel.
    ///
    /// A failed receive means nothing more is ready and ends the poll
    /// without an error. Returns the number of packets read.
    pub fn poll(&mut self, max_frames: usize) -> Result<usize> {
        self.ensure_ready()?;

        let mut received = 0usize;
        while received < max_frames {
            let frame = match self.framer.receive() {
                Ok(frame) => frame,
                Err(err) => {
                    trace!(%err, received, "poll stopped");
                    break;
                }
            };
            received += 1;

            if frame.channel == INPUT_SENSOR_REPORTS {
                decode_sensor_reports(&frame.payload, &mut self.readings)?;
            }
        }
        Ok(received)
    }

    /// Latest values for `report_id` after a bounded poll; empty if the hub
    /// has not produced that report yet.
    pub fn latest(&mut self, report_id: u8) -> Result<Vec<f32>> {
        self.poll(self.config.poll_budget)?;
        Ok(self.readings.get(report_id).to_vec())
    }

    /// Acceleration in m/s², gravity included.
    pub fn acceleration(&mut self) -> Result<Vec<f32>> {
        self.latest(ACCELEROMETER)
    }

    /// Angular velocity in rad/s.
    pub fn gyroscope(&mut self) -> Result<Vec<f32>> {
        self.latest(GYROSCOPE)
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Identity block reported during the handshake, if it was complete.
    pub fn product_id(&self) -> Option<&ProductId> {
        self.product_id.as_ref()
    }

    /// Cached readings without polling.
    pub fn readings(&self) -> &Readings {
        &self.readings
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn framer(&self) -> &Framer<T> {
        &self.framer
    }

    /// Borrow the underlying transport.
    pub fn transport(&self) -> &T {
        self.framer.get_ref()
    }

    /// Mutably borrow the underlying transport.
    pub fn transport_mut(&mut self) -> &mut T {
        self.framer.get_mut()
    }
}

impl<T, D> fmt::Debug for Session<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("state", &self.state)
            .field("product_id", &self.product_id)
            .field("readings", &self.readings)
            .finish_non_exhaustive()
    }
}
