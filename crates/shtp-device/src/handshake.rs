use shtp_frame::{FrameError, Framer, CONTROL, EXECUTABLE};
use shtp_report::ids::{EXECUTABLE_RESET, PRODUCT_ID_REQUEST, PRODUCT_ID_RESPONSE};
use shtp_report::ProductId;
use shtp_transport::Transport;
use tracing::{debug, info, warn};

use crate::config::SessionConfig;
use crate::delay::Delay;
use crate::error::{DeviceError, Result};

/// Reset the hub and discard what it sends while starting up.
///
/// The reset command goes out twice, each followed by the reset delay.
/// Afterwards `reset_drain_frames` packets are read without inspection; an
/// empty answer counts as one of them. Any other receive error aborts.
pub fn soft_reset<T: Transport, D: Delay>(
    framer: &mut Framer<T>,
    delay: &mut D,
    config: &SessionConfig,
) -> Result<()> {
    for pulse in 0..2 {
        debug!(pulse, "sending reset command");
        framer.send(EXECUTABLE, &[EXECUTABLE_RESET])?;
        delay.delay(config.reset_delay);
    }

    for _ in 0..config.reset_drain_frames {
        match framer.receive() {
            Ok(frame) => debug!(
                channel = frame.channel,
                length = frame.length,
                "discarded startup packet"
            ),
            Err(FrameError::NoData { length }) => {
                debug!(length, "empty startup packet");
            }
            Err(err) => return Err(err.into()),
        }
    }
    Ok(())
}

/// Ask the hub for its product id and verify the answer.
///
/// Succeeds only when the first payload byte of the response is the
/// product-id response id. The identity block is parsed when complete.
pub fn check_id<T: Transport, D: Delay>(
    framer: &mut Framer<T>,
    delay: &mut D,
    config: &SessionConfig,
) -> Result<Option<ProductId>> {
    framer.send(CONTROL, &[PRODUCT_ID_REQUEST, 0])?;
    delay.delay(config.identify_delay);
    let frame = match framer.receive() {
        Ok(frame) => frame,
        Err(FrameError::NoData { length }) => {
            warn!(length, "no identity response");
            return Err(DeviceError::HandshakeFailed {
                expected: PRODUCT_ID_RESPONSE,
                actual: None,
            });
        }
        Err(err) => return Err(err.into()),
    };

    let actual = frame.payload.first().copied();
    if actual != Some(PRODUCT_ID_RESPONSE) {
        warn!(?actual, channel = frame.channel, "unexpected identity response");
        return Err(DeviceError::HandshakeFailed {
            expected: PRODUCT_ID_RESPONSE,
            actual,
        });
    }

    match ProductId::parse(&frame.payload) {
        Ok(Some(product)) => {
            info!(
                part = product.sw_part_number,
                version = %product.version(),
                build = product.sw_build_number,
                "sensor hub identified"
            );
            Ok(Some(product))
        }
        Ok(None) => Ok(None),
        Err(err) => {
            warn!(%err, "identity response too short to parse");
            Ok(None)
        }
    }
}
