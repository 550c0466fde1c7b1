use shtp_report::ids::{ACTIVITY_CLASSIFIER, SET_FEATURE_COMMAND};

/// Size of a set-feature command on the control channel.
pub const SET_FEATURE_LEN: usize = 17;

/// Build the set-feature command enabling `report_id`.
///
/// Layout: command id, report id, feature flags (0), change sensitivity
/// (2 bytes, 0), report interval (4 bytes LE), batch interval (4 bytes, 0),
/// sensor-specific configuration (4 bytes LE).
///
/// The activity classifier is sent as an all-zero body. Its enabled-activity
/// mask is not filled in, so enabling it this way is incomplete.
pub fn set_feature_command(
    report_id: u8,
    interval_us: u32,
    sensor_specific_config: u32,
) -> [u8; SET_FEATURE_LEN] {
    let mut body = [0u8; SET_FEATURE_LEN];
    if report_id == ACTIVITY_CLASSIFIER {
        return body;
    }
    body[0] = SET_FEATURE_COMMAND;
    body[1] = report_id;
    body[5..9].copy_from_slice(&interval_us.to_le_bytes());
    body[13..17].copy_from_slice(&sensor_specific_config.to_le_bytes());
    body
}
