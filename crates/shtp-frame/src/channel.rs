//! SHTP channel IDs.
//!
//! A hub exposes exactly six channels. Each has its own sequence counter in
//! both directions.

/// SHTP command channel (advertisement, errors).
pub const COMMAND: u8 = 0;

/// Executable channel (reset, on, sleep).
pub const EXECUTABLE: u8 = 1;

/// Sensor hub control channel (product id, feature requests, commands).
pub const CONTROL: u8 = 2;

/// Normal input sensor reports.
pub const INPUT_SENSOR_REPORTS: u8 = 3;

/// Wake-up input sensor reports.
pub const WAKE_INPUT_SENSOR_REPORTS: u8 = 4;

/// High-rate gyro-integrated rotation vector.
pub const GYRO_ROTATION_VECTOR: u8 = 5;

/// Number of channels on the link.
pub const CHANNEL_COUNT: usize = 6;

/// Returns a human-readable name for a channel ID.
pub fn channel_name(id: u8) -> &'static str {
    match id {
        COMMAND => "COMMAND",
        EXECUTABLE => "EXECUTABLE",
        CONTROL => "CONTROL",
        INPUT_SENSOR_REPORTS => "INPUT",
        WAKE_INPUT_SENSOR_REPORTS => "WAKE_INPUT",
        GYRO_ROTATION_VECTOR => "GYRO_RV",
        _ => "INVALID",
    }
}

/// Returns true if the channel ID exists on the link.
pub fn is_valid(id: u8) -> bool {
    usize::from(id) < CHANNEL_COUNT
}
