//! Report and message identifiers.
//!
//! Ids at or above [`META_REPORT_BASE`] are control-channel messages; the
//! rest are sensor report ids. Numbering follows the decoder-integrated
//! variant of the message table (set-feature is `0xFD`, base timestamp is
//! `0xFB`).

/// First id of the control/meta report range.
pub const META_REPORT_BASE: u8 = 0xF0;

// Control channel messages.
pub const GET_FEATURE_REQUEST: u8 = 0xFE;
pub const SET_FEATURE_COMMAND: u8 = 0xFD;
pub const GET_FEATURE_RESPONSE: u8 = 0xFC;
pub const BASE_TIMESTAMP: u8 = 0xFB;
pub const TIMESTAMP_REBASE: u8 = 0xFA;
pub const PRODUCT_ID_REQUEST: u8 = 0xF9;
pub const PRODUCT_ID_RESPONSE: u8 = 0xF8;
pub const FRS_WRITE_REQUEST: u8 = 0xF7;
pub const FRS_WRITE_DATA: u8 = 0xF6;
pub const FRS_WRITE_RESPONSE: u8 = 0xF5;
pub const FRS_READ_REQUEST: u8 = 0xF4;
pub const FRS_READ_RESPONSE: u8 = 0xF3;
pub const COMMAND_REQUEST: u8 = 0xF2;
pub const COMMAND_RESPONSE: u8 = 0xF1;

/// Executable channel reset command.
pub const EXECUTABLE_RESET: u8 = 0x01;

// Sensor reports.
pub const ACCELEROMETER: u8 = 0x01;
pub const GYROSCOPE: u8 = 0x02;
pub const MAGNETOMETER: u8 = 0x03;
pub const LINEAR_ACCELERATION: u8 = 0x04;
pub const ROTATION_VECTOR: u8 = 0x05;
pub const GRAVITY: u8 = 0x06;
pub const GAME_ROTATION_VECTOR: u8 = 0x08;
pub const GEOMAGNETIC_ROTATION_VECTOR: u8 = 0x09;
pub const STEP_COUNTER: u8 = 0x11;
pub const STABILITY_CLASSIFIER: u8 = 0x13;
pub const RAW_ACCELEROMETER: u8 = 0x14;
pub const RAW_GYROSCOPE: u8 = 0x15;
pub const RAW_MAGNETOMETER: u8 = 0x16;
pub const SHAKE_DETECTOR: u8 = 0x19;
pub const ACTIVITY_CLASSIFIER: u8 = 0x1E;

const NAMES: &[(u8, &str)] = &[
    (ACCELEROMETER, "accelerometer"),
    (GYROSCOPE, "gyroscope"),
    (MAGNETOMETER, "magnetometer"),
    (LINEAR_ACCELERATION, "linear-acceleration"),
    (ROTATION_VECTOR, "rotation-vector"),
    (GRAVITY, "gravity"),
    (GAME_ROTATION_VECTOR, "game-rotation-vector"),
    (GEOMAGNETIC_ROTATION_VECTOR, "geomagnetic-rotation-vector"),
    (STEP_COUNTER, "step-counter"),
    (STABILITY_CLASSIFIER, "stability-classifier"),
    (RAW_ACCELEROMETER, "raw-accelerometer"),
    (RAW_GYROSCOPE, "raw-gyroscope"),
    (RAW_MAGNETOMETER, "raw-magnetometer"),
    (SHAKE_DETECTOR, "shake-detector"),
    (ACTIVITY_CLASSIFIER, "activity-classifier"),
    (GET_FEATURE_RESPONSE, "get-feature-response"),
    (BASE_TIMESTAMP, "base-timestamp"),
    (TIMESTAMP_REBASE, "timestamp-rebase"),
    (PRODUCT_ID_RESPONSE, "product-id-response"),
    (COMMAND_RESPONSE, "command-response"),
];

/// Returns a human-readable name for a report id.
pub fn report_name(id: u8) -> &'static str {
    NAMES
        .iter()
        .find(|(known, _)| *known == id)
        .map(|(_, name)| *name)
        .unwrap_or("unknown")
}

/// Looks up a sensor report id by its [`report_name`].
pub fn report_id_from_name(name: &str) -> Option<u8> {
    NAMES
        .iter()
        .find(|(id, known)| *id < META_REPORT_BASE && known.eq_ignore_ascii_case(name))
        .map(|(id, _)| *id)
}
