use serde::Serialize;

use crate::error::{ReportError, Result};
use crate::ids::*;

/// Fixed-point scaling and layout of one sensor report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReportDescriptor {
    /// Multiplier from the raw signed 16-bit sample to physical units
    /// (`2^-Q` for a Q-point value).
    pub scalar: f32,
    /// Number of output components (axes).
    pub component_count: usize,
    /// Total encoded size of the report, report id included.
    pub encoded_length: usize,
}

const fn q_point(q: i32) -> f32 {
    1.0 / (1u32 << q) as f32
}

const fn report(scalar: f32, component_count: usize, encoded_length: usize) -> ReportDescriptor {
    ReportDescriptor {
        scalar,
        component_count,
        encoded_length,
    }
}

const ACCELEROMETER_REPORT: ReportDescriptor = report(q_point(8), 3, 10);
const GYROSCOPE_REPORT: ReportDescriptor = report(q_point(9), 3, 10);
const MAGNETOMETER_REPORT: ReportDescriptor = report(q_point(4), 3, 10);
const LINEAR_ACCELERATION_REPORT: ReportDescriptor = report(q_point(8), 3, 10);
const ROTATION_VECTOR_REPORT: ReportDescriptor = report(q_point(14), 4, 14);
const GRAVITY_REPORT: ReportDescriptor = report(q_point(8), 3, 10);
const GAME_ROTATION_VECTOR_REPORT: ReportDescriptor = report(q_point(14), 4, 12);
const GEOMAGNETIC_ROTATION_VECTOR_REPORT: ReportDescriptor = report(q_point(12), 4, 14);
const STEP_COUNTER_REPORT: ReportDescriptor = report(1.0, 1, 12);
const STABILITY_CLASSIFIER_REPORT: ReportDescriptor = report(1.0, 1, 6);
const RAW_ACCELEROMETER_REPORT: ReportDescriptor = report(1.0, 3, 16);
const RAW_GYROSCOPE_REPORT: ReportDescriptor = report(1.0, 3, 16);
const RAW_MAGNETOMETER_REPORT: ReportDescriptor = report(1.0, 3, 16);
const SHAKE_DETECTOR_REPORT: ReportDescriptor = report(1.0, 1, 6);
const ACTIVITY_CLASSIFIER_REPORT: ReportDescriptor = report(1.0, 1, 16);

/// Descriptor for a sensor report id.
///
/// There is deliberately no fallback entry: an id missing from the table is
/// [`ReportError::UnknownReportId`].
pub fn descriptor(report_id: u8) -> Result<&'static ReportDescriptor> {
    let descriptor = match report_id {
        ACCELEROMETER => &ACCELEROMETER_REPORT,
        GYROSCOPE => &GYROSCOPE_REPORT,
        MAGNETOMETER => &MAGNETOMETER_REPORT,
        LINEAR_ACCELERATION => &LINEAR_ACCELERATION_REPORT,
        ROTATION_VECTOR => &ROTATION_VECTOR_REPORT,
        GRAVITY => &GRAVITY_REPORT,
        GAME_ROTATION_VECTOR => &GAME_ROTATION_VECTOR_REPORT,
        GEOMAGNETIC_ROTATION_VECTOR => &GEOMAGNETIC_ROTATION_VECTOR_REPORT,
        STEP_COUNTER => &STEP_COUNTER_REPORT,
        STABILITY_CLASSIFIER => &STABILITY_CLASSIFIER_REPORT,
        RAW_ACCELEROMETER => &RAW_ACCELEROMETER_REPORT,
        RAW_GYROSCOPE => &RAW_GYROSCOPE_REPORT,
        RAW_MAGNETOMETER => &RAW_MAGNETOMETER_REPORT,
        SHAKE_DETECTOR => &SHAKE_DETECTOR_REPORT,
        ACTIVITY_CLASSIFIER => &ACTIVITY_CLASSIFIER_REPORT,
        other => return Err(ReportError::UnknownReportId(other)),
    };
    Ok(descriptor)
}

/// Encoded length of a control/meta report that can appear inline with
/// sensor reports.
pub fn meta_report_length(report_id: u8) -> Result<usize> {
    match report_id {
        PRODUCT_ID_RESPONSE => Ok(16),
        GET_FEATURE_RESPONSE => Ok(17),
        COMMAND_RESPONSE => Ok(16),
        BASE_TIMESTAMP => Ok(5),
        TIMESTAMP_REBASE => Ok(5),
        other => Err(ReportError::UnknownReportId(other)),
    }
}

/// Encoded length of any report, choosing the meta table for ids at or
/// above `0xF0` and the sensor descriptors below it.
pub fn report_length(report_id: u8) -> Result<usize> {
    if report_id >= META_REPORT_BASE {
        meta_report_length(report_id)
    } else {
        descriptor(report_id).map(|d| d.encoded_length)
    }
}
