use std::collections::BTreeMap;

use tracing::trace;

use crate::catalog::{descriptor, report_length};
use crate::error::{ReportError, Result};
use crate::ids::{self, report_name};

/// Report ids whose samples are decoded into [`Readings`]. Every other known
/// id is only stepped over.
pub const WIRED_REPORTS: [u8; 2] = [ids::ACCELEROMETER, ids::GYROSCOPE];

/// Offset of the first sample inside a sensor report: report id, sequence,
/// status and delay bytes come first.
const SAMPLE_OFFSET: usize = 4;

/// Most recent decoded values per report id.
///
/// Each decode replaces the previous values for that id wholesale; nothing
/// older is kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Readings {
    values: BTreeMap<u8, Vec<f32>>,
}

impl Readings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest values for `report_id`, empty if none has been decoded.
    pub fn get(&self, report_id: u8) -> &[f32] {
        self.values
            .get(&report_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Replace the values for `report_id`.
    pub fn insert(&mut self, report_id: u8, values: Vec<f32>) {
        self.values.insert(report_id, values);
    }

    /// Iterate over `(report_id, values)` in report id order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &[f32])> {
        self.values.iter().map(|(id, v)| (*id, v.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }
}

/// Walk the payload of an input-report packet and update `readings`.
///
/// `payload` excludes the 4-byte packet header. Returns the number of
/// sub-reports stepped over.
pub fn decode_sensor_reports(payload: &[u8], readings: &mut Readings) -> Result<usize> {
    let mut offset = 0usize;
    let mut walked = 0usize;

    while offset < payload.len() {
        let report_id = payload[offset];
        let length = report_length(report_id)?;
        let available = payload.len() - offset;
        if length > available {
            return Err(ReportError::Truncated {
                report_id,
                offset,
                needed: length,
                available,
            });
        }

        let report = &payload[offset..offset + length];
        if WIRED_REPORTS.contains(&report_id) {
            let values = decode_vector(report_id, report)?;
            trace!(report = report_name(report_id), ?values, "decoded report");
            readings.insert(report_id, values);
        } else {
            trace!(report = report_name(report_id), length, "skipped report");
        }

        offset += length;
        walked += 1;
    }

    Ok(walked)
}

/// Convert the signed 16-bit samples of one vector report to physical units.
fn decode_vector(report_id: u8, report: &[u8]) -> Result<Vec<f32>> {
    let descriptor = descriptor(report_id)?;
    let end = SAMPLE_OFFSET + 2 * descriptor.component_count;
    let samples = report.get(SAMPLE_OFFSET..end).ok_or(ReportError::Truncated {
        report_id,
        offset: SAMPLE_OFFSET,
        needed: end,
        available: report.len(),
    })?;

    Ok(samples
        .chunks_exact(2)
        .map(|pair| f32::from(i16::from_le_bytes([pair[0], pair[1]])) * descriptor.scalar)
        .collect())
}
