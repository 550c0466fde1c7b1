use serde::Serialize;

use crate::error::{ReportError, Result};
use crate::ids::PRODUCT_ID_RESPONSE;

/// Encoded size of a product-id response.
pub const PRODUCT_ID_RESPONSE_LEN: usize = 16;

/// Identity block returned by the hub in answer to a product-id request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProductId {
    /// Cause of the most recent reset (1 = power on, 2 = internal, 3 =
    /// watchdog, 4 = external, 5 = other).
    pub reset_cause: u8,
    pub sw_version_major: u8,
    pub sw_version_minor: u8,
    pub sw_version_patch: u16,
    pub sw_part_number: u32,
    pub sw_build_number: u32,
}

impl ProductId {
    /// Parse a product-id response starting at its report id byte.
    ///
    /// Returns `Ok(None)` when the report is some other message.
    pub fn parse(report: &[u8]) -> Result<Option<Self>> {
        match report.first() {
            Some(&PRODUCT_ID_RESPONSE) => {}
            _ => return Ok(None),
        }
        if report.len() < PRODUCT_ID_RESPONSE_LEN {
            return Err(ReportError::Truncated {
                report_id: PRODUCT_ID_RESPONSE,
                offset: 0,
                needed: PRODUCT_ID_RESPONSE_LEN,
                available: report.len(),
            });
        }

        let u32_at = |at: usize| {
            u32::from_le_bytes([report[at], report[at + 1], report[at + 2], report[at + 3]])
        };

        Ok(Some(Self {
            reset_cause: report[1],
            sw_version_major: report[2],
            sw_version_minor: report[3],
            sw_part_number: u32_at(4),
            sw_build_number: u32_at(8),
            sw_version_patch: u16::from_le_bytes([report[12], report[13]]),
        }))
    }

    /// Software version as `major.minor.patch`.
    pub fn version(&self) -> String {
        format!(
            "{}.{}.{}",
            self.sw_version_major, self.sw_version_minor, self.sw_version_patch
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_response() -> Vec<u8> {
        let mut report = vec![PRODUCT_ID_RESPONSE, 0x01, 3, 2];
        report.extend_from_slice(&10004517u32.to_le_bytes());
        report.extend_from_slice(&373u32.to_le_bytes());
        report.extend_from_slice(&7u16.to_le_bytes());
        report.extend_from_slice(&[0, 0]);
        report
    }

    #[test]
    fn parses_identity_fields() {
        let id = ProductId::parse(&sample_response()).unwrap().unwrap();
        assert_eq!(id.reset_cause, 1);
        assert_eq!(id.sw_part_number, 10004517);
        assert_eq!(id.sw_build_number, 373);
        assert_eq!(id.version(), "3.2.7");
    }

    #[test]
    fn other_reports_are_not_product_ids() {
        assert_eq!(ProductId::parse(&[0xF1, 0, 0]).unwrap(), None);
        assert_eq!(ProductId::parse(&[]).unwrap(), None);
    }

    #[test]
    fn short_response_is_truncated() {
        let err = ProductId::parse(&sample_response()[..9]).unwrap_err();
        assert!(matches!(err, ReportError::Truncated { available: 9, .. }));
    }

    #[test]
    fn serializes_for_cli_output() {
        let id = ProductId::parse(&sample_response()).unwrap().unwrap();
        let json = serde_json::to_value(id).unwrap();
        assert_eq!(json["sw_part_number"], 10004517);
        assert_eq!(json["sw_version_major"], 3);
    }
}
