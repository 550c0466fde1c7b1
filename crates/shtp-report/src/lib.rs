//! Sensor report catalog and decoder for SHTP input-report packets.
//!
//! An input-report packet payload is a run of back-to-back sub-reports,
//! each starting with a one-byte report id. The id determines how many
//! bytes the sub-report occupies, so an unknown id cannot be skipped:
//! it would misalign every report after it.

pub mod catalog;
pub mod decoder;
pub mod error;
pub mod ids;
pub mod product;

pub use catalog::{descriptor, meta_report_length, report_length, ReportDescriptor};
pub use decoder::{decode_sensor_reports, Readings, WIRED_REPORTS};
pub use error::{ReportError, Result};
pub use ids::{report_id_from_name, report_name};
pub use product::ProductId;
