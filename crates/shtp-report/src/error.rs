/// Errors that can occur while decoding sensor reports.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReportError {
    /// The report id has no entry in either length table.
    #[error("unknown report id {0:#04x}")]
    UnknownReportId(u8),

    /// A report claims more bytes than the packet holds.
    #[error(
        "report {report_id:#04x} at offset {offset} needs {needed} bytes, {available} available"
    )]
    Truncated {
        report_id: u8,
        offset: usize,
        needed: usize,
        available: usize,
    },
}

pub type Result<T> = std::result::Result<T, ReportError>;
