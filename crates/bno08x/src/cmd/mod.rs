use std::time::Duration;

use clap::{Args, Subcommand};
use shtp_device::Session;
#[cfg(target_os = "linux")]
use shtp_device::SessionConfig;
use shtp_report::{report_id_from_name, report_name, WIRED_REPORTS};

use crate::exit::{CliError, CliResult, USAGE};
use crate::output::OutputFormat;

pub mod probe;
pub mod read;
pub mod reports;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Reset the hub, verify its identity and print the product id.
    Probe(ProbeArgs),
    /// Enable reports and print the latest readings periodically.
    Read(ReadArgs),
    /// List the sensor reports this driver knows how to size and decode.
    Reports(ReportsArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Probe(args) => probe::run(args, format),
        Command::Read(args) => read::run(args, format),
        Command::Reports(args) => reports::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

/// Which hub to talk to.
#[derive(Args, Debug)]
pub struct DeviceArgs {
    /// I2C adapter number (/dev/i2c-N).
    #[arg(long, short = 'b', env = "BNO08X_BUS", default_value_t = 1)]
    pub bus: u8,
    /// 7-bit device address, hex (0x4A) or decimal.
    #[arg(
        long,
        short = 'a',
        env = "BNO08X_ADDRESS",
        default_value = "0x4A",
        value_parser = parse_address
    )]
    pub address: u16,
}

#[derive(Args, Debug)]
pub struct ProbeArgs {
    #[command(flatten)]
    pub device: DeviceArgs,
}

#[derive(Args, Debug)]
pub struct ReadArgs {
    #[command(flatten)]
    pub device: DeviceArgs,
    /// Reports to enable (comma-separated; only reports marked decoded in
    /// `bno08x reports` are accepted).
    #[arg(
        long,
        value_delimiter = ',',
        default_values = ["accelerometer", "gyroscope"],
        value_parser = parse_report
    )]
    pub reports: Vec<u8>,
    /// Report interval requested from the hub, in microseconds.
    #[arg(long, default_value_t = 50_000)]
    pub interval_us: u32,
    /// Time between printed samples (e.g. 300ms, 1s).
    #[arg(long, default_value = "300ms")]
    pub period: String,
    /// Exit after printing N samples.
    #[arg(long)]
    pub count: Option<usize>,
}

#[derive(Args, Debug, Default)]
pub struct ReportsArgs {}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}

fn parse_address(input: &str) -> Result<u16, String> {
    let input = input.trim();
    let parsed = match input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
    {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => input.parse::<u16>(),
    };
    match parsed {
        Ok(address) if address <= 0x7F => Ok(address),
        Ok(address) => Err(format!("address {address:#x} is not a 7-bit address")),
        Err(err) => Err(format!("invalid address '{input}': {err}")),
    }
}

fn parse_report(input: &str) -> Result<u8, String> {
    let report_id =
        report_id_from_name(input.trim()).ok_or_else(|| format!("unknown report '{input}'"))?;
    if WIRED_REPORTS.contains(&report_id) {
        Ok(report_id)
    } else {
        let decoded: Vec<&str> = WIRED_REPORTS.iter().map(|&id| report_name(id)).collect();
        Err(format!(
            "report '{input}' is not decoded (choose from: {})",
            decoded.join(", ")
        ))
    }
}

pub(crate) fn parse_duration(input: &str) -> CliResult<Duration> {
    let input = input.trim();
    if input.is_empty() {
        return Err(CliError::new(USAGE, "duration must not be empty"));
    }

    let (number, unit) = if let Some(num) = input.strip_suffix("ms") {
        (num, "ms")
    } else if let Some(num) = input.strip_suffix('s') {
        (num, "s")
    } else {
        (input, "ms")
    };

    let value: u64 = number
        .parse()
        .map_err(|_| CliError::new(USAGE, format!("invalid duration value: {input}")))?;

    if value == 0 {
        return Err(CliError::new(USAGE, "duration must be greater than zero"));
    }

    match unit {
        "ms" => Ok(Duration::from_millis(value)),
        _ => Ok(Duration::from_secs(value)),
    }
}

#[cfg(target_os = "linux")]
pub(crate) fn open_session(
    device: &DeviceArgs,
) -> CliResult<Session<shtp_transport::I2cDevice>> {
    Session::open_i2c(device.bus, device.address, SessionConfig::default())
        .map_err(|err| crate::exit::device_error("open failed", err))
}

#[cfg(not(target_os = "linux"))]
pub(crate) fn open_session(device: &DeviceArgs) -> CliResult<Session<NoBus>> {
    let _ = device;
    Err(CliError::new(
        crate::exit::TRANSPORT_ERROR,
        "I2C access is only available on Linux",
    ))
}

/// Placeholder transport type for platforms without an I2C adapter.
#[cfg(not(target_os = "linux"))]
pub(crate) enum NoBus {}

#[cfg(not(target_os = "linux"))]
impl shtp_transport::Transport for NoBus {
    fn read_exact(&mut self, _buf: &mut [u8]) -> shtp_transport::Result<()> {
        match *self {}
    }

    fn write_exact(&mut self, _buf: &[u8]) -> shtp_transport::Result<()> {
        match *self {}
    }
}
