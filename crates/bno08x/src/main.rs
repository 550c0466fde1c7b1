mod cmd;
mod exit;
mod logging;
mod output;

use clap::Parser;

use crate::cmd::Command;
use crate::logging::{init_logging, LogFormat, LogLevel};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "bno08x", version, about = "BNO08x sensor hub CLI")]
struct Cli {
    /// Output format.
    #[arg(long, value_name = "FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Minimum log level (stderr). RUST_LOG directives take precedence.
    #[arg(long, value_name = "LEVEL", default_value = "info", global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_level);

    let format = cli.format.unwrap_or_else(OutputFormat::default_for_stdout);
    let result = cmd::run(cli.command, format);

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_read_subcommand() {
        let cli = Cli::try_parse_from([
            "bno08x",
            "read",
            "--bus",
            "3",
            "--address",
            "0x4b",
            "--reports",
            "accelerometer,gyroscope,rotation-vector",
            "--count",
            "5",
        ])
        .expect("read args should parse");

        match cli.command {
            Command::Read(args) => {
                assert_eq!(args.device.bus, 3);
                assert_eq!(args.device.address, 0x4B);
                assert_eq!(args.reports, vec![0x01, 0x02, 0x05]);
                assert_eq!(args.count, Some(5));
            }
            other => panic!("expected read, got {other:?}"),
        }
    }

    #[test]
    fn read_defaults_to_accel_and_gyro() {
        let cli = Cli::try_parse_from(["bno08x", "read"]).expect("read args should parse");
        match cli.command {
            Command::Read(args) => {
                assert_eq!(args.reports, vec![0x01, 0x02]);
                assert_eq!(args.interval_us, 50_000);
                assert_eq!(args.device.address, 0x4A);
            }
            other => panic!("expected read, got {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_report_name() {
        let err = Cli::try_parse_from(["bno08x", "read", "--reports", "barometer"])
            .expect_err("unknown report should fail");
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn parses_probe_with_decimal_address() {
        let cli = Cli::try_parse_from(["bno08x", "probe", "-a", "75", "--format", "json"])
            .expect("probe args should parse");
        assert!(matches!(cli.format, Some(OutputFormat::Json)));
        match cli.command {
            Command::Probe(args) => assert_eq!(args.device.address, 75),
            other => panic!("expected probe, got {other:?}"),
        }
    }
}
