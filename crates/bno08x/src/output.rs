use std::io::IsTerminal;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;
use shtp_report::report_name;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

/// One report's latest values at the time of a read-loop tick.
#[derive(Debug, Serialize)]
pub struct ReadingRow {
    pub report_id: u8,
    pub report: &'static str,
    pub values: Vec<f32>,
}

impl ReadingRow {
    pub fn new(report_id: u8, values: Vec<f32>) -> Self {
        Self {
            report_id,
            report: report_name(report_id),
            values,
        }
    }
}

#[derive(Serialize)]
struct ReadingOutput<'a> {
    report_id: u8,
    report: &'a str,
    values: &'a [f32],
    timestamp: String,
}

pub fn print_readings(rows: &[ReadingRow], format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let timestamp = now_unix_millis();
            for row in rows {
                let out = ReadingOutput {
                    report_id: row.report_id,
                    report: row.report,
                    values: &row.values,
                    timestamp: timestamp.clone(),
                };
                println!(
                    "{}",
                    serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
                );
            }
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["REPORT", "ID", "VALUES"]);
            for row in rows {
                table.add_row(vec![
                    row.report.to_string(),
                    format!("{:#04x}", row.report_id),
                    format_values(&row.values),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for row in rows {
                println!("{}: {}", row.report, format_values(&row.values));
            }
        }
    }
}

pub fn format_values(values: &[f32]) -> String {
    if values.is_empty() {
        return "-".to_string();
    }
    values
        .iter()
        .map(|v| format!("{v:.6}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn now_unix_millis() -> String {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis().to_string())
        .unwrap_or_else(|_| "0".to_string())
}
