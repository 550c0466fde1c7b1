use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;
use shtp_report::{descriptor, report_name, ReportDescriptor, WIRED_REPORTS};

use crate::cmd::ReportsArgs;
use crate::exit::{CliResult, SUCCESS};
use crate::output::OutputFormat;

#[derive(Serialize)]
struct ReportInfo {
    id: u8,
    name: &'static str,
    #[serde(flatten)]
    descriptor: ReportDescriptor,
    decoded: bool,
}

fn catalog() -> Vec<ReportInfo> {
    (0u8..0xF0)
        .filter_map(|id| {
            descriptor(id).ok().map(|d| ReportInfo {
                id,
                name: report_name(id),
                descriptor: *d,
                decoded: WIRED_REPORTS.contains(&id),
            })
        })
        .collect()
}

pub fn run(_args: ReportsArgs, format: OutputFormat) -> CliResult<i32> {
    let reports = catalog();
    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string(&reports).unwrap_or_else(|_| "[]".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["ID", "NAME", "SCALAR", "AXES", "BYTES", "DECODED"]);
            for r in &reports {
                table.add_row(vec![
                    format!("{:#04x}", r.id),
                    r.name.to_string(),
                    r.descriptor.scalar.to_string(),
                    r.descriptor.component_count.to_string(),
                    r.descriptor.encoded_length.to_string(),
                    if r.decoded { "yes" } else { "no" }.to_string(),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for r in &reports {
                println!(
                    "{:#04x} {:<28} scalar={} axes={} bytes={}",
                    r.id,
                    r.name,
                    r.descriptor.scalar,
                    r.descriptor.component_count,
                    r.descriptor.encoded_length
                );
            }
        }
    }
    Ok(SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_lists_every_sensor_report() {
        let reports = catalog();
        assert_eq!(reports.len(), 15);
        assert_eq!(reports[0].name, "accelerometer");
        assert!(reports[0].decoded);
        assert!(reports.iter().filter(|r| r.decoded).count() == 2);
    }
}
