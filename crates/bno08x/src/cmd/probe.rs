use serde::Serialize;
use shtp_frame::{channel_name, CHANNEL_COUNT};
use shtp_report::ProductId;

use crate::cmd::{open_session, ProbeArgs};
use crate::exit::{CliResult, SUCCESS};
use crate::output::OutputFormat;

#[derive(Serialize)]
struct ChannelInfo {
    id: u8,
    name: &'static str,
    outbound_sequence: Option<u8>,
    inbound_sequence: Option<u8>,
}

#[derive(Serialize)]
struct ProbeOutput {
    bus: u8,
    address: u16,
    state: String,
    product_id: Option<ProductId>,
    channels: Vec<ChannelInfo>,
}

pub fn run(args: ProbeArgs, format: OutputFormat) -> CliResult<i32> {
    let session = open_session(&args.device)?;

    let channels = (0..CHANNEL_COUNT as u8)
        .map(|id| ChannelInfo {
            id,
            name: channel_name(id),
            outbound_sequence: session.framer().outbound_sequence(id),
            inbound_sequence: session.framer().inbound_sequence(id),
        })
        .collect();

    let out = ProbeOutput {
        bus: args.device.bus,
        address: args.device.address,
        state: session.state().to_string(),
        product_id: session.product_id().copied(),
        channels,
    };

    print_probe(&out, format);
    Ok(SUCCESS)
}

fn print_probe(out: &ProbeOutput, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string(out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table | OutputFormat::Pretty => {
            println!("Sensor Hub:");
            println!("  Device:        /dev/i2c-{} @ {:#04x}", out.bus, out.address);
            println!("  State:         {}", out.state);
            match &out.product_id {
                Some(id) => {
                    println!("  Part number:   {}", id.sw_part_number);
                    println!("  Firmware:      {} (build {})", id.version(), id.sw_build_number);
                    println!("  Reset cause:   {}", reset_cause_name(id.reset_cause));
                }
                None => println!("  Product id:    unavailable"),
            }
            let seen = out
                .channels
                .iter()
                .filter(|c| c.inbound_sequence.is_some())
                .map(|c| c.name)
                .collect::<Vec<_>>()
                .join(", ");
            println!("  Active chans:  {seen}");
        }
    }
}

fn reset_cause_name(cause: u8) -> &'static str {
    match cause {
        1 => "power-on",
        2 => "internal",
        3 => "watchdog",
        4 => "external",
        5 => "other",
        _ => "unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_causes() {
        assert_eq!(reset_cause_name(1), "power-on");
        assert_eq!(reset_cause_name(3), "watchdog");
        assert_eq!(reset_cause_name(0), "unknown");
    }
}
