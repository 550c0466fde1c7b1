use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::debug;

use crate::cmd::{open_session, parse_duration, ReadArgs};
use crate::exit::{device_error, CliError, CliResult, SUCCESS};
use crate::output::{print_readings, OutputFormat, ReadingRow};

pub fn run(args: ReadArgs, format: OutputFormat) -> CliResult<i32> {
    let period = parse_duration(&args.period)?;
    let mut session = open_session(&args.device)?;

    for &report_id in &args.reports {
        session
            .enable_feature(report_id, args.interval_us, 0)
            .map_err(|err| device_error("enable report failed", err))?;
    }

    let running = Arc::new(AtomicBool::new(true));
    install_ctrlc_handler(running.clone())?;

    let mut printed = 0usize;
    while running.load(Ordering::SeqCst) {
        std::thread::sleep(period);

        let mut rows = Vec::with_capacity(args.reports.len());
        for &report_id in &args.reports {
            let values = session
                .latest(report_id)
                .map_err(|err| device_error("read failed", err))?;
            rows.push(ReadingRow::new(report_id, values));
        }
        print_readings(&rows, format);

        printed = printed.saturating_add(1);
        if let Some(count) = args.count {
            if printed >= count {
                return Ok(SUCCESS);
            }
        }
    }

    debug!(printed, "read loop interrupted");
    Ok(SUCCESS)
}

fn install_ctrlc_handler(running: Arc<AtomicBool>) -> CliResult<()> {
    ctrlc::set_handler(move || {
        running.store(false, Ordering::SeqCst);
    })
    .map_err(|err| {
        CliError::new(
            crate::exit::INTERNAL,
            format!("signal handler setup failed: {err}"),
        )
    })
}
