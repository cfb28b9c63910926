use std::io;

use clap::ArgMatches;
use tracing::{error, info};

use gdaqrec_core::config::PollerConfig;
use gdaqrec_core::events;
use gdaqrec_core::{GdaqError, StatusPoller};

pub fn run_command(_matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();
    handle_monitor_command()
}

fn handle_monitor_command() -> Result<(), Box<dyn std::error::Error>> {
    info!(event = "cli.monitor_started");

    let poller = match StatusPoller::initialize(&PollerConfig::default()) {
        Ok(poller) => poller,
        Err(e) => {
            eprintln!("Failed to start status monitor: {}", e);
            error!(
                event = "cli.monitor_failed",
                error = %e,
                error_code = e.error_code()
            );
            return Err(e.into());
        }
    };

    let mut stdout = io::stdout();
    let Err(e) = poller.run(&mut stdout);

    eprintln!("Status monitor stopped: {}", e);
    error!(
        event = "cli.monitor_failed",
        error = %e,
        error_code = e.error_code()
    );

    Err(e.into())
}
