//! signal-notify - Nagios notifications via a Signal REST gateway
//!
//! Invoked by a monitoring system as a notification command: composes one
//! alert message from the passed macros and fires one send attempt at the
//! configured gateway, then exits.

use clap::Parser;
use rand::Rng;
use signal_notify::{
    app,
    cli::Cli,
    config::{Config, DEFAULT_CONFIG_PATH},
    delivery::SignalClient,
};
use std::path::Path;
use std::time::Duration;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| Path::new(DEFAULT_CONFIG_PATH).to_path_buf());
    let config = Config::load(&config_path).unwrap_or_else(|err| {
        // Logging is not set up yet; report directly on the operator stream.
        eprintln!("Failed to load configuration from {}: {err}", config_path.display());
        std::process::exit(1);
    });

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    // Spread near-simultaneous notifications from the monitoring system out
    // so they do not all hit the gateway at once.
    let delay = if config.delay.max_seconds > config.delay.min_seconds {
        let seconds =
            rand::rng().random_range(config.delay.min_seconds..config.delay.max_seconds);
        std::thread::sleep(Duration::from_secs_f64(seconds));
        seconds
    } else {
        0.0
    };

    let invocation: Vec<String> = std::env::args().collect();
    debug!(delay_seconds = delay, command = %invocation.join(" "), "invocation");

    let client = SignalClient::new(&config.gateway);
    app::run(cli, &client);
}
