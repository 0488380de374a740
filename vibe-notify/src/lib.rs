//! vibe-notify
//!
//! Forwards lifecycle events from an automation tool (working, stop, tool
//! use, ...) to a local controller over HTTP. Two binaries share this crate:
//! `ble-notify` talks to the BLE controller and `vibekeys-notify` to the
//! VibeKeys controller.
//!
//! Each invocation sends at most one request and never waits for it. For
//! `tool` and `ask` it also prints `{"permissionDecision":"ask"}` so the
//! caller pauses and prompts.

mod cli;
mod config;
mod deliver;
mod notifier;
mod routes;

use std::process::ExitCode;

pub use config::Variant;

use cli::Cli;
use config::Config;
use deliver::{Detached, Request};
use notifier::Notifier;

/// Filter for diagnostics on stderr, e.g. `VIBE_NOTIFY_LOG=debug`
const LOG_ENV: &str = "VIBE_NOTIFY_LOG";

/// Shared `main` for both binaries
pub fn run_cli(variant: Variant) -> ExitCode {
    init_tracing();

    let Some(cli) = Cli::parse_args(std::env::args_os()) else {
        return ExitCode::SUCCESS;
    };

    if cli.deliver {
        if let Some(request) = Request::from_env() {
            deliver::deliver_blocking(request);
        }
        return ExitCode::SUCCESS;
    }

    let notifier = Notifier::new(Config::from_env(variant), Detached);
    tracing::debug!(base_url = %notifier.config().base_url, action = ?cli.action(), "notifying");

    notifier.run(
        cli.action(),
        cli.message(),
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
    )
}

// stdout belongs to the decision line, so diagnostics only ever go to stderr
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
