//! Forward lifecycle events to the VibeKeys controller
//!
//! Usage: vibekeys-notify <working|stop|pending|notify|tool|post|ask>
//!        vibekeys-notify <send|msg> <message...>
//!
//! The controller URL comes from `VIBEKEYS_APP_URL` (default
//! `http://127.0.0.1:57001`).

fn main() -> std::process::ExitCode {
    vibe_notify::run_cli(vibe_notify::Variant::VibeKeys)
}
