//! Forward lifecycle events to the BLE controller
//!
//! Usage: ble-notify <working|stop|waiting|notify|tool|post|ask>
//!
//! The controller URL comes from `BLE_URL` (default `http://127.0.0.1:3000`).

fn main() -> std::process::ExitCode {
    vibe_notify::run_cli(vibe_notify::Variant::Ble)
}
