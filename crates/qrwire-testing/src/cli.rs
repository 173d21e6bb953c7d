//! Configured commands for driving the qrwire binary.

use assert_cmd::Command;

/// Base command for the qrwire binary.
///
/// Pins `TZ=UTC` so calendar payloads come out identical on every host;
/// tests that care about local-time behavior override it.
#[allow(deprecated)]
pub fn qrwire_command() -> Command {
    let mut cmd = Command::cargo_bin("qrwire").expect("qrwire binary should be built");
    cmd.env("TZ", "UTC");
    cmd
}
