//! Wires the composer and the delivery client together for one invocation.

use crate::cli::Cli;
use crate::compose::compose;
use crate::delivery::MessageSender;
use tracing::{error, info};

/// Runs one notification attempt end to end.
///
/// The monitoring system never consumes a return value from its notification
/// commands, so nothing here is fatal: an unrecognized object type is
/// reported and the send skipped, and a delivery failure is reported and
/// swallowed. The process exits 0 either way.
pub fn run(cli: Cli, sender: &dyn MessageSender) {
    let event = match cli.into_event() {
        Ok(event) => event,
        Err(e) => {
            error!("{e}");
            return;
        }
    };

    let message = compose(&event);
    match sender.send(&event.sender, &event.recipient, &message) {
        Ok(()) => info!(recipient = %event.recipient, "notification delivered"),
        Err(e) => error!(error = %e, "failed to deliver notification"),
    }
}
