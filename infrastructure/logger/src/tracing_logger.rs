use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards business log lines to `tracing` under the `pharmacompare` target.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "pharmacompare", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "pharmacompare", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "pharmacompare", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "pharmacompare", "{}", message);
    }
}
