use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards the business logging port to `tracing` under a single target so
/// storefront events can be filtered with `RUST_LOG=storefront=debug`.
pub struct TracingLogger;

pub const TARGET: &str = "storefront";

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: TARGET, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: TARGET, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: TARGET, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: TARGET, "{}", message);
    }
}
