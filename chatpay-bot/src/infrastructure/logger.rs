use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Install the tracing pipeline. `log` macro records are bridged through
/// the subscriber, so both crates share one output. Safe to call twice.
pub fn init(level: &str) {
    INIT.call_once(|| {
        let default_filter = format!("info,chatpay_bot={level},chatpay_core={level}");
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_filter));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init();
    });
}
