use std::env;

use tracing_subscriber::EnvFilter;

pub const LOG_VAR: &str = "PKENGINE_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Install the stderr subscriber; stdout is reserved for query output
pub fn init() {
    let filter = env::var(LOG_VAR)
        .or_else(|_| env::var("RUST_LOG"))
        .unwrap_or_else(|_| DEFAULT_FILTER.to_string());

    let filter = EnvFilter::try_new(&filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // A second init (tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
