//! Logging setup.
//!
//! Events go to stderr so they never interleave with the game on stdout.
//! `RPS_LOG` takes precedence over `RUST_LOG`; the default level is `warn`.

use std::sync::OnceLock;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

static INIT: OnceLock<()> = OnceLock::new();

fn resolve_env_filter() -> EnvFilter {
    if let Ok(level) = std::env::var("RPS_LOG")
        && let Ok(filter) = EnvFilter::try_new(level)
    {
        return filter;
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global subscriber once per process.
pub fn init() {
    INIT.get_or_init(|| {
        let console_layer = tracing_subscriber::fmt::layer()
            .compact()
            .with_target(false)
            .with_writer(std::io::stderr);
        let _ = tracing_subscriber::registry()
            .with(resolve_env_filter())
            .with(console_layer)
            .try_init();
    });
}
