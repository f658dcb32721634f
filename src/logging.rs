//! Diagnostic logging
//!
//! Library code logs through `tracing`; the binary installs a `fmt`
//! subscriber writing to stderr so stdout carries only the tree (or NDJSON).
//! `FLUXTREE_LOG` takes an `EnvFilter` directive and wins over `-v`.

use std::sync::OnceLock;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

pub const LOG_ENV: &str = "FLUXTREE_LOG";

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Default filter directive for a `-v` count.
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn build_filter(env_value: Option<String>, verbose: u8) -> EnvFilter {
    env_value
        .filter(|v| !v.trim().is_empty())
        .and_then(|v| EnvFilter::try_new(v).ok())
        .unwrap_or_else(|| EnvFilter::new(level_for_verbosity(verbose)))
}

/// Install the stderr subscriber once. Later calls are no-ops.
pub fn init_logging(verbose: u8, ansi: bool) {
    LOGGER_INITIALIZED.get_or_init(|| {
        let filter = build_filter(std::env::var(LOG_ENV).ok(), verbose);

        let subscriber = tracing_subscriber::registry().with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbose >= 2)
                .with_level(true)
                .with_ansi(ansi)
                .without_time()
                .with_filter(filter),
        );

        // Another subscriber (e.g. a test harness) may already be installed.
        if subscriber.try_init().is_err() {
            tracing::debug!("global tracing subscriber already initialized");
        }
    });
}
