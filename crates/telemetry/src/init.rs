// Path: crates/telemetry/src/init.rs
use anyhow::Context;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Initializes the global `tracing` subscriber for structured JSON logging.
///
/// Records emitted through the `log` facade are bridged into `tracing`.
pub fn init_tracing() -> anyhow::Result<()> {
    let fmt_layer = fmt::layer()
        .json()
        .with_target(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());
    let subscriber = Registry::default().with(env_filter("info")).with(fmt_layer);
    tracing_log::LogTracer::init().context("Failed to set `log` to `tracing` bridge")?;
    tracing::subscriber::set_global_default(subscriber).context("Failed to set global subscriber")?;
    Ok(())
}

/// Installs a human-readable subscriber that writes through the test harness.
///
/// Safe to call from every test: only the first call installs anything.
pub fn init_test_tracing() {
    let _ = fmt()
        .with_test_writer()
        .with_target(true)
        .with_env_filter(env_filter("trace"))
        .try_init();
}
