//! Fastlist Runtime
//!
//! Small binary that exercises `fastlist_core` and logs what it sees

mod scenario;
mod settings;

use anyhow::Result;
use settings::RunnerSettings;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let settings = RunnerSettings::resolve(std::env::args().nth(1))?;

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Fastlist v{}", fastlist_core::VERSION);
    tracing::debug!(?settings, "settings loaded");

    tracing::info!("Running scenario...");
    scenario::run_scenario()?;

    let report = scenario::run_growth(&settings)?;
    tracing::info!(
        len = report.len,
        capacity = report.capacity,
        reallocations = report.reallocations,
        peak_bytes = report.peak_reserved_bytes,
        "growth run finished"
    );

    Ok(())
}
