//! Lancerlog Engine - Main entry point.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lancerlog_domain::{segments_for_level, ticks_to_max, total_ticks, MAX_LICENSE_LEVEL};
use lancerlog_engine::{
    app::{App, Repositories},
    infrastructure::{
        clock::SystemClock,
        config::{load_dotenv_from_repo_root, EngineConfig},
        ports::ClockPort,
    },
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the engine may run from `crates/engine`).
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EngineConfig::log_filter_from_env().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Lancerlog Engine");

    let config = EngineConfig::from_env();
    tracing::info!(
        max_ll_clock_change = config.max_ll_clock_change,
        gm_log_page_limit = config.gm_log_page_limit,
        "Loaded configuration"
    );

    let clock: Arc<dyn ClockPort> = Arc::new(SystemClock::new());
    let app = App::new(Repositories::in_memory(), clock, config);

    for level in 0..=MAX_LICENSE_LEVEL {
        tracing::info!(
            level,
            segments = segments_for_level(level),
            ticks_to_reach = total_ticks(level, 0),
            "License level"
        );
    }
    tracing::info!(ticks = ticks_to_max(), "Ticks from LL 0 to the terminal level");

    let pilots = app.use_cases.pilots.list.all().await?;
    let maxed = pilots.iter().filter(|summary| summary.maxed).count();
    tracing::info!(pilots = pilots.len(), maxed, "Engine ready");

    Ok(())
}
