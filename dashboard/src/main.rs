mod app;
mod client;
mod config;
mod demo;
mod errors;
mod model;
mod present;
mod range;
mod render;

use crate::app::Dashboard;
use crate::client::{FetchMode, TelemetryClient};
use crate::config::Config;
use crate::present::RowActions;
use anyhow::Result;
use clap::Parser;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::info;

const DEMO_OBJECT_ID: &str = "demo-vehicle";

/// CLI implementation of the per-row hooks: informational acknowledgment only
struct LogActions;

impl RowActions for LogActions {
    fn show_details(&self, object_id: &str) {
        info!("details view requested for {}", object_id);
    }

    fn download_report(&self, object_id: &str) {
        info!("report download requested for {}", object_id);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    // Initialize logging
    tracing_subscriber::fmt::init();

    let mode = if config.demo {
        FetchMode::Demo
    } else {
        FetchMode::Live
    };
    let object_id = config
        .object_id
        .clone()
        .unwrap_or_else(|| DEMO_OBJECT_ID.to_string());

    info!("Starting fuel telemetry dashboard for {}", object_id);

    let client = TelemetryClient::new(
        config.api_base_url.clone().unwrap_or_default(),
        config.api_key.clone().unwrap_or_default(),
        object_id.clone(),
        mode,
        Duration::from_secs(config.timeout_secs),
    )?;

    // Display states flow over a channel to the render task; rendering
    // itself is a pure state-to-text mapping.
    let (tx, mut rx) = mpsc::channel(16);
    let renderer = tokio::spawn(async move {
        while let Some(state) = rx.recv().await {
            print!("{}", render::render(&state));
        }
    });

    let dashboard = Dashboard::new(client, tx);
    dashboard
        .trigger(config.from.as_deref(), config.to.as_deref())
        .await;
    drop(dashboard);

    renderer.await?;

    let actions = LogActions;
    if config.show_details {
        actions.show_details(&object_id);
    }
    if config.download_report {
        actions.download_report(&object_id);
    }

    Ok(())
}
