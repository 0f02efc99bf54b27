// Copyright (c) 2025 - Cowboy AI, Inc.
//! Oracle VM → Device42 Sync
//!
//! Runs one synchronization pass: waits for the Oracle VM Manager, then
//! pushes every server and VM into Device42.
//!
//! Run with: cargo run --bin ovm-device42-sync
//!
//! Configuration comes from the TOML file named by `OVM_SYNC_CONFIG`
//! (default `ovm-device42.toml`) or, when that file does not exist, from
//! the `OVM_*` and `D42_*` environment variables.

use anyhow::{Context, Result};
use ovm_cmdb_sync::{
    Device42Client, OvmClient, SyncConfig, SyncReport, SyncService, SyncSummary,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, warn};

const DEFAULT_CONFIG_FILE: &str = "ovm-device42.toml";

fn load_config() -> Result<SyncConfig> {
    let path = std::env::var("OVM_SYNC_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE));

    if path.exists() {
        info!("📋 Loading configuration from {}", path.display());
        SyncConfig::from_file(&path).context("Failed to load config file")
    } else {
        info!("📋 {} not found, reading environment", path.display());
        SyncConfig::from_env().context("Failed to load configuration from environment")
    }
}

fn publish_report(config: &SyncConfig, report: &SyncReport) -> Result<SyncSummary> {
    let summary = report.summary();
    info!("📊 {}", summary);

    if let Some(path) = &config.sync.report_path {
        report
            .write_json(path)
            .context("Failed to write sync report")?;
        info!("📝 Report written to {}", path.display());
    }

    Ok(summary)
}

async fn run() -> Result<bool> {
    let config = load_config()?;
    info!("  - Oracle VM Manager: {}", config.ovm.base_uri);
    info!("  - Device42: {}", config.device42.base_uri);
    info!("  - Failure policy: {:?}", config.sync.failure_policy);
    info!("  - IP selection: {:?}", config.sync.ip_selection);

    let source = OvmClient::new(&config.ovm).context("Failed to create Oracle VM client")?;
    let target =
        Device42Client::new(&config.device42).context("Failed to create Device42 client")?;
    let service = SyncService::new(source, target, config.sync_options());

    info!("⏳ Waiting for Oracle VM Manager to report RUNNING");
    let outcome = tokio::select! {
        result = service.run() => result,
        _ = tokio::signal::ctrl_c() => {
            warn!("⚠️ Interrupted, stopping sync");
            anyhow::bail!("Sync cancelled");
        }
    };

    let report = match outcome {
        Ok(report) => report,
        Err(aborted) => {
            // Still publish what was posted before the abort
            if let Err(e) = publish_report(&config, &aborted.report) {
                error!("❌ {:#}", e);
            }
            return Err(anyhow::Error::new(aborted.error).context("Sync aborted"));
        }
    };

    let summary = publish_report(&config, &report)?;
    Ok(summary.is_clean())
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("🚀 Starting Oracle VM → Device42 sync");

    match run().await {
        Ok(true) => {
            info!("✅ Sync complete");
            ExitCode::SUCCESS
        }
        Ok(false) => {
            warn!("⚠️ Sync complete with failures");
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("❌ {:#}", e);
            ExitCode::FAILURE
        }
    }
}
