// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use tenant_dashboard::aggregate::FleetAggregator;
use tenant_dashboard::config::Config;
use tenant_dashboard::export::export_to_path;
use tenant_dashboard::kubernetes::create_client;
use tenant_dashboard::lister::KubeLister;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so the report can be written to stdout
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_args().context("Invalid configuration")?;
    info!(
        "Configuration loaded: concurrency={}, format={}, output={}",
        config.concurrency,
        config.format,
        config.output.display()
    );

    let client = create_client(&config).await?;
    info!("Connected to Kubernetes cluster");

    let lister = KubeLister::new(client, config.kind_registry());
    let aggregator = FleetAggregator::new(lister).with_concurrency(config.concurrency);

    let cancel_token = aggregator.cancel_token();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, cancelling aggregation");
            cancel_token.cancel();
        }
    });

    if let Some(timeout) = config.timeout() {
        let cancel_token = aggregator.cancel_token();
        tokio::spawn(async move {
            tokio::time::sleep(timeout).await;
            warn!("Deadline of {:?} reached, cancelling aggregation", timeout);
            cancel_token.cancel();
        });
    }

    let report = aggregator.report().await.context("Aggregation failed")?;
    info!(
        "Aggregated {} tenant namespace(s) into {} row(s)",
        report.len(),
        report.rows().count()
    );

    export_to_path(&report, config.format, &config.output).context("Failed to export report")?;
    Ok(())
}
