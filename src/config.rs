// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{report::DEFAULT_OUTPUT, DEFAULT_CONCURRENCY};
use crate::export::ReportFormat;
use crate::lister::KindRegistry;
use anyhow::{ensure, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Report applications, components, integration tests and release plans of every tenant namespace
#[derive(Parser, Debug, Clone)]
#[command(name = "tenant-dashboard", version, long_about = None)]
pub struct Config {
    /// Path to a kubeconfig file (defaults to in-cluster config or ~/.kube/config)
    #[arg(long, env = "DASHBOARD_KUBECONFIG")]
    pub kubeconfig: Option<PathBuf>,

    /// Output file, or '-' for stdout
    #[arg(short, long, env = "DASHBOARD_OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Output format: csv, json or yaml
    #[arg(short, long, env = "DASHBOARD_FORMAT", default_value = "csv")]
    pub format: ReportFormat,

    /// Maximum number of namespaces aggregated concurrently
    #[arg(short, long, env = "DASHBOARD_CONCURRENCY", default_value_t = DEFAULT_CONCURRENCY)]
    pub concurrency: usize,

    /// Abort the run if it takes longer than this many seconds
    #[arg(long, env = "DASHBOARD_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// Served API version of IntegrationTestScenario, if not the default
    #[arg(long, env = "DASHBOARD_TEST_SCENARIO_VERSION")]
    pub test_scenario_version: Option<String>,
}

impl Config {
    /// Load configuration from command-line arguments and environment variables
    pub fn from_args() -> Result<Self> {
        let config = Self::parse();
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.concurrency >= 1, "concurrency must be at least 1");
        ensure!(
            self.timeout_secs != Some(0),
            "timeout must be greater than 0 seconds"
        );
        Ok(())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Resource kinds the lister is allowed to query
    pub fn kind_registry(&self) -> KindRegistry {
        KindRegistry::tenant_kinds(self.test_scenario_version.as_deref())
    }
}
