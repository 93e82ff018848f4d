// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Client creation from an explicit kubeconfig file or the inferred environment

use crate::config::Config;
use crate::error::{DashboardError, Result};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config as KConfig};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Create a Kubernetes client for the cluster the report is built from
#[instrument(skip(config))]
pub async fn create_client(config: &Config) -> Result<Client> {
    let client_config = match &config.kubeconfig {
        Some(path) => load_kubeconfig(path).await?,
        None => {
            debug!("No kubeconfig given, inferring cluster configuration");
            KConfig::infer().await.map_err(|e| {
                DashboardError::KubeconfigError(format!("Failed to infer config: {}", e))
            })?
        }
    };

    info!("Using cluster {}", client_config.cluster_url);

    Client::try_from(client_config)
        .map_err(|e| DashboardError::KubeconfigError(format!("Failed to create client: {}", e)))
}

/// Build a client configuration from a kubeconfig file, using its current context
async fn load_kubeconfig(path: &Path) -> Result<KConfig> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        DashboardError::KubeconfigError(format!("Failed to read {}: {}", path.display(), e))
    })?;

    let kubeconfig = parse_kubeconfig(&contents)?;

    KConfig::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
        .await
        .map_err(|e| DashboardError::KubeconfigError(format!("Failed to create config: {}", e)))
}

fn parse_kubeconfig(contents: &str) -> Result<Kubeconfig> {
    serde_yaml::from_str(contents)
        .map_err(|e| DashboardError::KubeconfigError(format!("Failed to parse kubeconfig: {}", e)))
}
