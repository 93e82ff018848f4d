// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Resource kind {0} is not registered with the lister")]
    UnregisteredKind(String),

    #[error("Failed to decode resource: {0}")]
    DecodeError(String),

    #[error("Aggregation cancelled")]
    Cancelled,

    #[error("Failed to load kubeconfig: {0}")]
    KubeconfigError(String),

    #[error("Report export failed: {0}")]
    ExportError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DashboardError>;
