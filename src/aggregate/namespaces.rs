// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Tenant namespace discovery

use crate::constants::TENANT_SUFFIX;
use crate::error::Result;
use crate::lister::ResourceLister;
use k8s_openapi::api::core::v1::Namespace;
use kube::ResourceExt;
use tracing::{info, instrument};

/// Check if a namespace is a tenant workspace
pub fn is_tenant_namespace(name: &str) -> bool {
    name.ends_with(TENANT_SUFFIX)
}

/// List all namespaces and keep the tenant ones
#[instrument(skip(lister))]
pub async fn select_tenant_namespaces<L: ResourceLister>(lister: &L) -> Result<Vec<String>> {
    let namespaces = lister.list::<Namespace>(None).await?;
    let total = namespaces.len();

    let tenants: Vec<String> = namespaces
        .iter()
        .map(|ns| ns.name_any())
        .filter(|name| is_tenant_namespace(name))
        .collect();

    info!("Selected {} tenant namespace(s) out of {}", tenants.len(), total);
    Ok(tenants)
}
