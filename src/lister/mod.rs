// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Read-only access to the resources the report is built from.

pub mod cluster;
pub mod registry;

pub use cluster::KubeLister;
pub use registry::KindRegistry;

use crate::error::Result;
use async_trait::async_trait;
use serde::de::DeserializeOwned;

/// A resource type that can be listed and decoded by a [`ResourceLister`]
pub trait ListableResource:
    kube::Resource<DynamicType = ()> + DeserializeOwned + Clone + Send + Sync + 'static
{
}

impl<K> ListableResource for K where
    K: kube::Resource<DynamicType = ()> + DeserializeOwned + Clone + Send + Sync + 'static
{
}

/// Lists every resource of kind `K`, optionally scoped to one namespace
#[async_trait]
pub trait ResourceLister: Send + Sync {
    async fn list<K: ListableResource>(&self, namespace: Option<&str>) -> Result<Vec<K>>;
}
