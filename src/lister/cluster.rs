// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Resource lister backed by the Kubernetes list API

use super::{KindRegistry, ListableResource, ResourceLister};
use crate::error::{DashboardError, Result};
use async_trait::async_trait;
use kube::{
    api::ListParams,
    core::{ApiResource, DynamicObject, TypeMeta},
    Api, Client, ResourceExt,
};
use tracing::{debug, instrument};

/// Lists resources through a kube [`Client`], resolving each kind through a [`KindRegistry`]
#[derive(Clone)]
pub struct KubeLister {
    client: Client,
    registry: KindRegistry,
}

impl KubeLister {
    pub fn new(client: Client, registry: KindRegistry) -> Self {
        Self { client, registry }
    }
}

#[async_trait]
impl ResourceLister for KubeLister {
    #[instrument(skip(self))]
    async fn list<K: ListableResource>(&self, namespace: Option<&str>) -> Result<Vec<K>> {
        let kind = K::kind(&());
        let Some(resource) = self.registry.get(&kind) else {
            return Err(DashboardError::UnregisteredKind(kind.to_string()));
        };

        let api: Api<DynamicObject> = match namespace {
            Some(ns) => Api::namespaced_with(self.client.clone(), ns, resource),
            None => Api::all_with(self.client.clone(), resource),
        };
        let list = api.list(&ListParams::default()).await?;

        debug!("Listed {} {} object(s)", list.items.len(), resource.kind);

        list.items
            .into_iter()
            .map(|object| decode_object(object, resource))
            .collect()
    }
}

/// Convert a dynamic object into its typed form
fn decode_object<K: ListableResource>(mut object: DynamicObject, resource: &ApiResource) -> Result<K> {
    // List items of built-in kinds omit apiVersion and kind
    if object.types.is_none() {
        object.types = Some(TypeMeta {
            api_version: resource.api_version.clone(),
            kind: resource.kind.clone(),
        });
    }

    let name = object.name_any();
    let value = serde_json::to_value(&object).map_err(|e| {
        DashboardError::DecodeError(format!("{} {}: {}", resource.kind, name, e))
    })?;

    serde_json::from_value(value)
        .map_err(|e| DashboardError::DecodeError(format!("{} {}: {}", resource.kind, name, e)))
}
