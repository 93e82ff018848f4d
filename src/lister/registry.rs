// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Resource kinds known to the Kubernetes lister.

use crate::types::{Application, Component, IntegrationTestScenario, ReleasePlan};
use k8s_openapi::api::core::v1::Namespace;
use kube::core::ApiResource;
use kube::Resource;
use std::collections::BTreeMap;

/// Maps a resource kind to the API group, version and plural used to list it
#[derive(Debug, Clone, Default)]
pub struct KindRegistry {
    kinds: BTreeMap<String, ApiResource>,
}

impl KindRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every kind the tenant report reads.
    ///
    /// `test_scenario_version` overrides the served IntegrationTestScenario version.
    pub fn tenant_kinds(test_scenario_version: Option<&str>) -> Self {
        let registry = Self::new()
            .register::<Namespace>()
            .register::<Application>()
            .register::<Component>()
            .register::<ReleasePlan>();

        match test_scenario_version {
            Some(version) => registry.register_version::<IntegrationTestScenario>(version),
            None => registry.register::<IntegrationTestScenario>(),
        }
    }

    /// Register `K` at the version it was compiled against
    pub fn register<K: Resource<DynamicType = ()>>(mut self) -> Self {
        let resource = ApiResource::erase::<K>(&());
        self.kinds.insert(resource.kind.clone(), resource);
        self
    }

    /// Register `K` at a different served version of the same group
    pub fn register_version<K: Resource<DynamicType = ()>>(mut self, version: &str) -> Self {
        let mut resource = ApiResource::erase::<K>(&());
        resource.version = version.to_string();
        resource.api_version = if resource.group.is_empty() {
            version.to_string()
        } else {
            format!("{}/{}", resource.group, version)
        };
        self.kinds.insert(resource.kind.clone(), resource);
        self
    }

    pub fn get(&self, kind: &str) -> Option<&ApiResource> {
        self.kinds.get(kind)
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.kinds.contains_key(kind)
    }

    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.kinds.keys().map(String::as_str)
    }
}
