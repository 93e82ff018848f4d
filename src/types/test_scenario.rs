// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use super::ApplicationChild;
use kube::CustomResource;
use serde::{Deserialize, Serialize};

#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, schemars::JsonSchema)]
#[kube(
    group = "appstudio.redhat.com",
    version = "v1beta2",
    kind = "IntegrationTestScenario"
)]
#[kube(namespaced)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationTestScenarioSpec {
    /// Name of the Application under test
    pub application: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolver_ref: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contexts: Option<Vec<serde_json::Value>>,
}

impl ApplicationChild for IntegrationTestScenario {
    fn application_name(&self) -> &str {
        &self.spec.application
    }
}
