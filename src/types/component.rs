// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use super::ApplicationChild;
use kube::CustomResource;
use serde::{Deserialize, Serialize};

#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, schemars::JsonSchema)]
#[kube(group = "appstudio.redhat.com", version = "v1alpha1", kind = "Component")]
#[kube(namespaced)]
#[serde(rename_all = "camelCase")]
pub struct ComponentSpec {
    /// Name of the Application this component belongs to
    pub application: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<serde_json::Value>,
}

impl ApplicationChild for Component {
    fn application_name(&self) -> &str {
        &self.spec.application
    }
}
