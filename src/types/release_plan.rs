// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use super::ApplicationChild;
use kube::CustomResource;
use serde::{Deserialize, Serialize};

#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, schemars::JsonSchema)]
#[kube(group = "appstudio.redhat.com", version = "v1alpha1", kind = "ReleasePlan")]
#[kube(namespaced)]
#[serde(rename_all = "camelCase")]
pub struct ReleasePlanSpec {
    /// Name of the Application released by this plan
    pub application: String,
    /// Namespace the release is delivered to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl ApplicationChild for ReleasePlan {
    fn application_name(&self) -> &str {
        &self.spec.application
    }
}
