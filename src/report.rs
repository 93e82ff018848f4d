// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Aggregated report model: per-application records, per-namespace reports,
//! and the fleet-wide report that the exporters flatten.

use crate::constants::report::NAME_SEPARATOR;
use crate::types::{Application, Component, IntegrationTestScenario, ReleasePlan};
use kube::ResourceExt;
use serde::Serialize;
use std::collections::BTreeMap;

/// One Application together with the resources that reference it
#[derive(Debug, Clone)]
pub struct ApplicationRecord {
    pub application: Application,
    pub components: Vec<Component>,
    pub test_scenarios: Vec<IntegrationTestScenario>,
    pub release_plans: Vec<ReleasePlan>,
}

impl ApplicationRecord {
    pub fn new(application: Application) -> Self {
        Self {
            application,
            components: Vec::new(),
            test_scenarios: Vec::new(),
            release_plans: Vec::new(),
        }
    }

    pub fn name(&self) -> String {
        self.application.name_any()
    }

    pub fn component_names(&self) -> Vec<String> {
        self.components.iter().map(|c| c.name_any()).collect()
    }

    pub fn test_scenario_names(&self) -> Vec<String> {
        self.test_scenarios.iter().map(|t| t.name_any()).collect()
    }

    pub fn release_plan_names(&self) -> Vec<String> {
        self.release_plans.iter().map(|r| r.name_any()).collect()
    }
}

/// A child resource whose `application` reference matched no Application
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrphanedResource {
    pub kind: String,
    pub name: String,
    pub application_name: String,
}

/// Joined records of a single namespace, keyed by Application name
#[derive(Debug, Clone, Default)]
pub struct NamespaceReport {
    applications: BTreeMap<String, ApplicationRecord>,
    orphans: Vec<OrphanedResource>,
}

impl NamespaceReport {
    pub fn new(
        applications: BTreeMap<String, ApplicationRecord>,
        orphans: Vec<OrphanedResource>,
    ) -> Self {
        Self {
            applications,
            orphans,
        }
    }

    pub fn applications(&self) -> &BTreeMap<String, ApplicationRecord> {
        &self.applications
    }

    pub fn get(&self, application: &str) -> Option<&ApplicationRecord> {
        self.applications.get(application)
    }

    /// Children dropped by the join because their Application does not exist
    pub fn orphans(&self) -> &[OrphanedResource] {
        &self.orphans
    }

    pub fn is_empty(&self) -> bool {
        self.applications.is_empty()
    }

    pub fn len(&self) -> usize {
        self.applications.len()
    }
}

/// Aggregation results of a whole run, keyed by namespace.
///
/// Each namespace holds a sequence of reports so that repeated aggregation
/// passes append instead of overwriting earlier results.
#[derive(Debug, Clone, Default)]
pub struct FleetReport {
    namespaces: BTreeMap<String, Vec<NamespaceReport>>,
}

impl FleetReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, namespace: impl Into<String>, report: NamespaceReport) {
        self.namespaces
            .entry(namespace.into())
            .or_default()
            .push(report);
    }

    pub fn get(&self, namespace: &str) -> Option<&[NamespaceReport]> {
        self.namespaces.get(namespace).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty()
    }

    pub fn len(&self) -> usize {
        self.namespaces.len()
    }

    /// Flatten the report into one row per (namespace, application, component).
    ///
    /// Applications without components produce no row.
    pub fn rows(&self) -> impl Iterator<Item = ReportRow> + '_ {
        self.namespaces.iter().flat_map(|(namespace, reports)| {
            reports.iter().flat_map(move |report| {
                report.applications.iter().flat_map(move |(app_name, record)| {
                    let test_scenarios = record.test_scenario_names().join(NAME_SEPARATOR);
                    let release_plans = record.release_plan_names().join(NAME_SEPARATOR);
                    record.components.iter().map(move |component| ReportRow {
                        namespace: namespace.clone(),
                        application_name: app_name.clone(),
                        component_name: component.name_any(),
                        test_scenarios: test_scenarios.clone(),
                        release_plans: release_plans.clone(),
                    })
                })
            })
        })
    }

    /// Name-only view of the report used by the structured exporters
    pub fn summary(&self) -> BTreeMap<String, Vec<NamespaceSummary>> {
        self.namespaces
            .iter()
            .map(|(namespace, reports)| {
                let summaries = reports.iter().map(NamespaceSummary::from).collect();
                (namespace.clone(), summaries)
            })
            .collect()
    }
}

/// One flattened line of the exported report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub namespace: String,
    pub application_name: String,
    pub component_name: String,
    /// Comma-joined IntegrationTestScenario names
    pub test_scenarios: String,
    /// Comma-joined ReleasePlan names
    pub release_plans: String,
}

impl ReportRow {
    /// Column values in export order
    pub fn fields(&self) -> [&str; 5] {
        [
            &self.namespace,
            &self.application_name,
            &self.component_name,
            &self.test_scenarios,
            &self.release_plans,
        ]
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NamespaceSummary {
    pub applications: BTreeMap<String, ApplicationSummary>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub orphans: Vec<OrphanedResource>,
}

impl From<&NamespaceReport> for NamespaceSummary {
    fn from(report: &NamespaceReport) -> Self {
        Self {
            applications: report
                .applications
                .iter()
                .map(|(name, record)| (name.clone(), ApplicationSummary::from(record)))
                .collect(),
            orphans: report.orphans.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationSummary {
    pub components: Vec<String>,
    pub test_scenarios: Vec<String>,
    pub release_plans: Vec<String>,
}

impl From<&ApplicationRecord> for ApplicationSummary {
    fn from(record: &ApplicationRecord) -> Self {
        Self {
            components: record.component_names(),
            test_scenarios: record.test_scenario_names(),
            release_plans: record.release_plan_names(),
        }
    }
}
