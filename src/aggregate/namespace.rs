// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Per-namespace aggregation: fetch the four resource collections and join
//! them onto their Applications.

use crate::error::Result;
use crate::lister::{ListableResource, ResourceLister};
use crate::report::{ApplicationRecord, NamespaceReport, OrphanedResource};
use crate::types::{Application, ApplicationChild, Component, IntegrationTestScenario, ReleasePlan};
use kube::ResourceExt;
use std::collections::BTreeMap;
use tracing::{debug, instrument, warn};

/// Fetch and join all resources of one namespace.
///
/// The four lists are fetched concurrently. If any of them fails the other
/// requests are dropped and no report is produced for the namespace.
#[instrument(skip(lister))]
pub async fn aggregate_namespace<L: ResourceLister>(
    lister: &L,
    namespace: &str,
) -> Result<NamespaceReport> {
    let (applications, components, test_scenarios, release_plans) = tokio::try_join!(
        lister.list::<Application>(Some(namespace)),
        lister.list::<Component>(Some(namespace)),
        lister.list::<IntegrationTestScenario>(Some(namespace)),
        lister.list::<ReleasePlan>(Some(namespace)),
    )?;

    debug!(
        "Fetched {} application(s), {} component(s), {} test scenario(s), {} release plan(s)",
        applications.len(),
        components.len(),
        test_scenarios.len(),
        release_plans.len()
    );

    Ok(join_resources(
        namespace,
        applications,
        components,
        test_scenarios,
        release_plans,
    ))
}

/// Attach every child to the Application named by its `application` field.
///
/// Children that reference a missing Application are dropped, logged and
/// recorded as orphans on the returned report.
pub fn join_resources(
    namespace: &str,
    applications: Vec<Application>,
    components: Vec<Component>,
    test_scenarios: Vec<IntegrationTestScenario>,
    release_plans: Vec<ReleasePlan>,
) -> NamespaceReport {
    let mut records: BTreeMap<String, ApplicationRecord> = applications
        .into_iter()
        .map(|app| (app.name_any(), ApplicationRecord::new(app)))
        .collect();
    let mut orphans = Vec::new();

    attach(namespace, &mut records, &mut orphans, components, |r| &mut r.components);
    attach(namespace, &mut records, &mut orphans, test_scenarios, |r| {
        &mut r.test_scenarios
    });
    attach(namespace, &mut records, &mut orphans, release_plans, |r| {
        &mut r.release_plans
    });

    NamespaceReport::new(records, orphans)
}

fn attach<K, F>(
    namespace: &str,
    records: &mut BTreeMap<String, ApplicationRecord>,
    orphans: &mut Vec<OrphanedResource>,
    children: Vec<K>,
    slot: F,
) where
    K: ListableResource + ApplicationChild,
    F: Fn(&mut ApplicationRecord) -> &mut Vec<K>,
{
    for child in children {
        match records.get_mut(child.application_name()) {
            Some(record) => slot(record).push(child),
            None => {
                let orphan = OrphanedResource {
                    kind: K::kind(&()).to_string(),
                    name: child.name_any(),
                    application_name: child.application_name().to_string(),
                };
                warn!(
                    "Dropping {} {}/{}: application '{}' does not exist",
                    orphan.kind, namespace, orphan.name, orphan.application_name
                );
                orphans.push(orphan);
            }
        }
    }
}
