// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Custom resources aggregated into the tenant report.

pub mod application;
pub mod component;
pub mod release_plan;
pub mod test_scenario;

pub use application::{Application, ApplicationSpec};
pub use component::{Component, ComponentSpec};
pub use release_plan::{ReleasePlan, ReleasePlanSpec};
pub use test_scenario::{IntegrationTestScenario, IntegrationTestScenarioSpec};

/// A resource that belongs to exactly one Application in its namespace
pub trait ApplicationChild {
    /// Name of the owning Application
    fn application_name(&self) -> &str;
}
