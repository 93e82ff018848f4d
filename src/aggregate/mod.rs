// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Tenant namespace selection and the concurrent aggregation pipeline.

pub mod fleet;
pub mod namespace;
pub mod namespaces;

pub use fleet::FleetAggregator;
pub use namespace::{aggregate_namespace, join_resources};
pub use namespaces::{is_tenant_namespace, select_tenant_namespaces};
