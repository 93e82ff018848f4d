// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Fleet-wide aggregation over all tenant namespaces.

use super::namespace::aggregate_namespace;
use super::namespaces::select_tenant_namespaces;
use crate::constants::DEFAULT_CONCURRENCY;
use crate::error::{DashboardError, Result};
use crate::lister::ResourceLister;
use crate::report::{FleetReport, NamespaceReport};
use futures::{stream, StreamExt, TryStreamExt};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, warn};

/// Runs the per-namespace aggregation over many namespaces with bounded concurrency.
///
/// The run is all-or-nothing: the first failing namespace cancels every other
/// aggregation and the whole run returns that error.
pub struct FleetAggregator<L> {
    lister: L,
    concurrency: usize,
    cancel_token: CancellationToken,
}

impl<L: ResourceLister> FleetAggregator<L> {
    pub fn new(lister: L) -> Self {
        Self {
            lister,
            concurrency: DEFAULT_CONCURRENCY,
            cancel_token: CancellationToken::new(),
        }
    }

    /// Set the maximum number of namespaces aggregated at once (at least 1)
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Replace the cancellation token, e.g. with one tied to a deadline
    pub fn with_cancel_token(mut self, token: CancellationToken) -> Self {
        self.cancel_token = token;
        self
    }

    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }

    pub fn lister(&self) -> &L {
        &self.lister
    }

    /// Select the tenant namespaces and aggregate all of them
    pub async fn report(&self) -> Result<FleetReport> {
        let namespaces = tokio::select! {
            biased;
            _ = self.cancel_token.cancelled() => return Err(DashboardError::Cancelled),
            selected = select_tenant_namespaces(&self.lister) => selected?,
        };

        self.run(namespaces).await
    }

    /// Aggregate the given namespaces into a single report
    #[instrument(skip(self, namespaces), fields(concurrency = self.concurrency))]
    pub async fn run<I>(&self, namespaces: I) -> Result<FleetReport>
    where
        I: IntoIterator<Item = String>,
    {
        if self.cancel_token.is_cancelled() {
            return Err(DashboardError::Cancelled);
        }

        let group = self.cancel_token.child_token();

        let result = stream::iter(namespaces)
            .map(|namespace| {
                let group = group.clone();
                async move { self.aggregate_one(namespace, &group).await }
            })
            .buffer_unordered(self.concurrency)
            .try_fold(FleetReport::new(), |mut report, (namespace, namespace_report)| async move {
                report.append(namespace, namespace_report);
                Ok::<_, DashboardError>(report)
            })
            .await;

        match &result {
            Ok(report) => info!("Aggregated {} namespace(s)", report.len()),
            Err(e) => {
                group.cancel();
                warn!("Aggregation aborted: {}", e);
            }
        }

        result
    }

    async fn aggregate_one(
        &self,
        namespace: String,
        group: &CancellationToken,
    ) -> Result<(String, NamespaceReport)> {
        debug!("Aggregating namespace {}", namespace);

        let outcome = tokio::select! {
            biased;
            _ = group.cancelled() => Err(DashboardError::Cancelled),
            report = aggregate_namespace(&self.lister, &namespace) => report,
        };

        match outcome {
            Ok(report) => {
                debug!(
                    "Namespace {} has {} application(s)",
                    namespace,
                    report.len()
                );
                Ok((namespace, report))
            }
            Err(e) => {
                group.cancel();
                Err(e)
            }
        }
    }
}
