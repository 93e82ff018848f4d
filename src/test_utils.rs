// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities: a mock Kubernetes API, resource fixtures and an in-memory lister.

use crate::error::{DashboardError, Result};
use crate::lister::{ListableResource, ResourceLister};
use crate::types::{Application, Component, IntegrationTestScenario, ReleasePlan};
use async_trait::async_trait;
use http::{Request, Response};
use kube::client::Body;
use kube::Client;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use std::time::Duration;
use tower::Service;

/// A mock HTTP service that returns predefined responses based on request paths.
#[derive(Clone)]
pub struct MockService {
    responses: Arc<Mutex<HashMap<(String, String), (u16, String)>>>,
}

impl MockService {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Add a response for GET requests matching the exact path
    pub fn on_get(self, path: &str, status: u16, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(("GET".to_string(), path.to_string()), (status, body.to_string()));
        self
    }

    /// Build a kube Client from this mock service
    pub fn into_client(self) -> Client {
        Client::new(self, "default")
    }

    fn find_response(&self, method: &str, path: &str) -> Option<(u16, String)> {
        let responses = self.responses.lock().unwrap();
        responses
            .get(&(method.to_string(), path.to_string()))
            .cloned()
    }
}

impl Default for MockService {
    fn default() -> Self {
        Self::new()
    }
}

impl Service<Request<Body>> for MockService {
    type Response = Response<Body>;
    type Error = tower::BoxError;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = std::result::Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<std::result::Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let method = req.method().to_string();
        let path = req.uri().path().to_string();

        let (status, body) = self
            .find_response(&method, &path)
            .unwrap_or_else(|| (404, not_found_json(&path)));

        Box::pin(async move {
            Ok(Response::builder()
                .status(status)
                .header("content-type", "application/json")
                .body(Body::from(body.into_bytes()))
                .unwrap())
        })
    }
}

/// Create a mock namespace JSON object
pub fn namespace_json(name: &str) -> String {
    serde_json::json!({
        "apiVersion": "v1",
        "kind": "Namespace",
        "metadata": {
            "name": name,
            "uid": "test-uid"
        }
    })
    .to_string()
}

/// Wrap items into a list response body
pub fn list_json(api_version: &str, kind: &str, items: Vec<serde_json::Value>) -> String {
    serde_json::json!({
        "apiVersion": api_version,
        "kind": kind,
        "metadata": { "resourceVersion": "1" },
        "items": items
    })
    .to_string()
}

/// Create a 404 not found response
pub fn not_found_json(path: &str) -> String {
    serde_json::json!({
        "kind": "Status",
        "apiVersion": "v1",
        "status": "Failure",
        "message": format!("{} not found", path),
        "reason": "NotFound",
        "code": 404
    })
    .to_string()
}

fn application_json(name: &str) -> serde_json::Value {
    serde_json::json!({
        "apiVersion": "appstudio.redhat.com/v1alpha1",
        "kind": "Application",
        "metadata": { "name": name },
        "spec": {}
    })
}

fn child_json(api_version: &str, kind: &str, name: &str, application: &str) -> serde_json::Value {
    serde_json::json!({
        "apiVersion": api_version,
        "kind": kind,
        "metadata": { "name": name },
        "spec": { "application": application }
    })
}

pub fn application(name: &str) -> Application {
    serde_json::from_value(application_json(name)).unwrap()
}

pub fn component(name: &str, application: &str) -> Component {
    serde_json::from_value(child_json(
        "appstudio.redhat.com/v1alpha1",
        "Component",
        name,
        application,
    ))
    .unwrap()
}

pub fn test_scenario(name: &str, application: &str) -> IntegrationTestScenario {
    serde_json::from_value(child_json(
        "appstudio.redhat.com/v1beta2",
        "IntegrationTestScenario",
        name,
        application,
    ))
    .unwrap()
}

pub fn release_plan(name: &str, application: &str) -> ReleasePlan {
    serde_json::from_value(child_json(
        "appstudio.redhat.com/v1alpha1",
        "ReleasePlan",
        name,
        application,
    ))
    .unwrap()
}

type ListKey = (String, Option<String>);

#[derive(Default)]
struct CallStats {
    calls: HashMap<String, usize>,
    completed: HashMap<String, usize>,
    in_flight: HashMap<String, usize>,
    max_in_flight: HashMap<String, usize>,
}

/// Decrements the in-flight gauge even when the list future is dropped
struct InFlightGuard {
    stats: Arc<Mutex<CallStats>>,
    kind: String,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        let mut stats = self.stats.lock().unwrap();
        if let Some(count) = stats.in_flight.get_mut(&self.kind) {
            *count -= 1;
        }
    }
}

/// In-memory [`ResourceLister`] with failure injection and call accounting
#[derive(Default)]
pub struct StaticLister {
    objects: HashMap<ListKey, Vec<serde_json::Value>>,
    failures: HashSet<ListKey>,
    latency: Option<Duration>,
    key_latency: HashMap<ListKey, Duration>,
    stats: Arc<Mutex<CallStats>>,
}

impl StaticLister {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_namespaces(mut self, names: &[&str]) -> Self {
        let items = names
            .iter()
            .map(|name| serde_json::from_str(&namespace_json(name)).unwrap())
            .collect();
        self.objects.insert(("Namespace".to_string(), None), items);
        self
    }

    pub fn with_applications(self, namespace: &str, names: &[&str]) -> Self {
        let items = names.iter().map(|name| application_json(name)).collect();
        self.with_objects("Application", namespace, items)
    }

    /// `children` are `(name, application)` pairs
    pub fn with_components(self, namespace: &str, children: &[(&str, &str)]) -> Self {
        self.with_children("appstudio.redhat.com/v1alpha1", "Component", namespace, children)
    }

    pub fn with_test_scenarios(self, namespace: &str, children: &[(&str, &str)]) -> Self {
        self.with_children(
            "appstudio.redhat.com/v1beta2",
            "IntegrationTestScenario",
            namespace,
            children,
        )
    }

    pub fn with_release_plans(self, namespace: &str, children: &[(&str, &str)]) -> Self {
        self.with_children("appstudio.redhat.com/v1alpha1", "ReleasePlan", namespace, children)
    }

    fn with_children(
        self,
        api_version: &str,
        kind: &str,
        namespace: &str,
        children: &[(&str, &str)],
    ) -> Self {
        let items = children
            .iter()
            .map(|(name, app)| child_json(api_version, kind, name, app))
            .collect();
        self.with_objects(kind, namespace, items)
    }

    pub fn with_objects(mut self, kind: &str, namespace: &str, items: Vec<serde_json::Value>) -> Self {
        self.objects
            .insert((kind.to_string(), Some(namespace.to_string())), items);
        self
    }

    /// Make listing `kind` fail; `None` targets the cluster-wide list
    pub fn failing(mut self, kind: &str, namespace: Option<&str>) -> Self {
        self.failures
            .insert((kind.to_string(), namespace.map(str::to_string)));
        self
    }

    /// Delay every list call by `latency`
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Delay only the `kind` list in `namespace`, overriding the shared latency
    pub fn with_latency_for(mut self, kind: &str, namespace: &str, latency: Duration) -> Self {
        self.key_latency
            .insert((kind.to_string(), Some(namespace.to_string())), latency);
        self
    }

    pub fn calls(&self, kind: &str) -> usize {
        let stats = self.stats.lock().unwrap();
        stats.calls.get(kind).copied().unwrap_or(0)
    }

    /// Number of `kind` list calls that ran to completion
    pub fn completed(&self, kind: &str) -> usize {
        let stats = self.stats.lock().unwrap();
        stats.completed.get(kind).copied().unwrap_or(0)
    }

    fn complete(&self, kind: &str) {
        let mut stats = self.stats.lock().unwrap();
        *stats.completed.entry(kind.to_string()).or_default() += 1;
    }

    pub fn max_in_flight(&self, kind: &str) -> usize {
        let stats = self.stats.lock().unwrap();
        stats.max_in_flight.get(kind).copied().unwrap_or(0)
    }

    fn enter(&self, kind: &str) -> InFlightGuard {
        let mut stats = self.stats.lock().unwrap();
        *stats.calls.entry(kind.to_string()).or_default() += 1;
        let in_flight = {
            let count = stats.in_flight.entry(kind.to_string()).or_default();
            *count += 1;
            *count
        };
        let max = stats.max_in_flight.entry(kind.to_string()).or_default();
        *max = (*max).max(in_flight);

        InFlightGuard {
            stats: self.stats.clone(),
            kind: kind.to_string(),
        }
    }
}

#[async_trait]
impl ResourceLister for StaticLister {
    async fn list<K: ListableResource>(&self, namespace: Option<&str>) -> Result<Vec<K>> {
        let kind = K::kind(&()).to_string();
        let key = (kind.clone(), namespace.map(str::to_string));
        let _guard = self.enter(&kind);

        if let Some(latency) = self.key_latency.get(&key).copied().or(self.latency) {
            tokio::time::sleep(latency).await;
        }
        self.complete(&kind);

        if self.failures.contains(&key) {
            return Err(DashboardError::KubeError(kube::Error::Api(
                kube::core::ErrorResponse {
                    status: "Failure".to_string(),
                    message: format!("listing {} failed", kind),
                    reason: "InternalError".to_string(),
                    code: 500,
                },
            )));
        }

        self.objects
            .get(&key)
            .into_iter()
            .flatten()
            .map(|value| {
                serde_json::from_value(value.clone())
                    .map_err(|e| DashboardError::DecodeError(e.to_string()))
            })
            .collect()
    }
}
