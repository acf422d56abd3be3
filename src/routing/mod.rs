//! Route table
//!
//! Maps tenant-parameterized path patterns to a template and the controller
//! that feeds it. Paths no pattern matches resolve to the fallback redirect.

pub mod context;
pub mod pattern;

use std::sync::Arc;

use log::trace;
use thiserror::Error;

use crate::controllers::{ClusterListController, Controller, InstanceListController};

pub use context::RouteContext;
pub use pattern::{normalize_path, RouteParams, RoutePattern};

/// Placeholder every route must declare
pub const TENANT_PARAM: &str = "tenantId";

/// Redirect target for paths no route matches
pub const DEFAULT_FALLBACK: &str = "/instances";

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("Invalid route pattern {0}")]
    InvalidPattern(String),

    #[error("Route pattern {0} has no :tenantId placeholder")]
    MissingTenantPlaceholder(String),

    #[error("Route pattern {0} is already registered")]
    Duplicate(String),
}

/// A pattern bound to a template and a controller
#[derive(Debug, Clone)]
pub struct Route {
    pattern: RoutePattern,
    template: String,
    controller: Arc<dyn Controller>,
}

impl Route {
    pub fn pattern(&self) -> &RoutePattern {
        &self.pattern
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn controller(&self) -> &Arc<dyn Controller> {
        &self.controller
    }
}

/// Outcome of resolving a path
#[derive(Debug)]
pub enum Resolution<'a> {
    Matched {
        route: &'a Route,
        context: RouteContext,
    },
    Fallback {
        path: String,
        redirect_to: &'a str,
    },
}

#[derive(Debug, Clone)]
pub struct Router {
    routes: Vec<Route>,
    fallback: String,
}

impl Router {
    pub fn new(fallback: impl Into<String>) -> Self {
        Self {
            routes: Vec::new(),
            fallback: fallback.into(),
        }
    }

    /// Add a route to the table
    ///
    /// Overlapping patterns are accepted; the earliest registered one wins
    /// during resolution.
    pub fn register(
        &mut self,
        pattern: &str,
        template: impl Into<String>,
        controller: Arc<dyn Controller>,
    ) -> Result<&mut Self, RouteError> {
        let pattern = RoutePattern::parse(pattern)?;
        if !pattern.has_param(TENANT_PARAM) {
            return Err(RouteError::MissingTenantPlaceholder(pattern.to_string()));
        }
        if self.routes.iter().any(|r| r.pattern == pattern) {
            return Err(RouteError::Duplicate(pattern.to_string()));
        }

        self.routes.push(Route {
            pattern,
            template: template.into(),
            controller,
        });
        Ok(self)
    }

    pub fn resolve(&self, path: &str) -> Resolution<'_> {
        let path = normalize_path(path);
        for route in &self.routes {
            if let Some(params) = route.pattern.matches(&path) {
                trace!("{} matched {}", path, route.pattern);
                return Resolution::Matched {
                    route,
                    context: RouteContext::new(path, params),
                };
            }
        }

        trace!("{} matched no route", path);
        Resolution::Fallback {
            path,
            redirect_to: &self.fallback,
        }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }
}

/// Route table of the console: instance and cluster lists per tenant
pub fn default_router(fallback: &str) -> Result<Router, RouteError> {
    let mut router = Router::new(fallback);
    router
        .register(
            "/:tenantId/instance",
            "instance-list",
            Arc::new(InstanceListController),
        )?
        .register(
            "/:tenantId/cluster",
            "cluster-list",
            Arc::new(ClusterListController),
        )?;
    Ok(router)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn router() -> Router {
        default_router(DEFAULT_FALLBACK).unwrap()
    }

    #[test]
    fn test_resolve_instance_route() {
        let router = router();
        match router.resolve("/acme/instance") {
            Resolution::Matched { route, context } => {
                assert_eq!(route.template(), "instance-list");
                assert_eq!(route.controller().name(), "InstanceList");
                assert_eq!(context.tenant_id(), Some("acme"));
                assert_eq!(context.path(), "/acme/instance");
            }
            other => panic!("unexpected resolution: {:?}", other),
        }
    }

    #[test]
    fn test_resolve_cluster_route_with_trailing_slash() {
        let router = router();
        match router.resolve("/beta/cluster/") {
            Resolution::Matched { route, context } => {
                assert_eq!(route.template(), "cluster-list");
                assert_eq!(context.tenant_id(), Some("beta"));
            }
            other => panic!("unexpected resolution: {:?}", other),
        }
    }

    #[test]
    fn test_unmatched_paths_fall_back() {
        let router = router();
        for path in ["/", "/instances", "/acme", "/acme/volume", "/a/b/instance"] {
            match router.resolve(path) {
                Resolution::Fallback { redirect_to, .. } => assert_eq!(redirect_to, "/instances"),
                other => panic!("{} should fall back, got {:?}", path, other),
            }
        }
    }

    #[test]
    fn test_register_requires_tenant_placeholder() {
        let mut router = Router::new(DEFAULT_FALLBACK);
        let err = router
            .register("/instance", "instance-list", Arc::new(InstanceListController))
            .unwrap_err();
        assert!(matches!(err, RouteError::MissingTenantPlaceholder(_)));
    }

    #[test]
    fn test_register_rejects_duplicates() {
        let mut router = router();
        let err = router
            .register("/:tenantId/cluster", "other", Arc::new(ClusterListController))
            .unwrap_err();
        assert!(matches!(err, RouteError::Duplicate(_)));
    }

    #[test]
    fn test_first_overlapping_route_wins() {
        let mut router = Router::new(DEFAULT_FALLBACK);
        router
            .register("/:tenantId/:section", "generic", Arc::new(ClusterListController))
            .unwrap()
            .register("/:tenantId/instance", "instance-list", Arc::new(InstanceListController))
            .unwrap();

        match router.resolve("/acme/instance") {
            Resolution::Matched { route, .. } => assert_eq!(route.template(), "generic"),
            other => panic!("unexpected resolution: {:?}", other),
        }
    }
}
