//! Route lookup.
//!
//! # Responsibilities
//! - Store compiled routes in insertion order
//! - Resolve a bare path to the first matching route
//! - Return matched route or explicit NotFound
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(1) name lookup via HashMap
//! - O(n) path scan (acceptable for typical route counts)
//! - Explicit NotFound rather than silent default

use std::collections::HashMap;

use crate::config::validation::{validate_routes, ConfigurationError};
use crate::config::RouteConfig;
use crate::routing::matcher::{ExactPathMatcher, MatchOptions, Matcher};
use crate::routing::route::Route;

/// No route matched the given path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no route matches path \"{path}\"")]
pub struct NotFound {
    pub path: String,
}

#[derive(Debug)]
struct CompiledRoute {
    route: Route,
    matcher: ExactPathMatcher,
}

/// The ordered, immutable collection of all known routes.
#[derive(Debug)]
pub struct RouteTable {
    routes: Vec<CompiledRoute>,
    by_name: HashMap<String, usize>,
    options: MatchOptions,
}

impl RouteTable {
    /// Build a table with default matching options.
    pub fn register(routes: Vec<Route>) -> Result<Self, ConfigurationError> {
        Self::register_with(routes, MatchOptions::default())
    }

    /// Build a table, validating every entry eagerly.
    pub fn register_with(routes: Vec<Route>, options: MatchOptions) -> Result<Self, ConfigurationError> {
        validate_routes(&routes, options)?;

        let by_name = routes
            .iter()
            .enumerate()
            .map(|(i, r)| (r.name.clone(), i))
            .collect();

        let routes = routes
            .into_iter()
            .map(|route| CompiledRoute {
                matcher: ExactPathMatcher::new(route.path.clone(), options),
                route,
            })
            .collect::<Vec<_>>();

        tracing::debug!(routes = routes.len(), ?options, "Route table registered");

        Ok(Self {
            routes,
            by_name,
            options,
        })
    }

    /// Build a table from configuration records.
    pub fn from_config(routes: &[RouteConfig], options: MatchOptions) -> Result<Self, ConfigurationError> {
        Self::register_with(routes.iter().map(Route::from).collect(), options)
    }

    /// Resolve a bare path (no query or fragment). First match wins.
    pub fn resolve(&self, path: &str) -> Result<&Route, NotFound> {
        self.routes
            .iter()
            .find(|r| r.matcher.matches(path))
            .map(|r| &r.route)
            .ok_or_else(|| NotFound {
                path: path.to_string(),
            })
    }

    /// Look up a route by its unique name.
    pub fn by_name(&self, name: &str) -> Option<&Route> {
        self.by_name.get(name).map(|&i| &self.routes[i].route)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter().map(|r| &r.route)
    }

    /// Routes in match priority order.
    pub fn routes(&self) -> Vec<&Route> {
        self.iter().collect()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn options(&self) -> MatchOptions {
        self.options
    }
}
