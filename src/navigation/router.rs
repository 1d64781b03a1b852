//! The per-application router.
//!
//! # Responsibilities
//! - Own the history adapter
//! - Resolve every navigation against the shared route table
//! - Notify subscribers synchronously, in call order
//!
//! # Design Decisions
//! - Table is shared by Arc and never mutated
//! - Navigation takes &mut self, so no locking
//! - Misses are reported in NavigationState, never raised

use std::sync::Arc;

use crate::config::validation::ConfigurationError;
use crate::config::RouterConfig;
use crate::history::{create_history, HistoryAdapter};
use crate::navigation::state::{split_location, NavigationState};
use crate::routing::{NotFound, Route, RouteTable};

/// Errors raised by navigation requests.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouterError {
    #[error("no route named \"{name}\"")]
    UnknownRouteName { name: String },
}

/// Callback invoked after each navigation that changed the location.
pub type Listener = Box<dyn FnMut(&NavigationState)>;

pub struct Router {
    table: Arc<RouteTable>,
    history: Box<dyn HistoryAdapter>,
    listeners: Vec<Listener>,
}

impl std::fmt::Debug for Router {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("table", &self.table)
            .field("history", &self.history)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Router {
    pub fn new(table: Arc<RouteTable>, history: Box<dyn HistoryAdapter>) -> Self {
        tracing::debug!(
            mode = ?history.mode(),
            base = %history.base(),
            location = %history.location(),
            "Router created"
        );
        Self {
            table,
            history,
            listeners: Vec::new(),
        }
    }

    /// Build the table and history described by `config`.
    pub fn from_config(config: &RouterConfig) -> Result<Self, ConfigurationError> {
        let table = Arc::new(RouteTable::from_config(&config.routes, config.matching)?);
        let history = create_history(
            config.history.mode,
            &config.history.base,
            &config.history.initial,
        );
        Ok(Self::new(table, history))
    }

    pub fn table(&self) -> &Arc<RouteTable> {
        &self.table
    }

    pub fn history(&self) -> &dyn HistoryAdapter {
        self.history.as_ref()
    }

    /// Register a listener for navigation events.
    pub fn subscribe(&mut self, listener: impl FnMut(&NavigationState) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Resolve an in-app location, ignoring its query and hash.
    pub fn resolve_location(&self, location: &str) -> Result<&Route, NotFound> {
        let (path, _, _) = split_location(location);
        self.table.resolve(path)
    }

    /// Resolve the current location.
    pub fn current(&self) -> NavigationState {
        let location = self.history.location();
        let (path, query, hash) = split_location(location);

        let route = match self.resolve_location(location) {
            Ok(route) => {
                tracing::debug!(route = %route.name, view = %route.view, path = %path, "Route resolved");
                Some(route.clone())
            }
            Err(miss) => {
                tracing::warn!(path = %miss.path, "No route matched");
                None
            }
        };

        NavigationState {
            location: location.to_string(),
            path: path.to_string(),
            query: query.map(str::to_string),
            hash: hash.map(str::to_string),
            route,
            href: self.history.href(location),
        }
    }

    pub fn push(&mut self, to: &str) -> NavigationState {
        let changed = self.history.push(to);
        self.settle(changed)
    }

    pub fn replace(&mut self, to: &str) -> NavigationState {
        let changed = self.history.replace(to);
        self.settle(changed)
    }

    /// Navigate to the path of the route called `name`.
    pub fn push_named(&mut self, name: &str) -> Result<NavigationState, RouterError> {
        let path = self
            .table
            .by_name(name)
            .map(|r| r.path.clone())
            .ok_or_else(|| RouterError::UnknownRouteName {
                name: name.to_string(),
            })?;
        Ok(self.push(&path))
    }

    pub fn back(&mut self) -> NavigationState {
        let changed = self.history.go_back();
        self.settle(changed)
    }

    pub fn forward(&mut self) -> NavigationState {
        let changed = self.history.go_forward();
        self.settle(changed)
    }

    /// Adopt a browser-originated address, replacing the current entry.
    /// Returns `None` if the address is outside this application.
    pub fn sync_external(&mut self, url: &str) -> Option<NavigationState> {
        let Some(location) = self.history.parse_external(url) else {
            tracing::warn!(url = %url, base = %self.history.base(), "External URL outside application");
            return None;
        };
        let changed = self.history.replace(&location);
        Some(self.settle(changed))
    }

    fn settle(&mut self, changed: bool) -> NavigationState {
        let state = self.current();
        if changed {
            tracing::info!(
                location = %state.location,
                route = state.route.as_ref().map(|r| r.name.as_str()).unwrap_or("-"),
                "Navigated"
            );
            for listener in &mut self.listeners {
                listener(&state);
            }
        }
        state
    }
}
