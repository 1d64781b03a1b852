//! Resolved navigation state.

use serde::Serialize;

use crate::routing::Route;

/// The currently resolved route plus the raw location it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationState {
    /// In-app location including query and hash.
    pub location: String,

    /// Path component used for resolution.
    pub path: String,

    pub query: Option<String>,

    pub hash: Option<String>,

    /// Matched route, `None` when nothing matched.
    pub route: Option<Route>,

    /// External address for the active history mode.
    pub href: String,
}

impl NavigationState {
    pub fn is_not_found(&self) -> bool {
        self.route.is_none()
    }
}

/// Split a location into path, query and hash.
pub(crate) fn split_location(location: &str) -> (&str, Option<&str>, Option<&str>) {
    let (rest, hash) = match location.split_once('#') {
        Some((rest, hash)) => (rest, Some(hash)),
        None => (location, None),
    };
    let (path, query) = match rest.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (rest, None),
    };
    (path, query, hash)
}
