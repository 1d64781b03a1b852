//! Route table validation.
//!
//! # Responsibilities
//! - Reject duplicate route names
//! - Reject duplicate paths (a later entry would be unreachable)
//! - Reject empty names and views, relative paths, dynamic segments
//! - Reject paths carrying a query or fragment (never reachable)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is a pure function: &[Route] → Result<(), ConfigurationError>
//! - Runs before a table is accepted into the system

use std::collections::HashMap;

use crate::routing::{MatchOptions, Route};

/// Characters that introduce dynamic segments, which are not supported.
const DYNAMIC_SEGMENT_CHARS: &[char] = &[':', '*', '(', ')'];

/// Query and fragment delimiters; routes resolve on the bare path only.
const LOCATION_DELIMITERS: &[char] = &['?', '#'];

/// A single problem found in a route list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteIssue {
    #[error("route at index {index} has an empty name")]
    EmptyName { index: usize },

    #[error("route \"{name}\" has an empty view")]
    EmptyView { name: String },

    #[error("route \"{name}\" path \"{path}\" must start with '/'")]
    RelativePath { name: String, path: String },

    #[error("route \"{name}\" path \"{path}\" uses unsupported dynamic segments")]
    UnsupportedPattern { name: String, path: String },

    #[error("route \"{name}\" path \"{path}\" contains a query or fragment")]
    QueryOrFragment { name: String, path: String },

    #[error("route name \"{name}\" is registered more than once")]
    DuplicateName { name: String },

    #[error("route \"{name}\" path \"{path}\" is already served by \"{existing}\"")]
    DuplicatePath {
        name: String,
        path: String,
        existing: String,
    },
}

/// The route list cannot be turned into a table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid route table: {}", join_issues(.issues))]
pub struct ConfigurationError {
    pub issues: Vec<RouteIssue>,
}

fn join_issues(issues: &[RouteIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl ConfigurationError {
    /// True if any issue is a duplicate name.
    pub fn has_duplicate_name(&self) -> bool {
        self.issues
            .iter()
            .any(|i| matches!(i, RouteIssue::DuplicateName { .. }))
    }
}

/// Validate a route list in insertion order.
pub fn validate_routes(routes: &[Route], options: MatchOptions) -> Result<(), ConfigurationError> {
    let mut issues = Vec::new();
    let mut names: HashMap<&str, usize> = HashMap::new();
    let mut paths: HashMap<String, &str> = HashMap::new();

    for (index, route) in routes.iter().enumerate() {
        if route.name.is_empty() {
            issues.push(RouteIssue::EmptyName { index });
        } else if names.insert(route.name.as_str(), index).is_some() {
            issues.push(RouteIssue::DuplicateName {
                name: route.name.clone(),
            });
        }

        if route.view.as_str().is_empty() {
            issues.push(RouteIssue::EmptyView {
                name: route.name.clone(),
            });
        }

        if !route.path.starts_with('/') {
            issues.push(RouteIssue::RelativePath {
                name: route.name.clone(),
                path: route.path.clone(),
            });
            continue;
        }

        if route.path.contains(LOCATION_DELIMITERS) {
            issues.push(RouteIssue::QueryOrFragment {
                name: route.name.clone(),
                path: route.path.clone(),
            });
            continue;
        }

        if route.path.contains(DYNAMIC_SEGMENT_CHARS) {
            issues.push(RouteIssue::UnsupportedPattern {
                name: route.name.clone(),
                path: route.path.clone(),
            });
            continue;
        }

        match paths.get(&path_key(&route.path, options)) {
            Some(existing) => issues.push(RouteIssue::DuplicatePath {
                name: route.name.clone(),
                path: route.path.clone(),
                existing: existing.to_string(),
            }),
            None => {
                paths.insert(path_key(&route.path, options), route.name.as_str());
            }
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(ConfigurationError { issues })
    }
}

/// Key under which two patterns collide for the given options.
fn path_key(path: &str, options: MatchOptions) -> String {
    let path = if !options.strict && path.len() > 1 {
        path.strip_suffix('/').unwrap_or(path)
    } else {
        path
    };
    if options.sensitive {
        path.to_string()
    } else {
        path.to_ascii_lowercase()
    }
}
