//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the router.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::history::HistoryMode;
use crate::routing::MatchOptions;

/// Root configuration for the router.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RouterConfig {
    /// History strategy and base path.
    pub history: HistoryConfig,

    /// Path comparison options.
    pub matching: MatchOptions,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Route definitions in match priority order.
    pub routes: Vec<RouteConfig>,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            history: HistoryConfig::default(),
            matching: MatchOptions::default(),
            observability: ObservabilityConfig::default(),
            routes: vec![RouteConfig {
                name: "Home".to_string(),
                path: "/".to_string(),
                view: "Greet".to_string(),
            }],
        }
    }
}

/// History configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// History strategy (web, hash, memory).
    pub mode: HistoryMode,

    /// Base path the application is served under.
    pub base: String,

    /// Location the history starts at.
    pub initial: String,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            mode: HistoryMode::Web,
            base: "/".to_string(),
            initial: "/".to_string(),
        }
    }
}

/// Route configuration mapping a path to a view.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Unique route identifier.
    pub name: String,

    /// Literal path pattern.
    pub path: String,

    /// View identifier handed to the application shell.
    pub view: String,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Emit logs as JSON lines instead of human-readable text.
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json: false,
        }
    }
}
