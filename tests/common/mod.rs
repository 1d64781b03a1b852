//! Shared fixtures for integration tests.

use std::sync::Arc;

use view_router::config::loader::parse_config;
use view_router::history::{create_history, HistoryMode};
use view_router::{Route, RouteTable, Router, RouterConfig};

/// The table shipped with the application.
pub fn home_routes() -> Vec<Route> {
    vec![Route::new("Home", "/", "Greet")]
}

/// A slightly larger table for navigation tests.
#[allow(dead_code)]
pub fn site_routes() -> Vec<Route> {
    vec![
        Route::new("Home", "/", "Greet"),
        Route::new("About", "/about", "AboutPage"),
        Route::new("Settings", "/settings", "SettingsPage"),
    ]
}

/// Build a router over `routes` with the given history mode and base.
#[allow(dead_code)]
pub fn router(routes: Vec<Route>, mode: HistoryMode, base: &str) -> Router {
    let table = RouteTable::register(routes).expect("fixture routes are valid");
    Router::new(Arc::new(table), create_history(mode, base, "/"))
}

/// Parse a TOML fixture, panicking on failure.
#[allow(dead_code)]
pub fn config(toml: &str) -> RouterConfig {
    parse_config(toml).expect("fixture config is valid")
}
