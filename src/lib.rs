//! Client-side route table with history navigation.

pub mod cli;
pub mod config;
pub mod history;
pub mod navigation;
pub mod observability;
pub mod routing;

pub use config::RouterConfig;
pub use navigation::{NavigationState, Router};
pub use routing::{Route, RouteTable};
