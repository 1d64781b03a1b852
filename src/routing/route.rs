//! Route records.
//!
//! A route ties a unique name and a literal path pattern to the view the
//! application shell should mount. The view is opaque to the router.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::RouteConfig;

/// Opaque identifier of a renderable view.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewId(String);

impl ViewId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ViewId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A single entry of the route table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    /// Unique route name, used for named navigation and logging.
    pub name: String,

    /// Literal path pattern (always starts with `/` once validated).
    pub path: String,

    /// View mounted when this route is resolved.
    pub view: ViewId,
}

impl Route {
    pub fn new(name: impl Into<String>, path: impl Into<String>, view: impl Into<ViewId>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            view: view.into(),
        }
    }
}

impl From<RouteConfig> for Route {
    fn from(config: RouteConfig) -> Self {
        Self {
            name: config.name,
            path: config.path,
            view: ViewId::new(config.view),
        }
    }
}

impl From<&RouteConfig> for Route {
    fn from(config: &RouteConfig) -> Self {
        Self::from(config.clone())
    }
}
