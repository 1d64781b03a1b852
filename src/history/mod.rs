//! History integration.
//!
//! # Data Flow
//! ```text
//! Router::push / replace / back / forward
//!     → HistoryAdapter (entry stack, current location)
//!     → href() renders the external address for the mode
//!
//! Browser-originated URL:
//!     → parse_external() strips base / fragment
//!     → in-app location handed back to the Router
//! ```
//!
//! # Design Decisions
//! - Behavior mimics a web browser: push drops the forward stack
//! - Pushing the current location is a no-op
//! - Protocol-relative locations ("//...") are rejected and logged
//! - Base is normalized once at construction
//! - Path and fragment of external addresses are percent-decoded, so an
//!   href fed back through parse_external yields the original location

use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};
use url::Url;

mod hash;
mod memory;
mod stack;
mod web;

pub use hash::HashHistory;
pub use memory::MemoryHistory;
pub use web::WebHistory;

/// Which history strategy a router uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HistoryMode {
    /// Path URLs under the base (`/app/about`).
    #[default]
    Web,
    /// Fragment URLs (`/app/#/about`).
    Hash,
    /// In-memory only, no addressable URL.
    Memory,
}

/// An integration with some kind of navigation history.
///
/// Locations are in-app: they start with `/`, exclude the base, and may
/// carry a `?query` and `#hash`.
pub trait HistoryAdapter: std::fmt::Debug {
    fn mode(&self) -> HistoryMode;

    /// Normalized base path (`""` when served from the root).
    fn base(&self) -> &str;

    /// Current in-app location.
    fn location(&self) -> &str;

    fn can_go_back(&self) -> bool;

    fn can_go_forward(&self) -> bool;

    /// Returns false when there is nothing to go back to.
    fn go_back(&mut self) -> bool;

    /// Returns false when there is nothing to go forward to.
    fn go_forward(&mut self) -> bool;

    /// Push a new entry. Returns false if the location was rejected or is
    /// already current.
    fn push(&mut self, location: &str) -> bool;

    /// Replace the current entry. Returns false if the location was
    /// rejected or is already current.
    fn replace(&mut self, location: &str) -> bool;

    /// External address for an in-app location.
    fn href(&self, location: &str) -> String;

    /// Map an external address back to an in-app location. `None` if the
    /// address does not belong to this application.
    fn parse_external(&self, url: &str) -> Option<String>;
}

/// Create the history strategy for `mode`, served under `base`.
pub fn create_history(mode: HistoryMode, base: &str, initial: &str) -> Box<dyn HistoryAdapter> {
    match mode {
        HistoryMode::Web => Box::new(WebHistory::new(base, initial)),
        HistoryMode::Hash => Box::new(HashHistory::new(base, initial)),
        HistoryMode::Memory => Box::new(MemoryHistory::with_initial_path(initial)),
    }
}

/// Normalize a base path: leading slash, no trailing slash, root is `""`.
pub fn normalize_base(base: &str) -> String {
    let base = base.trim();
    let base = base.trim_end_matches('/');
    if base.is_empty() {
        String::new()
    } else if base.starts_with('/') {
        base.to_string()
    } else {
        format!("/{base}")
    }
}

/// Percent-decode a URL component. Invalid UTF-8 is replaced, not rejected.
pub(crate) fn decode(component: &str) -> String {
    percent_decode_str(component).decode_utf8_lossy().into_owned()
}

/// Parse an absolute URL, or a path relative to an arbitrary origin.
pub(crate) fn parse_url(input: &str) -> Option<Url> {
    match Url::parse(input) {
        Ok(url) => Some(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            Url::parse("http://localhost/").ok()?.join(input).ok()
        }
        Err(e) => {
            tracing::warn!(url = %input, error = %e, "Unparseable external URL");
            None
        }
    }
}
