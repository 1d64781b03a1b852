//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Navigation (location with optional query/hash)
//!     → navigation::Router strips query/hash
//!     → table.rs (route lookup)
//!     → matcher.rs (evaluate literal pattern)
//!     → Return: matched Route or NotFound
//!
//! Route Compilation (at startup):
//!     RouteConfig[]
//!     → Validate (names, paths, patterns)
//!     → Compile matchers
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - Literal patterns only
//! - Deterministic: same input always matches same route
//! - First match wins (insertion order)

pub mod matcher;
pub mod route;
pub mod table;

pub use matcher::MatchOptions;
pub use route::{Route, ViewId};
pub use table::{NotFound, RouteTable};
