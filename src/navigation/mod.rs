//! Navigation subsystem.
//!
//! Ties the immutable route table to a history adapter and produces a
//! [`NavigationState`] for every navigation.

pub mod router;
pub mod state;

pub use router::{Listener, Router, RouterError};
pub use state::NavigationState;
