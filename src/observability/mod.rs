//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events (route resolution, misses, rejected locations)
//!     → logging.rs subscriber (stderr, text or JSON)
//! ```
//!
//! # Design Decisions
//! - Structured fields for machine parsing
//! - Misses logged at warn, rejected locations at error

pub mod logging;
