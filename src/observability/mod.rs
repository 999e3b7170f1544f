//! # Observability
//!
//! Structured logging for the publisher.

pub mod logging;

pub use logging::init_logging;
