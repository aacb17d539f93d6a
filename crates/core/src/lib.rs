//! Core types for the rankeval retrieval-metrics workspace
//!
//! This crate provides the foundations shared by the metric crates:
//!
//! - **Configuration**: evaluation cutoff and empty-relevance policy
//! - **Error handling**: unified error types
//!

pub mod config;
pub mod error;

// Re-export main types for convenience
pub use config::{Config, EmptyRelevantPolicy, MetricsConfig};
pub use error::{Error, Result, ResultExt};

/// Version of the core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{Config, MetricsConfig};
    pub use crate::error::{Result, ResultExt};
}
