//! Tracing targets used by tinct.
//!
//! tinct instruments import, export, and property discovery with the
//! `tracing` crate but never installs a subscriber. To see logs, install one
//! in your application and filter by the targets below:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("tinct::registry=debug,tinct::import=trace")
//!     .init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Directive import target.
    pub const IMPORT: &str = "tinct::import";
    /// Style export target.
    pub const EXPORT: &str = "tinct::export";
    /// Property discovery and cache target.
    pub const REGISTRY: &str = "tinct::registry";
}
