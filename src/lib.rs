//! Angular Project Statistics
//!
//! A Rust library for counting Angular constructs across a TypeScript source
//! tree: modules, injectable services, components, directives, and pipes,
//! with standalone and change-detection classification per declaration.

pub mod types;
pub mod utils;
pub mod analyzers;
pub mod generators;

// Re-export commonly used types
pub use types::*;
pub use analyzers::{AngularAstAnalyzer, ProjectAnalyzer};
pub use generators::ReportGenerator;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
