//! Configuration Management
//!
//! Unified configuration system with hierarchical resolution:
//! 1. Built-in defaults
//! 2. Global config (~/.config/wikigraph/config.toml)
//! 3. Project config (.wikigraph/config.toml)
//! 4. Environment variables (WIKIGRAPH_*)
//! 5. CLI arguments (highest priority, applied by the CLI layer)

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::*;
