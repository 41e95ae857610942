//! Configuration module for webpify
//!
//! Resolution order:
//! 1. CLI flags (highest priority, applied by the binary)
//! 2. Environment variables (WEBPIFY_*)
//! 3. Project config (`webpify.toml` in the project root)
//! 4. User config (`<config dir>/webpify/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{CandidatesConfig, ColorMode, Config, ConvertConfig, OutputConfig, ScanConfig};
