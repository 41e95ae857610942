//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ReferenceForm;
use crate::error::WebpifyResult;

use super::loader::{self, ConfigWarning};

/// Discovery configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Extension of the images to convert (without the dot)
    #[serde(default = "default_source_extension")]
    pub source_extension: String,

    /// Extensions of the files searched for references
    #[serde(default = "default_code_extensions")]
    pub code_extensions: Vec<String>,

    /// Directory names never descended into, for images and code alike
    #[serde(default = "default_exclude_dirs")]
    pub exclude_dirs: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            source_extension: default_source_extension(),
            code_extensions: default_code_extensions(),
            exclude_dirs: default_exclude_dirs(),
        }
    }
}

fn default_source_extension() -> String {
    "png".to_string()
}

fn default_code_extensions() -> Vec<String> {
    ["js", "ts", "jsx", "tsx", "vue", "html", "css", "scss"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_exclude_dirs() -> Vec<String> {
    ["node_modules", ".git", "dist", ".nuxt", ".output"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Conversion configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ConvertConfig {
    /// Replace an existing `.webp` that sits next to the source image
    #[serde(default)]
    pub overwrite_existing: bool,
}

/// Reference-candidate configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidatesConfig {
    /// Conventional public-serving prefix (`/images/...`)
    #[serde(default = "default_public_prefix")]
    pub public_prefix: String,

    /// Built-in reference forms to generate, in order
    #[serde(default = "default_forms")]
    pub forms: Vec<ReferenceForm>,

    /// Additional `<prefix>/<relative path>` forms
    #[serde(default)]
    pub extra_prefixes: Vec<String>,
}

impl Default for CandidatesConfig {
    fn default() -> Self {
        Self {
            public_prefix: default_public_prefix(),
            forms: default_forms(),
            extra_prefixes: Vec::new(),
        }
    }
}

fn default_public_prefix() -> String {
    "images".to_string()
}

fn default_forms() -> Vec<ReferenceForm> {
    ReferenceForm::ALL.to_vec()
}

/// Output configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Root configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,

    #[serde(default)]
    pub convert: ConvertConfig,

    #[serde(default)]
    pub candidates: CandidatesConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> WebpifyResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> WebpifyResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Resolve project config, user config, or defaults, then apply env overrides
    pub fn resolve(project_root: &Path) -> WebpifyResult<(Self, Vec<ConfigWarning>)> {
        loader::resolve(project_root)
    }

    /// Apply environment variable overrides (WEBPIFY_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
