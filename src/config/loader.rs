//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{WebpifyError, WebpifyResult};

use super::types::Config;

/// Project-level config file name, looked up in the project root
pub const PROJECT_CONFIG_FILE: &str = "webpify.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> WebpifyResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(path, &content)
}

pub(crate) fn parse_with_warnings(
    path: &Path,
    content: &str,
) -> WebpifyResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| WebpifyError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
                key,
                file: path.to_path_buf(),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults, then apply env overrides.
///
/// Unlike a missing file, a malformed one is an error.
pub fn resolve(project_root: &Path) -> WebpifyResult<(Config, Vec<ConfigWarning>)> {
    let project_config = project_root.join(PROJECT_CONFIG_FILE);
    if project_config.is_file() {
        log::debug!("loading config from {}", project_config.display());
        let (config, warnings) = load_with_warnings(&project_config)?;
        return Ok((with_env_overrides(config), warnings));
    }

    if let Some(user_config) = dirs::config_dir().map(|d| d.join("webpify/config.toml")) {
        if user_config.is_file() {
            log::debug!("loading config from {}", user_config.display());
            let (config, warnings) = load_with_warnings(&user_config)?;
            return Ok((with_env_overrides(config), warnings));
        }
    }

    Ok((with_env_overrides(Config::default()), Vec::new()))
}

/// Apply environment variable overrides (WEBPIFY_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

pub(crate) fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    // WEBPIFY_CODE_EXTENSIONS (comma-separated)
    if let Some(exts) = get_env("WEBPIFY_CODE_EXTENSIONS") {
        let parsed = split_list(&exts);
        if !parsed.is_empty() {
            config.scan.code_extensions = parsed;
        }
    }

    // WEBPIFY_EXCLUDE_DIRS (comma-separated)
    if let Some(dirs) = get_env("WEBPIFY_EXCLUDE_DIRS") {
        config.scan.exclude_dirs = split_list(&dirs);
    }

    if let Some(prefix) = get_env("WEBPIFY_PUBLIC_PREFIX") {
        let prefix = prefix.trim().trim_matches('/');
        if !prefix.is_empty() {
            config.candidates.public_prefix = prefix.to_string();
        }
    }

    if let Some(val) = get_env("WEBPIFY_OVERWRITE") {
        let val = val.to_lowercase();
        config.convert.overwrite_existing = val == "1" || val == "true";
    }

    config
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().trim_start_matches('.').to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const KNOWN_KEYS: &[&str] = &[
        "scan",
        "source_extension",
        "code_extensions",
        "exclude_dirs",
        "convert",
        "overwrite_existing",
        "candidates",
        "public_prefix",
        "forms",
        "extra_prefixes",
        "output",
        "color",
        "unicode",
    ];

    KNOWN_KEYS
        .iter()
        .map(|candidate| (*candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
