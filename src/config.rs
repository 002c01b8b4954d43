use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ReleaseVersionError, Result};

/// Name of the configuration file looked up in the project and user config directories
pub const CONFIG_FILE_NAME: &str = "release-tag-version.toml";

/// Represents the complete configuration for release-tag-version.
///
/// Every key is optional; omitted keys take the defaults below.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ReleaseTagVersionConfig {
    /// Whether the version code is inferred at all
    #[serde(default = "default_true")]
    pub version_code_is_inferred: bool,

    /// Whether the version name is inferred at all
    #[serde(default = "default_true")]
    pub version_name_is_inferred: bool,

    /// Override file, relative to the project directory
    #[serde(default = "default_version_override_file")]
    pub version_override_file: PathBuf,

    #[serde(default = "default_fallback_version_code")]
    pub fallback_version_code: i32,

    #[serde(default = "default_fallback_version_name")]
    pub fallback_version_name: String,

    /// Prefix that release tags (and override values) carry, e.g. `v`
    #[serde(default)]
    pub version_prefix: String,

    /// Combined override such as `1.2.3+4`
    #[serde(default)]
    pub version_override: Option<String>,

    #[serde(default)]
    pub version_code_override: Option<i32>,

    #[serde(default)]
    pub version_name_override: Option<String>,

    /// Build types whose code is never incremented
    #[serde(default = "default_release_build_types")]
    pub release_build_types: BTreeSet<String>,
}

fn default_true() -> bool {
    true
}

fn default_version_override_file() -> PathBuf {
    PathBuf::from(".version-override")
}

fn default_fallback_version_code() -> i32 {
    1
}

fn default_fallback_version_name() -> String {
    "1.0.0".to_string()
}

fn default_release_build_types() -> BTreeSet<String> {
    BTreeSet::from(["release".to_string()])
}

impl Default for ReleaseTagVersionConfig {
    fn default() -> Self {
        ReleaseTagVersionConfig {
            version_code_is_inferred: true,
            version_name_is_inferred: true,
            version_override_file: default_version_override_file(),
            fallback_version_code: default_fallback_version_code(),
            fallback_version_name: default_fallback_version_name(),
            version_prefix: String::new(),
            version_override: None,
            version_code_override: None,
            version_name_override: None,
            release_build_types: default_release_build_types(),
        }
    }
}

/// Parses configuration from TOML text.
pub fn parse_config(text: &str) -> Result<ReleaseTagVersionConfig> {
    toml::from_str(text).map_err(|e| ReleaseVersionError::config(e.to_string()))
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter (must exist)
/// 2. `release-tag-version.toml` in the project directory
/// 3. `release-tag-version.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
/// * `project_dir` - Directory of the project being versioned
///
/// # Returns
/// * `Ok(ReleaseTagVersionConfig)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(
    config_path: Option<&Path>,
    project_dir: &Path,
) -> Result<ReleaseTagVersionConfig> {
    let path = if let Some(path) = config_path {
        path.to_path_buf()
    } else if project_dir.join(CONFIG_FILE_NAME).exists() {
        project_dir.join(CONFIG_FILE_NAME)
    } else if let Some(config_dir) = dirs::config_dir() {
        let user_path = config_dir.join(CONFIG_FILE_NAME);
        if user_path.exists() {
            user_path
        } else {
            return Ok(ReleaseTagVersionConfig::default());
        }
    } else {
        return Ok(ReleaseTagVersionConfig::default());
    };

    let text = fs::read_to_string(&path).map_err(|e| {
        ReleaseVersionError::config(format!("Cannot read {}: {}", path.display(), e))
    })?;
    parse_config(&text)
}
