//! Generator configuration.
//!
//! Every field has a default so an empty `{}` file is a valid config; the CLI
//! only needs a file when overriding the attempt bound or step wording.
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_SCHEMA_VERSION: u32 = 1;
pub const DEFAULT_MAX_ATTEMPTS: u32 = 100;
pub const DEFAULT_MAX_GROUPS: usize = 20;
pub const DEFAULT_TERMINAL_MARKER: &str = "The End";
pub const DEFAULT_LOCATION_PREFIX: &str = "Hide this at/with: ";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct HuntConfig {
    pub schema_version: u32,
    /// Attempts per group before the run is abandoned.
    pub max_attempts: u32,
    /// Upper bound the CLI enforces on `--groups`.
    pub max_groups: usize,
    pub terminal_marker: String,
    pub location_prefix: String,
}

impl Default for HuntConfig {
    fn default() -> Self {
        default_config()
    }
}

pub fn default_config() -> HuntConfig {
    HuntConfig {
        schema_version: CONFIG_SCHEMA_VERSION,
        max_attempts: DEFAULT_MAX_ATTEMPTS,
        max_groups: DEFAULT_MAX_GROUPS,
        terminal_marker: DEFAULT_TERMINAL_MARKER.to_string(),
        location_prefix: DEFAULT_LOCATION_PREFIX.to_string(),
    }
}

/// Load and validate a JSON config file.
pub fn load_config(path: &Path) -> Result<HuntConfig> {
    let bytes = fs::read(path).with_context(|| format!("read config {}", path.display()))?;
    let config: HuntConfig = serde_json::from_slice(&bytes).context("parse hunt config JSON")?;
    validate_config(&config)?;
    Ok(config)
}

pub fn validate_config(config: &HuntConfig) -> Result<()> {
    if config.schema_version != CONFIG_SCHEMA_VERSION {
        return Err(anyhow!(
            "unsupported hunt config schema_version {}",
            config.schema_version
        ));
    }
    if config.max_attempts == 0 {
        return Err(anyhow!("max_attempts must be at least 1"));
    }
    if config.max_groups == 0 {
        return Err(anyhow!("max_groups must be at least 1"));
    }
    if config.terminal_marker.trim().is_empty() {
        return Err(anyhow!("terminal_marker must be non-empty"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config: HuntConfig = serde_json::from_str("{}").expect("parse");
        assert_eq!(config, default_config());
        validate_config(&config).expect("defaults are valid");
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config: HuntConfig =
            serde_json::from_str(r#"{"max_attempts": 5}"#).expect("parse");
        assert_eq!(config.max_attempts, 5);
        assert_eq!(config.terminal_marker, DEFAULT_TERMINAL_MARKER);
    }

    #[test]
    fn rejects_zero_attempts_and_unknown_schema() {
        let mut config = default_config();
        config.max_attempts = 0;
        assert!(validate_config(&config).is_err());

        let mut config = default_config();
        config.schema_version = 2;
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("schema_version"));
    }

    #[test]
    fn unknown_fields_fail_to_parse() {
        assert!(serde_json::from_str::<HuntConfig>(r#"{"attempts": 5}"#).is_err());
    }

    #[test]
    fn load_config_reads_and_validates_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("hunt.json");
        std::fs::write(&path, r#"{"terminal_marker": "Finish"}"#).expect("write");
        let config = load_config(&path).expect("load");
        assert_eq!(config.terminal_marker, "Finish");

        std::fs::write(&path, r#"{"terminal_marker": "  "}"#).expect("write");
        assert!(load_config(&path).is_err());
    }
}
