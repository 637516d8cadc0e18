//! Configuration file support for bom-flat.
//!
//! Provides YAML-based configuration through `bom-flat.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::Context;
use bom_flat::shared::error::BomError;
use bom_flat::shared::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

pub const CONFIG_FILENAME: &str = "bom-flat.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub ignore_file: Option<String>,
    pub output_dir: Option<String>,
    /// Replaces the built-in invalid part number patterns
    pub invalid_part_patterns: Option<Vec<String>>,
    pub verbose: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref patterns) = config.invalid_part_patterns {
        if let Some(i) = patterns.iter().position(|p| p.trim().is_empty()) {
            return Err(BomError::ConfigError {
                message: format!("invalid_part_patterns[{}] must not be empty", i),
                hint: "Remove the entry, or use \"^$\" to reject blank part numbers."
                    .to_string(),
            }
            .into());
        }
    }

    for (field, value) in [
        ("ignore_file", &config.ignore_file),
        ("output_dir", &config.output_dir),
    ] {
        if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
            return Err(BomError::ConfigError {
                message: format!("{} must not be empty", field),
                hint: format!("Remove '{}' to use the default.", field),
            }
            .into());
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<_> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
