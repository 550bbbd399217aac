//! Configuration file support for npm-spdx-sbom.
//!
//! Provides YAML-based configuration through `npm-sbom.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use url::Url;

use npm_spdx_sbom::shared::error::SbomError;
use npm_spdx_sbom::shared::Result;

pub const CONFIG_FILENAME: &str = "npm-sbom.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub package_type: Option<String>,
    pub manager_name: Option<String>,
    pub manager_version: Option<String>,
    pub namespace_base: Option<String>,
    pub pretty: Option<bool>,
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

    config
        .validate()
        .with_context(|| format!("Invalid config file: {}", path.display()))?;
    for key in config.unknown_field_names() {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);
    if !config_path.is_file() {
        return Ok(None);
    }
    load_config_from_path(&config_path).map(Some)
}

impl ConfigFile {
    fn validate(&self) -> std::result::Result<(), SbomError> {
        require_non_blank("manager_version", self.manager_version.as_deref())?;
        require_non_blank("manager_name", self.manager_name.as_deref())?;

        if let Some(base) = self.namespace_base.as_deref() {
            let is_http = Url::parse(base)
                .map(|url| matches!(url.scheme(), "http" | "https"))
                .unwrap_or(false);
            if !is_http {
                return Err(SbomError::Validation {
                    message: format!(
                        "namespace_base '{}' is not an http(s) URL (e.g. \"https://example.com/spdxdocs\")",
                        base
                    ),
                });
            }
        }
        Ok(())
    }

    /// Unknown keys in stable order
    fn unknown_field_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.unknown_fields.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

fn require_non_blank(field: &str, value: Option<&str>) -> std::result::Result<(), SbomError> {
    match value {
        Some(v) if v.trim().is_empty() => Err(SbomError::Validation {
            message: format!("{} must not be empty; remove the field to use the default", field),
        }),
        _ => Ok(()),
    }
}
