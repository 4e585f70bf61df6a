//! Configuration loading

use crate::constants::{
    CONFIG_FILENAMES, DEFAULT_BINDGEN_BIN, DEFAULT_REWRITE_IGNORE, DEFAULT_SDK_PLATFORM,
    DEFAULT_UNIVERSAL_TARGETS,
};
use crate::error::{Error, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::Deserialize;
use std::path::Path;

/// Tool configuration read from `uniffi-template.{json,yaml,yml}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolConfig {
    /// Cargo binary target that runs the binding generator.
    #[serde(default = "get_default_bindgen_bin")]
    pub bindgen_bin: String,
    /// Targets compiled and merged for `--universal` builds.
    #[serde(default = "get_default_universal_targets")]
    pub universal_targets: Vec<String>,
    /// Platform name looked up in the SDK listing.
    #[serde(default = "get_default_sdk_platform")]
    pub sdk_platform: String,
    /// Overrides the deployment target otherwise taken from the selected SDK.
    #[serde(default)]
    pub deployment_target: Option<String>,
    /// Glob patterns, relative to the cargo package, excluded from token rewriting.
    #[serde(default = "get_default_rewrite_ignore")]
    pub rewrite_ignore: Vec<String>,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            bindgen_bin: get_default_bindgen_bin(),
            universal_targets: get_default_universal_targets(),
            sdk_platform: get_default_sdk_platform(),
            deployment_target: None,
            rewrite_ignore: get_default_rewrite_ignore(),
        }
    }
}

impl ToolConfig {
    /// Loads the first configuration file found in `repo_root`, or the defaults.
    pub fn load<P: AsRef<Path>>(repo_root: P) -> Result<Self> {
        let repo_root = repo_root.as_ref();

        for config_file_name in CONFIG_FILENAMES.iter() {
            let config_file_path = repo_root.join(config_file_name);

            if config_file_path.exists() {
                log::debug!("Loading configuration from {}", config_file_path.display());
                let content = std::fs::read_to_string(&config_file_path)?;
                let config: ToolConfig = if config_file_name.ends_with(".json") {
                    serde_json::from_str(&content)?
                } else {
                    serde_yaml::from_str(&content)?
                };
                config.validate()?;
                return Ok(config);
            }
        }

        log::debug!("No configuration file in {}; using defaults", repo_root.display());
        Ok(Self::default())
    }

    pub fn validate(&self) -> Result<()> {
        if self.bindgen_bin.trim().is_empty() {
            return Err(Error::ConfigValidation("bindgen_bin must not be empty".into()));
        }
        if self.universal_targets.is_empty() {
            return Err(Error::ConfigValidation(
                "universal_targets must list at least one target".into(),
            ));
        }
        if self.sdk_platform.trim().is_empty() {
            return Err(Error::ConfigValidation("sdk_platform must not be empty".into()));
        }
        Ok(())
    }

    /// Builds a matcher for `rewrite_ignore`.
    ///
    /// Patterns match paths relative to the cargo package.
    pub fn rewrite_ignore_set(&self) -> Result<GlobSet> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &self.rewrite_ignore {
            builder.add(Glob::new(pattern)?);
        }
        Ok(builder.build()?)
    }
}

fn get_default_bindgen_bin() -> String {
    DEFAULT_BINDGEN_BIN.to_string()
}

fn get_default_universal_targets() -> Vec<String> {
    DEFAULT_UNIVERSAL_TARGETS.iter().map(|t| t.to_string()).collect()
}

fn get_default_sdk_platform() -> String {
    DEFAULT_SDK_PLATFORM.to_string()
}

fn get_default_rewrite_ignore() -> Vec<String> {
    DEFAULT_REWRITE_IGNORE.iter().map(|p| p.to_string()).collect()
}
