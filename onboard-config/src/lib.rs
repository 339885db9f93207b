//! Loader for workspace configuration with file + environment overlays.
//!
//! The configuration surface is deliberately small: the brand API base URL
//! and credential. Values may come from a YAML/TOML file, `ONBOARD_`-prefixed
//! environment variables, or both, with `${VAR}` placeholders expanded after
//! merging. Missing values fall back to empty strings; no validation happens
//! here (callers decide what an unusable value means).
use config::{Config, Environment, File};
use onboard_common::{OnboardError, Result};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

const MAXIMUM_ENV_EXPANSION_DEPTH: usize = 8;

#[derive(Debug, Default, Deserialize)]
pub struct OnboardConfig {
    #[serde(default)]
    pub brand_api: BrandApiConfig,
}

/// Connection settings for the company-data lookup API.
#[derive(Debug, Default, Deserialize)]
pub struct BrandApiConfig {
    #[serde(default)]
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
}

fn expand_env_in_value(v: &mut Value) {
    match v {
        Value::String(s) => {
            if s.contains('$') {
                let mut cur = std::mem::take(s);
                for _ in 0..MAXIMUM_ENV_EXPANSION_DEPTH {
                    let expanded = match shellexpand::env(&cur) {
                        Ok(cow) => cow.into_owned(),
                        Err(_) => cur.clone(),
                    };
                    if expanded == cur {
                        break;
                    }
                    cur = expanded;
                }
                *s = cur;
            }
        }
        Value::Array(arr) => arr.iter_mut().for_each(expand_env_in_value),
        Value::Object(obj) => obj.values_mut().for_each(expand_env_in_value),
        _ => {}
    }
}

/// Builder hiding the `config` crate wiring (file + env overrides).
pub struct OnboardConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
}

impl Default for OnboardConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl OnboardConfigLoader {
    /// Start with sensible defaults: `ONBOARD_` env overrides only.
    ///
    /// ```
    /// use onboard_config::OnboardConfigLoader;
    ///
    /// let config = OnboardConfigLoader::new()
    ///     .with_yaml_str("brand_api:\n  base_url: https://api.brandfetch.io/v2/brands")
    ///     .load()
    ///     .expect("valid config");
    ///
    /// assert_eq!(config.brand_api.base_url, "https://api.brandfetch.io/v2/brands");
    /// assert_eq!(config.brand_api.api_key, "");
    /// ```
    pub fn new() -> Self {
        let builder =
            Config::builder().add_source(Environment::with_prefix("ONBOARD").separator("__"));
        Self { builder }
    }

    /// Attach a YAML/TOML/JSON file; the `config` crate infers format by suffix.
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.builder = self.builder.add_source(File::from(path.as_ref()).required(false));
        self
    }

    /// Allow tests/CLI to merge inline YAML snippets.
    pub fn with_yaml_str(mut self, yaml: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(yaml, config::FileFormat::Yaml));
        self
    }

    /// Consume the builder and deserialize the merged sources.
    ///
    /// Sources are merged, `${VAR}` placeholders expanded, and the result
    /// materialised into [`OnboardConfig`]. Absent keys become empty strings.
    pub fn load(self) -> Result<OnboardConfig> {
        let cfg = self
            .builder
            .build()
            .map_err(|e| OnboardError::Config(e.to_string()))?;

        let mut v: Value = cfg
            .try_deserialize()
            .map_err(|e| OnboardError::Config(e.to_string()))?;
        expand_env_in_value(&mut v);

        let typed: OnboardConfig =
            serde_json::from_value(v).map_err(|e| OnboardError::Config(e.to_string()))?;

        Ok(typed)
    }
}
