//! Layered configuration for the `lichen` binary.
//!
//! Sources, later ones winning:
//! - built-in defaults
//! - `lichen.toml` in the working directory, or the file passed with `--config`
//! - environment variables such as `LICHEN__LOGGING__LEVEL=debug`
//!
//! A `.env` file is read into the environment first.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use config::{Environment, File};
use lichen_validator::{ParamType, StaticRegistry};
use serde::Deserialize;

const DEFAULT_FILE: &str = "lichen.toml";
const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const ROTATIONS: [&str; 4] = ["daily", "hourly", "minutely", "never"];

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    /// Extra search parameters: name to type spec, e.g. `habitat = "string"`.
    pub parameters: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
    pub file_enabled: bool,
    pub file_directory: PathBuf,
    pub file_prefix: String,
    pub file_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json: false,
            file_enabled: false,
            file_directory: PathBuf::from("./logs"),
            file_prefix: "lichen".to_string(),
            file_rotation: "daily".to_string(),
        }
    }
}

impl Config {
    /// Loads and validates the configuration. An explicit `path` must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenvy::dotenv().ok();

        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::from(Path::new(DEFAULT_FILE)).required(false),
        };
        let config: Config = config::Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix("LICHEN")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to build configuration")?
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let level = self.logging.level.to_ascii_lowercase();
        if !LEVELS.contains(&level.as_str()) {
            bail!(
                "logging.level must be one of {}, got '{}'",
                LEVELS.join(", "),
                self.logging.level
            );
        }
        if !ROTATIONS.contains(&self.logging.file_rotation.as_str()) {
            bail!(
                "logging.file_rotation must be one of {}, got '{}'",
                ROTATIONS.join(", "),
                self.logging.file_rotation
            );
        }
        for (name, spec) in &self.parameters {
            spec.parse::<ParamType>()
                .with_context(|| format!("Invalid type for parameter '{name}'"))?;
        }
        Ok(())
    }

    /// The built-in catalogue with the configured parameters layered on top.
    pub fn registry(&self) -> Result<StaticRegistry> {
        let mut registry = StaticRegistry::with_catalogue();
        for (name, spec) in &self.parameters {
            let ty = spec
                .parse::<ParamType>()
                .with_context(|| format!("Invalid type for parameter '{name}'"))?;
            registry.insert(name.as_str(), ty);
        }
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lichen_validator::ParameterRegistry;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.logging.level, "warn");
        assert!(config.parameters.is_empty());
    }

    #[test]
    fn loads_parameters_from_file() {
        let file = write_config(
            r#"
            [logging]
            level = "debug"

            [parameters]
            habitat = "string"
            sample_size = "integer"
            realm = "enum:Continent"
            "#,
        );
        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.logging.level, "debug");

        let registry = config.registry().unwrap();
        assert_eq!(registry.resolve("sampleSize"), Some(ParamType::Integer));
        assert_eq!(registry.resolve("HABITAT"), Some(ParamType::Text));
        assert!(registry.resolve("decimal_latitude").is_some());
    }

    #[test]
    fn rejects_unknown_type_specs() {
        let file = write_config("[parameters]\nhabitat = \"colour\"\n");
        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("habitat"));
    }

    #[test]
    fn rejects_bad_logging_settings() {
        let mut config = Config::default();
        config.logging.level = "loud".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.logging.file_rotation = "weekly".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        assert!(Config::load(Some(Path::new("/nonexistent/lichen.toml"))).is_err());
    }
}
