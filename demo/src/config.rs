use anyhow::{Context, Result};
use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    pub scenario: ScenarioConfig,
    pub logging: LoggingConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ScenarioConfig {
    /// Name of the user the task is assigned to
    pub user: String,
    /// Title of the task
    pub title: String,
    /// Priority label of the task
    pub priority: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Log format (pretty, json, compact)
    pub format: LogFormat,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct OutputConfig {
    /// Result format written to stdout (text, json)
    pub format: OutputFormat,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
    Compact,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Print only the final completion flag
    Text,
    /// Print a JSON report of the run
    Json,
}

impl Config {
    /// Load configuration from the embedded defaults and environment variables
    pub fn from_env() -> Result<Self> {
        Self::finish(Self::defaults_builder().add_source(Self::env_source()))
    }

    /// Load configuration from a specific file path layered over the defaults
    pub fn from_file(path: &str) -> Result<Self> {
        let builder = Self::defaults_builder()
            .add_source(File::with_name(path).format(FileFormat::Toml))
            .add_source(Self::env_source());

        Self::finish(builder)
    }

    fn defaults_builder() -> config::ConfigBuilder<config::builder::DefaultState> {
        ConfigBuilder::builder().add_source(File::from_str(
            include_str!("../config/default.toml"),
            FileFormat::Toml,
        ))
    }

    /// Environment variable overrides with ASSIGN_ prefix (e.g. ASSIGN_SCENARIO_USER).
    /// Values stay strings: titles and priorities are free-form.
    fn env_source() -> Environment {
        Environment::with_prefix("ASSIGN").separator("_")
    }

    fn finish(builder: config::ConfigBuilder<config::builder::DefaultState>) -> Result<Self> {
        let config = builder
            .build()
            .context("Failed to build configuration")?;

        let mut result: Config = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        Self::apply_standard_env_vars(&mut result);

        Ok(result)
    }

    /// Apply the standard LOG_LEVEL variable
    fn apply_standard_env_vars(config: &mut Config) {
        if let Ok(log_level) = env::var("LOG_LEVEL") {
            config.logging.level = log_level;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        match self.logging.level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(anyhow::anyhow!(
                    "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                    self.logging.level
                ));
            }
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scenario: ScenarioConfig {
                user: "Alice".to_string(),
                title: "Complete project".to_string(),
                priority: "High".to_string(),
            },
            logging: LoggingConfig {
                level: "warn".to_string(),
                format: LogFormat::Compact,
            },
            output: OutputConfig {
                format: OutputFormat::Text,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.scenario.user, "Alice");
        assert_eq!(config.scenario.title, "Complete project");
        assert_eq!(config.scenario.priority, "High");
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_embedded_defaults_match_default_impl() {
        let config = Config::finish(Config::defaults_builder()).unwrap();
        let expected = Config::default();
        assert_eq!(config.scenario.user, expected.scenario.user);
        assert_eq!(config.scenario.title, expected.scenario.title);
        assert_eq!(config.scenario.priority, expected.scenario.priority);
        assert_eq!(config.logging.format, expected.logging.format);
        assert_eq!(config.output.format, expected.output.format);
    }

    #[test]
    fn test_from_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[scenario]\nuser = \"Bob\"\n\n[output]\nformat = \"json\""
        )
        .unwrap();

        let config = Config::from_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.scenario.user, "Bob");
        assert_eq!(config.logging.format, LogFormat::Compact);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_from_missing_file_fails() {
        assert!(Config::from_file("/nonexistent/assign-demo.toml").is_err());
    }

    #[test]
    fn test_config_validation() {
        let config = Config::default();
        assert!(config.validate().is_ok());

        let mut invalid_config = Config::default();
        invalid_config.logging.level = "invalid".to_string();
        assert!(invalid_config.validate().is_err());
    }

    // Only test in this crate that mutates the process environment.
    #[test]
    fn test_environment_overrides_keep_strings_verbatim() {
        env::set_var("ASSIGN_SCENARIO_TITLE", "007");
        env::set_var("ASSIGN_SCENARIO_PRIORITY", "1.50");
        env::set_var("LOG_LEVEL", "debug");

        let config = Config::from_env();

        env::remove_var("ASSIGN_SCENARIO_TITLE");
        env::remove_var("ASSIGN_SCENARIO_PRIORITY");
        env::remove_var("LOG_LEVEL");

        let config = config.unwrap();
        assert_eq!(config.scenario.title, "007");
        assert_eq!(config.scenario.priority, "1.50");
        assert_eq!(config.logging.level, "debug");
    }
}
