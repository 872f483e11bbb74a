use std::path::PathBuf;

use thiserror::Error;

/// Pipeline configuration, loaded from environment variables.
///
/// Both paths are optional: the pipeline defaults to reading events from
/// stdin and writing reports to stdout.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub input_path: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    /// VARSEL_INPUT defaults to stdin, VARSEL_OUTPUT to stdout.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Config {
            input_path: optional_path("VARSEL_INPUT")?,
            output_path: optional_path("VARSEL_OUTPUT")?,
        })
    }
}

fn optional_path(var: &'static str) -> Result<Option<PathBuf>, ConfigError> {
    match std::env::var(var) {
        Ok(value) if !value.is_empty() => Ok(Some(PathBuf::from(value))),
        Ok(_) => Ok(None),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(std::env::VarError::NotUnicode(_)) => {
            Err(ConfigError::Invalid(var, "must be valid UTF-8"))
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, &'static str),
}
