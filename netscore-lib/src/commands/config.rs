use crate::Result;
use crate::metrics::{NetScorePolicy, ScoringPolicy};
use camino::{Utf8Path, Utf8PathBuf};
use ohno::{IntoAppError, app_err};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

/// Name of the configuration file picked up from the working directory
pub const CONFIG_FILE_NAME: &str = "netscore.toml";

const LOG_TARGET: &str = "    config";

#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// License identifiers that earn a full license score, compared case-insensitively
    #[serde(default = "default_accepted_licenses")]
    pub accepted_licenses: Vec<String>,

    /// Whether failed metrics count toward the `NetScore` mean
    #[serde(default)]
    pub net_score: NetScorePolicy,
}

fn default_accepted_licenses() -> Vec<String> {
    ScoringPolicy::default().accepted_licenses
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or fails validation
    pub fn load(base_dir: &Utf8Path, config_path: Option<&Utf8PathBuf>) -> Result<Self> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading netscore configuration file '{path}'"))?;
            (path.clone(), text)
        } else {
            let path = base_dir.join(CONFIG_FILE_NAME);
            match fs::read_to_string(&path) {
                Ok(text) => (path, text),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    log::debug!(target: LOG_TARGET, "No '{path}' found, using the default configuration");
                    return Ok(Self::default());
                }
                Err(e) => return Err(e).into_app_err_with(|| format!("reading netscore configuration file '{path}'")),
            }
        };

        let config: Self = toml::from_str(&text).into_app_err_with(|| format!("parsing configuration file '{final_path}'"))?;
        config.validate()?;

        log::info!(target: LOG_TARGET, "Loaded configuration from '{final_path}'");
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if no licenses are accepted or an accepted license is blank
    fn validate(&self) -> Result<()> {
        if self.accepted_licenses.is_empty() {
            return Err(app_err!("accepted_licenses must list at least one license"));
        }

        if let Some(index) = self.accepted_licenses.iter().position(|l| l.trim().is_empty()) {
            return Err(app_err!("accepted_licenses entry {index} is blank"));
        }

        Ok(())
    }

    /// The scoring policy described by this configuration
    #[must_use]
    pub fn scoring_policy(&self) -> ScoringPolicy {
        ScoringPolicy {
            accepted_licenses: self.accepted_licenses.clone(),
            net_score: self.net_score,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("default_config.toml should be valid TOML that deserializes to Config")
    }
}
