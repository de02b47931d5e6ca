use crate::error::Result;
use crate::input::validate_threshold;
use serde::Deserialize;
use std::path::Path;

/// Default merge threshold, as a percentage.
pub const DEFAULT_THRESHOLD_PCT: u32 = 50;

/// Default field delimiter for exports.
pub const DEFAULT_DELIMITER: char = ',';

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Merge threshold percentage in [0,100].
    pub threshold: u32,
    /// Field delimiter used by the tabular export.
    pub delimiter: char,
}

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD_PCT,
            delimiter: DEFAULT_DELIMITER,
        }
    }

    /// Loads `serpcluster.toml` from `dir` if present, falling back to
    /// defaults otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, parsed,
    /// or fails validation.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join("serpcluster.toml");
        if !path.exists() {
            return Ok(Self::new());
        }
        let raw = std::fs::read_to_string(&path).map_err(|source| crate::error::ClusterError::Io {
            source,
            path: path.clone(),
        })?;
        let config: Self = toml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the threshold is outside [0,100].
    pub fn validate(&self) -> Result<()> {
        validate_threshold(self.threshold)?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
