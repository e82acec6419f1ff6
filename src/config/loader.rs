//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the billing
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::BillingRates;

use super::types::BillingConfig;

/// Loads and provides access to the billing configuration.
///
/// The `ConfigLoader` reads the billing YAML file and provides methods to
/// query the default markup rates and to clamp user input into the
/// configured bounds.
///
/// # Example
///
/// ```no_run
/// use quote_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/billing.yaml").unwrap();
/// let rates = loader.default_rates();
/// println!("Default overhead: {}%", rates.overhead_pct);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: BillingConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the billing configuration file (e.g., "./config/billing.yaml")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML or a required field is missing
    ///   (`ConfigParseError`)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use quote_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/billing.yaml")?;
    /// # Ok::<(), quote_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        Ok(Self { config })
    }

    /// Creates a loader from the built-in default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: BillingConfig::default(),
        }
    }

    /// Returns the underlying billing configuration.
    pub fn config(&self) -> &BillingConfig {
        &self.config
    }

    /// Returns the configured default markup rates.
    pub fn default_rates(&self) -> BillingRates {
        self.config.default_rates()
    }
}
