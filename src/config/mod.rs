//! Configuration loading and management for the quotation engine.
//!
//! This module provides functionality to load the billing configuration
//! from a YAML file, including default markup rates, rate bounds, and
//! input field limits.
//!
//! # Example
//!
//! ```no_run
//! use quote_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/billing.yaml").unwrap();
//! println!("Default margin: {}%", config.default_rates().margin_pct);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{BillingConfig, InputLimits, RateDefaults};
