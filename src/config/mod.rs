//! Configuration module for Serp-Velocity
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every component receives its settings from a [`Config`] at construction;
//! nothing reads the process environment at call time.
//!
//! # Example
//!
//! ```no_run
//! use serp_velocity::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Tracking depth: {}", config.tracking.fetch_depth);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, HttpConfig, MiningConfig, SearchConfig, TrackingConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
pub use validation::validate;
