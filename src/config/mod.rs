//! Configuration module for Docs-Survey
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//!
//! # Example
//!
//! ```no_run
//! use docs_survey::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Request timeout: {}s", config.crawler.request_timeout_secs);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, CrawlerConfig, InputConfig, OutputConfig, UserAgentConfig, STDOUT_PATH,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
