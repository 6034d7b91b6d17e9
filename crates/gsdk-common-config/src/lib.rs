// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration for the Google API SDKs.
//!
//! This crate provides:
//! - Layered configuration from multiple sources (defaults, TOML file, environment)
//! - Consistent environment variable naming (`GSDK_*`)
//! - Redaction of the application key in debug output
//!
//! # Usage
//!
//! ```ignore
//! use gsdk_common_config::load_config;
//!
//! let config = load_config(Some("gsdk.toml".as_ref()))?;
//! println!("maps endpoint: {}", config.maps_base_url);
//! ```

pub mod error;
pub mod layer;
pub mod sources;

use std::path::Path;

pub use error::ConfigError;
pub use layer::{
	GsdkConfig, GsdkConfigLayer, DEFAULT_API_VERSION, DEFAULT_MAPS_BASE_URL,
	DEFAULT_SEARCH_BASE_URL, DEFAULT_TIMEOUT_SECS,
};
pub use sources::{ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource};

use tracing::debug;

/// Placeholder printed in place of secret values.
pub const REDACTED: &str = "[REDACTED]";

/// Load configuration with standard precedence.
///
/// Precedence (highest to lowest):
/// 1. Environment variables (`GSDK_*`)
/// 2. Config file, when a path is given
/// 3. Built-in defaults
pub fn load_config(config_path: Option<&Path>) -> Result<GsdkConfig, ConfigError> {
	let mut sources: Vec<Box<dyn ConfigSource>> = vec![Box::new(DefaultsSource), Box::new(EnvSource)];
	if let Some(path) = config_path {
		sources.push(Box::new(TomlSource::new(path)));
	}

	load_from_sources(sources)
}

/// Merge the given sources in precedence order and finalize the result.
pub fn load_from_sources(
	mut sources: Vec<Box<dyn ConfigSource>>,
) -> Result<GsdkConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = GsdkConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		merged.merge(source.load()?);
	}

	Ok(merged.finalize())
}
