// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: built-in defaults, TOML files and environment variables.

use std::path::PathBuf;

use tracing::{debug, trace};

use crate::error::ConfigError;
use crate::layer::GsdkConfigLayer;

/// Source precedence levels (higher = overrides lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	ConfigFile = 20,
	Environment = 50,
}

/// Trait for configuration sources.
pub trait ConfigSource: Send + Sync {
	fn name(&self) -> &'static str;
	fn precedence(&self) -> Precedence;
	fn load(&self) -> Result<GsdkConfigLayer, ConfigError>;
}

/// Built-in defaults source.
pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<GsdkConfigLayer, ConfigError> {
		debug!("loading defaults");
		Ok(GsdkConfigLayer::default())
	}
}

/// TOML file configuration source. A missing file contributes nothing.
pub struct TomlSource {
	path: PathBuf,
}

impl TomlSource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}
}

impl ConfigSource for TomlSource {
	fn name(&self) -> &'static str {
		"toml-config"
	}

	fn precedence(&self) -> Precedence {
		Precedence::ConfigFile
	}

	fn load(&self) -> Result<GsdkConfigLayer, ConfigError> {
		if !self.path.exists() {
			debug!(path = %self.path.display(), "config file not found, skipping");
			return Ok(GsdkConfigLayer::default());
		}

		debug!(path = %self.path.display(), "loading config file");
		let content = std::fs::read_to_string(&self.path).map_err(|e| ConfigError::FileRead {
			path: self.path.clone(),
			source: e,
		})?;

		let layer: GsdkConfigLayer =
			toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
				path: self.path.clone(),
				source: e,
			})?;

		if let Some(secs) = layer.timeout_secs {
			nonzero_timeout("timeout_secs", secs)?;
		}

		trace!("parsed config layer from TOML");
		Ok(layer)
	}
}

fn nonzero_timeout(key: &str, secs: u64) -> Result<u64, ConfigError> {
	if secs == 0 {
		return Err(ConfigError::invalid_value(key, "timeout must be at least 1 second"));
	}
	Ok(secs)
}

/// Environment variable source.
///
/// Convention: GSDK_<FIELD>
pub struct EnvSource;

impl EnvSource {
	fn load_with(lookup: impl Fn(&str) -> Option<String>) -> Result<GsdkConfigLayer, ConfigError> {
		let var = |name: &str| lookup(name).filter(|s| !s.is_empty());

		let timeout_secs = match var("GSDK_TIMEOUT_SECS") {
			Some(v) => {
				let secs = v.parse().map_err(|_| {
					ConfigError::invalid_value("GSDK_TIMEOUT_SECS", format!("invalid u64 value '{v}'"))
				})?;
				Some(nonzero_timeout("GSDK_TIMEOUT_SECS", secs)?)
			}
			None => None,
		};

		Ok(GsdkConfigLayer {
			api_key: var("GSDK_API_KEY"),
			referrer: var("GSDK_REFERRER"),
			api_version: var("GSDK_API_VERSION"),
			timeout_secs,
			user_agent: var("GSDK_USER_AGENT"),
			maps_base_url: var("GSDK_MAPS_BASE_URL"),
			search_base_url: var("GSDK_SEARCH_BASE_URL"),
		})
	}
}

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<GsdkConfigLayer, ConfigError> {
		debug!("loading environment variables");
		Self::load_with(|name| std::env::var(name).ok())
	}
}
