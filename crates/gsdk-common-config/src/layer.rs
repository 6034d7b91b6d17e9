// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Mergeable configuration layer and the resolved SDK configuration.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_MAPS_BASE_URL: &str = "https://maps.googleapis.com/maps/api";
pub const DEFAULT_SEARCH_BASE_URL: &str = "https://ajax.googleapis.com/ajax/services";
pub const DEFAULT_API_VERSION: &str = "1.0";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// One source's view of the configuration. Unset fields defer to lower layers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GsdkConfigLayer {
	#[serde(default)]
	pub api_key: Option<String>,
	#[serde(default)]
	pub referrer: Option<String>,
	#[serde(default)]
	pub api_version: Option<String>,
	#[serde(default)]
	pub timeout_secs: Option<u64>,
	#[serde(default)]
	pub user_agent: Option<String>,
	#[serde(default)]
	pub maps_base_url: Option<String>,
	#[serde(default)]
	pub search_base_url: Option<String>,
}

impl GsdkConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.api_key.is_some() {
			self.api_key = other.api_key;
		}
		if other.referrer.is_some() {
			self.referrer = other.referrer;
		}
		if other.api_version.is_some() {
			self.api_version = other.api_version;
		}
		if other.timeout_secs.is_some() {
			self.timeout_secs = other.timeout_secs;
		}
		if other.user_agent.is_some() {
			self.user_agent = other.user_agent;
		}
		if other.maps_base_url.is_some() {
			self.maps_base_url = other.maps_base_url;
		}
		if other.search_base_url.is_some() {
			self.search_base_url = other.search_base_url;
		}
	}

	pub fn finalize(self) -> GsdkConfig {
		GsdkConfig {
			api_key: self.api_key,
			referrer: self.referrer,
			api_version: self
				.api_version
				.unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
			timeout: Duration::from_secs(
				self.timeout_secs
					.filter(|secs| *secs > 0)
					.unwrap_or(DEFAULT_TIMEOUT_SECS),
			),
			user_agent: self.user_agent,
			maps_base_url: trim_base(self.maps_base_url, DEFAULT_MAPS_BASE_URL),
			search_base_url: trim_base(self.search_base_url, DEFAULT_SEARCH_BASE_URL),
		}
	}
}

fn trim_base(value: Option<String>, default: &str) -> String {
	value
		.unwrap_or_else(|| default.to_string())
		.trim_end_matches('/')
		.to_string()
}

/// Fully resolved SDK configuration.
#[derive(Clone, PartialEq, Eq)]
pub struct GsdkConfig {
	/// Application key appended to every request as `key`.
	pub api_key: Option<String>,
	/// Sent as the `Referer` header by search queries.
	pub referrer: Option<String>,
	/// Search API protocol version, sent as `v`.
	pub api_version: String,
	pub timeout: Duration,
	/// Overrides the standard SDK User-Agent.
	pub user_agent: Option<String>,
	pub maps_base_url: String,
	pub search_base_url: String,
}

impl GsdkConfig {
	/// Configuration with built-in defaults and the given key.
	pub fn with_api_key(api_key: impl Into<String>) -> Self {
		Self {
			api_key: Some(api_key.into()),
			..Self::default()
		}
	}

	pub fn has_api_key(&self) -> bool {
		self.api_key.is_some()
	}
}

impl Default for GsdkConfig {
	fn default() -> Self {
		GsdkConfigLayer::default().finalize()
	}
}

impl fmt::Debug for GsdkConfig {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("GsdkConfig")
			.field("api_key", &self.api_key.as_ref().map(|_| crate::REDACTED))
			.field("referrer", &self.referrer)
			.field("api_version", &self.api_version)
			.field("timeout", &self.timeout)
			.field("user_agent", &self.user_agent)
			.field("maps_base_url", &self.maps_base_url)
			.field("search_base_url", &self.search_base_url)
			.finish()
	}
}
