// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared blocking HTTP client with consistent User-Agent header.

use reqwest::blocking::{Client, ClientBuilder};
use std::time::Duration;

use crate::error::TransportError;

/// Creates a new HTTP client with the standard SDK User-Agent header.
///
/// The User-Agent format is: `gsdk/{platform}/{version}`
/// Example: `gsdk/linux-x86_64/0.1.0`
pub fn new_client() -> Result<Client, TransportError> {
	Ok(builder().build()?)
}

/// Creates a new HTTP client builder with the standard SDK User-Agent header.
///
/// Compressed responses are decoded transparently.
///
/// # Example
/// ```ignore
/// let client = gsdk_common_http::builder()
///     .timeout(Duration::from_secs(30))
///     .build()?;
/// ```
pub fn builder() -> ClientBuilder {
	builder_with_user_agent(user_agent())
}

/// Creates a new HTTP client builder with a custom User-Agent header.
pub fn builder_with_user_agent(user_agent: impl Into<String>) -> ClientBuilder {
	Client::builder()
		.user_agent(user_agent.into())
		.gzip(true)
		.deflate(true)
}

/// Creates a new HTTP client with a custom timeout and the standard User-Agent.
pub fn new_client_with_timeout(timeout: Duration) -> Result<Client, TransportError> {
	Ok(builder().timeout(timeout).build()?)
}

/// Returns the standard SDK User-Agent string.
///
/// Format: `gsdk/{platform}/{version}`
pub fn user_agent() -> String {
	format!(
		"gsdk/{}-{}/{}",
		std::env::consts::OS,
		std::env::consts::ARCH,
		env!("CARGO_PKG_VERSION")
	)
}
