// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Transport-level error types.

use thiserror::Error;

/// Failures raised before an application-level envelope could be read.
///
/// These are never retried by the SDK; they surface to the caller as soon as
/// they happen.
#[derive(Debug, Error)]
pub enum TransportError {
	/// Network-level error during HTTP communication (DNS, connect, TLS).
	#[error("Network error: {0}")]
	Network(#[from] reqwest::Error),

	/// Request timed out.
	#[error("Request timed out")]
	Timeout,

	/// The server answered with a non-2xx HTTP status.
	#[error("HTTP {status}: {body}")]
	HttpStatus { status: u16, body: String },

	/// Reading the response body failed.
	#[error("I/O error reading response: {0}")]
	Io(#[from] std::io::Error),
}

impl TransportError {
	/// Returns the HTTP status code when the failure was a non-2xx response.
	pub fn http_status(&self) -> Option<u16> {
		match self {
			TransportError::HttpStatus { status, .. } => Some(*status),
			_ => None,
		}
	}
}
