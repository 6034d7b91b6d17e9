// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Error type surfaced by every query.

use gsdk_common_http::TransportError;
use thiserror::Error;

/// The single error type returned by `list()` and `single_result()`.
///
/// No partial results accompany an error.
#[derive(Debug, Error)]
pub enum QueryError {
	/// The request could not be completed or its body could not be read.
	#[error("Transport error: {0}")]
	Transport(#[from] TransportError),

	/// The payload is not the expected envelope shape.
	#[error("Malformed response: {0}")]
	Malformed(String),

	/// The envelope parsed but reports a failure, or its contents are inconsistent.
	#[error("API status {status}: {}", .details.as_deref().unwrap_or("no details"))]
	ApiStatus {
		status: String,
		details: Option<String>,
	},

	/// The endpoint template or base URL is not a valid URL.
	#[error("Invalid endpoint: {0}")]
	InvalidEndpoint(String),
}

impl QueryError {
	pub fn malformed(message: impl Into<String>) -> Self {
		Self::Malformed(message.into())
	}

	pub fn api_status(status: impl Into<String>, details: Option<String>) -> Self {
		Self::ApiStatus {
			status: status.into(),
			details,
		}
	}

	/// The raw status string for API status failures.
	pub fn status(&self) -> Option<&str> {
		match self {
			QueryError::ApiStatus { status, .. } => Some(status),
			_ => None,
		}
	}

	/// Human-readable details carried by an API status failure.
	pub fn details(&self) -> Option<&str> {
		match self {
			QueryError::ApiStatus { details, .. } => details.as_deref(),
			_ => None,
		}
	}

	pub fn is_transport(&self) -> bool {
		matches!(self, QueryError::Transport(_))
	}

	pub fn is_malformed(&self) -> bool {
		matches!(self, QueryError::Malformed(_))
	}

	pub fn is_api_status(&self) -> bool {
		matches!(self, QueryError::ApiStatus { .. })
	}
}

/// Result type alias for query operations.
pub type Result<T> = std::result::Result<T, QueryError>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_api_status_accessors() {
		let err = QueryError::api_status("INVALID_REQUEST", None);
		assert!(err.is_api_status());
		assert_eq!(err.status(), Some("INVALID_REQUEST"));
		assert_eq!(err.details(), None);
		assert_eq!(err.to_string(), "API status INVALID_REQUEST: no details");
	}

	#[test]
	fn test_api_status_display_includes_details() {
		let err = QueryError::api_status("403", Some("Suspected Terms of Service Abuse".into()));
		assert_eq!(
			err.to_string(),
			"API status 403: Suspected Terms of Service Abuse"
		);
	}

	#[test]
	fn test_transport_error_wraps_cause() {
		let err: QueryError = TransportError::Timeout.into();
		assert!(err.is_transport());
		assert!(!err.is_malformed());
		assert_eq!(err.status(), None);
		assert!(std::error::Error::source(&err).is_some());
	}
}
