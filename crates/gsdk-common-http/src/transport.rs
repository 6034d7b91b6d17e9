// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! The transport seam and its blocking `reqwest` implementation.

use std::collections::BTreeMap;
use std::fmt;
use std::io::{Cursor, Read};
use std::sync::Arc;
use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{debug, error};

use crate::error::TransportError;

/// Request headers, keyed by header name.
pub type Headers = BTreeMap<String, String>;

/// A response body handed out by a [`Transport`].
///
/// The underlying connection or buffer is released when the body is dropped.
pub struct ResponseBody {
	reader: Box<dyn Read>,
}

impl ResponseBody {
	pub fn new(reader: impl Read + 'static) -> Self {
		Self {
			reader: Box::new(reader),
		}
	}

	/// Wraps an in-memory payload.
	pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
		Self::new(Cursor::new(bytes.into()))
	}
}

impl Read for ResponseBody {
	fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
		self.reader.read(buf)
	}
}

impl fmt::Debug for ResponseBody {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ResponseBody").finish_non_exhaustive()
	}
}

/// Performs a single blocking GET.
///
/// Implementations fail with [`TransportError`] when the call cannot complete;
/// application-level failures inside a received payload are not their concern.
pub trait Transport: Send + Sync {
	fn fetch(&self, url: &str, headers: &Headers) -> Result<ResponseBody, TransportError>;
}

/// Type alias for a shared transport.
pub type SharedTransport = Arc<dyn Transport>;

/// [`Transport`] backed by a blocking `reqwest` client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
	client: Client,
}

impl ReqwestTransport {
	/// Creates a transport with the standard SDK client.
	pub fn new() -> Result<Self, TransportError> {
		Ok(Self {
			client: crate::client::new_client()?,
		})
	}

	/// Creates a transport whose requests time out after `timeout`.
	pub fn with_timeout(timeout: Duration) -> Result<Self, TransportError> {
		Ok(Self {
			client: crate::client::new_client_with_timeout(timeout)?,
		})
	}

	/// Wraps an already configured client.
	pub fn from_client(client: Client) -> Self {
		Self { client }
	}
}

impl Transport for ReqwestTransport {
	fn fetch(&self, url: &str, headers: &Headers) -> Result<ResponseBody, TransportError> {
		let mut request = self.client.get(url);
		for (name, value) in headers {
			request = request.header(name.as_str(), value.as_str());
		}

		let response = request.send().map_err(|e| {
			if e.is_timeout() {
				error!("Request timed out");
				return TransportError::Timeout;
			}
			error!(error = %e, "Network error during request");
			TransportError::Network(e)
		})?;

		let status = response.status();
		debug!(status = %status, "Received response");

		if !status.is_success() {
			let body = response.text().unwrap_or_default();
			error!(status = status.as_u16(), body = %body, "Request failed");
			return Err(TransportError::HttpStatus {
				status: status.as_u16(),
				body,
			});
		}

		Ok(ResponseBody::new(response))
	}
}
