// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! API gateway: header management and scoped response handling.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::error::TransportError;
use crate::transport::{Headers, ResponseBody, SharedTransport, Transport};

pub const ACCEPT_ENCODING: &str = "Accept-Encoding";

/// Compressed representations are requested on every call.
pub const DEFAULT_ACCEPT_ENCODING: &str = "gzip, deflate";

/// Issues GETs through a [`Transport`] with a fixed set of default headers.
#[derive(Clone)]
pub struct ApiGateway {
	transport: SharedTransport,
	default_headers: Headers,
}

impl ApiGateway {
	pub fn new(transport: SharedTransport) -> Self {
		let mut default_headers = Headers::new();
		default_headers.insert(
			ACCEPT_ENCODING.to_string(),
			DEFAULT_ACCEPT_ENCODING.to_string(),
		);
		Self {
			transport,
			default_headers,
		}
	}

	pub fn from_transport(transport: impl Transport + 'static) -> Self {
		Self::new(Arc::new(transport))
	}

	/// Adds or replaces a header sent with every request.
	pub fn set_default_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
		self.default_headers.insert(name.into(), value.into());
	}

	pub fn default_headers(&self) -> &Headers {
		&self.default_headers
	}

	/// Fetches `url` and hands the body to `consume`.
	///
	/// Per-call headers override defaults of the same name. The body is dropped
	/// before this returns, whether `consume` succeeds or fails.
	#[instrument(skip(self, headers, consume))]
	pub fn call<T, E, F>(&self, url: &str, headers: &Headers, consume: F) -> Result<T, E>
	where
		E: From<TransportError>,
		F: FnOnce(&mut ResponseBody) -> Result<T, E>,
	{
		let mut merged = self.default_headers.clone();
		merged.extend(headers.iter().map(|(k, v)| (k.clone(), v.clone())));

		debug!(url = %url, header_count = merged.len(), "Calling API");
		let mut body = self.transport.fetch(url, &merged)?;
		let result = consume(&mut body);
		drop(body);
		result
	}
}

impl fmt::Debug for ApiGateway {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ApiGateway")
			.field("default_headers", &self.default_headers)
			.finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Read;
	use std::sync::atomic::{AtomicUsize, Ordering};
	use std::sync::Mutex;

	struct DropCounter(Arc<AtomicUsize>);

	impl Read for DropCounter {
		fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
			Ok(0)
		}
	}

	impl Drop for DropCounter {
		fn drop(&mut self) {
			self.0.fetch_add(1, Ordering::SeqCst);
		}
	}

	#[derive(Default)]
	struct RecordingTransport {
		seen: Mutex<Vec<(String, Headers)>>,
		released: Arc<AtomicUsize>,
	}

	impl Transport for RecordingTransport {
		fn fetch(&self, url: &str, headers: &Headers) -> Result<ResponseBody, TransportError> {
			self.seen
				.lock()
				.unwrap()
				.push((url.to_string(), headers.clone()));
			Ok(ResponseBody::new(DropCounter(self.released.clone())))
		}
	}

	struct FailingTransport;

	impl Transport for FailingTransport {
		fn fetch(&self, _url: &str, _headers: &Headers) -> Result<ResponseBody, TransportError> {
			Err(TransportError::Timeout)
		}
	}

	#[test]
	fn default_header_requests_compression() {
		let transport = Arc::new(RecordingTransport::default());
		let gateway = ApiGateway::new(transport.clone());

		gateway
			.call("http://example.test/a", &Headers::new(), |_| {
				Ok::<_, TransportError>(())
			})
			.unwrap();

		let seen = transport.seen.lock().unwrap();
		assert_eq!(seen[0].0, "http://example.test/a");
		assert_eq!(
			seen[0].1.get(ACCEPT_ENCODING).map(String::as_str),
			Some(DEFAULT_ACCEPT_ENCODING)
		);
	}

	#[test]
	fn per_call_headers_are_merged_and_override() {
		let transport = Arc::new(RecordingTransport::default());
		let mut gateway = ApiGateway::new(transport.clone());
		gateway.set_default_header("X-Default", "one");

		let mut extra = Headers::new();
		extra.insert("Referer".to_string(), "https://example.test".to_string());
		extra.insert("X-Default".to_string(), "two".to_string());
		gateway
			.call("http://example.test", &extra, |_| Ok::<_, TransportError>(()))
			.unwrap();

		let seen = transport.seen.lock().unwrap();
		let headers = &seen[0].1;
		assert_eq!(headers.get("Referer").unwrap(), "https://example.test");
		assert_eq!(headers.get("X-Default").unwrap(), "two");
		assert!(headers.contains_key(ACCEPT_ENCODING));
		assert!(!gateway.default_headers().contains_key("Referer"));
	}

	#[test]
	fn body_is_released_on_success_and_failure() {
		let transport = Arc::new(RecordingTransport::default());
		let gateway = ApiGateway::new(transport.clone());

		gateway
			.call("http://example.test", &Headers::new(), |_| {
				Ok::<_, TransportError>(())
			})
			.unwrap();
		assert_eq!(transport.released.load(Ordering::SeqCst), 1);

		let result: Result<(), TransportError> =
			gateway.call("http://example.test", &Headers::new(), |_| {
				Err(TransportError::HttpStatus {
					status: 500,
					body: String::new(),
				})
			});
		assert!(result.is_err());
		assert_eq!(transport.released.load(Ordering::SeqCst), 2);
	}

	#[test]
	fn transport_failure_propagates() {
		let gateway = ApiGateway::from_transport(FailingTransport);
		let result: Result<(), TransportError> =
			gateway.call("http://example.test", &Headers::new(), |_| Ok(()));
		assert!(matches!(result, Err(TransportError::Timeout)));
	}
}
