// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! The generic query executor shared by every endpoint.

use std::fmt;
use std::sync::Arc;

use gsdk_common_config::GsdkConfig;
use gsdk_common_http::{ApiGateway, Headers, ReqwestTransport, ResponseBody, TransportError};
use serde_json::Value;
use tracing::{debug, instrument, trace};

use crate::envelope::EnvelopeParser;
use crate::error::{QueryError, Result};
use crate::handler::ResponseHandler;
use crate::mapper::ResultMapper;
use crate::paged::PagedList;
use crate::param::ParamValue;
use crate::url::UrlBuilder;

/// Query parameter carrying the application key.
pub const KEY_PARAM: &str = "key";

/// Builds a gateway over the blocking `reqwest` transport using the configured
/// timeout and User-Agent.
pub fn default_gateway(config: &GsdkConfig) -> Result<ApiGateway> {
	let builder = match &config.user_agent {
		Some(ua) => gsdk_common_http::builder_with_user_agent(ua.clone()),
		None => gsdk_common_http::builder(),
	};
	let client = builder
		.timeout(config.timeout)
		.build()
		.map_err(TransportError::from)?;
	Ok(ApiGateway::from_transport(ReqwestTransport::from_client(client)))
}

/// Executes one endpoint: builds the URL, fetches through the gateway, parses
/// the envelope and maps the payload.
///
/// Parameters registered with [`with_fixed_parameter`](Self::with_fixed_parameter)
/// are re-applied on every [`reset`](Self::reset).
pub struct QueryExecutor<T> {
	url: UrlBuilder,
	fixed: Vec<(String, ParamValue)>,
	headers: Headers,
	gateway: ApiGateway,
	envelope: Arc<dyn EnvelopeParser>,
	mapper: Arc<dyn ResultMapper<T>>,
	handlers: Vec<Box<dyn ResponseHandler<T>>>,
}

impl<T> QueryExecutor<T> {
	pub fn new(
		template: impl Into<String>,
		gateway: ApiGateway,
		envelope: impl EnvelopeParser + 'static,
		mapper: impl ResultMapper<T> + 'static,
	) -> Self {
		Self {
			url: UrlBuilder::new(template),
			fixed: Vec::new(),
			headers: Headers::new(),
			gateway,
			envelope: Arc::new(envelope),
			mapper: Arc::new(mapper),
			handlers: Vec::new(),
		}
	}

	/// Adds the application key, if configured, as a fixed parameter.
	pub fn with_api_key(self, config: &GsdkConfig) -> Self {
		match &config.api_key {
			Some(key) => self.with_fixed_parameter(KEY_PARAM, key.as_str()),
			None => self,
		}
	}

	/// Sets a parameter that survives [`reset`](Self::reset).
	pub fn with_fixed_parameter(
		mut self,
		name: impl Into<String>,
		value: impl Into<ParamValue>,
	) -> Self {
		let name = name.into();
		let value = value.into();
		self.url.with_parameter(name.clone(), value.clone());
		self.fixed.push((name, value));
		self
	}

	/// Adds a header sent with every call from this query.
	pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.headers.insert(name.into(), value.into());
		self
	}

	/// Clears configured parameters back to the fixed set.
	pub fn reset(&mut self) {
		self.url.clear();
		for (name, value) in &self.fixed {
			self.url.with_parameter(name.clone(), value.clone());
		}
	}

	pub fn with_parameter(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> &mut Self {
		self.url.with_parameter(name, value);
		self
	}

	/// The encoded value currently held for `name`.
	pub fn parameter(&self, name: &str) -> Option<&str> {
		self.url.parameter(name)
	}

	pub fn build_url(&self) -> Result<String> {
		self.url.build_url()
	}

	/// Registers a hook run after each successful [`list`](Self::list).
	pub fn add_response_handler(&mut self, handler: impl ResponseHandler<T> + 'static) {
		self.handlers.push(Box::new(handler));
	}

	/// Fetches and maps the result list, then notifies handlers in order.
	#[instrument(skip(self), fields(template = %self.url.template()))]
	pub fn list(&self) -> Result<PagedList<T>> {
		let root = self.fetch()?;
		let payload = self.envelope.parse_list(root)?;
		let items = self.mapper.map_list(payload.items, &payload.context)?;

		let list = PagedList::new(items)
			.with_cursor(payload.cursor)
			.with_next_page_token(payload.next_page_token);
		debug!(result_count = list.len(), "List completed successfully");

		for handler in &self.handlers {
			handler.handle_response(&list);
		}
		Ok(list)
	}

	/// Fetches and maps a single result. A valid envelope without payload
	/// yields `None`.
	#[instrument(skip(self), fields(template = %self.url.template()))]
	pub fn single_result(&self) -> Result<Option<T>> {
		let root = self.fetch()?;
		match self.envelope.parse_single(root)? {
			Some(value) => self.mapper.map_single(value).map(Some),
			None => Ok(None),
		}
	}

	fn fetch(&self) -> Result<Value> {
		let url = self.url.build_url()?;
		self.gateway.call(&url, &self.headers, read_json)
	}
}

fn read_json(body: &mut ResponseBody) -> Result<Value> {
	let value: Value = serde_json::from_reader(body).map_err(|e| {
		if e.is_io() {
			QueryError::Transport(TransportError::Io(e.into()))
		} else {
			QueryError::malformed(format!("invalid JSON: {e}"))
		}
	})?;
	trace!(body = %value, "Response body");
	Ok(value)
}

impl<T> fmt::Debug for QueryExecutor<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("QueryExecutor")
			.field("template", &self.url.template())
			.field("headers", &self.headers)
			.field("handlers", &self.handlers.len())
			.finish_non_exhaustive()
	}
}
