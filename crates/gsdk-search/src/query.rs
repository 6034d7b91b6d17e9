// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Fluent search queries.
//!
//! Every endpoint shares [`SearchQuery`]; endpoint-specific parameters live in
//! `impl` blocks on the concrete record type.

use gsdk_common_config::GsdkConfig;
use gsdk_core::param::encode_list;
use gsdk_core::{
	ApiGateway, GeoLocation, Query, QueryExecutor, ResponseDataEnvelope, SerdeMapper,
};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::schema::{
	BookResult, BookSearchType, LocalResult, ResultSetSize, TranslateLanguageResult,
};

/// Protocol version parameter sent with every search.
pub const VERSION_PARAM: &str = "v";

const REFERER_HEADER: &str = "Referer";

/// A query against one AJAX Search API endpoint.
#[derive(Debug)]
pub struct SearchQuery<T> {
	executor: QueryExecutor<T>,
}

impl<T: DeserializeOwned + 'static> SearchQuery<T> {
	pub(crate) fn new(endpoint: String, gateway: ApiGateway, config: &GsdkConfig) -> Self {
		debug!(endpoint = %endpoint, "Creating search query");
		let mut executor =
			QueryExecutor::new(endpoint, gateway, ResponseDataEnvelope, SerdeMapper::new())
				.with_api_key(config)
				.with_fixed_parameter(VERSION_PARAM, config.api_version.as_str());
		if let Some(referrer) = &config.referrer {
			executor = executor.with_header(REFERER_HEADER, referrer.as_str());
		}
		Self { executor }
	}
}

impl<T> SearchQuery<T> {
	/// The search terms.
	pub fn with_query(mut self, query: impl Into<String>) -> Self {
		self.executor.with_parameter("q", query.into());
		self
	}

	/// Zero-based index of the first result; see
	/// [`Cursor::next_start`](gsdk_core::Cursor::next_start).
	pub fn with_start_index(mut self, start: u32) -> Self {
		self.executor.with_parameter("start", start);
		self
	}

	pub fn with_result_set_size(mut self, size: ResultSetSize) -> Self {
		self.executor.with_parameter("rsz", size);
		self
	}

	/// Host language, taken from the language part of a locale tag such as
	/// `fr-CA` or `en_US`.
	pub fn with_locale(mut self, locale: &str) -> Self {
		let language = locale.split(['-', '_']).next().unwrap_or(locale);
		self.executor.with_parameter("hl", language);
		self
	}

	/// JSONP callback name.
	pub fn with_callback(mut self, callback: impl Into<String>) -> Self {
		self.executor.with_parameter("callback", callback.into());
		self
	}

	/// Opaque value echoed back with JSONP responses.
	pub fn with_context(mut self, context: impl Into<String>) -> Self {
		self.executor.with_parameter("context", context.into());
		self
	}
}

impl SearchQuery<BookResult> {
	/// Restricts results to one user library.
	pub fn with_library(mut self, library: impl Into<String>) -> Self {
		self.executor.with_parameter("as_list", library.into());
		self
	}

	pub fn with_search_type(mut self, search_type: BookSearchType) -> Self {
		let token = search_type.to_string();
		if !token.is_empty() {
			self.executor.with_parameter(token, "1");
		}
		self
	}
}

impl SearchQuery<LocalResult> {
	/// Center point that results are biased towards.
	pub fn with_center(mut self, center: GeoLocation) -> Self {
		self.executor.with_parameter("sll", center);
		self
	}
}

impl SearchQuery<TranslateLanguageResult> {
	/// Source and target languages, e.g. `("en", "fr")`. An empty source asks
	/// the service to detect it.
	pub fn with_language_pair(mut self, source: &str, target: &str) -> Self {
		self.executor.with_parameter("langpair", encode_list([source, target]));
		self
	}
}

impl<T> Query for SearchQuery<T> {
	type Record = T;

	fn executor(&self) -> &QueryExecutor<T> {
		&self.executor
	}

	fn executor_mut(&mut self) -> &mut QueryExecutor<T> {
		&mut self.executor
	}
}
