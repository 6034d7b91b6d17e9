// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Entry point that hands out configured search queries.

use gsdk_common_config::GsdkConfig;
use gsdk_common_http::SharedTransport;
use gsdk_core::{default_gateway, ApiGateway, Result};
use serde::de::DeserializeOwned;
use tracing::info;

use crate::query::SearchQuery;
use crate::schema::{
	BlogResult, BookResult, DetectLanguageResult, ImageResult, LocalResult, NewsResult,
	PatentResult, TranslateLanguageResult, VideoResult, WebResult,
};

/// Factory for AJAX Search API queries sharing one configuration and gateway.
#[derive(Debug, Clone)]
pub struct SearchClient {
	config: GsdkConfig,
	gateway: ApiGateway,
}

impl SearchClient {
	/// Creates a client over the blocking `reqwest` transport.
	pub fn new(config: GsdkConfig) -> Result<Self> {
		let gateway = default_gateway(&config)?;
		info!(
			base_url = %config.search_base_url,
			api_version = %config.api_version,
			has_referrer = config.referrer.is_some(),
			"Search client initialized"
		);
		Ok(Self { config, gateway })
	}

	/// Creates a client over a caller-supplied transport.
	pub fn with_transport(config: GsdkConfig, transport: SharedTransport) -> Self {
		Self {
			config,
			gateway: ApiGateway::new(transport),
		}
	}

	pub fn config(&self) -> &GsdkConfig {
		&self.config
	}

	pub fn web_search(&self) -> SearchQuery<WebResult> {
		self.query("search/web")
	}

	pub fn book_search(&self) -> SearchQuery<BookResult> {
		self.query("search/books")
	}

	pub fn patent_search(&self) -> SearchQuery<PatentResult> {
		self.query("search/patent")
	}

	pub fn video_search(&self) -> SearchQuery<VideoResult> {
		self.query("search/video")
	}

	pub fn news_search(&self) -> SearchQuery<NewsResult> {
		self.query("search/news")
	}

	pub fn image_search(&self) -> SearchQuery<ImageResult> {
		self.query("search/images")
	}

	pub fn local_search(&self) -> SearchQuery<LocalResult> {
		self.query("search/local")
	}

	pub fn blog_search(&self) -> SearchQuery<BlogResult> {
		self.query("search/blogs")
	}

	pub fn translate(&self) -> SearchQuery<TranslateLanguageResult> {
		self.query("language/translate")
	}

	pub fn detect_language(&self) -> SearchQuery<DetectLanguageResult> {
		self.query("language/detect")
	}

	fn query<T: DeserializeOwned + 'static>(&self, path: &str) -> SearchQuery<T> {
		let endpoint = format!("{}/{}", self.config.search_base_url, path);
		SearchQuery::new(endpoint, self.gateway.clone(), &self.config)
	}
}
