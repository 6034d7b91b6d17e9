// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Fluent client for the Google AJAX Search and Language APIs.
//!
//! ```ignore
//! use gsdk_search::{Query, ResultSetSize, SearchClient};
//!
//! let client = SearchClient::new(gsdk_common_config::load_config(None)?)?;
//! let page = client
//!     .web_search()
//!     .with_query("rust borrow checker")
//!     .with_result_set_size(ResultSetSize::Large)
//!     .list()?;
//! if let Some(start) = page.cursor().and_then(|c| c.next_start()) {
//!     // fetch the next page with `.with_start_index(start.parse()?)`
//! }
//! ```

pub mod client;
pub mod query;
pub mod schema;

pub use client::SearchClient;
pub use query::{SearchQuery, VERSION_PARAM};
pub use schema::{
	BlogResult, BookResult, BookSearchType, DetectLanguageResult, GsearchResultClass, ImageResult,
	ListingType, LocalResult, NewsImage, NewsResult, PatentResult, PatentStatus, PhoneNumber,
	ResultSetSize, TranslateLanguageResult, VideoResult, VideoType, ViewPortMode, WebResult,
};

pub use gsdk_core::{Cursor, CursorPage, GeoLocation, PagedList, Query, QueryError, Result};
