// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! AJAX Search API value enums and result records.

use gsdk_core::value_enum;
use gsdk_core::value_enum::lenient;
use serde::{Deserialize, Serialize};

value_enum! {
	/// The kind of search that produced a record.
	pub enum GsearchResultClass {
		GlocalSearch => "GlocalSearch",
		GblogSearch => "GblogSearch",
		GbookSearch => "GbookSearch",
		GimageSearch => "GimageSearch",
		GnewsSearch => "GnewsSearch",
		GpatentSearch => "GpatentSearch",
		GvideoSearch => "GvideoSearch",
		GwebSearch => "GwebSearch",
	}
}

value_enum! {
	/// Origin of a local search listing.
	pub enum ListingType {
		Local => "local",
		Kml => "kml",
	}
}

value_enum! {
	pub enum PatentStatus {
		Filed => "filed",
		Issued => "issued",
	}
}

value_enum! {
	pub enum VideoType {
		YouTube => "YouTube",
		Google => "Google",
	}
}

value_enum! {
	/// How a local search viewport was determined.
	pub enum ViewPortMode {
		Geocode => "geocode",
		Computed => "computed",
	}
}

value_enum! {
	/// Restricts book results. `All` has no wire token and adds no parameter.
	pub enum BookSearchType {
		All => "",
		FullView => "as_brr",
	}
}

value_enum! {
	/// Number of results per page: 4 for `small`, 8 for `large`.
	pub enum ResultSetSize {
		Small => "small",
		Large => "large",
	}
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebResult {
	#[serde(rename = "GsearchResultClass", default, deserialize_with = "lenient")]
	pub gsearch_result_class: Option<GsearchResultClass>,
	#[serde(default)]
	pub title: String,
	#[serde(default)]
	pub title_no_formatting: String,
	#[serde(default)]
	pub url: String,
	#[serde(default)]
	pub unescaped_url: String,
	#[serde(default)]
	pub visible_url: Option<String>,
	#[serde(default)]
	pub cache_url: Option<String>,
	#[serde(default)]
	pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookResult {
	#[serde(rename = "GsearchResultClass", default, deserialize_with = "lenient")]
	pub gsearch_result_class: Option<GsearchResultClass>,
	#[serde(default)]
	pub title: String,
	#[serde(default)]
	pub title_no_formatting: String,
	#[serde(default)]
	pub url: String,
	#[serde(default)]
	pub unescaped_url: String,
	#[serde(default)]
	pub authors: Option<String>,
	#[serde(default)]
	pub book_id: Option<String>,
	#[serde(default)]
	pub published_year: Option<String>,
	#[serde(default)]
	pub page_count: Option<String>,
	#[serde(default)]
	pub thumbnail_html: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatentResult {
	#[serde(rename = "GsearchResultClass", default, deserialize_with = "lenient")]
	pub gsearch_result_class: Option<GsearchResultClass>,
	#[serde(default)]
	pub title: String,
	#[serde(default)]
	pub title_no_formatting: String,
	#[serde(default)]
	pub url: String,
	#[serde(default)]
	pub unescaped_url: String,
	#[serde(default)]
	pub content: String,
	#[serde(default)]
	pub application_date: Option<String>,
	#[serde(default)]
	pub patent_number: Option<String>,
	#[serde(default, deserialize_with = "lenient")]
	pub patent_status: Option<PatentStatus>,
	#[serde(default)]
	pub assignee: Option<String>,
	#[serde(default)]
	pub tb_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoResult {
	#[serde(rename = "GsearchResultClass", default, deserialize_with = "lenient")]
	pub gsearch_result_class: Option<GsearchResultClass>,
	#[serde(default)]
	pub title: String,
	#[serde(default)]
	pub title_no_formatting: String,
	#[serde(default)]
	pub url: String,
	#[serde(default)]
	pub content: String,
	#[serde(default)]
	pub published: Option<String>,
	#[serde(default)]
	pub publisher: Option<String>,
	/// Length in seconds, as sent by the API.
	#[serde(default)]
	pub duration: Option<String>,
	#[serde(default)]
	pub tb_width: Option<String>,
	#[serde(default)]
	pub tb_height: Option<String>,
	#[serde(default)]
	pub tb_url: Option<String>,
	#[serde(default)]
	pub play_url: Option<String>,
	#[serde(default)]
	pub author: Option<String>,
	#[serde(default)]
	pub view_count: Option<String>,
	#[serde(default)]
	pub rating: Option<String>,
	#[serde(default, deserialize_with = "lenient")]
	pub video_type: Option<VideoType>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsImage {
	#[serde(default)]
	pub url: String,
	#[serde(default)]
	pub tb_url: Option<String>,
	#[serde(default)]
	pub original_context_url: Option<String>,
	#[serde(default)]
	pub publisher: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsResult {
	#[serde(rename = "GsearchResultClass", default, deserialize_with = "lenient")]
	pub gsearch_result_class: Option<GsearchResultClass>,
	#[serde(default)]
	pub title: String,
	#[serde(default)]
	pub title_no_formatting: String,
	#[serde(default)]
	pub url: String,
	#[serde(default)]
	pub unescaped_url: String,
	#[serde(default)]
	pub cluster_url: Option<String>,
	#[serde(default)]
	pub content: String,
	#[serde(default)]
	pub publisher: Option<String>,
	#[serde(default)]
	pub location: Option<String>,
	#[serde(default)]
	pub published_date: Option<String>,
	#[serde(default)]
	pub language: Option<String>,
	#[serde(default)]
	pub image: Option<NewsImage>,
	#[serde(default)]
	pub related_stories: Vec<NewsResult>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageResult {
	#[serde(rename = "GsearchResultClass", default, deserialize_with = "lenient")]
	pub gsearch_result_class: Option<GsearchResultClass>,
	#[serde(default)]
	pub title: String,
	#[serde(default)]
	pub title_no_formatting: String,
	#[serde(default)]
	pub url: String,
	#[serde(default)]
	pub unescaped_url: String,
	#[serde(default)]
	pub visible_url: Option<String>,
	#[serde(default)]
	pub original_context_url: Option<String>,
	#[serde(default)]
	pub width: Option<String>,
	#[serde(default)]
	pub height: Option<String>,
	#[serde(default)]
	pub tb_width: Option<String>,
	#[serde(default)]
	pub tb_height: Option<String>,
	#[serde(default)]
	pub tb_url: Option<String>,
	#[serde(default)]
	pub content: String,
	#[serde(default)]
	pub image_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhoneNumber {
	#[serde(rename = "type", default)]
	pub kind: Option<String>,
	#[serde(default)]
	pub number: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalResult {
	#[serde(rename = "GsearchResultClass", default, deserialize_with = "lenient")]
	pub gsearch_result_class: Option<GsearchResultClass>,
	#[serde(default)]
	pub title: String,
	#[serde(default)]
	pub title_no_formatting: String,
	#[serde(default)]
	pub url: String,
	/// Latitude as sent by the API (a decimal string).
	#[serde(default)]
	pub lat: Option<String>,
	#[serde(default)]
	pub lng: Option<String>,
	#[serde(default)]
	pub street_address: Option<String>,
	#[serde(default)]
	pub city: Option<String>,
	#[serde(default)]
	pub region: Option<String>,
	#[serde(default)]
	pub country: Option<String>,
	#[serde(default)]
	pub phone_numbers: Vec<PhoneNumber>,
	#[serde(default)]
	pub address_lines: Vec<String>,
	#[serde(default)]
	pub dd_url: Option<String>,
	#[serde(default, deserialize_with = "lenient")]
	pub listing_type: Option<ListingType>,
	#[serde(rename = "viewportmode", default, deserialize_with = "lenient")]
	pub viewport_mode: Option<ViewPortMode>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogResult {
	#[serde(rename = "GsearchResultClass", default, deserialize_with = "lenient")]
	pub gsearch_result_class: Option<GsearchResultClass>,
	#[serde(default)]
	pub title: String,
	#[serde(default)]
	pub title_no_formatting: String,
	#[serde(default)]
	pub post_url: String,
	#[serde(default)]
	pub content: String,
	#[serde(default)]
	pub author: Option<String>,
	#[serde(default)]
	pub blog_url: Option<String>,
	#[serde(default)]
	pub published_date: Option<String>,
}

/// Output of the translate endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateLanguageResult {
	pub translated_text: String,
	/// Present when the source language was auto-detected.
	#[serde(default)]
	pub detected_source_language: Option<String>,
}

/// Output of the language detection endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectLanguageResult {
	pub language: String,
	#[serde(default)]
	pub is_reliable: bool,
	#[serde(default)]
	pub confidence: f64,
}
