// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::sync::{Arc, Mutex};

use gsdk_common_config::GsdkConfig;
use gsdk_common_http::{Headers, ResponseBody, Transport, TransportError};
use gsdk_search::{
	BookSearchType, GsearchResultClass, PagedList, Query, SearchClient, VideoType, WebResult,
};

struct CannedTransport {
	body: &'static str,
	requests: Mutex<Vec<(String, Headers)>>,
}

impl Transport for CannedTransport {
	fn fetch(&self, url: &str, headers: &Headers) -> Result<ResponseBody, TransportError> {
		self.requests.lock().unwrap().push((url.to_string(), headers.clone()));
		Ok(ResponseBody::from_bytes(self.body))
	}
}

fn client_with(config: GsdkConfig, body: &'static str) -> (SearchClient, Arc<CannedTransport>) {
	let transport = Arc::new(CannedTransport {
		body,
		requests: Mutex::new(Vec::new()),
	});
	(SearchClient::with_transport(config, transport.clone()), transport)
}

fn client(body: &'static str) -> (SearchClient, Arc<CannedTransport>) {
	client_with(GsdkConfig::with_api_key("search-key"), body)
}

const WEB_PAGE: &str = r#"{
	"responseStatus": 200,
	"responseDetails": null,
	"responseData": {
		"results": [
			{"GsearchResultClass": "GwebSearch", "title": "first", "titleNoFormatting": "first", "url": "https://a.test/", "unescapedUrl": "https://a.test/", "content": "a"},
			{"GsearchResultClass": "GwebSearch", "title": "second", "titleNoFormatting": "second", "url": "https://b.test/", "unescapedUrl": "https://b.test/", "content": "b"}
		],
		"cursor": {
			"estimatedResultCount": "2310000",
			"currentPageIndex": 0,
			"moreResultsUrl": "http://www.google.com/search?q=rust",
			"pages": [{"start": "0", "label": 1}, {"start": "4", "label": 2}]
		}
	}
}"#;

#[test]
fn results_keep_order_and_cursor() {
	let (client, transport) = client(WEB_PAGE);
	let page = client.web_search().with_query("rust").list().unwrap();

	let titles: Vec<&str> = page.iter().map(|r| r.title.as_str()).collect();
	assert_eq!(titles, vec!["first", "second"]);
	assert_eq!(page[0].gsearch_result_class, Some(GsearchResultClass::GwebSearch));

	let cursor = page.cursor().unwrap();
	assert_eq!(cursor.estimated_result_count.as_deref(), Some("2310000"));
	assert_eq!(cursor.next_start(), Some("4"));
	assert!(page.has_more());

	let requests = transport.requests.lock().unwrap();
	assert_eq!(
		requests[0].0,
		"https://ajax.googleapis.com/ajax/services/search/web?key=search-key&v=1.0&q=rust"
	);
}

#[test]
fn non_200_status_carries_details() {
	let (client, _) = client(
		r#"{"responseStatus": 403, "responseDetails": "Suspected Terms of Service Abuse", "responseData": null}"#,
	);
	let err = client.web_search().with_query("rust").list().unwrap_err();
	assert!(err.is_api_status());
	assert_eq!(err.status(), Some("403"));
	assert_eq!(err.details(), Some("Suspected Terms of Service Abuse"));
}

#[test]
fn missing_response_status_is_malformed() {
	let (client, _) = client(r#"{"responseData": {"results": []}}"#);
	assert!(client.blog_search().list().unwrap_err().is_malformed());
}

#[test]
fn referrer_is_sent_as_header() {
	let config = GsdkConfig {
		referrer: Some("https://app.example.test".to_string()),
		..GsdkConfig::default()
	};
	let (client, transport) = client_with(config, WEB_PAGE);
	client.web_search().with_query("rust").list().unwrap();

	let requests = transport.requests.lock().unwrap();
	let (url, headers) = &requests[0];
	assert_eq!(headers.get("Referer").map(String::as_str), Some("https://app.example.test"));
	assert!(!url.contains("key="));
}

#[test]
fn handlers_see_each_page() {
	let (client, _) = client(WEB_PAGE);
	let mut query = client.web_search().with_query("rust");
	let pages = Arc::new(Mutex::new(Vec::new()));
	let sink = pages.clone();
	query.add_response_handler(move |page: &PagedList<WebResult>| {
		sink.lock().unwrap().push(page.len());
	});

	query.list().unwrap();
	query.list().unwrap();
	assert_eq!(*pages.lock().unwrap(), vec![2, 2]);
}

#[test]
fn translate_single_result() {
	let (client, transport) = client(
		r#"{"responseStatus": 200, "responseDetails": null, "responseData": {"translatedText": "bonjour", "detectedSourceLanguage": "en"}}"#,
	);
	let result = client
		.translate()
		.with_query("hello")
		.with_language_pair("", "fr")
		.single_result()
		.unwrap()
		.unwrap();
	assert_eq!(result.translated_text, "bonjour");
	assert_eq!(result.detected_source_language.as_deref(), Some("en"));

	let requests = transport.requests.lock().unwrap();
	assert!(requests[0].0.contains("langpair=%7Cfr"));
}

#[test]
fn detect_language_single_result() {
	let (client, _) = client(
		r#"{"responseStatus": 200, "responseData": {"language": "de", "isReliable": true, "confidence": 0.87}}"#,
	);
	let result = client.detect_language().with_query("Guten Tag").single_result().unwrap().unwrap();
	assert_eq!(result.language, "de");
	assert!(result.is_reliable);
}

#[test]
fn video_type_decoded() {
	let (client, _) = client(
		r#"{"responseStatus": 200, "responseData": {"results": [
			{"GsearchResultClass": "GvideoSearch", "title": "t", "videoType": "YouTube", "duration": "212"},
			{"GsearchResultClass": "GvideoSearch", "title": "u", "videoType": "Vimeo"}
		]}}"#,
	);
	let videos = client.video_search().list().unwrap();
	assert_eq!(videos[0].video_type, Some(VideoType::YouTube));
	assert_eq!(videos[1].video_type, None);
	assert!(videos.cursor().is_none());
}

#[test]
fn full_view_books_request() {
	let (client, transport) =
		client(r#"{"responseStatus": 200, "responseData": {"results": [{"title": "Dune", "bookId": "ISBN0441013597"}]}}"#);
	let books = client
		.book_search()
		.with_query("dune")
		.with_search_type(BookSearchType::FullView)
		.list()
		.unwrap();
	assert_eq!(books[0].book_id.as_deref(), Some("ISBN0441013597"));

	let requests = transport.requests.lock().unwrap();
	assert!(requests[0].0.ends_with("&q=dune&as_brr=1"));
}
