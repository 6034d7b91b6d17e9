// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::sync::{Arc, Mutex};

use gsdk_common_config::GsdkConfig;
use gsdk_common_http::{Headers, ResponseBody, Transport, TransportError};
use gsdk_maps::{
	DistanceMatrixResult, ElementStatus, GeoLocation, MapsClient, PagedList, PlacesResult, Query,
};

struct CannedTransport {
	body: &'static str,
	urls: Mutex<Vec<String>>,
}

impl Transport for CannedTransport {
	fn fetch(&self, url: &str, _: &Headers) -> Result<ResponseBody, TransportError> {
		self.urls.lock().unwrap().push(url.to_string());
		Ok(ResponseBody::from_bytes(self.body))
	}
}

fn client(body: &'static str) -> (MapsClient, Arc<CannedTransport>) {
	let transport = Arc::new(CannedTransport {
		body,
		urls: Mutex::new(Vec::new()),
	});
	let client = MapsClient::with_transport(GsdkConfig::with_api_key("test-key"), transport.clone());
	(client, transport)
}

#[test]
fn distance_matrix_joins_addresses() {
	let (client, transport) = client(
		r#"{
			"status": "OK",
			"origin_addresses": ["Vancouver, BC, Canada"],
			"destination_addresses": ["San Francisco, CA, USA"],
			"rows": [{"elements": [{
				"status": "OK",
				"distance": {"text": "1,528 km", "value": 1528000},
				"duration": {"text": "15 hours", "value": 54000}
			}]}]
		}"#,
	);

	let results = client
		.distance_matrix()
		.with_origins(["Vancouver BC"])
		.with_destinations(["San Francisco"])
		.list()
		.unwrap();

	assert_eq!(results.len(), 1);
	let cell = &results[0];
	assert_eq!(cell.origin_address, "Vancouver, BC, Canada");
	assert_eq!(cell.destination_address, "San Francisco, CA, USA");
	assert_eq!(cell.status, Some(ElementStatus::Ok));
	assert_eq!(cell.distance.as_ref().unwrap().value, 1528000.0);

	let urls = transport.urls.lock().unwrap();
	let url = &urls[0];
	assert!(url.starts_with("https://maps.googleapis.com/maps/api/distancematrix/json?"));
	assert!(url.contains("key=test-key"));
	assert!(url.contains("origins=Vancouver+BC"));
}

#[test]
fn distance_matrix_is_row_major() {
	let (client, _) = client(
		r#"{
			"status": "OK",
			"origin_addresses": ["A", "B"],
			"destination_addresses": ["X", "Y"],
			"rows": [
				{"elements": [{"status": "OK"}, {"status": "NOT_FOUND"}]},
				{"elements": [{"status": "ZERO_RESULTS"}, {"status": "OK"}]}
			]
		}"#,
	);

	let results = client.distance_matrix().list().unwrap();
	let pairs: Vec<(&str, &str)> = results
		.iter()
		.map(|r: &DistanceMatrixResult| (r.origin_address.as_str(), r.destination_address.as_str()))
		.collect();
	assert_eq!(pairs, vec![("A", "X"), ("A", "Y"), ("B", "X"), ("B", "Y")]);
	assert_eq!(results[1].status, Some(ElementStatus::NotFound));
}

#[test]
fn distance_matrix_address_mismatch_is_api_status() {
	let (client, _) = client(
		r#"{
			"status": "OK",
			"origin_addresses": ["A", "B"],
			"destination_addresses": ["X"],
			"rows": [
				{"elements": [{"status": "OK"}]},
				{"elements": [{"status": "OK"}]},
				{"elements": [{"status": "OK"}]}
			]
		}"#,
	);

	let err = client.distance_matrix().list().unwrap_err();
	assert!(err.is_api_status());
	assert_eq!(err.status(), Some("OK"));
}

#[test]
fn zero_results_is_empty_list() {
	let (client, _) = client(r#"{"status": "ZERO_RESULTS", "results": []}"#);
	let results = client
		.elevation()
		.with_locations(&[GeoLocation::new(0.0, 0.0)])
		.list()
		.unwrap();
	assert!(results.is_empty());
}

#[test]
fn error_status_carries_error_message() {
	let (client, _) = client(
		r#"{"status": "REQUEST_DENIED", "error_message": "The provided API key is invalid.", "results": []}"#,
	);
	let err = client.places().with_location(GeoLocation::new(1.0, 2.0)).list().unwrap_err();
	assert!(err.is_api_status());
	assert_eq!(err.status(), Some("REQUEST_DENIED"));
	assert_eq!(err.details(), Some("The provided API key is invalid."));
}

#[test]
fn invalid_request_without_message() {
	let (client, _) = client(r#"{"status": "INVALID_REQUEST"}"#);
	let err = client.elevation().list().unwrap_err();
	assert_eq!(err.status(), Some("INVALID_REQUEST"));
	assert_eq!(err.details(), None);
}

#[test]
fn missing_status_is_malformed() {
	let (client, _) = client(r#"{"results": []}"#);
	let err = client.elevation().list().unwrap_err();
	assert!(err.is_malformed());
}

#[test]
fn elevation_results_keep_order() {
	let (client, transport) = client(
		r#"{
			"status": "OK",
			"results": [
				{"elevation": 1608.6, "location": {"lat": 39.73, "lng": -104.98}, "resolution": 4.77},
				{"elevation": -50.8, "location": {"lat": 36.46, "lng": -116.87}, "resolution": 19.09}
			]
		}"#,
	);

	let results = client
		.elevation()
		.with_locations(&[GeoLocation::new(39.73, -104.98), GeoLocation::new(36.46, -116.87)])
		.list()
		.unwrap();
	assert_eq!(results.len(), 2);
	assert_eq!(results[0].elevation, 1608.6);
	assert_eq!(results[1].location, GeoLocation::new(36.46, -116.87));

	let urls = transport.urls.lock().unwrap();
	let url = &urls[0];
	assert!(url.contains("locations=39.73%2C-104.98%7C36.46%2C-116.87"));
}

#[test]
fn places_exposes_next_page_token() {
	let (client, _) = client(
		r#"{
			"status": "OK",
			"next_page_token": "CpQCAgEAAF",
			"results": [{"name": "Cafe", "types": ["cafe"]}]
		}"#,
	);

	let mut query = client.places().with_location(GeoLocation::new(-33.86, 151.19)).with_radius(500.0);
	let seen = Arc::new(Mutex::new(0usize));
	let counter = seen.clone();
	query.add_response_handler(move |page: &PagedList<PlacesResult>| *counter.lock().unwrap() += page.len());

	let page = query.list().unwrap();
	assert_eq!(page.next_page_token(), Some("CpQCAgEAAF"));
	assert!(page.has_more());
	assert_eq!(page[0].name, "Cafe");
	assert_eq!(*seen.lock().unwrap(), 1);
}

#[test]
fn place_details_single_result() {
	let (client, _) = client(
		r#"{"status": "OK", "result": {"name": "Google Sydney", "website": "https://www.google.com.au/"}}"#,
	);
	let place = client.place_details().with_place_id("ChIJN1t").single_result().unwrap().unwrap();
	assert_eq!(place.name, "Google Sydney");
	assert_eq!(place.website.as_deref(), Some("https://www.google.com.au/"));
}

#[test]
fn place_details_zero_results_is_none() {
	let (client, _) = client(r#"{"status": "ZERO_RESULTS"}"#);
	assert!(client.place_details().single_result().unwrap().is_none());
}
