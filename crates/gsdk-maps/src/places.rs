// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use gsdk_core::param::encode_list;
use gsdk_core::{GeoLocation, Query, QueryExecutor, SerdeMapper, StatusEnvelope};

use crate::client::{MapsClient, PLACES_PATH, PLACE_DETAILS_PATH};
use crate::schema::{Language, PlacesResult};

const ENVELOPE: StatusEnvelope = StatusEnvelope::new("results", "result");

/// Places near a location. Pages beyond the first are reachable through the
/// returned list's `next_page_token`.
#[derive(Debug)]
pub struct PlacesQuery {
	executor: QueryExecutor<PlacesResult>,
}

impl PlacesQuery {
	pub(crate) fn new(client: &MapsClient) -> Self {
		Self {
			executor: client.executor(PLACES_PATH, ENVELOPE, SerdeMapper::new()),
		}
	}

	pub fn with_location(mut self, location: GeoLocation) -> Self {
		self.executor.with_parameter("location", location);
		self
	}

	/// Search radius in meters.
	pub fn with_radius(mut self, radius: f64) -> Self {
		self.executor.with_parameter("radius", radius);
		self
	}

	pub fn with_sensor(mut self, sensor: bool) -> Self {
		self.executor.with_parameter("sensor", sensor);
		self
	}

	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		self.executor.with_parameter("name", name.into());
		self
	}

	pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
		self.executor.with_parameter("keyword", keyword.into());
		self
	}

	pub fn with_types<I, S>(mut self, types: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		self.executor.with_parameter("types", encode_list(types));
		self
	}

	pub fn with_language(mut self, language: Language) -> Self {
		self.executor.with_parameter("language", language);
		self
	}

	/// Premier client identifier.
	pub fn with_client(mut self, client: impl Into<String>) -> Self {
		self.executor.with_parameter("client", client.into());
		self
	}

	/// Continues a previous search; the token comes from
	/// [`PagedList::next_page_token`](gsdk_core::PagedList::next_page_token).
	pub fn with_page_token(mut self, token: impl Into<String>) -> Self {
		self.executor.with_parameter("pagetoken", token.into());
		self
	}
}

impl Query for PlacesQuery {
	type Record = PlacesResult;

	fn executor(&self) -> &QueryExecutor<PlacesResult> {
		&self.executor
	}

	fn executor_mut(&mut self) -> &mut QueryExecutor<PlacesResult> {
		&mut self.executor
	}
}

/// Full details for one place, fetched with
/// [`single_result`](Query::single_result).
#[derive(Debug)]
pub struct PlaceDetailsQuery {
	executor: QueryExecutor<PlacesResult>,
}

impl PlaceDetailsQuery {
	pub(crate) fn new(client: &MapsClient) -> Self {
		Self {
			executor: client.executor(PLACE_DETAILS_PATH, ENVELOPE, SerdeMapper::new()),
		}
	}

	pub fn with_place_id(mut self, place_id: impl Into<String>) -> Self {
		self.executor.with_parameter("placeid", place_id.into());
		self
	}

	pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
		self.executor.with_parameter("reference", reference.into());
		self
	}

	pub fn with_language(mut self, language: Language) -> Self {
		self.executor.with_parameter("language", language);
		self
	}

	pub fn with_sensor(mut self, sensor: bool) -> Self {
		self.executor.with_parameter("sensor", sensor);
		self
	}
}

impl Query for PlaceDetailsQuery {
	type Record = PlacesResult;

	fn executor(&self) -> &QueryExecutor<PlacesResult> {
		&self.executor
	}

	fn executor_mut(&mut self) -> &mut QueryExecutor<PlacesResult> {
		&mut self.executor
	}
}
