// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use gsdk_core::param::encode_list;
use gsdk_core::{GeoLocation, MatrixMapper, Query, QueryExecutor, StatusEnvelope};

use crate::client::{MapsClient, DISTANCE_MATRIX_PATH};
use crate::schema::{DistanceMatrixResult, Language, RouteType, TravelMode, UnitSystem};

const ENVELOPE: StatusEnvelope = StatusEnvelope::new("rows", "result");

/// Travel distance and time for every origin/destination pair.
///
/// Results are flattened row-major: all destinations of the first origin,
/// then all destinations of the second, and so on.
#[derive(Debug)]
pub struct DistanceMatrixQuery {
	executor: QueryExecutor<DistanceMatrixResult>,
}

impl DistanceMatrixQuery {
	pub(crate) fn new(client: &MapsClient) -> Self {
		Self {
			executor: client.executor(DISTANCE_MATRIX_PATH, ENVELOPE, MatrixMapper::new()),
		}
	}

	/// Origins given as addresses.
	pub fn with_origins<I, S>(mut self, origins: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		self.executor.with_parameter("origins", encode_list(origins));
		self
	}

	/// Origins given as coordinates.
	pub fn with_origin_locations(mut self, origins: &[GeoLocation]) -> Self {
		self.executor.with_parameter("origins", origins);
		self
	}

	pub fn with_destinations<I, S>(mut self, destinations: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		self.executor.with_parameter("destinations", encode_list(destinations));
		self
	}

	pub fn with_destination_locations(mut self, destinations: &[GeoLocation]) -> Self {
		self.executor.with_parameter("destinations", destinations);
		self
	}

	pub fn with_waypoints<I, S>(mut self, waypoints: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		self.executor.with_parameter("waypoints", encode_list(waypoints));
		self
	}

	pub fn with_waypoint_locations(mut self, waypoints: &[GeoLocation]) -> Self {
		self.executor.with_parameter("waypoints", waypoints);
		self
	}

	pub fn with_mode(mut self, mode: TravelMode) -> Self {
		self.executor.with_parameter("mode", mode);
		self
	}

	pub fn with_avoid(mut self, avoid: RouteType) -> Self {
		self.executor.with_parameter("avoid", avoid);
		self
	}

	pub fn with_units(mut self, units: UnitSystem) -> Self {
		self.executor.with_parameter("units", units);
		self
	}

	pub fn with_language(mut self, language: Language) -> Self {
		self.executor.with_parameter("language", language);
		self
	}

	pub fn with_alternatives(mut self, alternatives: bool) -> Self {
		self.executor.with_parameter("alternatives", alternatives);
		self
	}

	/// Whether the request comes from a device with a location sensor.
	pub fn with_sensor(mut self, sensor: bool) -> Self {
		self.executor.with_parameter("sensor", sensor);
		self
	}
}

impl Query for DistanceMatrixQuery {
	type Record = DistanceMatrixResult;

	fn executor(&self) -> &QueryExecutor<DistanceMatrixResult> {
		&self.executor
	}

	fn executor_mut(&mut self) -> &mut QueryExecutor<DistanceMatrixResult> {
		&mut self.executor
	}
}
