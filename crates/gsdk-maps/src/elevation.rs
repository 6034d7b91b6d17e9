// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use gsdk_core::{GeoLocation, Query, QueryExecutor, SerdeMapper, StatusEnvelope};

use crate::client::{MapsClient, ELEVATION_PATH};
use crate::schema::ElevationResult;

const ENVELOPE: StatusEnvelope = StatusEnvelope::new("results", "result");

/// Elevation at discrete locations or sampled along a path.
#[derive(Debug)]
pub struct ElevationQuery {
	executor: QueryExecutor<ElevationResult>,
}

impl ElevationQuery {
	pub(crate) fn new(client: &MapsClient) -> Self {
		Self {
			executor: client.executor(ELEVATION_PATH, ENVELOPE, SerdeMapper::new()),
		}
	}

	pub fn with_locations(mut self, locations: &[GeoLocation]) -> Self {
		self.executor.with_parameter("locations", locations);
		self
	}

	/// Path to sample; combine with [`with_samples`](Self::with_samples).
	pub fn with_path(mut self, path: &[GeoLocation]) -> Self {
		self.executor.with_parameter("path", path);
		self
	}

	pub fn with_samples(mut self, samples: u32) -> Self {
		self.executor.with_parameter("samples", samples);
		self
	}

	pub fn with_sensor(mut self, sensor: bool) -> Self {
		self.executor.with_parameter("sensor", sensor);
		self
	}
}

impl Query for ElevationQuery {
	type Record = ElevationResult;

	fn executor(&self) -> &QueryExecutor<ElevationResult> {
		&self.executor
	}

	fn executor_mut(&mut self) -> &mut QueryExecutor<ElevationResult> {
		&mut self.executor
	}
}
