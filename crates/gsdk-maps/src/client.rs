// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Entry point that hands out configured Maps queries.

use gsdk_common_config::GsdkConfig;
use gsdk_common_http::SharedTransport;
use gsdk_core::{
	default_gateway, ApiGateway, EnvelopeParser, QueryExecutor, ResultMapper, Result,
};
use tracing::{debug, info};

use crate::distance_matrix::DistanceMatrixQuery;
use crate::elevation::ElevationQuery;
use crate::places::{PlaceDetailsQuery, PlacesQuery};

pub(crate) const DISTANCE_MATRIX_PATH: &str = "distancematrix/json";
pub(crate) const ELEVATION_PATH: &str = "elevation/json";
pub(crate) const PLACES_PATH: &str = "place/nearbysearch/json";
pub(crate) const PLACE_DETAILS_PATH: &str = "place/details/json";

/// Factory for Maps queries sharing one configuration and HTTP gateway.
#[derive(Debug, Clone)]
pub struct MapsClient {
	config: GsdkConfig,
	gateway: ApiGateway,
}

impl MapsClient {
	/// Creates a client over the blocking `reqwest` transport.
	pub fn new(config: GsdkConfig) -> Result<Self> {
		let gateway = default_gateway(&config)?;
		info!(
			base_url = %config.maps_base_url,
			has_api_key = config.has_api_key(),
			"Maps client initialized"
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

	pub fn distance_matrix(&self) -> DistanceMatrixQuery {
		DistanceMatrixQuery::new(self)
	}

	pub fn elevation(&self) -> ElevationQuery {
		ElevationQuery::new(self)
	}

	pub fn places(&self) -> PlacesQuery {
		PlacesQuery::new(self)
	}

	pub fn place_details(&self) -> PlaceDetailsQuery {
		PlaceDetailsQuery::new(self)
	}

	pub(crate) fn endpoint(&self, path: &str) -> String {
		format!("{}/{}", self.config.maps_base_url, path)
	}

	pub(crate) fn executor<T>(
		&self,
		path: &str,
		envelope: impl EnvelopeParser + 'static,
		mapper: impl ResultMapper<T> + 'static,
	) -> QueryExecutor<T> {
		let endpoint = self.endpoint(path);
		debug!(endpoint = %endpoint, "Creating Maps query");
		QueryExecutor::new(endpoint, self.gateway.clone(), envelope, mapper)
			.with_api_key(&self.config)
	}
}
