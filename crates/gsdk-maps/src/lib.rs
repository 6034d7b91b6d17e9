// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Fluent client for the Google Maps web services.
//!
//! ```ignore
//! use gsdk_maps::{MapsClient, Query, TravelMode};
//!
//! let client = MapsClient::new(gsdk_common_config::load_config(None)?)?;
//! let matrix = client
//!     .distance_matrix()
//!     .with_origins(["Vancouver BC"])
//!     .with_destinations(["San Francisco"])
//!     .with_mode(TravelMode::Driving)
//!     .list()?;
//! ```

pub mod client;
pub mod distance_matrix;
pub mod elevation;
pub mod places;
pub mod schema;

pub use client::MapsClient;
pub use distance_matrix::DistanceMatrixQuery;
pub use elevation::ElevationQuery;
pub use places::{PlaceDetailsQuery, PlacesQuery};
pub use schema::{
	DistanceMatrixResult, ElementStatus, ElevationResult, GeoLocation, Geometry, Language,
	PlacesResult, RouteType, TextValue, TravelMode, UnitSystem,
};

pub use gsdk_core::{PagedList, Query, QueryError, Result};
