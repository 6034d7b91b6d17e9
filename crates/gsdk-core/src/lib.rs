// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Query execution pipeline shared by the Google API SDKs.
//!
//! A query is a [`QueryExecutor`] parameterized by an endpoint template, an
//! [`EnvelopeParser`] strategy and a [`ResultMapper`]. Per-endpoint façades
//! only add typed `with_*` methods on top.
//!
//! ```ignore
//! let mut query = QueryExecutor::new(
//!     "https://maps.googleapis.com/maps/api/elevation/json",
//!     default_gateway(&config)?,
//!     StatusEnvelope::new("results", "result"),
//!     SerdeMapper::<ElevationResult>::new(),
//! )
//! .with_api_key(&config);
//! query.with_parameter("locations", vec![GeoLocation::new(39.73, -104.98)]);
//! let samples = query.list()?;
//! ```

pub mod envelope;
pub mod error;
pub mod facade;
pub mod handler;
pub mod mapper;
pub mod paged;
pub mod param;
pub mod query;
pub mod url;
pub mod value_enum;

pub use envelope::{EnvelopeParser, ListPayload, ResponseDataEnvelope, StatusEnvelope};
pub use error::{QueryError, Result};
pub use facade::Query;
pub use handler::ResponseHandler;
pub use mapper::{MatrixCell, MatrixMapper, ResultMapper, SerdeMapper};
pub use paged::{Cursor, CursorPage, PagedList};
pub use param::{GeoLocation, ParamValue};
pub use query::{default_gateway, QueryExecutor, KEY_PARAM};
pub use url::UrlBuilder;
pub use value_enum::{UnknownToken, ValueEnum};

pub use gsdk_common_config::GsdkConfig;
pub use gsdk_common_http::{ApiGateway, SharedTransport, Transport, TransportError};

#[doc(hidden)]
pub mod __private {
	pub use serde;
}
