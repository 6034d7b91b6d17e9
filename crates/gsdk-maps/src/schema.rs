// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Maps API value enums and result records.

use gsdk_core::value_enum::lenient;
use gsdk_core::{value_enum, MatrixCell};
use serde::{Deserialize, Serialize};

pub use gsdk_core::GeoLocation;

value_enum! {
	/// Means of transport for route calculations.
	pub enum TravelMode {
		Driving => "driving",
		Walking => "walking",
		Bicycling => "bicycling",
	}
}

value_enum! {
	/// Route features to avoid.
	pub enum RouteType {
		Tolls => "tolls",
		Highways => "highways",
	}
}

value_enum! {
	/// Unit system for distance text.
	pub enum UnitSystem {
		Metric => "metric",
		Imperial => "imperial",
	}
}

value_enum! {
	/// Per-element status inside a distance matrix row.
	pub enum ElementStatus {
		Ok => "OK",
		NotFound => "NOT_FOUND",
		ZeroResults => "ZERO_RESULTS",
	}
}

value_enum! {
	/// Languages supported for localized results.
	pub enum Language {
		Arabic => "ar",
		Basque => "eu",
		Bulgarian => "bg",
		Bengali => "bn",
		Catalan => "ca",
		Czech => "cs",
		Danish => "da",
		German => "de",
		Greek => "el",
		English => "en",
		EnglishAustralian => "en-AU",
		EnglishGreatBritain => "en-GB",
		Spanish => "es",
		Farsi => "fa",
		Finnish => "fi",
		Filipino => "fil",
		French => "fr",
		Galician => "gl",
		Gujarati => "gu",
		Hindi => "hi",
		Croatian => "hr",
		Hungarian => "hu",
		Indonesian => "id",
		Italian => "it",
		Hebrew => "iw",
		Japanese => "ja",
		Kannada => "kn",
		Korean => "ko",
		Lithuanian => "lt",
		Latvian => "lv",
		Malayalam => "ml",
		Marathi => "mr",
		Dutch => "nl",
		Norwegian => "no",
		Polish => "pl",
		Portuguese => "pt",
		PortugueseBrazil => "pt-BR",
		PortuguesePortugal => "pt-PT",
		Romanian => "ro",
		Russian => "ru",
		Slovak => "sk",
		Slovenian => "sl",
		Serbian => "sr",
		Swedish => "sv",
		Tagalog => "tl",
		Tamil => "ta",
		Telugu => "te",
		Thai => "th",
		Turkish => "tr",
		Ukrainian => "uk",
		Vietnamese => "vi",
		ChineseSimplified => "zh-CN",
		ChineseTraditional => "zh-TW",
	}
}

/// A measured quantity with its localized rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextValue {
	pub text: String,
	pub value: f64,
}

/// One origin/destination cell of a distance matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceMatrixResult {
	#[serde(default, deserialize_with = "lenient")]
	pub status: Option<ElementStatus>,
	#[serde(default)]
	pub distance: Option<TextValue>,
	#[serde(default)]
	pub duration: Option<TextValue>,
	/// Filled from the envelope's `origin_addresses`.
	#[serde(default)]
	pub origin_address: String,
	/// Filled from the envelope's `destination_addresses`.
	#[serde(default)]
	pub destination_address: String,
}

impl MatrixCell for DistanceMatrixResult {
	fn set_addresses(&mut self, origin: String, destination: String) {
		self.origin_address = origin;
		self.destination_address = destination;
	}
}

/// Elevation sample at a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElevationResult {
	pub elevation: f64,
	pub location: GeoLocation,
	#[serde(default)]
	pub resolution: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
	pub location: GeoLocation,
}

/// A place from a nearby search or a details lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacesResult {
	pub name: String,
	#[serde(default)]
	pub place_id: Option<String>,
	#[serde(default)]
	pub reference: Option<String>,
	#[serde(default)]
	pub vicinity: Option<String>,
	#[serde(default)]
	pub formatted_address: Option<String>,
	#[serde(default)]
	pub formatted_phone_number: Option<String>,
	#[serde(default)]
	pub website: Option<String>,
	#[serde(default)]
	pub types: Vec<String>,
	#[serde(default)]
	pub geometry: Option<Geometry>,
	#[serde(default)]
	pub icon: Option<String>,
	#[serde(default)]
	pub rating: Option<f64>,
}
