// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Canonical string forms for query parameter values.
//!
//! Multi-valued parameters are pipe-delimited, in input order, because that is
//! the separator the services split on.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value_enum::ValueEnum;

/// Separator for list-valued parameters.
pub const LIST_SEPARATOR: &str = "|";

/// A latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
	pub lat: f64,
	pub lng: f64,
}

impl GeoLocation {
	pub fn new(lat: f64, lng: f64) -> Self {
		Self { lat, lng }
	}
}

/// Renders as `<lat>,<lng>`.
impl fmt::Display for GeoLocation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{},{}", self.lat, self.lng)
	}
}

/// A typed parameter value prior to encoding.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
	Text(String),
	Flag(bool),
	List(Vec<String>),
	Locations(Vec<GeoLocation>),
}

impl ParamValue {
	/// The canonical wire form of this value.
	pub fn encode(&self) -> String {
		match self {
			ParamValue::Text(text) => text.clone(),
			ParamValue::Flag(flag) => encode_bool(*flag),
			ParamValue::List(items) => encode_list(items),
			ParamValue::Locations(locations) => encode_locations(locations),
		}
	}

	/// Wraps the token of a value-enum variant.
	pub fn token<E: ValueEnum>(value: E) -> Self {
		ParamValue::Text(value.token().to_string())
	}
}

impl From<&str> for ParamValue {
	fn from(value: &str) -> Self {
		ParamValue::Text(value.to_string())
	}
}

impl From<String> for ParamValue {
	fn from(value: String) -> Self {
		ParamValue::Text(value)
	}
}

impl From<bool> for ParamValue {
	fn from(value: bool) -> Self {
		ParamValue::Flag(value)
	}
}

impl From<GeoLocation> for ParamValue {
	fn from(value: GeoLocation) -> Self {
		ParamValue::Text(value.to_string())
	}
}

impl From<Vec<String>> for ParamValue {
	fn from(value: Vec<String>) -> Self {
		ParamValue::List(value)
	}
}

impl From<&[&str]> for ParamValue {
	fn from(value: &[&str]) -> Self {
		ParamValue::List(value.iter().map(|s| s.to_string()).collect())
	}
}

impl From<Vec<GeoLocation>> for ParamValue {
	fn from(value: Vec<GeoLocation>) -> Self {
		ParamValue::Locations(value)
	}
}

impl From<&[GeoLocation]> for ParamValue {
	fn from(value: &[GeoLocation]) -> Self {
		ParamValue::Locations(value.to_vec())
	}
}

macro_rules! numeric_param {
	($($ty:ty),+) => {
		$(impl From<$ty> for ParamValue {
			fn from(value: $ty) -> Self {
				ParamValue::Text(value.to_string())
			}
		})+
	};
}

numeric_param!(u32, u64, i32, i64, usize, f64);

pub fn encode_bool(value: bool) -> String {
	if value { "true" } else { "false" }.to_string()
}

pub fn encode_enum<E: ValueEnum>(value: E) -> String {
	value.token().to_string()
}

/// Joins values with `|`. An empty input yields an empty string.
pub fn encode_list<I, S>(values: I) -> String
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	let mut out = String::new();
	for (i, value) in values.into_iter().enumerate() {
		if i > 0 {
			out.push_str(LIST_SEPARATOR);
		}
		out.push_str(value.as_ref());
	}
	out
}

pub fn encode_location(location: &GeoLocation) -> String {
	location.to_string()
}

pub fn encode_locations(locations: &[GeoLocation]) -> String {
	encode_list(locations.iter().map(encode_location))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_encode_list() {
		assert_eq!(encode_list(Vec::<String>::new()), "");
		assert_eq!(encode_list(["a"]), "a");
		assert_eq!(encode_list(["a", "b", "c"]), "a|b|c");
	}

	#[test]
	fn test_encode_bool_is_lowercase() {
		assert_eq!(encode_bool(true), "true");
		assert_eq!(encode_bool(false), "false");
		assert_eq!(ParamValue::from(true).encode(), "true");
	}

	#[test]
	fn test_encode_locations() {
		let points = [GeoLocation::new(40.714, -73.998), GeoLocation::new(-33.5, 151.25)];
		assert_eq!(encode_location(&points[0]), "40.714,-73.998");
		assert_eq!(encode_locations(&points), "40.714,-73.998|-33.5,151.25");
		assert_eq!(encode_locations(&[]), "");
	}

	#[test]
	fn test_param_value_conversions() {
		assert_eq!(ParamValue::from("text").encode(), "text");
		assert_eq!(ParamValue::from(8u32).encode(), "8");
		assert_eq!(ParamValue::from(1.5f64).encode(), "1.5");
		assert_eq!(ParamValue::from(&["x", "y"][..]).encode(), "x|y");
		assert_eq!(
			ParamValue::from(vec![GeoLocation::new(1.0, 2.0)]).encode(),
			"1,2"
		);
		assert_eq!(ParamValue::from(GeoLocation::new(1.25, 2.0)).encode(), "1.25,2");
	}

	#[test]
	fn test_geo_location_deserializes_from_maps_shape() {
		let location: GeoLocation = serde_json::from_str(r#"{"lat":39.7391536,"lng":-104.9847034}"#).unwrap();
		assert_eq!(location, GeoLocation::new(39.7391536, -104.9847034));
	}
}
