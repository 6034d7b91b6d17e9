// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Mapping of payload elements into typed result records.

use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::error;

use crate::envelope::{STATUS_OK, STATUS_ZERO_RESULTS};
use crate::error::{QueryError, Result};

/// Turns envelope payload elements into records.
pub trait ResultMapper<T>: Send + Sync {
	/// Maps list items; `context` holds the sibling envelope fields.
	fn map_list(&self, items: Vec<Value>, context: &Map<String, Value>) -> Result<Vec<T>>;

	fn map_single(&self, value: Value) -> Result<T>;
}

fn from_value<T: DeserializeOwned>(value: Value) -> Result<T> {
	serde_json::from_value(value).map_err(|e| {
		error!(error = %e, "Failed to map result");
		QueryError::malformed(format!("cannot map result: {e}"))
	})
}

/// Maps each element independently through its serde impl.
pub struct SerdeMapper<T>(PhantomData<fn() -> T>);

impl<T> SerdeMapper<T> {
	pub fn new() -> Self {
		Self(PhantomData)
	}
}

impl<T> Default for SerdeMapper<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T> fmt::Debug for SerdeMapper<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("SerdeMapper")
	}
}

impl<T: DeserializeOwned> ResultMapper<T> for SerdeMapper<T> {
	fn map_list(&self, items: Vec<Value>, _context: &Map<String, Value>) -> Result<Vec<T>> {
		items.into_iter().map(from_value).collect()
	}

	fn map_single(&self, value: Value) -> Result<T> {
		from_value(value)
	}
}

/// A record that sits at one origin/destination pair of a matrix response.
pub trait MatrixCell {
	fn set_addresses(&mut self, origin: String, destination: String);
}

/// Flattens `rows[i].elements[j]` into records joined with
/// `origin_addresses[i]` and `destination_addresses[j]`.
///
/// Any disagreement between the address arrays and the row/column counts is
/// reported as an API status failure.
pub struct MatrixMapper<T> {
	origins_field: &'static str,
	destinations_field: &'static str,
	_record: PhantomData<fn() -> T>,
}

impl<T> MatrixMapper<T> {
	pub fn new() -> Self {
		Self {
			origins_field: "origin_addresses",
			destinations_field: "destination_addresses",
			_record: PhantomData,
		}
	}

	fn addresses(&self, context: &Map<String, Value>, field: &str) -> Result<Vec<String>> {
		match context.get(field) {
			None | Some(Value::Null) => Ok(Vec::new()),
			Some(Value::Array(values)) => values
				.iter()
				.map(|v| {
					v.as_str().map(str::to_string).ok_or_else(|| {
						QueryError::malformed(format!("`{field}` must contain only strings"))
					})
				})
				.collect(),
			Some(_) => Err(QueryError::malformed(format!("`{field}` must be an array"))),
		}
	}
}

impl<T> Default for MatrixMapper<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T> fmt::Debug for MatrixMapper<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("MatrixMapper")
			.field("origins_field", &self.origins_field)
			.field("destinations_field", &self.destinations_field)
			.finish()
	}
}

fn mismatch(context: &Map<String, Value>, details: String) -> QueryError {
	let status = context
		.get("status")
		.and_then(Value::as_str)
		.unwrap_or(STATUS_OK);
	error!(status = %status, details = %details, "Inconsistent matrix payload");
	QueryError::api_status(status, Some(details))
}

impl<T: DeserializeOwned + MatrixCell> ResultMapper<T> for MatrixMapper<T> {
	fn map_list(&self, rows: Vec<Value>, context: &Map<String, Value>) -> Result<Vec<T>> {
		// Addresses are still echoed back when nothing matched.
		if context.get("status").and_then(Value::as_str) == Some(STATUS_ZERO_RESULTS) {
			return Ok(Vec::new());
		}

		let origins = self.addresses(context, self.origins_field)?;
		let destinations = self.addresses(context, self.destinations_field)?;

		if rows.len() != origins.len() {
			return Err(mismatch(
				context,
				format!("{} origin addresses for {} rows", origins.len(), rows.len()),
			));
		}

		let mut records = Vec::new();
		for (i, row) in rows.into_iter().enumerate() {
			let elements = match row {
				Value::Object(mut row) => match row.remove("elements") {
					Some(Value::Array(elements)) => elements,
					None | Some(Value::Null) => Vec::new(),
					Some(_) => {
						return Err(QueryError::malformed(format!(
							"row {i}: `elements` must be an array"
						)))
					}
				},
				_ => return Err(QueryError::malformed(format!("row {i} is not an object"))),
			};

			if elements.len() != destinations.len() {
				return Err(mismatch(
					context,
					format!(
						"row {i} has {} elements for {} destination addresses",
						elements.len(),
						destinations.len()
					),
				));
			}

			for (element, destination) in elements.into_iter().zip(&destinations) {
				let mut record: T = from_value(element)?;
				record.set_addresses(origins[i].clone(), destination.clone());
				records.push(record);
			}
		}

		Ok(records)
	}

	fn map_single(&self, value: Value) -> Result<T> {
		from_value(value)
	}
}
