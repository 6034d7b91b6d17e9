// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Response envelope parsing.
//!
//! Two upstream API families wrap their payloads differently:
//!
//! | Strategy | Status field | Success | Payload |
//! |----------|--------------|---------|---------|
//! | [`StatusEnvelope`] | `status` (string) | `OK`, `ZERO_RESULTS` | a named top-level field |
//! | [`ResponseDataEnvelope`] | `responseStatus` (integer) | `200` | `responseData` / `responseData.results` |
//!
//! Both treat a missing or null payload as empty and reject non-object JSON.

use serde_json::{Map, Value};
use tracing::{error, trace, warn};

use crate::error::{QueryError, Result};
use crate::paged::Cursor;

pub const STATUS_OK: &str = "OK";
pub const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";
pub const RESPONSE_STATUS_OK: i64 = 200;

/// The unmapped contents of a successful list envelope.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListPayload {
	/// The homogeneous items to map, in response order.
	pub items: Vec<Value>,
	/// Sibling fields of the items, for mappers that need envelope context.
	pub context: Map<String, Value>,
	pub cursor: Option<Cursor>,
	pub next_page_token: Option<String>,
}

/// Validates an envelope and extracts its payload.
pub trait EnvelopeParser: Send + Sync {
	fn parse_list(&self, root: Value) -> Result<ListPayload>;

	/// Returns `None` when the envelope is valid but carries no payload.
	fn parse_single(&self, root: Value) -> Result<Option<Value>>;
}

fn into_object(root: Value) -> Result<Map<String, Value>> {
	match root {
		Value::Object(map) => Ok(map),
		other => {
			error!(kind = json_kind(&other), "Response is not a JSON object");
			Err(QueryError::malformed(format!(
				"expected a JSON object, found {}",
				json_kind(&other)
			)))
		}
	}
}

fn into_items(value: Option<Value>, field: &str) -> Result<Vec<Value>> {
	match value {
		None | Some(Value::Null) => Ok(Vec::new()),
		Some(Value::Array(items)) => Ok(items),
		Some(other) => Err(QueryError::malformed(format!(
			"field `{field}` should be an array, found {}",
			json_kind(&other)
		))),
	}
}

fn json_kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "boolean",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "object",
	}
}

/// Maps-style envelope: a string `status` next to the payload field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusEnvelope {
	list_field: &'static str,
	single_field: &'static str,
}

impl StatusEnvelope {
	pub const fn new(list_field: &'static str, single_field: &'static str) -> Self {
		Self {
			list_field,
			single_field,
		}
	}

	/// Returns `true` for a success status, `false` for zero results.
	fn check_status(map: &Map<String, Value>) -> Result<bool> {
		let status = map
			.get("status")
			.and_then(Value::as_str)
			.ok_or_else(|| QueryError::malformed("missing `status` field"))?;

		match status {
			STATUS_OK => Ok(true),
			STATUS_ZERO_RESULTS => Ok(false),
			other => {
				let details = map
					.get("error_message")
					.and_then(Value::as_str)
					.map(str::to_string);
				error!(status = %other, details = ?details, "API returned error status");
				Err(QueryError::api_status(other, details))
			}
		}
	}
}

impl EnvelopeParser for StatusEnvelope {
	fn parse_list(&self, root: Value) -> Result<ListPayload> {
		let mut map = into_object(root)?;
		if !Self::check_status(&map)? {
			trace!("Zero results");
			return Ok(ListPayload {
				context: map,
				..Default::default()
			});
		}

		let items = into_items(map.remove(self.list_field), self.list_field)?;
		let next_page_token = map
			.get("next_page_token")
			.and_then(Value::as_str)
			.map(str::to_string);

		Ok(ListPayload {
			items,
			context: map,
			cursor: None,
			next_page_token,
		})
	}

	fn parse_single(&self, root: Value) -> Result<Option<Value>> {
		let mut map = into_object(root)?;
		if !Self::check_status(&map)? {
			return Ok(None);
		}
		Ok(map.remove(self.single_field).filter(|v| !v.is_null()))
	}
}

/// Search-style envelope: integer `responseStatus` and a `responseData` object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResponseDataEnvelope;

impl ResponseDataEnvelope {
	/// Checks the status and returns the `responseData` value, if any.
	fn response_data(root: Value) -> Result<Option<Value>> {
		let mut map = into_object(root)?;
		let status = map
			.get("responseStatus")
			.and_then(Value::as_i64)
			.ok_or_else(|| QueryError::malformed("missing `responseStatus` field"))?;

		if status != RESPONSE_STATUS_OK {
			let details = map
				.get("responseDetails")
				.and_then(Value::as_str)
				.map(str::to_string);
			error!(status, details = ?details, "API returned error status");
			return Err(QueryError::api_status(status.to_string(), details));
		}

		Ok(map.remove("responseData").filter(|v| !v.is_null()))
	}
}

impl EnvelopeParser for ResponseDataEnvelope {
	fn parse_list(&self, root: Value) -> Result<ListPayload> {
		let mut context = match Self::response_data(root)? {
			None => return Ok(ListPayload::default()),
			Some(data) => into_object(data)?,
		};

		let items = into_items(context.remove("results"), "results")?;
		let cursor = match context.remove("cursor") {
			None | Some(Value::Null) => None,
			Some(raw) => match serde_json::from_value::<Cursor>(raw) {
				Ok(cursor) => Some(cursor),
				Err(e) => {
					warn!(error = %e, "Ignoring unreadable cursor");
					None
				}
			},
		};

		Ok(ListPayload {
			items,
			context,
			cursor,
			next_page_token: None,
		})
	}

	fn parse_single(&self, root: Value) -> Result<Option<Value>> {
		Self::response_data(root)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	const ROWS: StatusEnvelope = StatusEnvelope::new("rows", "result");

	#[test]
	fn test_status_ok_extracts_list_and_context() {
		let payload = ROWS
			.parse_list(json!({
				"status": "OK",
				"origin_addresses": ["A"],
				"rows": [{"elements": []}],
			}))
			.unwrap();
		assert_eq!(payload.items.len(), 1);
		assert_eq!(payload.context["origin_addresses"], json!(["A"]));
		assert!(!payload.context.contains_key("rows"));
	}

	#[test]
	fn test_status_zero_results_is_empty() {
		let payload = ROWS
			.parse_list(json!({"status": "ZERO_RESULTS", "rows": [{"elements": []}]}))
			.unwrap();
		assert!(payload.items.is_empty());
	}

	#[test]
	fn test_status_failure_carries_raw_status() {
		let err = ROWS
			.parse_list(json!({"status": "INVALID_REQUEST", "rows": []}))
			.unwrap_err();
		assert_eq!(err.status(), Some("INVALID_REQUEST"));
		assert_eq!(err.details(), None);

		let err = ROWS
			.parse_single(json!({"status": "REQUEST_DENIED", "error_message": "The provided API key is invalid."}))
			.unwrap_err();
		assert_eq!(err.status(), Some("REQUEST_DENIED"));
		assert_eq!(err.details(), Some("The provided API key is invalid."));
	}

	#[test]
	fn test_status_missing_payload_is_empty() {
		let payload = ROWS.parse_list(json!({"status": "OK"})).unwrap();
		assert!(payload.items.is_empty());
		assert_eq!(ROWS.parse_single(json!({"status": "OK"})).unwrap(), None);
		assert_eq!(
			ROWS.parse_single(json!({"status": "OK", "result": null})).unwrap(),
			None
		);
	}

	#[test]
	fn test_status_single_and_page_token() {
		let single = ROWS
			.parse_single(json!({"status": "OK", "result": {"name": "Cafe"}}))
			.unwrap();
		assert_eq!(single, Some(json!({"name": "Cafe"})));

		let payload = StatusEnvelope::new("results", "result")
			.parse_list(json!({"status": "OK", "results": [{}], "next_page_token": "abc"}))
			.unwrap();
		assert_eq!(payload.next_page_token.as_deref(), Some("abc"));
	}

	#[test]
	fn test_status_malformed_shapes() {
		assert!(ROWS.parse_list(json!([1, 2])).unwrap_err().is_malformed());
		assert!(ROWS.parse_list(json!("OK")).unwrap_err().is_malformed());
		assert!(ROWS.parse_list(json!({"rows": []})).unwrap_err().is_malformed());
		assert!(ROWS
			.parse_list(json!({"status": "OK", "rows": {}}))
			.unwrap_err()
			.is_malformed());
	}

	#[test]
	fn test_response_data_results_in_order() {
		let payload = ResponseDataEnvelope
			.parse_list(json!({
				"responseStatus": 200,
				"responseDetails": null,
				"responseData": {"results": [{"n": 1}, {"n": 2}]},
			}))
			.unwrap();
		assert_eq!(payload.items, vec![json!({"n": 1}), json!({"n": 2})]);
		assert!(payload.cursor.is_none());
	}

	#[test]
	fn test_response_data_failure_carries_details() {
		let err = ResponseDataEnvelope
			.parse_list(json!({
				"responseStatus": 403,
				"responseDetails": "Suspected Terms of Service Abuse",
				"responseData": null,
			}))
			.unwrap_err();
		assert_eq!(err.status(), Some("403"));
		assert_eq!(err.details(), Some("Suspected Terms of Service Abuse"));
	}

	#[test]
	fn test_response_data_empty_payloads() {
		let payload = ResponseDataEnvelope
			.parse_list(json!({"responseStatus": 200, "responseData": null}))
			.unwrap();
		assert!(payload.items.is_empty());

		let payload = ResponseDataEnvelope
			.parse_list(json!({"responseStatus": 200, "responseData": {}}))
			.unwrap();
		assert!(payload.items.is_empty());

		assert_eq!(
			ResponseDataEnvelope
				.parse_single(json!({"responseStatus": 200}))
				.unwrap(),
			None
		);
	}

	#[test]
	fn test_response_data_cursor() {
		let payload = ResponseDataEnvelope
			.parse_list(json!({
				"responseStatus": 200,
				"responseData": {
					"results": [],
					"cursor": {"currentPageIndex": 0, "pages": [{"start": "0", "label": 1}]}
				},
			}))
			.unwrap();
		assert_eq!(payload.cursor.unwrap().current_page_index, Some(0));

		let payload = ResponseDataEnvelope
			.parse_list(json!({
				"responseStatus": 200,
				"responseData": {"results": [], "cursor": {"pages": "nope"}},
			}))
			.unwrap();
		assert!(payload.cursor.is_none());
	}

	#[test]
	fn test_response_data_malformed_shapes() {
		assert!(ResponseDataEnvelope
			.parse_list(json!(null))
			.unwrap_err()
			.is_malformed());
		assert!(ResponseDataEnvelope
			.parse_list(json!({"responseData": {}}))
			.unwrap_err()
			.is_malformed());
		assert!(ResponseDataEnvelope
			.parse_list(json!({"responseStatus": 200, "responseData": [1]}))
			.unwrap_err()
			.is_malformed());
	}
}
