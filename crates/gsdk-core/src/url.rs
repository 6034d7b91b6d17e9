// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Request URL assembly against a fixed endpoint template.

use reqwest::Url;

use crate::error::{QueryError, Result};
use crate::param::ParamValue;

/// Accumulates named parameters for one endpoint.
///
/// Parameters render in order of first write; writing a name again replaces
/// its value in place, so no name is ever emitted twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlBuilder {
	template: String,
	params: Vec<(String, String)>,
}

impl UrlBuilder {
	pub fn new(template: impl Into<String>) -> Self {
		Self {
			template: template.into(),
			params: Vec::new(),
		}
	}

	pub fn template(&self) -> &str {
		&self.template
	}

	pub fn with_parameter(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> &mut Self {
		let name = name.into();
		let value = value.into().encode();
		match self.params.iter_mut().find(|(n, _)| *n == name) {
			Some(slot) => slot.1 = value,
			None => self.params.push((name, value)),
		}
		self
	}

	pub fn remove_parameter(&mut self, name: &str) -> Option<String> {
		let index = self.params.iter().position(|(n, _)| n == name)?;
		Some(self.params.remove(index).1)
	}

	/// The encoded value currently held for `name`.
	pub fn parameter(&self, name: &str) -> Option<&str> {
		self.params
			.iter()
			.find(|(n, _)| n == name)
			.map(|(_, v)| v.as_str())
	}

	pub fn parameters(&self) -> impl Iterator<Item = (&str, &str)> {
		self.params.iter().map(|(n, v)| (n.as_str(), v.as_str()))
	}

	/// Drops every parameter, keeping the template.
	pub fn clear(&mut self) {
		self.params.clear();
	}

	/// Renders the full request URL, percent-encoding values.
	///
	/// Does not modify the builder; repeated calls return the same string.
	pub fn build_url(&self) -> Result<String> {
		let mut url = Url::parse(&self.template)
			.map_err(|e| QueryError::InvalidEndpoint(format!("{}: {e}", self.template)))?;
		if !self.params.is_empty() {
			url.query_pairs_mut().extend_pairs(self.params.iter());
		}
		Ok(url.into())
	}
}
