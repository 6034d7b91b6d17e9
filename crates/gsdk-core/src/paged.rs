// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Paged result collections.

use std::ops::Deref;

use serde::{Deserialize, Serialize};

/// Pagination metadata carried by the search API envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cursor {
	#[serde(default)]
	pub estimated_result_count: Option<String>,
	#[serde(default)]
	pub current_page_index: Option<u32>,
	#[serde(default)]
	pub more_results_url: Option<String>,
	#[serde(default)]
	pub pages: Vec<CursorPage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorPage {
	pub start: String,
	pub label: u32,
}

impl Cursor {
	/// The start index of the page after the current one, if any.
	pub fn next_start(&self) -> Option<&str> {
		let current = self.current_page_index? as usize;
		self.pages.get(current + 1).map(|p| p.start.as_str())
	}
}

/// Ordered results of one call plus whatever pagination data came with them.
#[derive(Debug, Clone, PartialEq)]
pub struct PagedList<T> {
	items: Vec<T>,
	cursor: Option<Cursor>,
	next_page_token: Option<String>,
}

impl<T> PagedList<T> {
	pub fn new(items: Vec<T>) -> Self {
		Self {
			items,
			cursor: None,
			next_page_token: None,
		}
	}

	pub fn with_cursor(mut self, cursor: Option<Cursor>) -> Self {
		self.cursor = cursor;
		self
	}

	pub fn with_next_page_token(mut self, token: Option<String>) -> Self {
		self.next_page_token = token;
		self
	}

	pub fn cursor(&self) -> Option<&Cursor> {
		self.cursor.as_ref()
	}

	pub fn next_page_token(&self) -> Option<&str> {
		self.next_page_token.as_deref()
	}

	pub fn has_more(&self) -> bool {
		self.next_page_token.is_some()
			|| self.cursor.as_ref().and_then(Cursor::next_start).is_some()
	}

	pub fn into_vec(self) -> Vec<T> {
		self.items
	}
}

impl<T> Default for PagedList<T> {
	fn default() -> Self {
		Self::new(Vec::new())
	}
}

impl<T> Deref for PagedList<T> {
	type Target = [T];

	fn deref(&self) -> &[T] {
		&self.items
	}
}

impl<T> IntoIterator for PagedList<T> {
	type Item = T;
	type IntoIter = std::vec::IntoIter<T>;

	fn into_iter(self) -> Self::IntoIter {
		self.items.into_iter()
	}
}

impl<'a, T> IntoIterator for &'a PagedList<T> {
	type Item = &'a T;
	type IntoIter = std::slice::Iter<'a, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.items.iter()
	}
}
