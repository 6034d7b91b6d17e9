// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Post-success hooks for paged fetches.

use crate::paged::PagedList;

/// Receives every successfully parsed page.
///
/// Handlers run synchronously on the caller's thread, in registration order,
/// before `list()` returns.
pub trait ResponseHandler<T>: Send + Sync {
	fn handle_response(&self, response: &PagedList<T>);
}

impl<T, F> ResponseHandler<T> for F
where
	F: Fn(&PagedList<T>) + Send + Sync,
{
	fn handle_response(&self, response: &PagedList<T>) {
		self(response)
	}
}
