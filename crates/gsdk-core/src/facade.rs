// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! The surface every per-endpoint query exposes.

use crate::error::Result;
use crate::handler::ResponseHandler;
use crate::paged::PagedList;
use crate::query::QueryExecutor;

/// Implemented by each endpoint façade; the provided methods delegate to its
/// [`QueryExecutor`].
pub trait Query {
	type Record;

	fn executor(&self) -> &QueryExecutor<Self::Record>;

	fn executor_mut(&mut self) -> &mut QueryExecutor<Self::Record>;

	/// Drops all configured parameters except the fixed ones (key, version).
	fn reset(&mut self) {
		self.executor_mut().reset();
	}

	fn build_url(&self) -> Result<String> {
		self.executor().build_url()
	}

	fn list(&self) -> Result<PagedList<Self::Record>> {
		self.executor().list()
	}

	fn single_result(&self) -> Result<Option<Self::Record>> {
		self.executor().single_result()
	}

	fn add_response_handler(&mut self, handler: impl ResponseHandler<Self::Record> + 'static) {
		self.executor_mut().add_response_handler(handler);
	}
}
