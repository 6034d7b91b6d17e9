// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared HTTP utilities for the Google API SDKs.
//!
//! This crate provides:
//! - A pre-configured blocking HTTP client with consistent User-Agent header
//! - The [`Transport`] seam through which every query fetches its payload
//! - The [`ApiGateway`], which layers default and per-call headers over a
//!   transport and scopes the lifetime of each response body

mod client;
mod error;
mod gateway;
mod transport;

pub use client::{
	builder, builder_with_user_agent, new_client, new_client_with_timeout, user_agent,
};
pub use error::TransportError;
pub use gateway::{ApiGateway, ACCEPT_ENCODING, DEFAULT_ACCEPT_ENCODING};
pub use transport::{Headers, ReqwestTransport, ResponseBody, SharedTransport, Transport};
