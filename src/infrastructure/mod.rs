// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`http`]: Similarity search over HTTP multipart (implements [`SearchBackend`])
//!
//! [`SearchBackend`]: crate::application::port::SearchBackend

pub mod http;

pub use http::HttpSearchBackend;
