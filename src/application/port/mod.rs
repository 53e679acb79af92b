// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! Infrastructure adapters implement these traits. They use only domain
//! types, so the application layer stays independent of the HTTP stack.
//!
//! # Available Ports
//!
//! - [`search`]: Similarity search over uploaded images
//!
//! # Example
//!
//! ```ignore
//! use lookalike::application::port::{SearchBackend, SearchRequest};
//!
//! async fn run(backend: &impl SearchBackend, request: SearchRequest) {
//!     let _reply = backend.search(request).await;
//! }
//! ```

pub mod search;

pub use search::{BackendError, SearchBackend, SearchReply, SearchRequest, UploadPart};
