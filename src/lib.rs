// SPDX-License-Identifier: MPL-2.0
//! `lookalike` is the client-side controller of an image similarity search.
//!
//! Users stage a bounded set of images, submit them to a search backend, and
//! browse the ranked matches in a full-screen viewer. The crate holds the
//! interaction state only; a platform adapter renders [`app::PageView`] and
//! feeds [`app::Message`]s back in.

#![doc(html_root_url = "https://docs.rs/lookalike/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;
