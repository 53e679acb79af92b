// SPDX-License-Identifier: MPL-2.0
//! Toolkit-independent presentation state.
//!
//! Nothing here draws pixels. Each module holds the state a renderer reads
//! and the commands an input adapter calls.

pub mod format;
pub mod gallery;
pub mod notifications;
