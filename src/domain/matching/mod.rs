// SPDX-License-Identifier: MPL-2.0
//! Search result domain.
//!
//! - [`MatchRecord`]: one candidate image returned by the backend
//! - [`ResultSet`]: the ordered, re-sortable list of matches for one submission

mod record;
mod result_set;

pub use record::MatchRecord;
pub use result_set::{ResultSet, SortCriterion};
