// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers and their order.
//!
//! Scores are plain integers from a fixed additive formula. Ranking is a
//! stable descending sort, so two pages with the same score keep the order
//! they have in the catalog.

mod core;
pub mod ranking;

pub use self::core::*;
pub use ranking::{compare_hits, rank};
