// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: filter, order, cap.
//!
//! Only the score decides the order. Ties are not broken by title or URL:
//! they keep catalog order, which is why [`rank`] relies on `sort_by` being
//! stable. Reordering the catalog is the supported way to change how ties
//! come out.

use crate::types::SearchHit;
use std::cmp::Ordering;

/// Compare two hits for ranking: higher score first.
///
/// Returns `Equal` for equal scores so a stable sort preserves input order.
pub fn compare_hits(a: &SearchHit, b: &SearchHit) -> Ordering {
    b.score.cmp(&a.score)
}

/// Drop zero-score hits, sort by descending score (stable), keep `limit`.
///
/// `hits` must be in catalog order for ties to come out in catalog order.
pub fn rank(mut hits: Vec<SearchHit>, limit: usize) -> Vec<SearchHit> {
    hits.retain(|hit| hit.score > 0);
    hits.sort_by(compare_hits);
    hits.truncate(limit);
    hits
}
