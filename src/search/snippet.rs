// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The line of text shown under each result.

use crate::types::Document;
use crate::util::snippet_around;

/// Snippet for `doc`: a window around the first case-insensitive occurrence
/// of the whole `query` in the content, or the description when the query
/// does not occur there.
pub fn matched_text(doc: &Document, query: &str, radius: usize) -> String {
    snippet_around(&doc.content, query, radius).unwrap_or_else(|| doc.description.clone())
}
