// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Suggestion panel and autocomplete lists.
//!
//! Two different lists for two different moments:
//!
//! - **Suggestions** come only from the curated seed and are never empty
//!   unless the seed is: when nothing matches, the top of the seed is shown.
//! - **Autocomplete** mixes keyword prefixes (first) with seed phrases that
//!   contain the query, and stays silent for very short input.

use crate::types::Document;
use crate::util::{contains_folded, normalize_query, starts_with_folded};

/// Seed phrases matching `query`.
///
/// Empty query → first `max` seed entries. Otherwise up to `max` entries that
/// contain the query (case-insensitive), or the first `fallback` entries if
/// none do.
pub fn suggestions(seed: &[String], query: &str, max: usize, fallback: usize) -> Vec<String> {
    let needle = normalize_query(query);
    if needle.is_empty() {
        return seed.iter().take(max).cloned().collect();
    }

    let matches: Vec<String> = seed
        .iter()
        .filter(|phrase| contains_folded(phrase, &needle))
        .take(max)
        .cloned()
        .collect();

    if matches.is_empty() {
        seed.iter().take(fallback).cloned().collect()
    } else {
        matches
    }
}

/// Completions for partially typed `query`.
///
/// Below `min_chars` characters the list is empty. Otherwise: document
/// keywords that start with the query (catalog order, then keyword order),
/// then seed phrases that contain it, without duplicates, at most `max`.
/// The query is lowercased but not trimmed, so a trailing space narrows the
/// match.
pub fn autocomplete(
    documents: &[Document],
    seed: &[String],
    query: &str,
    min_chars: usize,
    max: usize,
) -> Vec<String> {
    if query.chars().count() < min_chars {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    let mut completions: Vec<String> = Vec::with_capacity(max);

    let keywords = documents.iter().flat_map(|doc| doc.keywords.iter());
    for keyword in keywords {
        if completions.len() >= max {
            return completions;
        }
        if starts_with_folded(keyword, &needle) && !completions.contains(keyword) {
            completions.push(keyword.clone());
        }
    }

    for phrase in seed {
        if completions.len() >= max {
            break;
        }
        if contains_folded(phrase, &needle) && !completions.contains(phrase) {
            completions.push(phrase.clone());
        }
    }

    completions
}
