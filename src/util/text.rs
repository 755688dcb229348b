// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query normalization, literal occurrence counting and snippet windows.

/// Lowercase and trim a raw query.
///
/// This is the form echoed back in `SearchResponse::query` and the form every
/// substring test is performed with.
pub fn normalize_query(query: &str) -> String {
    query.to_lowercase().trim().to_string()
}

/// Split a normalized query into words on runs of whitespace.
pub fn query_words(normalized: &str) -> Vec<&str> {
    normalized.split_whitespace().collect()
}

/// Count non-overlapping literal occurrences of `needle` in `haystack`.
///
/// An empty needle counts as zero occurrences.
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack.matches(needle).count()
}

/// Case-insensitive "starts with".
pub fn starts_with_folded(text: &str, prefix_lower: &str) -> bool {
    text.to_lowercase().starts_with(prefix_lower)
}

/// Case-insensitive "contains".
pub fn contains_folded(text: &str, needle_lower: &str) -> bool {
    text.to_lowercase().contains(needle_lower)
}

/// Cut a window of `radius` characters either side of the first
/// case-insensitive occurrence of `needle` in `content`.
///
/// Offsets are counted in Unicode scalar values of the original text, so the
/// window never splits a character and the returned text keeps its original
/// casing. `"..."` marks each side that was cut. Returns `None` when `needle`
/// does not occur.
pub fn snippet_around(content: &str, needle: &str, radius: usize) -> Option<String> {
    // Fold the whole string at once so context-sensitive mappings (Greek
    // final sigma) agree with the folding used for scoring.
    let folded = content.to_lowercase();
    let needle = needle.to_lowercase();
    let byte_pos = folded.find(&needle)?;

    // Each char folds to the same number of bytes either way, so summing the
    // per-char folded lengths finds the original char holding `byte_pos`.
    let original: Vec<char> = content.chars().collect();
    let hit = original
        .iter()
        .scan(0usize, |folded_end, c| {
            *folded_end += c.to_lowercase().map(char::len_utf8).sum::<usize>();
            Some(*folded_end)
        })
        .take_while(|&folded_end| folded_end <= byte_pos)
        .count();

    let start = hit.saturating_sub(radius);
    let end = (hit + needle.chars().count() + radius).min(original.len());
    let start = start.min(end);

    let mut snippet = String::with_capacity(end - start + 6);
    if start > 0 {
        snippet.push_str("...");
    }
    snippet.extend(&original[start..end]);
    if end < original.len() {
        snippet.push_str("...");
    }
    Some(snippet)
}
