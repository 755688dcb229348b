// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The relevance formula.
//!
//! An additive integer score over five signals plus three category bonuses.
//! The weights are part of the public behavior: the site's UI and its
//! conformance tests depend on the exact numbers, so they are constants rather
//! than config.
//!
//! | Signal                                   | Points            |
//! |------------------------------------------|-------------------|
//! | whole query inside the title             | 100               |
//! | word inside the joined keywords          | 50 per word       |
//! | word inside the title                    | 30 per word       |
//! | word inside the description              | 20 per word       |
//! | word occurrences inside the content      | 5 per occurrence  |
//! | query has "example", page is `examples`  | 20                |
//! | query has "doc", page is `docs`          | 20                |
//! | query has "api", page is `docs`          | 15                |
//!
//! All tests are lowercase substring tests. The "doc" and "api" bonuses stack.

use crate::types::{Category, Document};
use crate::util::count_occurrences;
use serde::Serialize;

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

/// Whole normalized query found inside the title.
pub const TITLE_PHRASE_SCORE: u32 = 100;

/// Per query word found inside the space-joined keywords.
pub const KEYWORD_WORD_SCORE: u32 = 50;

/// Per query word found inside the title.
pub const TITLE_WORD_SCORE: u32 = 30;

/// Per query word found inside the description.
pub const DESCRIPTION_WORD_SCORE: u32 = 20;

/// Per literal occurrence of a query word inside the content.
pub const CONTENT_OCCURRENCE_SCORE: u32 = 5;

/// Query mentions "example" and the page is in `examples`.
pub const EXAMPLES_CATEGORY_BONUS: u32 = 20;

/// Query mentions "doc" and the page is in `docs`.
pub const DOCS_CATEGORY_BONUS: u32 = 20;

/// Query mentions "api" and the page is in `docs`.
pub const API_CATEGORY_BONUS: u32 = 15;

/// Per-signal contributions to one document's score.
///
/// Kept separate so the CLI can explain a ranking; [`total`](Self::total) is
/// the only number ranking looks at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub title_phrase: u32,
    pub keywords: u32,
    pub title_words: u32,
    pub description: u32,
    pub content: u32,
    pub category: u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        self.title_phrase
            + self.keywords
            + self.title_words
            + self.description
            + self.content
            + self.category
    }
}

/// Score one document against a normalized query and its words.
///
/// `query` must already be lowercased and trimmed, and `words` must be its
/// whitespace split (see [`normalize_query`](crate::util::normalize_query)).
/// An empty query scores zero on every signal.
pub fn score_breakdown(doc: &Document, words: &[&str], query: &str) -> ScoreBreakdown {
    if query.is_empty() {
        return ScoreBreakdown::default();
    }

    let title = doc.title.to_lowercase();
    let content = doc.content.to_lowercase();
    let keywords = doc.keywords.join(" ").to_lowercase();
    let description = doc.description.to_lowercase();

    let mut breakdown = ScoreBreakdown::default();

    if title.contains(query) {
        breakdown.title_phrase = TITLE_PHRASE_SCORE;
    }

    for word in words {
        if keywords.contains(word) {
            breakdown.keywords += KEYWORD_WORD_SCORE;
        }
        if title.contains(word) {
            breakdown.title_words += TITLE_WORD_SCORE;
        }
        if description.contains(word) {
            breakdown.description += DESCRIPTION_WORD_SCORE;
        }
        breakdown.content += count_occurrences(&content, word) as u32 * CONTENT_OCCURRENCE_SCORE;
    }

    breakdown.category = category_bonus(doc.category, query);
    breakdown
}

/// Total relevance score for one document.
pub fn relevance_score(doc: &Document, words: &[&str], query: &str) -> u32 {
    score_breakdown(doc, words, query).total()
}

/// Fixed bonuses for queries that name a page category.
pub fn category_bonus(category: Category, query: &str) -> u32 {
    let mut bonus = 0;
    if category == Category::Examples && query.contains("example") {
        bonus += EXAMPLES_CATEGORY_BONUS;
    }
    if category == Category::Docs {
        if query.contains("doc") {
            bonus += DOCS_CATEGORY_BONUS;
        }
        if query.contains("api") {
            bonus += API_CATEGORY_BONUS;
        }
    }
    bonus
}
