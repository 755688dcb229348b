// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a catalog and of a search response.
//!
//! A catalog is a handful of page records per language. Nothing here is clever:
//! the types exist so the rest of the crate never has to pass around loose
//! field bags, and so the JSON the browser sees is shaped the same way the
//! site's page data is written.
//!
//! # Invariants
//!
//! - **Document**: `url` is non-empty and unique within its language.
//! - **LanguageCatalog**: read-only after construction.
//! - **SearchResponse**: `results.len() ≤ 8`, `suggestions.len() ≤ 5` with the
//!   default [`EngineConfig`](crate::EngineConfig), and `has_results` mirrors
//!   `!results.is_empty()`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Page grouping used for display and for the fixed category bonuses.
///
/// The derived `Ord` follows declaration order, which is also the order the
/// site lists its category labels in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Main,
    Docs,
    Examples,
    Info,
}

impl Category {
    /// All categories in label order.
    pub const ALL: [Category; 4] = [
        Category::Main,
        Category::Docs,
        Category::Examples,
        Category::Info,
    ];

    /// Convert to lowercase string representation.
    ///
    /// Matches the serde `rename_all = "lowercase"` convention.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Main => "main",
            Category::Docs => "docs",
            Category::Examples => "examples",
            Category::Info => "info",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One indexed page.
///
/// `keywords` may hold phrases ("pip install"); scoring joins them with a
/// single space before matching, so a query word can match across the join.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub title: String,
    pub url: String,
    pub category: Category,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub description: String,
}

/// Category code → localized label.
pub type CategoryLabels = BTreeMap<Category, String>;

/// Everything searchable for one language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageCatalog {
    #[serde(default)]
    pub documents: Vec<Document>,
    /// Curated example queries, most popular first.
    #[serde(default)]
    pub suggestions: Vec<String>,
    #[serde(default)]
    pub categories: CategoryLabels,
}

/// Display metadata for a UI language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
    pub flag: &'static str,
}

/// A document that scored above zero, with its score and display snippet.
///
/// Serialized flat so the browser sees the page fields plus `score` and
/// `matchedText` on one object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    #[serde(flatten)]
    pub document: Document,
    pub score: u32,
    pub matched_text: String,
}

/// What `search` hands back to the UI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub results: Vec<SearchHit>,
    pub suggestions: Vec<String>,
    pub has_results: bool,
    /// The normalized (lowercased, trimmed) query. Empty for an empty query.
    pub query: String,
}
