//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::catalog::SearchIndex;
use crate::types::{Category, Document, LanguageCatalog, SearchHit};

/// Create a document with a title, URL and category and nothing else to match on.
///
/// The description is a fixed phrase so tests can tell a snippet fallback apart
/// from a content window.
pub fn make_doc(title: &str, url: &str, category: Category) -> Document {
    Document {
        title: title.to_string(),
        url: url.to_string(),
        category,
        keywords: vec![],
        content: String::new(),
        description: "Page summary".to_string(),
    }
}

/// Create a fully specified document.
pub fn make_full_doc(
    title: &str,
    url: &str,
    category: Category,
    keywords: &[&str],
    content: &str,
    description: &str,
) -> Document {
    Document {
        title: title.to_string(),
        url: url.to_string(),
        category,
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        content: content.to_string(),
        description: description.to_string(),
    }
}

/// Create a hit with a given score around a minimal document.
pub fn make_hit(url: &str, score: u32) -> SearchHit {
    SearchHit {
        document: make_doc(url, url, Category::Main),
        score,
        matched_text: String::new(),
    }
}

/// Build a language catalog from documents and suggestion phrases.
pub fn make_catalog(documents: Vec<Document>, suggestions: &[&str]) -> LanguageCatalog {
    LanguageCatalog {
        documents,
        suggestions: suggestions.iter().map(|s| s.to_string()).collect(),
        categories: Category::ALL
            .iter()
            .map(|c| (*c, c.as_str().to_uppercase()))
            .collect(),
    }
}

/// Build an index holding a single language.
pub fn make_index(language: &str, catalog: LanguageCatalog) -> SearchIndex {
    SearchIndex::new([(language.to_string(), catalog)])
}
