// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The per-language catalog store.
//!
//! A [`SearchIndex`] maps language codes to [`LanguageCatalog`]s. It is built
//! once (from the embedded site data or from a JSON file) and then only read.
//! Every accessor takes a language code and answers with an empty collection
//! when that language is missing, so callers never see an `Option` on the
//! query path.
//!
//! # JSON shape
//!
//! ```text
//! {
//!   "en": {
//!     "documents":   [{ "title", "url", "category", "keywords", "content", "description" }],
//!     "suggestions": ["How to install NEONPAY", ...],
//!     "categories":  { "main": "Main Pages", "docs": "Documentation", ... }
//!   },
//!   "ru": { ... }
//! }
//! ```

mod builtin;
pub mod validate;

use crate::error::CatalogError;
use crate::types::{CategoryLabels, Document, LanguageCatalog};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

pub use validate::CatalogIssue;

static EMPTY_LABELS: CategoryLabels = BTreeMap::new();

/// Immutable language → catalog map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchIndex {
    catalogs: BTreeMap<String, LanguageCatalog>,
}

impl SearchIndex {
    /// Build an index from `(language, catalog)` pairs.
    ///
    /// No validation happens here; use [`from_json`](Self::from_json) for
    /// untrusted input or call [`validate`](Self::validate) yourself.
    pub fn new(catalogs: impl IntoIterator<Item = (String, LanguageCatalog)>) -> Self {
        Self {
            catalogs: catalogs.into_iter().collect(),
        }
    }

    /// The NEONPAY documentation catalog in English, Russian and Azerbaijani.
    pub fn builtin() -> Self {
        builtin::index()
    }

    /// Parse a catalog from JSON.
    ///
    /// Empty or duplicate URLs are rejected. Softer problems (a language
    /// missing pages the others have, a category without a label) are logged
    /// and tolerated.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let index: SearchIndex = serde_json::from_str(json)?;

        for issue in index.validate() {
            if issue.is_fatal() {
                return Err(issue.into());
            }
            tracing::warn!("catalog: {}", issue);
        }

        tracing::info!(
            languages = index.catalogs.len(),
            documents = index.catalogs.values().map(|c| c.documents.len()).sum::<usize>(),
            "loaded catalog"
        );
        Ok(index)
    }

    /// Read and parse a JSON catalog file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Serialize the whole index back to pretty JSON.
    pub fn to_json_pretty(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The catalog for `language`, if there is one.
    pub fn catalog(&self, language: &str) -> Option<&LanguageCatalog> {
        self.catalogs.get(language)
    }

    /// Documents for `language`, or an empty slice.
    pub fn documents(&self, language: &str) -> &[Document] {
        self.catalog(language)
            .map(|c| c.documents.as_slice())
            .unwrap_or(&[])
    }

    /// Curated suggestion phrases for `language`, or an empty slice.
    pub fn suggestion_seed(&self, language: &str) -> &[String] {
        self.catalog(language)
            .map(|c| c.suggestions.as_slice())
            .unwrap_or(&[])
    }

    /// Category labels for `language`, or an empty map.
    pub fn categories(&self, language: &str) -> &CategoryLabels {
        self.catalog(language)
            .map(|c| &c.categories)
            .unwrap_or(&EMPTY_LABELS)
    }

    /// Language codes with a catalog, sorted.
    pub fn languages(&self) -> Vec<&str> {
        self.catalogs.keys().map(String::as_str).collect()
    }

    pub fn has_language(&self, language: &str) -> bool {
        self.catalogs.contains_key(language)
    }

    /// Number of languages.
    pub fn len(&self) -> usize {
        self.catalogs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalogs.is_empty()
    }

    /// Iterate `(language, catalog)` pairs in language order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &LanguageCatalog)> {
        self.catalogs.iter().map(|(code, catalog)| (code.as_str(), catalog))
    }

    /// Check catalog invariants. See [`CatalogIssue`].
    pub fn validate(&self) -> Vec<CatalogIssue> {
        validate::validate(self)
    }
}
