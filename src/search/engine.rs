// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The query engine: active language plus the catalog it points into.
//!
//! # Pipeline
//!
//! ```text
//! raw query ──▶ normalize ──▶ words ──▶ score every document ──▶ rank ──▶ response
//!                  │                          (score > 0)         (stable, ≤ 8)
//!                  └──▶ empty? ──▶ default suggestions, no results
//! ```
//!
//! # Unknown languages
//!
//! [`QueryEngine::set_language`] accepts any code. A code without a catalog
//! makes every accessor return an empty collection and every search return
//! nothing. [`QueryEngine::try_set_language`] is the strict alternative.

use crate::catalog::SearchIndex;
use crate::config::EngineConfig;
use crate::error::CatalogError;
use crate::scoring::{rank, relevance_score, score_breakdown, ScoreBreakdown};
use crate::search::{snippet, suggest};
use crate::types::{CategoryLabels, Document, SearchHit, SearchResponse};
use crate::util::{normalize_query, query_words};

/// Catalog size from which per-document scoring is spread across threads.
#[cfg(feature = "parallel")]
const PARALLEL_MIN_DOCUMENTS: usize = 256;

/// Search over one language of a [`SearchIndex`] at a time.
#[derive(Debug, Clone)]
pub struct QueryEngine {
    index: SearchIndex,
    language: String,
    config: EngineConfig,
}

impl QueryEngine {
    /// Engine with default limits, starting in the default language.
    pub fn new(index: SearchIndex) -> Self {
        Self::with_config(index, EngineConfig::default())
    }

    /// Engine with custom limits, starting in `config.default_language`.
    pub fn with_config(index: SearchIndex, config: EngineConfig) -> Self {
        let language = config.default_language.clone();
        Self {
            index,
            language,
            config,
        }
    }

    /// Engine over the embedded NEONPAY catalog.
    pub fn builtin() -> Self {
        Self::new(SearchIndex::builtin())
    }

    pub fn index(&self) -> &SearchIndex {
        &self.index
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The active language code (possibly one without a catalog).
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Switch the active language. Never fails.
    ///
    /// Unknown codes are accepted and logged; queries then see an empty
    /// catalog until a known language is set.
    pub fn set_language(&mut self, code: &str) {
        if !self.index.has_language(code) {
            tracing::warn!(language = code, "no catalog for language; searches will be empty");
        }
        self.language = code.to_string();
    }

    /// Switch the active language only if it has a catalog.
    ///
    /// On error the active language is left unchanged.
    pub fn try_set_language(&mut self, code: &str) -> Result<(), CatalogError> {
        if !self.index.has_language(code) {
            return Err(CatalogError::UnknownLanguage {
                code: code.to_string(),
                available: self.index.languages().join(", "),
            });
        }
        self.language = code.to_string();
        Ok(())
    }

    /// Documents of the active language.
    pub fn documents(&self) -> &[Document] {
        self.index.documents(&self.language)
    }

    /// Suggestion seed of the active language.
    pub fn suggestion_seed(&self) -> &[String] {
        self.index.suggestion_seed(&self.language)
    }

    /// Category labels of the active language.
    pub fn categories(&self) -> &CategoryLabels {
        self.index.categories(&self.language)
    }

    /// Run a query against the active language.
    pub fn search(&self, query: &str) -> SearchResponse {
        let normalized = normalize_query(query);
        if normalized.is_empty() {
            return SearchResponse {
                results: Vec::new(),
                suggestions: self.suggestions(""),
                has_results: false,
                query: String::new(),
            };
        }

        let words = query_words(&normalized);
        let hits = self.score_documents(&words, &normalized);
        let scored = hits.len();
        let results = rank(hits, self.config.max_results);

        tracing::debug!(
            query = %normalized,
            language = %self.language,
            words = words.len(),
            scored,
            returned = results.len(),
            "search"
        );

        SearchResponse {
            has_results: !results.is_empty(),
            results,
            suggestions: self.suggestions(&normalized),
            query: normalized,
        }
    }

    /// Per-signal scores of every document for `query`, in catalog order.
    ///
    /// Zero-score documents are included; this is for explaining a ranking,
    /// not for producing one.
    pub fn explain(&self, query: &str) -> Vec<(&Document, ScoreBreakdown)> {
        let normalized = normalize_query(query);
        if normalized.is_empty() {
            return Vec::new();
        }
        let words = query_words(&normalized);
        self.documents()
            .iter()
            .map(|doc| (doc, score_breakdown(doc, &words, &normalized)))
            .collect()
    }

    /// Suggestion list for the suggestion panel.
    pub fn suggestions(&self, query: &str) -> Vec<String> {
        suggest::suggestions(
            self.suggestion_seed(),
            query,
            self.config.max_suggestions,
            self.config.fallback_suggestions,
        )
    }

    /// Completions for partially typed input.
    pub fn autocomplete(&self, query: &str) -> Vec<String> {
        suggest::autocomplete(
            self.documents(),
            self.suggestion_seed(),
            query,
            self.config.autocomplete_min_chars,
            self.config.max_autocomplete,
        )
    }

    /// Snippet for `doc` under the configured radius.
    pub fn matched_text(&self, doc: &Document, query: &str) -> String {
        snippet::matched_text(doc, query, self.config.snippet_radius)
    }

    /// Score every document in catalog order, keeping those above zero.
    fn score_documents(&self, words: &[&str], query: &str) -> Vec<SearchHit> {
        let documents = self.documents();

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            if documents.len() >= PARALLEL_MIN_DOCUMENTS {
                // Collecting an ordered parallel iterator keeps catalog order
                return documents
                    .par_iter()
                    .filter_map(|doc| self.hit(doc, words, query))
                    .collect();
            }
        }

        documents
            .iter()
            .filter_map(|doc| self.hit(doc, words, query))
            .collect()
    }

    fn hit(&self, doc: &Document, words: &[&str], query: &str) -> Option<SearchHit> {
        let score = relevance_score(doc, words, query);
        (score > 0).then(|| SearchHit {
            document: doc.clone(),
            score,
            matched_text: self.matched_text(doc, query),
        })
    }
}

impl Default for QueryEngine {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{make_catalog, make_doc, make_full_doc, make_index};
    use crate::types::Category;

    #[test]
    fn test_starts_in_default_language() {
        let engine = QueryEngine::builtin();
        assert_eq!(engine.language(), "en");
        assert_eq!(engine.documents().len(), 6);
    }

    #[test]
    fn test_config_default_language() {
        let config = EngineConfig {
            default_language: "az".to_string(),
            ..EngineConfig::default()
        };
        let engine = QueryEngine::with_config(SearchIndex::builtin(), config);
        assert_eq!(engine.language(), "az");
        assert_eq!(engine.categories()[&Category::Docs], "Sənədlər");
    }

    #[test]
    fn test_set_language_accepts_unknown() {
        let mut engine = QueryEngine::builtin();
        engine.set_language("xx");
        assert_eq!(engine.language(), "xx");
        assert!(engine.documents().is_empty());
        assert!(engine.categories().is_empty());
    }

    #[test]
    fn test_try_set_language_rejects_unknown() {
        let mut engine = QueryEngine::builtin();
        let err = engine.try_set_language("xx").unwrap_err();
        assert!(matches!(err, CatalogError::UnknownLanguage { .. }));
        assert_eq!(engine.language(), "en");

        engine.try_set_language("ru").unwrap();
        assert_eq!(engine.language(), "ru");
    }

    #[test]
    fn test_empty_query() {
        let engine = QueryEngine::builtin();
        let response = engine.search("   ");
        assert!(response.results.is_empty());
        assert!(!response.has_results);
        assert_eq!(response.query, "");
        assert_eq!(response.suggestions, engine.suggestion_seed()[..5].to_vec());
    }

    #[test]
    fn test_hits_carry_score_and_snippet() {
        let catalog = make_catalog(
            vec![make_full_doc(
                "Quick Start Guide",
                "quick-start.html",
                Category::Docs,
                &["pip install"],
                "pip install neonpay",
                "Step-by-step guide",
            )],
            &[],
        );
        let engine = QueryEngine::new(make_index("en", catalog));
        let response = engine.search("Pip Install");
        assert_eq!(response.query, "pip install");
        assert_eq!(response.results.len(), 1);
        let hit = &response.results[0];
        assert_eq!(hit.score, 55 + 55);
        assert_eq!(hit.matched_text, "pip install neonpay");
    }

    #[test]
    fn test_results_capped_by_config() {
        let docs: Vec<Document> = (0..12)
            .map(|i| make_doc(&format!("Bot page {}", i), &format!("{}.html", i), Category::Main))
            .collect();
        let config = EngineConfig {
            max_results: 3,
            ..EngineConfig::default()
        };
        let engine = QueryEngine::with_config(make_index("en", make_catalog(docs, &[])), config);
        let response = engine.search("bot");
        assert_eq!(response.results.len(), 3);
        assert_eq!(response.results[0].document.url, "0.html");
    }

    #[test]
    fn test_explain_lists_every_document() {
        let engine = QueryEngine::builtin();
        let explained = engine.explain("aiogram");
        assert_eq!(explained.len(), 6);
        let total: u32 = explained.iter().map(|(_, b)| b.total()).sum();
        let returned: u32 = engine.search("aiogram").results.iter().map(|h| h.score).sum();
        assert_eq!(total, returned);
    }
}
