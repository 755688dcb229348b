//! Weighted-substring search for a small multilingual documentation site.
//!
//! A fixed catalog of pages per language is scored against the query with a
//! handful of substring signals, ranked, and returned with snippets,
//! suggestions and autocomplete. No tokenizer, no index structure: the
//! catalogs are small enough that a linear scan is the index.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │   catalog/   │────▶│   scoring/   │────▶│     search/      │
//! │ (SearchIndex,│     │ (relevance,  │     │ (QueryEngine,    │
//! │  validate)   │     │  rank)       │     │  snippet,suggest)│
//! └──────────────┘     └──────────────┘     └──────────────────┘
//!        │                    │                      │
//!        ▼                    ▼                      ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │                 types.rs  ·  util/text.rs                  │
//! │   (Document, Category, SearchResponse · case folding,      │
//! │    occurrence counting, char-safe windows)                 │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Scoring
//!
//! | Signal                                   | Points           |
//! |------------------------------------------|------------------|
//! | Whole query in title                     | 100              |
//! | Word in keywords                         | 50 per word      |
//! | Word in title                            | 30 per word      |
//! | Word in description                      | 20 per word      |
//! | Word in content                          | 5 per occurrence |
//! | Examples page, query mentions "example"  | 20               |
//! | Docs page, query mentions "doc"          | 20               |
//! | Docs page, query mentions "api"          | 15               |
//!
//! # Usage
//!
//! ```
//! use sitescout::QueryEngine;
//!
//! let mut engine = QueryEngine::builtin();
//! engine.set_language("en");
//!
//! let response = engine.search("pip install");
//! assert!(response.has_results);
//! assert_eq!(response.results[0].document.url, "quick-start.html");
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod language;
pub mod scoring;
pub mod search;
pub mod types;
pub mod util;

pub mod testing;

#[cfg(feature = "wasm")]
mod wasm;

pub use catalog::{CatalogIssue, SearchIndex};
pub use config::{EngineConfig, DEFAULT_LANGUAGE};
pub use error::{CatalogError, ConfigError};
pub use language::{language_info, resolve_language, BUILTIN_LANGUAGES};
pub use scoring::{relevance_score, score_breakdown, ScoreBreakdown};
pub use search::{autocomplete, matched_text, suggestions, QueryEngine};
pub use types::{
    Category, CategoryLabels, Document, Language, LanguageCatalog, SearchHit, SearchResponse,
};

#[cfg(feature = "parallel")]
pub use search::SharedQueryEngine;

#[cfg(feature = "wasm")]
pub use wasm::SitescoutEngine;
