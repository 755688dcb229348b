// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for catalog and configuration loading.
//!
//! The query path never fails: unknown languages and odd queries degrade to
//! empty collections. Errors only exist where data enters the crate.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or checking a catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Catalog file could not be read.
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog JSON is malformed or has the wrong shape.
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A document has an empty URL.
    #[error("document {index} in language '{language}' has an empty url")]
    EmptyUrl { language: String, index: usize },

    /// Two documents in one language share a URL.
    #[error("duplicate url '{url}' in language '{language}'")]
    DuplicateUrl { language: String, url: String },

    /// A catalog check failed.
    #[error("invalid catalog: {0}")]
    Invalid(String),

    /// A strict language switch named a language without a catalog.
    #[error("unknown language '{code}' (available: {available})")]
    UnknownLanguage { code: String, available: String },
}

/// Errors raised while loading engine configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config JSON is malformed.
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A field is outside its allowed range.
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}
