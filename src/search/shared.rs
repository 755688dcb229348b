// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Thread-safe handle to a [`QueryEngine`].
//!
//! Searches take a read lock for their full duration, so a concurrent
//! language switch never produces a response that mixes two catalogs.
//! A switch waits for in-flight searches and then applies atomically.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::CatalogError;
use crate::search::QueryEngine;
use crate::types::{CategoryLabels, SearchResponse};

/// Cloneable, shareable query engine.
#[derive(Debug, Clone)]
pub struct SharedQueryEngine {
    inner: Arc<RwLock<QueryEngine>>,
}

impl SharedQueryEngine {
    pub fn new(engine: QueryEngine) -> Self {
        Self {
            inner: Arc::new(RwLock::new(engine)),
        }
    }

    pub fn set_language(&self, code: &str) {
        self.inner.write().set_language(code);
    }

    pub fn try_set_language(&self, code: &str) -> Result<(), CatalogError> {
        self.inner.write().try_set_language(code)
    }

    pub fn language(&self) -> String {
        self.inner.read().language().to_string()
    }

    pub fn search(&self, query: &str) -> SearchResponse {
        self.inner.read().search(query)
    }

    pub fn suggestions(&self, query: &str) -> Vec<String> {
        self.inner.read().suggestions(query)
    }

    pub fn autocomplete(&self, query: &str) -> Vec<String> {
        self.inner.read().autocomplete(query)
    }

    pub fn categories(&self) -> CategoryLabels {
        self.inner.read().categories().clone()
    }

    /// Run `f` against a consistent view of the engine.
    pub fn with<R>(&self, f: impl FnOnce(&QueryEngine) -> R) -> R {
        f(&self.inner.read())
    }
}

impl From<QueryEngine> for SharedQueryEngine {
    fn from(engine: QueryEngine) -> Self {
        Self::new(engine)
    }
}
