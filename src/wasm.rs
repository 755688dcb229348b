// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for the browser search box.
//!
//! One exported type, `SitescoutEngine`, with the same surface the site's
//! script uses: switch language, search, suggestions, autocomplete, category
//! labels. Return values are plain JS objects and arrays with camelCase
//! fields (maps become objects, not `Map`s).

use crate::catalog::SearchIndex;
use crate::error::CatalogError;
use crate::search::QueryEngine;
use serde::Serialize;
use serde_wasm_bindgen::{from_value, Serializer};
use wasm_bindgen::prelude::*;

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&Serializer::json_compatible())
        .map_err(|e| JsValue::from(e.to_string()))
}

fn catalog_error(e: CatalogError) -> JsValue {
    JsValue::from(e.to_string())
}

#[wasm_bindgen]
pub struct SitescoutEngine {
    engine: QueryEngine,
}

#[wasm_bindgen]
impl SitescoutEngine {
    /// Create an engine from a catalog object:
    /// `{ en: { documents, suggestions, categories }, ... }`.
    ///
    /// Rejects catalogs with empty or duplicate URLs.
    #[wasm_bindgen(constructor)]
    pub fn new(catalog: JsValue) -> Result<SitescoutEngine, JsValue> {
        let index: SearchIndex = from_value(catalog).map_err(|e| e.to_string())?;
        if let Some(issue) = index.validate().into_iter().find(|issue| issue.is_fatal()) {
            return Err(catalog_error(issue.into()));
        }
        Ok(SitescoutEngine {
            engine: QueryEngine::new(index),
        })
    }

    /// Engine over the embedded NEONPAY catalog.
    #[wasm_bindgen(js_name = builtin)]
    pub fn builtin() -> SitescoutEngine {
        SitescoutEngine {
            engine: QueryEngine::builtin(),
        }
    }

    /// Create an engine from a catalog JSON string.
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str) -> Result<SitescoutEngine, JsValue> {
        let index = SearchIndex::from_json(json).map_err(catalog_error)?;
        Ok(SitescoutEngine {
            engine: QueryEngine::new(index),
        })
    }

    /// Switch language. Unknown codes are accepted and give empty results.
    #[wasm_bindgen(js_name = setLanguage)]
    pub fn set_language(&mut self, code: &str) {
        self.engine.set_language(code);
    }

    #[wasm_bindgen(getter)]
    pub fn language(&self) -> String {
        self.engine.language().to_string()
    }

    /// `{ results, suggestions, hasResults, query }`
    #[wasm_bindgen]
    pub fn search(&self, query: &str) -> Result<JsValue, JsValue> {
        to_js(&self.engine.search(query))
    }

    #[wasm_bindgen]
    pub fn suggestions(&self, query: &str) -> Vec<String> {
        self.engine.suggestions(query)
    }

    #[wasm_bindgen]
    pub fn autocomplete(&self, query: &str) -> Vec<String> {
        self.engine.autocomplete(query)
    }

    /// `{ main: "...", docs: "...", examples: "...", info: "..." }`
    #[wasm_bindgen]
    pub fn categories(&self) -> Result<JsValue, JsValue> {
        to_js(self.engine.categories())
    }

    /// Language codes with a catalog.
    #[wasm_bindgen]
    pub fn languages(&self) -> Vec<String> {
        self.engine
            .index()
            .languages()
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}

/// Starting language from a stored preference and `navigator.language`.
#[wasm_bindgen(js_name = resolveLanguage)]
pub fn resolve_language(saved: Option<String>, locale: Option<String>) -> String {
    crate::language::resolve_language(
        saved.as_deref(),
        locale.as_deref(),
        crate::config::DEFAULT_LANGUAGE,
    )
}
