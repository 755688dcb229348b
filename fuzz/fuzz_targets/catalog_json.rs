// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for catalog loading.
//!
//! Any catalog `from_json` accepts must be searchable in every language it
//! names and must pass the URL checks it claims to enforce.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sitescout::{QueryEngine, SearchIndex};

fuzz_target!(|data: &[u8]| {
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(index) = SearchIndex::from_json(json) else {
        return;
    };

    assert!(index.validate().iter().all(|issue| !issue.is_fatal()));

    let languages: Vec<String> = index.languages().into_iter().map(String::from).collect();
    let mut engine = QueryEngine::new(index);
    for language in languages {
        engine.set_language(&language);
        let response = engine.search("a");
        assert!(response.results.len() <= 8);
    }
});
