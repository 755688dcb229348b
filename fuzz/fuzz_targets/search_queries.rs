// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for query handling.
//!
//! Arbitrary text in any of the built-in languages (or an unknown one) must
//! never panic and must always respect the response caps.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sitescout::QueryEngine;

#[derive(Arbitrary, Debug)]
struct Input {
    language: u8,
    query: String,
}

fuzz_target!(|input: Input| {
    static ENGINE: std::sync::OnceLock<QueryEngine> = std::sync::OnceLock::new();
    let base = ENGINE.get_or_init(QueryEngine::builtin);

    let mut engine = base.clone();
    engine.set_language(["en", "ru", "az", "xx"][input.language as usize % 4]);

    let response = engine.search(&input.query);
    assert!(response.results.len() <= 8);
    assert!(response.suggestions.len() <= 5);
    assert_eq!(response.has_results, !response.results.is_empty());
    assert!(response.results.iter().all(|hit| hit.score > 0));
    assert!(response.results.windows(2).all(|w| w[0].score >= w[1].score));

    let completions = engine.autocomplete(&input.query);
    assert!(completions.len() <= 5);
    if input.query.chars().count() < 2 {
        assert!(completions.is_empty());
    }
});
