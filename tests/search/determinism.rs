//! Identical inputs give identical responses.

use crate::common::builtin_engine;
use sitescout::QueryEngine;

#[test]
fn test_repeated_search_is_identical() {
    let engine = builtin_engine("en");
    for query in ["neonpay", "api documentation", "", "telegram stars", "zzz"] {
        assert_eq!(engine.search(query), engine.search(query), "{}", query);
    }
}

#[test]
fn test_fresh_engines_agree() {
    for lang in ["en", "ru", "az"] {
        let mut a = QueryEngine::builtin();
        let mut b = QueryEngine::builtin();
        a.set_language(lang);
        b.set_language(lang);
        assert_eq!(a.search("bot"), b.search("bot"));
        assert_eq!(a.autocomplete("te"), b.autocomplete("te"));
    }
}

#[test]
fn test_normalization_does_not_change_results() {
    let engine = builtin_engine("en");
    let plain = engine.search("api documentation");
    let noisy = engine.search("\t API Documentation  ");
    assert_eq!(plain.results, noisy.results);
    assert_eq!(noisy.query, "api documentation");
}
