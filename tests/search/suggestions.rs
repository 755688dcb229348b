//! Suggestion panel contents.

use crate::common::builtin_engine;

#[test]
fn test_empty_query_shows_first_five() {
    let engine = builtin_engine("en");
    let response = engine.search("");
    assert_eq!(
        response.suggestions,
        vec![
            "How to install NEONPAY",
            "Aiogram integration",
            "Payment examples",
            "Telegram Stars",
            "Premium features",
        ]
    );
    assert_eq!(engine.suggestions(""), response.suggestions);
}

#[test]
fn test_matching_phrases_only() {
    let engine = builtin_engine("en");
    assert_eq!(engine.suggestions("stars"), vec!["Telegram Stars"]);
    assert_eq!(engine.search("libraries").suggestions, vec!["Supported libraries"]);
}

#[test]
fn test_no_match_falls_back_to_first_three() {
    let response = builtin_engine("en").search("pip install");
    assert_eq!(
        response.suggestions,
        vec!["How to install NEONPAY", "Aiogram integration", "Payment examples"]
    );
}

#[test]
fn test_suggestions_follow_language() {
    let engine = builtin_engine("ru");
    assert_eq!(engine.suggestions("api"), vec!["Справочник API"]);
    assert_eq!(engine.search("neonpay").suggestions, vec!["Как установить NEONPAY"]);
}

#[test]
fn test_never_more_than_five() {
    let engine = builtin_engine("en");
    for query in ["", "a", "e", "i", "o"] {
        assert!(engine.suggestions(query).len() <= 5, "{}", query);
    }
}
