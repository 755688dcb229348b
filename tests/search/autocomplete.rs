//! Autocomplete as the user types.

use crate::common::builtin_engine;

#[test]
fn test_short_input_is_silent() {
    let engine = builtin_engine("en");
    assert!(engine.autocomplete("").is_empty());
    assert!(engine.autocomplete("t").is_empty());
}

#[test]
fn test_keywords_then_seed() {
    let engine = builtin_engine("en");
    assert_eq!(
        engine.autocomplete("te"),
        vec!["telegram", "team", "telebot", "Aiogram integration", "Telegram Stars"]
    );
}

#[test]
fn test_input_case_is_ignored() {
    let engine = builtin_engine("en");
    assert_eq!(engine.autocomplete("Te"), engine.autocomplete("te"));
}

#[test]
fn test_keyword_prefixes_dedup_across_pages() {
    let engine = builtin_engine("en");
    assert_eq!(
        engine.autocomplete("py"),
        vec!["python", "pyrogram", "python-telegram-bot", "pytelegramботapi"]
    );
}

#[test]
fn test_seed_phrases_in_active_language() {
    let engine = builtin_engine("ru");
    assert_eq!(engine.autocomplete("ai"), vec!["aiogram", "Интеграция с Aiogram"]);
}

#[test]
fn test_at_most_five_without_duplicates() {
    let engine = builtin_engine("en");
    for query in ["te", "pa", "st", "ex", "co", "in"] {
        let list = engine.autocomplete(query);
        assert!(list.len() <= 5, "{}: {:?}", query, list);
        let mut unique = list.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), list.len(), "{}: {:?}", query, list);
    }
}
