//! Snippet text attached to each hit.

use crate::common::{builtin_engine, make_catalog, make_full_doc, make_index};
use sitescout::{Category, QueryEngine, SearchHit};

fn snippet_for<'a>(hits: &'a [SearchHit], url: &str) -> &'a str {
    hits.iter()
        .find(|hit| hit.document.url == url)
        .map(|hit| hit.matched_text.as_str())
        .unwrap_or_else(|| panic!("{} not in results", url))
}

#[test]
fn test_window_around_first_occurrence() {
    let response = builtin_engine("en").search("pip install");
    assert_eq!(
        snippet_for(&response.results, "quick-start.html"),
        "...allation tutorial setup guide pip install neonpay"
    );
}

#[test]
fn test_window_at_start_and_end() {
    let response = builtin_engine("en").search("examples");
    assert_eq!(
        snippet_for(&response.results, "api-docs.html"),
        "...arameters. Methods Parameters Examples Reference"
    );
    assert_eq!(
        snippet_for(&response.results, "examples.html"),
        "Code Examples Real-world examples Premium B..."
    );
}

#[test]
fn test_description_when_phrase_not_in_content() {
    let response = builtin_engine("en").search("telegram bot");
    assert_eq!(
        snippet_for(&response.results, "libraries.html"),
        "List of all supported Python Telegram bot libraries"
    );
}

#[test]
fn test_cyrillic_window() {
    let response = builtin_engine("ru").search("установка");
    assert_eq!(
        snippet_for(&response.results, "quick-start.html"),
        "...с NEONPAY за несколько минут. Установка руководство настройка pip ins..."
    );
}

#[test]
fn test_every_snippet_is_non_empty_for_builtin() {
    let engine = builtin_engine("az");
    for query in ["neonpay", "bot", "api", "telegram"] {
        for hit in engine.search(query).results {
            assert!(!hit.matched_text.is_empty(), "{} {}", query, hit.document.url);
        }
    }
}

#[test]
fn test_greek_final_sigma_finds_content_window() {
    let doc = make_full_doc(
        "Οδηγός",
        "el.html",
        Category::Docs,
        &[],
        "ΜΕΓΑΛΟΣ ΟΔΟΣ εδώ",
        "DESC",
    );
    let engine = QueryEngine::new(make_index("en", make_catalog(vec![doc], &[])));
    let response = engine.search("ΟΔΟΣ");
    assert_eq!(response.query, "οδος");
    assert_eq!(response.results.len(), 1);
    assert_eq!(response.results[0].score, 5);
    assert_eq!(response.results[0].matched_text, "ΜΕΓΑΛΟΣ ΟΔΟΣ εδώ");
}
