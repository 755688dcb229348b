//! Language switching and per-language catalogs.

use crate::common::{builtin_engine, mini_index, urls};
use sitescout::{Category, CatalogError, QueryEngine};

#[test]
fn test_same_query_different_catalogs() {
    let en = builtin_engine("en").search("api");
    let ru = builtin_engine("ru").search("api");
    assert_eq!(en.results[0].document.title, "API Documentation");
    assert_eq!(ru.results[0].document.title, "API Документация");
    assert_eq!(ru.results[0].score, 170);
}

#[test]
fn test_results_come_from_active_language_only() {
    let mut engine = QueryEngine::new(mini_index());
    engine.set_language("de");
    let response = engine.search("bot");
    assert_eq!(urls(&response), vec!["home.html", "samples.html"]);
    assert_eq!(response.results[0].document.title, "Bot-Zahlungen");
}

#[test]
fn test_unknown_language_is_empty_not_an_error() {
    let engine = builtin_engine("fr");
    let response = engine.search("neonpay");
    assert!(!response.has_results);
    assert!(response.results.is_empty());
    assert!(response.suggestions.is_empty());
    assert!(engine.autocomplete("neon").is_empty());
    assert!(engine.categories().is_empty());
}

#[test]
fn test_switching_back_restores_results() {
    let mut engine = builtin_engine("fr");
    engine.set_language("en");
    assert!(engine.search("neonpay").has_results);
}

#[test]
fn test_strict_switch() {
    let mut engine = builtin_engine("en");
    assert!(matches!(
        engine.try_set_language("fr"),
        Err(CatalogError::UnknownLanguage { .. })
    ));
    assert_eq!(engine.language(), "en");
    assert!(engine.try_set_language("az").is_ok());
}

#[test]
fn test_category_labels_per_language() {
    assert_eq!(builtin_engine("en").categories()[&Category::Main], "Main Pages");
    assert_eq!(builtin_engine("ru").categories()[&Category::Docs], "Документация");
    assert_eq!(builtin_engine("az").categories()[&Category::Examples], "Kod nümunələri");
    let labels: Vec<Category> = builtin_engine("en").categories().keys().copied().collect();
    assert_eq!(labels, Category::ALL.to_vec());
}
