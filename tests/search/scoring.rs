//! Exact scores for hand-checked queries.

use crate::common::{builtin_engine, mini_index, scores, urls};
use sitescout::QueryEngine;

#[test]
fn test_pip_install_scores_keywords_and_content() {
    let response = builtin_engine("en").search("pip install");
    assert_eq!(urls(&response), vec!["quick-start.html"]);
    // "pip": keyword 50 + content 5; "install": keyword 50 + content 2×5
    assert_eq!(scores(&response), vec![115]);
}

#[test]
fn test_title_phrase_bonus() {
    let response = builtin_engine("en").search("libraries");
    assert_eq!(urls(&response), vec!["libraries.html", "examples.html"]);
    assert_eq!(scores(&response), vec![205, 20]);
}

#[test]
fn test_api_query_ranks_docs_page_first() {
    let response = builtin_engine("en").search("api");
    assert_eq!(
        urls(&response),
        vec!["api-docs.html", "index.html", "libraries.html", "quick-start.html"]
    );
    assert_eq!(scores(&response), vec![220, 180, 70, 15]);
}

#[test]
fn test_examples_query_gets_category_bonus() {
    let response = builtin_engine("en").search("examples");
    assert_eq!(urls(&response), vec!["examples.html", "api-docs.html"]);
    assert_eq!(scores(&response), vec![230, 55]);
}

#[test]
fn test_doc_and_api_bonuses_stack() {
    let engine = QueryEngine::new(mini_index());
    let response = engine.search("api docs");
    assert_eq!(urls(&response), vec!["guide.html"]);
    assert_eq!(scores(&response), vec![20 + 15]);
}

#[test]
fn test_category_bonus_alone_is_enough_to_match() {
    let engine = QueryEngine::new(mini_index());
    let response = engine.search("doc");
    assert_eq!(urls(&response), vec!["guide.html"]);
    assert_eq!(scores(&response), vec![20]);
}

#[test]
fn test_content_counts_every_occurrence() {
    let engine = QueryEngine::new(mini_index());
    let response = engine.search("bot");
    assert_eq!(urls(&response), vec!["home.html", "samples.html", "guide.html"]);
    assert_eq!(scores(&response), vec![185, 140, 5]);
}

#[test]
fn test_multi_word_query_sums_words() {
    let engine = QueryEngine::new(mini_index());
    let response = engine.search("payments bot");
    assert_eq!(scores(&response), vec![170, 40, 5]);
}

#[test]
fn test_regex_characters_are_literal() {
    let engine = builtin_engine("en");
    for query in ["(", "a+", "[x", "*", "bot?"] {
        // Must not panic; nothing in the catalog contains these literally
        let response = engine.search(query);
        assert!(response.results.iter().all(|hit| hit.score > 0));
    }
    assert!(!engine.search("*").has_results);
}
