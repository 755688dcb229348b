//! Ordering, ties and the result cap.

use crate::common::{builtin_engine, make_catalog, make_doc, make_index, scores, urls};
use sitescout::{Category, Document, EngineConfig, QueryEngine};

#[test]
fn test_scores_are_non_increasing() {
    let engine = builtin_engine("en");
    for query in ["neonpay", "telegram bot", "api documentation", "code examples"] {
        let response = engine.search(query);
        let s = scores(&response);
        assert!(s.windows(2).all(|w| w[0] >= w[1]), "{}: {:?}", query, s);
    }
}

#[test]
fn test_ties_keep_catalog_order() {
    let response = builtin_engine("en").search("documentation");
    assert_eq!(
        urls(&response),
        vec!["api-docs.html", "quick-start.html", "libraries.html"]
    );
    assert_eq!(scores(&response), vec![225, 20, 20]);
}

#[test]
fn test_equal_scores_everywhere_keep_catalog_order() {
    let docs: Vec<Document> = ["c.html", "a.html", "b.html"]
        .iter()
        .map(|url| make_doc("Store bot", url, Category::Main))
        .collect();
    let engine = QueryEngine::new(make_index("en", make_catalog(docs, &[])));
    let response = engine.search("store");
    assert_eq!(urls(&response), vec!["c.html", "a.html", "b.html"]);
}

#[test]
fn test_at_most_eight_results() {
    let docs: Vec<Document> = (0..20)
        .map(|i| make_doc(&format!("Guide {}", i), &format!("g{}.html", i), Category::Docs))
        .collect();
    let engine = QueryEngine::new(make_index("en", make_catalog(docs, &[])));
    let response = engine.search("guide");
    assert_eq!(response.results.len(), 8);
    assert_eq!(response.results[7].document.url, "g7.html");
}

#[test]
fn test_zero_scores_are_dropped() {
    let response = builtin_engine("en").search("zzzz");
    assert!(response.results.is_empty());
    assert!(!response.has_results);
    assert_eq!(response.query, "zzzz");
}

#[test]
fn test_custom_result_limit() {
    let config = EngineConfig {
        max_results: 2,
        ..EngineConfig::default()
    };
    let mut engine = QueryEngine::with_config(sitescout::SearchIndex::builtin(), config);
    engine.set_language("en");
    let response = engine.search("neonpay");
    assert_eq!(urls(&response), vec!["index.html", "about.html"]);
}
