//! Shared test utilities and fixtures.

#![allow(dead_code, unused_imports)]

use sitescout::{Category, QueryEngine, SearchIndex, SearchResponse};

// Re-export canonical test utilities from sitescout::testing
pub use sitescout::testing::{make_catalog, make_doc, make_full_doc, make_index};

/// Engine over the built-in catalog, switched to `lang`.
pub fn builtin_engine(lang: &str) -> QueryEngine {
    let mut engine = QueryEngine::builtin();
    engine.set_language(lang);
    engine
}

/// Result URLs in rank order.
pub fn urls(response: &SearchResponse) -> Vec<&str> {
    response
        .results
        .iter()
        .map(|hit| hit.document.url.as_str())
        .collect()
}

/// Result scores in rank order.
pub fn scores(response: &SearchResponse) -> Vec<u32> {
    response.results.iter().map(|hit| hit.score).collect()
}

/// A two-language catalog with mirrored pages, small enough to score by hand.
///
/// | url           | category | en title          |
/// |---------------|----------|-------------------|
/// | home.html     | main     | Bot Payments      |
/// | guide.html    | docs     | Setup Guide       |
/// | samples.html  | examples | Example Bots      |
pub fn mini_index() -> SearchIndex {
    let en = make_catalog(
        vec![
            make_full_doc(
                "Bot Payments",
                "home.html",
                Category::Main,
                &["bot", "payments"],
                "Accept payments in your bot",
                "Overview",
            ),
            make_full_doc(
                "Setup Guide",
                "guide.html",
                Category::Docs,
                &["setup", "install"],
                "Install the package and configure your bot",
                "How to install",
            ),
            make_full_doc(
                "Example Bots",
                "samples.html",
                Category::Examples,
                &["samples"],
                "A donation bot and a store bot",
                "Working code",
            ),
        ],
        &["Install guide", "Bot examples", "Payments FAQ"],
    );
    let de = make_catalog(
        vec![
            make_full_doc(
                "Bot-Zahlungen",
                "home.html",
                Category::Main,
                &["bot", "zahlungen"],
                "Zahlungen im Bot annehmen",
                "Überblick",
            ),
            make_full_doc(
                "Einrichtung",
                "guide.html",
                Category::Docs,
                &["einrichtung"],
                "Paket installieren",
                "Anleitung",
            ),
            make_full_doc(
                "Beispiel-Bots",
                "samples.html",
                Category::Examples,
                &["beispiele"],
                "Ein Spenden-Bot",
                "Code",
            ),
        ],
        &["Installation", "Beispiele"],
    );
    SearchIndex::new([("en".to_string(), en), ("de".to_string(), de)])
}
