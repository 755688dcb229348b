use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use sitescout::{
    language_info, resolve_language, Category, EngineConfig, QueryEngine, SearchIndex,
    SearchResponse,
};

mod cli;
use cli::display::{self, Tone, BOX_WIDTH};
use cli::{Cli, Commands};

fn main() {
    // Logs go to stderr so `--json` output on stdout stays clean
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let engine = load_engine(&cli)?;

    match cli.command {
        Commands::Search { query, explain } => {
            if explain {
                print_explain(&engine, &query, cli.json)
            } else {
                print_search(&engine, &engine.search(&query), cli.json)
            }
        }
        Commands::Suggest { query } => {
            print_list("Suggestions", &engine.suggestions(&query), cli.json)
        }
        Commands::Complete { query } => {
            print_list("Autocomplete", &engine.autocomplete(&query), cli.json)
        }
        Commands::Categories => print_categories(&engine, cli.json),
        Commands::Languages => print_languages(engine.index(), cli.json),
        Commands::Inspect => print_inspect(engine.index(), cli.json),
        Commands::Export => {
            println!("{}", engine.index().to_json_pretty()?);
            Ok(())
        }
    }
}

fn load_engine(cli: &Cli) -> Result<QueryEngine> {
    let config = match &cli.config {
        Some(path) => EngineConfig::from_path(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => EngineConfig::default(),
    };

    let index = match &cli.catalog {
        Some(path) => SearchIndex::from_path(path)
            .with_context(|| format!("Failed to load catalog {}", path.display()))?,
        None => SearchIndex::builtin(),
    };

    let locale = system_locale();
    let mut language = resolve_language(
        cli.lang.as_deref(),
        locale.as_deref(),
        &config.default_language,
    );
    // An explicit --lang must exist; a locale without a catalog is ignored
    if cli.lang.is_none() && !index.has_language(&language) {
        tracing::debug!(locale = ?locale, "no catalog for locale language; using default");
        language = config.default_language.clone();
    }
    let mut engine = QueryEngine::with_config(index, config);
    engine
        .try_set_language(&language)
        .context("Cannot search in the requested language")?;
    Ok(engine)
}

/// Locale from the POSIX environment, as a BCP 47 style tag.
///
/// `LC_ALL` overrides `LANG`. `"ru_RU.UTF-8"` becomes `"ru-RU"`; the `C` and
/// `POSIX` locales carry no language and yield `None`.
fn system_locale() -> Option<String> {
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|value| !value.trim().is_empty())
        .and_then(|value| locale_tag(&value))
}

fn locale_tag(posix: &str) -> Option<String> {
    let tag = posix.split(['.', '@']).next()?.trim().replace('_', "-");
    match tag.as_str() {
        "" | "C" | "POSIX" => None,
        _ => Some(tag),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).context("Failed to serialize output")?
    );
    Ok(())
}

fn category_label(engine: &QueryEngine, category: Category) -> String {
    engine
        .categories()
        .get(&category)
        .cloned()
        .unwrap_or_else(|| category.to_string())
}

fn print_search(engine: &QueryEngine, response: &SearchResponse, json: bool) -> Result<()> {
    if json {
        return print_json(response);
    }

    display::banner(&format!("\"{}\" · {}", response.query, engine.language()));

    if !response.has_results {
        display::open_section("No results");
        display::line(&format!(
            " {}",
            display::paint(Tone::Muted, "Nothing matched. Try one of the suggestions.")
        ));
        display::close_section();
    }

    for (rank, hit) in response.results.iter().enumerate() {
        let doc = &hit.document;
        display::open_section(&format!(
            "{}. {}",
            rank + 1,
            display::truncate_text(&doc.title, BOX_WIDTH - 12)
        ));
        display::line(&format!(
            " {}  {}  {}",
            display::score_value(hit.score),
            display::category_badge(doc.category, &category_label(engine, doc.category)),
            display::paint(Tone::Link, &doc.url)
        ));
        display::line(&format!(
            " {}",
            display::truncate_text(&hit.matched_text, BOX_WIDTH - 2)
        ));
        display::close_section();
    }

    print_list("Suggestions", &response.suggestions, false)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExplainedDocument<'a> {
    url: &'a str,
    title: &'a str,
    total: u32,
    breakdown: sitescout::ScoreBreakdown,
}

fn print_explain(engine: &QueryEngine, query: &str, json: bool) -> Result<()> {
    let explained: Vec<ExplainedDocument<'_>> = engine
        .explain(query)
        .into_iter()
        .map(|(doc, breakdown)| ExplainedDocument {
            url: &doc.url,
            title: &doc.title,
            total: breakdown.total(),
            breakdown,
        })
        .collect();

    if json {
        return print_json(&explained);
    }

    display::banner(&format!("Score breakdown · {}", engine.language()));
    display::open_section("phrase  kw  title desc  body  cat  total  url");
    for entry in &explained {
        let b = &entry.breakdown;
        display::line(&format!(
            " {}  {}  {}  {}  {}  {} {}  {}",
            display::signal_value(b.title_phrase),
            display::signal_value(b.keywords),
            display::signal_value(b.title_words),
            display::signal_value(b.description),
            display::signal_value(b.content),
            display::signal_value(b.category),
            display::score_value(entry.total),
            display::truncate_text(entry.url, 30)
        ));
    }
    display::close_section();
    Ok(())
}

fn print_list(label: &str, items: &[String], json: bool) -> Result<()> {
    if json {
        return print_json(items);
    }

    display::open_section(label);
    if items.is_empty() {
        display::line(&format!(" {}", display::paint(Tone::Muted, "(none)")));
    }
    for item in items {
        display::line(&format!(" • {}", display::truncate_text(item, BOX_WIDTH - 4)));
    }
    display::close_section();
    Ok(())
}

fn print_categories(engine: &QueryEngine, json: bool) -> Result<()> {
    if json {
        return print_json(engine.categories());
    }

    display::open_section("Categories");
    for (category, label) in engine.categories() {
        display::line(&format!(
            " {} {}",
            display::pad_right(&display::paint(Tone::Muted, category.as_str()), 10),
            display::category_badge(*category, label)
        ));
    }
    display::close_section();
    Ok(())
}

#[derive(Serialize)]
struct LanguageEntry<'a> {
    code: &'a str,
    name: &'a str,
    flag: &'a str,
}

fn print_languages(index: &SearchIndex, json: bool) -> Result<()> {
    let entries: Vec<LanguageEntry<'_>> = index
        .languages()
        .into_iter()
        .map(|code| match language_info(code) {
            Some(info) => LanguageEntry {
                code,
                name: info.name,
                flag: info.flag,
            },
            None => LanguageEntry {
                code,
                name: code,
                flag: "",
            },
        })
        .collect();

    if json {
        return print_json(&entries);
    }

    display::open_section("Languages");
    for entry in &entries {
        display::line(&format!(
            " {} {}  {}",
            display::pad_right(&display::paint_bold(Tone::Heading, entry.code), 4),
            entry.flag,
            entry.name
        ));
    }
    display::close_section();
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CatalogSummary<'a> {
    code: &'a str,
    documents: usize,
    suggestions: usize,
    categories: usize,
}

#[derive(Serialize)]
struct InspectReport<'a> {
    languages: Vec<CatalogSummary<'a>>,
    issues: Vec<String>,
}

fn print_inspect(index: &SearchIndex, json: bool) -> Result<()> {
    let report = InspectReport {
        languages: index
            .iter()
            .map(|(code, catalog)| CatalogSummary {
                code,
                documents: catalog.documents.len(),
                suggestions: catalog.suggestions.len(),
                categories: catalog.categories.len(),
            })
            .collect(),
        issues: index.validate().iter().map(ToString::to_string).collect(),
    };

    if json {
        return print_json(&report);
    }

    display::banner("Catalog");
    display::open_section("Languages");
    for summary in &report.languages {
        display::line(&format!(
            " {}  {:>3} documents  {:>3} suggestions  {:>2} categories",
            display::pad_right(&display::paint_bold(Tone::Heading, summary.code), 4),
            summary.documents,
            summary.suggestions,
            summary.categories
        ));
    }
    display::divide_section("Validation");
    if report.issues.is_empty() {
        display::line(&format!(" {}", display::paint(Tone::Good, "✓ no issues")));
    }
    for issue in &report.issues {
        display::line(&format!(
            " {}",
            display::error_line(&display::truncate_text(issue, BOX_WIDTH - 2))
        ));
    }
    display::close_section();
    Ok(())
}
