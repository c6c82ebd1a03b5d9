//! Suggest and popular commands

use super::{load_catalog, open_history, print_json};
use crate::OutputFormat;
use anyhow::Result;
use glowbook_cli::output::{format_count, format_duration, truncate, Status};
use glowbook_core::config::Config;
use glowbook_search::{popular_suggestions, smart_search, SearchField, SearchSuggestion};
use glowbook_telemetry::Timer;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::path::Path;

/// Command-line overrides for a suggest run
pub struct SuggestOptions {
    pub max: Option<i64>,
    pub threshold: Option<i64>,
    pub fields: Vec<SearchField>,
    pub record: bool,
}

/// JSON output for suggestions
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonSuggestOutput<'a> {
    query: &'a str,
    popular: bool,
    suggestions: &'a [SearchSuggestion],
}

/// Run suggest command
pub fn run(
    config: &Config,
    query: &str,
    catalog_path: &Path,
    options: SuggestOptions,
    format: OutputFormat,
) -> Result<()> {
    let catalog = load_catalog(catalog_path)?;

    let mut search = config.schema.search.clone();
    if let Some(max) = options.max {
        search = search.with_max_suggestions(max);
    }
    if let Some(threshold) = options.threshold {
        search = search.with_fuzzy_threshold(threshold);
    }
    if !options.fields.is_empty() {
        search = search.with_fields(options.fields);
    }

    // Nothing typed: fall back to the curated popular set
    let popular = query.trim().is_empty();
    let timer = Timer::start("suggest");
    let suggestions = if popular {
        popular_suggestions(catalog.items(), config.schema.popular.limit)
    } else {
        smart_search(query, catalog.items(), &search)
    };
    let elapsed = timer.stop();

    if options.record {
        open_history(config)?.add(query);
    }

    match format {
        OutputFormat::Json => print_json(&JsonSuggestOutput {
            query,
            popular,
            suggestions: &suggestions,
        }),
        OutputFormat::Text => {
            let title = if popular {
                "Popular".to_string()
            } else {
                format!("Suggestions for \"{}\"", query.trim())
            };
            print_suggestions(&title, &suggestions);
            println!(
                "\n{}",
                format!(
                    "{} in {}",
                    format_count(suggestions.len(), "suggestion", "suggestions"),
                    format_duration(elapsed)
                )
                .dimmed()
            );
            Ok(())
        }
    }
}

/// Run popular command
pub fn run_popular(
    config: &Config,
    catalog_path: &Path,
    limit: Option<usize>,
    format: OutputFormat,
) -> Result<()> {
    let catalog = load_catalog(catalog_path)?;
    let limit = limit.unwrap_or(config.schema.popular.limit);
    let suggestions = popular_suggestions(catalog.items(), limit);

    match format {
        OutputFormat::Json => print_json(&suggestions),
        OutputFormat::Text => {
            print_suggestions("Popular", &suggestions);
            Ok(())
        }
    }
}

fn print_suggestions(title: &str, suggestions: &[SearchSuggestion]) {
    Status::header(title);

    if suggestions.is_empty() {
        Status::info("No matches");
        return;
    }

    for (i, s) in suggestions.iter().enumerate() {
        let label = format!("{} {}", s.name.bold(), format!("({})", s.category).cyan());
        let mut note = format!("{} {}", s.match_type, s.score);
        if s.matched_text != s.name {
            note.push_str(&format!(" via \"{}\"", truncate(&s.matched_text, 40)));
        }
        Status::entry(i + 1, &label, &note);
    }
}
