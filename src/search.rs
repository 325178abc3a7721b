//! Tiered term search.
//!
//! Ranking has exactly two tiers:
//!
//! 1. **Exact**: the lowercased term equals the whole normalized query.
//! 2. **Partial**: the lowercased term or definition contains any query
//!    word as a substring.
//!
//! Within each tier records keep their catalog order. There is no further
//! scoring.

use anyhow::Result;
use std::time::Instant;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::models::{SearchResponse, SlangRecord};

/// Search `records` for `query`.
///
/// A blank query yields an empty response. `execution_time` is wall-clock
/// milliseconds and is observational only.
pub fn search(query: &str, records: &[SlangRecord]) -> SearchResponse {
    let started = Instant::now();

    let normalized = query.trim().to_lowercase();
    if normalized.is_empty() {
        return SearchResponse::empty(elapsed_ms(started));
    }

    let words: Vec<&str> = normalized.split_whitespace().collect();

    let mut exact = Vec::new();
    let mut partial = Vec::new();

    for record in records {
        let term = record.term.to_lowercase();
        if term == normalized {
            exact.push(record.clone());
            continue;
        }

        let definition = record.definition.to_lowercase();
        if words
            .iter()
            .any(|w| term.contains(w) || definition.contains(w))
        {
            partial.push(record.clone());
        }
    }

    exact.extend(partial);
    SearchResponse {
        total_results: exact.len(),
        results: exact,
        execution_time: elapsed_ms(started),
    }
}

fn elapsed_ms(started: Instant) -> f64 {
    started.elapsed().as_secs_f64() * 1000.0
}

/// CLI entry point for `slang search`.
pub fn run_search(config: &Config, query: &str) -> Result<()> {
    if query.trim().is_empty() {
        println!("No results.");
        return Ok(());
    }

    let catalog = Catalog::load(&config.data.path);
    let response = search(query, catalog.records());

    if response.results.is_empty() {
        println!("No results.");
        return Ok(());
    }

    for (i, record) in response.results.iter().enumerate() {
        println!("{}. {} ({})", i + 1, record.term, record.id);
        println!("    {}", record.definition);
        if let Some(ref formal) = record.formal_translation {
            println!("    formal: {}", formal);
        }
        println!();
    }
    println!(
        "{} result(s) in {:.3} ms",
        response.total_results, response.execution_time
    );

    Ok(())
}
