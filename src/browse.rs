//! Alphabetical browsing with page/limit pagination.
//!
//! # Ordering
//!
//! Terms are compared on a collation key built by NFD-decomposing the term,
//! dropping combining marks, and lowercasing, so `"Éclair"` sorts next to
//! `"eclair"` and `"Flex"` next to `"flex"`. Ties fall back to the lowercased
//! term, then to input order (the sort is stable).
//!
//! # Pagination
//!
//! `page` and `limit` are clamped to at least 1. A page past the end is
//! clamped to the last page instead of producing an error.

use anyhow::{bail, Result};
use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::models::{Page, SlangRecord};

/// Primary collation key: diacritics stripped, lowercased.
fn collation_key(term: &str) -> String {
    term.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |
        '\u{1AB0}'..='\u{1AFF}' |
        '\u{1DC0}'..='\u{1DFF}' |
        '\u{20D0}'..='\u{20FF}' |
        '\u{FE20}'..='\u{FE2F}'
    )
}

/// Case-insensitive, accent-folding comparison of two terms.
pub fn compare_terms(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
}

/// Returns a new vector of `records` sorted by term. The input is untouched.
pub fn sort_alphabetical(records: &[SlangRecord]) -> Vec<SlangRecord> {
    let mut keyed: Vec<(String, String, &SlangRecord)> = records
        .iter()
        .map(|r| (collation_key(&r.term), r.term.to_lowercase(), r))
        .collect();
    keyed.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));
    keyed.into_iter().map(|(_, _, r)| r.clone()).collect()
}

/// Number of records in the set.
pub fn count(records: &[SlangRecord]) -> usize {
    records.len()
}

/// Returns one page of the alphabetically sorted records.
///
/// `total_pages` is `ceil(total_items / limit)` with the clamped limit, so
/// it is 0 for an empty set while `page` stays 1.
pub fn paginate(records: &[SlangRecord], page: i64, limit: i64) -> Page {
    let page = page.max(1);
    let limit = limit.max(1);

    let sorted = sort_alphabetical(records);
    let total_items = sorted.len();
    // limit >= 1, so the quotient never exceeds total_items.
    let total_pages = (total_items as u64).div_ceil(limit as u64) as i64;

    // page <= total_pages keeps (page - 1) * limit below total_items.
    let page = page.min(total_pages.max(1));
    let take = usize::try_from(limit).unwrap_or(usize::MAX);
    let start = usize::try_from((page - 1).saturating_mul(limit)).unwrap_or(usize::MAX);
    let items: Vec<SlangRecord> = sorted.into_iter().skip(start).take(take).collect();

    Page {
        page,
        limit,
        total_items,
        total_pages,
        items,
    }
}

fn check_browse_args(page: i64, limit: i64, max_limit: i64) -> Result<()> {
    if page < 1 {
        bail!("invalid page: expected an integer >= 1, got '{}'", page);
    }
    if limit < 1 {
        bail!("invalid limit: expected an integer >= 1, got '{}'", limit);
    }
    if limit > max_limit {
        bail!("invalid limit: must be <= {}", max_limit);
    }
    Ok(())
}

/// CLI entry point for `slang browse`.
///
/// `--page` and `--limit` follow the HTTP rules: both must be at least 1 and
/// the limit may not exceed `[browse].max_limit`.
pub fn run_browse(config: &Config, page: Option<i64>, limit: Option<i64>) -> Result<()> {
    let page = page.unwrap_or(1);
    let limit = limit.unwrap_or(config.browse.default_limit);
    check_browse_args(page, limit, config.browse.max_limit)?;

    let catalog = Catalog::load(&config.data.path);
    let result = paginate(catalog.records(), page, limit);

    if result.items.is_empty() {
        println!("No terms.");
        return Ok(());
    }

    println!(
        "page {}/{} ({} terms, {} per page)",
        result.page, result.total_pages, result.total_items, result.limit
    );
    println!();
    for record in &result.items {
        println!("  {:<24} {:<10} {}", record.term, record.id, record.definition);
    }

    Ok(())
}
