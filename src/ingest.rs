//! Markdown ingestion pipeline.
//!
//! Turns a structured markdown document into validated [`SlangRecord`]s.
//! Each `## ` heading opens a new candidate; the candidate is validated when
//! the next heading (or the end of the document) is reached. Candidates that
//! fail validation are dropped and reported, and ingestion carries on.
//!
//! # Document format
//!
//! ```text
//! ## lit
//! Definition: Exciting or excellent
//! Formal Translation: Amazing
//! Usage Examples:
//! - That party was lit!
//! Cultural Context:
//! - Age Group: teens
//! - Social Setting: casual
//! - Region Specificity: city-wide
//! - Additional Notes: Popular in urban areas
//! ```
//!
//! Blank lines and lines starting with `<!--` are skipped. Anything before
//! the first heading is ignored.
//!
//! # Identifiers
//!
//! Ids are `term-<n>` where `n` counts every heading seen so far, including
//! candidates that are later rejected. A rejected candidate's number is
//! never handed to another record.

use anyhow::{bail, Result};
use std::path::Path;

use crate::config::Config;
use crate::models::{CulturalContext, SlangRecord, UsageExample};

const HEADING: &str = "## ";
const COMMENT: &str = "<!--";
const BULLET: &str = "- ";
const DEFINITION: &str = "Definition:";
const FORMAL_TRANSLATION: &str = "Formal Translation:";
const USAGE_EXAMPLES: &str = "Usage Examples:";
const CULTURAL_CONTEXT: &str = "Cultural Context:";
const AGE_GROUP: &str = "- Age Group:";
const SOCIAL_SETTING: &str = "- Social Setting:";
const REGION_SPECIFICITY: &str = "- Region Specificity:";
const ADDITIONAL_NOTES: &str = "- Additional Notes:";

/// Accepted records and per-candidate diagnostics from one ingestion run.
#[derive(Debug, Clone, Default)]
pub struct IngestReport {
    pub records: Vec<SlangRecord>,
    pub errors: Vec<String>,
}

/// Subsection currently open under a heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    UsageExamples,
    CulturalContext,
}

/// Parser state threaded through the line loop.
#[derive(Debug, Default)]
struct ParserState {
    current: Option<SlangRecord>,
    section: Option<Section>,
    headings_seen: usize,
}

impl ParserState {
    fn consume(&mut self, line: &str, report: &mut IngestReport) {
        let line = line.trim();
        if line.is_empty() || line.starts_with(COMMENT) {
            return;
        }

        if let Some(heading) = line.strip_prefix(HEADING) {
            self.finalize(report);
            self.headings_seen += 1;
            self.current = Some(new_candidate(self.headings_seen, heading.trim()));
            self.section = None;
            return;
        }

        let Some(candidate) = self.current.as_mut() else {
            return;
        };

        if let Some(rest) = line.strip_prefix(DEFINITION) {
            candidate.definition = rest.trim().to_string();
            self.section = None;
            return;
        }

        if let Some(rest) = line.strip_prefix(FORMAL_TRANSLATION) {
            candidate.formal_translation = Some(rest.trim().to_string());
            self.section = None;
            return;
        }

        if line == USAGE_EXAMPLES {
            self.section = Some(Section::UsageExamples);
            return;
        }

        if line == CULTURAL_CONTEXT {
            self.section = Some(Section::CulturalContext);
            return;
        }

        match self.section {
            Some(Section::UsageExamples) => {
                if let Some(rest) = line.strip_prefix(BULLET) {
                    let example = rest.trim();
                    if !example.is_empty() {
                        candidate.usage_examples.push(UsageExample {
                            example: example.to_string(),
                            context: Some(String::new()),
                        });
                    }
                }
            }
            Some(Section::CulturalContext) => {
                apply_cultural_field(&mut candidate.cultural_context, line);
            }
            None => {}
        }
    }

    /// Validates the pending candidate, if any, and files it into `report`.
    fn finalize(&mut self, report: &mut IngestReport) {
        let Some(candidate) = self.current.take() else {
            return;
        };

        let validation = candidate.validate();
        if validation.is_valid {
            report.records.push(candidate);
        } else {
            report
                .errors
                .push(format!("Term \"{}\": {}", candidate.term, validation.joined()));
        }
    }
}

fn new_candidate(number: usize, term: &str) -> SlangRecord {
    SlangRecord {
        id: format!("term-{}", number),
        term: term.to_string(),
        definition: String::new(),
        formal_translation: None,
        usage_examples: Vec::new(),
        cultural_context: CulturalContext::default(),
        created_at: None,
        updated_at: None,
    }
}

fn apply_cultural_field(context: &mut CulturalContext, line: &str) {
    if let Some(rest) = line.strip_prefix(AGE_GROUP) {
        context.age_group = rest.trim().to_string();
    } else if let Some(rest) = line.strip_prefix(SOCIAL_SETTING) {
        context.social_setting = rest.trim().to_string();
    } else if let Some(rest) = line.strip_prefix(REGION_SPECIFICITY) {
        context.region_specificity = rest.trim().to_string();
    } else if let Some(rest) = line.strip_prefix(ADDITIONAL_NOTES) {
        context.additional_notes = Some(rest.trim().to_string());
    }
}

/// Parse a markdown document into validated records.
///
/// Never fails: rejected candidates are reported in
/// [`IngestReport::errors`] as `Term "<term>": <messages>`.
pub fn parse_markdown(text: &str) -> IngestReport {
    let mut report = IngestReport::default();
    let mut state = ParserState::default();

    for line in text.lines() {
        state.consume(line, &mut report);
    }
    state.finalize(&mut report);

    report
}

/// Read and parse the document at `path`.
///
/// A read failure yields zero records and a single error.
pub fn load_document(path: &Path) -> IngestReport {
    match std::fs::read_to_string(path) {
        Ok(text) => parse_markdown(&text),
        Err(e) => IngestReport {
            records: Vec::new(),
            errors: vec![format!("Error reading file: {}: {}", path.display(), e)],
        },
    }
}

/// CLI entry point for `slang check`: ingest the configured document and
/// report what was accepted and rejected.
pub fn run_check(config: &Config) -> Result<()> {
    let report = load_document(&config.data.path);

    println!("check {}", config.data.path.display());
    println!("  accepted: {} terms", report.records.len());
    println!("  rejected: {}", report.errors.len());
    for error in &report.errors {
        println!("    - {}", error);
    }

    if !report.errors.is_empty() {
        bail!("{} problem(s) found in {}", report.errors.len(), config.data.path.display());
    }

    println!("ok");
    Ok(())
}
