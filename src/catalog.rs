//! The in-memory record set.
//!
//! A [`Catalog`] is built once (from the source document or from fixtures)
//! and is read-only afterwards. The server shares it behind an `Arc`; the
//! query and pagination engines borrow its records as a slice.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::path::Path;
use tracing::{info, warn};

use crate::ingest::load_document;
use crate::models::SlangRecord;

/// Immutable collection of validated records plus the diagnostics produced
/// while loading them.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<SlangRecord>,
    by_id: HashMap<String, usize>,
    errors: Vec<String>,
    loaded_at: DateTime<Utc>,
}

impl Catalog {
    /// Ingest the document at `path`.
    ///
    /// Never fails: an unreadable document produces an empty catalog whose
    /// [`errors`](Self::errors) describe the read failure.
    pub fn load(path: &Path) -> Self {
        let report = load_document(path);

        info!(
            path = %path.display(),
            terms = report.records.len(),
            rejected = report.errors.len(),
            "catalog loaded"
        );
        for error in &report.errors {
            warn!("{}", error);
        }

        Self::build(report.records, report.errors)
    }

    /// Build a catalog directly from already-validated records.
    pub fn from_records(records: Vec<SlangRecord>) -> Self {
        Self::build(records, Vec::new())
    }

    fn build(records: Vec<SlangRecord>, errors: Vec<String>) -> Self {
        let mut by_id = HashMap::with_capacity(records.len());
        for (pos, record) in records.iter().enumerate() {
            by_id.entry(record.id.clone()).or_insert(pos);
        }

        Self {
            records,
            by_id,
            errors,
            loaded_at: Utc::now(),
        }
    }

    pub fn records(&self) -> &[SlangRecord] {
        &self.records
    }

    /// Diagnostics collected while loading (read failure or rejected terms).
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// Look up a record by id.
    pub fn get(&self, id: &str) -> Option<&SlangRecord> {
        self.by_id.get(id).map(|&pos| &self.records[pos])
    }
}
