//! Core data models used throughout the lexicon.
//!
//! These types represent the slang records produced by ingestion and the
//! response shapes returned by the query and pagination engines. All of
//! them serialize with camelCase field names, matching the JSON shapes
//! served over HTTP.

use serde::{Deserialize, Serialize};

/// A single example sentence showing a term in use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageExample {
    pub example: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

/// Who uses a term, where, and how widely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CulturalContext {
    pub age_group: String,
    pub social_setting: String,
    pub region_specificity: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_notes: Option<String>,
}

/// One slang-term entry in the catalog.
///
/// Records are only admitted to a [`Catalog`](crate::catalog::Catalog)
/// after passing [`validate_record`](crate::validate::validate_record).
/// The `id` is assigned at ingestion time (`term-1`, `term-2`, …) and
/// never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlangRecord {
    pub id: String,
    pub term: String,
    pub definition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formal_translation: Option<String>,
    pub usage_examples: Vec<UsageExample>,
    pub cultural_context: CulturalContext,
    /// ISO 8601.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// ISO 8601.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Outcome of a search over the catalog.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    /// Exact matches first, then partial matches, each in catalog order.
    pub results: Vec<SlangRecord>,
    pub total_results: usize,
    /// Wall-clock duration of the search in milliseconds.
    pub execution_time: f64,
}

impl SearchResponse {
    pub fn empty(execution_time: f64) -> Self {
        Self {
            results: Vec::new(),
            total_results: 0,
            execution_time,
        }
    }
}

/// One page of the alphabetically sorted catalog.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Effective page number after clamping.
    pub page: i64,
    pub limit: i64,
    pub total_items: usize,
    pub total_pages: i64,
    pub items: Vec<SlangRecord>,
}
