//! Schema validation for slang records and engine responses.
//!
//! Validators operate on dynamic [`serde_json::Value`]s so that absent
//! fields and wrongly typed fields are both representable. They never
//! fail: every rule violation becomes one message in the returned
//! [`ValidationReport`], in a fixed field order.
//!
//! # Record rules
//!
//! | Field | Rule |
//! |-------|------|
//! | `id`, `term`, `definition` | string with non-whitespace content |
//! | `formalTranslation`, `createdAt`, `updatedAt` | string if present |
//! | `usageExamples` | non-empty array of valid usage examples |
//! | `culturalContext` | present and valid |

use serde::Serialize;
use serde_json::Value;

use crate::models::SlangRecord;

/// Result of validating one value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationReport {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// All messages joined with `", "`.
    pub fn joined(&self) -> String {
        self.errors.join(", ")
    }
}

impl SlangRecord {
    /// Validates this record through its JSON representation.
    pub fn validate(&self) -> ValidationReport {
        match serde_json::to_value(self) {
            Ok(value) => validate_record(&value),
            Err(e) => ValidationReport::from_errors(vec![format!(
                "record could not be serialized: {}",
                e
            )]),
        }
    }
}

fn is_non_empty_str(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::String(s)) if !s.trim().is_empty())
}

/// Absent is fine; present must be a string (empty allowed).
fn is_optional_str(value: Option<&Value>) -> bool {
    matches!(value, None | Some(Value::String(_)))
}

fn is_number_at_least(value: Option<&Value>, min: f64) -> bool {
    value.and_then(Value::as_f64).is_some_and(|n| n >= min)
}

fn require_non_empty(obj: &Value, field: &str, errors: &mut Vec<String>) {
    if !is_non_empty_str(obj.get(field)) {
        errors.push(format!("\"{}\" must be a non-empty string", field));
    }
}

fn require_optional_str(obj: &Value, field: &str, errors: &mut Vec<String>) {
    if !is_optional_str(obj.get(field)) {
        errors.push(format!("\"{}\" must be a string if provided", field));
    }
}

/// Validates a single usage example: non-empty `example`, optional string `context`.
pub fn validate_usage_example(value: &Value) -> ValidationReport {
    if !value.is_object() {
        return ValidationReport::from_errors(vec!["usage example must be an object".to_string()]);
    }

    let mut errors = Vec::new();
    require_non_empty(value, "example", &mut errors);
    require_optional_str(value, "context", &mut errors);
    ValidationReport::from_errors(errors)
}

/// Validates a cultural context block.
pub fn validate_cultural_context(value: &Value) -> ValidationReport {
    if !value.is_object() {
        return ValidationReport::from_errors(vec![
            "cultural context must be an object".to_string()
        ]);
    }

    let mut errors = Vec::new();
    require_non_empty(value, "ageGroup", &mut errors);
    require_non_empty(value, "socialSetting", &mut errors);
    require_non_empty(value, "regionSpecificity", &mut errors);
    require_optional_str(value, "additionalNotes", &mut errors);
    ValidationReport::from_errors(errors)
}

/// Validates a candidate slang record against the full schema.
pub fn validate_record(value: &Value) -> ValidationReport {
    if !value.is_object() {
        return ValidationReport::from_errors(vec!["record must be an object".to_string()]);
    }

    let mut errors = Vec::new();
    require_non_empty(value, "id", &mut errors);
    require_non_empty(value, "term", &mut errors);
    require_non_empty(value, "definition", &mut errors);
    require_optional_str(value, "formalTranslation", &mut errors);

    match value.get("usageExamples") {
        Some(Value::Array(examples)) if examples.is_empty() => {
            errors.push("\"usageExamples\" must contain at least one example".to_string());
        }
        Some(Value::Array(examples)) => {
            for (index, example) in examples.iter().enumerate() {
                let report = validate_usage_example(example);
                if !report.is_valid {
                    errors.push(format!(
                        "Usage example at index {}: {}",
                        index,
                        report.joined()
                    ));
                }
            }
        }
        _ => errors.push("\"usageExamples\" must be an array".to_string()),
    }

    match value.get("culturalContext") {
        None | Some(Value::Null) => {
            errors.push("\"culturalContext\" is required".to_string());
        }
        Some(context) => {
            let report = validate_cultural_context(context);
            if !report.is_valid {
                errors.push(format!("Cultural context: {}", report.joined()));
            }
        }
    }

    require_optional_str(value, "createdAt", &mut errors);
    require_optional_str(value, "updatedAt", &mut errors);

    ValidationReport::from_errors(errors)
}

/// Validates every record in an array, prefixing failures with `label` and index.
fn validate_record_array(value: Option<&Value>, field: &str, label: &str, errors: &mut Vec<String>) {
    match value {
        Some(Value::Array(records)) => {
            for (index, record) in records.iter().enumerate() {
                let report = validate_record(record);
                if !report.is_valid {
                    errors.push(format!("{} at index {}: {}", label, index, report.joined()));
                }
            }
        }
        _ => errors.push(format!("\"{}\" must be an array", field)),
    }
}

/// Validates the JSON shape of a search response.
///
/// `query` is optional because the engine itself does not echo it; the
/// HTTP layer adds it.
pub fn validate_search_response(value: &Value) -> ValidationReport {
    if !value.is_object() {
        return ValidationReport::from_errors(vec![
            "search response must be an object".to_string()
        ]);
    }

    let mut errors = Vec::new();
    require_optional_str(value, "query", &mut errors);
    if !is_number_at_least(value.get("totalResults"), 0.0) {
        errors.push("\"totalResults\" must be a number >= 0".to_string());
    }
    validate_record_array(value.get("results"), "results", "Result", &mut errors);
    if !is_number_at_least(value.get("executionTime"), 0.0) {
        errors.push("\"executionTime\" must be a number >= 0".to_string());
    }
    ValidationReport::from_errors(errors)
}

/// Validates the JSON shape of a browse page.
pub fn validate_page(value: &Value) -> ValidationReport {
    if !value.is_object() {
        return ValidationReport::from_errors(vec!["page must be an object".to_string()]);
    }

    let mut errors = Vec::new();
    for (field, min) in [
        ("page", 1.0),
        ("limit", 1.0),
        ("totalItems", 0.0),
        ("totalPages", 0.0),
    ] {
        if !is_number_at_least(value.get(field), min) {
            errors.push(format!("\"{}\" must be a number >= {}", field, min));
        }
    }
    validate_record_array(value.get("items"), "items", "Item", &mut errors);
    ValidationReport::from_errors(errors)
}
