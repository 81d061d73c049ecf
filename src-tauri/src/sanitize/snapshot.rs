//! Top-level sanitizer for a whole stored document.

use serde_json::{Map, Value};

use super::{sanitize_content, sanitize_list};
use crate::models::PortfolioSnapshot;

/// Content keys that older documents stored at the top level instead of
/// under `content`.
const FLAT_CONTENT_KEYS: [&str; 8] = [
    "hero",
    "highlights",
    "about",
    "experiences",
    "softSkills",
    "certifications",
    "techWatch",
    "contact",
];

/// Why a document was rejected as a whole.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    /// The document is not a JSON object.
    #[error("invalid data format: expected a JSON object")]
    InvalidFormat,

    /// The document is an object but carries none of the known keys.
    #[error("the JSON document contains no recognized content")]
    NoRecognizedContent,
}

/// Normalize a full document against `fallback`.
///
/// Each of `projects`, `skills` and `content` is sanitized when present with
/// the right shape and taken from `fallback` otherwise. A document without a
/// `content` key may carry the content blocks at the top level; they are
/// gathered and treated as if nested.
pub fn sanitize_stored_data(
    raw: &Value,
    fallback: &PortfolioSnapshot,
) -> Result<PortfolioSnapshot, SnapshotError> {
    let doc = raw.as_object().ok_or(SnapshotError::InvalidFormat)?;

    let flat = if doc.contains_key("content") {
        None
    } else {
        gather_flat_content(doc)
    };
    let content = doc.get("content").or(flat.as_ref());

    let has_projects = doc.contains_key("projects");
    let has_skills = doc.contains_key("skills");
    if !has_projects && !has_skills && content.is_none() {
        return Err(SnapshotError::NoRecognizedContent);
    }

    let projects = match doc.get("projects").and_then(Value::as_array) {
        Some(items) => sanitize_list(items),
        None => fallback.projects.clone(),
    };
    let skills = match doc.get("skills").and_then(Value::as_array) {
        Some(items) => sanitize_list(items),
        None => fallback.skills.clone(),
    };
    let content = match content {
        Some(content) => sanitize_content(content, &fallback.content),
        None => fallback.content.clone(),
    };

    Ok(PortfolioSnapshot {
        projects,
        skills,
        content,
    })
}

fn gather_flat_content(doc: &Map<String, Value>) -> Option<Value> {
    let gathered: Map<String, Value> = FLAT_CONTENT_KEYS
        .iter()
        .filter_map(|key| doc.get(*key).map(|value| (key.to_string(), value.clone())))
        .collect();
    if gathered.is_empty() {
        None
    } else {
        tracing::debug!(keys = gathered.len(), "reading flat content layout");
        Some(Value::Object(gathered))
    }
}
