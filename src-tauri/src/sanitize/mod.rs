//! Total normalizers from untrusted JSON to the content model.
//!
//! Every function here accepts any [`serde_json::Value`] and returns a valid
//! model value. Malformed fields are healed silently: blank required strings
//! take a fixed default (entities) or the fallback's value (singleton
//! blocks), unknown enum keys map to their default, string lists are trimmed
//! and stripped of blanks. Only [`sanitize_stored_data`] can fail, and only
//! when the top-level document is unusable as a whole.

pub mod blocks;
pub mod entities;
pub mod snapshot;

use std::collections::HashSet;

use serde_json::Value;
use uuid::Uuid;

use crate::models::Entity;

pub use blocks::{
    clean_paragraphs, merge_tech_watch_intro, sanitize_contact, sanitize_content, sanitize_hero,
    sanitize_tech_watch,
};
pub use entities::{
    sanitize_certification, sanitize_experience, sanitize_highlight, sanitize_project,
    sanitize_roadmap_step, sanitize_skill, sanitize_soft_skill, sanitize_tech_watch_source,
    sanitize_tech_watch_topic,
};
pub use snapshot::{sanitize_stored_data, SnapshotError};

/// A collection entity that can be rebuilt from arbitrary JSON.
pub trait Sanitize: Entity {
    fn sanitize(raw: &Value) -> Self;
}

/// A fresh random id (UUID v4, hyphenated).
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Sanitize every element of `items`, re-keying any id already used earlier
/// in the same list.
pub fn sanitize_list<T: Sanitize>(items: &[Value]) -> Vec<T> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .map(|raw| {
            let mut entity = T::sanitize(raw);
            if !seen.insert(entity.id().to_string()) {
                let id = new_id();
                tracing::debug!(kind = T::KIND, id = %id, "re-keyed duplicate id");
                seen.insert(id.clone());
                entity.set_id(id);
            }
            entity
        })
        .collect()
}

/// Re-run the sanitizer over an already typed list.
///
/// Used when a block falls back to its fallback's list, so the result obeys
/// the same invariants as freshly sanitized input.
pub(crate) fn resanitize<T: Sanitize>(items: &[T]) -> Vec<T> {
    let raw: Vec<Value> = items
        .iter()
        .filter_map(|item| serde_json::to_value(item).ok())
        .collect();
    sanitize_list(&raw)
}

pub(crate) fn field<'a>(raw: &'a Value, key: &str) -> Option<&'a Value> {
    raw.as_object()?.get(key)
}

pub(crate) fn text_key<'a>(raw: &'a Value, key: &str) -> Option<&'a str> {
    field(raw, key)?.as_str()
}

fn non_blank(s: &str) -> bool {
    !s.trim().is_empty()
}

/// A string with visible content, kept as written; `default` otherwise.
pub(crate) fn required_str(raw: &Value, key: &str, default: &str) -> String {
    match text_key(raw, key) {
        Some(s) if non_blank(s) => s.to_string(),
        _ => default.to_string(),
    }
}

/// Any string, including empty; `default` when missing or not a string.
pub(crate) fn free_str(raw: &Value, key: &str, default: &str) -> String {
    text_key(raw, key).unwrap_or(default).to_string()
}

pub(crate) fn bool_field(raw: &Value, key: &str, default: bool) -> bool {
    field(raw, key).and_then(Value::as_bool).unwrap_or(default)
}

/// The `id` field when it is a non-blank string, a fresh id otherwise.
pub(crate) fn id_field(raw: &Value) -> String {
    match text_key(raw, "id") {
        Some(id) if non_blank(id) => id.to_string(),
        _ => new_id(),
    }
}

/// The string elements of the array at `key`, trimmed, blanks dropped.
pub(crate) fn string_list(raw: &Value, key: &str) -> Vec<String> {
    field(raw, key).map(clean_strings).unwrap_or_default()
}

/// Trimmed non-blank string elements of `value`; empty unless it is an array.
pub(crate) fn clean_strings(value: &Value) -> Vec<String> {
    let Some(items) = value.as_array() else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
