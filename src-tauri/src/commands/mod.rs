//! Tauri IPC command handlers.
//!
//! Sub-modules are grouped by editor page:
//! - [`catalog`]    — projects, skills and the skill grouping
//! - [`home`]       — hero banner, highlight statistics, about paragraphs
//! - [`profile`]    — experiences, soft skills, certifications
//! - [`tech_watch`] — tech-watch intro, topics, sources, roadmap
//! - [`contact`]    — contact details
//! - [`data`]       — snapshot, icon catalogue, reset, import and export
//!
//! All handlers follow the `_inner` + `#[tauri::command]` wrapper pattern:
//! - `_inner` functions take `&ContentStore` and contain the logic. They are
//!   synchronous and directly testable without Tauri.
//! - `#[tauri::command]` wrappers (compiled with the `desktop` feature)
//!   extract managed state and delegate to `_inner`.
//!
//! Entity payloads arrive as raw JSON and are sanitized by the store, so a
//! malformed field never fails a command.

#![cfg_attr(not(feature = "desktop"), allow(dead_code))]

pub mod catalog;
pub mod contact;
pub mod data;
pub mod home;
pub mod profile;
pub mod tech_watch;

use serde_json::Value;

use crate::error::AppError;
use crate::store::{ContentStore, Record};

/// Testable inner logic shared by every `list_*` command.
pub(crate) fn list_inner<R: Record>(store: &ContentStore) -> Result<Vec<R>, AppError> {
    store.list::<R>()
}

/// Testable inner logic shared by every `add_*` command.
///
/// Any `id` in `input` is ignored; the created entity gets a fresh one.
pub(crate) fn add_inner<R: Record>(input: &Value, store: &ContentStore) -> Result<R, AppError> {
    store.add::<R>(input)
}

/// Testable inner logic shared by every `update_*` entity command.
///
/// Returns `None` when no entity has `id`; the frontend treats that as a
/// stale view and reloads.
pub(crate) fn update_inner<R: Record>(
    id: &str,
    input: &Value,
    store: &ContentStore,
) -> Result<Option<R>, AppError> {
    store.update::<R>(id, input)
}

/// Testable inner logic shared by every `delete_*` command.
pub(crate) fn delete_inner<R: Record>(id: &str, store: &ContentStore) -> Result<bool, AppError> {
    store.delete::<R>(id)
}
