//! Tech-watch IPC command handlers: intro block, focus topics, sources and
//! roadmap steps.

use serde_json::Value;

use crate::error::AppError;
use crate::models::{TechWatchContent, TechWatchIntro};
use crate::store::ContentStore;

#[cfg(feature = "desktop")]
use super::{add_inner, delete_inner, update_inner};
#[cfg(feature = "desktop")]
use crate::models::{TechWatchRoadmapStep, TechWatchSource, TechWatchTopic};
#[cfg(feature = "desktop")]
use crate::state::AppState;

// ── get_tech_watch ────────────────────────────────────────────────────────────

/// Testable inner logic for [`get_tech_watch`].
///
/// The intro and all three lists in one read.
pub(crate) fn get_tech_watch_inner(store: &ContentStore) -> Result<TechWatchContent, AppError> {
    Ok(store.content()?.tech_watch)
}

// ── update_tech_watch_intro ───────────────────────────────────────────────────

/// Testable inner logic for [`update_tech_watch_intro`].
///
/// Only `badge`, `title` and `description` are read from `input`; a blank
/// badge or title keeps the current one.
pub(crate) fn update_tech_watch_intro_inner(
    input: &Value,
    store: &ContentStore,
) -> Result<TechWatchIntro, AppError> {
    store.update_tech_watch_intro(input)
}

// ── Tauri command wrappers ────────────────────────────────────────────────────

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn get_tech_watch(
    state: tauri::State<'_, AppState>,
) -> Result<TechWatchContent, AppError> {
    get_tech_watch_inner(&state.store)
}

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn update_tech_watch_intro(
    input: Value,
    state: tauri::State<'_, AppState>,
) -> Result<TechWatchIntro, AppError> {
    update_tech_watch_intro_inner(&input, &state.store)
}

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn add_tech_watch_topic(
    input: Value,
    state: tauri::State<'_, AppState>,
) -> Result<TechWatchTopic, AppError> {
    add_inner(&input, &state.store)
}

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn update_tech_watch_topic(
    id: String,
    input: Value,
    state: tauri::State<'_, AppState>,
) -> Result<Option<TechWatchTopic>, AppError> {
    update_inner(&id, &input, &state.store)
}

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn delete_tech_watch_topic(
    id: String,
    state: tauri::State<'_, AppState>,
) -> Result<bool, AppError> {
    delete_inner::<TechWatchTopic>(&id, &state.store)
}

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn add_tech_watch_source(
    input: Value,
    state: tauri::State<'_, AppState>,
) -> Result<TechWatchSource, AppError> {
    add_inner(&input, &state.store)
}

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn update_tech_watch_source(
    id: String,
    input: Value,
    state: tauri::State<'_, AppState>,
) -> Result<Option<TechWatchSource>, AppError> {
    update_inner(&id, &input, &state.store)
}

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn delete_tech_watch_source(
    id: String,
    state: tauri::State<'_, AppState>,
) -> Result<bool, AppError> {
    delete_inner::<TechWatchSource>(&id, &state.store)
}

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn add_tech_watch_roadmap_step(
    input: Value,
    state: tauri::State<'_, AppState>,
) -> Result<TechWatchRoadmapStep, AppError> {
    add_inner(&input, &state.store)
}

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn update_tech_watch_roadmap_step(
    id: String,
    input: Value,
    state: tauri::State<'_, AppState>,
) -> Result<Option<TechWatchRoadmapStep>, AppError> {
    update_inner(&id, &input, &state.store)
}

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn delete_tech_watch_roadmap_step(
    id: String,
    state: tauri::State<'_, AppState>,
) -> Result<bool, AppError> {
    delete_inner::<TechWatchRoadmapStep>(&id, &state.store)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
