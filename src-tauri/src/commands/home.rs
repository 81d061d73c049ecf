//! Home page IPC command handlers: hero banner, highlights, about text.

use serde_json::Value;

use crate::error::AppError;
use crate::models::{HeroContent, HighlightCard};
use crate::store::ContentStore;

#[cfg(feature = "desktop")]
use super::{add_inner, delete_inner, list_inner, update_inner};
#[cfg(feature = "desktop")]
use crate::models::Highlight;
#[cfg(feature = "desktop")]
use crate::state::AppState;

// ── update_hero ───────────────────────────────────────────────────────────────

/// Testable inner logic for [`update_hero`].
///
/// Fields that are missing or blank in `input` take the default hero's value.
pub(crate) fn update_hero_inner(
    input: &Value,
    store: &ContentStore,
) -> Result<HeroContent, AppError> {
    store.update_hero(input)
}

// ── update_about ──────────────────────────────────────────────────────────────

/// Testable inner logic for [`update_about`].
///
/// Paragraphs are trimmed and blank ones dropped; returns what was stored.
pub(crate) fn update_about_inner(
    paragraphs: &[String],
    store: &ContentStore,
) -> Result<Vec<String>, AppError> {
    store.update_about(paragraphs)
}

// ── get_highlight_cards ───────────────────────────────────────────────────────

/// Testable inner logic for [`get_highlight_cards`].
pub(crate) fn get_highlight_cards_inner(
    store: &ContentStore,
) -> Result<Vec<HighlightCard>, AppError> {
    store.highlight_cards()
}

// ── Tauri command wrappers ────────────────────────────────────────────────────

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn update_hero(
    input: Value,
    state: tauri::State<'_, AppState>,
) -> Result<HeroContent, AppError> {
    update_hero_inner(&input, &state.store)
}

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn update_about(
    paragraphs: Vec<String>,
    state: tauri::State<'_, AppState>,
) -> Result<Vec<String>, AppError> {
    update_about_inner(&paragraphs, &state.store)
}

/// Highlights with their values computed from the current collections.
#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn get_highlight_cards(
    state: tauri::State<'_, AppState>,
) -> Result<Vec<HighlightCard>, AppError> {
    get_highlight_cards_inner(&state.store)
}

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn list_highlights(
    state: tauri::State<'_, AppState>,
) -> Result<Vec<Highlight>, AppError> {
    list_inner(&state.store)
}

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn add_highlight(
    input: Value,
    state: tauri::State<'_, AppState>,
) -> Result<Highlight, AppError> {
    add_inner(&input, &state.store)
}

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn update_highlight(
    id: String,
    input: Value,
    state: tauri::State<'_, AppState>,
) -> Result<Option<Highlight>, AppError> {
    update_inner(&id, &input, &state.store)
}

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn delete_highlight(
    id: String,
    state: tauri::State<'_, AppState>,
) -> Result<bool, AppError> {
    delete_inner::<Highlight>(&id, &state.store)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
