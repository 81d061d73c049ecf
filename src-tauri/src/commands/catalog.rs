//! Project and skill IPC command handlers.

use crate::error::AppError;
use crate::models::SkillGroup;
use crate::store::ContentStore;

#[cfg(feature = "desktop")]
use super::{add_inner, delete_inner, list_inner, update_inner};
#[cfg(feature = "desktop")]
use crate::models::{Project, Skill};
#[cfg(feature = "desktop")]
use crate::state::AppState;
#[cfg(feature = "desktop")]
use serde_json::Value;

// ── get_skill_groups ──────────────────────────────────────────────────────────

/// Testable inner logic for [`get_skill_groups`].
///
/// Skills grouped by category, categories in order of first appearance.
pub(crate) fn get_skill_groups_inner(store: &ContentStore) -> Result<Vec<SkillGroup>, AppError> {
    store.skill_groups()
}

// ── Tauri command wrappers ────────────────────────────────────────────────────

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn list_projects(state: tauri::State<'_, AppState>) -> Result<Vec<Project>, AppError> {
    list_inner(&state.store)
}

/// Add a project. The id is generated server-side and returned with the
/// sanitized project.
#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn add_project(
    input: Value,
    state: tauri::State<'_, AppState>,
) -> Result<Project, AppError> {
    add_inner(&input, &state.store)
}

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn update_project(
    id: String,
    input: Value,
    state: tauri::State<'_, AppState>,
) -> Result<Option<Project>, AppError> {
    update_inner(&id, &input, &state.store)
}

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn delete_project(
    id: String,
    state: tauri::State<'_, AppState>,
) -> Result<bool, AppError> {
    delete_inner::<Project>(&id, &state.store)
}

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn list_skills(state: tauri::State<'_, AppState>) -> Result<Vec<Skill>, AppError> {
    list_inner(&state.store)
}

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn add_skill(input: Value, state: tauri::State<'_, AppState>) -> Result<Skill, AppError> {
    add_inner(&input, &state.store)
}

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn update_skill(
    id: String,
    input: Value,
    state: tauri::State<'_, AppState>,
) -> Result<Option<Skill>, AppError> {
    update_inner(&id, &input, &state.store)
}

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn delete_skill(id: String, state: tauri::State<'_, AppState>) -> Result<bool, AppError> {
    delete_inner::<Skill>(&id, &state.store)
}

/// Skills grouped the way the Skills page shows them.
#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn get_skill_groups(
    state: tauri::State<'_, AppState>,
) -> Result<Vec<SkillGroup>, AppError> {
    get_skill_groups_inner(&state.store)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
