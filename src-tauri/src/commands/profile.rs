//! Experience, soft skill and certification IPC command handlers.
//!
//! These are plain collection CRUD; the logic lives in the shared `_inner`
//! functions of the parent module.

#[cfg(feature = "desktop")]
use serde_json::Value;

#[cfg(feature = "desktop")]
use super::{add_inner, delete_inner, list_inner, update_inner};
#[cfg(feature = "desktop")]
use crate::error::AppError;
#[cfg(feature = "desktop")]
use crate::models::{Certification, Experience, SoftSkill};
#[cfg(feature = "desktop")]
use crate::state::AppState;

// ── Experiences ───────────────────────────────────────────────────────────────

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn list_experiences(
    state: tauri::State<'_, AppState>,
) -> Result<Vec<Experience>, AppError> {
    list_inner(&state.store)
}

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn add_experience(
    input: Value,
    state: tauri::State<'_, AppState>,
) -> Result<Experience, AppError> {
    add_inner(&input, &state.store)
}

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn update_experience(
    id: String,
    input: Value,
    state: tauri::State<'_, AppState>,
) -> Result<Option<Experience>, AppError> {
    update_inner(&id, &input, &state.store)
}

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn delete_experience(
    id: String,
    state: tauri::State<'_, AppState>,
) -> Result<bool, AppError> {
    delete_inner::<Experience>(&id, &state.store)
}

// ── Soft skills ───────────────────────────────────────────────────────────────

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn list_soft_skills(
    state: tauri::State<'_, AppState>,
) -> Result<Vec<SoftSkill>, AppError> {
    list_inner(&state.store)
}

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn add_soft_skill(
    input: Value,
    state: tauri::State<'_, AppState>,
) -> Result<SoftSkill, AppError> {
    add_inner(&input, &state.store)
}

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn update_soft_skill(
    id: String,
    input: Value,
    state: tauri::State<'_, AppState>,
) -> Result<Option<SoftSkill>, AppError> {
    update_inner(&id, &input, &state.store)
}

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn delete_soft_skill(
    id: String,
    state: tauri::State<'_, AppState>,
) -> Result<bool, AppError> {
    delete_inner::<SoftSkill>(&id, &state.store)
}

// ── Certifications ────────────────────────────────────────────────────────────

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn list_certifications(
    state: tauri::State<'_, AppState>,
) -> Result<Vec<Certification>, AppError> {
    list_inner(&state.store)
}

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn add_certification(
    input: Value,
    state: tauri::State<'_, AppState>,
) -> Result<Certification, AppError> {
    add_inner(&input, &state.store)
}

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn update_certification(
    id: String,
    input: Value,
    state: tauri::State<'_, AppState>,
) -> Result<Option<Certification>, AppError> {
    update_inner(&id, &input, &state.store)
}

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn delete_certification(
    id: String,
    state: tauri::State<'_, AppState>,
) -> Result<bool, AppError> {
    delete_inner::<Certification>(&id, &state.store)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
