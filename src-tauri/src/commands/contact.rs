//! Contact details IPC command handler.

use serde_json::Value;

use crate::error::AppError;
use crate::models::ContactInfo;
use crate::store::ContentStore;

#[cfg(feature = "desktop")]
use crate::state::AppState;

/// Testable inner logic for [`update_contact`].
///
/// Missing or blank fields keep their current value. A second location line
/// sent as blank or `null` removes it; a missing one is kept.
pub(crate) fn update_contact_inner(
    input: &Value,
    store: &ContentStore,
) -> Result<ContactInfo, AppError> {
    store.update_contact(input)
}

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn update_contact(
    input: Value,
    state: tauri::State<'_, AppState>,
) -> Result<ContactInfo, AppError> {
    update_contact_inner(&input, &state.store)
}
