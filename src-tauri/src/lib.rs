pub mod commands;
pub mod config;
pub mod defaults;
pub mod error;
pub mod logging;
pub mod models;
pub mod sanitize;
pub mod state;
pub mod store;

/// Event emitted to the webview after every content change; the payload is
/// the new revision number.
pub const CHANGED_EVENT: &str = "portfolio://changed";

/// Portfolio Studio Tauri application library entry point.
///
/// All Tauri builder setup lives here so it can be tested and referenced
/// by the thin `main.rs` binary wrapper.
#[cfg(feature = "desktop")]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    use tauri::{Emitter, Manager};

    use config::StudioConfig;
    use state::AppState;

    // ── Configuration ────────────────────────────────────────────────────────
    //
    // Read before tracing so `log_level` can seed the filter; a broken file
    // is reported once tracing is up.
    let data_dir = config::app_data_dir();
    let (studio_config, config_error) =
        match StudioConfig::load(&data_dir.join(config::CONFIG_FILE_NAME)) {
            Ok(cfg) => (cfg, None),
            Err(e) => (StudioConfig::default(), Some(e)),
        };

    // ── Tracing setup ────────────────────────────────────────────────────────
    //
    // Logs are written to a single file in the OS data dir:
    //   Linux    ~/.local/share/portfolio-studio/portfolio-studio.log
    //   macOS    ~/Library/Application Support/portfolio-studio/portfolio-studio.log
    //   Windows  %LOCALAPPDATA%\portfolio-studio\portfolio-studio.log
    //
    // RUST_LOG overrides the configured level.
    let _tracing_guard = logging::init(&data_dir, &studio_config.log_level);

    tracing::info!("Portfolio Studio starting");
    if let Some(e) = config_error {
        tracing::warn!(error = %e, "invalid configuration; using defaults");
    }

    // ── Application state ────────────────────────────────────────────────────
    let state = AppState::new(studio_config);

    // ── Tauri builder ────────────────────────────────────────────────────────
    tauri::Builder::default()
        .manage(state)
        .plugin(tauri_plugin_dialog::init())
        .plugin(tauri_plugin_fs::init())
        .setup(|app| {
            let handle = app.handle().clone();

            // Forward every revision bump to the webview.
            let mut changes = handle.state::<AppState>().store.subscribe();
            let emitter = handle.clone();
            tauri::async_runtime::spawn(async move {
                while changes.changed().await.is_ok() {
                    let revision = *changes.borrow_and_update();
                    if let Err(e) = emitter.emit(CHANGED_EVENT, revision) {
                        tracing::warn!(error = %e, "cannot emit change event");
                    }
                }
            });

            // Load once in the background; reads serve defaults meanwhile.
            let bootstrap = resolve_bootstrap(&handle, &handle.state::<AppState>().config);
            tauri::async_runtime::spawn(async move {
                let state = handle.state::<AppState>();
                if let Err(e) = state.store.load(&bootstrap, &state.load_guard).await {
                    tracing::warn!(error = %e, "content load failed");
                }
            });
            Ok(())
        })
        .on_window_event(|window, event| {
            if let tauri::WindowEvent::Destroyed = event {
                window.state::<AppState>().load_guard.cancel();
            }
        })
        .invoke_handler(tauri::generate_handler![
            commands::catalog::list_projects,
            commands::catalog::add_project,
            commands::catalog::update_project,
            commands::catalog::delete_project,
            commands::catalog::list_skills,
            commands::catalog::add_skill,
            commands::catalog::update_skill,
            commands::catalog::delete_skill,
            commands::catalog::get_skill_groups,
            commands::home::update_hero,
            commands::home::update_about,
            commands::home::get_highlight_cards,
            commands::home::list_highlights,
            commands::home::add_highlight,
            commands::home::update_highlight,
            commands::home::delete_highlight,
            commands::profile::list_experiences,
            commands::profile::add_experience,
            commands::profile::update_experience,
            commands::profile::delete_experience,
            commands::profile::list_soft_skills,
            commands::profile::add_soft_skill,
            commands::profile::update_soft_skill,
            commands::profile::delete_soft_skill,
            commands::profile::list_certifications,
            commands::profile::add_certification,
            commands::profile::update_certification,
            commands::profile::delete_certification,
            commands::tech_watch::get_tech_watch,
            commands::tech_watch::update_tech_watch_intro,
            commands::tech_watch::add_tech_watch_topic,
            commands::tech_watch::update_tech_watch_topic,
            commands::tech_watch::delete_tech_watch_topic,
            commands::tech_watch::add_tech_watch_source,
            commands::tech_watch::update_tech_watch_source,
            commands::tech_watch::delete_tech_watch_source,
            commands::tech_watch::add_tech_watch_roadmap_step,
            commands::tech_watch::update_tech_watch_roadmap_step,
            commands::tech_watch::delete_tech_watch_roadmap_step,
            commands::contact::update_contact,
            commands::data::get_snapshot,
            commands::data::get_load_phase,
            commands::data::list_icons,
            commands::data::reset_data,
            commands::data::export_data,
            commands::data::export_data_to_dir,
            commands::data::import_data,
            commands::data::import_data_from_path,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

/// Locate the bootstrap document of a running app.
///
/// A relative `bootstrap_path` is first looked up among the frontend assets
/// embedded in the binary, then as a file under the resource directory.
/// The process working directory is never consulted.
#[cfg(feature = "desktop")]
fn resolve_bootstrap<R: tauri::Runtime>(
    app: &tauri::AppHandle<R>,
    config: &config::StudioConfig,
) -> store::BootstrapSource {
    use tauri::Manager;

    let path = &config.bootstrap_path;
    if path.as_os_str().is_empty() {
        return store::BootstrapSource::None;
    }
    if path.is_relative() {
        let key = path.to_string_lossy().replace('\\', "/");
        if let Some(asset) = app.asset_resolver().get(key) {
            tracing::debug!(path = %path.display(), "bootstrap document embedded in frontend");
            return store::BootstrapSource::Embedded(asset.bytes().to_vec());
        }
    }
    match app.path().resource_dir() {
        Ok(dir) => config.bootstrap_source(&dir),
        Err(e) => {
            tracing::warn!(error = %e, "no resource directory; bootstrap disabled unless absolute");
            if path.is_absolute() {
                store::BootstrapSource::File(path.clone())
            } else {
                store::BootstrapSource::None
            }
        }
    }
}
