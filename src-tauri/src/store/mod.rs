//! The content store: live snapshot, load chain, mutations, persistence.
//!
//! A [`ContentStore`] starts [`LoadPhase::Uninitialized`] holding the
//! hard-coded defaults, so reads work before anything is loaded. [`load`]
//! tries local storage, then the bootstrap document, then keeps the
//! defaults, and leaves the store [`LoadPhase::Ready`]. From then on every
//! state change writes the whole snapshot back to storage.
//!
//! Every state change also bumps a revision number published on a
//! [`tokio::sync::watch`] channel; see [`ContentStore::subscribe`].
//!
//! [`load`]: ContentStore::load

pub mod bootstrap;
pub mod record;
pub mod storage;
pub mod transfer;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde_json::Value;
use tokio::sync::watch;

use crate::defaults::default_snapshot;
use crate::error::AppError;
use crate::models::{
    ContactInfo, HeroContent, HighlightCard, PortfolioContent, PortfolioSnapshot, Project, Skill,
    SkillGroup, TechWatchIntro,
};
use crate::sanitize::{
    clean_paragraphs, merge_tech_watch_intro, new_id, sanitize_contact, sanitize_hero,
    sanitize_stored_data,
};

pub use bootstrap::BootstrapSource;
pub use record::Record;
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage, StorageError};
pub use transfer::export_file_name;

/// Default storage key for the persisted snapshot.
pub const DEFAULT_STORAGE_KEY: &str = "portfolio-data";

/// Where the store is in its one-shot load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LoadPhase {
    Uninitialized,
    Loading,
    Ready,
}

/// Which source the live state came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Storage,
    Bootstrap,
    Defaults,
    /// The guard was cancelled before the result could be applied.
    Cancelled,
}

/// Cancellation flag for an in-flight [`ContentStore::load`].
///
/// Clones share the flag; the host cancels it when its window goes away.
#[derive(Debug, Clone, Default)]
pub struct LoadGuard(Arc<AtomicBool>);

impl LoadGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

struct StoreInner {
    phase: LoadPhase,
    live: PortfolioSnapshot,
    /// Reset target; replaced by the bootstrap document when one is loaded.
    defaults: PortfolioSnapshot,
}

pub struct ContentStore {
    storage: Box<dyn KeyValueStorage>,
    storage_key: String,
    inner: RwLock<StoreInner>,
    revision: watch::Sender<u64>,
}

impl ContentStore {
    /// An [`LoadPhase::Uninitialized`] store serving the defaults; it enters
    /// [`LoadPhase::Loading`] when [`load`](Self::load) starts.
    pub fn new(storage: impl KeyValueStorage + 'static, storage_key: impl Into<String>) -> Self {
        let defaults = default_snapshot();
        let (revision, _) = watch::channel(0);
        Self {
            storage: Box::new(storage),
            storage_key: storage_key.into(),
            inner: RwLock::new(StoreInner {
                phase: LoadPhase::Uninitialized,
                live: defaults.clone(),
                defaults,
            }),
            revision,
        }
    }

    /// A store backed by [`MemoryStorage`] under [`DEFAULT_STORAGE_KEY`].
    pub fn in_memory() -> Self {
        Self::new(MemoryStorage::new(), DEFAULT_STORAGE_KEY)
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    // ── Locking ──────────────────────────────────────────────────────────────

    fn read(&self) -> Result<RwLockReadGuard<'_, StoreInner>, AppError> {
        self.inner
            .read()
            .map_err(|e| AppError::State(format!("store lock poisoned: {e}")))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, StoreInner>, AppError> {
        self.inner
            .write()
            .map_err(|e| AppError::State(format!("store lock poisoned: {e}")))
    }

    // ── Load ─────────────────────────────────────────────────────────────────

    /// Run the load chain: storage, then `bootstrap`, then defaults.
    ///
    /// Failures at each source are logged and skipped, so this only errors
    /// when the store itself is unusable or was already loaded. When `guard`
    /// is cancelled before the result is applied nothing changes and the
    /// store stays [`LoadPhase::Loading`].
    pub async fn load(
        &self,
        bootstrap: &BootstrapSource,
        guard: &LoadGuard,
    ) -> Result<LoadOutcome, AppError> {
        let fallback = {
            let mut inner = self.write()?;
            if inner.phase == LoadPhase::Ready {
                return Err(AppError::State("content store is already loaded".to_string()));
            }
            inner.phase = LoadPhase::Loading;
            inner.defaults.clone()
        };

        let (outcome, snapshot) = match self.read_stored(&fallback) {
            Some(snapshot) => (LoadOutcome::Storage, snapshot),
            None => match self.read_bootstrap(bootstrap, &fallback).await {
                Some(snapshot) => (LoadOutcome::Bootstrap, snapshot),
                None => (LoadOutcome::Defaults, fallback),
            },
        };

        let mut inner = self.write()?;
        if guard.is_cancelled() {
            tracing::info!("content load cancelled; result discarded");
            return Ok(LoadOutcome::Cancelled);
        }
        if outcome == LoadOutcome::Bootstrap {
            inner.defaults = snapshot.clone();
        }
        inner.live = snapshot;
        inner.phase = LoadPhase::Ready;
        self.bump();
        self.persist(&inner);
        tracing::info!(source = ?outcome, "portfolio content loaded");
        Ok(outcome)
    }

    fn read_stored(&self, fallback: &PortfolioSnapshot) -> Option<PortfolioSnapshot> {
        let text = match self.storage.get(&self.storage_key) {
            Ok(Some(text)) => text,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(error = %e, "cannot read stored portfolio data");
                return None;
            }
        };
        let parsed: Value = match serde_json::from_str(&text) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, "stored portfolio data is not valid JSON");
                return None;
            }
        };
        sanitize_stored_data(&parsed, fallback)
            .inspect_err(|e| tracing::warn!(error = %e, "stored portfolio data rejected"))
            .ok()
    }

    async fn read_bootstrap(
        &self,
        bootstrap: &BootstrapSource,
        fallback: &PortfolioSnapshot,
    ) -> Option<PortfolioSnapshot> {
        let raw = match bootstrap.fetch().await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(error = %e, "bootstrap document unavailable");
                return None;
            }
        };
        sanitize_stored_data(&raw, fallback)
            .inspect_err(|e| tracing::warn!(error = %e, "bootstrap document rejected"))
            .ok()
    }

    // ── Persistence and change notification ──────────────────────────────────

    fn bump(&self) {
        self.revision.send_modify(|revision| *revision += 1);
    }

    /// Write the live snapshot to storage; a no-op until the store is ready.
    /// Failures are logged and never surface to the caller.
    fn persist(&self, inner: &StoreInner) {
        if inner.phase != LoadPhase::Ready {
            return;
        }
        let text = match serde_json::to_string(&inner.live) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(error = %e, "cannot serialize portfolio data");
                return;
            }
        };
        if let Err(e) = self.storage.set(&self.storage_key, &text) {
            tracing::warn!(error = %e, "cannot persist portfolio data");
        }
    }

    /// Apply `f` to the live snapshot. `f` reports whether it changed
    /// anything; only then is the revision bumped and the snapshot persisted.
    fn mutate<T>(
        &self,
        f: impl FnOnce(&mut PortfolioSnapshot, &PortfolioSnapshot) -> (T, bool),
    ) -> Result<T, AppError> {
        let mut inner = self.write()?;
        let StoreInner { live, defaults, .. } = &mut *inner;
        let (result, changed) = f(live, defaults);
        if changed {
            self.bump();
            self.persist(&inner);
        }
        Ok(result)
    }

    /// Receives the revision number after every state change.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    pub fn revision(&self) -> u64 {
        *self.revision.borrow()
    }

    // ── Reads ────────────────────────────────────────────────────────────────

    pub fn phase(&self) -> Result<LoadPhase, AppError> {
        Ok(self.read()?.phase)
    }

    pub fn snapshot(&self) -> Result<PortfolioSnapshot, AppError> {
        Ok(self.read()?.live.clone())
    }

    pub fn projects(&self) -> Result<Vec<Project>, AppError> {
        self.list::<Project>()
    }

    pub fn skills(&self) -> Result<Vec<Skill>, AppError> {
        self.list::<Skill>()
    }

    pub fn content(&self) -> Result<PortfolioContent, AppError> {
        Ok(self.read()?.live.content.clone())
    }

    /// Any collection, cloned.
    pub fn list<R: Record>(&self) -> Result<Vec<R>, AppError> {
        Ok(R::collection(&self.read()?.live).clone())
    }

    /// Highlights with their display values resolved against the current
    /// project and skill counts.
    pub fn highlight_cards(&self) -> Result<Vec<HighlightCard>, AppError> {
        let inner = self.read()?;
        let live = &inner.live;
        Ok(live
            .content
            .highlights
            .iter()
            .map(|h| HighlightCard::resolve(h, live.projects.len(), live.skills.len()))
            .collect())
    }

    pub fn skill_groups(&self) -> Result<Vec<SkillGroup>, AppError> {
        Ok(SkillGroup::group(&self.read()?.live.skills))
    }

    // ── Collection CRUD ──────────────────────────────────────────────────────

    /// Sanitize `input` under a fresh id and append it.
    pub fn add<R: Record>(&self, input: &Value) -> Result<R, AppError> {
        let entity = R::sanitize(&with_id(input, new_id()));
        self.mutate(|live, _| {
            R::collection_mut(live).push(entity.clone());
            tracing::debug!(kind = R::KIND, id = entity.id(), "added");
            (entity, true)
        })
    }

    /// Replace the entity at `id` with sanitized `input`, keeping the id.
    /// `None` when no entity has that id; nothing changes then.
    pub fn update<R: Record>(&self, id: &str, input: &Value) -> Result<Option<R>, AppError> {
        let entity = R::sanitize(&with_id(input, id.to_string()));
        self.mutate(|live, _| {
            match R::collection_mut(live).iter_mut().find(|e| e.id() == id) {
                Some(slot) => {
                    *slot = entity.clone();
                    tracing::debug!(kind = R::KIND, id, "updated");
                    (Some(entity), true)
                }
                None => (None, false),
            }
        })
    }

    /// Remove the entity at `id`; returns whether one was removed.
    pub fn delete<R: Record>(&self, id: &str) -> Result<bool, AppError> {
        self.mutate(|live, _| {
            let items = R::collection_mut(live);
            let before = items.len();
            items.retain(|e| e.id() != id);
            let removed = items.len() != before;
            if removed {
                tracing::debug!(kind = R::KIND, id, "deleted");
            }
            (removed, removed)
        })
    }

    // ── Singletons ───────────────────────────────────────────────────────────

    /// Replace the hero block; missing fields come from the reset defaults.
    pub fn update_hero(&self, input: &Value) -> Result<HeroContent, AppError> {
        self.mutate(|live, defaults| {
            let hero = sanitize_hero(input, &defaults.content.hero);
            replace(&mut live.content.hero, hero)
        })
    }

    pub fn update_about(&self, paragraphs: &[String]) -> Result<Vec<String>, AppError> {
        self.mutate(|live, _| replace(&mut live.content.about, clean_paragraphs(paragraphs)))
    }

    /// Merge badge, title and description into the tech-watch block. The
    /// topic, source and roadmap lists are left alone.
    pub fn update_tech_watch_intro(&self, input: &Value) -> Result<TechWatchIntro, AppError> {
        self.mutate(|live, _| {
            let merged = merge_tech_watch_intro(&live.content.tech_watch, input);
            let (tech_watch, changed) = replace(&mut live.content.tech_watch, merged);
            (TechWatchIntro::from(&tech_watch), changed)
        })
    }

    /// Replace the contact block; missing fields keep their current value.
    pub fn update_contact(&self, input: &Value) -> Result<ContactInfo, AppError> {
        self.mutate(|live, _| {
            let contact = sanitize_contact(input, &live.content.contact);
            replace(&mut live.content.contact, contact)
        })
    }

    // ── Store-wide ───────────────────────────────────────────────────────────

    /// Drop the stored entry and go back to the reset defaults.
    pub fn reset(&self) -> Result<PortfolioSnapshot, AppError> {
        if let Err(e) = self.storage.remove(&self.storage_key) {
            tracing::warn!(error = %e, "cannot remove stored portfolio data");
        }
        let snapshot = self.mutate(|live, defaults| {
            *live = defaults.clone();
            (defaults.clone(), true)
        })?;
        tracing::info!("portfolio content reset");
        Ok(snapshot)
    }

    /// A freshly sanitized copy of the live state.
    pub fn export_snapshot(&self) -> Result<PortfolioSnapshot, AppError> {
        let live = self.snapshot()?;
        let raw = serde_json::to_value(&live)
            .map_err(|e| AppError::Export(format!("cannot serialize portfolio data: {e}")))?;
        sanitize_stored_data(&raw, &live)
            .map_err(|e| AppError::Export(format!("cannot export portfolio data: {e}")))
    }

    /// Replace the whole live state with `raw`, sanitized against the current
    /// state. A rejected document leaves everything untouched.
    pub fn import_snapshot(&self, raw: &Value) -> Result<PortfolioSnapshot, AppError> {
        let snapshot = self.mutate(|live, _| match sanitize_stored_data(raw, live) {
            Ok(snapshot) => {
                *live = snapshot.clone();
                (Ok(snapshot), true)
            }
            Err(e) => (Err(e), false),
        })??;
        tracing::info!(
            projects = snapshot.projects.len(),
            skills = snapshot.skills.len(),
            "portfolio content imported"
        );
        Ok(snapshot)
    }

    /// [`import_snapshot`](Self::import_snapshot) from JSON text.
    pub fn import_json(&self, text: &str) -> Result<PortfolioSnapshot, AppError> {
        let raw: Value = serde_json::from_str(text)
            .map_err(|e| AppError::Import(format!("invalid JSON: {e}")))?;
        self.import_snapshot(&raw)
    }
}

impl Default for ContentStore {
    fn default() -> Self {
        Self::in_memory()
    }
}

/// `input` with its `id` set; non-object input becomes `{ "id": id }`.
fn with_id(input: &Value, id: String) -> Value {
    let mut object = input.as_object().cloned().unwrap_or_default();
    object.insert("id".to_string(), Value::String(id));
    Value::Object(object)
}

/// Store `new` in `slot`, returning a copy and whether it differed.
fn replace<T: Clone + PartialEq>(slot: &mut T, new: T) -> (T, bool) {
    let changed = *slot != new;
    *slot = new;
    (slot.clone(), changed)
}
