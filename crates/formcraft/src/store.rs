// File: formcraft/src/store.rs
// Purpose: Form store - owns the form being edited and wires history,
// templates, validation and persistence together

use chrono::{DateTime, Utc};
use formcraft_types::{
    compute_total_steps, create_field, Device, Field, FieldDraft, FieldUpdate,
    FieldValue, Theme,
};
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use crate::config::Config;
use crate::error::{Result, StoreError};
use crate::history::History;
use crate::persistence::{Autosave, PersistenceManager};
use crate::preview::PreviewSession;
use crate::response::{Response, ResponseBook};
use crate::snapshot::FormSnapshot;
use crate::storage::{self, Storage};
use crate::templates;
use formcraft_validation::ErrorMap;

/// Visible state of the form being edited
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub fields: Vec<Field>,
    pub current_step: u32,
    pub total_steps: u32,
    pub device: Device,
    pub theme: Theme,
    pub form_id: Option<String>,
    pub form_title: Option<String>,
    pub last_saved: Option<DateTime<Utc>>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            fields: Vec::new(),
            current_step: 1,
            total_steps: 1,
            device: Device::default(),
            theme: Theme::default(),
            form_id: None,
            form_title: None,
            last_saved: None,
        }
    }
}

impl FormState {
    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            fields: self.fields.clone(),
            total_steps: self.total_steps,
            form_id: self.form_id.clone(),
            form_title: self.form_title.clone(),
        }
    }

    fn clamp_step(&self, step: u32) -> u32 {
        step.clamp(1, self.total_steps.max(1))
    }
}

/// One history entry: a field collection and the form it belongs to
#[derive(Debug, Clone)]
struct Revision {
    fields: Vec<Field>,
    form_id: Option<String>,
    form_title: Option<String>,
}

/// State and history, guarded together so each commit is atomic
struct Workspace {
    state: FormState,
    history: History<Revision>,
}

impl Workspace {
    fn new(state: FormState, capacity: usize) -> Self {
        let mut workspace = Self {
            state,
            history: History::with_capacity(capacity),
        };
        let seed = workspace.revision();
        workspace.history.push(seed);
        workspace
    }

    fn revision(&self) -> Revision {
        Revision {
            fields: self.state.fields.clone(),
            form_id: self.state.form_id.clone(),
            form_title: self.state.form_title.clone(),
        }
    }

    /// Install a new field collection and record it in history
    fn commit(&mut self, fields: Vec<Field>) {
        self.install(fields);
        let revision = self.revision();
        self.history.push(revision);
    }

    /// Show a history entry. An entry from another form brings that form's
    /// id and title back with it, so the next save goes to the right record.
    fn restore(&mut self, revision: Revision) {
        if revision.form_id != self.state.form_id {
            self.state.form_id = revision.form_id;
            self.state.form_title = revision.form_title;
        }
        self.install(revision.fields);
    }

    /// Id the form is saved under, assigned on first use. Entries recorded
    /// while the form had no id adopt it.
    fn ensure_form_id(&mut self) -> String {
        if let Some(form_id) = &self.state.form_id {
            return form_id.clone();
        }

        let form_id = uuid::Uuid::new_v4().to_string();
        self.state.form_id = Some(form_id.clone());
        for revision in self.history.iter_mut() {
            if revision.form_id.is_none() {
                revision.form_id = Some(form_id.clone());
            }
        }
        form_id
    }

    /// Title is per form, so every entry of the current form follows it
    fn set_title(&mut self, title: Option<String>) {
        let form_id = self.state.form_id.clone();
        for revision in self.history.iter_mut() {
            if revision.form_id == form_id {
                revision.form_title = title.clone();
            }
        }
        self.state.form_title = title;
    }

    /// Install a field collection without touching history
    fn install(&mut self, fields: Vec<Field>) {
        self.state.total_steps = compute_total_steps(&fields);
        self.state.fields = fields;
        self.state.current_step = self.state.clamp_step(self.state.current_step);
    }
}

/// Result of submitting a preview session
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// Every field passed and the response was recorded
    Accepted(Response),
    /// Validation failed; nothing was recorded
    Rejected(ErrorMap),
}

struct StoreInner {
    workspace: RwLock<Workspace>,
    responses: RwLock<ResponseBook>,
    persistence: PersistenceManager,
    autosave: Option<Autosave>,
    /// Held from snapshot to write so saves land in order
    saving: Mutex<()>,
}

/// Handle to the form store.
///
/// Cheap to clone; clones share the same form. Every field mutation commits
/// the new collection, recomputes the step count, pushes one history snapshot
/// and re-arms the debounced autosave, in that order.
#[derive(Clone)]
pub struct FormStore {
    inner: Arc<StoreInner>,
}

impl FormStore {
    /// Create a store over `storage` with an empty form
    pub fn new(storage: Arc<dyn Storage>, config: &Config) -> Self {
        let workspace = Workspace::new(FormState::default(), config.history.capacity);

        let autosave = config
            .autosave
            .enabled
            .then(|| Autosave::new(config.autosave.quiet_window()));

        Self {
            inner: Arc::new(StoreInner {
                workspace: RwLock::new(workspace),
                responses: RwLock::new(ResponseBook::new()),
                persistence: PersistenceManager::new(storage),
                autosave,
                saving: Mutex::new(()),
            }),
        }
    }

    /// Open the configured storage and restore responses and theme
    pub async fn open(config: &Config) -> Result<Self> {
        let storage = storage::open(&config.storage).await?;
        let store = Self::new(storage, config);
        store.restore().await?;
        Ok(store)
    }

    /// Ephemeral store using in-memory storage
    pub fn in_memory() -> Self {
        Self::new(Arc::new(storage::MemoryStorage::new()), &Config::in_memory())
    }

    /// Reload the response book and theme preference from storage
    pub async fn restore(&self) -> Result<()> {
        let book = self.inner.persistence.load_responses().await?;
        let theme = self.inner.persistence.load_theme().await?;

        tracing::debug!(
            "Restored responses for {} forms from {} storage",
            book.len(),
            self.inner.persistence.storage_name()
        );

        *self.inner.responses.write().await = book;
        if let Some(theme) = theme {
            self.inner.workspace.write().await.state.theme = theme;
        }
        Ok(())
    }

    pub fn persistence(&self) -> &PersistenceManager {
        &self.inner.persistence
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    pub async fn state(&self) -> FormState {
        self.inner.workspace.read().await.state.clone()
    }

    pub async fn snapshot(&self) -> FormSnapshot {
        self.inner.workspace.read().await.state.snapshot()
    }

    pub async fn fields(&self) -> Vec<Field> {
        self.inner.workspace.read().await.state.fields.clone()
    }

    pub async fn field(&self, id: &str) -> Option<Field> {
        let workspace = self.inner.workspace.read().await;
        workspace.state.fields.iter().find(|f| f.id == id).cloned()
    }

    pub async fn current_step(&self) -> u32 {
        self.inner.workspace.read().await.state.current_step
    }

    pub async fn total_steps(&self) -> u32 {
        self.inner.workspace.read().await.state.total_steps
    }

    pub async fn form_id(&self) -> Option<String> {
        self.inner.workspace.read().await.state.form_id.clone()
    }

    pub async fn last_saved(&self) -> Option<DateTime<Utc>> {
        self.inner.workspace.read().await.state.last_saved
    }

    pub async fn can_undo(&self) -> bool {
        self.inner.workspace.read().await.history.can_undo()
    }

    pub async fn can_redo(&self) -> bool {
        self.inner.workspace.read().await.history.can_redo()
    }

    // ------------------------------------------------------------------
    // Field mutations
    // ------------------------------------------------------------------

    /// Add a field on the current step (unless the draft names one)
    pub async fn add_field(&self, draft: FieldDraft) -> Field {
        let field = {
            let mut workspace = self.inner.workspace.write().await;
            let field = create_field(draft, workspace.state.current_step);

            let mut fields = workspace.state.fields.clone();
            fields.push(field.clone());
            workspace.commit(fields);

            tracing::debug!("Added {} field {} on step {}", field.field_type, field.id, field.step);
            field
        };

        self.schedule_autosave().await;
        field
    }

    /// Apply a partial update. Returns `false` if no field has `id`.
    pub async fn update_field(&self, id: &str, update: &FieldUpdate) -> bool {
        {
            let mut workspace = self.inner.workspace.write().await;
            let mut fields = workspace.state.fields.clone();

            let Some(field) = fields.iter_mut().find(|f| f.id == id) else {
                tracing::debug!("Update ignored, no field {}", id);
                return false;
            };
            update.apply(field);
            workspace.commit(fields);

            tracing::debug!("Updated field {}", id);
        }

        self.schedule_autosave().await;
        true
    }

    /// Remove a field. Returns `false` if no field has `id`.
    pub async fn remove_field(&self, id: &str) -> bool {
        {
            let mut workspace = self.inner.workspace.write().await;
            let before = workspace.state.fields.len();
            let fields: Vec<Field> = workspace
                .state
                .fields
                .iter()
                .filter(|f| f.id != id)
                .cloned()
                .collect();

            if fields.len() == before {
                tracing::debug!("Remove ignored, no field {}", id);
                return false;
            }
            workspace.commit(fields);

            tracing::debug!("Removed field {}", id);
        }

        self.schedule_autosave().await;
        true
    }

    /// Replace the collection with a reordered one.
    ///
    /// Rejects lists that repeat an id; the store is left untouched then.
    pub async fn reorder_fields(&self, fields: Vec<Field>) -> Result<()> {
        {
            let mut seen = HashSet::new();
            if let Some(dup) = fields.iter().find(|f| !seen.insert(f.id.as_str())) {
                return Err(StoreError::DuplicateFieldId(dup.id.clone()));
            }
        }

        {
            let mut workspace = self.inner.workspace.write().await;
            workspace.commit(fields);
            tracing::debug!("Reordered {} fields", workspace.state.fields.len());
        }

        self.schedule_autosave().await;
        Ok(())
    }

    /// Move one field to `to_index` (clamped), as a drag-and-drop drop does.
    /// Returns `false` if no field has `id`.
    pub async fn move_field(&self, id: &str, to_index: usize) -> bool {
        let mut fields = self.fields().await;
        let Some(from) = fields.iter().position(|f| f.id == id) else {
            return false;
        };

        let moved = fields.remove(from);
        let to = to_index.min(fields.len());
        fields.insert(to, moved);

        // ids come from a valid collection, so this cannot collide
        self.reorder_fields(fields).await.is_ok()
    }

    /// Replace the form with a built-in template.
    ///
    /// Returns `false` for an unknown template id, leaving the form untouched.
    pub async fn load_template(&self, template_id: &str) -> bool {
        let Some(template) = templates::find(template_id) else {
            tracing::debug!("No template named {:?}", template_id);
            return false;
        };

        {
            let mut workspace = self.inner.workspace.write().await;
            workspace.state.current_step = 1;
            workspace.commit(template.fields.clone());
        }

        tracing::info!("Loaded template {}", template.id);
        self.schedule_autosave().await;
        true
    }

    // ------------------------------------------------------------------
    // Undo / redo
    // ------------------------------------------------------------------

    /// Restore the previous field collection. Returns `false` at the oldest.
    pub async fn undo(&self) -> bool {
        {
            let mut workspace = self.inner.workspace.write().await;
            let Some(revision) = workspace.history.undo().cloned() else {
                return false;
            };
            workspace.restore(revision);
            tracing::debug!("Undo to history entry {:?}", workspace.history.cursor());
        }

        self.schedule_autosave().await;
        true
    }

    /// Re-apply an undone change. Returns `false` at the newest.
    pub async fn redo(&self) -> bool {
        {
            let mut workspace = self.inner.workspace.write().await;
            let Some(revision) = workspace.history.redo().cloned() else {
                return false;
            };
            workspace.restore(revision);
            tracing::debug!("Redo to history entry {:?}", workspace.history.cursor());
        }

        self.schedule_autosave().await;
        true
    }

    // ------------------------------------------------------------------
    // Navigation and preferences
    // ------------------------------------------------------------------

    /// Jump to a step, clamped to `1..=total_steps`
    pub async fn set_current_step(&self, step: u32) -> u32 {
        let mut workspace = self.inner.workspace.write().await;
        workspace.state.current_step = workspace.state.clamp_step(step);
        workspace.state.current_step
    }

    pub async fn next_step(&self) -> u32 {
        let mut workspace = self.inner.workspace.write().await;
        let next = workspace.state.current_step.saturating_add(1);
        workspace.state.current_step = workspace.state.clamp_step(next);
        workspace.state.current_step
    }

    pub async fn prev_step(&self) -> u32 {
        let mut workspace = self.inner.workspace.write().await;
        let prev = workspace.state.current_step.saturating_sub(1);
        workspace.state.current_step = workspace.state.clamp_step(prev);
        workspace.state.current_step
    }

    pub async fn set_device(&self, device: Device) {
        self.inner.workspace.write().await.state.device = device;
    }

    pub async fn device(&self) -> Device {
        self.inner.workspace.read().await.state.device
    }

    pub async fn set_form_title(&self, title: Option<String>) {
        self.inner.workspace.write().await.set_title(title);
        self.schedule_autosave().await;
    }

    pub async fn theme(&self) -> Theme {
        self.inner.workspace.read().await.state.theme
    }

    /// Switch theme and persist the preference
    pub async fn set_theme(&self, theme: Theme) -> Result<()> {
        self.inner.workspace.write().await.state.theme = theme;
        self.inner.persistence.save_theme(theme).await
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    /// Save the form now. Assigns a form id on first save.
    pub async fn save_form(&self) -> Result<String> {
        let _saving = self.inner.saving.lock().await;

        let snapshot = {
            let mut workspace = self.inner.workspace.write().await;
            workspace.ensure_form_id();
            workspace.state.snapshot()
        };
        let form_id = self.inner.persistence.save(&snapshot).await?;

        let mut workspace = self.inner.workspace.write().await;
        if workspace.state.form_id.as_deref() == Some(form_id.as_str()) {
            workspace.state.last_saved = Some(Utc::now());
        }

        Ok(form_id)
    }

    /// Replace the form with a saved one.
    ///
    /// Returns `Ok(false)` when nothing is stored under `form_id`; the current
    /// form is left untouched then. Edits still waiting for autosave are
    /// written to the outgoing form first.
    pub async fn load_form(&self, form_id: &str) -> Result<bool> {
        let Some(saved) = self.inner.persistence.load(form_id).await? else {
            tracing::debug!("No saved form {}", form_id);
            return Ok(false);
        };

        self.flush().await?;

        {
            let mut workspace = self.inner.workspace.write().await;
            workspace.state.form_id = saved.form_id;
            workspace.state.form_title = saved.form_title;
            workspace.state.current_step = 1;
            workspace.commit(saved.fields);
        }

        tracing::info!("Loaded form {}", form_id);
        self.schedule_autosave().await;
        Ok(true)
    }

    /// Cancel a pending autosave and save immediately if one was waiting.
    /// An autosave already under way is waited for.
    pub async fn flush(&self) -> Result<Option<String>> {
        let Some(autosave) = &self.inner.autosave else {
            return Ok(None);
        };

        if autosave.cancel().await {
            self.save_form().await.map(Some)
        } else {
            Ok(None)
        }
    }

    pub async fn autosave_pending(&self) -> bool {
        match &self.inner.autosave {
            Some(autosave) => autosave.is_pending().await,
            None => false,
        }
    }

    async fn schedule_autosave(&self) {
        let Some(autosave) = &self.inner.autosave else {
            return;
        };

        let store = self.clone();
        autosave
            .schedule(move || async move { store.autosave_now().await })
            .await;
    }

    /// Timer callback: saves whatever the form looks like at this moment
    async fn autosave_now(&self) {
        match self.save_form().await {
            Ok(form_id) => tracing::debug!("Autosaved form {}", form_id),
            Err(e) => tracing::warn!("Autosave failed, keeping changes in memory: {}", e),
        }
    }

    // ------------------------------------------------------------------
    // Validation and responses
    // ------------------------------------------------------------------

    pub fn validate_field(field: &Field, value: Option<&FieldValue>) -> Option<String> {
        formcraft_validation::validate(field, value)
    }

    /// Start filling in the current form
    pub async fn preview(&self) -> PreviewSession {
        PreviewSession::new(self.snapshot().await)
    }

    /// Validate a filled-in session and record it as a response
    pub async fn submit(&self, session: &mut PreviewSession) -> Result<Submission> {
        let data = match session.submit() {
            Ok(data) => data,
            Err(errors) => return Ok(Submission::Rejected(errors)),
        };

        let form_id = match session.form_id() {
            Some(id) => id.to_string(),
            None => self.save_form().await?,
        };

        let response = self.add_response(&form_id, data).await?;
        Ok(Submission::Accepted(response))
    }

    /// Append a response for `form_id` and write the response book through.
    ///
    /// On a storage failure the response stays recorded in memory.
    pub async fn add_response(
        &self,
        form_id: &str,
        data: BTreeMap<String, FieldValue>,
    ) -> Result<Response> {
        let response = Response::new(data);

        let book = {
            let mut book = self.inner.responses.write().await;
            book.entry(form_id.to_string())
                .or_default()
                .push(response.clone());
            book.clone()
        };

        tracing::info!("Recorded response {} for form {}", response.id, form_id);
        self.inner.persistence.save_responses(&book).await?;
        Ok(response)
    }

    pub async fn get_responses(&self, form_id: &str) -> Vec<Response> {
        self.inner
            .responses
            .read()
            .await
            .get(form_id)
            .cloned()
            .unwrap_or_default()
    }
}

/// Address a saved form is shared at
pub fn share_url(base: &str, form_id: &str) -> String {
    format!("{}/preview/{}", base.trim_end_matches('/'), form_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use formcraft_types::{FieldType, ValidationRules};
    use pretty_assertions::assert_eq;

    fn no_autosave() -> Config {
        let mut config = Config::in_memory();
        config.autosave.enabled = false;
        config
    }

    fn store() -> FormStore {
        FormStore::new(Arc::new(MemoryStorage::new()), &no_autosave())
    }

    fn draft(label: &str) -> FieldDraft {
        FieldDraft::new(FieldType::Text, label)
    }

    #[tokio::test]
    async fn test_new_store_is_empty() {
        let store = store();
        let state = store.state().await;
        assert!(state.fields.is_empty());
        assert_eq!(state.current_step, 1);
        assert_eq!(state.total_steps, 1);
        assert_eq!(state.device, Device::Desktop);
        assert!(!store.can_undo().await);
    }

    #[tokio::test]
    async fn test_add_field_places_on_current_step() {
        let store = store();
        store.add_field(draft("a").step(2)).await;
        assert_eq!(store.set_current_step(2).await, 2);

        let field = store.add_field(draft("b")).await;
        assert_eq!(field.step, 2);
        assert_eq!(store.total_steps().await, 2);
    }

    #[tokio::test]
    async fn test_update_field() {
        let store = store();
        let field = store.add_field(draft("a")).await;

        let changed = store
            .update_field(&field.id, &FieldUpdate::new().label("Name").step(3))
            .await;
        assert!(changed);

        let updated = store.field(&field.id).await.unwrap();
        assert_eq!(updated.label, "Name");
        assert_eq!(store.total_steps().await, 3);
    }

    #[tokio::test]
    async fn test_update_unknown_field_keeps_history() {
        let store = store();
        store.add_field(draft("a")).await;
        let before = store.state().await;

        assert!(!store.update_field("missing", &FieldUpdate::new().label("x")).await);
        assert_eq!(store.state().await, before);

        // the single undo step still belongs to add_field
        assert!(store.undo().await);
        assert!(store.fields().await.is_empty());
        assert!(!store.undo().await);
    }

    #[tokio::test]
    async fn test_remove_recomputes_steps_and_clamps_current() {
        let store = store();
        store.add_field(draft("a")).await;
        let high = store.add_field(draft("b").step(3)).await;
        store.set_current_step(3).await;

        assert!(store.remove_field(&high.id).await);
        assert_eq!(store.total_steps().await, 1);
        assert_eq!(store.current_step().await, 1);

        assert!(!store.remove_field(&high.id).await);
    }

    #[tokio::test]
    async fn test_reorder_rejects_duplicates() {
        let store = store();
        let a = store.add_field(draft("a")).await;
        let before = store.fields().await;

        let err = store.reorder_fields(vec![a.clone(), a.clone()]).await.unwrap_err();
        assert!(matches!(err, StoreError::DuplicateFieldId(id) if id == a.id));
        assert_eq!(store.fields().await, before);
    }

    #[tokio::test]
    async fn test_move_field() {
        let store = store();
        let a = store.add_field(draft("a")).await;
        let b = store.add_field(draft("b")).await;
        let c = store.add_field(draft("c")).await;

        assert!(store.move_field(&c.id, 0).await);
        let order: Vec<String> = store.fields().await.into_iter().map(|f| f.id).collect();
        assert_eq!(order, vec![c.id.clone(), a.id.clone(), b.id.clone()]);

        assert!(store.move_field(&c.id, 99).await);
        let order: Vec<String> = store.fields().await.into_iter().map(|f| f.id).collect();
        assert_eq!(order, vec![a.id, b.id, c.id]);

        assert!(!store.move_field("missing", 0).await);
    }

    #[tokio::test]
    async fn test_step_navigation_clamps() {
        let store = store();
        store.add_field(draft("a").step(3)).await;

        assert_eq!(store.set_current_step(0).await, 1);
        assert_eq!(store.set_current_step(10).await, 3);
        assert_eq!(store.next_step().await, 3);
        assert_eq!(store.prev_step().await, 2);
        assert_eq!(store.prev_step().await, 1);
        assert_eq!(store.prev_step().await, 1);
    }

    #[tokio::test]
    async fn test_load_template() {
        let store = store();
        store.add_field(draft("a").step(2)).await;
        store.set_current_step(2).await;

        assert!(store.load_template("contact").await);
        let state = store.state().await;
        assert_eq!(state.total_steps, 2);
        assert_eq!(state.current_step, 1);
        assert_eq!(state.fields.len(), 4);

        // loading is undoable like any other change
        assert!(store.undo().await);
        assert_eq!(store.fields().await.len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_template_is_ignored() {
        let store = store();
        store.add_field(draft("a")).await;
        let before = store.state().await;

        assert!(!store.load_template("survey").await);
        assert_eq!(store.state().await, before);
    }

    #[tokio::test]
    async fn test_save_sets_form_id_and_last_saved() {
        let store = store();
        store.add_field(draft("a")).await;
        assert_eq!(store.last_saved().await, None);

        let first = store.save_form().await.unwrap();
        let second = store.save_form().await.unwrap();
        assert_eq!(first, second);
        assert_eq!(store.form_id().await, Some(first));
        assert!(store.last_saved().await.is_some());
    }

    #[tokio::test]
    async fn test_load_missing_form_leaves_state() {
        let store = store();
        store.add_field(draft("a")).await;
        let before = store.state().await;

        assert!(!store.load_form("nope").await.unwrap());
        assert_eq!(store.state().await, before);
    }

    #[tokio::test]
    async fn test_theme_persisted_and_restored() {
        let storage = MemoryStorage::new();
        let store = FormStore::new(Arc::new(storage.clone()), &no_autosave());
        store.set_theme(Theme::Dark).await.unwrap();

        let reopened = FormStore::new(Arc::new(storage), &no_autosave());
        assert_eq!(reopened.theme().await, Theme::Light);
        reopened.restore().await.unwrap();
        assert_eq!(reopened.theme().await, Theme::Dark);
    }

    #[tokio::test]
    async fn test_submit_rejects_then_accepts() {
        let store = store();
        let field = store
            .add_field(
                draft("Code")
                    .required(true)
                    .validation(ValidationRules::pattern("^[A-Z]{3}$", None)),
            )
            .await;
        let form_id = store.save_form().await.unwrap();

        let mut session = store.preview().await;
        match store.submit(&mut session).await.unwrap() {
            Submission::Rejected(errors) => {
                assert_eq!(errors.get(&field.id), Some("This field is required"))
            }
            other => panic!("expected rejection, got {:?}", other),
        }

        session.set_value(&field.id, "ABC");
        let response = match store.submit(&mut session).await.unwrap() {
            Submission::Accepted(response) => response,
            other => panic!("expected acceptance, got {:?}", other),
        };

        assert_eq!(response.data.get(&field.id), Some(&FieldValue::from("ABC")));
        assert_eq!(store.get_responses(&form_id).await, vec![response]);
    }

    #[test]
    fn test_share_url() {
        assert_eq!(
            share_url("https://forms.example.com/", "abc"),
            "https://forms.example.com/preview/abc"
        );
    }
}
