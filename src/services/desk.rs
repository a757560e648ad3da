//! Form handling for one entity type
//!
//! `EntityDesk` runs the cycle behind every user action: collect the form,
//! validate it, make one request, then re-render the table or show a
//! message. Every failure ends that action only; the desk stays usable.

use std::sync::Arc;

use maud::Markup;

use super::search::{self, SearchCriteria};
use crate::{
    api::Resource,
    config::UiConfig,
    error::{AppError, AppResult, ErrorKind},
    form::{validate, FormState, FormValues, SubmitMode},
    models::Entity,
    render::{render_error_row, render_table, RowAction},
    ui::{LoadingOverlay, Modals, NoticeBoard, Notifier, Point},
};

/// What the table currently shows. Replaced wholesale on every render.
#[derive(Debug, Clone)]
pub struct View<E> {
    pub rows: Vec<E>,
    pub table: Markup,
}

impl<E: Entity> View<E> {
    fn of(rows: Vec<E>) -> Self {
        let table = render_table(&rows);
        Self { rows, table }
    }

    fn failed(message: &str) -> Self {
        Self {
            rows: Vec::new(),
            table: render_error_row::<E>(message),
        }
    }
}

pub struct EntityDesk<E: Entity> {
    resource: Resource<E>,
    form: FormState,
    modals: Modals,
    notices: NoticeBoard,
    loading: LoadingOverlay,
    view: View<E>,
}

impl<E: Entity> EntityDesk<E> {
    pub fn new(resource: Resource<E>, notifier: Arc<dyn Notifier>, ui: &UiConfig) -> Self {
        Self {
            resource,
            form: FormState::default(),
            modals: Modals::default(),
            notices: NoticeBoard::new(notifier, ui.notice_ttl()),
            loading: LoadingOverlay::default(),
            view: View::of(Vec::new()),
        }
    }

    pub fn view(&self) -> &View<E> {
        &self.view
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn modals(&self) -> &Modals {
        &self.modals
    }

    pub fn notices(&self) -> &NoticeBoard {
        &self.notices
    }

    pub fn loading(&self) -> &LoadingOverlay {
        &self.loading
    }

    fn label() -> &'static str {
        E::schema().label
    }

    fn busy(&mut self, message: impl Into<String>) {
        self.loading.show(message);
        if let Some(message) = self.loading.message() {
            self.notices.loading(message);
        }
    }

    fn idle(&mut self) {
        self.loading.hide();
        self.notices.loaded();
    }

    /// Fetch the full list and render it.
    pub async fn load_all(&mut self) -> AppResult<()> {
        self.busy(format!("Loading {} list...", Self::label().to_lowercase()));
        let result = self.resource.list().await;
        self.idle();

        match result {
            Ok(rows) => {
                tracing::debug!("loaded {} {} records", rows.len(), Self::label());
                self.view = View::of(rows);
                Ok(())
            }
            Err(e) => {
                tracing::error!("{} list failed: {}", Self::label(), e);
                self.view = View::failed("An error occurred while loading records");
                self.notices
                    .error(format!("Failed to load {} list", Self::label().to_lowercase()));
                Err(e)
            }
        }
    }

    /// Submit the main form: create, or update when an edit is in progress.
    ///
    /// Invalid input is reported without sending any request.
    pub async fn submit<I, K, V>(&mut self, raw: I) -> AppResult<E>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let values = FormValues::collect(raw);
        let request = match validate(E::schema(), &values)
            .and_then(|_| E::request_from_form(&values))
        {
            Ok(request) => request,
            Err(e) => {
                self.notices.error(e.message());
                return Err(e);
            }
        };

        let mode = self.form.mode();
        let (verb, progress) = match mode {
            SubmitMode::Create => ("create", "Saving"),
            SubmitMode::Update(_) => ("update", "Updating"),
        };

        self.busy(format!("{} {}...", progress, Self::label().to_lowercase()));
        let result = match mode {
            SubmitMode::Create => self.resource.create(&request).await,
            SubmitMode::Update(id) => self.resource.update(id, &request).await,
        };
        self.idle();

        match result {
            Ok(saved) => {
                tracing::info!("{} {} id={}", Self::label(), verb, saved.id());
                self.reset();
                self.notices
                    .success(format!("{} saved successfully!", Self::label()));
                // a failed refresh is already reported by load_all
                let _ = self.load_all().await;
                Ok(saved)
            }
            Err(e) => {
                let text = self.failure_text(verb, &e);
                self.notices.error(text);
                Err(e)
            }
        }
    }

    /// Fetch one record, prefill the edit form and open the edit overlay.
    pub async fn begin_edit(&mut self, id: i64) -> AppResult<()> {
        self.busy(format!("Loading {}...", Self::label().to_lowercase()));
        let result = self.resource.get(id).await;
        self.idle();

        match result {
            Ok(record) => {
                let values = record.to_form();
                self.form.begin_edit(id, values.clone());
                self.modals.edit.open(values);
                Ok(())
            }
            Err(e) => {
                let text = self.failure_text("load", &e);
                self.notices.error(text);
                Err(e)
            }
        }
    }

    /// Clear the editing id and the form, close the edit overlay.
    pub fn reset(&mut self) {
        self.form.reset();
        self.modals.edit.close();
        self.notices.clear();
    }

    /// Delete after confirmation. Returns `false` when the user declined.
    pub async fn delete(&mut self, id: i64) -> AppResult<bool> {
        let prompt = format!(
            "Are you sure you want to delete this {}?",
            Self::label().to_lowercase()
        );
        if !self.notices.confirm(&prompt) {
            return Ok(false);
        }

        self.busy(format!("Deleting {}...", Self::label().to_lowercase()));
        let result = self.resource.delete(id).await;
        self.idle();

        match result {
            Ok(()) => {
                tracing::info!("{} delete id={}", Self::label(), id);
                if self.form.editing_id() == Some(id) {
                    self.form.reset();
                    self.modals.edit.close();
                }
                self.notices
                    .success(format!("{} deleted successfully!", Self::label()));
                let _ = self.load_all().await;
                Ok(true)
            }
            Err(e) => {
                let text = self.failure_text("delete", &e);
                self.notices.error(text);
                Err(e)
            }
        }
    }

    /// Fetch one record and open the detail overlay.
    pub async fn show_detail(&mut self, id: i64) -> AppResult<()> {
        self.busy(format!("Loading {}...", Self::label().to_lowercase()));
        let result = self.resource.get(id).await;
        self.idle();

        match result {
            Ok(record) => {
                self.modals.detail.open(record.detail_markup());
                Ok(())
            }
            Err(e) => {
                let text = self.failure_text("load", &e);
                self.notices.error(text);
                Err(e)
            }
        }
    }

    /// Search by the first non-empty field; all empty shows the full list.
    pub async fn search(&mut self, criteria: &SearchCriteria) -> AppResult<()> {
        self.busy("Searching...");
        let result = search::run(&self.resource, criteria).await;
        self.idle();

        match result {
            Ok(Some(rows)) => {
                self.view = View::of(rows);
                Ok(())
            }
            Ok(None) => self.load_all().await,
            Err(e) => {
                tracing::error!("{} search failed: {}", Self::label(), e);
                self.notices.error(format!("Search failed: {}", e.message()));
                Err(e)
            }
        }
    }

    /// Route a row trigger back into the desk.
    pub async fn handle_action(&mut self, action: RowAction, id: i64) -> AppResult<()> {
        match action {
            RowAction::Detail => self.show_detail(id).await,
            RowAction::Edit => self.begin_edit(id).await,
            RowAction::Delete => self.delete(id).await.map(|_| ()),
        }
    }

    pub fn handle_click(&mut self, p: Point) {
        self.modals.handle_click(p);
    }

    /// Validation, not-found and conflict messages are shown as they are;
    /// other failures get the operation as prefix.
    fn failure_text(&self, verb: &str, e: &AppError) -> String {
        match e.kind() {
            ErrorKind::Validation | ErrorKind::NotFound | ErrorKind::Conflict => e.message(),
            ErrorKind::Generic => format!(
                "Failed to {} {}: {}",
                verb,
                Self::label().to_lowercase(),
                e.message()
            ),
        }
    }
}
