//! Board application wiring.
//!
//! Mounts the input form and one column per status onto a host document,
//! all sharing a single, explicitly constructed store.

use super::alert::UserAlert;
use super::column::ProjectColumn;
use super::config::BoardConfig;
use super::document::{HostDocument, SharedDocument};
use super::drag::{DragEvent, DragPayloadError, DragTarget, Draggable};
use super::error::BoardResult;
use super::input::ProjectInputForm;
use super::templates::{BoardTemplates, section_id};
use crate::project::{
    domain::{ProjectId, ProjectStatus},
    ports::ProjectRepository,
    services::{MoveOutcome, ProjectStore},
};
use mockable::Clock;
use std::sync::{Arc, PoisonError};
use tracing::info;

/// Builds a document holding the templates and app container named by
/// `config`.
#[must_use]
pub fn board_document(config: &BoardConfig) -> HostDocument {
    HostDocument::new()
        .with_template(config.input_template_id.as_str(), "form")
        .with_template(config.list_template_id.as_str(), "section")
        .with_template(config.item_template_id.as_str(), "li")
        .with_container(config.app_container_id.as_str())
}

/// The mounted board.
pub struct BoardApp<R, C>
where
    R: ProjectRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    store: Arc<ProjectStore<R, C>>,
    document: SharedDocument,
    app_container_id: String,
    input: ProjectInputForm<R, C>,
    active: ProjectColumn<R, C>,
    finished: ProjectColumn<R, C>,
}

impl<R, C> BoardApp<R, C>
where
    R: ProjectRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    /// Mounts the form, then the active and finished columns.
    ///
    /// # Errors
    ///
    /// Returns [`super::BoardError::MissingTemplate`] or
    /// [`super::BoardError::MissingMountPoint`] when the document lacks a
    /// required id, and store or render errors from the initial render.
    pub fn mount(
        store: Arc<ProjectStore<R, C>>,
        document: SharedDocument,
        config: &BoardConfig,
        alert: Arc<dyn UserAlert>,
    ) -> BoardResult<Self> {
        let templates = Arc::new(BoardTemplates::new()?);
        let input = ProjectInputForm::mount(
            Arc::clone(&store),
            &document,
            Arc::clone(&templates),
            alert,
            config,
        )?;
        let active = ProjectColumn::mount(
            Arc::clone(&store),
            Arc::clone(&document),
            Arc::clone(&templates),
            config,
            ProjectStatus::Active,
        )?;
        let finished = ProjectColumn::mount(
            Arc::clone(&store),
            Arc::clone(&document),
            templates,
            config,
            ProjectStatus::Finished,
        )?;
        info!(container = %config.app_container_id, "board mounted");
        Ok(Self {
            store,
            document,
            app_container_id: config.app_container_id.clone(),
            input,
            active,
            finished,
        })
    }

    /// Returns the shared store.
    #[must_use]
    pub const fn store(&self) -> &Arc<ProjectStore<R, C>> {
        &self.store
    }

    /// Returns the shared document.
    #[must_use]
    pub const fn document(&self) -> &SharedDocument {
        &self.document
    }

    /// Returns the input form.
    #[must_use]
    pub const fn input(&self) -> &ProjectInputForm<R, C> {
        &self.input
    }

    /// Returns the input form for typing and submitting.
    pub const fn input_mut(&mut self) -> &mut ProjectInputForm<R, C> {
        &mut self.input
    }

    /// Returns the column listing `status`.
    #[must_use]
    pub const fn column(&self, status: ProjectStatus) -> &ProjectColumn<R, C> {
        match status {
            ProjectStatus::Active => &self.active,
            ProjectStatus::Finished => &self.finished,
        }
    }

    /// Drags a listed project onto the column for `target`.
    ///
    /// Runs the full handshake: drag start on the item, drag over and drop on
    /// the target column, then drag end on the item.
    ///
    /// # Errors
    ///
    /// Returns [`DragPayloadError::UnknownProject`] when no column lists the
    /// project, or the drop's error.
    pub fn drag_project(&self, id: ProjectId, target: ProjectStatus) -> BoardResult<MoveOutcome> {
        let item = ProjectStatus::ALL
            .into_iter()
            .find_map(|status| self.column(status).item(id))
            .ok_or(DragPayloadError::UnknownProject(id))?;
        let column = self.column(target);
        let mut event = DragEvent::new();
        item.drag_start(&mut event);
        column.drag_over(&mut event);
        let outcome = if event.default_prevented() {
            column.drop_project(&event)
        } else {
            Ok(MoveOutcome::Unchanged)
        };
        item.drag_end(&event);
        outcome
    }

    /// Renders the app container as HTML, children in document order.
    ///
    /// # Errors
    ///
    /// Returns [`super::BoardError::Render`] when a column fails to render.
    pub fn render_html(&self) -> BoardResult<String> {
        let child_ids: Vec<String> = self
            .document
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .children(&self.app_container_id)
            .unwrap_or_default()
            .iter()
            .filter_map(|element| element.id().map(str::to_owned))
            .collect();
        let mut body = String::new();
        for child_id in child_ids {
            if self.input.element().id() == Some(child_id.as_str()) {
                body.push_str(self.input.html());
                continue;
            }
            if let Some(status) = ProjectStatus::ALL
                .into_iter()
                .find(|status| section_id(*status) == child_id)
            {
                body.push_str(&self.column(status).html()?);
            }
        }
        Ok(format!(r#"<div id="{}">{body}</div>"#, self.app_container_id))
    }
}
