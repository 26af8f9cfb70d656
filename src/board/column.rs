//! Status column: render subscriber and drop target.
//!
//! A column subscribes to the store when activated. Each notification takes
//! a fresh snapshot, keeps the projects with the column's status, clears the
//! column's list and mounts one item per project. Items are inserted at the
//! start of the list, so the most recently added project is shown first.

use super::component::{Component, MountSpec, mount};
use super::config::BoardConfig;
use super::document::{Element, InsertPosition, SharedDocument, write_document};
use super::drag::{DragEvent, DragPayloadError, DragTarget, decode_project_id};
use super::error::BoardResult;
use super::item::ProjectItem;
use super::templates::{BoardTemplates, ColumnContent, list_id, section_id};
use crate::project::{
    domain::{Project, ProjectId, ProjectStatus},
    ports::ProjectRepository,
    services::{MoveOutcome, ProjectStore, SubscriptionId},
};
use mockable::Clock;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard, Weak};
use tracing::{debug, error, warn};

const DROPPABLE: &str = "droppable";
const EXPANDED: &str = "expanded";
const COLLAPSED: &str = "collapsed";

#[derive(Debug)]
struct ColumnView {
    status: ProjectStatus,
    templates: Arc<BoardTemplates>,
    item_template_id: String,
    section: Element,
    list: Element,
    items: Vec<ProjectItem>,
}

impl ColumnView {
    fn list_id(&self) -> String {
        list_id(self.status)
    }
}

/// A column listing the projects of one status.
pub struct ProjectColumn<R, C>
where
    R: ProjectRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    status: ProjectStatus,
    store: Arc<ProjectStore<R, C>>,
    document: SharedDocument,
    view: Arc<RwLock<ColumnView>>,
    subscription: Option<SubscriptionId>,
}

impl<R, C> ProjectColumn<R, C>
where
    R: ProjectRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    /// Mounts a column at the end of the app container, subscribes it to the
    /// store and renders the current projects.
    ///
    /// # Errors
    ///
    /// Returns [`super::BoardError::MissingTemplate`] or
    /// [`super::BoardError::MissingMountPoint`] when the document lacks the
    /// list template or app container, and store or render errors from the
    /// initial render.
    pub fn mount(
        store: Arc<ProjectStore<R, C>>,
        document: SharedDocument,
        templates: Arc<BoardTemplates>,
        config: &BoardConfig,
        status: ProjectStatus,
    ) -> BoardResult<Self> {
        let section_element_id = section_id(status);
        let section = {
            let mut doc = write_document(&document);
            mount(
                &mut doc,
                MountSpec {
                    template_id: &config.list_template_id,
                    container_id: &config.app_container_id,
                    position: InsertPosition::BeforeEnd,
                    element_id: Some(section_element_id.as_str()),
                },
            )?
        };
        let view = ColumnView {
            status,
            templates,
            item_template_id: config.item_template_id.clone(),
            section,
            list: Element::new("ul"),
            items: Vec::new(),
        };
        let mut column = Self {
            status,
            store,
            document,
            view: Arc::new(RwLock::new(view)),
            subscription: None,
        };
        column.activate()?;
        column.render_content()?;
        column.render_projects()?;
        debug!(%status, "column mounted");
        Ok(column)
    }

    /// Returns the status listed by this column.
    #[must_use]
    pub const fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Returns `true` while the column is subscribed to the store.
    #[must_use]
    pub const fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    /// Re-renders the column from a fresh store snapshot.
    ///
    /// # Errors
    ///
    /// Returns store or render errors.
    pub fn render_projects(&self) -> BoardResult<()> {
        refresh(&self.store, &self.document, &self.view)
    }

    /// Returns the listed projects in display order.
    #[must_use]
    pub fn projects(&self) -> Vec<Project> {
        self.read_view()
            .items
            .iter()
            .map(|item| item.project().clone())
            .collect()
    }

    /// Returns the rendered item for a project, if listed.
    #[must_use]
    pub fn item(&self, id: ProjectId) -> Option<ProjectItem> {
        self.read_view()
            .items
            .iter()
            .find(|item| item.project().id() == id)
            .cloned()
    }

    /// Returns the column's section element.
    #[must_use]
    pub fn section(&self) -> Element {
        self.read_view().section.clone()
    }

    /// Returns the column's list element, including its hover classes.
    #[must_use]
    pub fn list(&self) -> Element {
        self.read_view().list.clone()
    }

    /// Renders the column as HTML.
    ///
    /// # Errors
    ///
    /// Returns [`super::BoardError::Render`] when rendering fails.
    pub fn html(&self) -> BoardResult<String> {
        let view = self.read_view();
        let items: Vec<String> = view.items.iter().map(|item| item.html().to_owned()).collect();
        view.templates.render_column(ColumnContent {
            status: view.status,
            list_classes: &view.list.class_list(),
            items: &items,
        })
    }

    fn read_view(&self) -> RwLockReadGuard<'_, ColumnView> {
        self.view.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_view(&self) -> RwLockWriteGuard<'_, ColumnView> {
        self.view.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<R, C> Component for ProjectColumn<R, C>
where
    R: ProjectRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    fn activate(&mut self) -> BoardResult<()> {
        if self.subscription.is_some() {
            return Ok(());
        }
        let store: Weak<ProjectStore<R, C>> = Arc::downgrade(&self.store);
        let document = Arc::clone(&self.document);
        let view = Arc::clone(&self.view);
        let status = self.status;
        self.subscription = Some(self.store.subscribe(move || {
            let Some(live_store) = store.upgrade() else {
                return;
            };
            if let Err(err) = refresh(&live_store, &document, &view) {
                error!(%status, error = %err, "column render failed");
            }
        }));
        Ok(())
    }

    fn render_content(&mut self) -> BoardResult<()> {
        let mut doc = write_document(&self.document);
        let mut view = self.write_view();
        let id = view.list_id();
        view.list.set_id(id.clone());
        doc.add_container(id);
        Ok(())
    }
}

impl<R, C> DragTarget for ProjectColumn<R, C>
where
    R: ProjectRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    type Outcome = MoveOutcome;

    fn drag_over(&self, event: &mut DragEvent) {
        if !event.carries_plain_text() {
            return;
        }
        event.prevent_default();
        let mut view = self.write_view();
        view.list.add_class(DROPPABLE);
        view.list.add_class(EXPANDED);
        view.list.replace_class(COLLAPSED, EXPANDED);
    }

    fn drop_project(&self, event: &DragEvent) -> BoardResult<MoveOutcome> {
        let id = decode_project_id(event).inspect_err(|err| {
            warn!(status = %self.status, error = %err, "drop rejected");
        })?;
        if self.store.find(id)?.is_none() {
            warn!(status = %self.status, project_id = %id, "drop names unknown project");
            return Err(DragPayloadError::UnknownProject(id).into());
        }
        Ok(self.store.move_project(id, self.status)?)
    }

    fn drag_leave(&self, _event: &DragEvent) {
        let mut view = self.write_view();
        view.list.remove_class(DROPPABLE);
        view.list.remove_class(COLLAPSED);
        view.list.replace_class(EXPANDED, COLLAPSED);
    }
}

impl<R, C> Drop for ProjectColumn<R, C>
where
    R: ProjectRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    fn drop(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            self.store.unsubscribe(subscription);
        }
    }
}

fn refresh<R, C>(
    store: &ProjectStore<R, C>,
    document: &SharedDocument,
    view: &RwLock<ColumnView>,
) -> BoardResult<()>
where
    R: ProjectRepository,
    C: Clock + Send + Sync,
{
    let status = view.read().unwrap_or_else(PoisonError::into_inner).status;
    let projects = store.snapshot_by_status(status)?;
    let mut doc = write_document(document);
    let mut column = view.write().unwrap_or_else(PoisonError::into_inner);
    let host_id = column.list_id();
    doc.clear(&host_id)?;
    column.items.clear();
    for project in projects {
        let item = ProjectItem::mount(
            &mut doc,
            Arc::clone(&column.templates),
            &column.item_template_id,
            &host_id,
            project,
        )?;
        column.items.insert(0, item);
    }
    debug!(%status, items = column.items.len(), "column rendered");
    Ok(())
}
