//! Draggable project item.

use super::component::Component;
use super::document::{Element, HostDocument, InsertPosition};
use super::drag::{DragEvent, Draggable, encode_project_id};
use super::error::BoardResult;
use super::templates::BoardTemplates;
use crate::project::domain::Project;
use std::sync::Arc;
use tracing::{debug, warn};

/// A project rendered inside a status column.
#[derive(Debug, Clone)]
pub struct ProjectItem {
    project: Project,
    element: Element,
    templates: Arc<BoardTemplates>,
    html: String,
}

impl ProjectItem {
    /// Instantiates the item template, renders the project into it and
    /// attaches it at the start of `host_id`.
    ///
    /// # Errors
    ///
    /// Returns [`super::BoardError::MissingTemplate`] or
    /// [`super::BoardError::MissingMountPoint`] when the document lacks the
    /// template or host list, or [`super::BoardError::Render`] when rendering
    /// fails.
    pub fn mount(
        document: &mut HostDocument,
        templates: Arc<BoardTemplates>,
        template_id: &str,
        host_id: &str,
        project: Project,
    ) -> BoardResult<Self> {
        let mut element = document.instantiate(template_id)?;
        element.set_id(project.id().to_string());
        let mut item = Self {
            project,
            element,
            templates,
            html: String::new(),
        };
        item.activate()?;
        item.render_content()?;
        document.attach(host_id, InsertPosition::AfterBegin, item.element.clone())?;
        Ok(item)
    }

    /// Returns the rendered project.
    #[must_use]
    pub const fn project(&self) -> &Project {
        &self.project
    }

    /// Returns the item's element.
    #[must_use]
    pub const fn element(&self) -> &Element {
        &self.element
    }

    /// Returns the rendered HTML.
    #[must_use]
    pub fn html(&self) -> &str {
        &self.html
    }
}

impl Component for ProjectItem {
    fn activate(&mut self) -> BoardResult<()> {
        self.element.set_draggable(true);
        Ok(())
    }

    fn render_content(&mut self) -> BoardResult<()> {
        self.html = self.templates
            .render_item(&self.project, self.element.draggable())?;
        Ok(())
    }
}

impl Draggable for ProjectItem {
    fn drag_start(&self, event: &mut DragEvent) {
        let Some(data_transfer) = event.data_transfer_mut() else {
            warn!(project_id = %self.project.id(), "drag started without data transfer");
            return;
        };
        encode_project_id(self.project.id(), data_transfer);
        debug!(project_id = %self.project.id(), "drag started");
    }

    fn drag_end(&self, _event: &DragEvent) {
        debug!(project_id = %self.project.id(), "drag ended");
    }
}
