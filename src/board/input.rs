//! Project input form.

use super::alert::{INVALID_INPUT_MESSAGE, UserAlert};
use super::component::{Component, MountSpec, mount};
use super::config::{BoardConfig, FormRules};
use super::document::{Element, InsertPosition, SharedDocument, write_document};
use super::error::BoardResult;
use super::templates::{BoardTemplates, FormContent};
use super::validation::{FieldError, FormFields, validate_form};
use crate::project::{
    domain::{NewProject, ProjectId},
    ports::ProjectRepository,
    services::{ProjectStore, ProjectStoreError},
};
use mockable::Clock;
use std::sync::Arc;
use tracing::{debug, info};

/// Result of submitting the input form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The project was added to the store and the fields were cleared.
    Added(ProjectId),
    /// Validation failed; the user was alerted and nothing was added.
    Rejected(Vec<FieldError>),
    /// The form is not active; nothing was validated or added.
    Ignored,
}

/// The form used to add projects.
pub struct ProjectInputForm<R, C>
where
    R: ProjectRepository,
    C: Clock + Send + Sync,
{
    store: Arc<ProjectStore<R, C>>,
    alert: Arc<dyn UserAlert>,
    templates: Arc<BoardTemplates>,
    rules: FormRules,
    element: Element,
    fields: FormFields,
    active: bool,
    html: String,
}

impl<R, C> ProjectInputForm<R, C>
where
    R: ProjectRepository,
    C: Clock + Send + Sync,
{
    /// Mounts the form at the start of the app container.
    ///
    /// # Errors
    ///
    /// Returns [`super::BoardError::Config`] when the form limits admit head
    /// counts a project rejects, and [`super::BoardError::MissingTemplate`] or
    /// [`super::BoardError::MissingMountPoint`] when the document lacks the
    /// input template or app container.
    pub fn mount(
        store: Arc<ProjectStore<R, C>>,
        document: &SharedDocument,
        templates: Arc<BoardTemplates>,
        alert: Arc<dyn UserAlert>,
        config: &BoardConfig,
    ) -> BoardResult<Self> {
        config.form.check()?;
        let element = mount(
            &mut write_document(document),
            MountSpec {
                template_id: &config.input_template_id,
                container_id: &config.app_container_id,
                position: InsertPosition::AfterBegin,
                element_id: Some(config.form_element_id.as_str()),
            },
        )?;
        let mut form = Self {
            store,
            alert,
            templates,
            rules: config.form.clone(),
            element,
            fields: FormFields::default(),
            active: false,
            html: String::new(),
        };
        form.activate()?;
        form.render_content()?;
        Ok(form)
    }

    /// Returns the form element.
    #[must_use]
    pub const fn element(&self) -> &Element {
        &self.element
    }

    /// Returns the current field values.
    #[must_use]
    pub const fn fields(&self) -> &FormFields {
        &self.fields
    }

    /// Sets the title field.
    pub fn set_title(&mut self, value: impl Into<String>) {
        self.fields.title = value.into();
    }

    /// Sets the description field.
    pub fn set_description(&mut self, value: impl Into<String>) {
        self.fields.description = value.into();
    }

    /// Sets the people field.
    pub fn set_people(&mut self, value: impl Into<String>) {
        self.fields.people = value.into();
    }

    /// Fills every field at once.
    pub fn fill(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: impl Into<String>,
    ) {
        self.set_title(title);
        self.set_description(description);
        self.set_people(people);
    }

    /// Validates the fields and adds the project to the store.
    ///
    /// Invalid input raises a single user alert and leaves the fields as
    /// typed. The fields are cleared only once the store accepts the project.
    ///
    /// # Errors
    ///
    /// Returns store or render errors. Validation failures are not errors.
    pub fn submit(&mut self) -> BoardResult<SubmitOutcome> {
        if !self.active {
            debug!("submit ignored, form not active");
            return Ok(SubmitOutcome::Ignored);
        }
        let input = match validate_form(&self.fields, &self.rules) {
            Ok(input) => input,
            Err(errors) => {
                debug!(failures = errors.len(), "form input rejected");
                self.alert.alert(INVALID_INPUT_MESSAGE);
                return Ok(SubmitOutcome::Rejected(errors));
            }
        };
        let fields = NewProject::new(input.title, input.description, input.people)
            .map_err(ProjectStoreError::from)?;
        let id = self.store.insert(fields)?;
        self.fields = FormFields::default();
        self.render_content()?;
        info!(project_id = %id, "project submitted");
        Ok(SubmitOutcome::Added(id))
    }

    /// Returns the rendered HTML.
    #[must_use]
    pub fn html(&self) -> &str {
        &self.html
    }
}

impl<R, C> Component for ProjectInputForm<R, C>
where
    R: ProjectRepository,
    C: Clock + Send + Sync,
{
    fn activate(&mut self) -> BoardResult<()> {
        self.active = true;
        Ok(())
    }

    fn render_content(&mut self) -> BoardResult<()> {
        self.html = self.templates.render_form(FormContent {
            form_id: self.element.id().unwrap_or_default(),
            title: &self.fields.title,
            description: &self.fields.description,
            people: &self.fields.people,
            people_min: self.rules.people_min,
            people_max: self.rules.people_max,
        })?;
        Ok(())
    }
}
