//! HTML rendering for board components.

use super::error::{BoardError, BoardResult};
use crate::project::domain::{Project, ProjectStatus};
use minijinja::{Environment, context};

const ITEM_TEMPLATE: &str = "single-project.html";
const COLUMN_TEMPLATE: &str = "project-list.html";
const FORM_TEMPLATE: &str = "project-input.html";

const ITEM_SOURCE: &str = r#"<li{% if draggable %} draggable="true"{% endif %} id="{{ id }}"><h2>{{ title }}</h2><h3>{{ people_label }}</h3><p>{{ description }}</p></li>"#;

const COLUMN_SOURCE: &str = r#"<section class="projects" id="{{ section_id }}"><header><h2>{{ heading }}</h2></header><ul id="{{ list_id }}"{% if list_classes %} class="{{ list_classes }}"{% endif %}>{% for item in items %}{{ item|safe }}{% endfor %}</ul></section>"#;

const FORM_SOURCE: &str = r#"<form id="{{ form_id }}"><div class="form-control"><label for="title">Title</label><input type="text" id="title" value="{{ title }}" /></div><div class="form-control"><label for="description">Description</label><textarea id="description" rows="3">{{ description }}</textarea></div><div class="form-control"><label for="people">People</label><input type="number" id="people" step="1" min="{{ people_min }}" max="{{ people_max }}" value="{{ people }}" /></div><button type="submit">ADD PROJECT</button></form>"#;

/// Content of a rendered status column.
#[derive(Debug, Clone, Copy)]
pub struct ColumnContent<'a> {
    /// Status the column lists.
    pub status: ProjectStatus,
    /// Classes on the project list.
    pub list_classes: &'a str,
    /// Already rendered items, in display order.
    pub items: &'a [String],
}

/// Content of a rendered input form.
#[derive(Debug, Clone, Copy)]
pub struct FormContent<'a> {
    /// Form element id.
    pub form_id: &'a str,
    /// Current title field.
    pub title: &'a str,
    /// Current description field.
    pub description: &'a str,
    /// Current people field.
    pub people: &'a str,
    /// Smallest accepted people count.
    pub people_min: i64,
    /// Largest accepted people count.
    pub people_max: i64,
}

/// Template environment shared by the board components.
#[derive(Debug)]
pub struct BoardTemplates {
    env: Environment<'static>,
}

impl BoardTemplates {
    /// Builds the environment with the item, column and form templates.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Render`] when a template fails to compile.
    pub fn new() -> BoardResult<Self> {
        let mut env = Environment::new();
        for (name, source) in [
            (ITEM_TEMPLATE, ITEM_SOURCE),
            (COLUMN_TEMPLATE, COLUMN_SOURCE),
            (FORM_TEMPLATE, FORM_SOURCE),
        ] {
            env.add_template(name, source)
                .map_err(|source_error| render_error(name, source_error))?;
        }
        Ok(Self { env })
    }

    /// Renders one project item.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Render`] when rendering fails.
    pub fn render_item(&self, project: &Project, draggable: bool) -> BoardResult<String> {
        self.render(
            ITEM_TEMPLATE,
            context! {
                draggable => draggable,
                id => project.id().to_string(),
                title => project.title(),
                people_label => project.people().label(),
                description => project.description(),
            },
        )
    }

    /// Renders a status column around its rendered items.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Render`] when rendering fails.
    pub fn render_column(&self, content: ColumnContent<'_>) -> BoardResult<String> {
        self.render(
            COLUMN_TEMPLATE,
            context! {
                section_id => section_id(content.status),
                heading => heading(content.status),
                list_id => list_id(content.status),
                list_classes => content.list_classes,
                items => content.items,
            },
        )
    }

    /// Renders the input form with its current field values.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Render`] when rendering fails.
    pub fn render_form(&self, content: FormContent<'_>) -> BoardResult<String> {
        self.render(
            FORM_TEMPLATE,
            context! {
                form_id => content.form_id,
                title => content.title,
                description => content.description,
                people => content.people,
                people_min => content.people_min,
                people_max => content.people_max,
            },
        )
    }

    fn render(&self, name: &str, ctx: minijinja::Value) -> BoardResult<String> {
        self.env
            .get_template(name)
            .and_then(|template| template.render(ctx))
            .map_err(|source| render_error(name, source))
    }
}

fn render_error(name: &str, source: minijinja::Error) -> BoardError {
    BoardError::Render {
        template: name.to_owned(),
        source,
    }
}

/// Returns the id of a status column's section, e.g. `active-projects`.
#[must_use]
pub fn section_id(status: ProjectStatus) -> String {
    format!("{status}-projects")
}

/// Returns the id of a status column's list, e.g. `active-projects-list`.
#[must_use]
pub fn list_id(status: ProjectStatus) -> String {
    format!("{status}-projects-list")
}

/// Returns a status column's heading, e.g. `ACTIVE PROJECTS`.
#[must_use]
pub fn heading(status: ProjectStatus) -> String {
    format!("{} PROJECTS", status.as_str().to_ascii_uppercase())
}
