//! Unit tests for status columns as render subscribers and drop targets.

use crate::board::column::ProjectColumn;
use crate::board::config::BoardConfig;
use crate::board::document::SharedDocument;
use crate::board::drag::{DataTransfer, DragEvent, DragPayloadError, DragTarget, PLAIN_TEXT};
use crate::board::error::BoardError;
use crate::board::templates::BoardTemplates;
use crate::board::board_document;
use crate::project::{
    adapters::memory::InMemoryProjectRepository,
    domain::{ProjectId, ProjectStatus},
    services::{InMemoryProjectStore, MoveOutcome},
};
use eyre::{bail, ensure};
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use std::sync::Arc;

type Column = ProjectColumn<InMemoryProjectRepository, DefaultClock>;

struct Harness {
    store: Arc<InMemoryProjectStore>,
    document: SharedDocument,
    templates: Arc<BoardTemplates>,
    config: BoardConfig,
}

impl Harness {
    fn column(&self, status: ProjectStatus) -> Result<Column, BoardError> {
        ProjectColumn::mount(
            Arc::clone(&self.store),
            Arc::clone(&self.document),
            Arc::clone(&self.templates),
            &self.config,
            status,
        )
    }
}

#[fixture]
fn harness() -> Harness {
    let config = BoardConfig::default();
    let templates = BoardTemplates::new().unwrap_or_else(|err| panic!("templates: {err}"));
    Harness {
        store: Arc::new(InMemoryProjectStore::in_memory()),
        document: board_document(&config).into_shared(),
        templates: Arc::new(templates),
        config,
    }
}

fn plain_text_event(text: &str) -> DragEvent {
    let mut data = DataTransfer::new();
    data.set_data(PLAIN_TEXT, text);
    DragEvent::with_data(data)
}

fn ids(column: &Column) -> Vec<u64> {
    column
        .projects()
        .iter()
        .map(|project| project.id().value())
        .collect()
}

#[rstest]
fn column_renders_existing_projects_on_mount(harness: Harness) -> eyre::Result<()> {
    harness.store.add("Existing", "Added before mount", 2)?;
    let column = harness.column(ProjectStatus::Active)?;

    ensure!(ids(&column) == vec![1]);
    ensure!(column.is_subscribed());
    Ok(())
}

#[rstest]
fn columns_rerender_on_notification(harness: Harness) -> eyre::Result<()> {
    let active = harness.column(ProjectStatus::Active)?;
    let finished = harness.column(ProjectStatus::Finished)?;

    let first = harness.store.add("First", "One", 1)?;
    harness.store.add("Second", "Two", 2)?;
    ensure!(ids(&active) == vec![2, 1], "newest first, got {:?}", ids(&active));
    ensure!(ids(&finished).is_empty());

    harness.store.move_project(first, ProjectStatus::Finished)?;
    ensure!(ids(&active) == vec![2]);
    ensure!(ids(&finished) == vec![1]);
    Ok(())
}

#[rstest]
fn column_html_lists_items(harness: Harness) -> eyre::Result<()> {
    let column = harness.column(ProjectStatus::Active)?;
    harness.store.add("Solo", "Just one person", 1)?;
    harness.store.add("Team <b>", "Several people", 2)?;

    let html = column.html()?;

    ensure!(html.contains(r#"<section class="projects" id="active-projects">"#));
    ensure!(html.contains("<h2>ACTIVE PROJECTS</h2>"));
    ensure!(html.contains(r#"<ul id="active-projects-list">"#));
    ensure!(html.contains("<h3>1 Person</h3>"));
    ensure!(html.contains("<h3>2 People</h3>"));
    ensure!(html.contains("Team &lt;b&gt;"), "title not escaped: {html}");
    ensure!(html.contains(r#"<li draggable="true" id="2">"#));
    Ok(())
}

#[rstest]
fn drag_over_accepts_plain_text_only(harness: Harness) -> eyre::Result<()> {
    let column = harness.column(ProjectStatus::Finished)?;

    let mut html_drag = DragEvent::new();
    if let Some(data) = html_drag.data_transfer_mut() {
        data.set_data("text/html", "<p>1</p>");
    }
    column.drag_over(&mut html_drag);
    ensure!(!html_drag.default_prevented());
    ensure!(!column.list().has_class("droppable"));

    let mut event = plain_text_event("1");
    column.drag_over(&mut event);
    ensure!(event.default_prevented());
    ensure!(column.list().class_list() == "droppable expanded");

    column.drag_leave(&event);
    ensure!(column.list().class_list() == "collapsed");
    Ok(())
}

#[rstest]
fn drop_moves_project_to_column_status(harness: Harness) -> eyre::Result<()> {
    let active = harness.column(ProjectStatus::Active)?;
    let finished = harness.column(ProjectStatus::Finished)?;
    let id = harness.store.add("Drag me", "Across columns", 3)?;

    let outcome = finished.drop_project(&plain_text_event(&id.to_string()))?;

    ensure!(outcome == MoveOutcome::Moved);
    ensure!(ids(&active).is_empty());
    ensure!(ids(&finished) == vec![id.value()]);
    Ok(())
}

#[rstest]
fn drop_onto_current_column_is_unchanged(harness: Harness) -> eyre::Result<()> {
    let active = harness.column(ProjectStatus::Active)?;
    let id = harness.store.add("Stay", "In place", 1)?;

    ensure!(active.drop_project(&plain_text_event(&id.to_string()))? == MoveOutcome::Unchanged);
    Ok(())
}

#[rstest]
#[case("garbage")]
#[case("42")]
fn bad_drop_payload_changes_nothing(harness: Harness, #[case] payload: &str) -> eyre::Result<()> {
    let finished = harness.column(ProjectStatus::Finished)?;
    harness.store.add("Keep", "Active", 1)?;
    let before = harness.store.snapshot()?;

    match finished.drop_project(&plain_text_event(payload)) {
        Err(BoardError::DragPayload(
            DragPayloadError::Malformed(_) | DragPayloadError::UnknownProject(_),
        )) => {}
        other => bail!("expected payload rejection, got {other:?}"),
    }
    ensure!(harness.store.snapshot()? == before);
    Ok(())
}

#[rstest]
fn dropped_column_unsubscribes(harness: Harness) -> eyre::Result<()> {
    let column = harness.column(ProjectStatus::Active)?;
    ensure!(harness.store.subscriber_count() == 1);
    drop(column);
    ensure!(harness.store.subscriber_count() == 0);
    ensure!(harness.store.add("After", "Drop", 1)? == ProjectId::FIRST);
    Ok(())
}

#[rstest]
fn item_ids_are_mounted_in_document(harness: Harness) -> eyre::Result<()> {
    let _column = harness.column(ProjectStatus::Active)?;
    harness.store.add("One", "First item", 1)?;
    harness.store.add("Two", "Second item", 1)?;

    let document = harness
        .document
        .read()
        .map_err(|err| eyre::eyre!("poisoned: {err}"))?;
    let mounted: Vec<&str> = document
        .children("active-projects-list")
        .unwrap_or_default()
        .iter()
        .filter_map(|element| element.id())
        .collect();
    ensure!(mounted == vec!["2", "1"], "unexpected items {mounted:?}");
    Ok(())
}
