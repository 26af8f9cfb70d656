//! Then steps for project board BDD scenarios.

use super::world::BoardWorld;
use project_board::board::BoardError;
use project_board::project::{domain::ProjectStatus, services::MoveOutcome};
use rstest_bdd_macros::then;

fn column_status(name: &str) -> Result<ProjectStatus, eyre::Report> {
    ProjectStatus::try_from(name).map_err(|err| eyre::eyre!("invalid column in scenario: {err}"))
}

#[then(r#"the {status} column count is {count:usize}"#)]
fn column_lists(world: &BoardWorld, status: String, count: usize) -> Result<(), eyre::Report> {
    let listed = world.board()?.column(column_status(&status)?).projects().len();
    if listed != count {
        return Err(eyre::eyre!("expected {count} projects in {status}, found {listed}"));
    }
    Ok(())
}

#[then(r#"the active column shows the label "{label}""#)]
fn active_column_shows_label(world: &BoardWorld, label: String) -> Result<(), eyre::Report> {
    let html = world.board()?.column(ProjectStatus::Active).html()?;
    if !html.contains(&format!("<h3>{label}</h3>")) {
        return Err(eyre::eyre!("label {label} not rendered in {html}"));
    }
    Ok(())
}

#[then(r#"the user is alerted "{message}""#)]
fn user_is_alerted(world: &BoardWorld, message: String) -> Result<(), eyre::Report> {
    let messages = world.alert.messages();
    if messages != vec![message.clone()] {
        return Err(eyre::eyre!("expected single alert {message}, got {messages:?}"));
    }
    Ok(())
}

#[then(r#"the store holds {count:usize} projects"#)]
fn store_holds(world: &BoardWorld, count: usize) -> Result<(), eyre::Report> {
    let stored = world.board()?.store().len()?;
    if stored != count {
        return Err(eyre::eyre!("expected {count} stored projects, found {stored}"));
    }
    Ok(())
}

#[then(r#"the drag reports "{outcome}""#)]
fn drag_reports(world: &BoardWorld, outcome: String) -> Result<(), eyre::Report> {
    let expected = match outcome.as_str() {
        "moved" => MoveOutcome::Moved,
        "unchanged" => MoveOutcome::Unchanged,
        "not found" => MoveOutcome::NotFound,
        other => return Err(eyre::eyre!("unknown outcome in scenario: {other}")),
    };
    match world.last_drag_result.as_ref() {
        Some(Ok(actual)) if *actual == expected => Ok(()),
        other => Err(eyre::eyre!("expected {expected:?}, got {other:?}")),
    }
}

#[then("the drop is rejected")]
fn drop_is_rejected(world: &BoardWorld) -> Result<(), eyre::Report> {
    match world.last_drag_result.as_ref() {
        Some(Err(BoardError::DragPayload(_))) => Ok(()),
        other => Err(eyre::eyre!("expected payload rejection, got {other:?}")),
    }
}
