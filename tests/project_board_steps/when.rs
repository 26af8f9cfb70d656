//! When steps for project board BDD scenarios.

use super::world::BoardWorld;
use eyre::WrapErr;
use project_board::board::{DataTransfer, DragEvent, DragTarget, drag::PLAIN_TEXT};
use project_board::project::domain::{ProjectId, ProjectStatus};
use rstest_bdd_macros::when;

#[when(
    r#"the form is submitted with title "{title}", description "{description}", and people "{people}""#
)]
fn submit_form(
    world: &mut BoardWorld,
    title: String,
    description: String,
    people: String,
) -> Result<(), eyre::Report> {
    let input = world.board_mut()?.input_mut();
    input.fill(title, description, people);
    input.submit().wrap_err("submit project form")?;
    Ok(())
}

#[when(r#"project {id:u64} is dragged to the "{status}" column"#)]
fn drag_project(world: &mut BoardWorld, id: u64, status: String) -> Result<(), eyre::Report> {
    let target = ProjectStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid column in scenario: {err}"))?;
    let result = world.board()?.drag_project(ProjectId::new(id)?, target);
    world.last_drag_result = Some(result);
    Ok(())
}

#[when(r#"the payload "{payload}" is dropped on the "{status}" column"#)]
fn drop_payload(world: &mut BoardWorld, payload: String, status: String) -> Result<(), eyre::Report> {
    let target = ProjectStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid column in scenario: {err}"))?;
    let mut data = DataTransfer::new();
    data.set_data(PLAIN_TEXT, payload);
    let result = world
        .board()?
        .column(target)
        .drop_project(&DragEvent::with_data(data));
    world.last_drag_result = Some(result);
    Ok(())
}
