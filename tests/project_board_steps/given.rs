//! Given steps for project board BDD scenarios.

use super::world::BoardWorld;
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given("a mounted project board")]
fn mounted_board(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    world.mount().wrap_err("mount board for scenario")
}

#[given(
    r#"the form is submitted with title "{title}", description "{description}", and people "{people}""#
)]
fn form_already_submitted(
    world: &mut BoardWorld,
    title: String,
    description: String,
    people: String,
) -> Result<(), eyre::Report> {
    let input = world.board_mut()?.input_mut();
    input.fill(title, description, people);
    input.submit().wrap_err("submit project form in scenario setup")?;
    Ok(())
}
