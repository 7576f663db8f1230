//! When steps for project lifecycle BDD scenarios.

use super::world::{ProjectWorld, run_async};
use project_service::project::domain::ProjectDraft;
use rstest_bdd_macros::when;

#[when(r#""{manager}" creates project "{code}" named "{name}""#)]
fn create_project(
    world: &mut ProjectWorld,
    manager: String,
    code: String,
    name: String,
) -> Result<(), eyre::Report> {
    world.act_as(&manager)?;
    let draft = ProjectDraft::new(code, name)?;
    let outcome = run_async(world.service.create(draft));
    world.last_view = world.remember(outcome);
    Ok(())
}

#[when(r#""{caller}" completes project "{code}""#)]
fn complete_project(
    world: &mut ProjectWorld,
    caller: String,
    code: String,
) -> Result<(), eyre::Report> {
    world.act_as(&caller)?;
    let outcome = run_async(world.service.complete(&code));
    world.last_view = world.remember(outcome);
    Ok(())
}

#[when(r#""{caller}" reads project "{code}""#)]
fn read_project(
    world: &mut ProjectWorld,
    caller: String,
    code: String,
) -> Result<(), eyre::Report> {
    world.act_as(&caller)?;
    let outcome = run_async(world.service.read_by_code(&code));
    world.last_view = world.remember(outcome);
    Ok(())
}

#[when(r#""{caller}" deletes project "{code}""#)]
fn delete_project(
    world: &mut ProjectWorld,
    caller: String,
    code: String,
) -> Result<(), eyre::Report> {
    world.act_as(&caller)?;
    let outcome = run_async(world.service.delete(&code));
    world.remember(outcome);
    world.last_view = None;
    Ok(())
}

#[when(r#""{caller}" checks that project "{code}" is still open"#)]
fn check_project_open(
    world: &mut ProjectWorld,
    caller: String,
    code: String,
) -> Result<(), eyre::Report> {
    world.act_as(&caller)?;
    let outcome = run_async(world.service.exists_and_open(&code));
    world.remember(outcome);
    Ok(())
}
