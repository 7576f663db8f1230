//! Given steps for project lifecycle BDD scenarios.

use super::world::{ProjectWorld, run_async};
use eyre::WrapErr;
use project_service::project::domain::{ProjectDraft, Role, Username};
use rstest_bdd_macros::given;

#[given(r#"a manager "{name}""#)]
fn a_manager(world: &mut ProjectWorld, name: String) -> Result<(), eyre::Report> {
    world
        .identity
        .register(Username::new(name)?, [Role::Manager])?;
    Ok(())
}

#[given(r#"an employee "{name}""#)]
fn an_employee(world: &mut ProjectWorld, name: String) -> Result<(), eyre::Report> {
    world
        .identity
        .register(Username::new(name)?, [Role::Employee])?;
    Ok(())
}

#[given(r#""{manager}" has created project "{code}" named "{name}""#)]
fn project_already_created(
    world: &mut ProjectWorld,
    manager: String,
    code: String,
    name: String,
) -> Result<(), eyre::Report> {
    world.act_as(&manager)?;
    let draft = ProjectDraft::new(code, name)?;
    let created = run_async(world.service.create(draft)).wrap_err("create project in setup")?;
    world.last_view = Some(created);
    Ok(())
}
