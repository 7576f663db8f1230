//! Then steps for project lifecycle BDD scenarios.

use std::time::Duration;

use super::world::{ProjectWorld, run_async};
use project_service::project::{
    adapters::memory::RecordedTaskRequest,
    domain::{ProjectCode, ProjectStatus},
    services::ProjectManagerError,
};
use rstest_bdd_macros::then;

#[then(r#"project "{code}" is managed by "{manager}" with status "{status}""#)]
fn project_state_is(
    world: &ProjectWorld,
    code: String,
    manager: String,
    status: String,
) -> Result<(), eyre::Report> {
    let expected_status = ProjectStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let view = world
        .last_view
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no project view, last error: {:?}", world.last_error))?;

    eyre::ensure!(view.project_code.as_str() == code, "unexpected project code");
    eyre::ensure!(
        view.assigned_manager.as_str() == manager,
        "expected manager {manager}, found {}",
        view.assigned_manager
    );
    eyre::ensure!(
        view.status == expected_status,
        "expected status {}, found {}",
        expected_status.as_str(),
        view.status.as_str()
    );
    Ok(())
}

#[then(r#"the task service is asked once to complete the tasks of "{code}""#)]
fn completion_requested_once(world: &ProjectWorld, code: String) -> Result<(), eyre::Report> {
    let expected = vec![RecordedTaskRequest::CompleteAll(ProjectCode::new(code)?)];
    let received = run_async(
        world
            .task_service
            .wait_for_requests(1, Duration::from_secs(2)),
    );
    eyre::ensure!(
        received == expected,
        "expected {expected:?}, received {received:?}"
    );
    Ok(())
}

#[then("the operation fails because the project is completed")]
fn fails_already_completed(world: &ProjectWorld) -> Result<(), eyre::Report> {
    match &world.last_error {
        Some(ProjectManagerError::AlreadyCompleted(_)) => Ok(()),
        other => Err(eyre::eyre!("expected AlreadyCompleted error, got {other:?}")),
    }
}

#[then("the operation fails with access denied")]
fn fails_access_denied(world: &ProjectWorld) -> Result<(), eyre::Report> {
    match &world.last_error {
        Some(ProjectManagerError::AccessDenied { .. }) => Ok(()),
        other => Err(eyre::eyre!("expected AccessDenied error, got {other:?}")),
    }
}

#[then("the operation fails because the project does not exist")]
fn fails_not_found(world: &ProjectWorld) -> Result<(), eyre::Report> {
    match &world.last_error {
        Some(ProjectManagerError::NotFound(_)) => Ok(()),
        other => Err(eyre::eyre!("expected NotFound error, got {other:?}")),
    }
}
