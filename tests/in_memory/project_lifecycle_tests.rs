//! In-memory integration tests for project lifecycle flows.

use std::time::Duration;

use super::helpers::{Deployment, deployment, draft, username};
use project_service::project::{
    adapters::memory::RecordedTaskRequest,
    domain::{ProjectCode, ProjectStatus},
    services::ProjectManagerError,
};
use rstest::rstest;

const NOTIFICATION_WAIT: Duration = Duration::from_secs(2);

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_complete_then_guard_rejects_completed_project(deployment: Deployment) {
    deployment.act_as("alice");

    let created = deployment
        .service
        .create(draft("P-100", "Billing revamp"))
        .await
        .expect("create should succeed");
    assert_eq!(created.assigned_manager, username("alice"));
    assert_eq!(created.status, ProjectStatus::Open);

    let completed = deployment
        .service
        .complete("P-100")
        .await
        .expect("complete should succeed");
    assert_eq!(completed.status, ProjectStatus::Completed);

    let requests = deployment
        .task_service
        .wait_for_requests(1, NOTIFICATION_WAIT)
        .await;
    assert_eq!(
        requests,
        vec![RecordedTaskRequest::CompleteAll(
            ProjectCode::new("P-100").expect("valid code")
        )]
    );

    let guard = deployment.service.exists_and_open("P-100").await;
    assert!(matches!(guard, Err(ProjectManagerError::AlreadyCompleted(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn other_manager_and_employee_are_kept_out(deployment: Deployment) {
    deployment.act_as("alice");
    deployment
        .service
        .create(draft("P-200", "Data platform"))
        .await
        .expect("create should succeed");

    deployment.act_as("bob");
    let as_bob = deployment.service.update("P-200", draft("P-200", "Hijacked")).await;
    assert!(matches!(as_bob, Err(ProjectManagerError::AccessDenied { .. })));

    deployment.act_as("erin");
    let as_erin = deployment.service.read_manager_by_code("P-200").await;
    assert!(matches!(as_erin, Err(ProjectManagerError::AccessDenied { .. })));

    deployment.act_as("root");
    let as_root = deployment
        .service
        .read_by_code("P-200")
        .await
        .expect("admin may read any project");
    assert_eq!(as_root.project_name, "Data platform");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_code_is_released_for_reuse(deployment: Deployment) {
    deployment.act_as("alice");
    let original = deployment
        .service
        .create(draft("P-300", "Legacy cleanup"))
        .await
        .expect("create should succeed");

    deployment
        .service
        .delete("P-300")
        .await
        .expect("delete should succeed");
    let reread = deployment.service.read_by_code("P-300").await;
    assert!(matches!(reread, Err(ProjectManagerError::NotFound(_))));

    let replacement = deployment
        .service
        .create(draft("P-300", "Fresh start"))
        .await
        .expect("code should be free again");
    assert_ne!(replacement.id, original.id);

    let retired = deployment
        .repository
        .find_by_id(original.id)
        .expect("lookup by id")
        .expect("deleted record is kept");
    assert!(retired.is_deleted());
    assert_eq!(
        retired.project_code().as_str(),
        format!("P-300-{}", original.id)
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_keeps_owner_when_admin_edits(deployment: Deployment) {
    deployment.act_as("alice");
    let created = deployment
        .service
        .create(draft("P-400", "Onboarding"))
        .await
        .expect("create should succeed");

    deployment.act_as("root");
    let request = draft("P-999", "Onboarding v2").with_assigned_manager(username("root"));
    let updated = deployment
        .service
        .update("P-400", request)
        .await
        .expect("admin may update");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.project_code.as_str(), "P-400");
    assert_eq!(updated.assigned_manager, username("alice"));
    assert_eq!(updated.status, ProjectStatus::Open);
    assert_eq!(updated.project_name, "Onboarding v2");
}
