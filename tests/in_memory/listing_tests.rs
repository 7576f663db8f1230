//! In-memory integration tests for listing and counting projects.

use super::helpers::{Deployment, deployment, draft, username};
use project_service::project::domain::{ProjectCode, TaskCounts};
use rstest::rstest;

async fn create_as(deployment: &Deployment, caller: &str, code: &str) {
    deployment.act_as(caller);
    deployment
        .service
        .create(draft(code, "Listed project"))
        .await
        .expect("create should succeed");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listings_are_scoped_to_the_caller(deployment: Deployment) {
    create_as(&deployment, "alice", "A-1").await;
    create_as(&deployment, "alice", "A-2").await;
    create_as(&deployment, "bob", "B-1").await;
    deployment.task_service.set_task_counts(
        ProjectCode::new("A-2").expect("valid code"),
        TaskCounts {
            completed: 1,
            unfinished: 5,
        },
    );

    deployment.act_as("alice");
    let mine = deployment.service.list_mine().await.expect("list mine");
    let as_manager = deployment
        .service
        .list_mine_as_manager()
        .await
        .expect("list mine as manager");
    let everything = deployment.service.list_all().await.expect("list all");

    assert_eq!(mine.len(), 2);
    assert!(
        mine.iter()
            .all(|summary| summary.project.assigned_manager == username("alice"))
    );
    let enriched: Vec<_> = mine
        .iter()
        .filter_map(|summary| summary.task_counts)
        .collect();
    assert_eq!(
        enriched,
        vec![TaskCounts {
            completed: 1,
            unfinished: 5
        }]
    );
    assert_eq!(as_manager.len(), 2);
    assert_eq!(everything.len(), 3);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn open_count_drops_after_completion_and_deletion(deployment: Deployment) {
    create_as(&deployment, "bob", "B-1").await;
    create_as(&deployment, "bob", "B-2").await;
    create_as(&deployment, "bob", "B-3").await;

    deployment.act_as("root");
    assert_eq!(
        deployment
            .service
            .count_open_for_manager("bob")
            .await
            .expect("count"),
        3
    );

    deployment.act_as("bob");
    deployment.service.complete("B-1").await.expect("complete");
    deployment.service.delete("B-2").await.expect("delete");

    deployment.act_as("root");
    let remaining = deployment
        .service
        .count_open_for_manager("bob")
        .await
        .expect("count");
    assert_eq!(remaining, 1);
}
