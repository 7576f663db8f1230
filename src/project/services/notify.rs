//! Fire-and-forget delivery of task service notifications.

use crate::project::{domain::ProjectCode, ports::TaskServiceClient};
use std::sync::Arc;
use tokio::runtime::Handle;

/// Notification sent to the task service after a project mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum TaskNotification {
    /// Every task of the project should be completed.
    CompleteAll(ProjectCode),
    /// Every task of the project should be deleted.
    DeleteAll(ProjectCode),
}

/// Spawns delivery of `notification` without waiting for it.
///
/// Failures are logged and dropped.
pub(super) fn dispatch<T>(client: &Arc<T>, notification: TaskNotification)
where
    T: TaskServiceClient + 'static,
{
    let Ok(handle) = Handle::try_current() else {
        tracing::warn!(?notification, "no async runtime, task notification dropped");
        return;
    };
    let task_client = Arc::clone(client);
    handle.spawn(async move {
        let outcome = match &notification {
            TaskNotification::CompleteAll(code) => task_client.complete_all_for_project(code).await,
            TaskNotification::DeleteAll(code) => task_client.delete_all_for_project(code).await,
        };
        match outcome {
            Ok(()) => tracing::debug!(?notification, "task notification delivered"),
            Err(err) => tracing::warn!(error = %err, ?notification, "task notification failed"),
        }
    });
}
