//! Task service client used until the task service integration exists.

use async_trait::async_trait;

use crate::project::{
    domain::{ProjectCode, TaskCounts},
    ports::{TaskServiceClient, TaskServiceResult},
};

/// Task service client that drops every request.
///
/// Project operations stay usable without a task service: notifications are
/// logged and task counts are reported as unavailable.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconnectedTaskService;

#[async_trait]
impl TaskServiceClient for UnconnectedTaskService {
    async fn complete_all_for_project(&self, code: &ProjectCode) -> TaskServiceResult<()> {
        tracing::debug!(project_code = %code, "task service not connected, completion skipped");
        Ok(())
    }

    async fn delete_all_for_project(&self, code: &ProjectCode) -> TaskServiceResult<()> {
        tracing::debug!(project_code = %code, "task service not connected, deletion skipped");
        Ok(())
    }

    async fn task_counts(&self, _code: &ProjectCode) -> TaskServiceResult<Option<TaskCounts>> {
        Ok(None)
    }
}
