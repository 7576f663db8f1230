//! Outbound port to the task-tracking service.

use crate::project::domain::{ProjectCode, TaskCounts};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Requests the project service sends to the task service.
///
/// Completion and deletion requests are fired without waiting for the
/// outcome; their failures never reach the caller of a project operation.
#[async_trait]
pub trait TaskServiceClient: Send + Sync {
    /// Asks the task service to complete every task of the project.
    async fn complete_all_for_project(&self, code: &ProjectCode) -> TaskServiceResult<()>;

    /// Asks the task service to delete every task of the project.
    async fn delete_all_for_project(&self, code: &ProjectCode) -> TaskServiceResult<()>;

    /// Returns completed and unfinished task counts for the project.
    ///
    /// Returns `None` when the task service cannot report counts.
    async fn task_counts(&self, code: &ProjectCode) -> TaskServiceResult<Option<TaskCounts>>;
}

/// Errors returned by task service clients.
#[derive(Debug, Clone, Error)]
pub enum TaskServiceError {
    /// The task service refused the request.
    #[error("task service rejected request for project {code}: {reason}")]
    Rejected {
        /// Project the request was about.
        code: ProjectCode,
        /// Reason reported by the task service.
        reason: String,
    },

    /// Transport failure while talking to the task service.
    #[error("task service unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskServiceError {
    /// Wraps a transport error.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}
