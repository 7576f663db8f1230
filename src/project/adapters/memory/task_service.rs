//! Recording task service client for tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::sync::Notify;

use crate::project::{
    domain::{ProjectCode, TaskCounts},
    ports::{TaskServiceClient, TaskServiceError, TaskServiceResult},
};

/// Request received by [`RecordingTaskService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedTaskRequest {
    /// `complete_all_for_project` was called.
    CompleteAll(ProjectCode),
    /// `delete_all_for_project` was called.
    DeleteAll(ProjectCode),
}

/// Task service client that records requests instead of sending them.
///
/// Notifications are delivered from spawned tasks, so tests wait for them
/// with [`RecordingTaskService::wait_for_requests`].
#[derive(Debug, Clone, Default)]
pub struct RecordingTaskService {
    requests: Arc<Mutex<Vec<RecordedTaskRequest>>>,
    counts: Arc<Mutex<HashMap<ProjectCode, TaskCounts>>>,
    arrivals: Arc<Notify>,
    failing: bool,
}

impl RecordingTaskService {
    /// Creates a client that accepts every request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a client that records every request and then fails it.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    /// Sets the task counts reported for `code`.
    pub fn set_task_counts(&self, code: ProjectCode, counts: TaskCounts) {
        self.counts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(code, counts);
    }

    /// Returns the requests received so far, in arrival order.
    #[must_use]
    pub fn requests(&self) -> Vec<RecordedTaskRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Waits until at least `count` requests have arrived or `timeout`
    /// elapses, then returns what was received.
    pub async fn wait_for_requests(
        &self,
        count: usize,
        timeout: Duration,
    ) -> Vec<RecordedTaskRequest> {
        let deadline = tokio::time::Instant::now() + timeout;
        loop {
            let arrival = self.arrivals.notified();
            let received = self.requests();
            if received.len() >= count {
                return received;
            }
            if tokio::time::timeout_at(deadline, arrival).await.is_err() {
                return self.requests();
            }
        }
    }

    fn record(&self, request: RecordedTaskRequest) -> TaskServiceResult<()> {
        let code = match &request {
            RecordedTaskRequest::CompleteAll(code) | RecordedTaskRequest::DeleteAll(code) => {
                code.clone()
            }
        };
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);
        self.arrivals.notify_waiters();

        if self.failing {
            return Err(TaskServiceError::Rejected {
                code,
                reason: "recording client configured to fail".to_owned(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl TaskServiceClient for RecordingTaskService {
    async fn complete_all_for_project(&self, code: &ProjectCode) -> TaskServiceResult<()> {
        self.record(RecordedTaskRequest::CompleteAll(code.clone()))
    }

    async fn delete_all_for_project(&self, code: &ProjectCode) -> TaskServiceResult<()> {
        self.record(RecordedTaskRequest::DeleteAll(code.clone()))
    }

    async fn task_counts(&self, code: &ProjectCode) -> TaskServiceResult<Option<TaskCounts>> {
        if self.failing {
            return Err(TaskServiceError::Rejected {
                code: code.clone(),
                reason: "recording client configured to fail".to_owned(),
            });
        }
        let counts = self.counts.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(counts.get(code).copied())
    }
}
