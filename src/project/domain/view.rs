//! Read models returned to callers.

use super::{Project, ProjectCode, ProjectId, ProjectStatus, Username};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Caller-facing view of a project.
///
/// The soft-delete flag and timestamps stay internal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectView {
    /// Internal project identifier.
    pub id: ProjectId,
    /// Project business key.
    pub project_code: ProjectCode,
    /// Project name.
    pub project_name: String,
    /// Planned start date.
    pub start_date: Option<NaiveDate>,
    /// Planned end date.
    pub end_date: Option<NaiveDate>,
    /// Free-form project detail.
    pub project_detail: Option<String>,
    /// Managing user.
    pub assigned_manager: Username,
    /// Lifecycle status.
    pub status: ProjectStatus,
}

impl From<&Project> for ProjectView {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id(),
            project_code: project.project_code().clone(),
            project_name: project.project_name().to_owned(),
            start_date: project.start_date(),
            end_date: project.end_date(),
            project_detail: project.project_detail().map(str::to_owned),
            assigned_manager: project.assigned_manager().clone(),
            status: project.status(),
        }
    }
}

impl From<Project> for ProjectView {
    fn from(project: Project) -> Self {
        Self::from(&project)
    }
}

/// Task progress of a project as reported by the task service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskCounts {
    /// Number of completed tasks.
    pub completed: u64,
    /// Number of tasks not yet completed.
    pub unfinished: u64,
}

/// Project view enriched with task progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSummary {
    /// The project itself.
    #[serde(flatten)]
    pub project: ProjectView,
    /// Task progress, absent when the task service could not provide it.
    pub task_counts: Option<TaskCounts>,
}
