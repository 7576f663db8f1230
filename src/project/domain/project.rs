//! Project aggregate root and its status.

use super::{ParseProjectStatusError, ProjectCode, ProjectDraft, ProjectId, Username};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Project lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Project has been created.
    Open,
    /// Work on the project has started.
    InProgress,
    /// Project has been completed. Terminal.
    Completed,
}

impl ProjectStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }

    /// Returns `true` for [`ProjectStatus::Completed`].
    #[must_use]
    pub const fn is_completed(self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl TryFrom<&str> for ProjectStatus {
    type Error = ParseProjectStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "open" => Ok(Self::Open),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseProjectStatusError(value.to_owned())),
        }
    }
}

/// Project aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    project_code: ProjectCode,
    project_name: String,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    project_detail: Option<String>,
    assigned_manager: Username,
    status: ProjectStatus,
    is_deleted: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted project aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedProjectData {
    /// Persisted project identifier.
    pub id: ProjectId,
    /// Persisted project code.
    pub project_code: ProjectCode,
    /// Persisted project name.
    pub project_name: String,
    /// Persisted start date, if any.
    pub start_date: Option<NaiveDate>,
    /// Persisted end date, if any.
    pub end_date: Option<NaiveDate>,
    /// Persisted project detail, if any.
    pub project_detail: Option<String>,
    /// Persisted assigned manager.
    pub assigned_manager: Username,
    /// Persisted lifecycle status.
    pub status: ProjectStatus,
    /// Persisted soft-delete flag.
    pub is_deleted: bool,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Creates an open project owned by `manager` from caller input.
    ///
    /// Any manager or status carried by the draft is ignored.
    #[must_use]
    pub fn open_from_draft(draft: &ProjectDraft, manager: Username, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: ProjectId::new(),
            project_code: draft.project_code().clone(),
            project_name: draft.project_name().to_owned(),
            start_date: draft.start_date(),
            end_date: draft.end_date(),
            project_detail: draft.project_detail().map(str::to_owned),
            assigned_manager: manager,
            status: ProjectStatus::Open,
            is_deleted: false,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a project from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedProjectData) -> Self {
        Self {
            id: data.id,
            project_code: data.project_code,
            project_name: data.project_name,
            start_date: data.start_date,
            end_date: data.end_date,
            project_detail: data.project_detail,
            assigned_manager: data.assigned_manager,
            status: data.status,
            is_deleted: data.is_deleted,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Builds the replacement record for an update.
    ///
    /// Editable fields come from the draft. Identity, code, status, owner
    /// and creation time are carried over from `self`.
    #[must_use]
    pub fn revised(&self, draft: &ProjectDraft, clock: &impl Clock) -> Self {
        Self {
            id: self.id,
            project_code: self.project_code.clone(),
            project_name: draft.project_name().to_owned(),
            start_date: draft.start_date(),
            end_date: draft.end_date(),
            project_detail: draft.project_detail().map(str::to_owned),
            assigned_manager: self.assigned_manager.clone(),
            status: self.status,
            is_deleted: false,
            created_at: self.created_at,
            updated_at: clock.utc(),
        }
    }

    /// Marks the project as completed.
    pub fn complete(&mut self, clock: &impl Clock) {
        self.status = ProjectStatus::Completed;
        self.touch(clock);
    }

    /// Soft-deletes the project and moves it to its retired code.
    pub fn soft_delete(&mut self, clock: &impl Clock) {
        self.is_deleted = true;
        self.project_code = self.project_code.retired(self.id);
        self.touch(clock);
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the project code.
    #[must_use]
    pub const fn project_code(&self) -> &ProjectCode {
        &self.project_code
    }

    /// Returns the project name.
    #[must_use]
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Returns the planned start date, if any.
    #[must_use]
    pub const fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    /// Returns the planned end date, if any.
    #[must_use]
    pub const fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    /// Returns the project detail, if any.
    #[must_use]
    pub fn project_detail(&self) -> Option<&str> {
        self.project_detail.as_deref()
    }

    /// Returns the assigned manager.
    #[must_use]
    pub const fn assigned_manager(&self) -> &Username {
        &self.assigned_manager
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Returns `true` once the project has been soft-deleted.
    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        self.is_deleted
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
