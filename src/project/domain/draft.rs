//! Caller-supplied project input.

use super::{ProjectCode, ProjectDomainError, ProjectStatus, Username};
use chrono::NaiveDate;

/// Project fields as supplied by a caller for create and update.
///
/// The draft may carry an assigned manager and status, mirroring the
/// transport payload, but the service never trusts them: creation forces the
/// caller as manager and [`ProjectStatus::Open`], updates keep the stored
/// values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    project_code: ProjectCode,
    project_name: String,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    project_detail: Option<String>,
    assigned_manager: Option<Username>,
    status: Option<ProjectStatus>,
}

impl ProjectDraft {
    /// Creates a draft with the required fields.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::EmptyProjectCode`] or
    /// [`ProjectDomainError::EmptyProjectName`] when either value is blank.
    pub fn new(
        project_code: impl Into<String>,
        project_name: impl Into<String>,
    ) -> Result<Self, ProjectDomainError> {
        let code = ProjectCode::new(project_code)?;
        let name = project_name.into();
        if name.trim().is_empty() {
            return Err(ProjectDomainError::EmptyProjectName);
        }
        Ok(Self {
            project_code: code,
            project_name: name.trim().to_owned(),
            start_date: None,
            end_date: None,
            project_detail: None,
            assigned_manager: None,
            status: None,
        })
    }

    /// Sets the planned schedule.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::EndBeforeStart`] when `end` precedes
    /// `start`.
    pub fn with_schedule(
        self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Self, ProjectDomainError> {
        if end < start {
            return Err(ProjectDomainError::EndBeforeStart { start, end });
        }
        self.with_start_date(start)?.with_end_date(end)
    }

    /// Sets the planned start date alone.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::EndBeforeStart`] when an end date is
    /// already set and precedes `start`.
    pub fn with_start_date(mut self, start: NaiveDate) -> Result<Self, ProjectDomainError> {
        if let Some(end) = self.end_date
            && end < start
        {
            return Err(ProjectDomainError::EndBeforeStart { start, end });
        }
        self.start_date = Some(start);
        Ok(self)
    }

    /// Sets the planned end date alone.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::EndBeforeStart`] when a start date is
    /// already set and follows `end`.
    pub fn with_end_date(mut self, end: NaiveDate) -> Result<Self, ProjectDomainError> {
        if let Some(start) = self.start_date
            && end < start
        {
            return Err(ProjectDomainError::EndBeforeStart { start, end });
        }
        self.end_date = Some(end);
        Ok(self)
    }

    /// Sets the free-form project detail.
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.project_detail = Some(detail.into());
        self
    }

    /// Sets the manager named in the payload.
    #[must_use]
    pub fn with_assigned_manager(mut self, manager: Username) -> Self {
        self.assigned_manager = Some(manager);
        self
    }

    /// Sets the status named in the payload.
    #[must_use]
    pub const fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Returns the requested project code.
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

    /// Returns the manager named in the payload, if any.
    #[must_use]
    pub const fn assigned_manager(&self) -> Option<&Username> {
        self.assigned_manager.as_ref()
    }

    /// Returns the status named in the payload, if any.
    #[must_use]
    pub const fn status(&self) -> Option<ProjectStatus> {
        self.status
    }
}
