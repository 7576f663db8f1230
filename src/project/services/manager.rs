//! Service layer for project lifecycle operations and access control.

use super::notify::{TaskNotification, dispatch};
use crate::project::{
    domain::{
        AccessDecision, CallerRoles, Project, ProjectCode, ProjectDraft, ProjectSummary,
        ProjectView, Role, TaskCounts, Username,
    },
    ports::{
        IdentityError, IdentityProvider, ProjectRepository, ProjectRepositoryError,
        TaskServiceClient,
    },
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for project operations.
#[derive(Debug, Error)]
pub enum ProjectManagerError {
    /// No live project uses the code, given exactly as requested.
    #[error("project does not exist: {0}")]
    NotFound(String),

    /// A live project already uses the code.
    #[error("project already exists: {0}")]
    AlreadyExists(ProjectCode),

    /// The project has already been completed.
    #[error("project is already completed: {0}")]
    AlreadyCompleted(ProjectCode),

    /// The caller may not work on the project.
    #[error("access denied for {caller} on project {project_code}")]
    AccessDenied {
        /// Caller that was refused.
        caller: Username,
        /// Project the caller asked for.
        project_code: ProjectCode,
    },

    /// Identity lookup failed.
    #[error(transparent)]
    Identity(#[from] IdentityError),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] ProjectRepositoryError),
}

/// Result type for project service operations.
pub type ProjectManagerResult<T> = Result<T, ProjectManagerError>;

/// Project lifecycle orchestration service.
///
/// Stateless: every operation resolves the caller from the identity
/// provider, reads and writes through the repository, and returns views.
#[derive(Clone)]
pub struct ProjectManagerService<R, I, T, C>
where
    R: ProjectRepository,
    I: IdentityProvider,
    T: TaskServiceClient + 'static,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    identity: Arc<I>,
    task_service: Arc<T>,
    clock: Arc<C>,
}

impl<R, I, T, C> ProjectManagerService<R, I, T, C>
where
    R: ProjectRepository,
    I: IdentityProvider,
    T: TaskServiceClient + 'static,
    C: Clock + Send + Sync,
{
    /// Creates a new project service.
    #[must_use]
    pub const fn new(
        repository: Arc<R>,
        identity: Arc<I>,
        task_service: Arc<T>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            repository,
            identity,
            task_service,
            clock,
        }
    }

    /// Creates an open project owned by the caller.
    ///
    /// The manager and status carried by the draft are replaced.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectManagerError::AlreadyExists`] when the code is in
    /// use, or an identity or repository error.
    pub async fn create(&self, draft: ProjectDraft) -> ProjectManagerResult<ProjectView> {
        let caller = self.caller().await?;
        let code = draft.project_code();
        if self.repository.find_by_code(code).await?.is_some() {
            return Err(ProjectManagerError::AlreadyExists(code.clone()));
        }

        let project = Project::open_from_draft(&draft, caller, &*self.clock);
        let saved = self.repository.save(&project).await?;
        tracing::info!(
            project_code = %saved.project_code(),
            manager = %saved.assigned_manager(),
            "project created"
        );
        Ok(ProjectView::from(saved))
    }

    /// Returns the project with the given code.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectManagerError::NotFound`] or
    /// [`ProjectManagerError::AccessDenied`].
    pub async fn read_by_code(&self, code: &str) -> ProjectManagerResult<ProjectView> {
        let caller = self.caller().await?;
        let project = self.load_accessible(&caller, code).await?;
        Ok(ProjectView::from(project))
    }

    /// Returns the manager assigned to the project with the given code.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectManagerError::NotFound`] or
    /// [`ProjectManagerError::AccessDenied`].
    pub async fn read_manager_by_code(&self, code: &str) -> ProjectManagerResult<Username> {
        let caller = self.caller().await?;
        let project = self.load_accessible(&caller, code).await?;
        Ok(project.assigned_manager().clone())
    }

    /// Returns the caller's projects with their task progress.
    ///
    /// Task counts are best-effort: a project whose counts cannot be fetched
    /// is listed without them.
    ///
    /// # Errors
    ///
    /// Returns an identity or repository error.
    pub async fn list_mine(&self) -> ProjectManagerResult<Vec<ProjectSummary>> {
        let caller = self.caller().await?;
        let projects = self.repository.find_all_by_manager(&caller).await?;

        let mut summaries = Vec::with_capacity(projects.len());
        for project in &projects {
            let task_counts = self.task_counts(project.project_code()).await;
            summaries.push(ProjectSummary {
                project: ProjectView::from(project),
                task_counts,
            });
        }
        Ok(summaries)
    }

    /// Returns every live project, without access checks.
    ///
    /// Meant for administrative callers authorised by an outer layer.
    ///
    /// # Errors
    ///
    /// Returns an identity or repository error.
    pub async fn list_all(&self) -> ProjectManagerResult<Vec<ProjectView>> {
        let caller = self.caller().await?;
        tracing::debug!(%caller, "listing all projects");
        let projects = self.repository.find_all().await?;
        Ok(projects.iter().map(ProjectView::from).collect())
    }

    /// Returns the caller's projects without task progress.
    ///
    /// # Errors
    ///
    /// Returns an identity or repository error.
    pub async fn list_mine_as_manager(&self) -> ProjectManagerResult<Vec<ProjectView>> {
        let caller = self.caller().await?;
        let projects = self.repository.find_all_by_manager(&caller).await?;
        Ok(projects.iter().map(ProjectView::from).collect())
    }

    /// Counts the projects of `manager` that are not completed.
    ///
    /// Intended for service-to-service calls; no access check applies. A
    /// blank name manages nothing and counts zero.
    ///
    /// # Errors
    ///
    /// Returns an identity or repository error.
    pub async fn count_open_for_manager(&self, manager: &str) -> ProjectManagerResult<u64> {
        let caller = self.caller().await?;
        let Some(manager_name) = Username::lookup(manager) else {
            return Ok(0);
        };
        tracing::debug!(%caller, manager = %manager_name, "counting open projects");
        Ok(self.repository.count_open_by_manager(&manager_name).await?)
    }

    /// Guards a mutation of the project with the given code.
    ///
    /// Returns `Ok(false)` when no such project exists and `Ok(true)` when it
    /// exists, is not completed, and the caller may work on it.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectManagerError::AlreadyCompleted`] for a completed
    /// project or [`ProjectManagerError::AccessDenied`].
    pub async fn exists_and_open(&self, code: &str) -> ProjectManagerResult<bool> {
        let caller = self.caller().await?;
        let Some(project) = self.find_live(code).await? else {
            return Ok(false);
        };

        if project.status().is_completed() {
            return Err(ProjectManagerError::AlreadyCompleted(
                project.project_code().clone(),
            ));
        }
        self.check_access(&caller, &project).await?;
        Ok(true)
    }

    /// Replaces the editable fields of a project.
    ///
    /// Identifier, code, status and assigned manager are kept from the
    /// stored record whatever the draft says.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectManagerError::NotFound`] or
    /// [`ProjectManagerError::AccessDenied`].
    pub async fn update(
        &self,
        code: &str,
        draft: ProjectDraft,
    ) -> ProjectManagerResult<ProjectView> {
        let caller = self.caller().await?;
        let existing = self.load_accessible(&caller, code).await?;

        let revised = existing.revised(&draft, &*self.clock);
        let saved = self.repository.save(&revised).await?;
        tracing::info!(project_code = %saved.project_code(), %caller, "project updated");
        Ok(ProjectView::from(saved))
    }

    /// Completes a project and asks the task service to complete its tasks.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectManagerError::NotFound`] or
    /// [`ProjectManagerError::AccessDenied`].
    pub async fn complete(&self, code: &str) -> ProjectManagerResult<ProjectView> {
        let caller = self.caller().await?;
        let mut project = self.load_accessible(&caller, code).await?;

        project.complete(&*self.clock);
        let saved = self.repository.save(&project).await?;
        tracing::info!(project_code = %saved.project_code(), %caller, "project completed");

        dispatch(
            &self.task_service,
            TaskNotification::CompleteAll(saved.project_code().clone()),
        );
        Ok(ProjectView::from(saved))
    }

    /// Soft-deletes a project and asks the task service to delete its tasks.
    ///
    /// The record is kept with its code rewritten to `"<code>-<id>"`.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectManagerError::NotFound`] or
    /// [`ProjectManagerError::AccessDenied`].
    pub async fn delete(&self, code: &str) -> ProjectManagerResult<()> {
        let caller = self.caller().await?;
        let mut project = self.load_accessible(&caller, code).await?;
        let original_code = project.project_code().clone();

        project.soft_delete(&*self.clock);
        let saved = self.repository.save(&project).await?;
        tracing::info!(
            project_code = %original_code,
            retired_code = %saved.project_code(),
            %caller,
            "project deleted"
        );

        dispatch(&self.task_service, TaskNotification::DeleteAll(original_code));
        Ok(())
    }

    async fn caller(&self) -> ProjectManagerResult<Username> {
        Ok(self.identity.current_identity().await?)
    }

    async fn load_accessible(
        &self,
        caller: &Username,
        code: &str,
    ) -> ProjectManagerResult<Project> {
        let Some(project) = self.find_live(code).await? else {
            return Err(ProjectManagerError::NotFound(code.to_owned()));
        };
        self.check_access(caller, &project).await?;
        Ok(project)
    }

    async fn find_live(&self, code: &str) -> ProjectManagerResult<Option<Project>> {
        let Some(project_code) = ProjectCode::lookup(code) else {
            return Ok(None);
        };
        Ok(self.repository.find_by_code(&project_code).await?)
    }

    async fn check_access(
        &self,
        caller: &Username,
        project: &Project,
    ) -> ProjectManagerResult<()> {
        let roles = CallerRoles {
            manager: self.identity.has_role(caller, Role::Manager).await?,
            employee: self.identity.has_role(caller, Role::Employee).await?,
        };

        let decision = AccessDecision::evaluate(caller, roles, project);
        if decision.is_allowed() {
            return Ok(());
        }

        tracing::debug!(
            %caller,
            project_code = %project.project_code(),
            ?decision,
            "project access denied"
        );
        Err(ProjectManagerError::AccessDenied {
            caller: caller.clone(),
            project_code: project.project_code().clone(),
        })
    }

    async fn task_counts(&self, code: &ProjectCode) -> Option<TaskCounts> {
        match self.task_service.task_counts(code).await {
            Ok(counts) => counts,
            Err(err) => {
                tracing::warn!(error = %err, project_code = %code, "task counts unavailable");
                None
            }
        }
    }
}
