//! In-memory repository for project lifecycle tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::project::{
    domain::{Project, ProjectCode, ProjectId, Username},
    ports::{ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult},
};

/// Thread-safe in-memory project repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjectRepository {
    state: Arc<RwLock<InMemoryProjectState>>,
}

#[derive(Debug, Default)]
struct InMemoryProjectState {
    projects: HashMap<ProjectId, Project>,
    code_index: HashMap<ProjectCode, ProjectId>,
}

impl InMemoryProjectRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Finds a project by identifier, including soft-deleted records.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::Persistence`] when the lock is
    /// poisoned.
    pub fn find_by_id(&self, id: ProjectId) -> ProjectRepositoryResult<Option<Project>> {
        let state = self.read()?;
        Ok(state.projects.get(&id).cloned())
    }

    fn read(&self) -> ProjectRepositoryResult<RwLockReadGuard<'_, InMemoryProjectState>> {
        self.state.read().map_err(|err| {
            ProjectRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> ProjectRepositoryResult<RwLockWriteGuard<'_, InMemoryProjectState>> {
        self.state.write().map_err(|err| {
            ProjectRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

/// Collects live projects matching `predicate`, oldest first.
fn live_projects(
    state: &InMemoryProjectState,
    predicate: impl Fn(&Project) -> bool,
) -> Vec<Project> {
    let mut projects: Vec<Project> = state
        .projects
        .values()
        .filter(|project| !project.is_deleted() && predicate(project))
        .cloned()
        .collect();
    projects.sort_by_key(Project::created_at);
    projects
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn find_by_code(&self, code: &ProjectCode) -> ProjectRepositoryResult<Option<Project>> {
        let state = self.read()?;
        let project = state
            .code_index
            .get(code)
            .and_then(|id| state.projects.get(id))
            .cloned();
        Ok(project)
    }

    async fn find_all_by_manager(
        &self,
        manager: &Username,
    ) -> ProjectRepositoryResult<Vec<Project>> {
        let state = self.read()?;
        Ok(live_projects(&state, |project| {
            project.assigned_manager() == manager
        }))
    }

    async fn find_all(&self) -> ProjectRepositoryResult<Vec<Project>> {
        let state = self.read()?;
        Ok(live_projects(&state, |_| true))
    }

    async fn count_open_by_manager(&self, manager: &Username) -> ProjectRepositoryResult<u64> {
        let state = self.read()?;
        let open = live_projects(&state, |project| {
            project.assigned_manager() == manager && !project.status().is_completed()
        });
        u64::try_from(open.len()).map_err(ProjectRepositoryError::persistence)
    }

    async fn save(&self, project: &Project) -> ProjectRepositoryResult<Project> {
        let mut state = self.write()?;
        let code = project.project_code();

        if !project.is_deleted()
            && state
                .code_index
                .get(code)
                .is_some_and(|owner| *owner != project.id())
        {
            return Err(ProjectRepositoryError::DuplicateCode(code.clone()));
        }

        // Drop the index entry of the previous version before re-indexing.
        let previous_code = state
            .projects
            .get(&project.id())
            .map(|previous| previous.project_code().clone());
        if let Some(stale) = previous_code
            && state.code_index.get(&stale) == Some(&project.id())
        {
            state.code_index.remove(&stale);
        }

        if !project.is_deleted() {
            state.code_index.insert(code.clone(), project.id());
        }
        state.projects.insert(project.id(), project.clone());
        Ok(project.clone())
    }
}
