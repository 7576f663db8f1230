//! Repository port for project persistence and lookup.

use crate::project::domain::{Project, ProjectCode, Username};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for project repository operations.
pub type ProjectRepositoryResult<T> = Result<T, ProjectRepositoryError>;

/// Project persistence contract.
///
/// Soft-deleted projects stay stored but are invisible to every lookup.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Finds the live project with the given code.
    ///
    /// Returns `None` when no live project uses the code.
    async fn find_by_code(&self, code: &ProjectCode) -> ProjectRepositoryResult<Option<Project>>;

    /// Returns all live projects assigned to `manager`.
    async fn find_all_by_manager(&self, manager: &Username)
    -> ProjectRepositoryResult<Vec<Project>>;

    /// Returns all live projects.
    async fn find_all(&self) -> ProjectRepositoryResult<Vec<Project>>;

    /// Counts live projects assigned to `manager` that are not completed.
    async fn count_open_by_manager(&self, manager: &Username) -> ProjectRepositoryResult<u64>;

    /// Inserts or replaces the project keyed by its identifier and returns
    /// the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::DuplicateCode`] when another live
    /// project already uses the code.
    async fn save(&self, project: &Project) -> ProjectRepositoryResult<Project>;
}

/// Errors returned by project repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ProjectRepositoryError {
    /// Another live project already uses the code.
    #[error("duplicate project code: {0}")]
    DuplicateCode(ProjectCode),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ProjectRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
