//! Port contracts for project lifecycle management.
//!
//! Ports define infrastructure-agnostic interfaces used by project services.

pub mod identity;
pub mod repository;
pub mod task_service;

pub use identity::{IdentityError, IdentityProvider, IdentityResult};
pub use repository::{ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult};
pub use task_service::{TaskServiceClient, TaskServiceError, TaskServiceResult};
