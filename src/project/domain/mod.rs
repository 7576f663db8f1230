//! Domain model for project lifecycle management.
//!
//! The project domain covers creation, revision, completion and soft
//! deletion of project records together with the access rule that decides
//! who may work on a project. Infrastructure concerns stay outside of the
//! domain boundary.

mod access;
mod draft;
mod error;
mod ids;
mod project;
mod role;
mod view;

pub use access::{AccessDecision, CallerRoles};
pub use draft::ProjectDraft;
pub use error::{ParseProjectStatusError, ProjectDomainError};
pub use ids::{ProjectCode, ProjectId, Username};
pub use project::{PersistedProjectData, Project, ProjectStatus};
pub use role::Role;
pub use view::{ProjectSummary, ProjectView, TaskCounts};
