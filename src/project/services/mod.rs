//! Application services for project lifecycle orchestration.

mod manager;
mod notify;

pub use manager::{ProjectManagerError, ProjectManagerResult, ProjectManagerService};
