//! In-memory adapters for tests and local wiring.

mod identity;
mod repository;
mod task_service;

pub use identity::StaticIdentityProvider;
pub use repository::InMemoryProjectRepository;
pub use task_service::{RecordedTaskRequest, RecordingTaskService};
