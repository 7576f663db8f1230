//! Shared world state for project lifecycle BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use project_service::project::{
    adapters::memory::{InMemoryProjectRepository, RecordingTaskService, StaticIdentityProvider},
    domain::{ProjectView, Username},
    services::{ProjectManagerError, ProjectManagerResult, ProjectManagerService},
};
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestProjectService = ProjectManagerService<
    InMemoryProjectRepository,
    StaticIdentityProvider,
    RecordingTaskService,
    DefaultClock,
>;

/// Scenario world for project lifecycle behaviour tests.
pub struct ProjectWorld {
    pub service: TestProjectService,
    pub identity: StaticIdentityProvider,
    pub task_service: Arc<RecordingTaskService>,
    pub last_view: Option<ProjectView>,
    pub last_error: Option<ProjectManagerError>,
}

impl ProjectWorld {
    /// Creates a world with no users and no projects.
    #[must_use]
    pub fn new() -> Self {
        let identity = StaticIdentityProvider::new();
        let task_service = Arc::new(RecordingTaskService::new());
        let service = ProjectManagerService::new(
            Arc::new(InMemoryProjectRepository::new()),
            Arc::new(identity.clone()),
            Arc::clone(&task_service),
            Arc::new(DefaultClock),
        );

        Self {
            service,
            identity,
            task_service,
            last_view: None,
            last_error: None,
        }
    }

    /// Signs `caller` in as the current identity.
    pub fn act_as(&self, caller: &str) -> Result<(), eyre::Report> {
        let name = Username::new(caller)?;
        self.identity.sign_in(name)?;
        Ok(())
    }

    /// Keeps the error of the latest operation, returning its value on
    /// success.
    pub fn remember<T>(&mut self, outcome: ProjectManagerResult<T>) -> Option<T> {
        match outcome {
            Ok(value) => {
                self.last_error = None;
                Some(value)
            }
            Err(err) => {
                self.last_error = Some(err);
                None
            }
        }
    }
}

impl Default for ProjectWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ProjectWorld {
    ProjectWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
