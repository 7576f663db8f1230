//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use project_service::project::{
    adapters::memory::{InMemoryProjectRepository, RecordingTaskService, StaticIdentityProvider},
    domain::{ProjectDraft, Role, Username},
    services::ProjectManagerService,
};
use rstest::fixture;

/// Service type wired to in-memory adapters.
pub type InMemoryService = ProjectManagerService<
    InMemoryProjectRepository,
    StaticIdentityProvider,
    RecordingTaskService,
    DefaultClock,
>;

/// Service plus handles on the adapters it was built from.
pub struct Deployment {
    pub service: InMemoryService,
    pub repository: Arc<InMemoryProjectRepository>,
    pub identity: StaticIdentityProvider,
    pub task_service: Arc<RecordingTaskService>,
}

impl Deployment {
    /// Makes `name` the current caller.
    pub fn act_as(&self, name: &str) {
        self.identity
            .sign_in(username(name))
            .expect("caller switch should succeed");
    }
}

/// Builds a username from a literal.
pub fn username(name: &str) -> Username {
    Username::new(name).expect("valid username")
}

/// Builds a minimal project draft.
pub fn draft(code: &str, name: &str) -> ProjectDraft {
    ProjectDraft::new(code, name).expect("valid draft")
}

/// Provides a deployment with managers `alice` and `bob`, employee `erin`
/// and admin `root`. Nobody is signed in.
#[fixture]
pub fn deployment() -> Deployment {
    let identity = StaticIdentityProvider::new();
    for (name, role) in [
        ("alice", Role::Manager),
        ("bob", Role::Manager),
        ("erin", Role::Employee),
        ("root", Role::Admin),
    ] {
        identity
            .register(username(name), [role])
            .expect("user registration should succeed");
    }

    let repository = Arc::new(InMemoryProjectRepository::new());
    let task_service = Arc::new(RecordingTaskService::new());
    let service = ProjectManagerService::new(
        Arc::clone(&repository),
        Arc::new(identity.clone()),
        Arc::clone(&task_service),
        Arc::new(DefaultClock),
    );

    Deployment {
        service,
        repository,
        identity,
        task_service,
    }
}
