//! `PostgreSQL` repository implementation for project storage.

use super::{
    models::{ProjectRecord, ProjectRow},
    schema::projects,
};
use crate::project::{
    domain::{
        PersistedProjectData, Project, ProjectCode, ProjectId, ProjectStatus, Username,
    },
    ports::{ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by project adapters.
pub type ProjectPgPool = Pool<ConnectionManager<PgConnection>>;

/// Unique index guarding codes of live projects.
const LIVE_CODE_INDEX: &str = "idx_projects_live_code_unique";

/// `PostgreSQL`-backed project repository.
#[derive(Debug, Clone)]
pub struct PostgresProjectRepository {
    pool: ProjectPgPool,
}

impl PostgresProjectRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: ProjectPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> ProjectRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> ProjectRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(ProjectRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(ProjectRepositoryError::persistence)?
    }
}

#[async_trait]
impl ProjectRepository for PostgresProjectRepository {
    async fn find_by_code(&self, code: &ProjectCode) -> ProjectRepositoryResult<Option<Project>> {
        let lookup_code = code.as_str().to_owned();
        self.run_blocking(move |connection| {
            let row = projects::table
                .filter(projects::project_code.eq(lookup_code))
                .filter(projects::is_deleted.eq(false))
                .select(ProjectRow::as_select())
                .first::<ProjectRow>(connection)
                .optional()
                .map_err(ProjectRepositoryError::persistence)?;
            row.map(row_to_project).transpose()
        })
        .await
    }

    async fn find_all_by_manager(
        &self,
        manager: &Username,
    ) -> ProjectRepositoryResult<Vec<Project>> {
        let lookup_manager = manager.as_str().to_owned();
        self.run_blocking(move |connection| {
            let rows = projects::table
                .filter(projects::assigned_manager.eq(lookup_manager))
                .filter(projects::is_deleted.eq(false))
                .order(projects::created_at.asc())
                .select(ProjectRow::as_select())
                .load::<ProjectRow>(connection)
                .map_err(ProjectRepositoryError::persistence)?;
            rows.into_iter().map(row_to_project).collect()
        })
        .await
    }

    async fn find_all(&self) -> ProjectRepositoryResult<Vec<Project>> {
        self.run_blocking(|connection| {
            let rows = projects::table
                .filter(projects::is_deleted.eq(false))
                .order(projects::created_at.asc())
                .select(ProjectRow::as_select())
                .load::<ProjectRow>(connection)
                .map_err(ProjectRepositoryError::persistence)?;
            rows.into_iter().map(row_to_project).collect()
        })
        .await
    }

    async fn count_open_by_manager(&self, manager: &Username) -> ProjectRepositoryResult<u64> {
        let lookup_manager = manager.as_str().to_owned();
        self.run_blocking(move |connection| {
            let count = projects::table
                .filter(projects::assigned_manager.eq(lookup_manager))
                .filter(projects::is_deleted.eq(false))
                .filter(projects::status.ne(ProjectStatus::Completed.as_str()))
                .count()
                .get_result::<i64>(connection)
                .map_err(ProjectRepositoryError::persistence)?;
            u64::try_from(count).map_err(ProjectRepositoryError::persistence)
        })
        .await
    }

    async fn save(&self, project: &Project) -> ProjectRepositoryResult<Project> {
        let code = project.project_code().clone();
        let record = to_record(project);

        self.run_blocking(move |connection| {
            let row = diesel::insert_into(projects::table)
                .values(&record)
                .on_conflict(projects::id)
                .do_update()
                .set(&record)
                .returning(ProjectRow::as_returning())
                .get_result::<ProjectRow>(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, ref info)
                        if is_live_code_unique_violation(info.as_ref()) =>
                    {
                        ProjectRepositoryError::DuplicateCode(code.clone())
                    }
                    _ => ProjectRepositoryError::persistence(err),
                })?;
            row_to_project(row)
        })
        .await
    }
}

fn to_record(project: &Project) -> ProjectRecord {
    ProjectRecord {
        id: project.id().into_inner(),
        project_code: project.project_code().as_str().to_owned(),
        project_name: project.project_name().to_owned(),
        start_date: project.start_date(),
        end_date: project.end_date(),
        project_detail: project.project_detail().map(str::to_owned),
        assigned_manager: project.assigned_manager().as_str().to_owned(),
        status: project.status().as_str().to_owned(),
        is_deleted: project.is_deleted(),
        created_at: project.created_at(),
        updated_at: project.updated_at(),
    }
}

fn row_to_project(row: ProjectRow) -> ProjectRepositoryResult<Project> {
    let ProjectRow {
        id,
        project_code,
        project_name,
        start_date,
        end_date,
        project_detail,
        assigned_manager,
        status: persisted_status,
        is_deleted,
        created_at,
        updated_at,
    } = row;

    let status = ProjectStatus::try_from(persisted_status.as_str())
        .map_err(ProjectRepositoryError::persistence)?;

    let data = PersistedProjectData {
        id: ProjectId::from_uuid(id),
        project_code: ProjectCode::from_persisted(project_code),
        project_name,
        start_date,
        end_date,
        project_detail,
        assigned_manager: Username::new(assigned_manager)
            .map_err(ProjectRepositoryError::persistence)?,
        status,
        is_deleted,
        created_at,
        updated_at,
    };
    Ok(Project::from_persisted(data))
}

fn is_live_code_unique_violation(info: &dyn DatabaseErrorInformation) -> bool {
    info.constraint_name()
        .is_some_and(|name| name == LIVE_CODE_INDEX)
}
