//! Diesel row models for project persistence.

use super::schema::projects;
use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;

/// Query result row for project records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = projects)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProjectRow {
    /// Internal project identifier.
    pub id: uuid::Uuid,
    /// Project business key.
    pub project_code: String,
    /// Project name.
    pub project_name: String,
    /// Planned start date.
    pub start_date: Option<NaiveDate>,
    /// Planned end date.
    pub end_date: Option<NaiveDate>,
    /// Free-form project detail.
    pub project_detail: Option<String>,
    /// Username of the assigned manager.
    pub assigned_manager: String,
    /// Lifecycle status.
    pub status: String,
    /// Soft-delete flag.
    pub is_deleted: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert and upsert model for project records.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = projects)]
#[diesel(treat_none_as_null = true)]
pub struct ProjectRecord {
    /// Internal project identifier.
    pub id: uuid::Uuid,
    /// Project business key.
    pub project_code: String,
    /// Project name.
    pub project_name: String,
    /// Planned start date.
    pub start_date: Option<NaiveDate>,
    /// Planned end date.
    pub end_date: Option<NaiveDate>,
    /// Free-form project detail.
    pub project_detail: Option<String>,
    /// Username of the assigned manager.
    pub assigned_manager: String,
    /// Lifecycle status.
    pub status: String,
    /// Soft-delete flag.
    pub is_deleted: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
