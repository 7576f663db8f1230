//! Diesel schema for project persistence.

diesel::table! {
    /// Project records, including soft-deleted ones.
    projects (id) {
        /// Internal project identifier.
        id -> Uuid,
        /// Project business key.
        #[max_length = 255]
        project_code -> Varchar,
        /// Project name.
        #[max_length = 255]
        project_name -> Varchar,
        /// Planned start date.
        start_date -> Nullable<Date>,
        /// Planned end date.
        end_date -> Nullable<Date>,
        /// Free-form project detail.
        project_detail -> Nullable<Text>,
        /// Username of the assigned manager.
        #[max_length = 255]
        assigned_manager -> Varchar,
        /// Project lifecycle status.
        #[max_length = 50]
        status -> Varchar,
        /// Soft-delete flag.
        is_deleted -> Bool,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
