//! Error types for project domain validation and parsing.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors returned while constructing domain project values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProjectDomainError {
    /// The project code is empty after trimming.
    #[error("project code must not be empty")]
    EmptyProjectCode,

    /// The project code does not fit the stored column once retired.
    #[error("project code is {length} characters long, at most {max} allowed")]
    ProjectCodeTooLong {
        /// Length of the rejected code in characters.
        length: usize,
        /// Longest accepted code.
        max: usize,
    },

    /// The project name is empty after trimming.
    #[error("project name must not be empty")]
    EmptyProjectName,

    /// The username is empty after trimming.
    #[error("username must not be empty")]
    EmptyUsername,

    /// The project schedule ends before it starts.
    #[error("project end date {end} is before start date {start}")]
    EndBeforeStart {
        /// Requested start date.
        start: NaiveDate,
        /// Requested end date.
        end: NaiveDate,
    },
}

/// Error returned while parsing project status from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown project status: {0}")]
pub struct ParseProjectStatusError(pub String);
