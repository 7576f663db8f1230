//! Identifier and validated scalar types for the project domain.

use super::ProjectDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for an internal project record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(Uuid);

impl ProjectId {
    /// Creates a new random project identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a project identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for ProjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Length of the `-<uuid>` suffix of a retired code.
const RETIRED_SUFFIX_LEN: usize = 37;

/// Human-assigned business key of a project.
///
/// Codes are unique among live projects. Deleting a project rewrites its code
/// with [`ProjectCode::retired`] so the original value can be reused.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectCode(String);

impl ProjectCode {
    /// Longest code, in characters, a live project may use.
    ///
    /// Leaves room for the `-<uuid>` suffix added by
    /// [`ProjectCode::retired`] within the 255-character stored column.
    pub const MAX_LEN: usize = 255 - RETIRED_SUFFIX_LEN;

    /// Creates a validated project code.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::EmptyProjectCode`] when the value is
    /// empty after trimming, or [`ProjectDomainError::ProjectCodeTooLong`]
    /// when it exceeds [`ProjectCode::MAX_LEN`] characters.
    pub fn new(value: impl Into<String>) -> Result<Self, ProjectDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(ProjectDomainError::EmptyProjectCode);
        }
        let length = normalized.chars().count();
        if length > Self::MAX_LEN {
            return Err(ProjectDomainError::ProjectCodeTooLong {
                length,
                max: Self::MAX_LEN,
            });
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Wraps a caller-supplied code as an exact lookup key.
    ///
    /// The value is not trimmed. Returns `None` for a blank value, which no
    /// stored project can match.
    #[must_use]
    pub fn lookup(value: &str) -> Option<Self> {
        (!value.trim().is_empty()).then(|| Self(value.to_owned()))
    }

    /// Rebuilds a code read back from storage, live or retired.
    #[must_use]
    pub const fn from_persisted(value: String) -> Self {
        Self(value)
    }

    /// Returns the code a soft-deleted project is stored under:
    /// `"<code>-<id>"`.
    #[must_use]
    pub fn retired(&self, id: ProjectId) -> Self {
        Self(format!("{}-{id}", self.0))
    }

    /// Returns the code as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ProjectCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ProjectCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identity-provider username, used for callers and assigned managers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    /// Creates a validated username.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::EmptyUsername`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, ProjectDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(ProjectDomainError::EmptyUsername);
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Wraps a caller-supplied name as an exact lookup key.
    ///
    /// Returns `None` for a blank value.
    #[must_use]
    pub fn lookup(value: &str) -> Option<Self> {
        (!value.trim().is_empty()).then(|| Self(value.to_owned()))
    }

    /// Returns the username as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
