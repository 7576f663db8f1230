//! Project access rule.
//!
//! The rule only depends on the caller, the two role memberships it cares
//! about, and the project's assigned manager, so it is evaluated here as a
//! pure function. Role lookups happen in the service layer.

use super::{Project, Username};

/// Role memberships relevant to the access rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallerRoles {
    /// Caller holds the `Manager` role.
    pub manager: bool,
    /// Caller holds the `Employee` role.
    pub employee: bool,
}

/// Outcome of evaluating the access rule for one project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    /// The caller may work on the project.
    Allow,
    /// The caller is a manager, but not the one assigned to the project.
    DenyForeignManager,
    /// Employees reach projects only through their tasks.
    DenyEmployee,
}

impl AccessDecision {
    /// Evaluates the access rule.
    #[must_use]
    pub fn evaluate(caller: &Username, roles: CallerRoles, project: &Project) -> Self {
        if roles.manager && caller != project.assigned_manager() {
            return Self::DenyForeignManager;
        }
        if roles.employee {
            return Self::DenyEmployee;
        }
        Self::Allow
    }

    /// Returns `true` when access is granted.
    #[must_use]
    pub const fn is_allowed(self) -> bool {
        matches!(self, Self::Allow)
    }
}
