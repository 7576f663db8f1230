//! Identity-provider roles recognised by the project access rules.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Client role held by a caller in the identity provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Administrator with unrestricted project access.
    Admin,
    /// Manager limited to the projects they are assigned to.
    Manager,
    /// Employee working on tasks; never has direct project access.
    Employee,
}

impl Role {
    /// Returns the role name used in log and display output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Manager => "Manager",
            Self::Employee => "Employee",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
