//! In-memory identity provider with a switchable caller.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use crate::project::{
    domain::{Role, Username},
    ports::{IdentityError, IdentityProvider, IdentityResult},
};

/// Identity provider backed by a local user table.
///
/// Users are registered with their roles; one of them can be signed in as
/// the current caller. Clones share state, so a test can switch callers on a
/// provider already handed to a service.
#[derive(Debug, Clone, Default)]
pub struct StaticIdentityProvider {
    state: Arc<RwLock<IdentityState>>,
}

#[derive(Debug, Default)]
struct IdentityState {
    current: Option<Username>,
    roles: HashMap<Username, HashSet<Role>>,
}

fn poisoned(err: impl ToString) -> IdentityError {
    IdentityError::provider(std::io::Error::other(err.to_string()))
}

impl StaticIdentityProvider {
    /// Creates a provider with no users and no caller.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a provider with a single user signed in.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::Provider`] when the state lock is poisoned.
    pub fn signed_in(
        username: Username,
        roles: impl IntoIterator<Item = Role>,
    ) -> IdentityResult<Self> {
        let provider = Self::new();
        provider.register(username.clone(), roles)?;
        provider.sign_in(username)?;
        Ok(provider)
    }

    /// Registers a user, replacing any roles it already had.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::Provider`] when the state lock is poisoned.
    pub fn register(
        &self,
        username: Username,
        roles: impl IntoIterator<Item = Role>,
    ) -> IdentityResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        state.roles.insert(username, roles.into_iter().collect());
        Ok(())
    }

    /// Makes `username` the current caller.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::Provider`] when the state lock is poisoned.
    pub fn sign_in(&self, username: Username) -> IdentityResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        state.current = Some(username);
        Ok(())
    }

    /// Clears the current caller.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::Provider`] when the state lock is poisoned.
    pub fn sign_out(&self) -> IdentityResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        state.current = None;
        Ok(())
    }
}

#[async_trait]
impl IdentityProvider for StaticIdentityProvider {
    async fn current_identity(&self) -> IdentityResult<Username> {
        let state = self.state.read().map_err(poisoned)?;
        state.current.clone().ok_or(IdentityError::Unauthenticated)
    }

    async fn has_role(&self, identity: &Username, role: Role) -> IdentityResult<bool> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state
            .roles
            .get(identity)
            .is_some_and(|roles| roles.contains(&role)))
    }
}
