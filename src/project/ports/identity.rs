//! Identity port for resolving the caller and their roles.

use crate::project::domain::{Role, Username};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for identity provider operations.
pub type IdentityResult<T> = Result<T, IdentityError>;

/// Caller identity and role lookup contract.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Returns the username of the caller bound to the current request.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::Unauthenticated`] when no caller is bound.
    async fn current_identity(&self) -> IdentityResult<Username>;

    /// Reports whether `identity` holds `role`.
    async fn has_role(&self, identity: &Username, role: Role) -> IdentityResult<bool>;
}

/// Errors returned by identity provider implementations.
#[derive(Debug, Clone, Error)]
pub enum IdentityError {
    /// No authenticated caller is bound to the request.
    #[error("no authenticated caller")]
    Unauthenticated,

    /// The identity provider could not be reached or answered badly.
    #[error("identity provider error: {0}")]
    Provider(Arc<dyn std::error::Error + Send + Sync>),
}

impl IdentityError {
    /// Wraps a provider error.
    pub fn provider(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Provider(Arc::new(err))
    }
}
