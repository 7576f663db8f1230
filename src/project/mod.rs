//! Project lifecycle management.
//!
//! Covers creating projects owned by the calling manager, reading and
//! listing them, revising their editable fields, completing them and
//! soft-deleting them, with every per-project operation gated by the access
//! rule in [`domain::AccessDecision`]. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
