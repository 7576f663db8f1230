//! Project service: project lifecycle management with role-based access.
//!
//! This crate implements the business layer of a project-management
//! service. Projects are created, read, revised, completed and soft-deleted
//! on behalf of a caller whose identity and roles come from an external
//! identity provider. The task-tracking service is notified of completions
//! and deletions on a best-effort basis.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, test doubles)
//!
//! # Modules
//!
//! - [`project`]: Project lifecycle domain, ports, adapters and services
//! - [`config`]: Environment-driven configuration and pool wiring
//! - [`telemetry`]: Tracing subscriber setup

pub mod config;
pub mod project;
pub mod telemetry;
