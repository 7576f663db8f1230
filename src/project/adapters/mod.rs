//! Adapter implementations for project lifecycle ports.

pub mod memory;
pub mod postgres;

mod unconnected;

pub use unconnected::UnconnectedTaskService;
