//! Application layer - Use cases and orchestration
//!
//! Resolves user input to coordinates, retrieves routes, and talks to the
//! optional route backend. All external systems are reached through the
//! ports in [`ports`]; adapters live in the infrastructure layer.

pub mod error;
pub mod ports;
pub mod services;

pub use error::{ApplicationError, BackendFailure, ResolveError, RoutingFailure};
pub use ports::*;
pub use services::*;
