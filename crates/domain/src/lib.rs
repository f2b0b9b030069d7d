//! Domain layer for Njira
//!
//! Contains the route-planning vocabulary: coordinates, travel modes,
//! coordinate reference systems, route results, and the session history.
//! This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod travel_time;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use travel_time::{format_travel_time, minutes_from_f64};
pub use value_objects::*;
