//! Value Objects - Immutable, identity-less domain primitives

mod coordinate;
mod coordinate_system;
mod location_query;
mod travel_mode;

pub use coordinate::Coordinate;
pub use coordinate_system::{AxisOrder, CoordinateSystem, Hemisphere};
pub use location_query::LocationQuery;
pub use travel_mode::TravelMode;
