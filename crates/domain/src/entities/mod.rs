//! Domain entities

mod history;
mod route;

pub use history::{HistoryEntry, RouteHistory};
pub use route::{DurationPrecision, RouteRequest, RouteResult};
