//! Application services - Use case implementations

mod export;
mod location_resolver;
mod route_planner;
mod route_retriever;
mod route_sync_service;

pub use domain::format_travel_time;
pub use export::route_to_geojson;
pub use location_resolver::{LocationResolver, ResolverConfig};
pub use route_planner::{PlannedRoute, RoutePlanner};
pub use route_retriever::{RouteOutcome, RouteRetriever};
pub use route_sync_service::RouteSyncService;
