//! Route planner
//!
//! The end-to-end use case: resolve both endpoints, then retrieve the route.

use std::sync::Arc;

use chrono::Utc;
use domain::{Coordinate, CoordinateSystem, HistoryEntry, RouteRequest, TravelMode};
use tracing::{info, instrument};

use super::{LocationResolver, RouteOutcome, RouteRetriever};
use crate::error::ApplicationError;

/// Result of planning a route between two pieces of user text
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedRoute {
    /// Origin as typed
    pub origin_text: String,
    /// Destination as typed
    pub destination_text: String,
    /// Resolved origin
    pub origin: Coordinate,
    /// Resolved destination
    pub destination: Coordinate,
    /// Travel mode used
    pub mode: TravelMode,
    /// The route lookup
    pub outcome: RouteOutcome,
    /// History record for a successful lookup
    pub history_entry: Option<HistoryEntry>,
}

/// Plans routes from user text
#[derive(Debug, Clone)]
pub struct RoutePlanner {
    resolver: Arc<LocationResolver>,
    retriever: Arc<RouteRetriever>,
}

impl RoutePlanner {
    /// Create a planner
    #[must_use]
    pub fn new(resolver: Arc<LocationResolver>, retriever: Arc<RouteRetriever>) -> Self {
        Self {
            resolver,
            retriever,
        }
    }

    /// Plan a route, reading numeric input in the resolver's default system
    pub async fn plan(
        &self,
        origin_text: &str,
        destination_text: &str,
        mode: TravelMode,
    ) -> Result<PlannedRoute, ApplicationError> {
        let crs = self.resolver.config().default_crs;
        self.plan_in(origin_text, destination_text, mode, crs).await
    }

    /// Plan a route, reading numeric input in `crs`
    ///
    /// Endpoints are resolved one after the other. A resolution failure ends
    /// the plan; a routing failure does not and is reported in the outcome.
    /// Never records anything by itself.
    #[instrument(skip(self), fields(mode = %mode, crs = %crs))]
    pub async fn plan_in(
        &self,
        origin_text: &str,
        destination_text: &str,
        mode: TravelMode,
        crs: CoordinateSystem,
    ) -> Result<PlannedRoute, ApplicationError> {
        let origin = self.resolver.resolve(origin_text, crs).await?;
        let destination = self.resolver.resolve(destination_text, crs).await?;

        let outcome = self
            .retriever
            .get_route(&RouteRequest::new(origin, destination, mode))
            .await;

        let history_entry = outcome.is_success().then(|| HistoryEntry {
            origin: origin_text.trim().to_string(),
            destination: destination_text.trim().to_string(),
            mode,
            distance_km: outcome.route.distance_km(),
            duration_min: outcome.route.duration_min(),
            created_at: Utc::now(),
        });

        if outcome.is_success() {
            info!(label = outcome.route.label(), "Route planned");
        }

        Ok(PlannedRoute {
            origin_text: origin_text.trim().to_string(),
            destination_text: destination_text.trim().to_string(),
            origin,
            destination,
            mode,
            outcome,
            history_entry,
        })
    }
}
