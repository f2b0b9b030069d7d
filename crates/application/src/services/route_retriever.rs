//! Route retriever
//!
//! Asks the directions port for a route and converts the answer into a
//! [`RouteResult`]. Failures degrade to the empty route; the reason is kept
//! alongside it.

use std::{fmt, sync::Arc};

use domain::{DurationPrecision, RouteRequest, RouteResult};
use tracing::{debug, instrument, warn};

use crate::{error::RoutingFailure, ports::DirectionsPort};

/// A route lookup that always yields a route value
///
/// On failure `route` is [`RouteResult::empty`] and `failure` says why.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteOutcome {
    /// The route, empty on failure
    pub route: RouteResult,
    /// Why no route was produced
    pub failure: Option<RoutingFailure>,
}

impl RouteOutcome {
    /// Whether a route was produced
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.failure.is_none()
    }

    /// Convert into a `Result`
    pub fn into_result(self) -> Result<RouteResult, RoutingFailure> {
        match self.failure {
            None => Ok(self.route),
            Some(failure) => Err(failure),
        }
    }
}

impl From<Result<RouteResult, RoutingFailure>> for RouteOutcome {
    fn from(result: Result<RouteResult, RoutingFailure>) -> Self {
        match result {
            Ok(route) => Self {
                route,
                failure: None,
            },
            Err(failure) => Self {
                route: RouteResult::empty(),
                failure: Some(failure),
            },
        }
    }
}

/// Retrieves routes through the directions port
pub struct RouteRetriever {
    directions: Arc<dyn DirectionsPort>,
    precision: DurationPrecision,
}

impl fmt::Debug for RouteRetriever {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteRetriever")
            .field("precision", &self.precision)
            .finish_non_exhaustive()
    }
}

impl RouteRetriever {
    /// Create a retriever
    #[must_use]
    pub fn new(directions: Arc<dyn DirectionsPort>, precision: DurationPrecision) -> Self {
        Self {
            directions,
            precision,
        }
    }

    /// Retrieve a route, or the reason there is none
    #[instrument(skip(self), fields(mode = %request.mode))]
    pub async fn try_get_route(&self, request: &RouteRequest) -> Result<RouteResult, RoutingFailure> {
        let raw = self.directions.directions(request).await?;
        if raw.coordinates.is_empty() {
            return Err(RoutingFailure::NoRoute);
        }

        let route = RouteResult::from_service_units(
            raw.coordinates,
            raw.distance_m,
            raw.duration_s,
            self.precision,
        );
        debug!(
            points = route.coordinates().len(),
            distance_km = route.distance_km(),
            duration_min = route.duration_min(),
            "Route retrieved"
        );
        Ok(route)
    }

    /// Retrieve a route, degrading to the empty route on failure
    pub async fn get_route(&self, request: &RouteRequest) -> RouteOutcome {
        let result = self.try_get_route(request).await;
        if let Err(failure) = &result {
            warn!(%failure, "No route available");
        }
        RouteOutcome::from(result)
    }
}
