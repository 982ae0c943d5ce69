//! Stat request execution.

use tracing::debug;

use crate::transport::TransportCatalogue;

use super::dto::{
    BusResponse, MapResponse, NotFoundResponse, RouteResponse, StatRequest, StatResponse,
    StopResponse,
};
use super::error::RequestError;

/// Answer every request in order.
///
/// An unknown name, or a pair of stops with no itinerary, produces a
/// "not found" response for that request only. Anything else aborts.
pub fn answer_stat_requests(
    catalogue: &TransportCatalogue,
    requests: &[StatRequest],
) -> Result<Vec<StatResponse>, RequestError> {
    requests
        .iter()
        .map(|request| answer(catalogue, request))
        .collect()
}

fn answer(catalogue: &TransportCatalogue, request: &StatRequest) -> Result<StatResponse, RequestError> {
    let id = request.id();

    let response = match request {
        StatRequest::Bus { name, .. } => match catalogue.route_info(name) {
            Ok(info) => StatResponse::Bus(BusResponse::new(id, info)),
            Err(e) if e.is_not_found() => not_found(id, &e),
            Err(e) => return Err(e.into()),
        },
        StatRequest::Stop { name, .. } => match catalogue.stop_info(name) {
            Ok(info) => StatResponse::Stop(StopResponse::new(id, info)),
            Err(e) if e.is_not_found() => not_found(id, &e),
            Err(e) => return Err(e.into()),
        },
        StatRequest::Route { from, to, .. } => match catalogue.build_route(from, to) {
            Ok(Some(answer)) => StatResponse::Route(RouteResponse::new(id, &answer)),
            Ok(None) => {
                debug!(request_id = id, from = %from, to = %to, "No itinerary");
                StatResponse::NotFound(NotFoundResponse::new(id))
            }
            Err(e) if e.is_not_found() => not_found(id, &e),
            Err(e) => return Err(e.into()),
        },
        StatRequest::Map { .. } => {
            debug!(request_id = id, "Map rendering is not supported");
            StatResponse::Map(MapResponse::new(id))
        }
    };

    Ok(response)
}

fn not_found(id: i64, reason: &dyn std::error::Error) -> StatResponse {
    debug!(request_id = id, reason = %reason, "Request not found");
    StatResponse::NotFound(NotFoundResponse::new(id))
}
