//! Phased network loading.
//!
//! Base requests arrive in any order, but the store needs stops before
//! the distances and routes that refer to them. Each phase drains fully
//! before the next starts: stops, then road distances, then routes.
//! Router initialization is the last phase and happens when the
//! [`TransportCatalogue`] is built.

use tracing::info;

use crate::catalogue::{CatalogueError, NetworkStore};
use crate::domain::Coordinates;
use crate::router::RoutingSettings;
use crate::transport::TransportCatalogue;

use super::dto::{BaseRequest, BusRequest, StopRequest};
use super::error::RequestError;

/// Populate a store from base requests.
///
/// # Errors
///
/// Any reference to an unknown stop aborts the load.
pub fn load_network(requests: &[BaseRequest]) -> Result<NetworkStore, CatalogueError> {
    let mut store = NetworkStore::new();

    for stop in stops(requests) {
        store.add_stop(&stop.name, Coordinates::new(stop.latitude, stop.longitude));
    }

    for stop in stops(requests) {
        for (to, &meters) in &stop.road_distances {
            store.set_distance(&stop.name, to, meters)?;
        }
    }

    for bus in buses(requests) {
        store.add_route(&bus.name, &bus.expanded_stops(), bus.is_roundtrip)?;
    }

    info!(
        stops = store.stops_count(),
        routes = store.routes_count(),
        distances = store.distances_count(),
        "Network loaded"
    );

    Ok(store)
}

/// Load the network and, if settings are present, initialize routing.
pub fn build_catalogue(
    requests: &[BaseRequest],
    settings: Option<RoutingSettings>,
) -> Result<TransportCatalogue, RequestError> {
    let store = load_network(requests)?;
    Ok(TransportCatalogue::new(store, settings)?)
}

fn stops(requests: &[BaseRequest]) -> impl Iterator<Item = &StopRequest> {
    requests.iter().filter_map(|r| match r {
        BaseRequest::Stop(stop) => Some(stop),
        BaseRequest::Bus(_) => None,
    })
}

fn buses(requests: &[BaseRequest]) -> impl Iterator<Item = &BusRequest> {
    requests.iter().filter_map(|r| match r {
        BaseRequest::Bus(bus) => Some(bus),
        BaseRequest::Stop(_) => None,
    })
}
