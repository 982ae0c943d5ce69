//! Data transfer objects for the request document and its answers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalogue::{RouteInfo, StopInfo};
use crate::router::{Item, RouteAnswer, RoutingSettings};

/// The whole input document.
///
/// Keys other than these (render settings, for instance) are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Document {
    /// Network description
    #[serde(default)]
    pub base_requests: Vec<BaseRequest>,

    /// Router parameters; without them route queries fail
    #[serde(default)]
    pub routing_settings: Option<RoutingSettings>,

    /// Queries to answer, in order
    #[serde(default)]
    pub stat_requests: Vec<StatRequest>,
}

/// A network description entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum BaseRequest {
    Stop(StopRequest),
    Bus(BusRequest),
}

/// A stop with its outgoing road distances.
#[derive(Debug, Clone, Deserialize)]
pub struct StopRequest {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,

    /// Meters to each neighbouring stop, by name
    #[serde(default)]
    pub road_distances: BTreeMap<String, u64>,
}

/// A route as written in the document.
#[derive(Debug, Clone, Deserialize)]
pub struct BusRequest {
    pub name: String,
    pub stops: Vec<String>,
    pub is_roundtrip: bool,
}

impl BusRequest {
    /// The stop sequence a vehicle actually follows.
    ///
    /// A route that is not a round trip goes out and comes back:
    /// `[a, b, c]` becomes `[a, b, c, b, a]`.
    pub fn expanded_stops(&self) -> Vec<&str> {
        let mut stops: Vec<&str> = self.stops.iter().map(String::as_str).collect();
        if !self.is_roundtrip && stops.len() > 1 {
            let back: Vec<&str> = stops[..stops.len() - 1].iter().rev().copied().collect();
            stops.extend(back);
        }
        stops
    }
}

/// A query.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum StatRequest {
    /// Route statistics
    Bus { id: i64, name: String },
    /// Routes through a stop
    Stop { id: i64, name: String },
    /// Fastest itinerary
    Route { id: i64, from: String, to: String },
    /// Rendered network map; answered with an empty map
    Map { id: i64 },
}

impl StatRequest {
    /// The request id echoed in the response.
    pub fn id(&self) -> i64 {
        match self {
            StatRequest::Bus { id, .. }
            | StatRequest::Stop { id, .. }
            | StatRequest::Route { id, .. }
            | StatRequest::Map { id } => *id,
        }
    }
}

/// An answer to one query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StatResponse {
    Bus(BusResponse),
    Stop(StopResponse),
    Route(RouteResponse),
    Map(MapResponse),
    NotFound(NotFoundResponse),
}

/// Route statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusResponse {
    pub request_id: i64,
    /// Road length in meters
    pub route_length: u64,
    pub stop_count: usize,
    pub unique_stop_count: usize,
    pub curvature: f64,
}

impl BusResponse {
    pub fn new(request_id: i64, info: &RouteInfo) -> Self {
        Self {
            request_id,
            route_length: info.distance_total,
            stop_count: info.stops_count,
            unique_stop_count: info.unique_stops_count,
            curvature: info.curvature,
        }
    }
}

/// Routes through a stop.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StopResponse {
    pub request_id: i64,
    /// Sorted route names
    pub buses: Vec<String>,
}

impl StopResponse {
    pub fn new(request_id: i64, info: &StopInfo) -> Self {
        Self {
            request_id,
            buses: info.routes.iter().map(|r| r.to_string()).collect(),
        }
    }
}

/// A fastest itinerary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteResponse {
    pub request_id: i64,
    /// Minutes
    pub total_time: f64,
    pub items: Vec<ItemResponse>,
}

impl RouteResponse {
    pub fn new(request_id: i64, answer: &RouteAnswer) -> Self {
        Self {
            request_id,
            total_time: answer.total_time,
            items: answer.items.iter().map(ItemResponse::from).collect(),
        }
    }
}

/// An itinerary item as presented to clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum ItemResponse {
    Wait {
        stop_name: String,
        time: u32,
    },
    Bus {
        bus: String,
        span_count: usize,
        time: f64,
    },
}

impl From<&Item> for ItemResponse {
    fn from(item: &Item) -> Self {
        match item {
            Item::Wait { stop, time } => ItemResponse::Wait {
                stop_name: stop.to_string(),
                time: *time,
            },
            Item::Ride {
                route,
                span_count,
                time,
            } => ItemResponse::Bus {
                bus: route.to_string(),
                span_count: *span_count,
                time: *time,
            },
        }
    }
}

/// Map answer.
///
/// Rendering is not supported, so `map` is always empty. The key is kept
/// so clients that expect it still find a string there.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapResponse {
    pub request_id: i64,
    pub map: String,
}

impl MapResponse {
    pub fn new(request_id: i64) -> Self {
        Self {
            request_id,
            map: String::new(),
        }
    }
}

/// Answer for an unknown name or a missing itinerary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotFoundResponse {
    pub request_id: i64,
    pub error_message: String,
}

impl NotFoundResponse {
    pub fn new(request_id: i64) -> Self {
        Self {
            request_id,
            error_message: "not found".to_string(),
        }
    }
}
