//! In-memory network model: stops, routes and road distances.

use std::collections::{BTreeSet, HashMap};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

use tracing::{trace, warn};

use crate::domain::{Coordinates, Route, RouteId, Stop, StopId};

use super::distances::DistanceTable;
use super::error::CatalogueError;
use super::stats::{RouteInfo, StopInfo};

/// Owner of every stop, route and road distance in the network.
///
/// The store is populated during the load phase through `&mut self`
/// methods. Once it is shared (the planner takes it behind an `Arc`) only
/// the read methods remain reachable. Route and stop statistics are
/// computed on first access and memoized.
#[derive(Debug, Default)]
pub struct NetworkStore {
    stops: Vec<Stop>,
    stop_index: HashMap<Arc<str>, StopId>,
    routes: Vec<Route>,
    route_index: HashMap<Arc<str>, RouteId>,
    /// Routes calling at each stop, indexed by `StopId`.
    stop_routes: Vec<BTreeSet<RouteId>>,
    distances: DistanceTable,
    route_stats: Vec<OnceLock<RouteInfo>>,
    stop_stats: Vec<OnceLock<StopInfo>>,
    /// Set once any statistics slot has been filled.
    stats_cached: AtomicBool,
}

impl NetworkStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a stop, or move an existing stop with the same name.
    pub fn add_stop(&mut self, name: &str, location: Coordinates) -> StopId {
        if let Some(&id) = self.stop_index.get(name) {
            self.invalidate_stats();
            self.stops[id.0].location = location;
            return id;
        }

        let id = StopId(self.stops.len());
        let stop = Stop::new(name, location);
        self.stop_index.insert(stop.name.clone(), id);
        self.stops.push(stop);
        self.stop_routes.push(BTreeSet::new());
        self.stop_stats.push(OnceLock::new());
        id
    }

    /// Add a route over already-known stops.
    ///
    /// `stop_names` must already be expanded: a route that is not a round
    /// trip carries its return leg. Re-adding a name replaces the previous
    /// sequence.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::StopNotFound`] for the first unknown stop;
    /// the store is left unchanged.
    pub fn add_route<S: AsRef<str>>(
        &mut self,
        name: &str,
        stop_names: &[S],
        is_round_trip: bool,
    ) -> Result<RouteId, CatalogueError> {
        let stops = stop_names
            .iter()
            .map(|s| self.stop_id(s.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        self.invalidate_stats();

        let id = match self.route_index.get(name) {
            Some(&id) => {
                let old = std::mem::take(&mut self.routes[id.0].stops);
                for stop in old {
                    self.stop_routes[stop.0].remove(&id);
                }
                self.routes[id.0].stops = stops;
                self.routes[id.0].is_round_trip = is_round_trip;
                id
            }
            None => {
                let id = RouteId(self.routes.len());
                let route = Route::new(name, stops, is_round_trip);
                self.route_index.insert(route.name.clone(), id);
                self.routes.push(route);
                self.route_stats.push(OnceLock::new());
                id
            }
        };

        for &stop in &self.routes[id.0].stops {
            self.stop_routes[stop.0].insert(id);
        }

        Ok(id)
    }

    /// Set the road distance from `from` to `to` in meters.
    ///
    /// The reverse direction takes the same value unless it was set before.
    pub fn set_distance(&mut self, from: &str, to: &str, meters: u64) -> Result<(), CatalogueError> {
        let from = self.stop_id(from)?;
        let to = self.stop_id(to)?;
        self.invalidate_stats();
        self.distances.set(from, to, meters);
        Ok(())
    }

    /// Road distance from `from` to `to` in meters, by name.
    pub fn distance(&self, from: &str, to: &str) -> Result<u64, CatalogueError> {
        self.distance_between(self.stop_id(from)?, self.stop_id(to)?)
    }

    /// Road distance from `from` to `to` in meters, by handle.
    pub fn distance_between(&self, from: StopId, to: StopId) -> Result<u64, CatalogueError> {
        self.distances
            .get(from, to)
            .ok_or_else(|| CatalogueError::NoDistanceData {
                from: self.stop(from).name().to_string(),
                to: self.stop(to).name().to_string(),
            })
    }

    /// Look up a stop handle by name.
    pub fn stop_id(&self, name: &str) -> Result<StopId, CatalogueError> {
        self.stop_index
            .get(name)
            .copied()
            .ok_or_else(|| CatalogueError::StopNotFound(name.to_string()))
    }

    /// Look up a route handle by name.
    pub fn route_id(&self, name: &str) -> Result<RouteId, CatalogueError> {
        self.route_index
            .get(name)
            .copied()
            .ok_or_else(|| CatalogueError::RouteNotFound(name.to_string()))
    }

    /// Returns the stop behind a handle issued by this store.
    pub fn stop(&self, id: StopId) -> &Stop {
        &self.stops[id.0]
    }

    /// Returns the route behind a handle issued by this store.
    pub fn route(&self, id: RouteId) -> &Route {
        &self.routes[id.0]
    }

    /// All routes with their handles, in insertion order.
    pub fn routes(&self) -> impl Iterator<Item = (RouteId, &Route)> {
        self.routes.iter().enumerate().map(|(i, r)| (RouteId(i), r))
    }

    /// All stops with their handles, in insertion order.
    pub fn stops(&self) -> impl Iterator<Item = (StopId, &Stop)> {
        self.stops.iter().enumerate().map(|(i, s)| (StopId(i), s))
    }

    /// Number of stops.
    pub fn stops_count(&self) -> usize {
        self.stops.len()
    }

    /// Number of routes.
    pub fn routes_count(&self) -> usize {
        self.routes.len()
    }

    /// Number of directed distance entries.
    pub fn distances_count(&self) -> usize {
        self.distances.len()
    }

    /// Statistics for the named route, computed on first access.
    ///
    /// # Errors
    ///
    /// [`CatalogueError::RouteNotFound`] for an unknown name, and
    /// [`CatalogueError::NoDistanceData`] if a hop of the route has no
    /// distance.
    pub fn route_info(&self, name: &str) -> Result<&RouteInfo, CatalogueError> {
        let id = self.route_id(name)?;
        let slot = &self.route_stats[id.0];
        if let Some(info) = slot.get() {
            return Ok(info);
        }

        let info = self.compute_route_info(self.route(id))?;
        self.stats_cached.store(true, Ordering::Relaxed);
        Ok(slot.get_or_init(|| info))
    }

    /// Routes serving the named stop, computed on first access.
    pub fn stop_info(&self, name: &str) -> Result<&StopInfo, CatalogueError> {
        let id = self.stop_id(name)?;
        Ok(self.stop_stats[id.0].get_or_init(|| {
            self.stats_cached.store(true, Ordering::Relaxed);
            self.compute_stop_info(id)
        }))
    }

    fn compute_route_info(&self, route: &Route) -> Result<RouteInfo, CatalogueError> {
        let mut distance_total = 0;
        let mut geographic = 0.0;

        for (from, to) in route.hops() {
            distance_total += self.distance_between(from, to)?;
            geographic += self
                .stop(from)
                .location
                .distance_to(&self.stop(to).location);
        }

        let curvature = if geographic > 0.0 {
            distance_total as f64 / geographic
        } else {
            1.0
        };

        if curvature < 1.0 {
            warn!(
                route = route.name(),
                distance_total,
                geographic,
                curvature,
                "Road distance is shorter than great-circle distance"
            );
        }

        trace!(route = route.name(), distance_total, curvature, "Computed route info");

        Ok(RouteInfo {
            name: route.name.clone(),
            stops_count: route.stops_count(),
            unique_stops_count: route.unique_stops_count(),
            distance_total,
            curvature,
        })
    }

    fn compute_stop_info(&self, id: StopId) -> StopInfo {
        let mut routes: Vec<Arc<str>> = self.stop_routes[id.0]
            .iter()
            .map(|&route| self.route(route).name.clone())
            .collect();
        routes.sort();

        StopInfo {
            name: self.stop(id).name.clone(),
            routes,
        }
    }

    /// Clear memoized statistics. Free while nothing has been queried yet.
    fn invalidate_stats(&mut self) {
        if !std::mem::take(self.stats_cached.get_mut()) {
            return;
        }
        for slot in &mut self.route_stats {
            slot.take();
        }
        for slot in &mut self.stop_stats {
            slot.take();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn a() -> Coordinates {
        Coordinates::new(55.611, 37.20)
    }

    fn b() -> Coordinates {
        Coordinates::new(55.595, 37.21)
    }

    fn c() -> Coordinates {
        Coordinates::new(55.632, 37.333)
    }

    /// Three stops on a round trip A → B → C → A.
    fn sample_store() -> NetworkStore {
        let mut store = NetworkStore::new();
        store.add_stop("A", a());
        store.add_stop("B", b());
        store.add_stop("C", c());
        store.set_distance("A", "B", 2000).unwrap();
        store.set_distance("B", "A", 2100).unwrap();
        store.set_distance("B", "C", 4300).unwrap();
        store.set_distance("C", "B", 4200).unwrap();
        store.set_distance("C", "A", 4200).unwrap();
        store.add_route("1", &["A", "B", "C", "A"], true).unwrap();
        store
    }

    #[test]
    fn stop_handles_are_dense() {
        let mut store = NetworkStore::new();
        assert_eq!(store.add_stop("A", a()), StopId(0));
        assert_eq!(store.add_stop("B", b()), StopId(1));
        assert_eq!(store.stops_count(), 2);
    }

    #[test]
    fn re_adding_stop_keeps_handle() {
        let mut store = NetworkStore::new();
        let first = store.add_stop("A", a());
        let second = store.add_stop("A", b());
        assert_eq!(first, second);
        assert_eq!(store.stops_count(), 1);
        assert_eq!(store.stop(first).location, b());
    }

    #[test]
    fn route_with_unknown_stop_fails() {
        let mut store = NetworkStore::new();
        store.add_stop("A", a());
        let err = store.add_route("1", &["A", "Z"], true).unwrap_err();
        assert_eq!(err, CatalogueError::StopNotFound("Z".into()));
        assert_eq!(store.routes_count(), 0);
        assert!(store.stop_info("A").unwrap().is_unserved());
    }

    #[test]
    fn distance_mirrors_single_direction() {
        let mut store = NetworkStore::new();
        store.add_stop("A", a());
        store.add_stop("B", b());
        store.set_distance("A", "B", 1500).unwrap();
        assert_eq!(store.distance("B", "A").unwrap(), 1500);
    }

    #[test]
    fn distance_missing() {
        let mut store = NetworkStore::new();
        store.add_stop("A", a());
        store.add_stop("B", b());
        assert_eq!(
            store.distance("A", "B").unwrap_err(),
            CatalogueError::NoDistanceData {
                from: "A".into(),
                to: "B".into()
            }
        );
    }

    #[test]
    fn distance_to_unknown_stop() {
        let mut store = NetworkStore::new();
        store.add_stop("A", a());
        assert_eq!(
            store.set_distance("A", "Q", 10).unwrap_err(),
            CatalogueError::StopNotFound("Q".into())
        );
    }

    #[test]
    fn route_info_for_round_trip() {
        let store = sample_store();
        let info = store.route_info("1").unwrap();

        assert_eq!(info.stops_count, 4);
        assert_eq!(info.unique_stops_count, 3);
        assert_eq!(info.distance_total, 2000 + 4300 + 4200);

        let geographic = a().distance_to(&b()) + b().distance_to(&c()) + c().distance_to(&a());
        assert_relative_eq!(info.curvature, 10500.0 / geographic, max_relative = 1e-12);
        // These road distances are shorter than the straight line
        assert!(info.curvature < 1.0);
    }

    #[test]
    fn route_info_is_memoized() {
        let store = sample_store();
        let first = store.route_info("1").unwrap() as *const RouteInfo;
        let second = store.route_info("1").unwrap() as *const RouteInfo;
        assert_eq!(first, second);
    }

    #[test]
    fn route_info_unknown() {
        let store = sample_store();
        assert_eq!(
            store.route_info("2").unwrap_err(),
            CatalogueError::RouteNotFound("2".into())
        );
    }

    #[test]
    fn route_info_without_distance_fails() {
        let mut store = NetworkStore::new();
        store.add_stop("A", a());
        store.add_stop("B", b());
        store.add_route("1", &["A", "B"], true).unwrap();
        assert!(matches!(
            store.route_info("1"),
            Err(CatalogueError::NoDistanceData { .. })
        ));
    }

    #[test]
    fn single_stop_route_has_unit_curvature() {
        let mut store = NetworkStore::new();
        store.add_stop("A", a());
        store.add_route("loop", &["A"], true).unwrap();
        let info = store.route_info("loop").unwrap();
        assert_eq!(info.stops_count, 1);
        assert_eq!(info.distance_total, 0);
        assert_eq!(info.curvature, 1.0);
    }

    #[test]
    fn stop_info_sorted_routes() {
        let mut store = sample_store();
        store.add_route("828", &["A", "B", "A"], false).unwrap();
        store.add_route("256", &["B", "C", "B"], false).unwrap();

        let info = store.stop_info("B").unwrap();
        let names: Vec<&str> = info.routes.iter().map(|r| &**r).collect();
        assert_eq!(names, vec!["1", "256", "828"]);

        let info = store.stop_info("A").unwrap();
        let names: Vec<&str> = info.routes.iter().map(|r| &**r).collect();
        assert_eq!(names, vec!["1", "828"]);
    }

    #[test]
    fn stop_info_for_unserved_stop() {
        let mut store = sample_store();
        store.add_stop("Lonely", Coordinates::new(0.0, 0.0));
        let info = store.stop_info("Lonely").unwrap();
        assert_eq!(&*info.name, "Lonely");
        assert!(info.is_unserved());
    }

    #[test]
    fn stop_info_unknown() {
        let store = sample_store();
        assert_eq!(
            store.stop_info("Nowhere").unwrap_err(),
            CatalogueError::StopNotFound("Nowhere".into())
        );
    }

    #[test]
    fn loading_leaves_stats_untouched() {
        let store = sample_store();
        assert!(!store.stats_cached.load(Ordering::Relaxed));
        assert!(store.route_stats.iter().all(|slot| slot.get().is_none()));

        store.stop_info("A").unwrap();
        assert!(store.stats_cached.load(Ordering::Relaxed));
    }

    #[test]
    fn mutation_after_query_recomputes() {
        let mut store = sample_store();
        assert_eq!(store.route_info("1").unwrap().distance_total, 10500);
        assert_eq!(store.stop_info("B").unwrap().routes.len(), 1);

        store.set_distance("C", "A", 5200).unwrap();
        assert!(!store.stats_cached.load(Ordering::Relaxed));
        assert_eq!(store.route_info("1").unwrap().distance_total, 11500);

        store.add_route("2", &["B", "C", "B"], false).unwrap();
        assert_eq!(store.stop_info("B").unwrap().routes.len(), 2);

        // A new stop changes no existing statistic
        store.add_stop("D", Coordinates::new(55.7, 37.4));
        assert!(store.stats_cached.load(Ordering::Relaxed));

        // Moving a stop changes the geographic length
        let before = store.route_info("1").unwrap().curvature;
        store.add_stop("C", Coordinates::new(55.7, 37.5));
        assert_ne!(store.route_info("1").unwrap().curvature, before);
    }

    #[test]
    fn replacing_route_reindexes_stops() {
        let mut store = sample_store();
        assert!(!store.stop_info("C").unwrap().is_unserved());

        store.add_route("1", &["A", "B", "A"], false).unwrap();
        assert_eq!(store.routes_count(), 1);
        assert!(store.stop_info("C").unwrap().is_unserved());
        assert_eq!(store.route_info("1").unwrap().stops_count, 3);
    }
}
