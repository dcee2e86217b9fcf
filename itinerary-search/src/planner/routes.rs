//! Bounded route enumeration over a flight graph.
//!
//! Explores outward from the origin breadth-first. Each partial route owns
//! its visited set, seeded with the origin, so every branch leaving the
//! origin keeps an independent history and no route passes through the same
//! airport twice.

use std::collections::{HashSet, VecDeque};
use std::sync::Arc;

use tracing::debug;

use crate::domain::{AirportCode, CabinClass, FlightLeg, Itinerary};
use crate::graph::{FlightGraph, NodeId};

use super::filter::ItineraryFilter;
use super::search::SearchError;

/// Leg bound used by [`RouteSearchEngine::has_route`].
pub const DEFAULT_MAX_LEGS: usize = 3;

/// A partial route awaiting expansion.
#[derive(Debug, Clone)]
struct SearchState {
    /// Airport the route currently ends at.
    node: NodeId,

    /// Legs flown so far.
    path: Vec<Arc<FlightLeg>>,

    /// Airports this route has passed through, origin included.
    visited: HashSet<NodeId>,
}

impl SearchState {
    fn initial(origin: NodeId) -> Self {
        let mut visited = HashSet::new();
        visited.insert(origin);
        Self {
            node: origin,
            path: Vec::new(),
            visited,
        }
    }

    fn extend(&self, target: NodeId, leg: &Arc<FlightLeg>) -> Self {
        let mut path = self.path.clone();
        path.push(Arc::clone(leg));
        let mut visited = self.visited.clone();
        visited.insert(target);
        Self {
            node: target,
            path,
            visited,
        }
    }

    fn complete(&self, leg: &Arc<FlightLeg>) -> Vec<Arc<FlightLeg>> {
        let mut path = self.path.clone();
        path.push(Arc::clone(leg));
        path
    }
}

/// Raw candidates plus how much of the graph was explored to find them.
#[derive(Debug, Clone)]
pub struct Enumeration {
    pub candidates: Vec<Itinerary>,
    pub routes_explored: usize,
}

/// Enumerates candidate itineraries between two airports.
pub struct RouteSearchEngine<'g> {
    graph: &'g FlightGraph,
}

impl<'g> RouteSearchEngine<'g> {
    pub fn new(graph: &'g FlightGraph) -> Self {
        Self { graph }
    }

    /// All routes from `origin` to `destination` with at most `max_legs` legs.
    ///
    /// A direct flight is always returned, whatever the bound. No timing or
    /// seat checks are applied; see [`ItineraryFilter`]. Enumeration order is
    /// not part of the contract.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::UnknownAirport` if either airport is not a node
    /// of the graph.
    pub fn find_routes(
        &self,
        origin: &AirportCode,
        destination: &AirportCode,
        max_legs: usize,
    ) -> Result<Vec<Itinerary>, SearchError> {
        Ok(self.enumerate(origin, destination, max_legs)?.candidates)
    }

    /// Like [`find_routes`](Self::find_routes), also reporting the number of
    /// partial routes expanded.
    pub fn enumerate(
        &self,
        origin: &AirportCode,
        destination: &AirportCode,
        max_legs: usize,
    ) -> Result<Enumeration, SearchError> {
        let origin_id = self
            .graph
            .node(origin)
            .ok_or(SearchError::UnknownAirport(*origin))?;
        let destination_id = self
            .graph
            .node(destination)
            .ok_or(SearchError::UnknownAirport(*destination))?;

        let mut candidates = Vec::new();
        let mut routes_explored = 0;

        if origin_id == destination_id {
            return Ok(Enumeration {
                candidates,
                routes_explored,
            });
        }

        let mut queue = VecDeque::new();
        queue.push_back(SearchState::initial(origin_id));

        while let Some(state) = queue.pop_front() {
            routes_explored += 1;

            for edge in self.graph.outgoing(state.node) {
                if edge.target == destination_id {
                    // Legs are contiguous by construction
                    if let Ok(itinerary) = Itinerary::new(state.complete(&edge.leg)) {
                        candidates.push(itinerary);
                    }
                    continue;
                }

                if state.visited.contains(&edge.target) {
                    continue;
                }

                // Room for this leg plus at least one more to reach the destination
                if state.path.len() + 1 < max_legs {
                    queue.push_back(state.extend(edge.target, &edge.leg));
                }
            }
        }

        debug!(
            origin = %origin,
            destination = %destination,
            max_legs,
            candidates = candidates.len(),
            routes_explored,
            "enumerated routes"
        );

        Ok(Enumeration {
            candidates,
            routes_explored,
        })
    }

    /// Returns true if some feasible route with at most three legs has a free
    /// seat in `cabin` on every leg.
    pub fn has_route(
        &self,
        origin: &AirportCode,
        destination: &AirportCode,
        cabin: CabinClass,
    ) -> Result<bool, SearchError> {
        let filter = ItineraryFilter::new(DEFAULT_MAX_LEGS).with_seats(cabin);
        let candidates = self.find_routes(origin, destination, DEFAULT_MAX_LEGS)?;
        Ok(candidates.iter().any(|c| filter.check(c).is_ok()))
    }

    /// Like [`has_route`](Self::has_route), additionally requiring every
    /// connection to head toward the destination.
    pub fn has_directional_route(
        &self,
        origin: &AirportCode,
        destination: &AirportCode,
        cabin: CabinClass,
    ) -> Result<bool, SearchError> {
        let filter = ItineraryFilter::new(DEFAULT_MAX_LEGS)
            .with_seats(cabin)
            .with_direction(true);
        let candidates = self.find_routes(origin, destination, DEFAULT_MAX_LEGS)?;
        Ok(candidates.iter().any(|c| filter.check(c).is_ok()))
    }
}
