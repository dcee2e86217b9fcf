//! Directed multigraph of airports and flight legs for one date.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::{Airport, AirportCode, FlightLeg};

/// Index of an airport node within a `FlightGraph`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

/// A directed edge carrying the leg it was built from.
#[derive(Debug, Clone)]
pub struct FlightEdge {
    pub source: NodeId,
    pub target: NodeId,
    pub leg: Arc<FlightLeg>,
}

/// Airports as nodes, legs as directed edges.
///
/// Parallel edges between the same pair of airports are allowed. Outgoing
/// edges are kept in insertion order.
///
/// Built by [`GraphBuilder`](super::GraphBuilder); read-only afterwards.
#[derive(Debug, Clone)]
pub struct FlightGraph {
    date: NaiveDate,
    airports: Vec<Arc<Airport>>,
    index: HashMap<AirportCode, NodeId>,
    edges: Vec<FlightEdge>,
    /// Edge indices per node
    outgoing: Vec<Vec<usize>>,
}

impl FlightGraph {
    pub(super) fn new(date: NaiveDate) -> Self {
        Self {
            date,
            airports: Vec::new(),
            index: HashMap::new(),
            edges: Vec::new(),
            outgoing: Vec::new(),
        }
    }

    /// Adds a node, or returns the existing one for that code.
    pub(super) fn add_node(&mut self, airport: Arc<Airport>) -> NodeId {
        if let Some(&id) = self.index.get(&airport.code()) {
            return id;
        }
        let id = NodeId(self.airports.len());
        self.index.insert(airport.code(), id);
        self.airports.push(airport);
        self.outgoing.push(Vec::new());
        id
    }

    pub(super) fn add_edge(&mut self, source: NodeId, target: NodeId, leg: Arc<FlightLeg>) {
        self.outgoing[source.0].push(self.edges.len());
        self.edges.push(FlightEdge {
            source,
            target,
            leg,
        });
    }

    /// The calendar date this graph covers.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn node(&self, code: &AirportCode) -> Option<NodeId> {
        self.index.get(code).copied()
    }

    pub fn contains(&self, code: &AirportCode) -> bool {
        self.index.contains_key(code)
    }

    /// Returns the airport for a node of this graph.
    ///
    /// # Panics
    ///
    /// Panics if `id` came from a different graph.
    pub fn airport(&self, id: NodeId) -> &Arc<Airport> {
        &self.airports[id.0]
    }

    pub fn airports(&self) -> &[Arc<Airport>] {
        &self.airports
    }

    /// Outgoing edges of a node, in insertion order.
    pub fn outgoing(&self, id: NodeId) -> impl Iterator<Item = &FlightEdge> + '_ {
        self.outgoing
            .get(id.0)
            .into_iter()
            .flatten()
            .map(|&e| &self.edges[e])
    }

    /// Legs departing the given airport; empty if it is not in the graph.
    pub fn departures_from(&self, code: &AirportCode) -> Vec<Arc<FlightLeg>> {
        match self.node(code) {
            Some(id) => self.outgoing(id).map(|e| Arc::clone(&e.leg)).collect(),
            None => Vec::new(),
        }
    }

    /// Returns true if at least one leg flies non-stop from `from` to `to`.
    pub fn has_direct_flight(&self, from: &AirportCode, to: &AirportCode) -> bool {
        match (self.node(from), self.node(to)) {
            (Some(f), Some(t)) => self.outgoing(f).any(|e| e.target == t),
            _ => false,
        }
    }

    pub fn node_count(&self) -> usize {
        self.airports.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> &[FlightEdge] {
        &self.edges
    }
}
