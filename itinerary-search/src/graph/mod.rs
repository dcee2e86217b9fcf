//! Flight graph for a single travel date.
//!
//! Airports are nodes and each flight leg is a directed edge from its
//! departure airport to its arrival airport. A graph covers exactly one
//! calendar date; searching another date means building another graph.

mod builder;
mod error;
mod flight_graph;

pub use builder::{DepartureSource, GraphBuilder};
pub use error::DataError;
pub use flight_graph::{FlightEdge, FlightGraph, NodeId};
