//! Graph construction from airport and departure lists.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;

use crate::domain::{Airport, AirportCode, FlightLeg};

use super::error::DataError;
use super::flight_graph::FlightGraph;

/// Source of departing legs per airport.
///
/// This abstraction lets the builder take legs from a parsed snapshot,
/// an in-memory map, or test fixtures.
pub trait DepartureSource {
    /// Legs departing `airport` on `date`.
    fn departures(&self, airport: &Airport, date: NaiveDate) -> Vec<Arc<FlightLeg>>;
}

impl DepartureSource for HashMap<AirportCode, Vec<Arc<FlightLeg>>> {
    fn departures(&self, airport: &Airport, _date: NaiveDate) -> Vec<Arc<FlightLeg>> {
        self.get(&airport.code()).cloned().unwrap_or_default()
    }
}

/// Builds a `FlightGraph` for a single date.
#[derive(Debug, Clone, Copy)]
pub struct GraphBuilder {
    date: NaiveDate,
}

impl GraphBuilder {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }

    /// Build the graph.
    ///
    /// Adds a node for every airport (even those with no departures), then one
    /// edge per leg the source returns for each airport. When an airport code
    /// appears more than once, the first entry is used.
    ///
    /// # Errors
    ///
    /// Returns `DataError` if a leg lands at an airport missing from
    /// `airports`, is listed under the wrong airport, departs on another date,
    /// or reuses a flight number.
    pub fn build<S: DepartureSource + ?Sized>(
        &self,
        airports: &[Arc<Airport>],
        source: &S,
    ) -> Result<FlightGraph, DataError> {
        let mut graph = FlightGraph::new(self.date);

        for airport in airports {
            if graph.contains(&airport.code()) {
                debug!(code = %airport.code(), "duplicate airport ignored");
                continue;
            }
            graph.add_node(Arc::clone(airport));
        }

        let mut seen_flights = HashSet::new();

        // Iterate the graph's own node list so duplicates are not queried twice
        for idx in 0..graph.node_count() {
            let source_id = super::NodeId(idx);
            let airport = Arc::clone(graph.airport(source_id));

            for leg in source.departures(&airport, self.date) {
                let departs_from = leg.departure_airport().code();
                if departs_from != airport.code() {
                    return Err(DataError::DepartureMismatch {
                        flight_number: leg.flight_number(),
                        listed_under: airport.code(),
                        departs_from,
                    });
                }

                let departure_date = leg.departure_time().date();
                if departure_date != self.date {
                    return Err(DataError::DateMismatch {
                        flight_number: leg.flight_number(),
                        expected: self.date,
                        found: departure_date,
                    });
                }

                if !seen_flights.insert(leg.flight_number()) {
                    return Err(DataError::DuplicateFlightNumber(leg.flight_number()));
                }

                let arrival_code = leg.arrival_airport().code();
                let target_id = graph
                    .node(&arrival_code)
                    .ok_or(DataError::UnknownArrivalAirport {
                        flight_number: leg.flight_number(),
                        code: arrival_code,
                    })?;

                graph.add_edge(source_id, target_id, leg);
            }
        }

        debug!(
            date = %self.date,
            airports = graph.node_count(),
            legs = graph.edge_count(),
            "flight graph built"
        );

        Ok(graph)
    }
}
