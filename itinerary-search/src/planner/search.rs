//! Itinerary search over a single-date flight graph.
//!
//! Runs route enumeration, feasibility filtering, time windows and
//! ordering as one call.

use tracing::debug;

use crate::domain::{AirportCode, Itinerary};
use crate::graph::FlightGraph;

use super::config::SearchConfig;
use super::filter::ItineraryFilter;
use super::rank::sort_itineraries;
use super::routes::RouteSearchEngine;
use super::window::{TimeWindow, apply_windows};

/// Error from itinerary search.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SearchError {
    /// Airport is not part of the flight graph
    #[error("unknown airport: {0}")]
    UnknownAirport(AirportCode),

    /// Invalid search request
    #[error("invalid search request: {0}")]
    InvalidRequest(String),
}

/// Request for itinerary search.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub origin: AirportCode,
    pub destination: AirportCode,

    /// Departure/arrival windows every result must satisfy.
    pub windows: Vec<TimeWindow>,
}

impl SearchRequest {
    pub fn new(origin: AirportCode, destination: AirportCode) -> Self {
        Self {
            origin,
            destination,
            windows: Vec::new(),
        }
    }

    pub fn with_window(mut self, window: TimeWindow) -> Self {
        self.windows.push(window);
        self
    }

    /// Validate the search request.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.origin == self.destination {
            return Err(SearchError::InvalidRequest(
                "origin and destination are the same airport".to_string(),
            ));
        }
        Ok(())
    }
}

/// Result of itinerary search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Accepted itineraries, ordered per the configuration.
    pub itineraries: Vec<Itinerary>,

    /// Raw candidates produced before filtering.
    pub candidates: usize,

    /// Number of partial routes expanded during enumeration.
    pub routes_explored: usize,
}

impl SearchResult {
    pub fn is_empty(&self) -> bool {
        self.itineraries.is_empty()
    }
}

/// Itinerary planner for one flight graph.
pub struct Planner<'a> {
    graph: &'a FlightGraph,
    config: &'a SearchConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(graph: &'a FlightGraph, config: &'a SearchConfig) -> Self {
        Self { graph, config }
    }

    /// Search for itineraries.
    ///
    /// Finding nothing is an empty result, not an error.
    pub fn search(&self, request: &SearchRequest) -> Result<SearchResult, SearchError> {
        request.validate()?;

        if self.config.max_legs == 0 {
            return Err(SearchError::InvalidRequest(
                "max_legs must be at least 1".to_string(),
            ));
        }

        let enumeration = RouteSearchEngine::new(self.graph).enumerate(
            &request.origin,
            &request.destination,
            self.config.max_legs,
        )?;
        let candidates = enumeration.candidates.len();

        let accepted = ItineraryFilter::from_config(self.config).filter(enumeration.candidates);
        let mut itineraries = apply_windows(accepted, &request.windows);

        if let Some((key, order)) = self.config.sort {
            itineraries = sort_itineraries(itineraries, key, order);
        }

        if let Some(limit) = self.config.max_results {
            itineraries.truncate(limit);
        }

        debug!(
            origin = %request.origin,
            destination = %request.destination,
            candidates,
            results = itineraries.len(),
            "search complete"
        );

        Ok(SearchResult {
            itineraries,
            candidates,
            routes_explored: enumeration.routes_explored,
        })
    }
}
