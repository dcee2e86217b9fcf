//! Itinerary planning over a flight graph.
//!
//! This module answers: "which combinations of today's flights get me from
//! this airport to that one?"
//!
//! Route enumeration walks the graph breadth-first up to a leg bound and
//! yields raw candidates. Those are filtered for timing, seats and
//! (optionally) direction, then narrowed and ordered for presentation.

mod config;
mod filter;
mod rank;
mod routes;
mod search;
mod window;

#[cfg(test)]
mod scenarios;

pub use config::{ConfigError, SearchConfig};
pub use filter::{Axis, ItineraryFilter, Rejection};
pub use rank::{SortKey, SortOrder, cheapest, compare_by, min_layover, shortest, sort_itineraries};
pub use routes::{DEFAULT_MAX_LEGS, Enumeration, RouteSearchEngine};
pub use search::{Planner, SearchError, SearchRequest, SearchResult};
pub use window::{Bound, Clock, Endpoint, TimeWindow, apply_windows};
