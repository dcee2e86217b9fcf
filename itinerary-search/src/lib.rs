//! Flight itinerary search.
//!
//! Answers: "which combinations of one day's flights take me from this
//! airport to that one, with a seat free and connections I can make?"

pub mod domain;
pub mod graph;
pub mod planner;
pub mod snapshot;

#[cfg(test)]
mod testing;
