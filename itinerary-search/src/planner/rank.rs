//! Itinerary ordering for search results.
//!
//! Sorting is stable: itineraries that compare equal keep the order the
//! search produced them in.

use std::cmp::Ordering;

use crate::domain::{CabinClass, Itinerary};

/// Attribute to order itineraries by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// First departure time
    Departure,
    /// Last arrival time
    Arrival,
    /// Total elapsed time
    Duration,
    /// Total time spent waiting between legs
    Layover,
    /// Number of connections
    Connections,
    /// Total price in a cabin
    Price(CabinClass),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Compare two itineraries by a single key, ascending.
pub fn compare_by(key: SortKey, a: &Itinerary, b: &Itinerary) -> Ordering {
    match key {
        SortKey::Departure => a.departure_time().cmp(&b.departure_time()),
        SortKey::Arrival => a.arrival_time().cmp(&b.arrival_time()),
        SortKey::Duration => a.total_duration().cmp(&b.total_duration()),
        SortKey::Layover => a.total_layover().cmp(&b.total_layover()),
        SortKey::Connections => a.connection_count().cmp(&b.connection_count()),
        SortKey::Price(cabin) => a.total_price(cabin).total_cmp(&b.total_price(cabin)),
    }
}

/// Sort itineraries by `key` in the given order.
///
/// Returns itineraries sorted; ties keep their input order in both directions.
pub fn sort_itineraries(
    mut itineraries: Vec<Itinerary>,
    key: SortKey,
    order: SortOrder,
) -> Vec<Itinerary> {
    match order {
        SortOrder::Ascending => itineraries.sort_by(|a, b| compare_by(key, a, b)),
        SortOrder::Descending => itineraries.sort_by(|a, b| compare_by(key, b, a)),
    }
    itineraries
}

/// The first itinerary with the minimum value of `key`.
fn first_min(itineraries: &[Itinerary], key: SortKey) -> Option<&Itinerary> {
    itineraries.iter().min_by(|a, b| compare_by(key, a, b))
}

/// Lowest total price in the cabin.
pub fn cheapest(itineraries: &[Itinerary], cabin: CabinClass) -> Option<&Itinerary> {
    first_min(itineraries, SortKey::Price(cabin))
}

/// Shortest total elapsed time.
pub fn shortest(itineraries: &[Itinerary]) -> Option<&Itinerary> {
    first_min(itineraries, SortKey::Duration)
}

/// Least total layover time.
pub fn min_layover(itineraries: &[Itinerary]) -> Option<&Itinerary> {
    first_min(itineraries, SortKey::Layover)
}
