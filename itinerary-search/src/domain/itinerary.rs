//! Itinerary type.
//!
//! An `Itinerary` is one purchasable trip option: an ordered, contiguous
//! sequence of flight legs from an origin airport to a destination airport.

use std::hash::{Hash, Hasher};
use std::sync::Arc;

use chrono::Duration;

use super::{Airport, CabinClass, DomainError, FlightLeg, FlightTime, elapsed};

/// A complete trip made of one or more flight legs.
///
/// Derived quantities (duration, layovers, cost) are computed on demand
/// from the legs rather than stored.
///
/// # Invariants
///
/// - At least one leg
/// - Consecutive legs connect (arrival airport of one = departure airport of next)
#[derive(Debug, Clone)]
pub struct Itinerary {
    legs: Vec<Arc<FlightLeg>>,
}

impl Itinerary {
    /// Constructs an itinerary from legs in travel order.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - The legs list is empty
    /// - Legs don't connect (arrival airport != next departure airport)
    pub fn new(legs: Vec<Arc<FlightLeg>>) -> Result<Self, DomainError> {
        if legs.is_empty() {
            return Err(DomainError::EmptyItinerary);
        }

        for window in legs.windows(2) {
            let arrives = window[0].arrival_airport();
            let departs = window[1].departure_airport();
            if !arrives.is_same_airport(departs) {
                return Err(DomainError::LegsNotContiguous(
                    arrives.code(),
                    departs.code(),
                ));
            }
        }

        Ok(Itinerary { legs })
    }

    /// Returns all legs in order.
    pub fn legs(&self) -> &[Arc<FlightLeg>] {
        &self.legs
    }

    pub fn leg_count(&self) -> usize {
        self.legs.len()
    }

    /// Returns the number of connections (legs - 1).
    pub fn connection_count(&self) -> usize {
        self.legs.len() - 1
    }

    pub fn is_direct(&self) -> bool {
        self.legs.len() == 1
    }

    fn first_leg(&self) -> &FlightLeg {
        // Non-empty by construction
        &self.legs[0]
    }

    fn last_leg(&self) -> &FlightLeg {
        // Non-empty by construction
        &self.legs[self.legs.len() - 1]
    }

    pub fn origin(&self) -> &Arc<Airport> {
        self.first_leg().departure_airport()
    }

    pub fn destination(&self) -> &Arc<Airport> {
        self.last_leg().arrival_airport()
    }

    /// Departure time of the first leg (UTC).
    pub fn departure_time(&self) -> FlightTime {
        self.first_leg().departure_time()
    }

    /// Arrival time of the last leg (UTC).
    pub fn arrival_time(&self) -> FlightTime {
        self.last_leg().arrival_time()
    }

    pub fn local_departure_time(&self) -> FlightTime {
        self.first_leg().local_departure_time()
    }

    pub fn local_arrival_time(&self) -> FlightTime {
        self.last_leg().local_arrival_time()
    }

    /// Total time from first departure to last arrival.
    pub fn total_duration(&self) -> Duration {
        elapsed(self.departure_time(), self.arrival_time())
    }

    /// Layover at connection `index` (between leg `index` and `index + 1`).
    ///
    /// Returns `None` if there is no such connection.
    pub fn layover(&self, index: usize) -> Option<Duration> {
        let arriving = self.legs.get(index)?;
        let departing = self.legs.get(index + 1)?;
        Some(elapsed(arriving.arrival_time(), departing.departure_time()))
    }

    /// All layovers in order; empty for a direct itinerary.
    pub fn layovers(&self) -> Vec<Duration> {
        self.legs
            .windows(2)
            .map(|w| elapsed(w[0].arrival_time(), w[1].departure_time()))
            .collect()
    }

    pub fn total_layover(&self) -> Duration {
        self.layovers().into_iter().sum()
    }

    /// Sum of the per-leg list prices in the given cabin.
    pub fn total_price(&self, cabin: CabinClass) -> f64 {
        self.legs.iter().map(|leg| leg.price(cabin)).sum()
    }

    /// Returns true if every leg has a seat left in the given cabin.
    pub fn has_available_seats(&self, cabin: CabinClass) -> bool {
        self.legs.iter().all(|leg| leg.has_available_seats(cabin))
    }

    /// Flight numbers in travel order; identifies the itinerary within a date.
    pub fn flight_numbers(&self) -> Vec<u32> {
        self.legs.iter().map(|leg| leg.flight_number()).collect()
    }

    /// Airport codes visited in order, origin first.
    pub fn route(&self) -> Vec<super::AirportCode> {
        std::iter::once(self.origin().code())
            .chain(self.legs.iter().map(|leg| leg.arrival_airport().code()))
            .collect()
    }
}

impl PartialEq for Itinerary {
    fn eq(&self, other: &Self) -> bool {
        self.legs.len() == other.legs.len()
            && self.legs.iter().zip(&other.legs).all(|(a, b)| a == b)
    }
}

impl Eq for Itinerary {}

impl Hash for Itinerary {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for leg in &self.legs {
            leg.flight_number().hash(state);
            leg.departure_time().date().hash(state);
        }
    }
}
