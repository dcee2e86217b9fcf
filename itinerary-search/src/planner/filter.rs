//! Feasibility filtering of candidate itineraries.
//!
//! Candidates from route enumeration are checked, in order, for:
//! 1. Leg count within the bound (direct flights always pass)
//! 2. Chronological order of connections
//! 3. A free seat in the requested cabin on every leg
//! 4. Geographic direction (only when enabled)

use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, trace};

use crate::domain::{CabinClass, Itinerary, Location};

use super::config::SearchConfig;

/// Coordinate axis for the direction check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Latitude => f.write_str("latitude"),
            Axis::Longitude => f.write_str("longitude"),
        }
    }
}

/// Why a candidate itinerary was dropped.
#[derive(Debug, Clone, PartialEq)]
pub enum Rejection {
    TooManyLegs { legs: usize, max: usize },
    /// Next leg departs before (or as) the previous one lands
    NotChronological { connection: usize },
    NoSeats { flight_number: u32, cabin: CabinClass },
    /// Departure of leg `connection + 1` moves backward along `axis`
    WrongDirection { connection: usize, axis: Axis },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::TooManyLegs { legs, max } => write!(f, "{legs} legs exceeds {max}"),
            Rejection::NotChronological { connection } => {
                write!(f, "connection {connection} departs before arrival")
            }
            Rejection::NoSeats {
                flight_number,
                cabin,
            } => write!(f, "flight {flight_number} has no {cabin} seats"),
            Rejection::WrongDirection { connection, axis } => {
                write!(f, "connection {connection} backtracks in {axis}")
            }
        }
    }
}

/// Filter applied to raw route candidates.
#[derive(Debug, Clone, Copy)]
pub struct ItineraryFilter {
    max_legs: usize,
    cabin: Option<CabinClass>,
    require_direction: bool,
}

impl ItineraryFilter {
    /// A filter checking leg count and chronology only.
    pub fn new(max_legs: usize) -> Self {
        Self {
            max_legs,
            cabin: None,
            require_direction: false,
        }
    }

    pub fn from_config(config: &SearchConfig) -> Self {
        Self {
            max_legs: config.max_legs,
            cabin: config.cabin,
            require_direction: config.require_direction,
        }
    }

    /// Also require a free seat in `cabin` on every leg.
    pub fn with_seats(mut self, cabin: CabinClass) -> Self {
        self.cabin = Some(cabin);
        self
    }

    pub fn with_direction(mut self, require_direction: bool) -> Self {
        self.require_direction = require_direction;
        self
    }

    /// Keep the candidates that pass every check, in their input order.
    pub fn filter(&self, candidates: Vec<Itinerary>) -> Vec<Itinerary> {
        let total = candidates.len();
        let accepted: Vec<Itinerary> = candidates
            .into_iter()
            .filter(|itinerary| match self.check(itinerary) {
                Ok(()) => true,
                Err(reason) => {
                    trace!(
                        flights = ?itinerary.flight_numbers(),
                        %reason,
                        "candidate rejected"
                    );
                    false
                }
            })
            .collect();

        debug!(candidates = total, accepted = accepted.len(), "filtered itineraries");
        accepted
    }

    /// Run every enabled check against one itinerary.
    pub fn check(&self, itinerary: &Itinerary) -> Result<(), Rejection> {
        check_size(itinerary, self.max_legs)?;
        check_chronology(itinerary)?;
        if let Some(cabin) = self.cabin {
            check_seats(itinerary, cabin)?;
        }
        if self.require_direction {
            check_direction(itinerary)?;
        }
        Ok(())
    }
}

fn check_size(itinerary: &Itinerary, max_legs: usize) -> Result<(), Rejection> {
    let legs = itinerary.leg_count();
    if legs > 1 && legs > max_legs {
        return Err(Rejection::TooManyLegs {
            legs,
            max: max_legs,
        });
    }
    Ok(())
}

/// Compares calendar dates first. A connection landing on an earlier date
/// than the next departure always passes, however long the gap.
fn check_chronology(itinerary: &Itinerary) -> Result<(), Rejection> {
    for (connection, pair) in itinerary.legs().windows(2).enumerate() {
        let arrival = pair[0].arrival_time();
        let departure = pair[1].departure_time();

        let feasible = match arrival.date().cmp(&departure.date()) {
            Ordering::Equal => arrival.time() < departure.time(),
            Ordering::Less => true,
            Ordering::Greater => false,
        };
        if !feasible {
            return Err(Rejection::NotChronological { connection });
        }
    }
    Ok(())
}

fn check_seats(itinerary: &Itinerary, cabin: CabinClass) -> Result<(), Rejection> {
    match itinerary
        .legs()
        .iter()
        .find(|leg| !leg.has_available_seats(cabin))
    {
        Some(leg) => Err(Rejection::NoSeats {
            flight_number: leg.flight_number(),
            cabin,
        }),
        None => Ok(()),
    }
}

/// Each connecting departure must not move away from the destination along
/// either axis, relative to the overall origin-to-destination vector.
fn check_direction(itinerary: &Itinerary) -> Result<(), Rejection> {
    if itinerary.is_direct() {
        return Ok(());
    }

    let origin = itinerary.origin().location();
    let destination = itinerary.destination().location();

    let width = (origin.longitude - destination.longitude).abs();
    let height = (origin.latitude - destination.latitude).abs();
    let axes = if width > height {
        [Axis::Longitude, Axis::Latitude]
    } else {
        [Axis::Latitude, Axis::Longitude]
    };

    for (connection, pair) in itinerary.legs().windows(2).enumerate() {
        let from = pair[0].departure_airport().location();
        let to = pair[1].departure_airport().location();

        for axis in axes {
            if !heads_toward(axis, origin, destination, from, to) {
                return Err(Rejection::WrongDirection { connection, axis });
            }
        }
    }
    Ok(())
}

fn coordinate(axis: Axis, location: &Location) -> f64 {
    match axis {
        Axis::Latitude => location.latitude,
        Axis::Longitude => location.longitude,
    }
}

/// Travel with destination <= origin on an axis counts as decreasing (south
/// or west); a step must then not increase that coordinate, and vice versa.
fn heads_toward(
    axis: Axis,
    origin: &Location,
    destination: &Location,
    from: &Location,
    to: &Location,
) -> bool {
    let (step_from, step_to) = (coordinate(axis, from), coordinate(axis, to));
    if coordinate(axis, destination) <= coordinate(axis, origin) {
        step_to <= step_from
    } else {
        step_to >= step_from
    }
}
