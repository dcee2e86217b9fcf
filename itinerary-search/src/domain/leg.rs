//! Flight leg type.
//!
//! A `FlightLeg` is one scheduled, non-stop flight between two airports on
//! a given date, together with its airplane and a snapshot of its fares and
//! seat occupancy. Legs are immutable and shared by `Arc` between the flight
//! graph and every itinerary that uses them.

use std::fmt;
use std::sync::Arc;

use chrono::Duration;

use super::{Airport, FlightTime, elapsed};

/// Cabin class a seat is sold in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CabinClass {
    FirstClass,
    Coach,
}

impl fmt::Display for CabinClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CabinClass::FirstClass => f.write_str("First Class"),
            CabinClass::Coach => f.write_str("Coach"),
        }
    }
}

/// An airplane model and its seating capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Airplane {
    pub model: String,
    pub manufacturer: String,
    pub first_class_seats: i32,
    pub coach_seats: i32,
}

impl Airplane {
    pub fn new(
        model: impl Into<String>,
        manufacturer: impl Into<String>,
        first_class_seats: i32,
        coach_seats: i32,
    ) -> Self {
        Self {
            model: model.into(),
            manufacturer: manufacturer.into(),
            first_class_seats,
            coach_seats,
        }
    }

    /// Returns the number of seats fitted in the given cabin.
    pub fn capacity(&self, cabin: CabinClass) -> i32 {
        match cabin {
            CabinClass::FirstClass => self.first_class_seats,
            CabinClass::Coach => self.coach_seats,
        }
    }
}

/// List price and occupied-seat count for one cabin on one leg.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fare {
    pub price: f64,
    pub occupied: i32,
}

impl Fare {
    pub fn new(price: f64, occupied: i32) -> Self {
        Self { price, occupied }
    }
}

/// Where and when a leg departs or arrives.
#[derive(Debug, Clone)]
pub struct LegEndpoint {
    pub airport: Arc<Airport>,
    pub time: FlightTime,
}

impl LegEndpoint {
    pub fn new(airport: Arc<Airport>, time: FlightTime) -> Self {
        Self { airport, time }
    }
}

/// One scheduled flight segment.
///
/// Flight numbers are unique per date, not globally. Seat counts are a
/// point-in-time snapshot and may report an over-booked cabin (negative
/// availability).
#[derive(Debug, Clone)]
pub struct FlightLeg {
    flight_number: u32,
    airplane: Arc<Airplane>,
    duration_minutes: i64,
    departure: LegEndpoint,
    arrival: LegEndpoint,
    first_class: Fare,
    coach: Fare,
}

impl FlightLeg {
    /// Construct a leg from its parsed parts.
    ///
    /// # Examples
    ///
    /// ```
    /// use itinerary_search::domain::{
    ///     Airplane, Airport, AirportCode, CabinClass, Fare, FlightLeg, FlightTime, LegEndpoint,
    ///     Location,
    /// };
    /// use std::sync::Arc;
    /// use chrono::NaiveDate;
    ///
    /// let date = NaiveDate::from_ymd_opt(2015, 5, 10).unwrap();
    /// let bos = Arc::new(Airport::new(
    ///     AirportCode::parse("BOS").unwrap(),
    ///     "Logan International",
    ///     Location::new(42.36, -71.01, -18000.0),
    /// ));
    /// let jfk = Arc::new(Airport::new(
    ///     AirportCode::parse("JFK").unwrap(),
    ///     "John F. Kennedy International",
    ///     Location::new(40.64, -73.78, -18000.0),
    /// ));
    ///
    /// let leg = FlightLeg::new(
    ///     2231,
    ///     Arc::new(Airplane::new("A320", "Airbus", 12, 124)),
    ///     75,
    ///     LegEndpoint::new(bos, FlightTime::parse_hhmm("13:05", date).unwrap()),
    ///     LegEndpoint::new(jfk, FlightTime::parse_hhmm("14:20", date).unwrap()),
    ///     Fare::new(420.0, 12),
    ///     Fare::new(98.5, 100),
    /// );
    ///
    /// assert!(!leg.has_available_seats(CabinClass::FirstClass));
    /// assert_eq!(leg.available_seats(CabinClass::Coach), 24);
    /// ```
    pub fn new(
        flight_number: u32,
        airplane: Arc<Airplane>,
        duration_minutes: i64,
        departure: LegEndpoint,
        arrival: LegEndpoint,
        first_class: Fare,
        coach: Fare,
    ) -> Self {
        Self {
            flight_number,
            airplane,
            duration_minutes,
            departure,
            arrival,
            first_class,
            coach,
        }
    }

    pub fn flight_number(&self) -> u32 {
        self.flight_number
    }

    pub fn airplane(&self) -> &Arc<Airplane> {
        &self.airplane
    }

    /// Scheduled flying time as published by the feed.
    pub fn scheduled_duration(&self) -> Duration {
        Duration::minutes(self.duration_minutes)
    }

    /// Elapsed time from departure to arrival, derived from the timestamps.
    pub fn duration(&self) -> Duration {
        elapsed(self.departure.time, self.arrival.time)
    }

    pub fn departure_airport(&self) -> &Arc<Airport> {
        &self.departure.airport
    }

    pub fn arrival_airport(&self) -> &Arc<Airport> {
        &self.arrival.airport
    }

    /// Departure time (UTC).
    pub fn departure_time(&self) -> FlightTime {
        self.departure.time
    }

    /// Arrival time (UTC).
    pub fn arrival_time(&self) -> FlightTime {
        self.arrival.time
    }

    /// Departure time in the departure airport's local time.
    pub fn local_departure_time(&self) -> FlightTime {
        self.departure
            .time
            .with_offset(self.departure.airport.location().utc_offset())
    }

    /// Arrival time in the arrival airport's local time.
    pub fn local_arrival_time(&self) -> FlightTime {
        self.arrival
            .time
            .with_offset(self.arrival.airport.location().utc_offset())
    }

    pub fn fare(&self, cabin: CabinClass) -> &Fare {
        match cabin {
            CabinClass::FirstClass => &self.first_class,
            CabinClass::Coach => &self.coach,
        }
    }

    pub fn price(&self, cabin: CabinClass) -> f64 {
        self.fare(cabin).price
    }

    /// Seats left in the cabin: capacity minus occupied.
    ///
    /// Zero means full, negative means over-booked.
    pub fn available_seats(&self, cabin: CabinClass) -> i32 {
        self.airplane.capacity(cabin) - self.fare(cabin).occupied
    }

    /// Returns true if at least one seat is left in the cabin.
    pub fn has_available_seats(&self, cabin: CabinClass) -> bool {
        self.available_seats(cabin) > 0
    }
}

impl PartialEq for FlightLeg {
    fn eq(&self, other: &Self) -> bool {
        // Flight numbers are unique within a date
        self.flight_number == other.flight_number
            && self.departure.time.date() == other.departure.time.date()
    }
}

impl Eq for FlightLeg {}

impl fmt::Display for FlightLeg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} {} -> {} {}",
            self.flight_number,
            self.departure.airport.code(),
            self.departure.time,
            self.arrival.airport.code(),
            self.arrival.time
        )
    }
}
