//! Test fixtures shared across module tests.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::{
    Airplane, Airport, AirportCode, CabinClass, Fare, FlightLeg, FlightTime, LegEndpoint,
    Location, elapsed,
};
use crate::graph::{FlightGraph, GraphBuilder};

pub const FIRST: CabinClass = CabinClass::FirstClass;
pub const COACH: CabinClass = CabinClass::Coach;

/// A day in May 2015; the default travel date is the 10th.
pub fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2015, 5, day).unwrap()
}

pub fn travel_date() -> NaiveDate {
    date(10)
}

pub fn code(s: &str) -> AirportCode {
    AirportCode::parse(s).unwrap()
}

/// Airport with approximate real coordinates for the codes used in tests.
pub fn airport(c: &str) -> Arc<Airport> {
    let (lat, lon, offset_hours) = match c {
        "BOS" => (42.36, -71.01, -4),
        "JFK" => (40.64, -73.78, -4),
        "ATL" => (33.64, -84.43, -4),
        "MIA" => (25.79, -80.29, -4),
        "ORD" => (41.97, -87.91, -5),
        "DEN" => (39.86, -104.67, -6),
        "SFO" => (37.62, -122.38, -7),
        "LAX" => (33.94, -118.41, -7),
        "SEA" => (47.45, -122.31, -7),
        "LHR" => (51.47, -0.45, 1),
        _ => (0.0, 0.0, 0),
    };
    airport_at(c, lat, lon, offset_hours)
}

pub fn airport_at(c: &str, lat: f64, lon: f64, offset_hours: i64) -> Arc<Airport> {
    Arc::new(Airport::new(
        code(c),
        format!("{c} Airport"),
        Location::new(lat, lon, (offset_hours * 3600) as f64),
    ))
}

/// Builder for test legs. Defaults: travel date, 16 first / 50 coach seats,
/// nothing occupied, first 500.0 and coach 150.0.
pub struct LegSpec {
    flight_number: u32,
    from: Arc<Airport>,
    to: Arc<Airport>,
    departs: String,
    arrives: String,
    departure_date: NaiveDate,
    arrival_date: Option<NaiveDate>,
    prices: (f64, f64),
    occupied: (i32, i32),
    capacity: (i32, i32),
}

impl LegSpec {
    pub fn new(
        flight_number: u32,
        from: &Arc<Airport>,
        to: &Arc<Airport>,
        departs: &str,
        arrives: &str,
    ) -> Self {
        Self {
            flight_number,
            from: Arc::clone(from),
            to: Arc::clone(to),
            departs: departs.to_string(),
            arrives: arrives.to_string(),
            departure_date: travel_date(),
            arrival_date: None,
            prices: (500.0, 150.0),
            occupied: (0, 0),
            capacity: (16, 50),
        }
    }

    /// Departure date; arrival defaults to the same day, or the next day
    /// when the arrival clock time is earlier than the departure.
    pub fn on(mut self, d: NaiveDate) -> Self {
        self.departure_date = d;
        self
    }

    pub fn arrives_on(mut self, d: NaiveDate) -> Self {
        self.arrival_date = Some(d);
        self
    }

    pub fn prices(mut self, first: f64, coach: f64) -> Self {
        self.prices = (first, coach);
        self
    }

    pub fn occupied(mut self, cabin: CabinClass, seats: i32) -> Self {
        match cabin {
            CabinClass::FirstClass => self.occupied.0 = seats,
            CabinClass::Coach => self.occupied.1 = seats,
        }
        self
    }

    pub fn capacity(mut self, first: i32, coach: i32) -> Self {
        self.capacity = (first, coach);
        self
    }

    /// Occupy every seat in the cabin.
    pub fn full(self, cabin: CabinClass) -> Self {
        let seats = match cabin {
            CabinClass::FirstClass => self.capacity.0,
            CabinClass::Coach => self.capacity.1,
        };
        self.occupied(cabin, seats)
    }
}

pub fn leg(spec: LegSpec) -> Arc<FlightLeg> {
    let departure = FlightTime::parse_hhmm(&spec.departs, spec.departure_date).unwrap();
    let arrival_date = spec.arrival_date.unwrap_or_else(|| {
        let same_day = FlightTime::parse_hhmm(&spec.arrives, spec.departure_date).unwrap();
        if same_day < departure {
            spec.departure_date.succ_opt().unwrap()
        } else {
            spec.departure_date
        }
    });
    let arrival = FlightTime::parse_hhmm(&spec.arrives, arrival_date).unwrap();

    Arc::new(FlightLeg::new(
        spec.flight_number,
        Arc::new(Airplane::new(
            "A320",
            "Airbus",
            spec.capacity.0,
            spec.capacity.1,
        )),
        elapsed(departure, arrival).num_minutes(),
        LegEndpoint::new(spec.from, departure),
        LegEndpoint::new(spec.to, arrival),
        Fare::new(spec.prices.0, spec.occupied.0),
        Fare::new(spec.prices.1, spec.occupied.1),
    ))
}

/// Group legs under their departure airport.
pub fn departures(legs: &[Arc<FlightLeg>]) -> HashMap<AirportCode, Vec<Arc<FlightLeg>>> {
    let mut by_airport: HashMap<AirportCode, Vec<Arc<FlightLeg>>> = HashMap::new();
    for leg in legs {
        by_airport
            .entry(leg.departure_airport().code())
            .or_default()
            .push(Arc::clone(leg));
    }
    by_airport
}

/// Build a graph for the travel date from the given airports and legs.
pub fn graph(airports: &[Arc<Airport>], legs: &[Arc<FlightLeg>]) -> FlightGraph {
    GraphBuilder::new(travel_date())
        .build(airports, &departures(legs))
        .unwrap()
}
