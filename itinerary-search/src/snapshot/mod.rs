//! Snapshot loading.
//!
//! A snapshot is the parsed output of the airport and flight feeds for one
//! travel date, stored as JSON. Loading converts it into shared domain
//! records ready for [`GraphBuilder`].

mod convert;
mod types;

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;

use crate::domain::{Airport, AirportCode, FlightLeg};
use crate::graph::{DataError, DepartureSource, FlightGraph, GraphBuilder};

pub use convert::{
    AirplaneCache, AirportIndex, ConversionError, convert_airport, convert_leg, parse_code,
    parse_date,
};
pub use types::{
    AirplaneRecord, AirportRecord, EndpointRecord, FlightLegRecord, LocationRecord, SnapshotFile,
};

/// Airports and departures for one date, converted to domain records.
#[derive(Debug, Clone)]
pub struct Snapshot {
    date: NaiveDate,
    airports: Vec<Arc<Airport>>,
    departures: HashMap<AirportCode, Vec<Arc<FlightLeg>>>,
}

impl Snapshot {
    /// Read and convert a snapshot file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConversionError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), bytes = contents.len(), "read snapshot");
        Self::from_json(&contents)
    }

    pub fn from_json(json: &str) -> Result<Self, ConversionError> {
        let file: SnapshotFile = serde_json::from_str(json)?;
        Self::from_file(&file)
    }

    /// Convert parsed records.
    ///
    /// Airport codes are matched case-insensitively; when a code repeats,
    /// the first record is used. Legs are grouped under their departure
    /// airport in file order.
    pub fn from_file(file: &SnapshotFile) -> Result<Self, ConversionError> {
        let date = parse_date(&file.date)?;

        let mut airports = Vec::with_capacity(file.airports.len());
        let mut index = AirportIndex::new();
        for record in &file.airports {
            let airport = Arc::new(convert_airport(record)?);
            if index.contains_key(&airport.code()) {
                debug!(code = %airport.code(), "duplicate airport ignored");
                continue;
            }
            index.insert(airport.code(), Arc::clone(&airport));
            airports.push(airport);
        }

        let mut airplanes = AirplaneCache::default();
        let mut departures: HashMap<AirportCode, Vec<Arc<FlightLeg>>> = HashMap::new();
        for record in &file.flights {
            let leg = convert_leg(record, &index, &mut airplanes)?;
            departures
                .entry(leg.departure_airport().code())
                .or_default()
                .push(Arc::new(leg));
        }

        debug!(
            %date,
            airports = airports.len(),
            flights = file.flights.len(),
            "converted snapshot"
        );

        Ok(Self {
            date,
            airports,
            departures,
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn airports(&self) -> &[Arc<Airport>] {
        &self.airports
    }

    pub fn airport(&self, code: &AirportCode) -> Option<&Arc<Airport>> {
        self.airports.iter().find(|a| a.code() == *code)
    }

    pub fn leg_count(&self) -> usize {
        self.departures.values().map(Vec::len).sum()
    }

    /// Build the flight graph for the snapshot's date.
    pub fn build_graph(&self) -> Result<FlightGraph, DataError> {
        GraphBuilder::new(self.date).build(&self.airports, self)
    }
}

impl DepartureSource for Snapshot {
    fn departures(&self, airport: &Airport, _date: NaiveDate) -> Vec<Arc<FlightLeg>> {
        self.departures
            .get(&airport.code())
            .cloned()
            .unwrap_or_default()
    }
}
