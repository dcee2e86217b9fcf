//! Snapshot file DTOs.
//!
//! These types map directly to the JSON produced by the airport and flight
//! parsers. Dates are `YYYY-MM-DD` and times are 24-hour `HH:MM` in UTC.

use serde::Deserialize;

/// A complete snapshot: every airport plus the day's departures.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotFile {
    /// Travel date the flights were fetched for.
    pub date: String,

    pub airports: Vec<AirportRecord>,

    /// Departing legs, in any order.
    #[serde(default)]
    pub flights: Vec<FlightLegRecord>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirportRecord {
    /// Three-letter code; any case.
    pub code: String,
    pub name: String,
    pub location: LocationRecord,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationRecord {
    pub lat: f64,
    pub lon: f64,

    /// Cached offset from UTC; absent when the time-zone lookup failed.
    #[serde(default)]
    pub utc_offset_seconds: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirplaneRecord {
    pub model: String,
    pub manufacturer: String,
    pub first_class_capacity: i32,
    pub coach_capacity: i32,
}

/// Where and when a leg departs or arrives.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointRecord {
    pub airport_code: String,
    pub date: String,
    pub time: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightLegRecord {
    pub flight_number: u32,
    pub airplane: AirplaneRecord,
    pub duration_minutes: i64,
    pub departure: EndpointRecord,
    pub arrival: EndpointRecord,
    pub first_class_price: f64,
    pub first_class_occupied: i32,
    pub coach_price: f64,
    pub coach_occupied: i32,
}
