//! Conversion from snapshot DTOs to domain types.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::{
    Airplane, Airport, AirportCode, Fare, FlightLeg, FlightTime, LegEndpoint, Location,
};
use crate::graph::DataError;

use super::types::{AirplaneRecord, AirportRecord, EndpointRecord, FlightLegRecord};

/// Error loading or converting a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    /// Failed to parse an airport code
    #[error("invalid airport code: {0}")]
    InvalidAirportCode(String),

    /// Failed to parse a date string
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// Failed to parse a time string
    #[error("invalid time: {0}")]
    InvalidTime(String),

    /// A leg departs from an airport missing from the airport list
    #[error("flight {flight_number} departs from unknown airport {code}")]
    UnknownDepartureAirport { flight_number: u32, code: AirportCode },

    /// An airport's UTC offset is not a real time zone offset
    #[error("airport {code} has invalid UTC offset {seconds} s")]
    InvalidUtcOffset { code: AirportCode, seconds: f64 },

    /// A leg's scheduled duration is negative or implausibly long
    #[error("flight {flight_number} has invalid duration {minutes} min")]
    InvalidDuration { flight_number: u32, minutes: i64 },

    /// Two legs describe the same airplane model differently
    #[error("airplane model {model:?} listed with conflicting details")]
    ConflictingAirplane { model: String },

    /// Records are individually valid but inconsistent
    #[error(transparent)]
    Data(#[from] DataError),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub fn parse_date(s: &str) -> Result<NaiveDate, ConversionError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| ConversionError::InvalidDate(s.to_string()))
}

pub fn parse_code(s: &str) -> Result<AirportCode, ConversionError> {
    AirportCode::parse(s.trim()).map_err(|_| ConversionError::InvalidAirportCode(s.to_string()))
}

pub fn convert_airport(record: &AirportRecord) -> Result<Airport, ConversionError> {
    let code = parse_code(&record.code)?;
    let location = Location::new(
        record.location.lat,
        record.location.lon,
        record.location.utc_offset_seconds,
    );
    if !location.has_valid_utc_offset() {
        return Err(ConversionError::InvalidUtcOffset {
            code,
            seconds: location.utc_offset_seconds,
        });
    }
    Ok(Airport::new(code, record.name.clone(), location))
}

/// Airports indexed by code, for resolving leg endpoints.
pub type AirportIndex = HashMap<AirportCode, Arc<Airport>>;

fn convert_endpoint(
    record: &EndpointRecord,
    airports: &AirportIndex,
) -> Result<(AirportCode, Option<Arc<Airport>>, FlightTime), ConversionError> {
    let code = parse_code(&record.airport_code)?;
    let date = parse_date(&record.date)?;
    let time = FlightTime::parse_hhmm(record.time.trim(), date)
        .map_err(|_| ConversionError::InvalidTime(record.time.clone()))?;
    Ok((code, airports.get(&code).cloned(), time))
}

/// Airplanes shared between legs flying the same model.
#[derive(Debug, Default)]
pub struct AirplaneCache {
    by_model: HashMap<String, Arc<Airplane>>,
}

impl AirplaneCache {
    /// The shared airplane for `record`'s model, or an error when an
    /// earlier record gave the same model other details.
    pub fn get_or_insert(
        &mut self,
        record: &AirplaneRecord,
    ) -> Result<Arc<Airplane>, ConversionError> {
        let airplane = Airplane::new(
            record.model.clone(),
            record.manufacturer.clone(),
            record.first_class_capacity,
            record.coach_capacity,
        );
        match self.by_model.get(&record.model) {
            Some(known) if **known == airplane => Ok(Arc::clone(known)),
            Some(_) => Err(ConversionError::ConflictingAirplane {
                model: record.model.clone(),
            }),
            None => {
                let airplane = Arc::new(airplane);
                self.by_model.insert(record.model.clone(), Arc::clone(&airplane));
                Ok(airplane)
            }
        }
    }
}

/// Longest scheduled leg accepted, in minutes.
const MAX_DURATION_MINUTES: i64 = 48 * 60;

/// Convert one leg record, resolving its airports against `airports`.
pub fn convert_leg(
    record: &FlightLegRecord,
    airports: &AirportIndex,
    airplanes: &mut AirplaneCache,
) -> Result<FlightLeg, ConversionError> {
    let flight_number = record.flight_number;
    if !(0..=MAX_DURATION_MINUTES).contains(&record.duration_minutes) {
        return Err(ConversionError::InvalidDuration {
            flight_number,
            minutes: record.duration_minutes,
        });
    }

    let (departure_code, departure_airport, departure_time) =
        convert_endpoint(&record.departure, airports)?;
    let departure_airport = departure_airport.ok_or(ConversionError::UnknownDepartureAirport {
        flight_number,
        code: departure_code,
    })?;

    let (arrival_code, arrival_airport, arrival_time) =
        convert_endpoint(&record.arrival, airports)?;
    let arrival_airport = arrival_airport.ok_or(DataError::UnknownArrivalAirport {
        flight_number,
        code: arrival_code,
    })?;

    Ok(FlightLeg::new(
        flight_number,
        airplanes.get_or_insert(&record.airplane)?,
        record.duration_minutes,
        LegEndpoint::new(departure_airport, departure_time),
        LegEndpoint::new(arrival_airport, arrival_time),
        Fare::new(record.first_class_price, record.first_class_occupied),
        Fare::new(record.coach_price, record.coach_occupied),
    ))
}
