//! Graph construction error types.

use chrono::NaiveDate;

use crate::domain::AirportCode;

/// Inconsistent input handed to the graph builder.
///
/// These indicate a fault in the layer that parsed the airport and flight
/// lists; the builder cannot repair them, so the search must be abandoned.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DataError {
    /// A leg lands at an airport missing from the airport list
    #[error("flight {flight_number} arrives at unknown airport {code}")]
    UnknownArrivalAirport { flight_number: u32, code: AirportCode },

    /// A leg was listed under an airport it does not depart from
    #[error("flight {flight_number} listed under {listed_under} but departs from {departs_from}")]
    DepartureMismatch {
        flight_number: u32,
        listed_under: AirportCode,
        departs_from: AirportCode,
    },

    /// The same flight number appears twice on one date
    #[error("duplicate flight number {0}")]
    DuplicateFlightNumber(u32),

    /// A leg departs on a different date from the graph
    #[error("flight {flight_number} departs on {found}, graph is for {expected}")]
    DateMismatch {
        flight_number: u32,
        expected: NaiveDate,
        found: NaiveDate,
    },
}
