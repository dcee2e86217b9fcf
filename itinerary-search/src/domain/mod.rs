//! Domain types for the itinerary search engine.
//!
//! This module contains the core domain model: airports, flight legs and
//! itineraries. All types enforce their invariants at construction time,
//! so code that receives these types can trust their validity.

mod airport;
mod error;
mod itinerary;
mod leg;
mod time;

pub use airport::{Airport, AirportCode, InvalidAirportCode, Location};
pub use error::DomainError;
pub use itinerary::Itinerary;
pub use leg::{Airplane, CabinClass, Fare, FlightLeg, LegEndpoint};
pub use time::{FlightTime, HoursMinutes, TimeError, elapsed};
