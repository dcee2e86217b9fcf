//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. They are
//! distinct from graph construction and search errors.

use super::AirportCode;

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DomainError {
    /// Itinerary has no legs
    #[error("itinerary must have at least one leg")]
    EmptyItinerary,

    /// Consecutive legs don't share an airport
    #[error("leg arriving at {0} does not connect to leg departing {1}")]
    LegsNotContiguous(AirportCode, AirportCode),
}
