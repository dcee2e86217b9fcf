//! Airport codes, locations and airports.

use std::fmt;
use std::hash::{Hash, Hasher};

/// Error returned when parsing an invalid airport code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid airport code: {reason}")]
pub struct InvalidAirportCode {
    reason: &'static str,
}

/// A valid 3-letter airport code.
///
/// Codes are compared case-insensitively, so the parsed value is stored
/// uppercased. Any `AirportCode` value is valid by construction.
///
/// # Examples
///
/// ```
/// use itinerary_search::domain::AirportCode;
///
/// let bos = AirportCode::parse("BOS").unwrap();
/// assert_eq!(bos.as_str(), "BOS");
///
/// // Lowercase input names the same airport
/// assert_eq!(AirportCode::parse("bos").unwrap(), bos);
///
/// // Wrong length is rejected
/// assert!(AirportCode::parse("BO").is_err());
/// assert!(AirportCode::parse("BOST").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AirportCode([u8; 3]);

impl AirportCode {
    /// Parse an airport code from a string.
    ///
    /// The input must be exactly 3 ASCII letters, in either case.
    pub fn parse(s: &str) -> Result<Self, InvalidAirportCode> {
        let bytes = s.as_bytes();

        if bytes.len() != 3 {
            return Err(InvalidAirportCode {
                reason: "must be exactly 3 characters",
            });
        }

        let mut code = [0u8; 3];
        for (slot, &b) in code.iter_mut().zip(bytes) {
            if !b.is_ascii_alphabetic() {
                return Err(InvalidAirportCode {
                    reason: "must be ASCII letters A-Z",
                });
            }
            *slot = b.to_ascii_uppercase();
        }

        Ok(AirportCode(code))
    }

    /// Returns the code as an uppercase string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII letters are ever stored.
        std::str::from_utf8(&self.0).unwrap_or("???")
    }
}

impl fmt::Debug for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AirportCode({})", self.as_str())
    }
}

impl fmt::Display for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Geographic position of an airport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    /// Degrees north of the equator (negative is south).
    pub latitude: f64,
    /// Degrees east of Greenwich (negative is west).
    pub longitude: f64,
    /// Cached offset of local time from UTC, in seconds.
    pub utc_offset_seconds: f64,
}

impl Location {
    /// Largest offset from UTC any time zone uses, in either direction.
    pub const MAX_UTC_OFFSET_SECONDS: f64 = 18.0 * 3600.0;

    pub fn new(latitude: f64, longitude: f64, utc_offset_seconds: f64) -> Self {
        Self {
            latitude,
            longitude,
            utc_offset_seconds,
        }
    }

    /// Whether the offset is finite and within ±18 hours.
    pub fn has_valid_utc_offset(&self) -> bool {
        self.utc_offset_seconds.is_finite()
            && self.utc_offset_seconds.abs() <= Self::MAX_UTC_OFFSET_SECONDS
    }

    /// The UTC offset as a duration, rounded to whole seconds.
    ///
    /// Only meaningful when [`has_valid_utc_offset`](Self::has_valid_utc_offset)
    /// holds; snapshot loading rejects airports where it does not.
    pub fn utc_offset(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.utc_offset_seconds.round() as i64)
    }
}

/// An airport.
///
/// Two airports are the same airport iff their codes match. Airports are
/// immutable and shared by `Arc` across legs and itineraries.
#[derive(Debug, Clone)]
pub struct Airport {
    code: AirportCode,
    name: String,
    location: Location,
}

impl Airport {
    pub fn new(code: AirportCode, name: impl Into<String>, location: Location) -> Self {
        Self {
            code,
            name: name.into(),
            location,
        }
    }

    pub fn code(&self) -> AirportCode {
        self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Returns true if both airports carry the same code.
    pub fn is_same_airport(&self, other: &Airport) -> bool {
        self.code == other.code
    }
}

impl PartialEq for Airport {
    fn eq(&self, other: &Self) -> bool {
        self.is_same_airport(other)
    }
}

impl Eq for Airport {}

impl Hash for Airport {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl fmt::Display for Airport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}
