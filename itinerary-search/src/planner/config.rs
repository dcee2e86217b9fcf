//! Search configuration for the itinerary planner.

use crate::domain::CabinClass;

use super::rank::{SortKey, SortOrder};

/// Error reading configuration overrides.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// Configuration parameters for itinerary search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Maximum number of legs in an itinerary.
    /// Direct flights are always considered.
    pub max_legs: usize,

    /// Cabin that must have a free seat on every leg.
    /// `None` disables seat filtering.
    pub cabin: Option<CabinClass>,

    /// Reject itineraries whose connections backtrack geographically.
    pub require_direction: bool,

    /// Maximum number of itineraries to return.
    pub max_results: Option<usize>,

    /// Result ordering. `None` keeps enumeration order.
    pub sort: Option<(SortKey, SortOrder)>,
}

impl SearchConfig {
    pub const MAX_LEGS_VAR: &'static str = "ITINERARY_MAX_LEGS";
    pub const CABIN_VAR: &'static str = "ITINERARY_CABIN";
    pub const DIRECTIONAL_VAR: &'static str = "ITINERARY_DIRECTIONAL";
    pub const MAX_RESULTS_VAR: &'static str = "ITINERARY_MAX_RESULTS";
    pub const SORT_VAR: &'static str = "ITINERARY_SORT";

    /// Create a new configuration with the given parameters.
    pub fn new(
        max_legs: usize,
        cabin: Option<CabinClass>,
        require_direction: bool,
        max_results: Option<usize>,
        sort: Option<(SortKey, SortOrder)>,
    ) -> Self {
        Self {
            max_legs,
            cabin,
            require_direction,
            max_results,
            sort,
        }
    }

    /// Defaults overridden by `ITINERARY_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    ///
    /// - `ITINERARY_MAX_LEGS`: positive integer
    /// - `ITINERARY_CABIN`: `first`, `coach` or `any`
    /// - `ITINERARY_DIRECTIONAL`: `true`/`false`, `yes`/`no`, `1`/`0`
    /// - `ITINERARY_MAX_RESULTS`: positive integer
    /// - `ITINERARY_SORT`: a sort key, optionally suffixed `:desc`
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(Self::MAX_LEGS_VAR) {
            config.max_legs = parse_positive(Self::MAX_LEGS_VAR, &value)?;
        }

        if let Some(value) = lookup(Self::CABIN_VAR) {
            config.cabin = match value.trim().to_ascii_lowercase().as_str() {
                "first" | "firstclass" | "first_class" => Some(CabinClass::FirstClass),
                "coach" | "economy" => Some(CabinClass::Coach),
                "any" | "none" => None,
                _ => return Err(invalid(Self::CABIN_VAR, &value)),
            };
        }

        if let Some(value) = lookup(Self::DIRECTIONAL_VAR) {
            config.require_direction = match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => return Err(invalid(Self::DIRECTIONAL_VAR, &value)),
            };
        }

        if let Some(value) = lookup(Self::MAX_RESULTS_VAR) {
            config.max_results = Some(parse_positive(Self::MAX_RESULTS_VAR, &value)?);
        }

        if let Some(value) = lookup(Self::SORT_VAR) {
            config.sort = Some(parse_sort(&value).ok_or_else(|| invalid(Self::SORT_VAR, &value))?);
        }

        Ok(config)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_legs: 3,
            cabin: Some(CabinClass::Coach),
            require_direction: false,
            max_results: None,
            sort: None,
        }
    }
}

fn invalid(key: &'static str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    }
}

fn parse_positive(key: &'static str, value: &str) -> Result<usize, ConfigError> {
    match value.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(invalid(key, value)),
    }
}

fn parse_sort(value: &str) -> Option<(SortKey, SortOrder)> {
    let value = value.trim().to_ascii_lowercase();
    let (key, order) = match value.split_once(':') {
        Some((key, "asc")) => (key, SortOrder::Ascending),
        Some((key, "desc")) => (key, SortOrder::Descending),
        Some(_) => return None,
        None => (value.as_str(), SortOrder::Ascending),
    };
    let key = match key {
        "departure" => SortKey::Departure,
        "arrival" => SortKey::Arrival,
        "duration" => SortKey::Duration,
        "layover" => SortKey::Layover,
        "connections" => SortKey::Connections,
        "price" | "coach" => SortKey::Price(CabinClass::Coach),
        "first" => SortKey::Price(CabinClass::FirstClass),
        _ => return None,
    };
    Some((key, order))
}
