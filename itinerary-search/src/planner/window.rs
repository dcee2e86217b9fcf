//! Departure and arrival time windows.
//!
//! Windows refine an accepted result list by clock time at either end of the
//! itinerary. Bounds are inclusive.

use chrono::NaiveTime;

use crate::domain::{FlightTime, Itinerary};

/// Which end of the itinerary a window constrains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Departure,
    Arrival,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    AtOrAfter,
    AtOrBefore,
}

/// Whether the window time is UTC or local to the airport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clock {
    Utc,
    Local,
}

/// A one-sided, inclusive bound on departure or arrival clock time.
///
/// Only the time of day is compared; every leg in a graph shares one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub endpoint: Endpoint,
    pub bound: Bound,
    pub clock: Clock,
    pub time: NaiveTime,
}

impl TimeWindow {
    pub fn departs_at_or_after(time: NaiveTime) -> Self {
        Self::utc(Endpoint::Departure, Bound::AtOrAfter, time)
    }

    pub fn departs_at_or_before(time: NaiveTime) -> Self {
        Self::utc(Endpoint::Departure, Bound::AtOrBefore, time)
    }

    pub fn arrives_at_or_after(time: NaiveTime) -> Self {
        Self::utc(Endpoint::Arrival, Bound::AtOrAfter, time)
    }

    pub fn arrives_at_or_before(time: NaiveTime) -> Self {
        Self::utc(Endpoint::Arrival, Bound::AtOrBefore, time)
    }

    fn utc(endpoint: Endpoint, bound: Bound, time: NaiveTime) -> Self {
        Self {
            endpoint,
            bound,
            clock: Clock::Utc,
            time,
        }
    }

    /// Interpret the window in the airport's local time instead of UTC.
    pub fn local(self) -> Self {
        Self {
            clock: Clock::Local,
            ..self
        }
    }

    fn observed(&self, itinerary: &Itinerary) -> FlightTime {
        match (self.endpoint, self.clock) {
            (Endpoint::Departure, Clock::Utc) => itinerary.departure_time(),
            (Endpoint::Departure, Clock::Local) => itinerary.local_departure_time(),
            (Endpoint::Arrival, Clock::Utc) => itinerary.arrival_time(),
            (Endpoint::Arrival, Clock::Local) => itinerary.local_arrival_time(),
        }
    }

    /// Returns true if the itinerary falls inside the window.
    pub fn admits(&self, itinerary: &Itinerary) -> bool {
        let observed = self.observed(itinerary).time();
        match self.bound {
            Bound::AtOrAfter => observed >= self.time,
            Bound::AtOrBefore => observed <= self.time,
        }
    }
}

/// Keep only itineraries admitted by every window, preserving order.
pub fn apply_windows(itineraries: Vec<Itinerary>, windows: &[TimeWindow]) -> Vec<Itinerary> {
    if windows.is_empty() {
        return itineraries;
    }
    itineraries
        .into_iter()
        .filter(|itinerary| windows.iter().all(|w| w.admits(itinerary)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{LegSpec, airport, leg};

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn bos_to_sfo(number: u32, dep: &str, arr: &str) -> Itinerary {
        let bos = airport("BOS");
        let sfo = airport("SFO");
        Itinerary::new(vec![leg(LegSpec::new(number, &bos, &sfo, dep, arr))]).unwrap()
    }

    #[test]
    fn bounds_are_inclusive() {
        let itinerary = bos_to_sfo(1, "14:00", "20:30");

        assert!(TimeWindow::departs_at_or_after(t(14, 0)).admits(&itinerary));
        assert!(TimeWindow::departs_at_or_before(t(14, 0)).admits(&itinerary));
        assert!(!TimeWindow::departs_at_or_after(t(14, 1)).admits(&itinerary));
        assert!(TimeWindow::arrives_at_or_before(t(20, 30)).admits(&itinerary));
        assert!(!TimeWindow::arrives_at_or_before(t(20, 29)).admits(&itinerary));
        assert!(TimeWindow::arrives_at_or_after(t(20, 30)).admits(&itinerary));
    }

    #[test]
    fn local_window_uses_airport_offset() {
        // BOS is UTC-4 in the fixtures, SFO UTC-7
        let itinerary = bos_to_sfo(1, "14:00", "20:30");

        assert!(TimeWindow::departs_at_or_before(t(10, 0)).local().admits(&itinerary));
        assert!(!TimeWindow::departs_at_or_before(t(10, 0)).admits(&itinerary));
        assert!(TimeWindow::arrives_at_or_before(t(13, 30)).local().admits(&itinerary));
    }

    #[test]
    fn apply_keeps_order_and_intersects() {
        let itineraries = vec![
            bos_to_sfo(1, "06:00", "12:00"),
            bos_to_sfo(2, "09:00", "15:00"),
            bos_to_sfo(3, "12:00", "18:00"),
            bos_to_sfo(4, "15:00", "21:00"),
        ];
        let windows = [
            TimeWindow::departs_at_or_after(t(9, 0)),
            TimeWindow::arrives_at_or_before(t(18, 0)),
        ];

        let kept = apply_windows(itineraries, &windows);

        let numbers: Vec<u32> = kept.iter().map(|i| i.flight_numbers()[0]).collect();
        assert_eq!(numbers, vec![2, 3]);
    }

    #[test]
    fn no_windows_keeps_everything() {
        let itineraries = vec![bos_to_sfo(1, "06:00", "12:00")];
        assert_eq!(apply_windows(itineraries, &[]).len(), 1);
    }
}
