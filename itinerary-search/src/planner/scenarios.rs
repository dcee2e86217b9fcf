//! End-to-end tests of enumeration and filtering on small networks.

use std::collections::HashSet;

use crate::domain::{CabinClass, Itinerary};
use crate::graph::FlightGraph;
use crate::testing::{COACH, FIRST, LegSpec, airport, code, graph, leg};

use super::filter::ItineraryFilter;
use super::routes::RouteSearchEngine;

fn find(g: &FlightGraph, from: &str, to: &str, max_legs: usize) -> Vec<Itinerary> {
    RouteSearchEngine::new(g)
        .find_routes(&code(from), &code(to), max_legs)
        .unwrap()
}

fn numbers(itineraries: &[Itinerary]) -> HashSet<Vec<u32>> {
    itineraries.iter().map(|i| i.flight_numbers()).collect()
}

#[test]
fn direct_flight_only() {
    let bos = airport("BOS");
    let jfk = airport("JFK");
    let g = graph(
        &[bos.clone(), jfk.clone()],
        &[leg(LegSpec::new(1, &bos, &jfk, "08:00", "09:15"))],
    );

    let routes = find(&g, "BOS", "JFK", 3);

    assert_eq!(routes.len(), 1);
    assert_eq!(routes[0].leg_count(), 1);
    assert_eq!(routes[0].flight_numbers(), vec![1]);
}

#[test]
fn connection_departing_before_arrival_rejected() {
    let bos = airport("BOS");
    let jfk = airport("JFK");
    let atl = airport("ATL");
    let g = graph(
        &[bos.clone(), jfk.clone(), atl.clone()],
        &[
            leg(LegSpec::new(1, &bos, &jfk, "10:00", "11:15")),
            leg(LegSpec::new(2, &jfk, &atl, "09:00", "11:30")),
        ],
    );

    let raw = find(&g, "BOS", "ATL", 3);
    assert_eq!(numbers(&raw), HashSet::from([vec![1, 2]]));

    let accepted = ItineraryFilter::new(3).filter(raw);
    assert!(accepted.is_empty());
}

#[test]
fn full_coach_cabin_rejected_for_coach_only() {
    let bos = airport("BOS");
    let jfk = airport("JFK");
    let atl = airport("ATL");
    let g = graph(
        &[bos.clone(), jfk.clone(), atl.clone()],
        &[
            leg(LegSpec::new(1, &bos, &jfk, "08:00", "09:15").capacity(16, 50).occupied(COACH, 50)),
            leg(LegSpec::new(2, &jfk, &atl, "10:00", "12:30")),
            leg(LegSpec::new(3, &bos, &atl, "07:00", "09:40")),
        ],
    );

    let raw = find(&g, "BOS", "ATL", 3);
    assert_eq!(numbers(&raw), HashSet::from([vec![1, 2], vec![3]]));

    let coach = ItineraryFilter::new(3).with_seats(COACH).filter(raw.clone());
    assert_eq!(numbers(&coach), HashSet::from([vec![3]]));

    let first = ItineraryFilter::new(3).with_seats(FIRST).filter(raw);
    assert_eq!(numbers(&first), HashSet::from([vec![1, 2], vec![3]]));
}

#[test]
fn backtracking_route_rejected_only_when_directional() {
    let mia = airport("MIA");
    let atl = airport("ATL");
    let bos = airport("BOS");
    let sfo = airport("SFO");
    let g = graph(
        &[mia.clone(), atl.clone(), bos.clone(), sfo.clone()],
        &[
            leg(LegSpec::new(1, &mia, &atl, "06:00", "07:50")),
            leg(LegSpec::new(2, &atl, &bos, "08:40", "11:10")),
            leg(LegSpec::new(3, &bos, &sfo, "12:00", "18:30")),
        ],
    );

    let raw = find(&g, "MIA", "SFO", 3);
    assert_eq!(numbers(&raw), HashSet::from([vec![1, 2, 3]]));

    let plain = ItineraryFilter::new(3).filter(raw.clone());
    assert_eq!(plain.len(), 1);

    let directional = ItineraryFilter::new(3).with_direction(true).filter(raw);
    assert!(directional.is_empty());
}

#[test]
fn revisiting_intermediate_airport_never_emitted() {
    let bos = airport("BOS");
    let jfk = airport("JFK");
    let atl = airport("ATL");
    let sfo = airport("SFO");
    let g = graph(
        &[bos.clone(), jfk.clone(), atl.clone(), sfo.clone()],
        &[
            leg(LegSpec::new(1, &bos, &jfk, "06:00", "07:00")),
            leg(LegSpec::new(2, &jfk, &atl, "08:00", "10:00")),
            leg(LegSpec::new(3, &atl, &jfk, "11:00", "13:00")),
            leg(LegSpec::new(4, &jfk, &sfo, "14:00", "20:00")),
            leg(LegSpec::new(5, &atl, &sfo, "12:00", "17:00")),
        ],
    );

    let routes = find(&g, "BOS", "SFO", 4);

    assert_eq!(numbers(&routes), HashSet::from([vec![1, 4], vec![1, 2, 5]]));
}

#[test]
fn returning_to_origin_never_emitted() {
    let bos = airport("BOS");
    let jfk = airport("JFK");
    let sfo = airport("SFO");
    let g = graph(
        &[bos.clone(), jfk.clone(), sfo.clone()],
        &[
            leg(LegSpec::new(1, &bos, &jfk, "06:00", "07:00")),
            leg(LegSpec::new(2, &jfk, &bos, "08:00", "09:00")),
            leg(LegSpec::new(3, &bos, &sfo, "10:00", "16:00")),
        ],
    );

    let routes = find(&g, "BOS", "SFO", 3);

    assert_eq!(numbers(&routes), HashSet::from([vec![3]]));
}

#[test]
fn sibling_branches_keep_independent_history() {
    // Both branches out of BOS pass through JFK
    let bos = airport("BOS");
    let ord = airport("ORD");
    let jfk = airport("JFK");
    let sfo = airport("SFO");
    let g = graph(
        &[bos.clone(), ord.clone(), jfk.clone(), sfo.clone()],
        &[
            leg(LegSpec::new(1, &bos, &ord, "06:00", "08:00")),
            leg(LegSpec::new(2, &ord, &jfk, "09:00", "11:00")),
            leg(LegSpec::new(3, &bos, &jfk, "07:00", "08:15")),
            leg(LegSpec::new(4, &jfk, &sfo, "12:00", "18:00")),
        ],
    );

    let routes = find(&g, "BOS", "SFO", 3);

    assert_eq!(numbers(&routes), HashSet::from([vec![1, 2, 4], vec![3, 4]]));
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    const CODES: [&str; 5] = ["BOS", "JFK", "ATL", "ORD", "SFO"];

    fn hhmm(mins: u16) -> String {
        let mins = mins % (24 * 60);
        format!("{:02}:{:02}", mins / 60, mins % 60)
    }

    /// (from, to, departure minute, duration, coach seats occupied)
    type RawLeg = (usize, usize, u16, u16, i32);

    fn raw_legs() -> impl Strategy<Value = Vec<RawLeg>> {
        prop::collection::vec(
            (0usize..5, 0usize..5, 0u16..1380, 30u16..400, 40i32..=50),
            0..25,
        )
        .prop_map(|legs| legs.into_iter().filter(|(f, t, ..)| f != t).collect())
    }

    fn build(raw: &[RawLeg]) -> FlightGraph {
        let airports: Vec<_> = CODES.iter().map(|c| airport(c)).collect();
        let legs: Vec<_> = raw
            .iter()
            .enumerate()
            .map(|(i, &(from, to, dep, len, occupied))| {
                leg(LegSpec::new(
                    i as u32 + 1,
                    &airports[from],
                    &airports[to],
                    &hhmm(dep),
                    &hhmm(dep + len),
                )
                .occupied(COACH, occupied))
            })
            .collect();
        graph(&airports, &legs)
    }

    proptest! {
        #[test]
        fn routes_bounded_and_contiguous(
            raw in raw_legs(),
            from in 0usize..5,
            to in 0usize..5,
            max_legs in 1usize..5,
        ) {
            let g = build(&raw);
            let routes = find(&g, CODES[from], CODES[to], max_legs);

            for route in &routes {
                prop_assert!(route.leg_count() <= max_legs);
                prop_assert_eq!(route.origin().code(), code(CODES[from]));
                prop_assert_eq!(route.destination().code(), code(CODES[to]));
                for pair in route.legs().windows(2) {
                    prop_assert_eq!(
                        pair[0].arrival_airport().code(),
                        pair[1].departure_airport().code()
                    );
                }

                let stops = route.route();
                let distinct: HashSet<_> = stops.iter().collect();
                prop_assert_eq!(distinct.len(), stops.len());
            }
        }

        #[test]
        fn filtered_routes_are_feasible(
            raw in raw_legs(),
            from in 0usize..5,
            to in 0usize..5,
        ) {
            let g = build(&raw);
            let routes = find(&g, CODES[from], CODES[to], 3);
            let accepted = ItineraryFilter::new(3).with_seats(CabinClass::Coach).filter(routes);

            for route in &accepted {
                for pair in route.legs().windows(2) {
                    let arrival = pair[0].arrival_time();
                    let departure = pair[1].departure_time();
                    if arrival.date() == departure.date() {
                        prop_assert!(arrival.time() < departure.time());
                    }
                    prop_assert!(arrival.date() <= departure.date());
                }
                for l in route.legs() {
                    prop_assert!(l.available_seats(CabinClass::Coach) > 0);
                }
            }
        }

        #[test]
        fn search_is_repeatable(
            raw in raw_legs(),
            from in 0usize..5,
            to in 0usize..5,
        ) {
            let g = build(&raw);
            let filter = ItineraryFilter::new(3).with_seats(CabinClass::Coach);

            let first = filter.filter(find(&g, CODES[from], CODES[to], 3));
            let second = filter.filter(find(&g, CODES[from], CODES[to], 3));

            prop_assert_eq!(numbers(&first), numbers(&second));
        }
    }
}
