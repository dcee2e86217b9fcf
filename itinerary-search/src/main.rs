use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use itinerary_search::domain::{AirportCode, CabinClass, HoursMinutes, Itinerary};
use itinerary_search::planner::{Planner, SearchConfig, SearchRequest};
use itinerary_search::snapshot::Snapshot;

const USAGE: &str = "usage: itinerary-search <snapshot.json> <ORIGIN> <DESTINATION>

environment:
  ITINERARY_MAX_LEGS      maximum legs per itinerary (default 3)
  ITINERARY_CABIN         first | coach | any (default coach)
  ITINERARY_DIRECTIONAL   reject backtracking connections (default false)
  ITINERARY_MAX_RESULTS   limit the number of itineraries printed
  ITINERARY_SORT          departure | arrival | duration | layover | connections | price | first, optionally :desc
  RUST_LOG                log filter (default info)";

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [path, origin, destination] = args.as_slice() else {
        eprintln!("{USAGE}");
        return ExitCode::from(2);
    };

    let (origin, destination) = match (AirportCode::parse(origin), AirportCode::parse(destination))
    {
        (Ok(o), Ok(d)) => (o, d),
        (Err(e), _) | (_, Err(e)) => {
            eprintln!("{e}");
            return ExitCode::from(2);
        }
    };

    let config = match SearchConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(2);
        }
    };

    let snapshot = match Snapshot::load(path) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            error!(path = %path, "failed to load snapshot: {e}");
            return ExitCode::FAILURE;
        }
    };

    let graph = match snapshot.build_graph() {
        Ok(graph) => graph,
        Err(e) => {
            error!("inconsistent snapshot: {e}");
            return ExitCode::FAILURE;
        }
    };
    info!(
        date = %graph.date(),
        airports = graph.node_count(),
        flights = graph.edge_count(),
        "loaded flight graph"
    );

    let request = SearchRequest::new(origin, destination);
    let result = match Planner::new(&graph, &config).search(&request) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    if result.is_empty() {
        println!("No itineraries from {origin} to {destination} on {}.", graph.date());
        return ExitCode::SUCCESS;
    }

    for (i, itinerary) in result.itineraries.iter().enumerate() {
        print_itinerary(i + 1, itinerary);
    }

    ExitCode::SUCCESS
}

fn print_itinerary(n: usize, itinerary: &Itinerary) {
    let connections = match itinerary.connection_count() {
        0 => "nonstop".to_string(),
        1 => "1 connection".to_string(),
        c => format!("{c} connections"),
    };
    println!(
        "{n}. {} -> {}  {} - {}  {}  {}  coach ${:.2}  first ${:.2}",
        itinerary.origin().code(),
        itinerary.destination().code(),
        itinerary.departure_time(),
        itinerary.arrival_time(),
        HoursMinutes(itinerary.total_duration()),
        connections,
        itinerary.total_price(CabinClass::Coach),
        itinerary.total_price(CabinClass::FirstClass),
    );

    for (i, leg) in itinerary.legs().iter().enumerate() {
        println!(
            "     {leg}  (local {} - {})  {} {}",
            leg.local_departure_time(),
            leg.local_arrival_time(),
            leg.airplane().manufacturer,
            leg.airplane().model,
        );
        if let Some(layover) = itinerary.layover(i) {
            println!(
                "       layover {} at {}",
                HoursMinutes(layover),
                leg.arrival_airport()
            );
        }
    }
}
