//! End-to-end tests for journey search over small schedules.

use super::*;
use crate::domain::{ScheduleTime, StopId};
use crate::geo::{Coordinate, haversine_km};
use crate::schedule::{ScheduleBuilder, ScheduleIndex};

fn plan(index: &ScheduleIndex, from: &str, to: &str, time: &str) -> Vec<crate::domain::Journey> {
    let config = PlannerConfig::default();
    Planner::new(index, &config)
        .plan_journey(from, to, time)
        .unwrap()
}

/// A and B on route 670, far enough apart that only interchanges qualify
/// as transfer points.
fn route_670() -> ScheduleBuilder {
    ScheduleBuilder::new()
        .stop("A", "Alpha", 40.0, -3.0)
        .stop("B", "Beta", 40.6, -3.0)
        .route("670", "670")
        .trip("T1", "670", &[("A", "08:10", "08:10"), ("B", "08:25", "08:25")])
}

/// A to interchange C on route 1, C to B on route 2.
fn via_interchange(second_departure: &str, second_arrival: &str) -> ScheduleIndex {
    ScheduleBuilder::new()
        .stop("A", "Alpha", 40.0, -3.0)
        .stop("B", "Beta", 40.6, -3.0)
        .interchange("C", "Central", 40.3, -3.0)
        .route("1", "1")
        .route("2", "2")
        .trip("T1", "1", &[("A", "08:30", "08:30"), ("C", "09:00", "09:00")])
        .trip("T2", "2", &[("C", second_departure, second_departure), ("B", second_arrival, second_arrival)])
        .index()
}

#[test]
fn direct_route_found() {
    let index = route_670().index();

    let journeys = plan(&index, "A", "B", "08:00");

    assert_eq!(journeys.len(), 1);
    assert_eq!(journeys[0].transfer_count(), 0);
    assert_eq!(journeys[0].total_duration_mins(), 15);
    assert_eq!(journeys[0].legs()[0].route().id.as_str(), "670");
}

#[test]
fn nothing_after_last_departure() {
    let index = route_670().index();

    assert!(plan(&index, "A", "B", "08:30").is_empty());
}

#[test]
fn transfer_at_interchange() {
    let index = via_interchange("09:15", "09:30");

    let journeys = plan(&index, "A", "B", "08:00");

    assert_eq!(journeys.len(), 1);
    let journey = &journeys[0];
    assert_eq!(journey.transfer_count(), 1);
    assert_eq!(journey.transfer_stop().unwrap().id.as_str(), "C");
    // 30 + 15 riding, plus the walking allowance
    assert_eq!(journey.total_duration_mins(), 30 + 15 + 10);
    assert_eq!(journey.walking_mins(), 10);
}

#[test]
fn short_connection_excluded() {
    let index = via_interchange("09:05", "09:20");

    assert!(plan(&index, "A", "B", "08:00").is_empty());
}

#[test]
fn same_point_has_zero_distance() {
    let point = Coordinate::new(40.0, -3.0);
    assert_eq!(haversine_km(point, point), 0.0);
}

#[test]
fn top_five_across_direct_and_transfer() {
    let index = ScheduleBuilder::new()
        .stop("A", "Alpha", 40.0, -3.0)
        .stop("B", "Beta", 40.6, -3.0)
        .interchange("C", "Central", 40.3, -3.0)
        .interchange("D", "Depot", 40.3, -2.9)
        .route("D1", "D1")
        .route("D2", "D2")
        .route("D3", "D3")
        .route("X1", "X1")
        .route("X2", "X2")
        .route("X3", "X3")
        .route("X4", "X4")
        .trip("D1-T", "D1", &[("A", "08:00", "08:00"), ("B", "09:40", "09:40")])
        .trip("D2-T", "D2", &[("A", "08:05", "08:05"), ("B", "08:50", "08:50")])
        .trip("D3-T", "D3", &[("A", "08:10", "08:10"), ("B", "09:10", "09:10")])
        .trip("X1-T", "X1", &[("A", "08:00", "08:00"), ("C", "08:20", "08:20")])
        .trip("X2-T", "X2", &[("C", "08:40", "08:40"), ("B", "09:00", "09:00")])
        .trip("X3-T", "X3", &[("A", "08:15", "08:15"), ("D", "08:45", "08:45")])
        .trip("X4-T", "X4", &[("D", "09:00", "09:00"), ("B", "09:30", "09:30")])
        .index();

    let journeys = plan(&index, "A", "B", "07:30");

    assert_eq!(journeys.len(), 5);
    let durations: Vec<u32> = journeys.iter().map(|j| j.total_duration_mins()).collect();
    // Direct: 100, 45, 60. Via C: 20 + 20 + 10. Via D: 30 + 30 + 10.
    assert_eq!(durations, vec![45, 50, 60, 70, 100]);
    assert_eq!(journeys.iter().filter(|j| j.is_direct()).count(), 3);
}

#[test]
fn same_stop_returns_nothing() {
    let index = route_670().index();

    assert!(plan(&index, "A", "A", "00:00").is_empty());
    assert!(plan(&index, "B", "B", "23:59").is_empty());
}

#[test]
fn unknown_stop_is_an_error() {
    let index = route_670().index();
    let config = PlannerConfig::default();

    let err = Planner::new(&index, &config)
        .plan_journey("A", "ZZZ", "08:00")
        .unwrap_err();
    assert_eq!(err, PlanError::UnknownStop(StopId::from("ZZZ")));
}

#[test]
fn malformed_stop_time_does_not_fail_search() {
    let index = route_670()
        .trip("BROKEN", "670", &[("A", "later", "later"), ("B", "09:00", "09:00")])
        .index();

    let journeys = plan(&index, "A", "B", "08:00");
    assert_eq!(journeys.len(), 1);
    assert_eq!(journeys[0].legs()[0].trip().id.as_str(), "T1");
    assert!(index.skipped_records() >= 1);
}

#[test]
fn direct_preferred_when_durations_tie() {
    // Direct 55 min; transfer 20 + 25 + 10 = 55 min
    let index = ScheduleBuilder::new()
        .stop("A", "Alpha", 40.0, -3.0)
        .stop("B", "Beta", 40.6, -3.0)
        .interchange("C", "Central", 40.3, -3.0)
        .route("1", "1")
        .route("2", "2")
        .route("9", "9")
        .trip("T1", "1", &[("A", "08:00", "08:00"), ("C", "08:20", "08:20")])
        .trip("T2", "2", &[("C", "08:35", "08:35"), ("B", "09:00", "09:00")])
        .trip("T9", "9", &[("A", "08:00", "08:00"), ("B", "08:55", "08:55")])
        .index();

    let journeys = plan(&index, "A", "B", "08:00");

    assert_eq!(journeys.len(), 2);
    assert_eq!(journeys[0].total_duration_mins(), 55);
    assert_eq!(journeys[1].total_duration_mins(), 55);
    assert!(journeys[0].is_direct());
}

#[test]
fn search_reports_candidates() {
    let index = via_interchange("09:15", "09:30");
    let config = PlannerConfig::default();
    let request = JourneyRequest::parse("A", "B", "08:00").unwrap();

    let result = Planner::new(&index, &config).search(&request).unwrap();

    assert_eq!(result.candidates_explored, 1);
    assert_eq!(result.journeys.len(), 1);
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    const STOPS: usize = 6;

    /// One generated trip: route, first departure, stops visited in order,
    /// and minutes between consecutive calls.
    #[derive(Debug, Clone)]
    struct GeneratedTrip {
        route: usize,
        start_mins: u32,
        stops: Vec<usize>,
        hops: Vec<u32>,
    }

    fn stop_id(i: usize) -> String {
        format!("S{i}")
    }

    fn hhmm(minutes: u32) -> String {
        format!("{:02}:{:02}", minutes / 60, minutes % 60)
    }

    fn trip_strategy() -> impl Strategy<Value = GeneratedTrip> {
        (
            0usize..4,
            300u32..1200,
            prop::sample::subsequence((0..STOPS).collect::<Vec<_>>(), 2..=STOPS),
            any::<bool>(),
            prop::collection::vec(1u32..40, STOPS),
        )
            .prop_map(|(route, start_mins, mut stops, reverse, hops)| {
                if reverse {
                    stops.reverse();
                }
                GeneratedTrip {
                    route,
                    start_mins,
                    stops,
                    hops,
                }
            })
    }

    /// Stops a few km apart along a line, with S2 and S4 as interchanges.
    fn build_index(trips: &[GeneratedTrip]) -> ScheduleIndex {
        let mut builder = ScheduleBuilder::new();
        for i in 0..STOPS {
            let lat = 40.0 + i as f64 * 0.02;
            let id = stop_id(i);
            builder = if i == 2 || i == 4 {
                builder.interchange(&id, &id, lat, -3.0)
            } else {
                builder.stop(&id, &id, lat, -3.0)
            };
        }
        for route in 0..4 {
            let id = format!("R{route}");
            builder = builder.route(&id, &id);
        }

        for (n, trip) in trips.iter().enumerate() {
            let mut clock = trip.start_mins;
            let calls: Vec<(String, String)> = trip
                .stops
                .iter()
                .zip(&trip.hops)
                .map(|(&stop, &hop)| {
                    let call = (stop_id(stop), hhmm(clock));
                    clock += hop;
                    call
                })
                .collect();
            let borrowed: Vec<(&str, &str, &str)> = calls
                .iter()
                .map(|(stop, time)| (stop.as_str(), time.as_str(), time.as_str()))
                .collect();
            builder = builder.trip(&format!("T{n}"), &format!("R{}", trip.route), &borrowed);
        }

        builder.index()
    }

    fn query_strategy() -> impl Strategy<Value = (Vec<GeneratedTrip>, usize, usize, u32)> {
        (
            prop::collection::vec(trip_strategy(), 1..12),
            0..STOPS,
            0..STOPS,
            240u32..1300,
        )
    }

    proptest! {
        #[test]
        fn results_are_well_formed((trips, from, to, at) in query_strategy()) {
            let index = build_index(&trips);
            let journeys = plan(&index, &stop_id(from), &stop_id(to), &hhmm(at));
            let config = PlannerConfig::default();

            prop_assert!(journeys.len() <= config.max_results);

            for journey in &journeys {
                prop_assert!(!journey.legs().is_empty());
                prop_assert_eq!(journey.transfer_count(), journey.legs().len() - 1);
                prop_assert!(journey.departure_time() >= ScheduleTime::from_minutes(at));
                prop_assert_eq!(&journey.origin().id, &StopId::from(stop_id(from).as_str()));
                prop_assert_eq!(&journey.destination().id, &StopId::from(stop_id(to).as_str()));

                for leg in journey.legs() {
                    prop_assert!(leg.board().sequence < leg.alight().sequence);
                }

                if let [first, second] = journey.legs() {
                    prop_assert_eq!(&first.destination().id, &second.origin().id);
                    let gap = first.arrival_time().minutes_until(second.departure_time());
                    prop_assert!((10..=60).contains(&gap), "connection gap {} out of window", gap);
                }
            }
        }

        #[test]
        fn results_sorted_by_duration((trips, from, to, at) in query_strategy()) {
            let index = build_index(&trips);
            let journeys = plan(&index, &stop_id(from), &stop_id(to), &hhmm(at));

            for window in journeys.windows(2) {
                prop_assert!(
                    window[0].total_duration_mins() <= window[1].total_duration_mins(),
                    "Not sorted: {} before {}",
                    window[0].total_duration_mins(),
                    window[1].total_duration_mins()
                );
            }
        }

        #[test]
        fn transfer_results_capped((trips, from, to, at) in query_strategy()) {
            let index = build_index(&trips);
            let journeys = plan(&index, &stop_id(from), &stop_id(to), &hhmm(at));

            let transfers = journeys.iter().filter(|j| !j.is_direct()).count();
            prop_assert!(transfers <= PlannerConfig::default().max_transfer_results);
        }

        #[test]
        fn one_direct_leg_per_route((trips, from, to, at) in query_strategy()) {
            let index = build_index(&trips);
            let journeys = plan(&index, &stop_id(from), &stop_id(to), &hhmm(at));

            let mut routes: Vec<&str> = journeys
                .iter()
                .filter(|j| j.is_direct())
                .map(|j| j.legs()[0].route().id.as_str())
                .collect();
            let total = routes.len();
            routes.sort_unstable();
            routes.dedup();
            prop_assert_eq!(routes.len(), total);
        }

        #[test]
        fn same_stop_always_empty(trips in prop::collection::vec(trip_strategy(), 1..12), stop in 0..STOPS, at in 0u32..1440) {
            let index = build_index(&trips);
            prop_assert!(plan(&index, &stop_id(stop), &stop_id(stop), &hhmm(at)).is_empty());
        }
    }
}
