mod common;
use common::SAMPLE_TRIP;
use eldlog::core::timeline::{validate_day, validate_trip};
use eldlog::errors::AppError;
use eldlog::models::{ClockTime, DutyStatus, RawCheckpoint, RawDayLog, TripLogs};

fn raw(time: &str, status: &str) -> RawCheckpoint {
    RawCheckpoint {
        time: time.to_string(),
        status: status.to_string(),
        ..Default::default()
    }
}

fn day(points: Vec<RawCheckpoint>) -> RawDayLog {
    RawDayLog {
        day: 3,
        graph_points: points,
        ..Default::default()
    }
}

#[test]
fn test_parse_sample_trip() {
    let trip = TripLogs::from_json(SAMPLE_TRIP).expect("parse");
    assert_eq!(trip.trip_label().as_deref(), Some("a1b2c3"));
    assert_eq!(trip.logs.len(), 2);
    // `day_number` is accepted as an alias of `day`
    assert_eq!(trip.logs[1].day, 2);
    assert_eq!(trip.logs[0].summary.driving_hours, 10.75);
}

#[test]
fn test_parse_bare_array_and_numeric_trip_id() {
    let bare = TripLogs::from_json(r#"[{"day": 1, "graph_points": []}]"#).expect("bare");
    assert_eq!(bare.trip_label(), None);
    assert_eq!(bare.logs[0].summary.rest_hours, 0.0);

    let numeric = TripLogs::from_json(r#"{"trip_id": 42, "logs": []}"#).expect("numeric");
    assert_eq!(numeric.trip_label().as_deref(), Some("42"));
}

#[test]
fn test_valid_day() {
    let trip = TripLogs::from_json(SAMPLE_TRIP).expect("parse");
    let days = validate_trip(&trip).expect("valid");

    assert_eq!(days.len(), 2);
    let first = &days[0];
    assert_eq!(first.graph_points.len(), 5);
    assert_eq!(first.graph_points[1].status, DutyStatus::Driving);
    assert_eq!(first.graph_points[1].time, ClockTime::new(7, 0).expect("time"));
    assert_eq!(first.graph_points[2].annotation.as_deref(), Some("fuel stop"));
}

#[test]
fn test_malformed_time() {
    for bad in ["ab:cd", "25:00", "24:00", "09:60", "0930", ""] {
        let err = validate_day(&day(vec![raw("08:00", "driving"), raw(bad, "rest")]))
            .expect_err(bad);
        match err {
            AppError::MalformedTime { day, index, value } => {
                assert_eq!(day, 3);
                assert_eq!(index, 1);
                assert_eq!(value, bad);
            }
            other => panic!("unexpected error for {bad:?}: {other}"),
        }
    }
}

#[test]
fn test_unknown_status() {
    let err = validate_day(&day(vec![raw("08:00", "Driving")])).expect_err("case matters");
    assert!(matches!(err, AppError::UnknownStatus { index: 0, .. }));
    assert!(err.is_validation());
    assert!(err.to_string().contains("Day 3, checkpoint #0"));
}

#[test]
fn test_ordering_violation() {
    let err = validate_day(&day(vec![
        raw("08:00", "driving"),
        raw("10:00", "on-duty"),
        raw("09:00", "off-duty"),
    ]))
    .expect_err("out of order");

    match &err {
        AppError::OrderingViolation {
            index,
            previous,
            current,
            ..
        } => {
            assert_eq!(*index, 2);
            assert_eq!(previous, "10:00");
            assert_eq!(current, "09:00");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("Day 3"));
}

#[test]
fn test_equal_times_are_allowed() {
    let log = validate_day(&day(vec![raw("08:00", "driving"), raw("08:00", "break")]))
        .expect("non-decreasing");
    assert_eq!(log.graph_points.len(), 2);
}

#[test]
fn test_trip_fails_on_first_bad_day() {
    let mut trip = TripLogs::from_json(SAMPLE_TRIP).expect("parse");
    trip.logs[1].graph_points[0].status = "napping".into();

    let err = validate_trip(&trip).expect_err("bad day 2");
    assert!(matches!(err, AppError::UnknownStatus { day: 2, .. }));
}

#[test]
fn test_clock_time_helpers() {
    let t = ClockTime::parse("09:45").expect("parse");
    assert_eq!(t.as_fractional_hours(), 9.75);
    assert_eq!(t.to_string(), "09:45");
    assert!(ClockTime::new(24, 0).is_err());
    assert_eq!(ClockTime::END_OF_DAY.as_fractional_hours(), 24.0);
    assert!(ClockTime::new(0, 0).expect("midnight") < t && t < ClockTime::END_OF_DAY);
}

#[test]
fn test_single_digit_fields_are_accepted() {
    let short_hour = ClockTime::parse("9:30").expect("single-digit hour");
    assert_eq!((short_hour.hour(), short_hour.minute()), (9, 30));

    let short_minute = ClockTime::parse("09:5").expect("single-digit minute");
    assert_eq!(short_minute.to_string(), "09:05");
}

#[test]
fn test_status_wire_names() {
    for s in DutyStatus::ALL {
        assert_eq!(DutyStatus::from_wire(s.as_wire()), Some(s));
        let json = serde_json::to_string(&s).expect("ser");
        assert_eq!(json, format!("\"{}\"", s.as_wire()));
    }
    assert_eq!(DutyStatus::default(), DutyStatus::OffDuty);
    assert_eq!(DutyStatus::OnDuty.label(), "On-Duty");
    assert_eq!(DutyStatus::Rest.row(), 6);
}
