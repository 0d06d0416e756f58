mod common;
use common::{SAMPLE_TRIP, cp};
use eldlog::core::timeline::{SheetOptions, build_day_sheet, build_trip_sheets};
use eldlog::models::{DayLog, DutyStatus, LogSummary, TripLogs};

fn fuel_stop_log() -> DayLog {
    DayLog {
        day: 1,
        graph_points: vec![
            cp("07:00", DutyStatus::Driving),
            cp("09:30", DutyStatus::Break).with_annotation("fuel stop"),
            cp("09:45", DutyStatus::Driving),
            cp("18:00", DutyStatus::OffDuty),
        ],
        summary: LogSummary {
            driving_hours: 10.75,
            on_duty_hours: 11.0,
            rest_hours: 13.0,
        },
    }
}

#[test]
fn test_one_row_per_status_in_sheet_order() {
    let sheet = build_day_sheet(&fuel_stop_log(), SheetOptions::default());
    let statuses: Vec<DutyStatus> = sheet.rows.iter().map(|r| r.status).collect();
    assert_eq!(statuses, DutyStatus::ALL.to_vec());
    assert_eq!(sheet.day, 1);
    assert_eq!(sheet.summary.driving_hours, 10.75);
}

#[test]
fn test_rows_combine_grid_and_transitions() {
    let sheet = build_day_sheet(&fuel_stop_log(), SheetOptions::default());

    let driving = sheet.row(DutyStatus::Driving).expect("driving row");
    assert_eq!(driving.active_count(), 11);
    assert_eq!(driving.transitions.len(), 2);
    // 7,8,9 for the first interval and 9..=17 for the second
    assert_eq!(driving.segments.len(), 3 + 9);
    assert_eq!(driving.segments_in(9).count(), 2);

    let brk = sheet.row(DutyStatus::Break).expect("break row");
    assert_eq!(brk.active_count(), 0);
    assert_eq!(brk.segments.len(), 1);
    let seg = &brk.segments[0];
    assert_eq!(seg.interval, 0);
    assert_eq!(seg.overlap.hour, 9);
    assert!((seg.overlap.width_fraction - 0.25).abs() < 1e-9);
    assert!(seg.overlap.show_annotation);

    let off = sheet.row(DutyStatus::OffDuty).expect("off-duty row");
    assert_eq!(off.active_count(), 24 - 11);
    assert!(off.transitions.is_empty());
}

#[test]
fn test_close_day_option() {
    let open = build_day_sheet(&fuel_stop_log(), SheetOptions::default());
    let closed = build_day_sheet(&fuel_stop_log(), SheetOptions { close_day: true });

    // the trailing off-duty status now owns 18..24 explicitly, which it
    // already did by default; it also gains a transition interval.
    assert_eq!(open.grid, closed.grid);
    let off = closed.row(DutyStatus::OffDuty).expect("row");
    assert_eq!(off.transitions.len(), 1);
    assert_eq!(off.transitions[0].start_hour, 18.0);
    assert_eq!(off.transitions[0].end_hour, 24.0);
}

#[test]
fn test_close_day_changes_grid_for_non_default_status() {
    let log = DayLog {
        day: 4,
        graph_points: vec![cp("00:00", DutyStatus::OffDuty), cp("21:00", DutyStatus::Sleeper)],
        summary: LogSummary::default(),
    };
    let open = build_day_sheet(&log, SheetOptions::default());
    let closed = build_day_sheet(&log, SheetOptions { close_day: true });

    assert_eq!(open.grid.hours_in(DutyStatus::Sleeper), 0);
    assert_eq!(closed.grid.hours_in(DutyStatus::Sleeper), 3);
}

#[test]
fn test_trip_sheets_keep_day_order() {
    let trip = TripLogs::from_json(SAMPLE_TRIP).expect("parse");
    let sheets = build_trip_sheets(&trip, SheetOptions::default()).expect("build");

    assert_eq!(sheets.iter().map(|s| s.day).collect::<Vec<_>>(), vec![1, 2]);

    let day2 = &sheets[1];
    assert_eq!(day2.grid[6], DutyStatus::OnDuty);
    assert_eq!(day2.grid.hours_in(DutyStatus::Driving), 5);
    assert_eq!(day2.grid.hours_in(DutyStatus::Rest), 0);
}

#[test]
fn test_trip_sheets_report_bad_day() {
    let mut trip = TripLogs::from_json(SAMPLE_TRIP).expect("parse");
    trip.logs[0].graph_points[3].time = "9h45".into();

    let err = build_trip_sheets(&trip, SheetOptions::default()).expect_err("malformed");
    let msg = err.to_string();
    assert!(msg.contains("Day 1"), "{msg}");
    assert!(msg.contains("#3"), "{msg}");
}

#[test]
fn test_empty_trip() {
    let trip = TripLogs::default();
    assert!(build_trip_sheets(&trip, SheetOptions::default()).expect("ok").is_empty());
}
