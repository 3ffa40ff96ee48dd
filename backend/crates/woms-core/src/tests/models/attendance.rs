use crate::Attendance;

use chrono::NaiveTime;

fn at(h: u32, m: u32, s: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, s).unwrap()
}

#[test]
fn test_hours_between_counts_whole_hours_and_minutes() {
    assert_eq!(Attendance::hours_between(at(8, 0, 0), at(17, 30, 0)), 9.5);
    assert_eq!(Attendance::hours_between(at(8, 0, 0), at(8, 45, 59)), 0.75);
}

#[test]
fn test_hours_between_is_zero_when_time_out_precedes_time_in() {
    assert_eq!(Attendance::hours_between(at(10, 0, 0), at(9, 0, 0)), 0.0);
    assert_eq!(Attendance::hours_between(at(10, 0, 0), at(10, 0, 0)), 0.0);
}
