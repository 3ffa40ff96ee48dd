use crate::Interview;

use chrono::{NaiveDate, NaiveTime};

#[test]
fn test_default_slot_is_three_days_out_at_ten() {
    let today = NaiveDate::from_ymd_opt(2026, 2, 27).unwrap();

    let (date, time) = Interview::default_slot(today);

    assert_eq!(date, NaiveDate::from_ymd_opt(2026, 3, 2).unwrap());
    assert_eq!(time, NaiveTime::from_hms_opt(10, 0, 0).unwrap());
}
