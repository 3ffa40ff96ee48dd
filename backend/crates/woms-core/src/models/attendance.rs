use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attendance {
    pub id: i64,
    pub applicant_id: i64,
    pub date: NaiveDate,
    pub time_in: NaiveTime,
    pub time_out: Option<NaiveTime>,
    pub status: String,
    pub hours_worked: Option<f64>,
}

impl Attendance {
    pub const PRESENT: &'static str = "PRESENT";

    pub fn is_open(&self) -> bool {
        self.time_out.is_none()
    }

    /// Whole hours plus leftover minutes as a fraction; seconds are dropped.
    /// A time-out earlier than the time-in yields zero.
    pub fn hours_between(time_in: NaiveTime, time_out: NaiveTime) -> f64 {
        let elapsed = time_out.signed_duration_since(time_in);
        if elapsed.num_seconds() <= 0 {
            return 0.0;
        }
        let hours = elapsed.num_hours();
        let minutes = elapsed.num_minutes() % 60;
        hours as f64 + minutes as f64 / 60.0
    }
}
