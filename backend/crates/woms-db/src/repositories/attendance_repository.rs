use crate::{DbError, Result as DbErrorResult};

use woms_core::Attendance;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

pub struct AttendanceRepository {
    pool: SqlitePool,
}

impl AttendanceRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens the day's attendance. One time-in per applicant per date.
    pub async fn time_in(&self, applicant_id: i64, at: NaiveDateTime) -> DbErrorResult<i64> {
        let date = at.date();
        if self.today(applicant_id, date).await?.is_some() {
            return Err(DbError::conflict(format!(
                "Applicant {} already timed in on {}",
                applicant_id, date
            )));
        }

        let id = sqlx::query(
            "INSERT INTO attendance (applicant_id, date, time_in, status) VALUES (?, ?, ?, ?)",
        )
        .bind(applicant_id)
        .bind(date)
        .bind(at.time())
        .bind(Attendance::PRESENT)
        .execute(&self.pool)
        .await?
        .last_insert_rowid();

        Ok(id)
    }

    /// Closes today's open record and stores the hours worked.
    pub async fn time_out(&self, applicant_id: i64, at: NaiveDateTime) -> DbErrorResult<Attendance> {
        let date = at.date();
        let open = self
            .today(applicant_id, date)
            .await?
            .filter(Attendance::is_open)
            .ok_or_else(|| DbError::conflict(format!("No open time-in for {} on {}", applicant_id, date)))?;

        let time_out = at.time();
        let hours = Attendance::hours_between(open.time_in, time_out);

        sqlx::query("UPDATE attendance SET time_out = ?, hours_worked = ? WHERE attendance_id = ?")
            .bind(time_out)
            .bind(hours)
            .bind(open.id)
            .execute(&self.pool)
            .await?;

        Ok(Attendance {
            time_out: Some(time_out),
            hours_worked: Some(hours),
            ..open
        })
    }

    /// Most recent first.
    pub async fn list_for_applicant(&self, applicant_id: i64) -> DbErrorResult<Vec<Attendance>> {
        let rows = sqlx::query(
            r#"
              SELECT attendance_id, applicant_id, date, time_in, time_out, status, hours_worked
              FROM attendance
              WHERE applicant_id = ?
              ORDER BY date DESC, attendance_id DESC
              "#,
        )
        .bind(applicant_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::row_to_attendance).collect()
    }

    pub async fn today(&self, applicant_id: i64, date: NaiveDate) -> DbErrorResult<Option<Attendance>> {
        let row = sqlx::query(
            r#"
              SELECT attendance_id, applicant_id, date, time_in, time_out, status, hours_worked
              FROM attendance
              WHERE applicant_id = ? AND date = ?
              ORDER BY attendance_id DESC
              LIMIT 1
              "#,
        )
        .bind(applicant_id)
        .bind(date)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(Self::row_to_attendance).transpose()
    }

    fn row_to_attendance(row: &SqliteRow) -> DbErrorResult<Attendance> {
        let time_out: Option<NaiveTime> = row.try_get("time_out")?;

        Ok(Attendance {
            id: row.try_get("attendance_id")?,
            applicant_id: row.try_get("applicant_id")?,
            date: row.try_get("date")?,
            time_in: row.try_get("time_in")?,
            time_out,
            status: row.try_get("status")?,
            hours_worked: row.try_get("hours_worked")?,
        })
    }
}
