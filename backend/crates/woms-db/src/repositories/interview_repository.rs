use crate::Result as DbErrorResult;

use woms_core::{Interview, InterviewStatus, NewInterview};

use chrono::NaiveDateTime;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteConnection, SqlitePool};

const INTERVIEW_SELECT: &str = r#"
    SELECT i.interview_id, i.application_id, i.applicant_id, i.job_id,
           i.interview_date, i.interview_time, i.status, i.notes, i.created_date,
           j.title AS job_title, u.username AS applicant_username, p.name AS applicant_name
    FROM interviews i
    LEFT JOIN jobs j ON i.job_id = j.job_id
    LEFT JOIN users u ON i.applicant_id = u.user_id
    LEFT JOIN persons p ON i.applicant_id = p.user_id
"#;

pub struct InterviewRepository {
    pool: SqlitePool,
}

impl InterviewRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Books a SCHEDULED interview.
    pub async fn create(
        &self,
        interview: &NewInterview,
        created_at: NaiveDateTime,
    ) -> DbErrorResult<i64> {
        let mut conn = self.pool.acquire().await?;
        Self::insert(&mut conn, interview, created_at).await
    }

    pub(crate) async fn insert(
        conn: &mut SqliteConnection,
        interview: &NewInterview,
        created_at: NaiveDateTime,
    ) -> DbErrorResult<i64> {
        let id = sqlx::query(
            r#"
              INSERT INTO interviews (
                  application_id, applicant_id, job_id, interview_date, interview_time,
                  status, notes, created_date
              ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(interview.application_id)
        .bind(interview.applicant_id)
        .bind(interview.job_id)
        .bind(interview.interview_date)
        .bind(interview.interview_time)
        .bind(InterviewStatus::Scheduled.as_str())
        .bind(&interview.notes)
        .bind(created_at)
        .execute(&mut *conn)
        .await?
        .last_insert_rowid();

        Ok(id)
    }

    /// Soonest first.
    pub async fn list_all(&self) -> DbErrorResult<Vec<Interview>> {
        let sql = format!(
            "{INTERVIEW_SELECT} ORDER BY i.interview_date ASC, i.interview_time ASC, i.interview_id ASC"
        );
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;

        rows.iter().map(Self::row_to_interview).collect()
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<Interview>> {
        let sql = format!("{INTERVIEW_SELECT} WHERE i.interview_id = ?");
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(Self::row_to_interview).transpose()
    }

    pub async fn find_by_application(&self, application_id: i64) -> DbErrorResult<Option<Interview>> {
        let sql = format!("{INTERVIEW_SELECT} WHERE i.application_id = ? ORDER BY i.interview_id LIMIT 1");
        let row = sqlx::query(&sql)
            .bind(application_id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(Self::row_to_interview).transpose()
    }

    pub async fn update_status(&self, id: i64, status: InterviewStatus) -> DbErrorResult<bool> {
        let result = sqlx::query("UPDATE interviews SET status = ? WHERE interview_id = ?")
            .bind(status.as_str())
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    fn row_to_interview(row: &SqliteRow) -> DbErrorResult<Interview> {
        let status: String = row.try_get("status")?;

        Ok(Interview {
            id: row.try_get("interview_id")?,
            application_id: row.try_get("application_id")?,
            applicant_id: row.try_get("applicant_id")?,
            job_id: row.try_get("job_id")?,
            interview_date: row.try_get("interview_date")?,
            interview_time: row.try_get("interview_time")?,
            status: status.parse()?,
            notes: row.try_get("notes")?,
            created_date: row.try_get("created_date")?,
            job_title: row.try_get("job_title")?,
            applicant_username: row.try_get("applicant_username")?,
            applicant_name: row.try_get("applicant_name")?,
        })
    }
}
