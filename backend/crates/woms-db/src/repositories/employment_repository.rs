use crate::Result as DbErrorResult;

use woms_core::{Employment, EmploymentState};

use chrono::NaiveDateTime;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

const EMPLOYMENT_SELECT: &str = r#"
    SELECT e.employment_id, e.applicant_id, p.name AS applicant_name,
           e.job_id, j.title AS job_title,
           e.start_date, e.end_date, e.monthly_income, e.status
    FROM employment_status e
    LEFT JOIN persons p ON e.applicant_id = p.user_id
    LEFT JOIN jobs j ON e.job_id = j.job_id
"#;

pub struct EmploymentRepository {
    pool: SqlitePool,
}

impl EmploymentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Records a placement as EMPLOYED starting at `start_date`.
    pub async fn create(
        &self,
        applicant_id: i64,
        job_id: i64,
        monthly_income: f64,
        start_date: NaiveDateTime,
    ) -> DbErrorResult<i64> {
        let id = sqlx::query(
            r#"
              INSERT INTO employment_status (applicant_id, job_id, start_date, monthly_income, status)
              VALUES (?, ?, ?, ?, ?)
              "#,
        )
        .bind(applicant_id)
        .bind(job_id)
        .bind(start_date)
        .bind(monthly_income)
        .bind(EmploymentState::Employed.as_str())
        .execute(&self.pool)
        .await?
        .last_insert_rowid();

        Ok(id)
    }

    pub async fn list_all(&self) -> DbErrorResult<Vec<Employment>> {
        let sql = format!("{EMPLOYMENT_SELECT} ORDER BY e.employment_id");
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;

        rows.iter().map(Self::row_to_employment).collect()
    }

    pub async fn list_for_applicant(&self, applicant_id: i64) -> DbErrorResult<Vec<Employment>> {
        let sql = format!("{EMPLOYMENT_SELECT} WHERE e.applicant_id = ? ORDER BY e.employment_id");
        let rows = sqlx::query(&sql)
            .bind(applicant_id)
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(Self::row_to_employment).collect()
    }

    fn row_to_employment(row: &SqliteRow) -> DbErrorResult<Employment> {
        let status: String = row.try_get("status")?;

        Ok(Employment {
            id: row.try_get("employment_id")?,
            applicant_id: row.try_get("applicant_id")?,
            applicant_name: row.try_get("applicant_name")?,
            job_id: row.try_get("job_id")?,
            job_title: row.try_get("job_title")?,
            start_date: row.try_get("start_date")?,
            end_date: row.try_get("end_date")?,
            monthly_income: row.try_get("monthly_income")?,
            status: status.parse()?,
        })
    }
}
