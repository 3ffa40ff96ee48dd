use crate::Result as DbErrorResult;

use woms_core::ApplicantNeed;

use chrono::NaiveDateTime;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

pub struct NeedRepository {
    pool: SqlitePool,
}

impl NeedRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        applicant_id: i64,
        description: &str,
        category: &str,
        submitted_at: NaiveDateTime,
    ) -> DbErrorResult<i64> {
        let id = sqlx::query(
            r#"
              INSERT INTO applicant_needs (applicant_id, need_description, category, status, submitted_date)
              VALUES (?, ?, ?, ?, ?)
              "#,
        )
        .bind(applicant_id)
        .bind(description)
        .bind(category)
        .bind(ApplicantNeed::PENDING)
        .bind(submitted_at)
        .execute(&self.pool)
        .await?
        .last_insert_rowid();

        Ok(id)
    }

    pub async fn list_for_applicant(&self, applicant_id: i64) -> DbErrorResult<Vec<ApplicantNeed>> {
        let rows = sqlx::query(
            r#"
              SELECT need_id, applicant_id, need_description, category, status, submitted_date
              FROM applicant_needs
              WHERE applicant_id = ?
              ORDER BY need_id
              "#,
        )
        .bind(applicant_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::row_to_need).collect()
    }

    fn row_to_need(row: &SqliteRow) -> DbErrorResult<ApplicantNeed> {
        Ok(ApplicantNeed {
            id: row.try_get("need_id")?,
            applicant_id: row.try_get("applicant_id")?,
            description: row.try_get("need_description")?,
            category: row.try_get("category")?,
            status: row.try_get("status")?,
            submitted_date: row.try_get("submitted_date")?,
        })
    }
}
