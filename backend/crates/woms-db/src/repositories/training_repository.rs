use crate::Result as DbErrorResult;

use woms_core::{TrainingEnrollment, TrainingProgram};

use chrono::NaiveDateTime;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

pub struct TrainingRepository {
    pool: SqlitePool,
}

impl TrainingRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// New programs start ACTIVE.
    pub async fn create_program(
        &self,
        title: &str,
        description: &str,
        duration_days: i64,
        skills_taught: &str,
    ) -> DbErrorResult<i64> {
        let id = sqlx::query(
            r#"
              INSERT INTO training_programs (title, description, duration_days, skills_taught, status)
              VALUES (?, ?, ?, ?, ?)
              "#,
        )
        .bind(title)
        .bind(description)
        .bind(duration_days)
        .bind(skills_taught)
        .bind(TrainingProgram::ACTIVE)
        .execute(&self.pool)
        .await?
        .last_insert_rowid();

        Ok(id)
    }

    pub async fn list_programs(&self) -> DbErrorResult<Vec<TrainingProgram>> {
        let rows = sqlx::query(
            r#"
              SELECT program_id, title, description, duration_days, skills_taught, status
              FROM training_programs
              ORDER BY program_id
              "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::row_to_program).collect()
    }

    /// Removes the program and its enrollments.
    pub async fn delete_program(&self, program_id: i64) -> DbErrorResult<bool> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM training_enrollments WHERE program_id = ?")
            .bind(program_id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM training_programs WHERE program_id = ?")
            .bind(program_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn enroll(
        &self,
        applicant_id: i64,
        program_id: i64,
        enrolled_at: NaiveDateTime,
    ) -> DbErrorResult<i64> {
        let id = sqlx::query(
            r#"
              INSERT INTO training_enrollments (applicant_id, program_id, enrollment_date, status)
              VALUES (?, ?, ?, ?)
              "#,
        )
        .bind(applicant_id)
        .bind(program_id)
        .bind(enrolled_at)
        .bind(TrainingEnrollment::ENROLLED)
        .execute(&self.pool)
        .await?
        .last_insert_rowid();

        Ok(id)
    }

    pub async fn list_for_applicant(&self, applicant_id: i64) -> DbErrorResult<Vec<TrainingEnrollment>> {
        let rows = sqlx::query(
            r#"
              SELECT e.enrollment_id, e.applicant_id, u.username AS applicant_username,
                     e.program_id, p.title AS program_title,
                     e.enrollment_date, e.completion_date, e.status
              FROM training_enrollments e
              JOIN training_programs p ON e.program_id = p.program_id
              LEFT JOIN users u ON e.applicant_id = u.user_id
              WHERE e.applicant_id = ?
              ORDER BY e.enrollment_id
              "#,
        )
        .bind(applicant_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::row_to_enrollment).collect()
    }

    /// Most recent enrollment first.
    pub async fn list_enrollments(&self) -> DbErrorResult<Vec<TrainingEnrollment>> {
        let rows = sqlx::query(
            r#"
              SELECT e.enrollment_id, e.applicant_id, u.username AS applicant_username,
                     e.program_id, p.title AS program_title,
                     e.enrollment_date, e.completion_date, e.status
              FROM training_enrollments e
              JOIN training_programs p ON e.program_id = p.program_id
              JOIN users u ON e.applicant_id = u.user_id
              ORDER BY e.enrollment_date DESC, e.enrollment_id DESC
              "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::row_to_enrollment).collect()
    }

    fn row_to_program(row: &SqliteRow) -> DbErrorResult<TrainingProgram> {
        Ok(TrainingProgram {
            id: row.try_get("program_id")?,
            title: row.try_get("title")?,
            description: row.try_get("description")?,
            duration_days: row.try_get("duration_days")?,
            skills_taught: row.try_get("skills_taught")?,
            status: row.try_get("status")?,
        })
    }

    fn row_to_enrollment(row: &SqliteRow) -> DbErrorResult<TrainingEnrollment> {
        Ok(TrainingEnrollment {
            enrollment_id: row.try_get("enrollment_id")?,
            applicant_id: row.try_get("applicant_id")?,
            applicant_username: row.try_get("applicant_username")?,
            program_id: row.try_get("program_id")?,
            program_title: row.try_get("program_title")?,
            enrollment_date: row.try_get("enrollment_date")?,
            completion_date: row.try_get("completion_date")?,
            status: row.try_get("status")?,
        })
    }
}
