use crate::{DbError, Result as DbErrorResult};

use woms_core::{Application, ApplicationDetails, ApplicationStatus, Interview, NewInterview};

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use super::interview_repository::InterviewRepository;

const APPLICATION_SELECT: &str = r#"
    SELECT a.application_id, a.job_id, a.applicant_id, a.status,
           j.title AS job_title, u.username AS applicant_username, p.name AS applicant_name,
           a.first_name, a.middle_name, a.last_name, a.gender, a.age,
           a.address, a.experience, a.submission_date
    FROM applications a
    LEFT JOIN jobs j ON a.job_id = j.job_id
    LEFT JOIN users u ON a.applicant_id = u.user_id
    LEFT JOIN persons p ON u.user_id = p.user_id
"#;

pub struct ApplicationRepository {
    pool: SqlitePool,
}

impl ApplicationRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Stores a validated form as a PENDING application.
    pub async fn create(
        &self,
        applicant_id: i64,
        details: &ApplicationDetails,
        submitted_at: NaiveDateTime,
    ) -> DbErrorResult<i64> {
        let id = sqlx::query(
            r#"
              INSERT INTO applications (
                  job_id, applicant_id, status, first_name, middle_name, last_name,
                  gender, age, address, experience, submission_date
              ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(details.job_id)
        .bind(applicant_id)
        .bind(ApplicationStatus::Pending.as_str())
        .bind(&details.first_name)
        .bind(&details.middle_name)
        .bind(&details.last_name)
        .bind(&details.gender)
        .bind(details.age)
        .bind(&details.address)
        .bind(&details.experience)
        .bind(submitted_at)
        .execute(&self.pool)
        .await?
        .last_insert_rowid();

        Ok(id)
    }

    /// Quick apply: personal details come from the applicant's profile.
    pub async fn create_with_defaults(
        &self,
        applicant_id: i64,
        job_id: i64,
        submitted_at: NaiveDateTime,
    ) -> DbErrorResult<i64> {
        let row = sqlx::query("SELECT name, age FROM persons WHERE user_id = ?")
            .bind(applicant_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DbError::not_found("Applicant profile", applicant_id))?;

        let name: String = row.try_get("name")?;
        let age: i64 = row.try_get("age")?;
        let details = ApplicationDetails::from_profile(job_id, &name, age);

        self.create(applicant_id, &details, submitted_at).await
    }

    /// Newest first.
    pub async fn list_all(&self) -> DbErrorResult<Vec<Application>> {
        let sql = format!("{APPLICATION_SELECT} ORDER BY a.application_id DESC");
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;

        rows.iter().map(Self::row_to_application).collect()
    }

    pub async fn list_for_applicant(&self, applicant_id: i64) -> DbErrorResult<Vec<Application>> {
        let sql = format!("{APPLICATION_SELECT} WHERE a.applicant_id = ? ORDER BY a.application_id DESC");
        let rows = sqlx::query(&sql)
            .bind(applicant_id)
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(Self::row_to_application).collect()
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<Application>> {
        let sql = format!("{APPLICATION_SELECT} WHERE a.application_id = ?");
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(Self::row_to_application).transpose()
    }

    pub async fn update_status(&self, id: i64, status: ApplicationStatus) -> DbErrorResult<bool> {
        let result = sqlx::query("UPDATE applications SET status = ? WHERE application_id = ?")
            .bind(status.as_str())
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Approves the application and books its interview in one step.
    ///
    /// Fails with `Conflict` if the application already has an interview.
    pub async fn approve_and_schedule(
        &self,
        application_id: i64,
        interview_date: NaiveDate,
        interview_time: NaiveTime,
        created_at: NaiveDateTime,
    ) -> DbErrorResult<Interview> {
        let mut tx = self.pool.begin().await?;

        let existing: Option<i64> =
            sqlx::query_scalar("SELECT interview_id FROM interviews WHERE application_id = ? LIMIT 1")
                .bind(application_id)
                .fetch_optional(&mut *tx)
                .await?;
        if let Some(interview_id) = existing {
            return Err(DbError::conflict(format!(
                "Interview {} already scheduled for application {}",
                interview_id, application_id
            )));
        }

        let row = sqlx::query("SELECT applicant_id, job_id FROM applications WHERE application_id = ?")
            .bind(application_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| DbError::not_found("Application", application_id))?;

        sqlx::query("UPDATE applications SET status = ? WHERE application_id = ?")
            .bind(ApplicationStatus::Approved.as_str())
            .bind(application_id)
            .execute(&mut *tx)
            .await?;

        let new_interview = NewInterview {
            application_id,
            applicant_id: row.try_get("applicant_id")?,
            job_id: row.try_get("job_id")?,
            interview_date,
            interview_time,
            notes: Interview::AUTO_SCHEDULE_NOTE.to_string(),
        };
        let interview_id = InterviewRepository::insert(&mut tx, &new_interview, created_at).await?;

        tx.commit().await?;

        log::info!(
            "Application {} approved, interview {} set for {} {}",
            application_id,
            interview_id,
            interview_date,
            interview_time
        );

        InterviewRepository::new(self.pool.clone())
            .find_by_id(interview_id)
            .await?
            .ok_or_else(|| DbError::not_found("Interview", interview_id))
    }

    fn row_to_application(row: &SqliteRow) -> DbErrorResult<Application> {
        let status: String = row.try_get("status")?;

        Ok(Application {
            id: row.try_get("application_id")?,
            job_id: row.try_get("job_id")?,
            applicant_id: row.try_get("applicant_id")?,
            status: status.parse()?,
            job_title: row.try_get("job_title")?,
            applicant_username: row.try_get("applicant_username")?,
            applicant_name: row.try_get("applicant_name")?,
            first_name: row.try_get("first_name")?,
            middle_name: row.try_get("middle_name")?,
            last_name: row.try_get("last_name")?,
            gender: row.try_get("gender")?,
            age: row.try_get("age")?,
            address: row.try_get("address")?,
            experience: row.try_get("experience")?,
            submission_date: row.try_get("submission_date")?,
        })
    }
}
