use crate::Result as DbErrorResult;

use woms_core::catalog::is_admissible;
use woms_core::{Job, JobMatch, LIVELIHOOD_JOBS};

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteConnection, SqlitePool};

pub struct JobRepository {
    pool: SqlitePool,
}

impl JobRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, title: &str, description: &str, salary: f64) -> DbErrorResult<Job> {
        let id = sqlx::query("INSERT INTO jobs (title, description, salary) VALUES (?, ?, ?)")
            .bind(title)
            .bind(description)
            .bind(salary)
            .execute(&self.pool)
            .await?
            .last_insert_rowid();

        Ok(Job {
            id,
            title: title.to_string(),
            description: description.to_string(),
            salary,
        })
    }

    pub async fn list(&self) -> DbErrorResult<Vec<Job>> {
        let rows = sqlx::query("SELECT job_id, title, description, salary FROM jobs ORDER BY job_id")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(Self::row_to_job).collect()
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<Job>> {
        let row = sqlx::query("SELECT job_id, title, description, salary FROM jobs WHERE job_id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(Self::row_to_job).transpose()
    }

    pub async fn find_by_title(&self, title: &str) -> DbErrorResult<Option<Job>> {
        let row = sqlx::query(
            "SELECT job_id, title, description, salary FROM jobs WHERE title = ? ORDER BY job_id LIMIT 1",
        )
        .bind(title)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(Self::row_to_job).transpose()
    }

    /// Deletes the job together with its applications, interviews,
    /// employment records and required skills.
    pub async fn delete(&self, id: i64) -> DbErrorResult<bool> {
        let mut tx = self.pool.begin().await?;
        let deleted = Self::delete_cascade(&mut tx, id).await?;
        tx.commit().await?;

        Ok(deleted)
    }

    /// Wipes every job and its dependents, then reinserts the livelihood
    /// catalog. Returns the catalog as stored.
    pub async fn reset_catalog(&self) -> DbErrorResult<Vec<Job>> {
        let mut tx = self.pool.begin().await?;

        for statement in [
            "DELETE FROM interviews",
            "DELETE FROM job_required_skills",
            "DELETE FROM applications",
            "DELETE FROM employment_status",
        ] {
            sqlx::query(statement).execute(&mut *tx).await?;
        }

        let removed = sqlx::query("DELETE FROM jobs").execute(&mut *tx).await?.rows_affected();
        if removed > 0 {
            log::info!("Removed {} existing job(s) before restoring the catalog", removed);
        }

        for job in LIVELIHOOD_JOBS.iter().filter(|j| is_admissible(j.title, j.salary)) {
            sqlx::query("INSERT INTO jobs (title, description, salary) VALUES (?, ?, ?)")
                .bind(job.title)
                .bind(job.description)
                .bind(job.salary)
                .execute(&mut *tx)
                .await?;
        }

        sqlx::query("INSERT OR REPLACE INTO catalog_state (id, restored_at) VALUES (1, CURRENT_TIMESTAMP)")
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        self.list().await
    }

    /// Whether `reset_catalog` has ever run against this database.
    pub async fn catalog_restored(&self) -> DbErrorResult<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM catalog_state")
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }

    /// Restores the catalog only on a database that has never had it restored.
    /// Returns `None` when the catalog was left alone.
    pub async fn restore_catalog_once(&self) -> DbErrorResult<Option<Vec<Job>>> {
        if self.catalog_restored().await? {
            return Ok(None);
        }

        self.reset_catalog().await.map(Some)
    }

    /// Removes blocklisted titles and postings above the salary ceiling.
    pub async fn purge_excluded(&self) -> DbErrorResult<u64> {
        let jobs = self.list().await?;
        let excluded: Vec<i64> = jobs
            .iter()
            .filter(|j| !is_admissible(&j.title, j.salary))
            .map(|j| j.id)
            .collect();

        if excluded.is_empty() {
            return Ok(0);
        }

        let mut tx = self.pool.begin().await?;
        let mut removed = 0;
        for id in excluded {
            if Self::delete_cascade(&mut tx, id).await? {
                removed += 1;
            }
        }
        tx.commit().await?;

        log::info!("Removed {} job(s) outside the livelihood catalog", removed);
        Ok(removed)
    }

    /// Returns false when the skill was already required.
    pub async fn add_required_skill(&self, job_id: i64, skill_name: &str) -> DbErrorResult<bool> {
        let result =
            sqlx::query("INSERT OR IGNORE INTO job_required_skills (job_id, skill_name) VALUES (?, ?)")
                .bind(job_id)
                .bind(skill_name.trim())
                .execute(&self.pool)
                .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn required_skills(&self, job_id: i64) -> DbErrorResult<Vec<String>> {
        let skills: Vec<String> = sqlx::query_scalar(
            "SELECT skill_name FROM job_required_skills WHERE job_id = ? ORDER BY skill_name",
        )
        .bind(job_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(skills)
    }

    /// Jobs that require at least one skill, ranked by how many of those
    /// skills the applicant has recorded.
    pub async fn matching_jobs(&self, applicant_id: i64) -> DbErrorResult<Vec<JobMatch>> {
        let rows = sqlx::query(
            r#"
              SELECT j.job_id, j.title, j.description, j.salary,
                     COUNT(DISTINCT js.skill_name) AS required_skills,
                     COUNT(DISTINCT CASE
                         WHEN aps.skill_name = js.skill_name COLLATE NOCASE THEN js.skill_name
                     END) AS matched_skills
              FROM jobs j
              JOIN job_required_skills js ON j.job_id = js.job_id
              LEFT JOIN applicant_skills aps ON aps.applicant_id = ?
              GROUP BY j.job_id, j.title, j.description, j.salary
              HAVING required_skills > 0
              ORDER BY matched_skills DESC, required_skills ASC, j.job_id ASC
              "#,
        )
        .bind(applicant_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| -> DbErrorResult<JobMatch> {
                let required: i64 = row.try_get("required_skills")?;
                let matched: i64 = row.try_get("matched_skills")?;
                Ok(JobMatch {
                    job_id: row.try_get("job_id")?,
                    title: row.try_get("title")?,
                    description: row.try_get("description")?,
                    salary: row.try_get("salary")?,
                    required_skills: required,
                    matched_skills: matched,
                    match_percentage: JobMatch::percentage(matched, required),
                })
            })
            .collect()
    }

    async fn delete_cascade(conn: &mut SqliteConnection, id: i64) -> DbErrorResult<bool> {
        sqlx::query(
            r#"
              DELETE FROM interviews
              WHERE job_id = ?
                 OR application_id IN (SELECT application_id FROM applications WHERE job_id = ?)
              "#,
        )
        .bind(id)
        .bind(id)
        .execute(&mut *conn)
        .await?;

        for statement in [
            "DELETE FROM applications WHERE job_id = ?",
            "DELETE FROM employment_status WHERE job_id = ?",
            "DELETE FROM job_required_skills WHERE job_id = ?",
        ] {
            sqlx::query(statement).bind(id).execute(&mut *conn).await?;
        }

        let result = sqlx::query("DELETE FROM jobs WHERE job_id = ?")
            .bind(id)
            .execute(&mut *conn)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    fn row_to_job(row: &SqliteRow) -> DbErrorResult<Job> {
        Ok(Job {
            id: row.try_get("job_id")?,
            title: row.try_get("title")?,
            description: row.try_get("description")?,
            salary: row.try_get("salary")?,
        })
    }
}
