use crate::Result as DbErrorResult;

use woms_core::Skill;

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

pub struct SkillRepository {
    pool: SqlitePool,
}

impl SkillRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn add(
        &self,
        applicant_id: i64,
        skill_name: &str,
        skill_level: &str,
    ) -> DbErrorResult<i64> {
        let id = sqlx::query(
            "INSERT INTO applicant_skills (applicant_id, skill_name, skill_level) VALUES (?, ?, ?)",
        )
        .bind(applicant_id)
        .bind(skill_name.trim())
        .bind(skill_level)
        .execute(&self.pool)
        .await?
        .last_insert_rowid();

        Ok(id)
    }

    pub async fn list_for_applicant(&self, applicant_id: i64) -> DbErrorResult<Vec<Skill>> {
        let rows = sqlx::query(
            r#"
              SELECT skill_id, applicant_id, skill_name, skill_level
              FROM applicant_skills
              WHERE applicant_id = ?
              ORDER BY skill_id
              "#,
        )
        .bind(applicant_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::row_to_skill).collect()
    }

    pub async fn delete(&self, skill_id: i64) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM applicant_skills WHERE skill_id = ?")
            .bind(skill_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    fn row_to_skill(row: &SqliteRow) -> DbErrorResult<Skill> {
        Ok(Skill {
            id: row.try_get("skill_id")?,
            applicant_id: row.try_get("applicant_id")?,
            skill_name: row.try_get("skill_name")?,
            skill_level: row.try_get("skill_level")?,
        })
    }
}
