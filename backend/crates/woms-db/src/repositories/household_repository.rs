use crate::Result as DbErrorResult;

use woms_core::Household;

use sqlx::{Row, SqlitePool};

pub struct HouseholdRepository {
    pool: SqlitePool,
}

impl HouseholdRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, name: &str, address: &str) -> DbErrorResult<i64> {
        let id = sqlx::query("INSERT INTO households (name, address) VALUES (?, ?)")
            .bind(name)
            .bind(address)
            .execute(&self.pool)
            .await?
            .last_insert_rowid();

        Ok(id)
    }

    pub async fn list_all(&self) -> DbErrorResult<Vec<Household>> {
        let rows = sqlx::query("SELECT household_id, name, address FROM households ORDER BY household_id")
            .fetch_all(&self.pool)
            .await?;

        let mut households = Vec::with_capacity(rows.len());
        for row in rows {
            let id: i64 = row.try_get("household_id")?;
            let member_ids: Vec<i64> = sqlx::query_scalar(
                "SELECT applicant_id FROM household_members WHERE household_id = ? ORDER BY applicant_id",
            )
            .bind(id)
            .fetch_all(&self.pool)
            .await?;

            households.push(Household {
                id,
                name: row.try_get("name")?,
                address: row.try_get("address")?,
                member_ids,
            });
        }

        Ok(households)
    }

    /// Returns false when the applicant already belongs to the household.
    pub async fn add_member(&self, household_id: i64, applicant_id: i64) -> DbErrorResult<bool> {
        let result = sqlx::query(
            "INSERT OR IGNORE INTO household_members (household_id, applicant_id) VALUES (?, ?)",
        )
        .bind(household_id)
        .bind(applicant_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
