use crate::Result as DbErrorResult;

use woms_core::Simulation;

use sqlx::{Row, SqlitePool};

pub struct SimulationRepository {
    pool: SqlitePool,
}

impl SimulationRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, description: &str, run_at: &str, results: &str) -> DbErrorResult<i64> {
        let id = sqlx::query("INSERT INTO simulations (description, run_at, results) VALUES (?, ?, ?)")
            .bind(description)
            .bind(run_at)
            .bind(results)
            .execute(&self.pool)
            .await?
            .last_insert_rowid();

        Ok(id)
    }

    pub async fn list(&self) -> DbErrorResult<Vec<Simulation>> {
        let rows = sqlx::query(
            "SELECT simulation_id, description, run_at, results FROM simulations ORDER BY simulation_id",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| -> DbErrorResult<Simulation> {
                Ok(Simulation {
                    id: row.try_get("simulation_id")?,
                    description: row.try_get("description")?,
                    run_at: row.try_get("run_at")?,
                    results: row.try_get("results")?,
                })
            })
            .collect()
    }
}
