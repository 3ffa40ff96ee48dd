use crate::Result as DbErrorResult;

use woms_core::Resource;

use sqlx::{Row, SqlitePool};

pub struct ResourceRepository {
    pool: SqlitePool,
}

impl ResourceRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, name: &str, quantity: i64) -> DbErrorResult<i64> {
        let id = sqlx::query("INSERT INTO resources (name, quantity) VALUES (?, ?)")
            .bind(name)
            .bind(quantity)
            .execute(&self.pool)
            .await?
            .last_insert_rowid();

        Ok(id)
    }

    pub async fn list(&self) -> DbErrorResult<Vec<Resource>> {
        let rows = sqlx::query("SELECT resource_id, name, quantity FROM resources ORDER BY resource_id")
            .fetch_all(&self.pool)
            .await?;

        rows.iter()
            .map(|row| -> DbErrorResult<Resource> {
                Ok(Resource {
                    id: row.try_get("resource_id")?,
                    name: row.try_get("name")?,
                    quantity: row.try_get("quantity")?,
                })
            })
            .collect()
    }
}
