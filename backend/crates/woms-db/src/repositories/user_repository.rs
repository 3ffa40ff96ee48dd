use crate::Result as DbErrorResult;

use woms_core::{Applicant, PrimaryAccount, Role};

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

/// Rows keyed by `applicant_id` that go with a deleted user.
const OWNED_ROW_DELETES: [&str; 7] = [
    "DELETE FROM applications WHERE applicant_id = ?",
    "DELETE FROM household_members WHERE applicant_id = ?",
    "DELETE FROM applicant_needs WHERE applicant_id = ?",
    "DELETE FROM applicant_skills WHERE applicant_id = ?",
    "DELETE FROM training_enrollments WHERE applicant_id = ?",
    "DELETE FROM employment_status WHERE applicant_id = ?",
    "DELETE FROM attendance WHERE applicant_id = ?",
];

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Inserts the user row and its person profile together.
    pub async fn create_applicant(
        &self,
        username: &str,
        password: &str,
        name: &str,
        age: i64,
        phone: &str,
    ) -> DbErrorResult<i64> {
        let mut tx = self.pool.begin().await?;

        let user_id = sqlx::query("INSERT INTO users (username, password, role) VALUES (?, ?, ?)")
            .bind(username)
            .bind(password)
            .bind(Role::Applicant.as_str())
            .execute(&mut *tx)
            .await?
            .last_insert_rowid();

        sqlx::query("INSERT INTO persons (user_id, name, age, phone) VALUES (?, ?, ?, ?)")
            .bind(user_id)
            .bind(name)
            .bind(age)
            .bind(phone)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(user_id)
    }

    pub async fn list_applicants(&self) -> DbErrorResult<Vec<Applicant>> {
        let rows = sqlx::query(
            r#"
              SELECT u.user_id, u.username, p.person_id, p.name, p.age, p.phone
              FROM users u
              LEFT JOIN persons p ON u.user_id = p.user_id
              WHERE u.role = ?
              ORDER BY u.user_id ASC
              "#,
        )
        .bind(Role::Applicant.as_str())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::row_to_applicant).collect()
    }

    pub async fn count_applicants(&self) -> DbErrorResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE role = ?")
            .bind(Role::Applicant.as_str())
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    pub async fn find_credentials(&self, username: &str) -> DbErrorResult<Option<PrimaryAccount>> {
        let row = sqlx::query("SELECT role, username, password FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(Self::row_to_account).transpose()
    }

    /// Stored role for a username/password pair, if the pair exists.
    pub async fn find_role(&self, username: &str, password: &str) -> DbErrorResult<Option<String>> {
        let role: Option<String> =
            sqlx::query_scalar("SELECT role FROM users WHERE username = ? AND password = ?")
                .bind(username)
                .bind(password)
                .fetch_optional(&self.pool)
                .await?;

        Ok(role)
    }

    pub async fn username_exists(&self, username: &str) -> DbErrorResult<bool> {
        let exists: i64 =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE username = ?)")
                .bind(username)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists != 0)
    }

    pub async fn find_applicant_id(&self, username: &str) -> DbErrorResult<Option<i64>> {
        let id: Option<i64> =
            sqlx::query_scalar("SELECT user_id FROM users WHERE username = ? AND role = ?")
                .bind(username)
                .bind(Role::Applicant.as_str())
                .fetch_optional(&self.pool)
                .await?;

        Ok(id)
    }

    /// Removes the user and every row that references it.
    ///
    /// Returns the deleted username so callers can mirror the removal.
    pub async fn delete_applicant(&self, user_id: i64) -> DbErrorResult<Option<String>> {
        let mut tx = self.pool.begin().await?;

        let username: Option<String> =
            sqlx::query_scalar("SELECT username FROM users WHERE user_id = ?")
                .bind(user_id)
                .fetch_optional(&mut *tx)
                .await?;

        let Some(username) = username else {
            return Ok(None);
        };

        sqlx::query(
            r#"
              DELETE FROM interviews
              WHERE applicant_id = ?
                 OR application_id IN (SELECT application_id FROM applications WHERE applicant_id = ?)
              "#,
        )
        .bind(user_id)
        .bind(user_id)
        .execute(&mut *tx)
        .await?;

        for statement in OWNED_ROW_DELETES {
            sqlx::query(statement)
                .bind(user_id)
                .execute(&mut *tx)
                .await?;
        }

        sqlx::query("DELETE FROM persons WHERE user_id = ?")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM users WHERE user_id = ?")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(Some(username))
    }

    /// Creates the bootstrap administrator when missing. Returns whether a
    /// row was inserted.
    pub async fn ensure_admin(&self, username: &str, password: &str) -> DbErrorResult<bool> {
        let result = sqlx::query(
            r#"
              INSERT INTO users (username, password, role)
              SELECT ?, ?, ?
              WHERE NOT EXISTS (SELECT 1 FROM users WHERE username = ?)
              "#,
        )
        .bind(username)
        .bind(password)
        .bind(Role::Admin.as_str())
        .bind(username)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Every account, in the shape the backup store consumes.
    pub async fn all_accounts_for_sync(&self) -> DbErrorResult<Vec<PrimaryAccount>> {
        let rows = sqlx::query("SELECT role, username, password FROM users ORDER BY user_id ASC")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(Self::row_to_account).collect()
    }

    /// Minimal user row without a person profile.
    ///
    /// A blank role becomes APPLICANT; a blank username is ignored. Existing
    /// usernames are left untouched. Returns whether a row was inserted.
    pub async fn create_bare_account(
        &self,
        role: &str,
        username: &str,
        password: &str,
    ) -> DbErrorResult<bool> {
        let username = username.trim();
        if username.is_empty() {
            return Ok(false);
        }

        let role = match role.trim() {
            "" => Role::Applicant.as_str().to_string(),
            other => other.to_ascii_uppercase(),
        };

        let result =
            sqlx::query("INSERT OR IGNORE INTO users (username, password, role) VALUES (?, ?, ?)")
                .bind(username)
                .bind(password)
                .bind(role)
                .execute(&self.pool)
                .await?;

        Ok(result.rows_affected() > 0)
    }

    fn row_to_applicant(row: &SqliteRow) -> DbErrorResult<Applicant> {
        Ok(Applicant {
            user_id: row.try_get("user_id")?,
            username: row.try_get("username")?,
            person_id: row.try_get("person_id")?,
            name: row.try_get("name")?,
            age: row.try_get("age")?,
            phone: row.try_get("phone")?,
        })
    }

    fn row_to_account(row: &SqliteRow) -> DbErrorResult<PrimaryAccount> {
        Ok(PrimaryAccount {
            role: row.try_get("role")?,
            username: row.try_get("username")?,
            password: row.try_get("password")?,
        })
    }
}
