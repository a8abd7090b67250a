//! Postgres implementation of `RegistrationStore`.

use async_trait::async_trait;

use super::DbManager;
use crate::model::{NewRegistration, Registration, RegistrationStore, StoreError, StoreResult};

/// Idempotent thanks to `IF NOT EXISTS`, safe to run on every start.
const CREATE_REGISTRATIONS: &str = r#"
    CREATE TABLE IF NOT EXISTS registrations (
        id          SERIAL PRIMARY KEY,
        email       TEXT UNIQUE NOT NULL,
        contact     TEXT,
        created_at  TIMESTAMP NOT NULL DEFAULT now()
    )
"#;

#[async_trait]
impl RegistrationStore for DbManager {
    async fn ping(&self) -> sqlx::Result<()> {
        self.db().acquire().await?;
        Ok(())
    }

    async fn create_schema(&self) -> sqlx::Result<()> {
        sqlx::query(CREATE_REGISTRATIONS).execute(self.db()).await?;
        Ok(())
    }

    async fn insert(&self, registration: &NewRegistration) -> StoreResult<Registration> {
        sqlx::query_as(
            r#"INSERT INTO registrations (email, contact)
            VALUES ($1, $2)
            RETURNING id, email, contact, created_at"#,
        )
        .bind(registration.email())
        .bind(registration.contact())
        .fetch_one(self.db())
        .await
        .map_err(classify_insert_error)
    }

    async fn fetch_all(&self) -> sqlx::Result<Vec<Registration>> {
        sqlx::query_as(
            r#"SELECT id, email, contact, created_at FROM registrations
            ORDER BY created_at DESC, id DESC"#,
        )
        .fetch_all(self.db())
        .await
    }
}

// ###################################
// ->   HELPERS
// ###################################

/// Singles out the unique violation on `email`, every other error is passed on untouched.
fn classify_insert_error(error: sqlx::Error) -> StoreError {
    match error {
        sqlx::Error::Database(ref er) if er.is_unique_violation() => StoreError::UniqueViolation,
        error => StoreError::Sqlx(error),
    }
}
