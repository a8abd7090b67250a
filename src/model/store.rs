use async_trait::async_trait;

use super::{NewRegistration, Registration};

pub type StoreResult<T> = core::result::Result<T, StoreError>;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Storage refused the row because its email is already taken.
    #[error("unique constraint violated")]
    UniqueViolation,
    #[error("sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Persistence seam of the registration service.
///
/// Uniqueness of `email` and atomicity of a single insert are the store's job,
/// the `Registry` never checks for duplicates itself.
#[async_trait]
pub trait RegistrationStore: Send + Sync {
    /// Checks that the backing storage is reachable.
    async fn ping(&self) -> sqlx::Result<()> {
        Ok(())
    }

    /// Creates the backing table if it does not exist. Must be idempotent.
    async fn create_schema(&self) -> sqlx::Result<()>;

    /// Inserts a row and returns it as stored, with the generated `id` and `created_at`.
    async fn insert(&self, registration: &NewRegistration) -> StoreResult<Registration>;

    /// Returns every row, newest `created_at` first, ties broken by the higher `id`.
    async fn fetch_all(&self) -> sqlx::Result<Vec<Registration>>;
}
