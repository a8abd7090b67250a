mod registrations;

use std::time::Duration;

use sqlx::{postgres::PgPoolOptions, PgPool};
use tracing::info;

use crate::config::AppConfig;

/// Owns the process-wide Postgres pool.
#[derive(Clone, Debug)]
pub struct DbManager {
    db: PgPool,
}

impl DbManager {
    /// Builds the pool without connecting: the first query opens the first connection.
    /// Waiting for a connection is capped, so a dead database fails a request
    /// instead of holding it for the sqlx default of 30 seconds.
    pub fn init(config: &AppConfig) -> Self {
        info!("{:<20} - Initializing the DB pool", "init_db");
        let con_opts = config.db_options.clone();
        let db_pool = PgPoolOptions::new()
            .acquire_timeout(Duration::from_secs(3))
            .connect_lazy_with(con_opts);

        Self { db: db_pool }
    }

    pub fn from_pool(db: PgPool) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &PgPool {
        &self.db
    }
}
