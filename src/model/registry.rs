use std::sync::Arc;

use tracing::{error, info};

use super::{
    NewRegistration, Registration, RegistrationStore, RegistryError, RegistryResult, StoreError,
};

/// Holds the process-wide storage handle and runs the registration operations on it.
/// Cheap to clone, every clone shares the same store.
#[derive(Clone)]
pub struct Registry {
    store: Arc<dyn RegistrationStore>,
}

impl Registry {
    pub fn new(store: impl RegistrationStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Logs whether storage is reachable. Never fails.
    pub async fn probe(&self) {
        match self.store.ping().await {
            Ok(()) => info!("{:<20} - Connected to the database", "probe"),
            Err(er) => error!(error = ?er, "{:<20} - Failed to connect to the database", "probe"),
        }
    }

    /// Creates the registrations table if it is missing.
    ///
    /// A failure is only logged: the process keeps starting up and later
    /// operations surface a storage error if the table really is absent.
    pub async fn ensure_schema(&self) {
        match self.store.create_schema().await {
            Ok(()) => info!("{:<20} - Registrations table ready", "ensure_schema"),
            Err(er) => error!(
                error = ?er,
                "{:<20} - Failed to create the registrations table",
                "ensure_schema"
            ),
        }
    }

    #[tracing::instrument(name = "Saving new registration", skip(self, contact))]
    pub async fn submit(
        &self,
        email: Option<String>,
        contact: Option<String>,
    ) -> RegistryResult<Registration> {
        let new_registration = NewRegistration::parse(email, contact)?;

        match self.store.insert(&new_registration).await {
            Ok(registration) => {
                info!(id = registration.id, "Registration stored");
                Ok(registration)
            }
            Err(StoreError::UniqueViolation) => {
                let email = new_registration.into_email();
                info!("Duplicate email: {email}");
                Err(RegistryError::Duplicate { email })
            }
            Err(StoreError::Sqlx(er)) => {
                error!(error = ?er, "Database error while saving a registration");
                Err(RegistryError::Storage(er))
            }
        }
    }

    #[tracing::instrument(name = "Fetching all registrations", skip(self))]
    pub async fn list(&self) -> RegistryResult<Vec<Registration>> {
        self.store.fetch_all().await.map_err(|er| {
            error!(error = ?er, "Database error while fetching registrations");
            RegistryError::Storage(er)
        })
    }
}
