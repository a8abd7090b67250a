//! The transport-agnostic core: registration types, the storage seam and the
//! three operations both HTTP adapters map onto.

mod registration;
mod registry;
mod store;

pub use registration::{NewRegistration, Registration};
pub use registry::Registry;
pub use store::{RegistrationStore, StoreError, StoreResult};

use strum_macros::AsRefStr;

// ###################################
// ->   ERROR
// ###################################
pub type RegistryResult<T> = core::result::Result<T, RegistryError>;

#[derive(Debug, AsRefStr, thiserror::Error)]
pub enum RegistryError {
    #[error("email is required")]
    EmailRequired,
    #[error("email '{email}' is already registered")]
    Duplicate { email: String },
    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),
}
