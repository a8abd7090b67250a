//! The registration record and the validated input needed to create one.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{RegistryError, RegistryResult};

/// A stored registration. Rows are only ever created, never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Registration {
    pub id: i32,
    pub email: String,
    pub contact: Option<String>,
    pub created_at: NaiveDateTime,
}

/// A registration that passed the presence check and may be handed to storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRegistration {
    email: String,
    contact: Option<String>,
}

impl NewRegistration {
    /// Only the presence of `email` is checked. Its format and the `contact` value are stored as given.
    pub fn parse(email: Option<String>, contact: Option<String>) -> RegistryResult<Self> {
        match email {
            Some(email) if !email.is_empty() => Ok(Self { email, contact }),
            _ => Err(RegistryError::EmailRequired),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn contact(&self) -> Option<&str> {
        self.contact.as_deref()
    }

    pub fn into_email(self) -> String {
        self.email
    }
}
