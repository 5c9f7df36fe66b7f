//! Boundary to the account backend.
//!
//! Accepted form submissions are handed to an [`AccountGateway`]. The only
//! implementation shipped here, [`ConsoleGateway`], logs them.

use serde::Serialize;

use crate::form::field::{CONFIRM_PASSWORD, EMAIL, FULLNAME, PASSWORD};
use crate::form::state::FormState;

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Result<T> = std::result::Result<T, Error>;

const REDACTED: &str = "********";

/// Values collected by an accepted registration form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRecord {
    pub fullname: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationRecord {
    pub fn from_state(state: &FormState) -> Self {
        Self {
            fullname: state.value(FULLNAME).to_string(),
            email: state.value(EMAIL).to_string(),
            password: state.value(PASSWORD).to_string(),
            confirm_password: state.value(CONFIRM_PASSWORD).to_string(),
        }
    }

    /// JSON form with both password fields masked.
    pub fn to_redacted_json(&self) -> serde_json::Value {
        serde_json::json!({
            "fullname": self.fullname,
            "email": self.email,
            "password": REDACTED,
            "confirmPassword": REDACTED,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn from_state(state: &FormState) -> Self {
        Self {
            email: state.value(EMAIL).to_string(),
            password: state.value(PASSWORD).to_string(),
        }
    }

    pub fn to_redacted_json(&self) -> serde_json::Value {
        serde_json::json!({
            "email": self.email,
            "password": REDACTED,
        })
    }
}

pub trait AccountGateway: Send + Sync {
    fn register(&self, record: &RegistrationRecord) -> Result<()>;

    fn sign_in(&self, credentials: &Credentials) -> Result<()>;
}

/// Writes accepted submissions to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleGateway;

impl AccountGateway for ConsoleGateway {
    fn register(&self, record: &RegistrationRecord) -> Result<()> {
        log::info!("registration submitted: {}", record.to_redacted_json());

        Ok(())
    }

    fn sign_in(&self, credentials: &Credentials) -> Result<()> {
        log::info!("sign in submitted: {}", credentials.to_redacted_json());

        Ok(())
    }
}
