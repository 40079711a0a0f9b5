//! Admin access gate.
//!
//! A shared secret compared in plain text. This only keeps casual users out
//! of the admin commands; it is not an authentication mechanism.

use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Granted,
    Denied,
}

pub struct AccessGate {
    secret: String,
}

impl AccessGate {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    pub fn check(&self, input: &str) -> Access {
        if !input.is_empty() && input == self.secret {
            Access::Granted
        } else {
            Access::Denied
        }
    }

    pub fn require(&self, input: &str) -> AppResult<()> {
        match self.check(input) {
            Access::Granted => Ok(()),
            Access::Denied => Err(AppError::AccessDenied),
        }
    }
}
