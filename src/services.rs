//! External collaborators of the contact and newsletter forms.

#[cfg(feature = "ssr")]
pub mod emailjs;
#[cfg(feature = "ssr")]
pub mod supabase;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::contact::ContactForm;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("{0} is not configured")]
    NotConfigured(&'static str),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("service responded with {status}: {body}")]
    Status { status: u16, body: String },
}

#[cfg(feature = "ssr")]
impl From<reqwest::Error> for ServiceError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value.to_string())
    }
}

/// Delivers a contact message as an email.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, form: &ContactForm) -> Result<(), ServiceError>;
}

/// Hosted table storage.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn insert(&self, table: &str, row: Value) -> Result<(), ServiceError>;
}

#[cfg(test)]
pub(crate) mod fakes {
    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    pub struct FakeMailer {
        pub fail_with: Option<String>,
        pub sent: Mutex<Vec<ContactForm>>,
    }

    impl FakeMailer {
        pub fn failing(reason: &str) -> Self {
            Self {
                fail_with: Some(reason.to_string()),
                ..Default::default()
            }
        }

        pub fn calls(&self) -> usize {
            self.sent.lock().expect("mailer lock").len()
        }
    }

    #[async_trait]
    impl Mailer for FakeMailer {
        async fn send(&self, form: &ContactForm) -> Result<(), ServiceError> {
            self.sent.lock().expect("mailer lock").push(form.clone());
            match &self.fail_with {
                Some(reason) => Err(ServiceError::Transport(reason.clone())),
                None => Ok(()),
            }
        }
    }

    #[derive(Default)]
    pub struct FakeStore {
        pub fail: bool,
        pub rows: Mutex<Vec<(String, Value)>>,
    }

    impl FakeStore {
        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Default::default()
            }
        }

        pub fn rows(&self) -> Vec<(String, Value)> {
            self.rows.lock().expect("store lock").clone()
        }
    }

    #[async_trait]
    impl RecordStore for FakeStore {
        async fn insert(&self, table: &str, row: Value) -> Result<(), ServiceError> {
            self.rows
                .lock()
                .expect("store lock")
                .push((table.to_string(), row));
            if self.fail {
                Err(ServiceError::Status {
                    status: 401,
                    body: "Invalid API key".to_string(),
                })
            } else {
                Ok(())
            }
        }
    }
}
