use serde_json::json;

use crate::contact::{validate_email, ContactError};
use crate::services::RecordStore;

pub const SUBSCRIBER_TABLE: &str = "subscribers";

/// Stores a newsletter signup. Unlike the contact log, the insert is the
/// operation of record here, so its failure is reported.
pub async fn subscribe(email: &str, store: &dyn RecordStore) -> Result<(), ContactError> {
    let email = email.trim();
    validate_email(email)?;
    store
        .insert(SUBSCRIBER_TABLE, json!({ "email": email }))
        .await
        .map_err(|e| {
            log::error!("newsletter signup failed: {e}");
            ContactError::Subscribe
        })
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SignupStatus {
    #[default]
    Idle,
    Submitting,
    Subscribed,
    Failed(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Signup {
    email: String,
    status: SignupStatus,
}

impl Signup {
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn status(&self) -> &SignupStatus {
        &self.status
    }

    pub fn edit(&mut self, email: String) {
        self.email = email;
        if matches!(self.status, SignupStatus::Failed(_)) {
            self.status = SignupStatus::Idle;
        }
    }

    pub fn begin_submit(&mut self) -> Option<String> {
        if self.status == SignupStatus::Submitting {
            return None;
        }
        if let Err(e) = validate_email(&self.email) {
            self.status = SignupStatus::Failed(e.to_string());
            return None;
        }
        self.status = SignupStatus::Submitting;
        Some(self.email.clone())
    }

    pub fn finish(&mut self, res: Result<(), String>) {
        match res {
            Ok(()) => {
                self.email.clear();
                self.status = SignupStatus::Subscribed;
            }
            Err(msg) => self.status = SignupStatus::Failed(msg),
        }
    }

    /// "Subscribe another email".
    pub fn reset(&mut self) {
        self.status = SignupStatus::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fakes::FakeStore;

    #[tokio::test]
    async fn test_subscribe_inserts_trimmed_email() {
        let store = FakeStore::default();
        subscribe("  ada@example.com ", &store)
            .await
            .expect("subscribe should succeed");
        let rows = store.rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].0, SUBSCRIBER_TABLE);
        assert_eq!(rows[0].1, json!({ "email": "ada@example.com" }));
    }

    #[tokio::test]
    async fn test_subscribe_rejects_invalid_email() {
        let store = FakeStore::default();
        let res = subscribe("ada", &store).await;
        assert_eq!(res, Err(ContactError::InvalidEmail));
        assert!(store.rows().is_empty());
    }

    #[tokio::test]
    async fn test_subscribe_reports_store_failure() {
        let store = FakeStore::failing();
        let res = subscribe("ada@example.com", &store).await;
        assert_eq!(res, Err(ContactError::Subscribe));
        assert_eq!(
            res.unwrap_err().to_string(),
            "Failed to subscribe. Please try again later."
        );
    }

    #[test]
    fn test_signup_states() {
        let mut signup = Signup::default();
        signup.edit("nope".to_string());
        assert_eq!(signup.begin_submit(), None);
        assert!(matches!(signup.status(), SignupStatus::Failed(_)));

        signup.edit("ada@example.com".to_string());
        assert_eq!(signup.status(), &SignupStatus::Idle);
        assert_eq!(signup.begin_submit().as_deref(), Some("ada@example.com"));
        assert_eq!(signup.begin_submit(), None);

        signup.finish(Err("Failed to subscribe. Please try again later.".to_string()));
        assert_eq!(signup.email(), "ada@example.com");

        signup.begin_submit();
        signup.finish(Ok(()));
        assert_eq!(signup.status(), &SignupStatus::Subscribed);
        assert_eq!(signup.email(), "");

        signup.reset();
        assert_eq!(signup.status(), &SignupStatus::Idle);
    }
}
