use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;

use crate::fragment::{self, Fragment};
use crate::services::{Mailer, RecordStore};

/// Table the contact messages are logged to.
pub const CONTACT_TABLE: &str = "contact_messages";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactForm {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        validate_email(&self.email)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Failed to send message: {0}")]
    Delivery(String),
    #[error("Failed to subscribe. Please try again later.")]
    Subscribe,
}

pub fn validate_email(email: &str) -> Result<(), ContactError> {
    if email.trim().is_empty() || !email.contains('@') {
        return Err(ContactError::InvalidEmail);
    }
    Ok(())
}

pub fn service_subject(service: &str) -> String {
    format!("Service Request: {service}")
}

/// Result of the email-then-log dual write. Email delivery is the operation
/// of record: a failed log never turns a delivered message into a failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmitOutcome {
    Delivered,
    DeliveredButNotLogged,
    Failed(String),
}

impl SubmitOutcome {
    pub fn is_delivered(&self) -> bool {
        !matches!(self, Self::Failed(_))
    }
}

pub async fn deliver(
    form: &ContactForm,
    mailer: &dyn Mailer,
    store: &dyn RecordStore,
) -> SubmitOutcome {
    if let Err(e) = form.validate() {
        return SubmitOutcome::Failed(e.to_string());
    }

    if let Err(e) = mailer.send(form).await {
        log::error!("contact email delivery failed: {e}");
        return SubmitOutcome::Failed(ContactError::Delivery(e.to_string()).to_string());
    }

    let row = json!({
        "name": form.name,
        "email": form.email,
        "subject": form.subject,
        "message": form.message,
    });
    match store.insert(CONTACT_TABLE, row).await {
        Ok(()) => SubmitOutcome::Delivered,
        Err(e) => {
            log::warn!("contact message delivered but not logged: {e}");
            SubmitOutcome::DeliveredButNotLogged
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ContactStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Failed(String),
}

/// Client-side state of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactWorkflow {
    form: ContactForm,
    status: ContactStatus,
}

impl ContactWorkflow {
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn status(&self) -> &ContactStatus {
        &self.status
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            ContactStatus::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn edit(&mut self, field: Field, value: String) {
        self.form.set(field, value);
        if matches!(self.status, ContactStatus::Failed(_)) {
            self.status = ContactStatus::Idle;
        }
    }

    /// Prefills the subject from a service request in the fragment.
    /// Returns whether the fragment carried one.
    pub fn sync_fragment(&mut self, raw: &str) -> bool {
        match Fragment::parse(raw).service {
            Some(service) => {
                self.form.subject = service_subject(&service);
                true
            }
            None => false,
        }
    }

    /// Moves to `Submitting` and hands out the form to send. Invalid input
    /// fails here without anything leaving the browser.
    pub fn begin_submit(&mut self) -> Option<ContactForm> {
        if self.status == ContactStatus::Submitting {
            return None;
        }
        if let Err(e) = self.form.validate() {
            self.status = ContactStatus::Failed(e.to_string());
            return None;
        }
        self.status = ContactStatus::Submitting;
        Some(self.form.clone())
    }

    /// Applies the outcome of a submission. On success the form is emptied
    /// and the replacement URL fragment is returned if a service request
    /// has to be dropped from it.
    pub fn finish(&mut self, outcome: SubmitOutcome, raw_fragment: &str) -> Option<String> {
        match outcome {
            SubmitOutcome::Delivered | SubmitOutcome::DeliveredButNotLogged => {
                self.form = ContactForm::default();
                self.status = ContactStatus::Success;
                fragment::strip_service_request(raw_fragment)
            }
            SubmitOutcome::Failed(reason) => {
                self.status = ContactStatus::Failed(reason);
                None
            }
        }
    }

    /// Resets fields and error without submitting. Same return as
    /// [`ContactWorkflow::finish`].
    pub fn clear(&mut self, raw_fragment: &str) -> Option<String> {
        self.form = ContactForm::default();
        if self.status != ContactStatus::Submitting {
            self.status = ContactStatus::Idle;
        }
        fragment::strip_service_request(raw_fragment)
    }

    /// "Send another message" after a success.
    pub fn acknowledge(&mut self) {
        if self.status == ContactStatus::Success {
            self.status = ContactStatus::Idle;
        }
    }
}
