//! Contact form state and best-effort submission
//!
//! The form keeps its fields until a submission is confirmed; a failed send
//! only flips the status so the visitor can try again.

mod client;

pub use client::{ContactClient, SubmissionWorker};

use serde::Serialize;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
    /// Missing field or malformed email; nothing was sent
    Invalid,
}

impl SubmitStatus {
    /// Translation key of the inline status message
    pub fn message_key(self) -> Option<&'static str> {
        match self {
            SubmitStatus::Idle => None,
            SubmitStatus::Sending => Some("contact.sending"),
            SubmitStatus::Success => Some("contact.success"),
            SubmitStatus::Error => Some("contact.error"),
            SubmitStatus::Invalid => Some("contact.invalid"),
        }
    }
}

/// JSON body of the POST
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    status: SubmitStatus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn is_sending(&self) -> bool {
        self.status == SubmitStatus::Sending
    }

    fn is_valid(&self) -> bool {
        let email = self.email.trim();
        !self.name.trim().is_empty()
            && !self.message.trim().is_empty()
            && email
                .split_once('@')
                .is_some_and(|(user, domain)| !user.is_empty() && !domain.is_empty())
    }

    /// Start a submission. Returns the message to send, or `None` if the
    /// form is invalid or a send is already in flight.
    pub fn begin_submit(&mut self) -> Option<ContactMessage> {
        if self.is_sending() {
            return None;
        }
        if !self.is_valid() {
            debug!("Contact form incomplete, not sending");
            self.status = SubmitStatus::Invalid;
            return None;
        }

        self.status = SubmitStatus::Sending;
        Some(ContactMessage {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        })
    }

    /// Record the outcome of the send started by [`ContactForm::begin_submit`]
    pub fn finish_submit(&mut self, result: Result<(), String>) {
        match result {
            Ok(()) => {
                info!("Contact message sent");
                self.name.clear();
                self.email.clear();
                self.message.clear();
                self.status = SubmitStatus::Success;
            }
            Err(err) => {
                warn!(error = %err, "Contact message failed");
                self.status = SubmitStatus::Error;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello".to_string(),
            ..ContactForm::default()
        }
    }

    #[test]
    fn test_incomplete_form_not_sent() {
        let mut form = ContactForm::new();
        form.name = "Ada".to_string();
        assert_eq!(form.begin_submit(), None);
        assert_eq!(form.status(), SubmitStatus::Invalid);
    }

    #[test]
    fn test_email_without_at_is_invalid() {
        let mut form = filled();
        form.email = "ada.example.com".to_string();
        assert_eq!(form.begin_submit(), None);
        assert_eq!(form.status(), SubmitStatus::Invalid);
    }

    #[test]
    fn test_success_clears_fields() {
        let mut form = filled();
        let msg = form.begin_submit().expect("valid form");
        assert_eq!(msg.email, "ada@example.com");
        assert_eq!(form.status(), SubmitStatus::Sending);

        form.finish_submit(Ok(()));
        assert_eq!(form.status(), SubmitStatus::Success);
        assert!(form.name.is_empty() && form.email.is_empty() && form.message.is_empty());
    }

    #[test]
    fn test_failure_keeps_fields() {
        let mut form = filled();
        form.begin_submit().expect("valid form");
        form.finish_submit(Err("connection refused".to_string()));

        assert_eq!(form.status(), SubmitStatus::Error);
        assert_eq!(form.name, "Ada");
        assert_eq!(form.message, "Hello");
    }

    #[test]
    fn test_no_second_submission_while_sending() {
        let mut form = filled();
        assert!(form.begin_submit().is_some());
        assert!(form.begin_submit().is_none());
        assert_eq!(form.status(), SubmitStatus::Sending);
    }
}
