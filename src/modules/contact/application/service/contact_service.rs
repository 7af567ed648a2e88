// src/modules/contact/application/service/contact_service.rs

use std::sync::{Arc, LazyLock};

use async_trait::async_trait;
use chrono::Utc;
use regex::Regex;
use tracing::info;

use crate::contact::application::ports::incoming::use_cases::{
    ContactAck, ContactSubmission, SubmitContactError, SubmitContactUseCase,
};
use crate::contact::application::ports::outgoing::email_sender::EmailSender;

// local@domain.tld shape; anything beyond that is the provider's problem.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

const SUCCESS_MESSAGE: &str =
    "Your message has been sent successfully! I'll get back to you soon.";

// ============================================================================
// Service Implementation
// ============================================================================

pub struct ContactService {
    /// `None` when no email credential was configured at startup; submissions
    /// then fail with `NotConfigured` without attempting a send.
    sender: Option<Arc<dyn EmailSender>>,
    recipient: String,
}

impl ContactService {
    pub fn new(sender: Option<Arc<dyn EmailSender>>, recipient: &str) -> Self {
        Self {
            sender,
            recipient: recipient.to_string(),
        }
    }

    fn validate(submission: &ContactSubmission) -> Result<(), SubmitContactError> {
        let all_present = [
            &submission.name,
            &submission.email,
            &submission.subject,
            &submission.message,
        ]
        .iter()
        .all(|field| !field.trim().is_empty());

        if !all_present {
            return Err(SubmitContactError::Validation(
                "All fields are required".to_string(),
            ));
        }

        if !EMAIL_PATTERN.is_match(&submission.email) {
            return Err(SubmitContactError::Validation(
                "Please provide a valid email address".to_string(),
            ));
        }

        Ok(())
    }

    fn compose_body(submission: &ContactSubmission) -> String {
        format!(
            "New contact form submission from {} ({})\n\nSubject: {}\n\nMessage:\n{}\n\nSent on {}",
            submission.name,
            submission.email,
            submission.subject,
            submission.message,
            Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
        )
    }
}

#[async_trait]
impl SubmitContactUseCase for ContactService {
    async fn execute(
        &self,
        submission: ContactSubmission,
    ) -> Result<ContactAck, SubmitContactError> {
        // Validation always runs before touching the provider.
        Self::validate(&submission)?;

        let sender = self.sender.as_ref().ok_or(SubmitContactError::NotConfigured)?;

        let subject = format!("Portfolio Contact: {}", submission.subject);
        let body = Self::compose_body(&submission);

        sender
            .send_email(&self.recipient, &subject, &body)
            .await
            .map_err(SubmitContactError::SendFailed)?;

        info!("Contact message relayed for {}", submission.email);

        Ok(ContactAck {
            message: SUCCESS_MESSAGE.to_string(),
        })
    }
}
