//! Outbound notifications sent by the services.

use async_trait::async_trait;
use tracing::{info, instrument};

use crate::error::EmailError;

/// Sends email on behalf of the services.
///
/// Implementations report delivery as `Ok(true)`; `Ok(false)` means the
/// message was accepted but not delivered.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<bool, EmailError>;

    async fn send_welcome_email(&self, email: &str, name: &str) -> Result<bool, EmailError> {
        let body = format!("Hello {name}, welcome to our platform!");
        self.send_email(email, "Welcome!", &body).await
    }

    // No service flow issues reset tokens yet.
    #[allow(dead_code)]
    async fn send_password_reset_email(&self, email: &str, token: &str) -> Result<bool, EmailError> {
        let body = format!("Click here to reset your password. Token: {token}");
        self.send_email(email, "Password Reset Request", &body).await
    }
}

/// Logs every message instead of delivering it. Always succeeds.
#[derive(Debug, Clone, Default)]
pub struct MockEmailSender;

#[async_trait]
impl EmailSender for MockEmailSender {
    #[instrument(name = "mock_email", skip(self, body))]
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<bool, EmailError> {
        info!(body = %body, "Email sent");
        Ok(true)
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{RecordingEmailSender, SentEmail};
    use super::*;

    #[tokio::test]
    async fn test_mock_sender_always_succeeds() {
        let sender = MockEmailSender;
        assert_eq!(sender.send_email("a@b.com", "Hi", "There").await, Ok(true));
        assert_eq!(sender.send_welcome_email("a@b.com", "Ann").await, Ok(true));
    }

    #[tokio::test]
    async fn test_welcome_email_content() {
        let sender = RecordingEmailSender::default();
        sender.send_welcome_email("ann@example.com", "Ann Lee").await.unwrap();

        assert_eq!(
            sender.sent(),
            vec![SentEmail {
                to: "ann@example.com".to_string(),
                subject: "Welcome!".to_string(),
                body: "Hello Ann Lee, welcome to our platform!".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_password_reset_email_content() {
        let sender = RecordingEmailSender::default();
        sender.send_password_reset_email("ann@example.com", "t0k3n").await.unwrap();

        let sent = sender.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].subject, "Password Reset Request");
        assert_eq!(sent[0].body, "Click here to reset your password. Token: t0k3n");
    }
}
