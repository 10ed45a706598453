use storage::dto::contact::ContactMessage;

use crate::mail::{MailError, Mailer};

/// Relay one contact submission by email. No retry on failure.
pub async fn send_contact_message(mailer: &dyn Mailer, message: &ContactMessage) -> Result<(), MailError> {
    mailer.send_contact(message).await
}
