use async_trait::async_trait;
use lettre::{
    Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, MultiPart},
    transport::smtp::authentication::Credentials,
};
use storage::dto::contact::ContactMessage;
use thiserror::Error;

use crate::config::SmtpSettings;

const SENDER_NAME: &str = "Festival Website";

#[derive(Debug, Error)]
pub enum MailError {
    #[error("SMTP credentials are not configured")]
    MissingCredentials,

    #[error("Invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("Failed to build email: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("SMTP error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

/// Delivers contact-form submissions.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send_contact(&self, message: &ContactMessage) -> Result<(), MailError>;
}

struct Relay {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
    recipient: Mailbox,
}

/// Sends through an authenticated STARTTLS relay. Without credentials every
/// send fails with [`MailError::MissingCredentials`].
pub struct SmtpMailer {
    relay: Option<Relay>,
}

impl SmtpMailer {
    pub fn new(settings: Option<&SmtpSettings>) -> Result<Self, MailError> {
        let Some(settings) = settings else {
            return Ok(Self { relay: None });
        };

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.host)?
            .port(settings.port)
            .credentials(Credentials::new(
                settings.username.clone(),
                settings.password.clone(),
            ))
            .build();

        let sender = Mailbox::new(Some(SENDER_NAME.to_string()), settings.sender.parse()?);
        let recipient = Mailbox::new(None, settings.recipient.parse()?);

        Ok(Self {
            relay: Some(Relay {
                transport,
                sender,
                recipient,
            }),
        })
    }

    pub fn is_configured(&self) -> bool {
        self.relay.is_some()
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send_contact(&self, message: &ContactMessage) -> Result<(), MailError> {
        let relay = self.relay.as_ref().ok_or(MailError::MissingCredentials)?;

        let email = compose_contact_email(relay.sender.clone(), relay.recipient.clone(), message)?;
        relay.transport.send(email).await?;

        tracing::info!(from = %message.email, "Contact email relayed");
        Ok(())
    }
}

/// Builds the multipart (plain text + HTML) email for a contact submission,
/// with replies going to the submitter.
pub fn compose_contact_email(
    sender: Mailbox,
    recipient: Mailbox,
    message: &ContactMessage,
) -> Result<Message, MailError> {
    let reply_to = Mailbox::new(Some(message.name.clone()), message.email.parse::<Address>()?);

    let email = Message::builder()
        .from(sender)
        .to(recipient)
        .reply_to(reply_to)
        .subject(format!("Contact Form: {}", message.subject))
        .multipart(MultiPart::alternative_plain_html(
            plain_body(message),
            html_body(message),
        ))?;

    Ok(email)
}

fn plain_body(message: &ContactMessage) -> String {
    format!(
        "New contact form submission\n\nName: {}\nEmail: {}\nSubject: {}\n\nMessage:\n{}\n",
        message.name, message.email, message.subject, message.message
    )
}

fn html_body(message: &ContactMessage) -> String {
    format!(
        "<h2>New contact form submission</h2>\
         <p><strong>Name:</strong> {}</p>\
         <p><strong>Email:</strong> {}</p>\
         <p><strong>Subject:</strong> {}</p>\
         <p><strong>Message:</strong></p>\
         <p>{}</p>",
        escape_html(&message.name),
        escape_html(&message.email),
        escape_html(&message.subject),
        escape_html(&message.message).replace('\n', "<br>")
    )
}

fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message() -> ContactMessage {
        ContactMessage {
            name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            subject: "Stall booking".to_string(),
            message: "Hello <team>,\nIs there space left?".to_string(),
        }
    }

    fn mailbox(address: &str) -> Mailbox {
        Mailbox::new(None, address.parse().unwrap())
    }

    #[test]
    fn test_html_body_escapes_user_input() {
        let html = html_body(&message());
        assert!(html.contains("Hello &lt;team&gt;,<br>Is there space left?"));
        assert!(!html.contains("<team>"));
    }

    #[test]
    fn test_plain_body_keeps_text() {
        let plain = plain_body(&message());
        assert!(plain.contains("Name: Asha Rao"));
        assert!(plain.contains("Hello <team>,\nIs there space left?"));
    }

    #[test]
    fn test_compose_sets_headers() {
        let email = compose_contact_email(
            mailbox("site@festival.example"),
            mailbox("office@festival.example"),
            &message(),
        )
        .unwrap();

        let raw = String::from_utf8(email.formatted()).unwrap();
        assert!(raw.contains("Subject: Contact Form: Stall booking"));
        assert!(raw.contains("Reply-To: "));
        assert!(raw.contains("<asha@example.com>"));
        assert!(raw.contains("multipart/alternative"));
    }

    #[test]
    fn test_compose_rejects_bad_reply_address() {
        let mut bad = message();
        bad.email = "not-an-address".to_string();

        let result = compose_contact_email(
            mailbox("site@festival.example"),
            mailbox("office@festival.example"),
            &bad,
        );
        assert!(matches!(result, Err(MailError::Address(_))));
    }

    #[tokio::test]
    async fn test_unconfigured_mailer_fails() {
        let mailer = SmtpMailer::new(None).unwrap();
        assert!(!mailer.is_configured());

        let result = mailer.send_contact(&message()).await;
        assert!(matches!(result, Err(MailError::MissingCredentials)));
    }
}
