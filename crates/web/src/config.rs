use anyhow::{Context, Result};

const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
const DEFAULT_SMTP_PORT: u16 = 587;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub api_keys: String,
    pub smtp: Option<SmtpSettings>,
}

/// Credentials and addresses for the contact-form relay
#[derive(Clone)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub sender: String,
    pub recipient: String,
}

impl std::fmt::Debug for SmtpSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"***")
            .field("sender", &self.sender)
            .field("recipient", &self.recipient)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").context("Cannot load HOST env variable")?,
            port: std::env::var("PORT")
                .context("Cannot load PORT env variable")?
                .parse()
                .context("PORT must be a number")?,
            database_url: std::env::var("DATABASE_URL")
                .context("Cannot load DATABASE_URL env variable")?,
            api_keys: std::env::var("API_KEYS").unwrap_or_default(),
            smtp: SmtpSettings::from_env()?,
        })
    }
}

impl SmtpSettings {
    /// Returns `None` when no SMTP credentials are configured; the contact
    /// endpoint then fails with a configuration error.
    pub fn from_env() -> Result<Option<Self>> {
        let (Some(username), Some(password)) = (non_empty_var("SMTP_USERNAME"), non_empty_var("SMTP_PASSWORD"))
        else {
            return Ok(None);
        };

        let port = match non_empty_var("SMTP_PORT") {
            Some(port) => port.parse().context("SMTP_PORT must be a number")?,
            None => DEFAULT_SMTP_PORT,
        };

        let sender = non_empty_var("CONTACT_SENDER").unwrap_or_else(|| username.clone());
        let recipient = non_empty_var("CONTACT_RECIPIENT").unwrap_or_else(|| sender.clone());

        Ok(Some(Self {
            host: non_empty_var("SMTP_HOST").unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string()),
            port,
            username,
            password,
            sender,
            recipient,
        }))
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
