use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_CONTACT_TIMEOUT_SECS: u64 = 10;
pub const MAX_CONTACT_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Invalid {key} value '{value}': {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Where contact mail goes out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SmtpConfig {
    /// Authenticated TLS relay (production).
    Relay {
        server: String,
        username: String,
        password: String,
    },
    /// Plain local catcher such as Mailpit (`RUST_ENV=test`).
    Local { host: String, port: u16 },
    /// No SMTP configured: messages are only logged.
    Disabled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub rust_env: String,
    pub host: String,
    pub port: u16,
    pub content_path: PathBuf,
    pub theme_store_path: PathBuf,
    /// Falls back to the owner's email from the content document.
    pub contact_recipient: Option<String>,
    pub contact_timeout: Duration,
    pub email_from: String,
    pub smtp: SmtpConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let rust_env = var("RUST_ENV").unwrap_or_else(|| "development".to_string());
        let host = var("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = parse_or("PORT", var("PORT"), 8080u16)?;

        let content_path = var("CONTENT_PATH")
            .unwrap_or_else(|| "content/site.json".to_string())
            .into();
        let theme_store_path = var("THEME_STORE_PATH")
            .unwrap_or_else(|| "data/preferences.json".to_string())
            .into();

        let timeout_secs = parse_or(
            "CONTACT_TIMEOUT_SECS",
            var("CONTACT_TIMEOUT_SECS"),
            DEFAULT_CONTACT_TIMEOUT_SECS,
        )?;
        if !(1..=MAX_CONTACT_TIMEOUT_SECS).contains(&timeout_secs) {
            return Err(ConfigError::Invalid {
                key: "CONTACT_TIMEOUT_SECS",
                value: timeout_secs.to_string(),
                reason: format!("must be between 1 and {}", MAX_CONTACT_TIMEOUT_SECS),
            });
        }

        let smtp = if rust_env == "test" {
            SmtpConfig::Local {
                host: var("SMTP_HOST").unwrap_or_else(|| "localhost".to_string()),
                port: parse_or("SMTP_PORT", var("SMTP_PORT"), 1025u16)?,
            }
        } else if let Some(server) = var("SMTP_SERVER") {
            SmtpConfig::Relay {
                server,
                username: var("SMTP_USERNAME").ok_or(ConfigError::Missing("SMTP_USERNAME"))?,
                password: var("SMTP_PASSWORD").ok_or(ConfigError::Missing("SMTP_PASSWORD"))?,
            }
        } else {
            SmtpConfig::Disabled
        };

        let email_from = match (&smtp, var("EMAIL_FROM")) {
            (_, Some(from)) => from,
            (SmtpConfig::Disabled, None) => "noreply@localhost".to_string(),
            (_, None) => return Err(ConfigError::Missing("EMAIL_FROM")),
        };

        Ok(Self {
            rust_env,
            host,
            port,
            content_path,
            theme_store_path,
            contact_recipient: var("CONTACT_RECIPIENT"),
            contact_timeout: Duration::from_secs(timeout_secs),
            email_from,
            smtp,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            reason: e.to_string(),
            value,
        }),
    }
}
