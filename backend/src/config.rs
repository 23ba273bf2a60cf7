//! Process-wide configuration, read once at startup.
//!
//! Values come from the environment (seeded from `.env.local` and `.env` by
//! `main`). `AppConfig::from_lookup` takes the lookup function as a parameter
//! so that tests can build a configuration without touching the process
//! environment.

use log::{info, warn};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Credential value shipped in example env files. Treated as "not configured".
pub const PLACEHOLDER_PASSWORD: &str = "your_app_password_here";

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
const DEFAULT_SMTP_PORT: u16 = 465;
const DEFAULT_SMTP_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?} ({reason})")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeEnvironment {
    Development,
    Production,
}

impl RuntimeEnvironment {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" | "" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(ConfigError::Invalid {
                key: "APP_ENV",
                value: value.to_string(),
                reason: "expected development or production".to_string(),
            }),
        }
    }
}

impl fmt::Display for RuntimeEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeEnvironment::Development => write!(f, "development"),
            RuntimeEnvironment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: RuntimeEnvironment,
    pub host: String,
    pub port: u16,
    pub mail: MailConfiguration,
    /// JSON file with project records to serve instead of the embedded set.
    pub projects_file: Option<PathBuf>,
}

/// SMTP settings for relaying contact messages.
#[derive(Clone, PartialEq, Eq)]
pub struct MailConfiguration {
    pub host: String,
    pub port: u16,
    /// Implicit TLS when true, STARTTLS otherwise.
    pub secure: bool,
    pub user: String,
    pub password: Option<String>,
    pub from: String,
    /// Recipient of contact messages. Also the address given to visitors when relaying fails.
    pub to: String,
    /// Upper bound for connection verification and for a send, each.
    pub timeout: Duration,
}

impl MailConfiguration {
    /// A credential is present and is not the example placeholder.
    pub fn is_complete(&self) -> bool {
        matches!(
            self.password.as_deref(),
            Some(password) if !password.trim().is_empty() && password != PLACEHOLDER_PASSWORD
        )
    }

    pub fn fallback_contact(&self) -> &str {
        &self.to
    }

    /// Logs the effective settings. The credential is reported only as set or missing.
    pub fn log_summary(&self) {
        info!(
            "SMTP configuration: host={} port={} secure={} user={} from={} to={} timeout={:?} password={}",
            self.host,
            self.port,
            self.secure,
            self.user,
            self.from,
            self.to,
            self.timeout,
            if self.is_complete() { "[SET]" } else { "[MISSING]" }
        );
    }
}

impl fmt::Debug for MailConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailConfiguration")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("secure", &self.secure)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .field("from", &self.from)
            .field("to", &self.to)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let environment = match var("APP_ENV").or_else(|| var("NODE_ENV")) {
            Some(value) => RuntimeEnvironment::parse(&value)?,
            None => RuntimeEnvironment::Development,
        };

        let host = var("HOST").unwrap_or_else(|| match environment {
            RuntimeEnvironment::Development => "127.0.0.1".to_string(),
            RuntimeEnvironment::Production => "0.0.0.0".to_string(),
        });
        let port = parse_or("PORT", var("PORT"), DEFAULT_PORT)?;

        let smtp_port = parse_or("SMTP_PORT", var("SMTP_PORT"), DEFAULT_SMTP_PORT)?;
        let secure = match var("SMTP_SECURE") {
            Some(value) => parse_bool("SMTP_SECURE", &value)?,
            None => smtp_port == 465,
        };
        let timeout_secs = parse_or(
            "SMTP_TIMEOUT_SECS",
            var("SMTP_TIMEOUT_SECS"),
            DEFAULT_SMTP_TIMEOUT_SECS,
        )?;

        let user = var("SMTP_USER").unwrap_or_default();
        let from = var("EMAIL_FROM").unwrap_or_else(|| user.clone());
        let to = var("EMAIL_TO").unwrap_or_else(|| from.clone());
        if to.is_empty() {
            warn!("Neither EMAIL_TO, EMAIL_FROM nor SMTP_USER is set; contact messages have no recipient");
        }

        let mail = MailConfiguration {
            host: var("SMTP_HOST").unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string()),
            port: smtp_port,
            secure,
            user,
            password: var("SMTP_PASSWORD"),
            from,
            to,
            timeout: Duration::from_secs(timeout_secs),
        };

        Ok(Self {
            environment,
            host,
            port,
            mail,
            projects_file: var("PROJECTS_FILE").map(PathBuf::from),
        })
    }
}

fn parse_or<T>(key: &'static str, value: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    match value {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            value,
            reason: e.to_string(),
        }),
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::Invalid {
            key,
            value: value.to_string(),
            reason: "expected true or false".to_string(),
        }),
    }
}
