//! Outbound mail.
//!
//! Request handlers only see the `MailTransport` trait. `SmtpMailer` is the
//! production implementation; tests substitute a recording fake.

mod message;
mod smtp;

use async_trait::async_trait;
use thiserror::Error;

pub use message::OutgoingMessage;
pub use smtp::{is_deliverable_address, SmtpMailer};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MailError {
    /// The SMTP session could not be established or authenticated.
    #[error("SMTP connectivity error: {0}")]
    Connectivity(String),

    /// The server refused the message or the session broke mid-send.
    #[error("SMTP delivery error: {0}")]
    Delivery(String),

    #[error("invalid email address: {0}")]
    InvalidAddress(String),
}

/// A single-shot mail relay. Each call opens its own session; nothing is pooled.
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn verify_connectivity(&self) -> Result<(), MailError>;

    /// Sends one message and returns the server's acceptance line.
    async fn send(&self, message: OutgoingMessage) -> Result<String, MailError>;
}

#[cfg(test)]
pub mod testing;
