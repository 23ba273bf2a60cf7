use async_trait::async_trait;
use lettre::address::Address;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::smtp::client::{Tls, TlsParameters};
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use log::debug;
use tokio::time::timeout;

use super::{MailError, MailTransport, OutgoingMessage};
use crate::config::MailConfiguration;

/// `MailTransport` over SMTP.
///
/// Holds only the configuration: every call builds a new transport, so each
/// verification and each send pays for its own TCP/TLS handshake and login.
pub struct SmtpMailer {
    config: MailConfiguration,
}

impl SmtpMailer {
    pub fn new(config: MailConfiguration) -> Self {
        Self { config }
    }

    /// Implicit TLS when `secure`, otherwise plaintext upgraded with STARTTLS
    /// whenever the server offers it.
    fn connect(&self) -> Result<AsyncSmtpTransport<Tokio1Executor>, MailError> {
        let host = self.config.host.as_str();
        let builder = if self.config.secure {
            AsyncSmtpTransport::<Tokio1Executor>::relay(host)
                .map_err(|e| MailError::Connectivity(e.to_string()))?
        } else {
            let tls = TlsParameters::new(host.to_string())
                .map_err(|e| MailError::Connectivity(e.to_string()))?;
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
                .tls(Tls::Opportunistic(tls))
        };

        let mut builder = builder
            .port(self.config.port)
            .timeout(Some(self.config.timeout));

        if let Some(password) = &self.config.password {
            builder = builder.credentials(Credentials::new(
                self.config.user.clone(),
                password.clone(),
            ));
        }

        Ok(builder.build())
    }
}

#[async_trait]
impl MailTransport for SmtpMailer {
    async fn verify_connectivity(&self) -> Result<(), MailError> {
        let transport = self.connect()?;
        debug!(
            "Verifying SMTP connectivity to {}:{}",
            self.config.host, self.config.port
        );

        match timeout(self.config.timeout, transport.test_connection()).await {
            Ok(Ok(true)) => Ok(()),
            Ok(Ok(false)) => Err(MailError::Connectivity(
                "server did not accept the connection".to_string(),
            )),
            Ok(Err(e)) => Err(MailError::Connectivity(e.to_string())),
            Err(_) => Err(MailError::Connectivity(format!(
                "timed out after {:?}",
                self.config.timeout
            ))),
        }
    }

    async fn send(&self, message: OutgoingMessage) -> Result<String, MailError> {
        let email = build_message(&message)?;
        let transport = self
            .connect()
            .map_err(|e| MailError::Delivery(e.to_string()))?;

        match timeout(self.config.timeout, transport.send(email)).await {
            Ok(Ok(response)) => Ok(response.message().collect::<Vec<_>>().join(" ")),
            Ok(Err(e)) => Err(MailError::Delivery(e.to_string())),
            Err(_) => Err(MailError::Delivery(format!(
                "timed out after {:?}",
                self.config.timeout
            ))),
        }
    }
}

/// Whether lettre can use `raw` as a mailbox address. Stricter than the
/// form's pattern: it also rejects characters such as `,` and `<` in the local part.
pub fn is_deliverable_address(raw: &str) -> bool {
    parse_address(raw).is_ok()
}

fn parse_address(raw: &str) -> Result<Address, MailError> {
    raw.trim()
        .parse::<Address>()
        .map_err(|e| MailError::InvalidAddress(format!("{raw}: {e}")))
}

/// Converts an `OutgoingMessage` into a `multipart/alternative` lettre message.
pub(crate) fn build_message(message: &OutgoingMessage) -> Result<Message, MailError> {
    let from = Mailbox::new(
        Some(message.from_name.clone()),
        parse_address(&message.from_address)?,
    );
    let to = Mailbox::new(None, parse_address(&message.to)?);
    let reply_to = Mailbox::new(None, parse_address(&message.reply_to)?);

    Message::builder()
        .from(from)
        .to(to)
        .reply_to(reply_to)
        .subject(message.subject.clone())
        .multipart(MultiPart::alternative_plain_html(
            message.text_body.clone(),
            message.html_body.clone(),
        ))
        .map_err(|e| MailError::Delivery(e.to_string()))
}
