//! Outbound mail transport using lettre

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use lettre::{
    Message, SmtpTransport, Transport,
    message::{Mailbox, MultiPart},
    transport::smtp::authentication::Credentials,
};

use crate::{EmailConfig, TlsMode};

/// A fully addressed notification, ready to hand to a [`Mailer`].
#[derive(Debug, Clone)]
pub struct Email {
    pub from: Mailbox,
    pub to: Mailbox,
    pub reply_to: Option<Mailbox>,
    pub subject: String,
    pub html: String,
    pub plain: String,
}

impl Email {
    pub fn to_message(&self) -> anyhow::Result<Message> {
        let mut builder = Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(self.subject.clone());

        if let Some(reply_to) = &self.reply_to {
            builder = builder.reply_to(reply_to.clone());
        }

        let message = builder
            .multipart(MultiPart::alternative_plain_html(
                self.plain.clone(),
                self.html.clone(),
            ))
            .context("Failed to build email message")?;

        Ok(message)
    }
}

/// Transport seam between the notifier and the mail relay.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Open a session and make sure the relay accepts it, credentials included.
    async fn verify(&self) -> anyhow::Result<()>;

    async fn send(&self, email: Email) -> anyhow::Result<()>;
}

/// SMTP relay client. lettre's transport is blocking, so every call runs on
/// the blocking thread pool.
#[derive(Clone)]
pub struct SmtpMailer {
    transport: SmtpTransport,
}

impl SmtpMailer {
    pub fn new(config: &EmailConfig) -> anyhow::Result<Self> {
        let builder = match config.tls {
            TlsMode::Wrapper => SmtpTransport::relay(&config.smtp_host)
                .context("Failed to create SMTP transport")?,
            TlsMode::Starttls => SmtpTransport::starttls_relay(&config.smtp_host)
                .context("Failed to create SMTP transport")?,
            TlsMode::None => SmtpTransport::builder_dangerous(&config.smtp_host),
        };

        let mut builder = builder
            .port(config.smtp_port)
            .timeout(Some(Duration::from_secs(config.timeout_seconds)));

        if config.has_credentials() {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                tls = ?config.tls,
                "Email transport initialized with authentication"
            );

            builder = builder.credentials(Credentials::new(
                config.smtp_username.clone(),
                config.smtp_password.clone(),
            ));
        } else {
            tracing::warn!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                tls = ?config.tls,
                "SMTP credentials not configured, using unauthenticated connection"
            );
        }

        Ok(Self {
            transport: builder.build(),
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn verify(&self) -> anyhow::Result<()> {
        let transport = self.transport.clone();
        let connected = tokio::task::spawn_blocking(move || transport.test_connection())
            .await?
            .context("SMTP relay refused the session")?;

        if !connected {
            anyhow::bail!("SMTP relay closed the session before it was ready");
        }

        Ok(())
    }

    async fn send(&self, email: Email) -> anyhow::Result<()> {
        let message = email.to_message()?;
        let transport = self.transport.clone();

        tracing::info!(to = %email.to, subject = %email.subject, "Sending email");

        tokio::task::spawn_blocking(move || transport.send(&message))
            .await?
            .context("SMTP relay rejected the message")?;

        Ok(())
    }
}
