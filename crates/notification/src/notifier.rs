use std::sync::Arc;

use anyhow::Context;
use askama::Template;
use contact_desk_shared::{Result, contact::ContactForm};
use lettre::{Address, message::Mailbox};
use validator::Validate;

use crate::{
    Email, EmailConfig, Mailer,
    template::{ContactHtmlTemplate, ContactPlainTemplate},
};

/// A submission bound for the inbox. Every field is required here, phone included.
#[derive(Debug, Validate)]
pub struct NotifyInput {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub email: String,
    #[validate(length(min = 1))]
    pub phone: String,
    #[validate(length(min = 1))]
    pub message: String,
}

impl From<ContactForm> for NotifyInput {
    fn from(form: ContactForm) -> Self {
        Self {
            name: form.name,
            email: form.email,
            phone: form.phone.unwrap_or_default(),
            message: form.message,
        }
    }
}

/// Relays contact submissions to the configured inbox.
#[derive(Clone)]
pub struct Notifier {
    mailer: Arc<dyn Mailer>,
    sender: String,
    inbox: String,
    subject: String,
}

impl Notifier {
    pub fn new(config: &EmailConfig, mailer: Arc<dyn Mailer>) -> Self {
        Self {
            mailer,
            sender: config.sender().to_owned(),
            inbox: config.inbox().to_owned(),
            subject: config.subject.to_owned(),
        }
    }

    /// Validate, render, check the relay, then send.
    ///
    /// The message is only sent once the relay has accepted a session.
    pub async fn notify(&self, input: NotifyInput) -> Result<()> {
        input.validate()?;

        let email = self.compose(&input)?;

        self.mailer.verify().await?;
        self.mailer.send(email).await?;

        tracing::info!(to = %self.inbox, "contact notification sent");

        Ok(())
    }

    fn compose(&self, input: &NotifyInput) -> anyhow::Result<Email> {
        let sender: Address = self
            .sender
            .parse()
            .context("Failed to parse sender address")?;
        let to: Mailbox = self.inbox.parse().context("Failed to parse inbox address")?;

        let reply_to = match input.email.parse::<Mailbox>() {
            Ok(mailbox) => Some(Mailbox::new(
                mailbox.name.as_deref().and_then(display_name),
                mailbox.email,
            )),
            Err(err) => {
                tracing::warn!(error = %err, "submitter email is not a mailbox, reply-to left out");
                None
            }
        };

        let html = ContactHtmlTemplate {
            name: &input.name,
            email: &input.email,
            phone: &input.phone,
            message: &input.message,
        }
        .render()
        .context("Failed to render HTML email template")?;

        let plain = ContactPlainTemplate {
            name: &input.name,
            email: &input.email,
            phone: &input.phone,
            message: &input.message,
        }
        .render()
        .context("Failed to render plain text email template")?;

        Ok(Email {
            from: Mailbox::new(display_name(&input.name), sender),
            to,
            reply_to,
            subject: self.subject.to_owned(),
            html,
            plain,
        })
    }
}

/// Folds a submitted name into a single header-safe line. Control characters
/// become spaces and runs of whitespace collapse; nothing left means no name.
fn display_name(name: &str) -> Option<String> {
    let cleaned: String = name
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();
    let cleaned = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");

    (!cleaned.is_empty()).then_some(cleaned)
}
