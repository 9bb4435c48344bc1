use anyhow::Result;
use contact_desk_notification::{Mailer, SmtpMailer};

/// Open one session against the configured relay and report the outcome.
pub async fn verify(config: crate::config::Config) -> Result<()> {
    let mailer = SmtpMailer::new(&config.email)?;

    match mailer.verify().await {
        Ok(()) => {
            tracing::info!(
                smtp_host = %config.email.smtp_host,
                smtp_port = config.email.smtp_port,
                "SMTP relay accepted the session"
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!(
                error = ?e,
                smtp_host = %config.email.smtp_host,
                smtp_port = config.email.smtp_port,
                "SMTP relay check failed"
            );
            Err(e)
        }
    }
}
