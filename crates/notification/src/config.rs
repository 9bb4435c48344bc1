use serde::Deserialize;

/// How the SMTP session is secured.
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TlsMode {
    /// Implicit TLS from the first byte, usually port 465.
    #[default]
    Wrapper,
    /// Plain connection upgraded with STARTTLS, usually port 587.
    Starttls,
    /// No encryption. Only meant for a local relay such as MailDev.
    None,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    #[serde(default)]
    pub smtp_username: String,
    #[serde(default)]
    pub smtp_password: String,
    #[serde(default)]
    pub tls: TlsMode,
    /// Sender address. Falls back to `smtp_username` when empty.
    #[serde(default)]
    pub from_address: String,
    /// Inbox that receives the notifications. Falls back to `smtp_username` when empty.
    #[serde(default)]
    pub contact_address: String,
    #[serde(default = "default_subject")]
    pub subject: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            smtp_username: String::new(),
            smtp_password: String::new(),
            tls: TlsMode::default(),
            from_address: String::new(),
            contact_address: String::new(),
            subject: default_subject(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl EmailConfig {
    pub fn sender(&self) -> &str {
        if self.from_address.is_empty() {
            &self.smtp_username
        } else {
            &self.from_address
        }
    }

    pub fn inbox(&self) -> &str {
        if self.contact_address.is_empty() {
            &self.smtp_username
        } else {
            &self.contact_address
        }
    }

    pub fn has_credentials(&self) -> bool {
        !self.smtp_username.is_empty() && !self.smtp_password.is_empty()
    }
}

fn default_smtp_host() -> String {
    "smtp.gmail.com".to_string()
}

fn default_smtp_port() -> u16 {
    465
}

fn default_subject() -> String {
    "New Client Inquiry".to_string()
}

fn default_timeout_seconds() -> u64 {
    10
}
