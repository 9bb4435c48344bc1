use serde::Deserialize;

/// One contact-form payload as it arrives from the website.
///
/// Every field defaults to empty so that a missing key and an empty string
/// are rejected by the same validation rule.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub message: String,
}

impl ContactForm {
    /// Phone number with empty values folded into `None`.
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref().filter(|phone| !phone.is_empty())
    }
}
