use contact_desk_shared::{Result, contact::ContactForm};
use validator::Validate;

use crate::{ContactStore, NewContact};

/// A submission bound for storage. `phone` is optional here.
#[derive(Debug, Validate)]
pub struct SubmitInput {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub email: String,
    pub phone: Option<String>,
    #[validate(length(min = 1))]
    pub message: String,
}

impl From<ContactForm> for SubmitInput {
    fn from(form: ContactForm) -> Self {
        let phone = form.phone().map(str::to_owned);

        Self {
            name: form.name,
            email: form.email,
            phone,
            message: form.message,
        }
    }
}

impl ContactStore {
    /// Validate and persist one submission, returning the new row id.
    ///
    /// Nothing is written when validation fails.
    pub async fn submit(&self, input: SubmitInput) -> Result<i64> {
        input.validate()?;

        let id = self
            .insert(NewContact {
                name: &input.name,
                email: &input.email,
                phone: input.phone.as_deref(),
                message: &input.message,
            })
            .await?;

        tracing::info!(id, "contact message stored");

        Ok(id)
    }
}
