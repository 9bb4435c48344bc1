mod config;
mod mailer;
mod notifier;
pub(crate) mod template;

pub use config::*;
pub use mailer::*;
pub use notifier::*;
