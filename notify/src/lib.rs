pub mod config;
pub mod mailer;
pub mod notifier;
pub mod templates;
pub mod testutils;

pub use config::{SmtpConfig, SmtpConfigError};
pub use mailer::{Email, Mailer, NotifyError, SmtpMailer};
pub use notifier::{Notifier, Sent};
