use serde::Deserialize;

fn default_port() -> u16 {
    587
}

fn default_timeout_secs() -> u64 {
    30
}

/// SMTP transport settings. The transport always negotiates STARTTLS on the
/// configured port.
#[derive(Clone, Debug, Deserialize)]
pub struct SmtpConfig {
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub user: String,
    pub password: String,
    /// Sender mailbox, e.g. `"ACS Warranty <bot@example.com>"`.
    pub from: String,
    /// Destination for internal staff notices.
    pub staff_mailbox: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SmtpConfigError {
    #[error("smtp host must not be empty")]
    EmptyHost,
    #[error("smtp from mailbox must not be empty")]
    EmptyFrom,
    #[error("smtp staff mailbox must not be empty")]
    EmptyStaffMailbox,
}

impl SmtpConfig {
    pub fn validate(&self) -> Result<(), SmtpConfigError> {
        if self.host.is_empty() {
            return Err(SmtpConfigError::EmptyHost);
        }
        if self.from.is_empty() {
            return Err(SmtpConfigError::EmptyFrom);
        }
        if self.staff_mailbox.is_empty() {
            return Err(SmtpConfigError::EmptyStaffMailbox);
        }
        Ok(())
    }
}
