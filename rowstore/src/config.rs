use serde::Deserialize;
use url::Url;

fn default_timeout_secs() -> u64 {
    30
}

/// Connection settings for the external row-store endpoint.
///
/// Using `url::Url` here means a malformed endpoint is rejected while the
/// config file is being parsed, before any request is attempted.
#[derive(Clone, Debug, Deserialize)]
pub struct RowStoreConfig {
    pub url: Url,
    pub secret: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RowStoreConfigError {
    #[error("row-store url must use https: {0}")]
    InsecureUrl(String),
    #[error("row-store secret must not be empty")]
    EmptySecret,
}

impl RowStoreConfig {
    /// Plain http is only allowed toward loopback hosts (local stubs).
    pub fn validate(&self) -> Result<(), RowStoreConfigError> {
        if self.url.scheme() != "https" && !is_loopback(&self.url) {
            return Err(RowStoreConfigError::InsecureUrl(self.url.to_string()));
        }
        if self.secret.is_empty() {
            return Err(RowStoreConfigError::EmptySecret);
        }
        Ok(())
    }
}

fn is_loopback(url: &Url) -> bool {
    match url.host() {
        Some(url::Host::Domain(domain)) => domain == "localhost",
        Some(url::Host::Ipv4(ip)) => ip.is_loopback(),
        Some(url::Host::Ipv6(ip)) => ip.is_loopback(),
        None => false,
    }
}
