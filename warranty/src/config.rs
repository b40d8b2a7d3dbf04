use notify::{SmtpConfig, SmtpConfigError};
use rowstore::{RowStoreConfig, RowStoreConfigError};
use serde::Deserialize;
use std::fs::File;

#[derive(Clone, Debug, Deserialize)]
pub struct Listener {
    pub host: String,
    pub port: u16,
}

impl Default for Listener {
    fn default() -> Self {
        Listener {
            host: "0.0.0.0".into(),
            port: 4000,
        }
    }
}

/// Process-wide configuration, loaded once at startup and read-only after.
#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub listener: Listener,
    pub rowstore: RowStoreConfig,
    /// Shared secret for the internal tooling surface. When absent the
    /// service still runs, but every `/internal/*` request is rejected.
    pub internal_key: Option<String>,
    pub smtp: SmtpConfig,
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("could not load config from file: {0}")]
    Load(#[from] std::io::Error),
    #[error("could not parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("listener port cannot be 0")]
    InvalidPort,
    #[error("internal_key must not be empty when set")]
    EmptyInternalKey,
    #[error(transparent)]
    RowStore(#[from] RowStoreConfigError),
    #[error(transparent)]
    Smtp(#[from] SmtpConfigError),
}

impl Config {
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        let config: Config = serde_yaml::from_reader(file)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.listener.port == 0 {
            return Err(ConfigError::InvalidPort);
        }
        if self.internal_key.as_deref() == Some("") {
            return Err(ConfigError::EmptyInternalKey);
        }
        self.rowstore.validate()?;
        self.smtp.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const VALID_YAML: &str = r#"
rowstore:
    url: https://script.example.com/exec
    secret: phase2-secret
internal_key: internal-secret
smtp:
    host: smtp.example.com
    user: bot@example.com
    password: app-password
    from: "ACS Warranty <bot@example.com>"
    staff_mailbox: staff@example.com
"#;

    fn write_tmp_file(s: &str) -> tempfile::NamedTempFile {
        let mut tmp = tempfile::NamedTempFile::new().expect("create temp file");
        write!(tmp, "{}", s).expect("write yaml");
        tmp
    }

    #[test]
    fn full_config_round_trips() {
        let tmp = write_tmp_file(VALID_YAML);
        let config = Config::from_file(tmp.path()).expect("load config");
        config.validate().expect("valid config");

        assert_eq!(config.listener.port, 4000);
        assert_eq!(config.listener.host, "0.0.0.0");
        assert_eq!(config.rowstore.secret, "phase2-secret");
        assert_eq!(config.internal_key.as_deref(), Some("internal-secret"));
        assert_eq!(config.smtp.staff_mailbox, "staff@example.com");
    }

    #[test]
    fn internal_key_may_be_absent() {
        let yaml = VALID_YAML.replace("internal_key: internal-secret\n", "");
        let tmp = write_tmp_file(&yaml);
        let config = Config::from_file(tmp.path()).expect("load config");
        config.validate().expect("valid config");
        assert!(config.internal_key.is_none());
    }

    #[test]
    fn empty_internal_key_is_rejected() {
        let yaml = VALID_YAML.replace(
            "internal_key: internal-secret",
            "internal_key: \"\"",
        );
        let tmp = write_tmp_file(&yaml);
        let config = Config::from_file(tmp.path()).expect("load config");
        assert!(matches!(
            config.validate().unwrap_err(),
            ConfigError::EmptyInternalKey
        ));
    }

    #[test]
    fn insecure_rowstore_url_is_rejected() {
        let yaml = VALID_YAML.replace("https://script.example.com", "http://script.example.com");
        let tmp = write_tmp_file(&yaml);
        let config = Config::from_file(tmp.path()).expect("load config");
        assert!(matches!(
            config.validate().unwrap_err(),
            ConfigError::RowStore(RowStoreConfigError::InsecureUrl(_))
        ));
    }

    #[test]
    fn missing_rowstore_section_fails_to_parse() {
        let tmp = write_tmp_file("listener:\n    host: 0.0.0.0\n    port: 4000\n");
        assert!(matches!(
            Config::from_file(tmp.path()).unwrap_err(),
            ConfigError::Parse(_)
        ));
    }
}
