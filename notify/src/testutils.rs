use crate::mailer::{Email, Mailer, NotifyError};
use async_trait::async_trait;
use std::sync::Mutex;

/// In-memory mailer for tests. Records every send; optionally fails each
/// call to exercise partial-failure paths.
#[derive(Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<Email>>,
    pub fail: bool,
}

impl RecordingMailer {
    pub fn failing() -> Self {
        RecordingMailer {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: Email) -> Result<(), NotifyError> {
        if self.fail {
            return Err(NotifyError::Address(
                "@".parse::<lettre::Address>().unwrap_err(),
            ));
        }
        self.sent.lock().unwrap().push(email);
        Ok(())
    }
}
