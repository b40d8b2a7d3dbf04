use crate::mailer::{Mailer, NotifyError};
use crate::templates;
use rowstore::Claim;
use std::sync::Arc;

/// Outcome of a notification attempt that may be skipped by design.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Sent {
    Delivered,
    /// The claim has no customer email; nothing touched the transport.
    Skipped,
}

/// Composes claim notifications and hands them to the configured mailer.
/// One send per non-skipped call; failures surface to the caller.
#[derive(Clone)]
pub struct Notifier {
    mailer: Arc<dyn Mailer>,
    staff_mailbox: String,
}

impl Notifier {
    pub fn new(mailer: Arc<dyn Mailer>, staff_mailbox: String) -> Self {
        Notifier {
            mailer,
            staff_mailbox,
        }
    }

    pub async fn notify_staff(&self, claim: &Claim, row: Option<u64>) -> Result<(), NotifyError> {
        self.mailer
            .send(templates::staff_notice(claim, &self.staff_mailbox, row))
            .await
    }

    pub async fn notify_customer(&self, claim: &Claim) -> Result<Sent, NotifyError> {
        if claim.customer_email.is_empty() {
            tracing::debug!("claim has no customer email; skipping confirmation");
            return Ok(Sent::Skipped);
        }
        self.mailer
            .send(templates::customer_confirmation(claim))
            .await?;
        Ok(Sent::Delivered)
    }

    pub async fn notify_shipped(&self, claim: &Claim) -> Result<Sent, NotifyError> {
        if claim.customer_email.is_empty() {
            return Ok(Sent::Skipped);
        }
        self.mailer.send(templates::shipped_notice(claim)).await?;
        Ok(Sent::Delivered)
    }
}
