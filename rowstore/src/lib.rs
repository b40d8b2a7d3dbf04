pub mod action;
pub mod claim;
pub mod client;
pub mod config;

pub use action::Action;
pub use claim::{Claim, claim_row};
pub use client::{AppendOutcome, RowStoreClient, RowStoreError};
pub use config::{RowStoreConfig, RowStoreConfigError};
