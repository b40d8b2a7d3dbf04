use crate::config::Config;
use notify::Notifier;
use rowstore::{RowStoreClient, RowStoreError};
use std::sync::Arc;

/// Shared handler state. Everything here is constructed once at startup;
/// nothing is mutated per request.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub rowstore: RowStoreClient,
    pub notifier: Notifier,
}

impl AppState {
    pub fn new(config: Config, notifier: Notifier) -> Result<Self, RowStoreError> {
        let rowstore = RowStoreClient::new(&config.rowstore)?;
        Ok(AppState {
            config: Arc::new(config),
            rowstore,
            notifier,
        })
    }
}
