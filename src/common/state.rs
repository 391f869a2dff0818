use std::sync::Arc;
use tokio::sync::mpsc;

use crate::backend::BackendClient;
use crate::config::Config;
use crate::view::DashboardUpdate;

/// Sender half of the channel fetch tasks use to hand results to the UI.
pub type UpdateSender = mpsc::UnboundedSender<DashboardUpdate>;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub client: Arc<BackendClient>,
    pub update_tx: UpdateSender,
}

impl AppState {
    pub fn new(config: Config, client: BackendClient, update_tx: UpdateSender) -> Self {
        Self {
            config: Arc::new(config),
            client: Arc::new(client),
            update_tx,
        }
    }
}
