// Application state (AppState)

use crate::core::config::Config;
use crate::models::user::Roster;
use crate::persist::snapshot::SnapshotFile;
use crate::session::manager::SessionManager;
use crate::stores::order_store::OrderStore;
use std::sync::Arc;

/// Shared application state
///
/// Contains the two owning components (session manager, order store) plus
/// the configuration. All fields are wrapped in Arc for cheap cloning into
/// request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Single-seat session manager, gatekeeper for every protected route
    pub sessions: Arc<SessionManager>,

    /// Sole owner of the order list
    pub orders: Arc<OrderStore>,

    /// Configuration
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);

        let sessions = SessionManager::new(
            Roster::builtin(),
            SnapshotFile::new(&config.storage.session_path),
        );
        let orders = OrderStore::new(SnapshotFile::new(&config.storage.orders_path));

        Self {
            sessions: Arc::new(sessions),
            orders: Arc::new(orders),
            config,
        }
    }
}
