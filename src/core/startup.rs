use tracing::info;

use crate::core::state::AppState;

/// Rehydrate persisted state at boot. Missing or corrupt snapshots start
/// the board empty; they never abort startup.
pub fn restore_state(state: &AppState) {
    let session_restored = state.sessions.restore();
    let orders_loaded = state.orders.load();

    info!(
        orders_loaded,
        session_restored,
        orders_path = %state.config.storage.orders_path.display(),
        session_path = %state.config.storage.session_path.display(),
        "Persisted state restored"
    );
}
