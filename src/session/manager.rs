use crate::core::error::AuthError;
use crate::models::stage::Stage;
use crate::models::user::{Roster, User};
use crate::persist::snapshot::SnapshotFile;
use crate::utils::auth::{mint_token, verify_token};
use serde::{Deserialize, Serialize};
use std::sync::RwLock;
use tracing::{info, warn};

/// The authenticated worker currently holding the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: User,
    /// Bearer handle the client sends on every protected request
    pub token: String,
}

/// Single-seat session manager.
///
/// The board has one terminal, so at most one session is active at a time;
/// logging in replaces the previous seat. The active session is mirrored to
/// a snapshot file and survives restarts.
///
/// Absence of a session is not an error state here: `current` and
/// `has_permission` answer quietly, and the handler layer decides what a
/// missing session means for each endpoint.
pub struct SessionManager {
    roster: Roster,
    seat: RwLock<Option<Session>>,
    snapshot: SnapshotFile,
}

impl SessionManager {
    pub fn new(roster: Roster, snapshot: SnapshotFile) -> Self {
        Self {
            roster,
            seat: RwLock::new(None),
            snapshot,
        }
    }

    /// Authenticate against the roster: name case-insensitively, password
    /// and role exactly. Blank fields are rejected up front; any credential
    /// mismatch (including an unknown role name) yields the same generic
    /// error.
    pub fn login(&self, name: &str, password: &str, role: &str) -> Result<Session, AuthError> {
        let name = name.trim();
        if name.is_empty() || password.is_empty() || role.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        let role = Stage::from_name(role).ok_or(AuthError::InvalidCredentials)?;
        let user = self
            .roster
            .find(name, password, role)
            .ok_or(AuthError::InvalidCredentials)?;

        let session = Session {
            user: user.clone(),
            token: mint_token(),
        };

        if let Err(e) = self.snapshot.save(&session) {
            warn!(error = %e, "Failed to persist session record");
        }

        *self.seat.write().unwrap() = Some(session.clone());

        info!(
            user = %session.user.name,
            role = %session.user.role,
            "Login successful"
        );

        Ok(session)
    }

    /// Clear the seat and the persisted record. Unconditional and
    /// idempotent.
    pub fn logout(&self) {
        *self.seat.write().unwrap() = None;

        if let Err(e) = self.snapshot.clear() {
            warn!(error = %e, "Failed to clear persisted session record");
        }

        info!("Logged out");
    }

    /// Rehydrate the seat from the session snapshot at boot. Absent or
    /// malformed data leaves the seat empty without erroring. Returns
    /// whether a session was restored.
    pub fn restore(&self) -> bool {
        match self.snapshot.load::<Session>() {
            Some(session) => {
                info!(
                    user = %session.user.name,
                    role = %session.user.role,
                    "Session restored"
                );
                *self.seat.write().unwrap() = Some(session);
                true
            }
            None => false,
        }
    }

    /// The active session, iff `token` matches the seat.
    pub fn current(&self, token: &str) -> Option<Session> {
        let seat = self.seat.read().unwrap();
        seat.as_ref()
            .filter(|s| verify_token(token, &s.token))
            .cloned()
    }

    pub fn is_logged_in(&self) -> bool {
        self.seat.read().unwrap().is_some()
    }

    /// Gate for endpoints that require any active session.
    pub fn require(&self, token: &str) -> Result<Session, AuthError> {
        self.current(token).ok_or(AuthError::NotLoggedIn)
    }

    /// The sole authorization gate for stage mutation: true iff a session
    /// is active, the token matches, and the worker's role equals `stage`.
    /// Strict equality, no role hierarchy; never errors.
    pub fn has_permission(&self, token: &str, stage: Stage) -> bool {
        self.current(token)
            .map(|s| s.user.role == stage)
            .unwrap_or(false)
    }
}
