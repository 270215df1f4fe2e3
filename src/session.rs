/// Read-only view of the shared session store.
///
/// The store itself is written by the auth flows (login inserts, logout
/// removes); the feed page only ever looks the current session up. A missing
/// cookie or an unknown session id is the normal anonymous state, never an
/// error.
use actix_web::HttpRequest;
use dashmap::DashMap;

use crate::models::Identity;

/// Name of the cookie carrying the session id.
pub const SESSION_COOKIE: &str = "board_session";

/// Process-wide session id -> identity map.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: DashMap<String, Identity>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the identity for a session id.
    pub fn identity(&self, session_id: &str) -> Option<Identity> {
        self.sessions.get(session_id).map(|entry| entry.value().clone())
    }

    /// Register a signed-in session. Called by the login flow.
    pub fn insert(&self, session_id: impl Into<String>, identity: Identity) {
        self.sessions.insert(session_id.into(), identity);
    }

    /// Drop a session. Called by the logout flow.
    pub fn remove(&self, session_id: &str) {
        self.sessions.remove(session_id);
    }
}

/// Resolve the viewer of `req` against the store.
pub fn current_identity(req: &HttpRequest, store: &SessionStore) -> Option<Identity> {
    let cookie = req.cookie(SESSION_COOKIE)?;
    store.identity(cookie.value())
}
