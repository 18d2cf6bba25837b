//! The signed-in user, mirrored to `localStorage` under `user`.

use common::{route_guard::AuthState, user::Session};
use dioxus::logger::tracing;
use dioxus::prelude::*;

use crate::data_definitions::browser_storage;


pub const SESSION_STORAGE_KEY: &str = "user";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionState {
    auth: Signal<AuthState>,
}

impl SessionState {
    pub fn new(auth: Signal<AuthState>) -> Self {
        Self { auth }
    }

    /// Subscribing read, for rendering.
    pub fn auth(&self) -> AuthState {
        self.auth.read().clone()
    }

    pub fn session(&self) -> Option<Session> {
        self.auth.read().session().cloned()
    }

    /// Non-subscribing read, for request headers.
    pub fn current(&self) -> Option<Session> {
        self.auth.peek().session().cloned()
    }

    /// Trusts whatever identity was stored by the last login.
    pub fn restore(&mut self) {
        let stored = browser_storage::read_json::<Session>(SESSION_STORAGE_KEY);
        tracing::info!("session restored: {}", stored.as_ref().map(|s| s.user_id.as_str()).unwrap_or("none"));
        self.auth.set(AuthState::restored(stored));
    }

    pub fn sign_in(&mut self, session: Session) {
        if let Err(e) = browser_storage::write_json(SESSION_STORAGE_KEY, &session) {
            tracing::warn!("session kept in memory only: {e:#}");
        }
        self.auth.set(AuthState::Authenticated(session));
    }

    pub fn sign_out(&mut self) {
        browser_storage::remove(SESSION_STORAGE_KEY);
        self.auth.set(AuthState::Anonymous);
    }
}

pub fn use_session_state() -> SessionState {
    use_context::<SessionState>()
}
