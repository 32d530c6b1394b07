//! Opaque bearer sessions issued by login.
//!
//! A session is a server-side record looked up by an opaque token; nothing
//! about the identity is encoded in the token itself.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, Utc};

use nexus_auth::Role;
use nexus_core::{AccountId, SessionId};

/// The authenticated identity carried by a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub account_id: AccountId,
    pub role: Role,
    pub level: u8,
    pub issued_at: DateTime<Utc>,
}

/// In-memory session registry.
#[derive(Debug, Default)]
pub struct SessionStore {
    inner: RwLock<HashMap<SessionId, Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self, account_id: AccountId, role: Role, level: u8) -> SessionId {
        let token = SessionId::new();
        let session = Session {
            account_id,
            role,
            level,
            issued_at: Utc::now(),
        };
        if let Ok(mut map) = self.inner.write() {
            map.insert(token, session);
        }
        token
    }

    pub fn resolve(&self, token: SessionId) -> Option<Session> {
        self.inner.read().ok()?.get(&token).copied()
    }

    pub fn revoke(&self, token: SessionId) {
        if let Ok(mut map) = self.inner.write() {
            map.remove(&token);
        }
    }
}
