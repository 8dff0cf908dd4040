//! In-Memory Session Manager Implementation

use chrono::Utc;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::application::ports::{Session, SessionError, SessionManagerPort};

/// 内存会话管理器
///
/// token -> Session，进程重启后全部失效
pub struct InMemorySessionManager {
    sessions: DashMap<String, Session>,
}

impl InMemorySessionManager {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }
}

impl Default for InMemorySessionManager {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionManagerPort for InMemorySessionManager {
    fn create(&self, session: Session) -> Result<String, SessionError> {
        let token = session.token.clone();
        let user_id = session.user_id;
        match self.sessions.entry(token.clone()) {
            Entry::Occupied(_) => return Err(SessionError::AlreadyExists),
            Entry::Vacant(entry) => {
                entry.insert(session);
            }
        }
        tracing::debug!(user_id = %user_id, "Session created");
        Ok(token)
    }

    fn get(&self, token: &str) -> Result<Session, SessionError> {
        self.sessions
            .get(token)
            .map(|s| s.clone())
            .ok_or(SessionError::NotFound)
    }

    fn close(&self, token: &str) -> Result<(), SessionError> {
        self.sessions
            .remove(token)
            .map(|(_, session)| {
                tracing::debug!(user_id = %session.user_id, "Session closed");
            })
            .ok_or(SessionError::NotFound)
    }

    fn touch(&self, token: &str) {
        if let Some(mut session) = self.sessions.get_mut(token) {
            session.last_activity = Utc::now();
        }
    }

    fn close_expired(&self, idle_timeout: chrono::Duration) -> usize {
        let now = Utc::now();
        let mut closed = 0;

        self.sessions.retain(|_, session| {
            let keep = now - session.last_activity <= idle_timeout;
            if !keep {
                tracing::debug!(user_id = %session.user_id, "Session expired");
                closed += 1;
            }
            keep
        });

        closed
    }

    fn count(&self) -> usize {
        self.sessions.len()
    }
}
