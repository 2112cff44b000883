use crate::infrastructure::github::oauth::GitHubUser;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use time::OffsetDateTime;
use uuid::Uuid;

/// One authenticated browser session. Created by the OAuth callback,
/// discarded on logout or process exit. The token is read-only after
/// acquisition and never shared across sessions.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub token: String,
    pub user: GitHubUser,
    pub created_at: OffsetDateTime,
}

/// In-process session map. Nothing is persisted.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&self, token: String, user: GitHubUser) -> Session {
        let session = Session {
            id: Uuid::new_v4(),
            token,
            user,
            created_at: OffsetDateTime::now_utc(),
        };
        self.inner
            .write()
            .expect("session store poisoned")
            .insert(session.id, session.clone());
        session
    }

    pub fn get(&self, id: &Uuid) -> Option<Session> {
        self.inner
            .read()
            .expect("session store poisoned")
            .get(id)
            .cloned()
    }

    pub fn remove(&self, id: &Uuid) -> Option<Session> {
        self.inner
            .write()
            .expect("session store poisoned")
            .remove(id)
    }
}
