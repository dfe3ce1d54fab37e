//! Session handling.
//!
//! Authenticated API calls receive a [`SessionProvider`] explicitly instead of
//! reading a process-wide session. [`SessionStore`] is the in-memory provider
//! used by applications that sign in once and keep the token for the lifetime
//! of the process.

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;

/// Bearer token plus the account it was issued for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub access_token: String,
    pub address: String,
}

impl Session {
    pub fn new(access_token: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            address: address.into(),
        }
    }

    /// Value of the `Authorization` header for this session.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("Not logged in")]
    NotLoggedIn,

    #[error("Session unavailable: {0}")]
    Unavailable(String),
}

/// Asynchronous source of the current session.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    async fn session(&self) -> Result<Session, SessionError>;
}

#[async_trait]
impl SessionProvider for Session {
    async fn session(&self) -> Result<Session, SessionError> {
        Ok(self.clone())
    }
}

/// Holds the session obtained at sign-in. Nothing is persisted.
#[derive(Debug, Default)]
pub struct SessionStore {
    current: RwLock<Option<Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set(&self, session: Session) {
        tracing::debug!(address = %session.address, "Session stored");
        *self.current.write().await = Some(session);
    }

    pub async fn clear(&self) {
        *self.current.write().await = None;
    }

    pub async fn is_logged_in(&self) -> bool {
        self.current.read().await.is_some()
    }
}

#[async_trait]
impl SessionProvider for SessionStore {
    async fn session(&self) -> Result<Session, SessionError> {
        self.current
            .read()
            .await
            .clone()
            .ok_or(SessionError::NotLoggedIn)
    }
}
