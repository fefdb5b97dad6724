//! In-memory session state shared by the HTTP client and the router guard.
//!
//! A [`Session`] is a cheap handle; clones observe the same token. The token is
//! kept as a [`SecretString`] so it never shows up in `Debug` output or logs.

use secrecy::{ExposeSecret, SecretString};
use std::sync::{Arc, PoisonError, RwLock};

#[derive(Clone, Default)]
pub struct Session {
    token: Arc<RwLock<Option<SecretString>>>,
}

impl Session {
    /// Creates an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session that already holds `token`.
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        let session = Self::new();
        session.set_token(token);
        session
    }

    /// Stores the token returned by the login flow. Blank tokens clear the session.
    pub fn set_token(&self, token: impl Into<String>) {
        let token = token.into();
        let mut guard = self.token.write().unwrap_or_else(PoisonError::into_inner);
        *guard = if token.trim().is_empty() {
            None
        } else {
            Some(SecretString::from(token))
        };
    }

    /// Clears the token, typically on logout.
    pub fn clear(&self) {
        let mut guard = self.token.write().unwrap_or_else(PoisonError::into_inner);
        *guard = None;
    }

    /// Returns a copy of the current token, if any.
    #[must_use]
    pub fn token(&self) -> Option<SecretString> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_some_and(|token| !token.expose_secret().is_empty())
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .field("token", &"***")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_empty() {
        let session = Session::new();
        assert!(!session.is_authenticated());
        assert!(session.token().is_none());
    }

    #[test]
    fn set_and_clear_token() {
        let session = Session::new();
        session.set_token("tok-1");
        assert!(session.is_authenticated());
        assert_eq!(
            session.token().map(|t| t.expose_secret().to_string()),
            Some("tok-1".to_string())
        );

        session.clear();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn blank_token_counts_as_absent() {
        let session = Session::with_token("   ");
        assert!(!session.is_authenticated());
        assert!(session.token().is_none());
    }

    #[test]
    fn clones_share_state() {
        let session = Session::new();
        let observer = session.clone();
        session.set_token("shared");
        assert!(observer.is_authenticated());
        observer.clear();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn debug_hides_token() {
        let session = Session::with_token("super-secret");
        let rendered = format!("{session:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("***"));
    }
}
