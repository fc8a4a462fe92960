//! Session and authentication state.
//!
//! A [`Session`] is the single source of truth for whether the current user
//! is authenticated. It is constructed once in `main`, injected into the
//! application state, and mutated only through [`login`](Session::login) and
//! [`logout`](Session::logout), so the navigation header, route guards, and
//! profile actions all observe the same flag.

use crate::infrastructure::{ACCESS_TOKEN_KEY, TokenStore};

/// Authentication state backed by the durable session file.
///
/// The in-memory flag and the durable store are kept consistent on every
/// mutation: the flag is true exactly when a non-empty token was present at
/// the last mutation. Storage trouble degrades to in-memory-only state and
/// is never fatal; failed reads count as "no token", failed writes are
/// logged and the flag updates optimistically.
#[derive(Debug)]
pub struct Session {
    authenticated: bool,
    token: Option<String>,
    revision: u64,
    store: Option<TokenStore>,
}

impl Session {
    /// A session with no durable backing. State lives for the process only.
    ///
    /// Used when storage is unavailable, and by tests.
    pub fn ephemeral() -> Self {
        Self {
            authenticated: false,
            token: None,
            revision: 0,
            store: None,
        }
    }

    /// Reads the durable store once and derives the initial state.
    ///
    /// Runs exactly once per process, before any dependent trusts the flag.
    /// The read is local and fast; a failure is treated as "no token".
    pub fn initialize(store: TokenStore) -> Self {
        let token = match store.get(ACCESS_TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                log::warn!("session store read failed, starting anonymous: {}", e);
                None
            }
        };
        let authenticated = token.is_some();
        if authenticated {
            log::debug!("restored authenticated session from store");
        }
        Self {
            authenticated,
            token,
            revision: 0,
            store: Some(store),
        }
    }

    /// Stores the token and marks the session authenticated.
    ///
    /// The token must be non-empty and is assumed valid; it comes from a
    /// successful authentication response. An empty token is rejected as a
    /// logged no-op, preserving the flag/store invariant.
    pub fn login(&mut self, token: &str) {
        if token.is_empty() {
            log::warn!("login called with an empty token, ignoring");
            return;
        }
        if let Some(store) = &self.store {
            if let Err(e) = store.set(ACCESS_TOKEN_KEY, token) {
                log::warn!("failed to persist session token: {}", e);
            }
        }
        self.token = Some(token.to_string());
        self.authenticated = true;
        self.revision += 1;
        log::debug!("session authenticated");
    }

    /// Clears the token and marks the session anonymous. Idempotent: a
    /// redundant call re-affirms the cleared store without signaling a
    /// change.
    pub fn logout(&mut self) {
        if let Some(store) = &self.store {
            if let Err(e) = store.remove(ACCESS_TOKEN_KEY) {
                log::warn!("failed to clear session token: {}", e);
            }
        }
        if self.authenticated || self.token.is_some() {
            self.revision += 1;
            log::debug!("session cleared");
        }
        self.token = None;
        self.authenticated = false;
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// The current opaque token, when authenticated.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Change counter bumped on every state transition.
    ///
    /// Dependents that are not redrawn every frame can compare revisions to
    /// detect login/logout cheaply.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_initialize_with_empty_store_is_anonymous() {
        let dir = tempdir().unwrap();
        let session = Session::initialize(TokenStore::new(dir.path().join("s.json")));
        assert!(!session.is_authenticated());
        assert!(session.token().is_none());
    }

    #[test]
    fn test_login_round_trips_through_store() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("s.json");
        let mut session = Session::initialize(TokenStore::new(&path));

        session.login("tok123");
        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some("tok123"));
        assert_eq!(
            TokenStore::new(&path).get(ACCESS_TOKEN_KEY).unwrap(),
            Some("tok123".to_string())
        );

        session.logout();
        assert!(!session.is_authenticated());
        assert_eq!(TokenStore::new(&path).get(ACCESS_TOKEN_KEY).unwrap(), None);
    }

    #[test]
    fn test_full_scenario_fresh_login_logout() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("s.json");

        let mut session = Session::initialize(TokenStore::new(&path));
        assert!(!session.is_authenticated());

        session.login("abc");
        assert!(session.is_authenticated());
        assert_eq!(
            TokenStore::new(&path).get(ACCESS_TOKEN_KEY).unwrap(),
            Some("abc".to_string())
        );

        session.logout();
        assert!(!session.is_authenticated());
        assert_eq!(TokenStore::new(&path).get(ACCESS_TOKEN_KEY).unwrap(), None);
    }

    #[test]
    fn test_logout_is_idempotent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("s.json");
        let mut session = Session::initialize(TokenStore::new(&path));

        session.login("tok123");
        session.logout();
        session.logout();
        assert!(!session.is_authenticated());
        assert_eq!(TokenStore::new(&path).get(ACCESS_TOKEN_KEY).unwrap(), None);
    }

    #[test]
    fn test_token_survives_restart() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("s.json");

        let mut session = Session::initialize(TokenStore::new(&path));
        session.login("tok123");
        drop(session);

        let restored = Session::initialize(TokenStore::new(&path));
        assert!(restored.is_authenticated());
        assert_eq!(restored.token(), Some("tok123"));
    }

    #[test]
    fn test_empty_token_login_is_rejected() {
        let mut session = Session::ephemeral();
        session.login("");
        assert!(!session.is_authenticated());
        assert_eq!(session.revision(), 0);
    }

    #[test]
    fn test_empty_stored_token_counts_as_anonymous() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("s.json");
        let store = TokenStore::new(&path);
        store.set(ACCESS_TOKEN_KEY, "").unwrap();

        let session = Session::initialize(TokenStore::new(&path));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_corrupt_store_degrades_to_anonymous() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("s.json");
        fs::write(&path, "{{{{").unwrap();

        let session = Session::initialize(TokenStore::new(&path));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_revision_tracks_transitions_only() {
        let mut session = Session::ephemeral();
        assert_eq!(session.revision(), 0);

        session.login("tok123");
        assert_eq!(session.revision(), 1);

        session.logout();
        assert_eq!(session.revision(), 2);

        // Redundant logout re-affirms without signaling.
        session.logout();
        assert_eq!(session.revision(), 2);

        // Re-login with a fresh token signals again.
        session.login("tok456");
        assert_eq!(session.revision(), 3);
    }

    #[test]
    fn test_ephemeral_session_keeps_state_in_memory() {
        let mut session = Session::ephemeral();
        session.login("tok123");
        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some("tok123"));
        session.logout();
        assert!(!session.is_authenticated());
    }
}
