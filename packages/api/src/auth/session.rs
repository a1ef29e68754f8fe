//! Session state machine.

use store::SessionStore;

use crate::client::ApiClient;
use crate::error::RequestError;
use crate::transport::Transport;

/// Where the app stands with respect to the admin session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    /// Persisted storage not checked yet.
    #[default]
    Unknown,
    Authenticated {
        username: String,
    },
    Unauthenticated,
}

impl SessionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    pub fn username(&self) -> Option<&str> {
        match self {
            Self::Authenticated { username } => Some(username),
            _ => None,
        }
    }
}

/// Owns login/logout and the persisted token for the whole app.
///
/// Built once at the application root. Login persists through the client's
/// store, which is the same store the client reads tokens from, so requests
/// made after a login carry the new token.
#[derive(Clone, Debug)]
pub struct SessionManager<T, S> {
    client: ApiClient<T, S>,
    state: SessionState,
}

impl<T: Transport, S: SessionStore> SessionManager<T, S> {
    pub fn new(client: ApiClient<T, S>) -> Self {
        Self {
            client,
            state: SessionState::Unknown,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn client(&self) -> &ApiClient<T, S> {
        &self.client
    }

    /// Resolve [`SessionState::Unknown`] from persisted storage.
    ///
    /// Only checks that a token is stored. The token is not verified with the
    /// backend; an expired one shows up as a 401 on the first admin call.
    pub async fn restore(&mut self) -> &SessionState {
        self.state = match self.client.store().load() {
            Some(session) => {
                tracing::info!("Restored session for {}", session.username);
                SessionState::Authenticated {
                    username: session.username,
                }
            }
            None => SessionState::Unauthenticated,
        };
        &self.state
    }

    /// Log in and persist the session.
    ///
    /// On failure nothing is persisted and the state becomes
    /// [`SessionState::Unauthenticated`]. A token that does not read back
    /// from the store counts as a failure: the client would not send it.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<(), RequestError> {
        match self.client.auth().login(username, password).await {
            Ok(session) => {
                let store = self.client.store();
                store.save(&session);
                let persisted = store.load().is_some_and(|stored| stored.token == session.token);
                if !persisted {
                    tracing::warn!("Session for {} was not persisted", session.username);
                    store.clear();
                    self.state = SessionState::Unauthenticated;
                    return Err(RequestError::Storage(
                        "token could not be saved".to_string(),
                    ));
                }
                tracing::info!("Logged in as {}", session.username);
                self.state = SessionState::Authenticated {
                    username: session.username,
                };
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Login failed for {}: {}", username, e);
                self.state = SessionState::Unauthenticated;
                Err(e)
            }
        }
    }

    /// Clear the persisted session. No request is made; calling it again is
    /// harmless.
    pub fn logout(&mut self) {
        self.client.auth().logout();
        self.state = SessionState::Unauthenticated;
        tracing::info!("Logged out");
    }
}
