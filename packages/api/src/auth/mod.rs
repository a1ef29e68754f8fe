//! Authentication endpoints and the session manager.
//!
//! [`Auth`] is the thin service: `login` and `register` talk to the backend,
//! while `logout`, `is_authenticated` and `current_username` only touch the
//! local [`SessionStore`]. [`SessionManager`] builds the
//! unknown/authenticated/unauthenticated state machine on top of it.

mod session;

pub use session::{SessionManager, SessionState};

use store::{Session, SessionStore};

use crate::client::ApiClient;
use crate::error::RequestError;
use crate::models::{Credentials, LoginResponse, MessageResponse};
use crate::transport::Transport;

/// Auth operations, borrowed via [`ApiClient::auth`].
pub struct Auth<'a, T, S> {
    client: &'a ApiClient<T, S>,
}

impl<T: Transport, S: SessionStore> ApiClient<T, S> {
    pub fn auth(&self) -> Auth<'_, T, S> {
        Auth { client: self }
    }
}

impl<T: Transport, S: SessionStore> Auth<'_, T, S> {
    /// Exchange credentials for a session. Nothing is persisted here.
    ///
    /// A 2xx answer without a token is treated as a failed login.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, RequestError> {
        let response: LoginResponse = self
            .client
            .post("/auth/login", &Credentials::new(username, password))
            .await?;
        if response.token.is_empty() {
            return Err(RequestError::Decode(
                "login response carried no token".to_string(),
            ));
        }
        let username = if response.username.is_empty() {
            username.to_string()
        } else {
            response.username
        };
        Ok(Session::new(response.token, username))
    }

    pub async fn register(
        &self,
        username: &str,
        password: &str,
    ) -> Result<MessageResponse, RequestError> {
        self.client
            .post("/auth/register", &Credentials::new(username, password))
            .await
    }

    /// Forget the stored session. Local only, no request is made.
    pub fn logout(&self) {
        self.client.store().clear();
    }

    pub fn is_authenticated(&self) -> bool {
        self.client.store().has_token()
    }

    pub fn current_username(&self) -> Option<String> {
        self.client.store().username()
    }
}
