use api::{SessionManager, Transport};
use store::SessionStore;

/// Shown for every failed login, whatever went wrong.
pub const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// Where a successful login lands.
pub const AFTER_LOGIN: &str = "/admin";

/// Log in through the session manager, collapsing any failure into
/// [`INVALID_CREDENTIALS`].
pub async fn submit_login<T: Transport, S: SessionStore>(
    manager: &mut SessionManager<T, S>,
    username: &str,
    password: &str,
) -> Result<(), &'static str> {
    manager
        .login(username, password)
        .await
        .map_err(|_| INVALID_CREDENTIALS)
}
