//! Personal-info endpoints (singleton record).

use store::SessionStore;

use crate::client::ApiClient;
use crate::error::RequestError;
use crate::models::PersonalInfo;
use crate::transport::Transport;

/// Personal-info operations, borrowed via [`ApiClient::personal_info`].
pub struct PersonalInfoService<'a, T, S> {
    client: &'a ApiClient<T, S>,
}

impl<T: Transport, S: SessionStore> ApiClient<T, S> {
    pub fn personal_info(&self) -> PersonalInfoService<'_, T, S> {
        PersonalInfoService { client: self }
    }
}

impl<T: Transport, S: SessionStore> PersonalInfoService<'_, T, S> {
    /// The profile. A backend with no profile yet answers 404.
    pub async fn get(&self) -> Result<PersonalInfo, RequestError> {
        self.client.get("/public/personal-info").await
    }

    /// Create the profile, or overwrite the existing one.
    pub async fn upsert(&self, info: &PersonalInfo) -> Result<PersonalInfo, RequestError> {
        self.client.post("/admin/personal-info", info).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::memory::MemoryBackend;
    use store::{MemoryStore, Session};

    #[tokio::test]
    async fn test_get_before_upsert_is_not_found() {
        let client = ApiClient::new(ClientConfig::default(), MemoryBackend::new(), MemoryStore::new());
        assert!(client.personal_info().get().await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_upsert_twice_keeps_one_record() {
        let backend = MemoryBackend::new();
        let token = backend.issue_token("admin");
        let client = ApiClient::new(
            ClientConfig::default(),
            backend,
            MemoryStore::with_session(Session::new(token, "admin")),
        );

        let mut info = PersonalInfo {
            name: "Ada".to_string(),
            title: "Engineer".to_string(),
            ..Default::default()
        };
        client.personal_info().upsert(&info).await.unwrap();
        info.title = "Principal Engineer".to_string();
        let saved = client.personal_info().upsert(&info).await.unwrap();

        assert_eq!(saved, info);
        assert_eq!(client.personal_info().get().await.unwrap(), info);
    }
}
