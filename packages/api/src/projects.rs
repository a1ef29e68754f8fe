//! Project endpoints.

use store::SessionStore;

use crate::client::ApiClient;
use crate::error::RequestError;
use crate::models::{Id, Project, ProjectFields};
use crate::transport::Transport;

/// Project operations, borrowed from an [`ApiClient`] via [`ApiClient::projects`].
pub struct Projects<'a, T, S> {
    client: &'a ApiClient<T, S>,
}

impl<T: Transport, S: SessionStore> ApiClient<T, S> {
    pub fn projects(&self) -> Projects<'_, T, S> {
        Projects { client: self }
    }
}

impl<T: Transport, S: SessionStore> Projects<'_, T, S> {
    /// Every project, in server order.
    pub async fn list(&self) -> Result<Vec<Project>, RequestError> {
        self.client.get("/public/projects").await
    }

    pub async fn featured(&self) -> Result<Vec<Project>, RequestError> {
        self.client.get("/public/projects/featured").await
    }

    pub async fn get(&self, id: Id) -> Result<Project, RequestError> {
        self.client.get(&format!("/public/projects/{id}")).await
    }

    pub async fn create(&self, fields: &ProjectFields) -> Result<Project, RequestError> {
        self.client.post("/admin/projects", fields).await
    }

    pub async fn update(&self, id: Id, fields: &ProjectFields) -> Result<Project, RequestError> {
        self.client.put(&format!("/admin/projects/{id}"), fields).await
    }

    pub async fn delete(&self, id: Id) -> Result<(), RequestError> {
        self.client.delete(&format!("/admin/projects/{id}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::memory::MemoryBackend;
    use crate::transport::Method;
    use store::{MemoryStore, Session};

    fn admin_client() -> ApiClient<MemoryBackend, MemoryStore> {
        let backend = MemoryBackend::new();
        let token = backend.issue_token("admin");
        ApiClient::new(
            ClientConfig::default(),
            backend,
            MemoryStore::with_session(Session::new(token, "admin")),
        )
    }

    fn fields(title: &str, featured: bool) -> ProjectFields {
        ProjectFields {
            title: title.to_string(),
            short_description: format!("{title} in short"),
            is_featured: featured,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_then_list_contains_it_once() {
        let client = admin_client();
        let created = client.projects().create(&fields("X", false)).await.unwrap();

        let projects = client.projects().list().await.unwrap();
        let matching: Vec<_> = projects.iter().filter(|p| p.id == created.id).collect();
        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0].fields.title, "X");
    }

    #[tokio::test]
    async fn test_featured_and_get() {
        let client = admin_client();
        client.projects().create(&fields("plain", false)).await.unwrap();
        let star = client.projects().create(&fields("star", true)).await.unwrap();

        let featured = client.projects().featured().await.unwrap();
        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0].id, star.id);

        let fetched = client.projects().get(star.id).await.unwrap();
        assert_eq!(fetched, star);
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let client = admin_client();
        let created = client.projects().create(&fields("old", false)).await.unwrap();

        let mut changed = created.fields.clone();
        changed.title = "new".to_string();
        let updated = client.projects().update(created.id, &changed).await.unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(client.projects().get(created.id).await.unwrap().fields.title, "new");
    }

    #[tokio::test]
    async fn test_delete_removes_from_next_list() {
        let client = admin_client();
        let created = client.projects().create(&fields("gone", false)).await.unwrap();

        client.projects().delete(created.id).await.unwrap();
        assert!(client.projects().list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_http_error() {
        let client = admin_client();
        let err = client.projects().delete(Id(999)).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_admin_calls_without_session_are_rejected() {
        let client = ApiClient::new(ClientConfig::default(), MemoryBackend::new(), MemoryStore::new());
        let err = client.projects().create(&fields("nope", false)).await.unwrap_err();
        assert!(err.is_unauthorized());
        assert!(client.projects().list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_paths_and_methods() {
        let client = admin_client();
        let created = client.projects().create(&fields("p", false)).await.unwrap();
        client.projects().update(created.id, &created.fields).await.unwrap();
        client.projects().delete(created.id).await.unwrap();

        let id = created.id;
        assert_eq!(
            client.transport().requests(),
            vec![
                (Method::Post, "/admin/projects".to_string()),
                (Method::Put, format!("/admin/projects/{id}")),
                (Method::Delete, format!("/admin/projects/{id}")),
            ]
        );
    }
}
