//! Experience endpoints.

use store::SessionStore;

use crate::client::ApiClient;
use crate::error::RequestError;
use crate::models::{Experience, ExperienceFields, Id};
use crate::transport::Transport;

/// Experience operations, borrowed via [`ApiClient::experiences`].
pub struct Experiences<'a, T, S> {
    client: &'a ApiClient<T, S>,
}

impl<T: Transport, S: SessionStore> ApiClient<T, S> {
    pub fn experiences(&self) -> Experiences<'_, T, S> {
        Experiences { client: self }
    }
}

impl<T: Transport, S: SessionStore> Experiences<'_, T, S> {
    pub async fn list(&self) -> Result<Vec<Experience>, RequestError> {
        self.client.get("/public/experiences").await
    }

    pub async fn get(&self, id: Id) -> Result<Experience, RequestError> {
        self.client.get(&format!("/public/experiences/{id}")).await
    }

    pub async fn create(&self, fields: &ExperienceFields) -> Result<Experience, RequestError> {
        self.client.post("/admin/experiences", fields).await
    }

    pub async fn update(&self, id: Id, fields: &ExperienceFields) -> Result<Experience, RequestError> {
        self.client.put(&format!("/admin/experiences/{id}"), fields).await
    }

    pub async fn delete(&self, id: Id) -> Result<(), RequestError> {
        self.client.delete(&format!("/admin/experiences/{id}")).await
    }
}
