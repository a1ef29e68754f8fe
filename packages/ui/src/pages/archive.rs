use api::{ApiClient, Project, Transport};
use store::SessionStore;

use super::fallback::sample_projects;
use super::load_state::{Fallback, LoadState};

/// Technology tags shown per archive row before collapsing into `+N`.
pub const VISIBLE_TAGS: usize = 3;

/// All projects, as listed on the archive page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArchiveData {
    pub projects: Vec<Project>,
}

impl Fallback for ArchiveData {
    fn fallback() -> Self {
        Self {
            projects: sample_projects(),
        }
    }
}

impl ArchiveData {
    pub fn total(&self) -> usize {
        self.projects.len()
    }

    pub fn featured_count(&self) -> usize {
        self.projects.iter().filter(|p| p.fields.is_featured).count()
    }

    /// `"Showing all 1 project"` / `"Showing all 3 projects"`.
    pub fn footer(&self) -> String {
        let total = self.total();
        let noun = if total == 1 { "project" } else { "projects" };
        format!("Showing all {total} {noun}")
    }
}

/// Split a technology list into the visible tags and the hidden count.
pub fn visible_tags<'a>(technologies: &[&'a str], limit: usize) -> (Vec<&'a str>, usize) {
    let shown: Vec<&str> = technologies.iter().take(limit).copied().collect();
    let hidden = technologies.len().saturating_sub(shown.len());
    (shown, hidden)
}

pub async fn load_archive<T: Transport, S: SessionStore>(
    client: &ApiClient<T, S>,
) -> LoadState<ArchiveData> {
    let result = client
        .projects()
        .list()
        .await
        .map(|projects| ArchiveData { projects });
    LoadState::settle(result, "projects")
}

/// The plain projects page: all projects, nothing on failure.
pub async fn load_projects<T: Transport, S: SessionStore>(
    client: &ApiClient<T, S>,
) -> LoadState<Vec<Project>> {
    LoadState::settle(client.projects().list().await, "projects")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::test_client;
    use api::{MemoryBackend, ProjectFields};

    #[test]
    fn test_counts_and_footer() {
        let data = ArchiveData::fallback();
        assert_eq!(data.total(), 2);
        assert_eq!(data.featured_count(), 1);
        assert_eq!(data.footer(), "Showing all 2 projects");

        let single = ArchiveData {
            projects: data.projects[..1].to_vec(),
        };
        assert_eq!(single.footer(), "Showing all 1 project");
    }

    #[test]
    fn test_visible_tags() {
        let techs = ["Rust", "Dioxus", "Wasm", "CSS", "HTML"];
        assert_eq!(visible_tags(&techs, VISIBLE_TAGS), (vec!["Rust", "Dioxus", "Wasm"], 2));
        assert_eq!(visible_tags(&techs[..2], VISIBLE_TAGS), (vec!["Rust", "Dioxus"], 0));
    }

    #[tokio::test]
    async fn test_archive_falls_back_to_samples() {
        let backend = MemoryBackend::new();
        backend.fail_path("/public/projects");
        let client = test_client(backend, false);

        let state = load_archive(&client).await;
        assert_eq!(state, LoadState::Failed(ArchiveData::fallback()));
    }

    #[tokio::test]
    async fn test_projects_page_falls_back_to_empty() {
        let backend = MemoryBackend::new();
        backend.insert_project(ProjectFields::default());
        let client = test_client(backend.clone(), false);
        assert_eq!(load_projects(&client).await.data().map(Vec::len), Some(1));

        backend.set_offline(true);
        assert_eq!(load_projects(&client).await, LoadState::Failed(Vec::new()));
    }
}
