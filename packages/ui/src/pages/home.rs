use api::{ApiClient, Experience, PersonalInfo, Project, Transport};
use store::SessionStore;

use super::fallback::{placeholder_personal_info, sample_featured_projects};
use super::load_state::{or_fallback, LoadState};

/// Everything the home page renders.
#[derive(Clone, Debug, PartialEq)]
pub struct HomeData {
    pub info: PersonalInfo,
    pub featured: Vec<Project>,
    pub experiences: Vec<Experience>,
}

/// Fetch personal info, featured projects and experiences concurrently.
///
/// Each failed fetch is replaced by its own placeholder, so a dead backend
/// still gives a presentable page. The state is `Failed` if any fetch failed.
pub async fn load_home<T: Transport, S: SessionStore>(
    client: &ApiClient<T, S>,
) -> LoadState<HomeData> {
    let personal_info_api = client.personal_info();
    let projects_api = client.projects();
    let experiences_api = client.experiences();
    let (info, featured, experiences) = futures::join!(
        personal_info_api.get(),
        projects_api.featured(),
        experiences_api.list(),
    );

    let (info, info_failed) = or_fallback(info, "personal info", placeholder_personal_info);
    let (featured, featured_failed) =
        or_fallback(featured, "featured projects", sample_featured_projects);
    let (experiences, experiences_failed) = or_fallback(experiences, "experiences", Vec::new);

    let data = HomeData {
        info,
        featured,
        experiences,
    };
    if info_failed || featured_failed || experiences_failed {
        LoadState::Failed(data)
    } else {
        LoadState::Loaded(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::fallback::PLACEHOLDER_NAME;
    use crate::pages::test_client;
    use api::{ExperienceFields, MemoryBackend, ProjectFields};

    #[tokio::test]
    async fn test_missing_personal_info_uses_placeholder_name() {
        // No profile yet: GET /public/personal-info answers 404.
        let backend = MemoryBackend::new();
        backend.insert_project(ProjectFields {
            title: "Star".to_string(),
            is_featured: true,
            ..Default::default()
        });
        let client = test_client(backend, false);

        let state = load_home(&client).await;
        assert!(state.is_failed());
        let data = state.data().unwrap();
        assert_eq!(data.info.name, PLACEHOLDER_NAME);
        // The fetches that worked are kept.
        assert_eq!(data.featured.len(), 1);
        assert_eq!(data.featured[0].fields.title, "Star");
    }

    #[tokio::test]
    async fn test_all_fetches_succeed() {
        let backend = MemoryBackend::new().with_personal_info(PersonalInfo {
            name: "Ada".to_string(),
            ..Default::default()
        });
        backend.insert_experience(ExperienceFields {
            title: "Engineer".to_string(),
            ..Default::default()
        });
        let client = test_client(backend.clone(), false);

        let state = load_home(&client).await;
        let LoadState::Loaded(data) = state else {
            panic!("expected loaded state");
        };
        assert_eq!(data.info.name, "Ada");
        assert!(data.featured.is_empty());
        assert_eq!(data.experiences.len(), 1);
        assert_eq!(backend.requests().len(), 3);
    }

    #[tokio::test]
    async fn test_offline_backend_gives_full_placeholder_page() {
        let backend = MemoryBackend::new();
        backend.set_offline(true);
        let client = test_client(backend, false);

        let data = load_home(&client).await.data().cloned().unwrap();
        assert_eq!(data.info.name, PLACEHOLDER_NAME);
        assert_eq!(data.featured, sample_featured_projects());
        assert!(data.experiences.is_empty());
    }
}
