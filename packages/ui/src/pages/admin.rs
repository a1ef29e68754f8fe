//! Admin panel state: tabs, the create/edit form, delete confirmation and
//! the inline error banner, plus the service calls behind each action.
//!
//! [`AdminState`] is a plain value so the panel's transitions can be tested
//! without a renderer; the view keeps it in a signal.

use api::{
    ApiClient, Experience, ExperienceFields, Id, PersonalInfo, Project, ProjectFields,
    RequestError, Transport,
};
use store::SessionStore;

use super::load_state::{or_fallback, Fallback, LoadState};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    PersonalInfo,
    Projects,
    Experiences,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Self::PersonalInfo, Self::Projects, Self::Experiences];

    pub fn label(&self) -> &'static str {
        match self {
            Self::PersonalInfo => "Personal Info",
            Self::Projects => "Projects",
            Self::Experiences => "Experiences",
        }
    }
}

/// Whether a form creates a new entity or updates an existing one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(Id),
}

impl FormMode {
    pub fn id(&self) -> Option<Id> {
        match self {
            Self::Create => None,
            Self::Edit(id) => Some(*id),
        }
    }

    /// Stable per-mode key, so switching entities re-seeds the form.
    pub fn key(&self) -> String {
        match self {
            Self::Create => "create".to_string(),
            Self::Edit(id) => format!("edit-{id}"),
        }
    }
}

/// The open entity form, if any, with the draft it starts from.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Editor {
    #[default]
    Hidden,
    Project { mode: FormMode, seed: ProjectFields },
    Experience { mode: FormMode, seed: ExperienceFields },
}

impl Editor {
    pub fn mode(&self) -> Option<FormMode> {
        match self {
            Self::Hidden => None,
            Self::Project { mode, .. } | Self::Experience { mode, .. } => Some(*mode),
        }
    }
}

/// An entity awaiting delete confirmation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteTarget {
    Project(Id),
    Experience(Id),
}

impl DeleteTarget {
    pub fn prompt(&self) -> &'static str {
        match self {
            Self::Project(_) => "Are you sure you want to delete this project?",
            Self::Experience(_) => "Are you sure you want to delete this experience?",
        }
    }

    pub fn failure_message(&self) -> &'static str {
        match self {
            Self::Project(_) => "Failed to delete project",
            Self::Experience(_) => "Failed to delete experience",
        }
    }

    /// The tab whose list changes when this target is deleted.
    pub fn tab(&self) -> Tab {
        match self {
            Self::Project(_) => Tab::Projects,
            Self::Experience(_) => Tab::Experiences,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AdminState {
    pub tab: Tab,
    pub editor: Editor,
    pub pending_delete: Option<DeleteTarget>,
    pub error: Option<String>,
    /// An entity save is in flight.
    pub saving: bool,
}

impl AdminState {
    /// Switching tabs always closes the form.
    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
        self.editor = Editor::Hidden;
        self.pending_delete = None;
    }

    /// Open an empty form for the current tab. Personal info has no "add".
    pub fn add(&mut self) {
        self.editor = match self.tab {
            Tab::PersonalInfo => return,
            Tab::Projects => Editor::Project {
                mode: FormMode::Create,
                seed: ProjectFields::default(),
            },
            Tab::Experiences => Editor::Experience {
                mode: FormMode::Create,
                seed: ExperienceFields::default(),
            },
        };
    }

    pub fn edit_project(&mut self, project: &Project) {
        self.editor = Editor::Project {
            mode: FormMode::Edit(project.id),
            seed: project.fields.clone(),
        };
    }

    pub fn edit_experience(&mut self, experience: &Experience) {
        self.editor = Editor::Experience {
            mode: FormMode::Edit(experience.id),
            seed: experience.fields.clone(),
        };
    }

    pub fn cancel(&mut self) {
        self.editor = Editor::Hidden;
    }

    /// Start saving the open form. Returns its mode, or `None` when no form
    /// is open or another save has not finished yet.
    pub fn begin_submit(&mut self) -> Option<FormMode> {
        if self.saving {
            return None;
        }
        let mode = self.editor.mode()?;
        self.saving = true;
        Some(mode)
    }

    /// The save started for `mode` went through. Closes the form only if it
    /// is still the one that was submitted.
    pub fn submitted(&mut self, mode: FormMode) {
        self.saving = false;
        self.error = None;
        if self.editor.mode() == Some(mode) {
            self.editor = Editor::Hidden;
        }
    }

    /// The save failed; the form stays open with its draft.
    pub fn submit_failed(&mut self, message: impl Into<String>) {
        self.saving = false;
        self.fail(message);
    }

    pub fn form_visible(&self) -> bool {
        self.editor != Editor::Hidden
    }

    /// Id of the entity being edited; `None` when creating or closed.
    pub fn editing_id(&self) -> Option<Id> {
        self.editor.mode().and_then(|mode| mode.id())
    }

    pub fn request_delete(&mut self, target: DeleteTarget) {
        self.pending_delete = Some(target);
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Confirm the pending delete, handing the target to the caller.
    pub fn confirm_delete(&mut self) -> Option<DeleteTarget> {
        self.pending_delete.take()
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}

/// Everything the admin panel lists.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AdminData {
    pub info: PersonalInfo,
    pub projects: Vec<Project>,
    pub experiences: Vec<Experience>,
}

impl Fallback for AdminData {
    fn fallback() -> Self {
        Self::default()
    }
}

pub async fn load_admin<T: Transport, S: SessionStore>(
    client: &ApiClient<T, S>,
) -> LoadState<AdminData> {
    let personal_info_api = client.personal_info();
    let projects_api = client.projects();
    let experiences_api = client.experiences();
    let (info, projects, experiences) = futures::join!(
        personal_info_api.get(),
        projects_api.list(),
        experiences_api.list(),
    );

    let (info, info_failed) = or_fallback(info, "personal info", PersonalInfo::default);
    let (projects, projects_failed) = or_fallback(projects, "projects", Vec::new);
    let (experiences, experiences_failed) = or_fallback(experiences, "experiences", Vec::new);

    let data = AdminData {
        info,
        projects,
        experiences,
    };
    if info_failed || projects_failed || experiences_failed {
        LoadState::Failed(data)
    } else {
        LoadState::Loaded(data)
    }
}

/// Create or update a project depending on `mode`.
pub async fn submit_project<T: Transport, S: SessionStore>(
    client: &ApiClient<T, S>,
    mode: FormMode,
    fields: &ProjectFields,
) -> Result<Project, RequestError> {
    match mode {
        FormMode::Create => client.projects().create(fields).await,
        FormMode::Edit(id) => client.projects().update(id, fields).await,
    }
}

/// Create or update an experience depending on `mode`.
pub async fn submit_experience<T: Transport, S: SessionStore>(
    client: &ApiClient<T, S>,
    mode: FormMode,
    fields: &ExperienceFields,
) -> Result<Experience, RequestError> {
    match mode {
        FormMode::Create => client.experiences().create(fields).await,
        FormMode::Edit(id) => client.experiences().update(id, fields).await,
    }
}

pub async fn delete_target<T: Transport, S: SessionStore>(
    client: &ApiClient<T, S>,
    target: DeleteTarget,
) -> Result<(), RequestError> {
    match target {
        DeleteTarget::Project(id) => client.projects().delete(id).await,
        DeleteTarget::Experience(id) => client.experiences().delete(id).await,
    }
}

/// Re-fetch the list behind `tab` into `data`. A failed reload is logged and
/// leaves the current list in place.
pub async fn reload<T: Transport, S: SessionStore>(
    client: &ApiClient<T, S>,
    tab: Tab,
    data: &mut AdminData,
) {
    match tab {
        Tab::PersonalInfo => match client.personal_info().get().await {
            Ok(info) => data.info = info,
            Err(e) => tracing::error!("Error reloading personal info: {}", e),
        },
        Tab::Projects => match client.projects().list().await {
            Ok(projects) => data.projects = projects,
            Err(e) => tracing::error!("Error reloading projects: {}", e),
        },
        Tab::Experiences => match client.experiences().list().await {
            Ok(experiences) => data.experiences = experiences,
            Err(e) => tracing::error!("Error reloading experiences: {}", e),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::test_client;
    use api::{MemoryBackend, Method, ProjectStatus};

    fn project_draft() -> ProjectFields {
        ProjectFields {
            title: "X".to_string(),
            short_description: "Y".to_string(),
            status: ProjectStatus::Active,
            is_featured: false,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_submit_without_id_creates() {
        let backend = MemoryBackend::new();
        let client = test_client(backend.clone(), true);

        let mut state = AdminState::default();
        state.select_tab(Tab::Projects);
        state.add();
        let Editor::Project { mode, .. } = state.editor.clone() else {
            panic!("project form should be open");
        };
        assert_eq!(mode, FormMode::Create);

        let created = submit_project(&client, mode, &project_draft()).await.unwrap();
        state.submitted(mode);

        assert_eq!(
            backend.requests(),
            vec![(Method::Post, "/admin/projects".to_string())]
        );
        assert_eq!(created.fields.title, "X");
        assert!(!state.form_visible());
    }

    #[tokio::test]
    async fn test_submit_in_edit_mode_updates() {
        let backend = MemoryBackend::new();
        let id = backend.insert_project(project_draft());
        let client = test_client(backend.clone(), true);

        let mut state = AdminState::default();
        state.select_tab(Tab::Projects);
        state.edit_project(&backend.projects()[0]);
        assert_eq!(state.editing_id(), Some(id));

        let mut fields = project_draft();
        fields.title = "Renamed".to_string();
        let mode = state.editor.mode().unwrap();
        submit_project(&client, mode, &fields).await.unwrap();

        assert_eq!(
            backend.requests(),
            vec![(Method::Put, format!("/admin/projects/{id}"))]
        );
        assert_eq!(backend.projects().len(), 1);
        assert_eq!(backend.projects()[0].fields.title, "Renamed");
    }

    #[test]
    fn test_cancel_while_editing_closes_form_without_requests() {
        let backend = MemoryBackend::new();
        let id = backend.insert_project(project_draft());
        let stored = backend.projects();

        let mut state = AdminState::default();
        state.select_tab(Tab::Projects);
        state.edit_project(&stored[0]);
        assert_eq!(state.editing_id(), Some(id));

        state.cancel();
        assert!(!state.form_visible());
        assert_eq!(state.editing_id(), None);
        assert!(backend.requests().is_empty());
        assert_eq!(backend.projects(), stored);
    }

    #[tokio::test]
    async fn test_second_submit_is_ignored_while_saving() {
        let backend = MemoryBackend::new();
        let client = test_client(backend.clone(), true);

        let mut state = AdminState::default();
        state.select_tab(Tab::Projects);
        state.add();

        let mode = state.begin_submit().unwrap();
        assert!(state.saving);
        // Double click before the first request answers
        assert_eq!(state.begin_submit(), None);

        submit_project(&client, mode, &project_draft()).await.unwrap();
        state.submitted(mode);

        assert!(!state.saving);
        assert!(!state.form_visible());
        assert_eq!(backend.projects().len(), 1);
        assert_eq!(backend.requests().len(), 1);
    }

    #[test]
    fn test_finished_save_keeps_a_newer_form_open() {
        let first = Project::new(Id(1), project_draft());
        let second = Project::new(Id(2), project_draft());

        let mut state = AdminState::default();
        state.select_tab(Tab::Projects);
        state.edit_project(&first);
        let mode = state.begin_submit().unwrap();

        // The admin moves on to another row while the save is in flight
        state.edit_project(&second);
        state.submitted(mode);

        assert!(!state.saving);
        assert_eq!(state.editing_id(), Some(Id(2)));
    }

    #[test]
    fn test_failed_save_can_be_retried() {
        let mut state = AdminState::default();
        state.select_tab(Tab::Experiences);
        state.add();

        let mode = state.begin_submit().unwrap();
        state.submit_failed("Failed to save experience");
        assert!(!state.saving);
        assert!(state.form_visible());
        assert_eq!(state.begin_submit(), Some(mode));
    }

    #[test]
    fn test_switching_tabs_resets_the_form() {
        let mut state = AdminState::default();
        state.select_tab(Tab::Experiences);
        state.add();
        assert!(state.form_visible());
        assert_eq!(state.editing_id(), None);

        state.request_delete(DeleteTarget::Experience(Id(1)));
        state.select_tab(Tab::Projects);
        assert!(!state.form_visible());
        assert_eq!(state.pending_delete, None);
    }

    #[test]
    fn test_add_on_personal_info_tab_does_nothing() {
        let mut state = AdminState::default();
        state.add();
        assert_eq!(state, AdminState::default());
    }

    #[tokio::test]
    async fn test_delete_missing_id_surfaces_http_error() {
        let backend = MemoryBackend::new();
        backend.insert_project(project_draft());
        let client = test_client(backend.clone(), true);
        let mut data = match load_admin(&client).await {
            LoadState::Failed(data) => data,
            other => panic!("personal info is missing, got {other:?}"),
        };
        assert_eq!(data.projects.len(), 1);

        let mut state = AdminState::default();
        state.select_tab(Tab::Projects);
        state.request_delete(DeleteTarget::Project(Id(99)));
        let target = state.confirm_delete().unwrap();
        let err = delete_target(&client, target).await.unwrap_err();
        assert!(err.is_not_found());
        state.fail(target.failure_message());

        assert_eq!(state.error.as_deref(), Some("Failed to delete project"));
        assert_eq!(data.projects.len(), 1);
        reload(&client, Tab::Projects, &mut data).await;
        assert_eq!(data.projects.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_then_reload_removes_entry() {
        let backend = MemoryBackend::new();
        let id = backend.insert_experience(ExperienceFields {
            title: "Engineer".to_string(),
            ..Default::default()
        });
        let client = test_client(backend, true);
        let mut data = AdminData::default();
        reload(&client, Tab::Experiences, &mut data).await;
        assert_eq!(data.experiences.len(), 1);

        delete_target(&client, DeleteTarget::Experience(id)).await.unwrap();
        reload(&client, Tab::Experiences, &mut data).await;
        assert!(data.experiences.is_empty());
    }

    #[tokio::test]
    async fn test_failed_submit_keeps_form_open() {
        let backend = MemoryBackend::new();
        // No session: admin routes answer 401.
        let client = test_client(backend, false);

        let mut state = AdminState::default();
        state.select_tab(Tab::Experiences);
        state.add();
        let mode = state.editor.mode().unwrap();
        let err = submit_experience(&client, mode, &ExperienceFields::default())
            .await
            .unwrap_err();
        assert!(err.is_unauthorized());
        state.fail("Failed to save experience");

        assert!(state.form_visible());
        assert_eq!(state.error.as_deref(), Some("Failed to save experience"));
        state.dismiss_error();
        assert_eq!(state.error, None);
    }

    #[tokio::test]
    async fn test_personal_info_save_then_reload() {
        let backend = MemoryBackend::new();
        let client = test_client(backend.clone(), true);
        let mut data = AdminData::default();

        let info = PersonalInfo {
            name: "Ada".to_string(),
            title: "Engineer".to_string(),
            ..Default::default()
        };
        client.personal_info().upsert(&info).await.unwrap();
        reload(&client, Tab::PersonalInfo, &mut data).await;

        assert_eq!(data.info.name, "Ada");
        assert_eq!(
            backend.requests(),
            vec![
                (Method::Post, "/admin/personal-info".to_string()),
                (Method::Get, "/public/personal-info".to_string()),
            ]
        );
    }

    #[test]
    fn test_form_mode_keys_differ() {
        assert_eq!(FormMode::Create.key(), "create");
        assert_eq!(FormMode::Edit(Id(5)).key(), "edit-5");
        assert_ne!(FormMode::Edit(Id(5)).key(), FormMode::Edit(Id(6)).key());
    }
}
