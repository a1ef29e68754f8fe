//! # In-memory backend
//!
//! [`MemoryBackend`] is a [`Transport`] that answers the portfolio REST
//! contract from memory instead of the network. Tests build a client on top of
//! it and exercise the real request/response path: URL building, bearer
//! headers, status mapping and JSON decoding all run unchanged.
//!
//! ## Behaviour
//!
//! | Route | Answer |
//! |-------|--------|
//! | `GET /public/projects[/featured][/{id}]` | list (by `displayOrder`, then id), featured subset, or one / 404 |
//! | `POST/PUT/DELETE /admin/projects[/{id}]` | create / update / delete, 404 for unknown ids |
//! | same for `/public/experiences` and `/admin/experiences` | |
//! | `GET /public/personal-info` | the profile, 404 before the first upsert |
//! | `POST /admin/personal-info` | upsert |
//! | `POST /auth/login` | `{token, username}` or 401 |
//! | `POST /auth/register` | `{message}` or 400 when the username is taken |
//!
//! `/admin/*` routes answer 401 unless the request carries a token issued by
//! this backend. [`MemoryBackend::set_offline`] turns every request into a
//! [`RequestError::Network`], and [`MemoryBackend::fail_path`] makes one path
//! answer 500. Every request that reaches the backend is recorded and can be
//! read back with [`MemoryBackend::requests`].

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::RequestError;
use crate::models::{
    Credentials, Experience, ExperienceFields, Id, LoginResponse, MessageResponse, PersonalInfo,
    Project, ProjectFields,
};
use crate::transport::{ApiRequest, ApiResponse, Method, Transport};

#[derive(Debug, Default)]
struct Backend {
    projects: Vec<Project>,
    experiences: Vec<Experience>,
    personal_info: Option<PersonalInfo>,
    users: HashMap<String, String>,
    tokens: HashSet<String>,
    next_id: i64,
    offline: bool,
    failing: HashSet<String>,
    log: Vec<(Method, String)>,
}

impl Backend {
    fn next_id(&mut self) -> Id {
        self.next_id += 1;
        Id(self.next_id)
    }

    fn issue_token(&mut self, username: &str) -> String {
        let token = format!("memory-token-{username}-{}", self.tokens.len() + 1);
        self.tokens.insert(token.clone());
        token
    }
}

/// In-memory REST backend for tests.
///
/// Clones share state, so a test can keep a handle while a client owns
/// another.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    inner: Arc<Mutex<Backend>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an account that can log in.
    pub fn with_user(self, username: &str, password: &str) -> Self {
        self.lock()
            .users
            .insert(username.to_string(), password.to_string());
        self
    }

    pub fn with_personal_info(self, info: PersonalInfo) -> Self {
        self.lock().personal_info = Some(info);
        self
    }

    /// Seed a project directly, bypassing auth. Returns its id.
    pub fn insert_project(&self, fields: ProjectFields) -> Id {
        let mut backend = self.lock();
        let id = backend.next_id();
        backend.projects.push(Project::new(id, fields));
        id
    }

    /// Seed an experience directly, bypassing auth. Returns its id.
    pub fn insert_experience(&self, fields: ExperienceFields) -> Id {
        let mut backend = self.lock();
        let id = backend.next_id();
        backend.experiences.push(Experience::new(id, fields));
        id
    }

    /// Mint a token the admin routes will accept.
    pub fn issue_token(&self, username: &str) -> String {
        self.lock().issue_token(username)
    }

    /// Simulate an unreachable server.
    pub fn set_offline(&self, offline: bool) {
        self.lock().offline = offline;
    }

    /// Make every request to `path` answer 500.
    pub fn fail_path(&self, path: &str) {
        self.lock().failing.insert(path.to_string());
    }

    /// `(method, path)` of every request received, oldest first.
    pub fn requests(&self) -> Vec<(Method, String)> {
        self.lock().log.clone()
    }

    pub fn projects(&self) -> Vec<Project> {
        self.lock().projects.clone()
    }

    pub fn experiences(&self) -> Vec<Experience> {
        self.lock().experiences.clone()
    }

    pub fn personal_info(&self) -> Option<PersonalInfo> {
        self.lock().personal_info.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Backend> {
        // A test that panicked while holding the lock has already failed.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn handle(&self, request: &ApiRequest) -> ApiResponse {
        let mut backend = self.lock();
        backend.log.push((request.method, request.path.clone()));

        if backend.failing.contains(&request.path) {
            return error(500, "Internal Server Error");
        }

        let segments: Vec<&str> = request
            .path
            .trim_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        if segments.first() == Some(&"admin") {
            let authorized = request
                .authorization
                .as_deref()
                .and_then(|value| value.strip_prefix("Bearer "))
                .is_some_and(|token| backend.tokens.contains(token));
            if !authorized {
                return error(401, "Full authentication is required to access this resource");
            }
        }

        let body = request.body.as_deref().unwrap_or("");
        match (request.method, segments.as_slice()) {
            (Method::Get, ["public", "projects"]) => {
                let mut projects = backend.projects.clone();
                projects.sort_by_key(|p| (p.fields.display_order, p.id));
                ok(&projects)
            }
            (Method::Get, ["public", "projects", "featured"]) => {
                let featured: Vec<&Project> =
                    backend.projects.iter().filter(|p| p.fields.is_featured).collect();
                ok(&featured)
            }
            (Method::Get, ["public", "projects", id]) => match find(&backend.projects, id, |p| p.id) {
                Some(index) => ok(&backend.projects[index]),
                None => not_found("Project", id),
            },
            (Method::Post, ["admin", "projects"]) => match parse::<ProjectFields>(body) {
                Ok(fields) => {
                    let project = Project::new(backend.next_id(), fields);
                    backend.projects.push(project.clone());
                    ok(&project)
                }
                Err(response) => response,
            },
            (Method::Put, ["admin", "projects", id]) => {
                let Some(index) = find(&backend.projects, id, |p| p.id) else {
                    return not_found("Project", id);
                };
                match parse::<ProjectFields>(body) {
                    Ok(fields) => {
                        backend.projects[index].fields = fields;
                        ok(&backend.projects[index])
                    }
                    Err(response) => response,
                }
            }
            (Method::Delete, ["admin", "projects", id]) => match find(&backend.projects, id, |p| p.id) {
                Some(index) => {
                    backend.projects.remove(index);
                    empty()
                }
                None => not_found("Project", id),
            },
            (Method::Get, ["public", "experiences"]) => {
                let mut experiences = backend.experiences.clone();
                experiences.sort_by_key(|e| (e.fields.display_order, e.id));
                ok(&experiences)
            }
            (Method::Get, ["public", "experiences", id]) => {
                match find(&backend.experiences, id, |e| e.id) {
                    Some(index) => ok(&backend.experiences[index]),
                    None => not_found("Experience", id),
                }
            }
            (Method::Post, ["admin", "experiences"]) => match parse::<ExperienceFields>(body) {
                Ok(fields) => {
                    let experience = Experience::new(backend.next_id(), fields);
                    backend.experiences.push(experience.clone());
                    ok(&experience)
                }
                Err(response) => response,
            },
            (Method::Put, ["admin", "experiences", id]) => {
                let Some(index) = find(&backend.experiences, id, |e| e.id) else {
                    return not_found("Experience", id);
                };
                match parse::<ExperienceFields>(body) {
                    Ok(fields) => {
                        backend.experiences[index].fields = fields;
                        ok(&backend.experiences[index])
                    }
                    Err(response) => response,
                }
            }
            (Method::Delete, ["admin", "experiences", id]) => {
                match find(&backend.experiences, id, |e| e.id) {
                    Some(index) => {
                        backend.experiences.remove(index);
                        empty()
                    }
                    None => not_found("Experience", id),
                }
            }
            (Method::Get, ["public", "personal-info"]) => match &backend.personal_info {
                Some(info) => ok(info),
                None => error(404, "Not Found"),
            },
            (Method::Post, ["admin", "personal-info"]) => match parse::<PersonalInfo>(body) {
                Ok(info) => {
                    backend.personal_info = Some(info.clone());
                    ok(&info)
                }
                Err(response) => response,
            },
            (Method::Post, ["auth", "login"]) => match parse::<Credentials>(body) {
                Ok(credentials) => {
                    if backend.users.get(&credentials.username) != Some(&credentials.password) {
                        return error(401, "Bad credentials");
                    }
                    let token = backend.issue_token(&credentials.username);
                    ok(&LoginResponse {
                        token,
                        username: credentials.username,
                    })
                }
                Err(response) => response,
            },
            (Method::Post, ["auth", "register"]) => match parse::<Credentials>(body) {
                Ok(credentials) => {
                    if backend.users.contains_key(&credentials.username) {
                        return error(400, "Error: Username is already taken!");
                    }
                    backend.users.insert(credentials.username, credentials.password);
                    ok(&MessageResponse {
                        message: "User registered successfully!".to_string(),
                    })
                }
                Err(response) => response,
            },
            _ => error(404, "Not Found"),
        }
    }
}

impl Transport for MemoryBackend {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, RequestError> {
        if self.lock().offline {
            return Err(RequestError::Network(format!(
                "{} {}: connection refused",
                request.method, request.url
            )));
        }
        Ok(self.handle(&request))
    }
}

fn find<E>(items: &[E], raw_id: &str, id_of: impl Fn(&E) -> Id) -> Option<usize> {
    let id = Id(raw_id.parse().ok()?);
    items.iter().position(|item| id_of(item) == id)
}

fn parse<B: DeserializeOwned>(body: &str) -> Result<B, ApiResponse> {
    serde_json::from_str(body).map_err(|e| error(400, &e.to_string()))
}

fn ok<B: Serialize + ?Sized>(body: &B) -> ApiResponse {
    match serde_json::to_string(body) {
        Ok(body) => ApiResponse { status: 200, body },
        Err(e) => error(500, &e.to_string()),
    }
}

fn empty() -> ApiResponse {
    ApiResponse {
        status: 200,
        body: String::new(),
    }
}

fn not_found(entity: &str, id: &str) -> ApiResponse {
    error(404, &format!("{entity} not found with id: {id}"))
}

fn error(status: u16, message: &str) -> ApiResponse {
    ApiResponse {
        status,
        body: serde_json::json!({ "status": status, "message": message }).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(method: Method, path: &str, body: Option<&str>) -> ApiRequest {
        ApiRequest {
            method,
            path: path.to_string(),
            url: format!("http://memory{path}"),
            authorization: None,
            body: body.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let backend = MemoryBackend::new();
        let response = backend
            .send(request(Method::Get, "/public/nothing", None))
            .await
            .unwrap();
        assert_eq!(response.status, 404);
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_display_order() {
        let backend = MemoryBackend::new();
        backend.insert_project(ProjectFields {
            title: "second".to_string(),
            display_order: 2,
            ..Default::default()
        });
        backend.insert_project(ProjectFields {
            title: "first".to_string(),
            display_order: 1,
            ..Default::default()
        });

        let response = backend
            .send(request(Method::Get, "/public/projects", None))
            .await
            .unwrap();
        let projects: Vec<Project> = serde_json::from_str(&response.body).unwrap();
        let titles: Vec<&str> = projects.iter().map(|p| p.fields.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second"]);
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let backend = MemoryBackend::new();
        let response = backend
            .send(request(Method::Post, "/auth/login", Some("{not json")))
            .await
            .unwrap();
        assert_eq!(response.status, 400);
    }

    #[tokio::test]
    async fn test_failing_path_and_offline() {
        let backend = MemoryBackend::new();
        backend.fail_path("/public/experiences");
        let response = backend
            .send(request(Method::Get, "/public/experiences", None))
            .await
            .unwrap();
        assert_eq!(response.status, 500);

        backend.set_offline(true);
        let err = backend
            .send(request(Method::Get, "/public/projects", None))
            .await
            .unwrap_err();
        assert!(matches!(err, RequestError::Network(_)));
        // Offline requests never reach the log
        assert_eq!(backend.requests().len(), 1);
    }
}
