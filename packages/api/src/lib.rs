//! # API crate: REST data access for the portfolio frontend
//!
//! Everything the UI needs to talk to the portfolio backend: the wire models,
//! one configured HTTP client, the resource services built on it, and the
//! session manager that owns the admin token.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | `Project`, `Experience`, `PersonalInfo` and auth bodies (camelCase JSON) |
//! | [`client`] | [`ApiClient`]: base URL, bearer header from the [`store::SessionStore`], status mapping, JSON decoding |
//! | [`transport`] | [`Transport`] seam and the reqwest-backed [`HttpTransport`] |
//! | [`projects`], [`experiences`], [`personal_info`] | Resource services, borrowed from a client (`client.projects().list()`) |
//! | [`auth`] | Login/register service and the [`SessionManager`] state machine |
//! | [`memory`] | [`MemoryBackend`], the REST contract answered from memory, for tests |
//! | [`config`] | [`ClientConfig`] (base URL) |
//! | [`error`] | [`RequestError`] |
//!
//! ## Endpoints
//!
//! Public reads live under `/public`, writes under `/admin` (bearer token
//! required), and credentials under `/auth`. No call is retried, cached or
//! validated on the client; errors reach the caller unchanged.

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod experiences;
pub mod memory;
pub mod models;
pub mod personal_info;
pub mod projects;
pub mod transport;

pub use auth::{Auth, SessionManager, SessionState};
pub use client::ApiClient;
pub use config::ClientConfig;
pub use error::RequestError;
pub use experiences::Experiences;
pub use memory::MemoryBackend;
pub use models::{
    Experience, ExperienceFields, ExperienceStatus, Id, PersonalInfo, Project, ProjectFields,
    ProjectStatus,
};
pub use personal_info::PersonalInfoService;
pub use projects::Projects;
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Method, Transport};

pub use store::Session;
