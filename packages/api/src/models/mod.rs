//! # Wire models
//!
//! Plain records exchanged with the backend as camelCase JSON.
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`ProjectFields`] / [`Project`] | A portfolio project; `Project` adds the backend-assigned [`Id`]. |
//! | [`ExperienceFields`] / [`Experience`] | A work experience entry. |
//! | [`PersonalInfo`] | The singleton owner profile (no id). |
//! | [`Credentials`], [`LoginResponse`], [`MessageResponse`] | Auth endpoint bodies. |
//!
//! The `*Fields` structs are both the form draft and the create/update request
//! body. Every field has an explicit default, and a JSON `null` decodes to that
//! default, so a half-filled backend row still loads. Unknown keys such as
//! `createdAt` are ignored.
//!
//! `technologies` is kept as the comma-separated string the backend stores;
//! [`split_technologies`] is for display only.

use serde::{Deserialize, Deserializer, Serialize};

mod auth;
mod experience;
mod personal_info;
mod project;

pub use auth::{Credentials, LoginResponse, MessageResponse};
pub use experience::{Experience, ExperienceFields, ExperienceStatus};
pub use personal_info::PersonalInfo;
pub use project::{Project, ProjectFields, ProjectStatus};

/// Opaque identifier assigned by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id(pub i64);

impl std::fmt::Display for Id {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unknown status string from a form control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl std::fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown status: {}", self.0)
    }
}

impl std::error::Error for UnknownStatus {}

/// Split a comma-separated technologies string into display tags.
///
/// Pieces are trimmed and empty pieces dropped: `"Rust, , Dioxus"` gives
/// `["Rust", "Dioxus"]`.
pub fn split_technologies(technologies: &str) -> Vec<&str> {
    technologies
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect()
}

/// Deserialize `null` as `T::default()`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_technologies() {
        assert_eq!(
            split_technologies("React, Java,Spring Boot "),
            vec!["React", "Java", "Spring Boot"]
        );
        assert_eq!(split_technologies("Rust, , Dioxus,"), vec!["Rust", "Dioxus"]);
        assert!(split_technologies("").is_empty());
    }

    #[test]
    fn test_id_is_a_bare_number_on_the_wire() {
        assert_eq!(serde_json::to_string(&Id(7)).unwrap(), "7");
        assert_eq!(serde_json::from_str::<Id>("12").unwrap(), Id(12));
        assert_eq!(Id(3).to_string(), "3");
    }
}
