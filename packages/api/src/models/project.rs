use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{null_as_default, split_technologies, Id, UnknownStatus};

/// Lifecycle of a project.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    #[default]
    Active,
    Archived,
    InProgress,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 3] = [Self::Active, Self::Archived, Self::InProgress];

    /// Wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Archived => "archived",
            Self::InProgress => "in-progress",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Archived => "Archived",
            Self::InProgress => "In Progress",
        }
    }
}

impl FromStr for ProjectStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// Editable fields of a project: the form draft and the request body.
///
/// Defaults: empty strings, `display_order = 0`, `is_featured = false`,
/// `status = active`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectFields {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub short_description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    /// Comma-separated, e.g. `"React, Java, Spring Boot"`.
    #[serde(deserialize_with = "null_as_default")]
    pub technologies: String,
    #[serde(deserialize_with = "null_as_default")]
    pub image_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub project_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub github_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub demo_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub display_order: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub is_featured: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub status: ProjectStatus,
}

impl ProjectFields {
    pub fn technology_list(&self) -> Vec<&str> {
        split_technologies(&self.technologies)
    }

    /// Where a "visit" link should point: the demo if there is one, else the
    /// project page.
    pub fn primary_link(&self) -> Option<&str> {
        [&self.demo_url, &self.project_url]
            .into_iter()
            .find(|url| !url.is_empty())
            .map(String::as_str)
    }

    /// Short description, or the full one when the short one is blank.
    pub fn summary(&self) -> &str {
        if self.short_description.is_empty() {
            &self.description
        } else {
            &self.short_description
        }
    }
}

/// A project as stored by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: Id,
    #[serde(flatten)]
    pub fields: ProjectFields,
}

impl Project {
    pub fn new(id: Id, fields: ProjectFields) -> Self {
        Self { id, fields }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_row_with_nulls_decodes() {
        let json = r#"{
            "id": 3,
            "title": "Portfolio",
            "description": null,
            "shortDescription": "This site",
            "technologies": "Rust, Dioxus",
            "imageUrl": null,
            "projectUrl": null,
            "githubUrl": "https://github.com/me/portfolio",
            "demoUrl": null,
            "displayOrder": null,
            "isFeatured": true,
            "status": "in-progress",
            "createdAt": "2024-01-01T10:00:00",
            "updatedAt": "2024-01-02T10:00:00"
        }"#;

        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.id, Id(3));
        assert_eq!(project.fields.title, "Portfolio");
        assert_eq!(project.fields.description, "");
        assert_eq!(project.fields.display_order, 0);
        assert!(project.fields.is_featured);
        assert_eq!(project.fields.status, ProjectStatus::InProgress);
        assert_eq!(project.fields.technology_list(), vec!["Rust", "Dioxus"]);
    }

    #[test]
    fn test_request_body_is_camel_case_and_keeps_technologies_string() {
        let fields = ProjectFields {
            title: "X".to_string(),
            short_description: "Y".to_string(),
            technologies: "Rust,  Wasm".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(&fields).unwrap();
        assert_eq!(value["title"], "X");
        assert_eq!(value["shortDescription"], "Y");
        assert_eq!(value["technologies"], "Rust,  Wasm");
        assert_eq!(value["isFeatured"], false);
        assert_eq!(value["displayOrder"], 0);
        assert_eq!(value["status"], "active");
        assert!(value.get("id").is_none());
    }

    #[test]
    fn test_status_parsing_and_labels() {
        assert_eq!("in-progress".parse::<ProjectStatus>(), Ok(ProjectStatus::InProgress));
        assert!("done".parse::<ProjectStatus>().is_err());
        assert_eq!(ProjectStatus::InProgress.label(), "In Progress");
    }

    #[test]
    fn test_primary_link_prefers_demo() {
        let mut fields = ProjectFields {
            project_url: "https://site".to_string(),
            ..Default::default()
        };
        assert_eq!(fields.primary_link(), Some("https://site"));
        fields.demo_url = "https://demo".to_string();
        assert_eq!(fields.primary_link(), Some("https://demo"));
        assert_eq!(ProjectFields::default().primary_link(), None);
    }
}
