//! Placeholder content shown when the backend cannot be reached.

use api::{Id, PersonalInfo, Project, ProjectFields, ProjectStatus};

pub const PLACEHOLDER_NAME: &str = "Your Name";

pub fn placeholder_personal_info() -> PersonalInfo {
    PersonalInfo {
        name: PLACEHOLDER_NAME.to_string(),
        title: "Software Developer".to_string(),
        bio: "I build things for the web.".to_string(),
        about: "More about me will be here once the site is connected to its backend."
            .to_string(),
        ..Default::default()
    }
}

/// Two sample projects, the first one featured.
pub fn sample_projects() -> Vec<Project> {
    vec![
        Project::new(
            Id(1),
            ProjectFields {
                title: "Sample Project 1".to_string(),
                short_description: "A sample project to demonstrate the archive layout."
                    .to_string(),
                technologies: "React, Node.js, MongoDB".to_string(),
                github_url: "https://github.com".to_string(),
                demo_url: "https://example.com".to_string(),
                is_featured: true,
                status: ProjectStatus::Active,
                ..Default::default()
            },
        ),
        Project::new(
            Id(2),
            ProjectFields {
                title: "Sample Project 2".to_string(),
                short_description: "Another sample project for the archive.".to_string(),
                technologies: "Vue.js, Express, PostgreSQL".to_string(),
                project_url: "https://example.com".to_string(),
                display_order: 1,
                status: ProjectStatus::Active,
                ..Default::default()
            },
        ),
    ]
}

/// The featured subset of [`sample_projects`].
pub fn sample_featured_projects() -> Vec<Project> {
    sample_projects()
        .into_iter()
        .filter(|p| p.fields.is_featured)
        .collect()
}
