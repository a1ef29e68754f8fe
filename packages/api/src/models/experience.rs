use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{null_as_default, split_technologies, Id, UnknownStatus};

/// Whether an experience is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExperienceStatus {
    #[default]
    Active,
    Archived,
}

impl ExperienceStatus {
    pub const ALL: [ExperienceStatus; 2] = [Self::Active, Self::Archived];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Archived => "archived",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Archived => "Archived",
        }
    }
}

impl FromStr for ExperienceStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// Editable fields of an experience entry.
///
/// `start_date` / `end_date` are free text ("Jan 2024", "Present"), never parsed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceFields {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub company: String,
    #[serde(deserialize_with = "null_as_default")]
    pub start_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub end_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub technologies: String,
    #[serde(deserialize_with = "null_as_default")]
    pub company_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub display_order: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub status: ExperienceStatus,
}

impl ExperienceFields {
    pub fn technology_list(&self) -> Vec<&str> {
        split_technologies(&self.technologies)
    }

    /// `"start - end"` as shown in tables.
    pub fn period(&self) -> String {
        format!("{} - {}", self.start_date, self.end_date)
    }
}

/// An experience as stored by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub id: Id,
    #[serde(flatten)]
    pub fields: ExperienceFields,
}

impl Experience {
    pub fn new(id: Id, fields: ExperienceFields) -> Self {
        Self { id, fields }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_and_period() {
        let json = r#"{
            "id": 9,
            "title": "Engineer",
            "company": "Acme",
            "startDate": "Jan 2022",
            "endDate": "Present",
            "description": "Built things",
            "technologies": null,
            "companyUrl": "https://acme.test",
            "displayOrder": 1,
            "status": "archived"
        }"#;
        let experience: Experience = serde_json::from_str(json).unwrap();
        assert_eq!(experience.id, Id(9));
        assert_eq!(experience.fields.period(), "Jan 2022 - Present");
        assert_eq!(experience.fields.technologies, "");
        assert_eq!(experience.fields.status, ExperienceStatus::Archived);
    }

    #[test]
    fn test_status_values() {
        assert_eq!("archived".parse::<ExperienceStatus>(), Ok(ExperienceStatus::Archived));
        assert!("in-progress".parse::<ExperienceStatus>().is_err());
        assert_eq!(
            serde_json::to_string(&ExperienceStatus::Active).unwrap(),
            "\"active\""
        );
    }
}
