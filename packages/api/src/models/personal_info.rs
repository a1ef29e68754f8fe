use serde::{Deserialize, Serialize};

use super::null_as_default;

/// The site owner's profile. There is at most one on the backend; it is
/// written with a single upsert.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    /// Short tagline shown in the hero.
    #[serde(deserialize_with = "null_as_default")]
    pub bio: String,
    /// Longer text for the about section.
    #[serde(deserialize_with = "null_as_default")]
    pub about: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub linkedin_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub github_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub profile_image_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub resume_url: String,
}

impl PersonalInfo {
    /// `(label, url)` for every non-empty profile link, in display order.
    pub fn links(&self) -> Vec<(&'static str, &str)> {
        [
            ("LinkedIn", &self.linkedin_url),
            ("GitHub", &self.github_url),
            ("Resume", &self.resume_url),
        ]
        .into_iter()
        .filter(|(_, url)| !url.is_empty())
        .map(|(label, url)| (label, url.as_str()))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_id_is_ignored_and_nulls_default() {
        let json = r#"{"id": 1, "name": "Ada", "title": "Engineer", "phone": null, "githubUrl": "https://github.com/ada"}"#;
        let info: PersonalInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.name, "Ada");
        assert_eq!(info.phone, "");
        assert_eq!(info.links(), vec![("GitHub", "https://github.com/ada")]);
    }

    #[test]
    fn test_serializes_every_field() {
        let value = serde_json::to_value(PersonalInfo::default()).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 10);
        assert!(object.contains_key("profileImageUrl"));
        assert!(object.contains_key("linkedinUrl"));
    }
}
