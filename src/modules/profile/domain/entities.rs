use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Optional keys are either absent (`default`) or carry a value; `null` is
/// a decode error, same as in `validate_profile`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Root aggregate of a profile payload.
///
/// Every list keeps presentation order. `documents` and `media` are the only
/// optional sections; when unset they are omitted from the encoded payload.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub intro: Intro,
    pub projects: Vec<Project>,
    pub technologies: Vec<Technology>,
    pub work_experiences: Vec<WorkExperience>,
    pub educations: Vec<Education>,
    pub interests: Vec<String>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(nullable = false)]
    pub documents: Option<Vec<Document>>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(nullable = false)]
    pub media: Option<Vec<Media>>,
    pub resume_url: ResumeUrl,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResumeUrl {
    pub source_link: String,
    pub full_version_link: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Intro {
    pub name: String,
    pub nickname: String,
    pub phone: String,
    pub email: String,
    pub github: String,
    pub linkedin: String,
    pub location: String,
    pub website: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Project {
    pub name: String,
    pub details: String,
    pub url: String,
    pub hide: bool,
}

impl Project {
    pub fn is_hidden(&self) -> bool {
        self.hide
    }
}

/// A named group of technologies, e.g. "Languages".
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Technology {
    pub section: String,
    pub details: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct WorkExperience {
    pub position: String,
    pub company: String,
    pub url: String,
    // Free text, either discrete years or a range such as "2019 - 2021".
    pub years: Vec<String>,
    pub details: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Education {
    pub head: String,
    pub details: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Document {
    pub name: String,
    /// Absolute URL or a path relative to the site root.
    pub url: String,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(nullable = false)]
    pub hide: Option<bool>,
}

impl Document {
    /// Absent `hide` means visible.
    pub fn is_hidden(&self) -> bool {
        self.hide.unwrap_or(false)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Media {
    pub name: String,
    /// Absolute URL or a path relative to the site root.
    pub url: String,
    /// MIME-like content type, e.g. `video/quicktime`.
    #[serde(
        rename = "type",
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(nullable = false)]
    pub media_type: Option<String>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(nullable = false)]
    pub hide: Option<bool>,
}

impl Media {
    /// Absent `hide` means visible.
    pub fn is_hidden(&self) -> bool {
        self.hide.unwrap_or(false)
    }
}
