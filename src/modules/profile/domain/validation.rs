use serde_json::{Map, Value};

use crate::profile::domain::entities::{
    Document, Education, Intro, Media, ProfileResponse, Project, ResumeUrl, Technology,
    WorkExperience,
};

/// A candidate payload does not conform to the profile schema.
///
/// `path` uses dotted keys and `[index]` for list elements, e.g.
/// `workExperiences[1].years[0]`. The payload root is the empty path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileValidationError {
    #[error("missing required field `{}`", shown(.path))]
    MissingField { path: String },

    #[error("field `{}` must not be null", shown(.path))]
    NullValue { path: String },

    #[error("field `{}` expected {expected}, found {found}", shown(.path))]
    TypeMismatch {
        path: String,
        expected: &'static str,
        found: &'static str,
    },
}

impl ProfileValidationError {
    pub fn path(&self) -> &str {
        match self {
            Self::MissingField { path }
            | Self::NullValue { path }
            | Self::TypeMismatch { path, .. } => path,
        }
    }
}

fn shown(path: &str) -> &str {
    if path.is_empty() {
        "<root>"
    } else {
        path
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn unexpected(path: &str, expected: &'static str, found: &Value) -> ProfileValidationError {
    if found.is_null() {
        ProfileValidationError::NullValue {
            path: path.to_string(),
        }
    } else {
        ProfileValidationError::TypeMismatch {
            path: path.to_string(),
            expected,
            found: json_type(found),
        }
    }
}

type Validated<T> = Result<T, ProfileValidationError>;

fn as_string(value: &Value, path: &str) -> Validated<String> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| unexpected(path, "string", value))
}

fn as_bool(value: &Value, path: &str) -> Validated<bool> {
    value
        .as_bool()
        .ok_or_else(|| unexpected(path, "boolean", value))
}

fn as_list<'a, T>(
    value: &'a Value,
    path: &str,
    read: impl Fn(&'a Value, &str) -> Validated<T>,
) -> Validated<Vec<T>> {
    let items = value
        .as_array()
        .ok_or_else(|| unexpected(path, "array", value))?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| read(item, &format!("{path}[{index}]")))
        .collect()
}

/// Field access on one JSON object, tracking where it sits in the payload.
struct ObjectReader<'a> {
    fields: &'a Map<String, Value>,
    path: String,
}

impl<'a> ObjectReader<'a> {
    fn new(value: &'a Value, path: &str) -> Validated<Self> {
        match value {
            Value::Object(fields) => Ok(Self {
                fields,
                path: path.to_string(),
            }),
            other => Err(unexpected(path, "object", other)),
        }
    }

    fn child_path(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.path, key)
        }
    }

    fn required(&self, key: &str) -> Validated<(&'a Value, String)> {
        let path = self.child_path(key);
        match self.fields.get(key) {
            None => Err(ProfileValidationError::MissingField { path }),
            Some(Value::Null) => Err(ProfileValidationError::NullValue { path }),
            Some(value) => Ok((value, path)),
        }
    }

    // Optional keys are either absent or carry a real value; null is rejected.
    fn optional(&self, key: &str) -> Validated<Option<(&'a Value, String)>> {
        let path = self.child_path(key);
        match self.fields.get(key) {
            None => Ok(None),
            Some(Value::Null) => Err(ProfileValidationError::NullValue { path }),
            Some(value) => Ok(Some((value, path))),
        }
    }

    fn string(&self, key: &str) -> Validated<String> {
        let (value, path) = self.required(key)?;
        as_string(value, &path)
    }

    fn bool(&self, key: &str) -> Validated<bool> {
        let (value, path) = self.required(key)?;
        as_bool(value, &path)
    }

    fn optional_string(&self, key: &str) -> Validated<Option<String>> {
        self.optional(key)?
            .map(|(value, path)| as_string(value, &path))
            .transpose()
    }

    fn optional_bool(&self, key: &str) -> Validated<Option<bool>> {
        self.optional(key)?
            .map(|(value, path)| as_bool(value, &path))
            .transpose()
    }

    fn object(&self, key: &str) -> Validated<ObjectReader<'a>> {
        let (value, path) = self.required(key)?;
        ObjectReader::new(value, &path)
    }

    fn list<T>(&self, key: &str, read: impl Fn(&'a Value, &str) -> Validated<T>) -> Validated<Vec<T>> {
        let (value, path) = self.required(key)?;
        as_list(value, &path, read)
    }

    fn optional_list<T>(
        &self,
        key: &str,
        read: impl Fn(&'a Value, &str) -> Validated<T>,
    ) -> Validated<Option<Vec<T>>> {
        self.optional(key)?
            .map(|(value, path)| as_list(value, &path, read))
            .transpose()
    }
}

fn read_intro(fields: ObjectReader<'_>) -> Validated<Intro> {
    Ok(Intro {
        name: fields.string("name")?,
        nickname: fields.string("nickname")?,
        phone: fields.string("phone")?,
        email: fields.string("email")?,
        github: fields.string("github")?,
        linkedin: fields.string("linkedin")?,
        location: fields.string("location")?,
        website: fields.string("website")?,
    })
}

fn read_project(value: &Value, path: &str) -> Validated<Project> {
    let fields = ObjectReader::new(value, path)?;
    Ok(Project {
        name: fields.string("name")?,
        details: fields.string("details")?,
        url: fields.string("url")?,
        hide: fields.bool("hide")?,
    })
}

fn read_technology(value: &Value, path: &str) -> Validated<Technology> {
    let fields = ObjectReader::new(value, path)?;
    Ok(Technology {
        section: fields.string("section")?,
        details: fields.string("details")?,
    })
}

fn read_work_experience(value: &Value, path: &str) -> Validated<WorkExperience> {
    let fields = ObjectReader::new(value, path)?;
    Ok(WorkExperience {
        position: fields.string("position")?,
        company: fields.string("company")?,
        url: fields.string("url")?,
        years: fields.list("years", as_string)?,
        details: fields.list("details", as_string)?,
    })
}

fn read_education(value: &Value, path: &str) -> Validated<Education> {
    let fields = ObjectReader::new(value, path)?;
    Ok(Education {
        head: fields.string("head")?,
        details: fields.string("details")?,
    })
}

fn read_document(value: &Value, path: &str) -> Validated<Document> {
    let fields = ObjectReader::new(value, path)?;
    Ok(Document {
        name: fields.string("name")?,
        url: fields.string("url")?,
        hide: fields.optional_bool("hide")?,
    })
}

fn read_media(value: &Value, path: &str) -> Validated<Media> {
    let fields = ObjectReader::new(value, path)?;
    Ok(Media {
        name: fields.string("name")?,
        url: fields.string("url")?,
        media_type: fields.optional_string("type")?,
        hide: fields.optional_bool("hide")?,
    })
}

fn read_resume_url(fields: ObjectReader<'_>) -> Validated<ResumeUrl> {
    Ok(ResumeUrl {
        source_link: fields.string("sourceLink")?,
        full_version_link: fields.string("fullVersionLink")?,
    })
}

/// Checks `payload` against the profile schema and builds the typed value.
///
/// Fields are checked in declaration order and the first failure is
/// returned. Keys the schema does not know are ignored.
pub fn validate_profile(payload: &Value) -> Result<ProfileResponse, ProfileValidationError> {
    let root = ObjectReader::new(payload, "")?;

    Ok(ProfileResponse {
        intro: read_intro(root.object("intro")?)?,
        projects: root.list("projects", read_project)?,
        technologies: root.list("technologies", read_technology)?,
        work_experiences: root.list("workExperiences", read_work_experience)?,
        educations: root.list("educations", read_education)?,
        interests: root.list("interests", as_string)?,
        documents: root.optional_list("documents", read_document)?,
        media: root.optional_list("media", read_media)?,
        resume_url: read_resume_url(root.object("resumeUrl")?)?,
    })
}
