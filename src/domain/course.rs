use serde::{Deserialize, Deserializer, Serialize};

/// A catalog entry as returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(alias = "id")]
    pub course_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Ids of the courses required before taking this one
    #[serde(default, deserialize_with = "prerequisite_ids")]
    pub prerequisites: Vec<String>,
}

impl Course {
    pub fn new(course_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
            title: title.into(),
            description: String::new(),
            prerequisites: vec![],
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_prerequisites<I, S>(mut self, prerequisites: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prerequisites = prerequisites.into_iter().map(Into::into).collect();
        self
    }

    pub fn requires(&self, course_id: &str) -> bool {
        self.prerequisites.iter().any(|id| id == course_id)
    }
}

/// Short course reference embedded in instance payloads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRef {
    #[serde(alias = "id")]
    pub course_id: String,
    #[serde(default)]
    pub title: Option<String>,
}

/// Body of `POST /api/courses`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCourse {
    pub course_id: String,
    pub title: String,
    pub description: String,
    pub prerequisites: Vec<String>,
}

impl From<NewCourse> for Course {
    fn from(value: NewCourse) -> Self {
        Self {
            course_id: value.course_id,
            title: value.title,
            description: value.description,
            prerequisites: value.prerequisites,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PrerequisiteRef {
    Id(String),
    Course(CourseRef),
}

/// Prerequisites arrive either as bare ids or as embedded course objects
fn prerequisite_ids<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let refs = Option::<Vec<PrerequisiteRef>>::deserialize(deserializer)?;
    Ok(refs
        .unwrap_or_default()
        .into_iter()
        .map(|r| match r {
            PrerequisiteRef::Id(id) => id,
            PrerequisiteRef::Course(course) => course.course_id,
        })
        .collect())
}
