use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::domain::{course::CourseRef, term::Term};

/// Where an instance sits relative to the current term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum InstanceStatus {
    Active,
    Completed,
    Scheduled,
}

impl InstanceStatus {
    pub fn of(term: Term, today: NaiveDate) -> Self {
        let current = Term::containing(today);
        match term.cmp(&current) {
            Ordering::Equal => Self::Active,
            Ordering::Less => Self::Completed,
            Ordering::Greater => Self::Scheduled,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum EnrollmentLevel {
    Open,
    #[strum(to_string = "Nearly Full")]
    NearlyFull,
    Full,
}

/// Threshold above which an instance is reported as nearly full
const NEARLY_FULL_RATIO: f64 = 0.8;

impl EnrollmentLevel {
    pub fn of(enrolled: u32, capacity: u32) -> Self {
        if enrolled >= capacity {
            Self::Full
        } else if f64::from(enrolled) > NEARLY_FULL_RATIO * f64::from(capacity) {
            Self::NearlyFull
        } else {
            Self::Open
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub enrollment_date: Option<String>,
}

/// A scheduled offering of a course
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseInstance {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub course: Option<CourseRef>,
    #[serde(default)]
    pub course_id: Option<String>,
    pub year: i32,
    pub semester: u8,
    #[serde(default)]
    pub instructor: String,
    #[serde(alias = "capacity", default)]
    pub student_capacity: u32,
    #[serde(default)]
    pub enrolled: u32,
    #[serde(default)]
    pub students: Vec<Student>,
}

impl CourseInstance {
    pub fn new(course_id: impl Into<String>, term: Term) -> Self {
        Self {
            id: None,
            course: None,
            course_id: Some(course_id.into()),
            year: term.year,
            semester: term.semester,
            instructor: String::new(),
            student_capacity: 0,
            enrolled: 0,
            students: vec![],
        }
    }

    pub fn with_course_title(mut self, title: impl Into<String>) -> Self {
        self.course = Some(CourseRef {
            course_id: self.course_id().to_owned(),
            title: Some(title.into()),
        });
        self
    }

    pub fn with_instructor(mut self, instructor: impl Into<String>) -> Self {
        self.instructor = instructor.into();
        self
    }

    pub fn with_enrollment(mut self, enrolled: u32, capacity: u32) -> Self {
        self.enrolled = enrolled;
        self.student_capacity = capacity;
        self
    }

    /// Flat `courseId` first, then the embedded course
    pub fn course_id(&self) -> &str {
        self.course_id
            .as_deref()
            .or_else(|| self.course.as_ref().map(|c| c.course_id.as_str()))
            .unwrap_or_default()
    }

    pub fn course_title(&self) -> Option<&str> {
        self.course.as_ref().and_then(|c| c.title.as_deref())
    }

    pub fn term(&self) -> Term {
        Term::new(self.year, self.semester)
    }

    pub fn status(&self, today: NaiveDate) -> InstanceStatus {
        InstanceStatus::of(self.term(), today)
    }

    pub fn can_delete(&self, today: NaiveDate) -> bool {
        self.enrolled == 0 && self.status(today) != InstanceStatus::Active
    }

    pub fn enrollment_level(&self) -> EnrollmentLevel {
        EnrollmentLevel::of(self.enrolled, self.student_capacity)
    }

    /// Enrolled over capacity, capped at 1.0
    pub fn fill_ratio(&self) -> f64 {
        if self.student_capacity == 0 {
            return if self.enrolled > 0 { 1.0 } else { 0.0 };
        }
        (f64::from(self.enrolled) / f64::from(self.student_capacity)).min(1.0)
    }

    /// Same offering: course and term
    pub fn is_offering(&self, term: Term, course_id: &str) -> bool {
        self.term() == term && self.course_id() == course_id
    }
}

/// Body of `POST /api/instances`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInstance {
    pub course_id: String,
    pub year: i32,
    pub semester: u8,
    pub instructor: String,
    pub student_capacity: u32,
}

impl From<NewInstance> for CourseInstance {
    fn from(value: NewInstance) -> Self {
        Self::new(value.course_id, Term::new(value.year, value.semester))
            .with_instructor(value.instructor)
            .with_enrollment(0, value.student_capacity)
    }
}

#[cfg(test)]
mod tests {
    use color_eyre::Result;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).expect("valid date")
    }

    #[rstest]
    #[case(2024, 1, InstanceStatus::Active)]
    #[case(2023, 2, InstanceStatus::Completed)]
    #[case(2024, 2, InstanceStatus::Scheduled)]
    #[case(2025, 1, InstanceStatus::Scheduled)]
    fn test_status(#[case] year: i32, #[case] semester: u8, #[case] expected: InstanceStatus) {
        let instance = CourseInstance::new("CS101", Term::new(year, semester));
        assert_eq!(instance.status(today()), expected);
    }

    #[rstest]
    #[case(0, 2024, 2, true)]
    #[case(0, 2024, 1, false)]
    #[case(3, 2023, 1, false)]
    #[case(0, 2022, 2, true)]
    fn test_can_delete(
        #[case] enrolled: u32,
        #[case] year: i32,
        #[case] semester: u8,
        #[case] expected: bool,
    ) {
        let instance =
            CourseInstance::new("CS101", Term::new(year, semester)).with_enrollment(enrolled, 30);
        assert_eq!(instance.can_delete(today()), expected);
    }

    #[rstest]
    #[case(30, 30, EnrollmentLevel::Full)]
    #[case(31, 30, EnrollmentLevel::Full)]
    #[case(25, 30, EnrollmentLevel::NearlyFull)]
    #[case(24, 30, EnrollmentLevel::Open)]
    #[case(0, 30, EnrollmentLevel::Open)]
    fn test_enrollment_level(
        #[case] enrolled: u32,
        #[case] capacity: u32,
        #[case] expected: EnrollmentLevel,
    ) {
        assert_eq!(EnrollmentLevel::of(enrolled, capacity), expected);
    }

    #[test]
    fn test_fill_ratio_is_capped() {
        let over = CourseInstance::new("CS101", Term::new(2024, 1)).with_enrollment(45, 30);
        assert_eq!(over.fill_ratio(), 1.0);
        let half = CourseInstance::new("CS101", Term::new(2024, 1)).with_enrollment(15, 30);
        assert_eq!(half.fill_ratio(), 0.5);
    }

    #[test]
    fn test_decode_nested_course() -> Result<()> {
        let instance: CourseInstance = serde_json::from_str(
            r#"{"id":7,"course":{"courseId":"CS209","title":"Intro"},"year":2024,"semester":2,"instructor":"Dr. Rao","capacity":40,"enrolled":12}"#,
        )?;
        assert_eq!(instance.course_id(), "CS209");
        assert_eq!(instance.course_title(), Some("Intro"));
        assert_eq!(instance.student_capacity, 40);
        assert!(instance.students.is_empty());
        Ok(())
    }

    #[test]
    fn test_decode_flat_course_id_wins() -> Result<()> {
        let instance: CourseInstance = serde_json::from_str(
            r#"{"courseId":"CS301","course":{"courseId":"CS999"},"year":2024,"semester":1,"studentCapacity":10}"#,
        )?;
        assert_eq!(instance.course_id(), "CS301");
        assert_eq!(instance.enrolled, 0);
        Ok(())
    }

    #[test]
    fn test_new_instance_body() -> Result<()> {
        let body = NewInstance {
            course_id: "CS209".into(),
            year: 2025,
            semester: 1,
            instructor: "Dr. Rao".into(),
            student_capacity: 60,
        };
        let json = serde_json::to_value(&body)?;
        assert_eq!(
            json,
            serde_json::json!({
                "courseId": "CS209",
                "year": 2025,
                "semester": 1,
                "instructor": "Dr. Rao",
                "studentCapacity": 60
            })
        );
        Ok(())
    }

    #[test]
    fn test_display_names() {
        assert_eq!(InstanceStatus::Active.to_string(), "Active");
        assert_eq!(EnrollmentLevel::NearlyFull.to_string(), "Nearly Full");
    }
}
