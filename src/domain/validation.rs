//! Form validation for creating courses and instances.
//!
//! Drafts hold what the user typed. `validate` turns a draft into the body
//! that is POSTed, or reports the first problem found.

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::domain::{course::NewCourse, instance::NewInstance};

pub const MIN_CAPACITY: u32 = 1;
pub const MAX_CAPACITY: u32 = 200;

lazy_static! {
    static ref COURSE_ID: Regex =
        Regex::new(r"^[A-Za-z]{2,6} ?[0-9]{3,4}[A-Za-z]?$").expect("course id pattern");
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("Course ID must look like CS209 or CS 209")]
    InvalidCourseId,
    #[error("A course cannot be its own prerequisite")]
    SelfPrerequisite,
    #[error("Capacity must be a whole number")]
    CapacityNotNumber,
    #[error("Capacity must be between {} and {}", MIN_CAPACITY, MAX_CAPACITY)]
    CapacityOutOfRange,
    #[error("Semester must be 1 or 2")]
    InvalidSemester,
}

impl ValidationError {
    /// Form field the error belongs to
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Required(field) => field,
            ValidationError::InvalidCourseId | ValidationError::SelfPrerequisite => "Course ID",
            ValidationError::CapacityNotNumber | ValidationError::CapacityOutOfRange => "Capacity",
            ValidationError::InvalidSemester => "Semester",
        }
    }
}

pub fn is_course_id(s: &str) -> bool {
    COURSE_ID.is_match(s)
}

fn required(value: &str, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::Required(field))
    } else {
        Ok(trimmed.to_owned())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseDraft {
    pub title: String,
    pub course_id: String,
    pub description: String,
    pub prerequisites: Vec<String>,
}

impl CourseDraft {
    pub fn validate(&self) -> Result<NewCourse, ValidationError> {
        let title = required(&self.title, "Course Title")?;
        let course_id = required(&self.course_id, "Course ID")?;
        if !is_course_id(&course_id) {
            return Err(ValidationError::InvalidCourseId);
        }
        let description = required(&self.description, "Description")?;
        if self.prerequisites.iter().any(|p| p == &course_id) {
            return Err(ValidationError::SelfPrerequisite);
        }
        Ok(NewCourse {
            course_id,
            title,
            description,
            prerequisites: self.prerequisites.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstanceDraft {
    pub course_id: Option<String>,
    pub instructor: String,
    pub year: Option<i32>,
    pub semester: Option<u8>,
    pub capacity: String,
}

impl InstanceDraft {
    pub fn validate(&self) -> Result<NewInstance, ValidationError> {
        let course_id = self
            .course_id
            .clone()
            .filter(|id| !id.trim().is_empty())
            .ok_or(ValidationError::Required("Course"))?;
        let instructor = required(&self.instructor, "Instructor")?;
        let year = self.year.ok_or(ValidationError::Required("Year"))?;
        let semester = self.semester.ok_or(ValidationError::Required("Semester"))?;
        if !(1..=2).contains(&semester) {
            return Err(ValidationError::InvalidSemester);
        }
        let capacity = required(&self.capacity, "Capacity")?;
        let student_capacity: u32 = capacity
            .parse()
            .map_err(|_| ValidationError::CapacityNotNumber)?;
        if !(MIN_CAPACITY..=MAX_CAPACITY).contains(&student_capacity) {
            return Err(ValidationError::CapacityOutOfRange);
        }
        Ok(NewInstance {
            course_id,
            year,
            semester,
            instructor,
            student_capacity,
        })
    }
}
