use crate::domain::{course::Course, instance::CourseInstance};

/// Everything the course detail page shows, assembled from four requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseDetail {
    pub course: Course,
    pub prerequisites: Vec<Course>,
    pub dependents: Vec<Course>,
    pub instances: Vec<CourseInstance>,
}

impl CourseDetail {
    /// Keeps only the instances that belong to `course`
    pub fn new(
        course: Course,
        prerequisites: Vec<Course>,
        dependents: Vec<Course>,
        instances: Vec<CourseInstance>,
    ) -> Self {
        let instances = instances
            .into_iter()
            .filter(|i| i.course_id() == course.course_id)
            .collect();
        Self {
            course,
            prerequisites,
            dependents,
            instances,
        }
    }

    pub fn course_id(&self) -> &str {
        &self.course.course_id
    }

    /// Related course ids in display order: prerequisites first, then dependents
    pub fn related(&self) -> impl Iterator<Item = &Course> {
        self.prerequisites.iter().chain(self.dependents.iter())
    }

    pub fn related_count(&self) -> usize {
        self.prerequisites.len() + self.dependents.len()
    }
}
