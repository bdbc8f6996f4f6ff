//! The loaded view of the backend: courses plus their scheduled instances.
//!
//! Derived relations (dependents, instance counts, delete eligibility) are
//! computed from whatever has been fetched. Nothing here talks to the network.

use chrono::NaiveDate;

use crate::domain::{
    course::Course,
    instance::{CourseInstance, InstanceStatus},
    term::Term,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub courses: Vec<Course>,
    pub instances: Vec<CourseInstance>,
}

impl Catalog {
    pub fn new(courses: Vec<Course>, instances: Vec<CourseInstance>) -> Self {
        Self { courses, instances }
    }

    pub fn course(&self, course_id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.course_id == course_id)
    }

    pub fn course_title(&self, course_id: &str) -> Option<&str> {
        self.course(course_id).map(|c| c.title.as_str())
    }

    pub fn instance_count(&self, course_id: &str) -> usize {
        self.instances
            .iter()
            .filter(|i| i.course_id() == course_id)
            .count()
    }

    pub fn instances_for<'a>(
        &'a self,
        course_id: &'a str,
    ) -> impl Iterator<Item = &'a CourseInstance> + 'a {
        self.instances
            .iter()
            .filter(move |i| i.course_id() == course_id)
    }

    /// Courses listed as prerequisites of `course_id`, in declaration order.
    /// Ids that are not in the catalog are skipped.
    pub fn prerequisites(&self, course_id: &str) -> Vec<&Course> {
        self.course(course_id)
            .map(|course| {
                course
                    .prerequisites
                    .iter()
                    .filter_map(|id| self.course(id))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Courses that require `course_id`
    pub fn dependents(&self, course_id: &str) -> Vec<&Course> {
        self.courses
            .iter()
            .filter(|c| c.requires(course_id))
            .collect()
    }

    pub fn has_active_instance(&self, course_id: &str, today: NaiveDate) -> bool {
        self.instances_for(course_id)
            .any(|i| i.status(today) == InstanceStatus::Active)
    }

    /// A course can go when nothing depends on it and it is not running this term
    pub fn course_can_delete(&self, course_id: &str, today: NaiveDate) -> bool {
        self.dependents(course_id).is_empty() && !self.has_active_instance(course_id, today)
    }

    /// Title for an instance, falling back to the catalog and then to the id
    pub fn instance_title<'a>(&'a self, instance: &'a CourseInstance) -> &'a str {
        instance
            .course_title()
            .or_else(|| self.course_title(instance.course_id()))
            .unwrap_or_else(|| instance.course_id())
    }

    pub fn remove_course(&mut self, course_id: &str) -> Option<Course> {
        let index = self.courses.iter().position(|c| c.course_id == course_id)?;
        Some(self.courses.remove(index))
    }

    pub fn remove_instance(&mut self, term: Term, course_id: &str) -> Option<CourseInstance> {
        let index = self
            .instances
            .iter()
            .position(|i| i.is_offering(term, course_id))?;
        Some(self.instances.remove(index))
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty() && self.instances.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 9, 1).expect("valid date")
    }

    fn catalog() -> Catalog {
        Catalog::new(
            vec![
                Course::new("CS101", "Programming"),
                Course::new("CS209", "Data Structures").with_prerequisites(["CS101"]),
                Course::new("CS301", "Algorithms").with_prerequisites(["CS209", "CS999"]),
                Course::new("CS401", "Compilers"),
            ],
            vec![
                CourseInstance::new("CS101", Term::new(2023, 1)),
                CourseInstance::new("CS101", Term::new(2024, 2)),
                CourseInstance::new("CS401", Term::new(2024, 2)),
                CourseInstance::new("CS209", Term::new(2025, 1)),
            ],
        )
    }

    fn ids(courses: Vec<&Course>) -> Vec<&str> {
        courses.into_iter().map(|c| c.course_id.as_str()).collect()
    }

    #[test]
    fn test_instance_count() {
        let catalog = catalog();
        assert_eq!(catalog.instance_count("CS101"), 2);
        assert_eq!(catalog.instance_count("CS301"), 0);
    }

    #[test]
    fn test_prerequisites_skip_unknown() {
        assert_eq!(ids(catalog().prerequisites("CS301")), vec!["CS209"]);
        assert!(catalog().prerequisites("NOPE").is_empty());
    }

    #[test]
    fn test_dependents() {
        assert_eq!(ids(catalog().dependents("CS101")), vec!["CS209"]);
        assert!(catalog().dependents("CS301").is_empty());
    }

    #[test]
    fn test_course_can_delete() {
        let catalog = catalog();
        // has dependents
        assert!(!catalog.course_can_delete("CS101", today()));
        // running this term
        assert!(!catalog.course_can_delete("CS401", today()));
        assert!(catalog.course_can_delete("CS301", today()));
    }

    #[test]
    fn test_instance_title_falls_back() {
        let catalog = catalog();
        let from_catalog = CourseInstance::new("CS209", Term::new(2025, 1));
        assert_eq!(catalog.instance_title(&from_catalog), "Data Structures");

        let embedded = from_catalog.clone().with_course_title("DS");
        assert_eq!(catalog.instance_title(&embedded), "DS");

        let unknown = CourseInstance::new("XX1", Term::new(2025, 1));
        assert_eq!(catalog.instance_title(&unknown), "XX1");
    }

    #[test]
    fn test_remove() {
        let mut catalog = catalog();
        assert!(catalog.remove_course("CS301").is_some());
        assert!(catalog.remove_course("CS301").is_none());
        assert_eq!(catalog.courses.len(), 3);

        let removed = catalog.remove_instance(Term::new(2024, 2), "CS101");
        assert_eq!(removed.map(|i| i.year), Some(2024));
        assert_eq!(catalog.instance_count("CS101"), 1);
    }
}
