//! Search and filter rules for the course and instance lists

use std::collections::BTreeSet;

use crate::domain::{course::Course, instance::CourseInstance};

/// Case-insensitive substring match against any field. An empty query matches all.
pub fn matches_query<'a>(query: &str, fields: impl IntoIterator<Item = &'a str>) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    fields
        .into_iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseFilter {
    pub query: String,
}

impl CourseFilter {
    pub fn matches(&self, course: &Course) -> bool {
        matches_query(
            &self.query,
            [
                course.title.as_str(),
                course.course_id.as_str(),
                course.description.as_str(),
            ],
        )
    }

    pub fn apply<'a>(&self, courses: &'a [Course]) -> Vec<&'a Course> {
        courses.iter().filter(|c| self.matches(c)).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstanceFilter {
    pub query: String,
    pub year: Option<i32>,
    pub semester: Option<u8>,
}

impl InstanceFilter {
    pub fn matches(&self, instance: &CourseInstance) -> bool {
        let text = matches_query(
            &self.query,
            [
                instance.course_title().unwrap_or_default(),
                instance.course_id(),
                instance.instructor.as_str(),
            ],
        );
        text && self.year.map_or(true, |y| instance.year == y)
            && self.semester.map_or(true, |s| instance.semester == s)
    }

    pub fn apply<'a>(&self, instances: &'a [CourseInstance]) -> Vec<&'a CourseInstance> {
        instances.iter().filter(|i| self.matches(i)).collect()
    }

    pub fn is_narrowed(&self) -> bool {
        !self.query.trim().is_empty() || self.year.is_some() || self.semester.is_some()
    }
}

/// Distinct instance years, ascending
pub fn years<'a>(instances: impl IntoIterator<Item = &'a CourseInstance>) -> Vec<i32> {
    instances
        .into_iter()
        .map(|i| i.year)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::domain::term::Term;

    fn courses() -> Vec<Course> {
        vec![
            Course::new("CS101", "Programming").with_description("First steps in Rust"),
            Course::new("CS209", "Data Structures").with_description("Trees and graphs"),
            Course::new("MA110", "Calculus"),
        ]
    }

    fn instances() -> Vec<CourseInstance> {
        vec![
            CourseInstance::new("CS101", Term::new(2024, 1))
                .with_course_title("Programming")
                .with_instructor("Dr. Ada"),
            CourseInstance::new("CS209", Term::new(2024, 2)).with_instructor("Prof. Grace"),
            CourseInstance::new("MA110", Term::new(2023, 1)).with_instructor("Dr. Ada"),
        ]
    }

    #[rstest]
    #[case("", 3)]
    #[case("   ", 3)]
    #[case("cs", 2)]
    #[case("TREES", 1)]
    #[case("calc", 1)]
    #[case("zzz", 0)]
    fn test_course_filter(#[case] query: &str, #[case] expected: usize) {
        let filter = CourseFilter {
            query: query.into(),
        };
        assert_eq!(filter.apply(&courses()).len(), expected);
    }

    #[rstest]
    #[case("", None, None, 3)]
    #[case("ada", None, None, 2)]
    #[case("programming", None, None, 1)]
    #[case("cs209", None, None, 1)]
    #[case("", Some(2024), None, 2)]
    #[case("", Some(2024), Some(2), 1)]
    #[case("ada", Some(2023), Some(1), 1)]
    #[case("", None, Some(1), 2)]
    fn test_instance_filter(
        #[case] query: &str,
        #[case] year: Option<i32>,
        #[case] semester: Option<u8>,
        #[case] expected: usize,
    ) {
        let filter = InstanceFilter {
            query: query.into(),
            year,
            semester,
        };
        assert_eq!(filter.apply(&instances()).len(), expected);
    }

    #[test]
    fn test_years_are_distinct_and_sorted() {
        assert_eq!(years(&instances()), vec![2023, 2024]);
        assert!(years(&Vec::<CourseInstance>::new()).is_empty());
    }

    #[test]
    fn test_is_narrowed() {
        assert!(!InstanceFilter::default().is_narrowed());
        assert!(InstanceFilter {
            year: Some(2024),
            ..Default::default()
        }
        .is_narrowed());
    }
}
