use chrono::{Datelike, NaiveDate};

use crate::domain::{course::Course, instance::CourseInstance, term::Term};

const RECENT_PER_KIND: usize = 2;
const RECENT_MAX: usize = 4;

/// Numbers shown on the dashboard cards
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_courses: usize,
    pub total_instances: usize,
    pub total_capacity: u64,
    pub current_term_instances: usize,
    pub current_term: Option<Term>,
}

impl DashboardStats {
    pub fn compute(courses: &[Course], instances: &[CourseInstance], today: NaiveDate) -> Self {
        let current = Term::containing(today);
        Self {
            total_courses: courses.len(),
            total_instances: instances.len(),
            total_capacity: instances
                .iter()
                .map(|i| u64::from(i.student_capacity))
                .sum(),
            current_term_instances: instances.iter().filter(|i| i.term() == current).count(),
            current_term: Some(current),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activity {
    CourseAvailable {
        course_id: String,
        title: String,
    },
    InstanceScheduled {
        title: Option<String>,
        term: Term,
        capacity: u32,
    },
}

impl Activity {
    pub fn action(&self) -> &'static str {
        match self {
            Activity::CourseAvailable { .. } => "Course Available",
            Activity::InstanceScheduled { .. } => "Instance Scheduled",
        }
    }

    pub fn details(&self) -> String {
        match self {
            Activity::CourseAvailable { course_id, title } => format!("{title} ({course_id})"),
            Activity::InstanceScheduled { title, term, .. } => format!(
                "{} - Year {}, Semester {}",
                title.as_deref().unwrap_or("Course"),
                term.year,
                term.semester
            ),
        }
    }

    pub fn note(&self) -> String {
        match self {
            Activity::CourseAvailable { .. } => "Recently added".to_owned(),
            Activity::InstanceScheduled { capacity, .. } => format!("Capacity: {capacity}"),
        }
    }
}

fn last_n<T>(items: &[T], n: usize) -> &[T] {
    &items[items.len().saturating_sub(n)..]
}

/// The two newest courses, then the two newest instances from this year on
pub fn recent_activity(
    courses: &[Course],
    instances: &[CourseInstance],
    today: NaiveDate,
) -> Vec<Activity> {
    let upcoming: Vec<&CourseInstance> =
        instances.iter().filter(|i| i.year >= today.year()).collect();

    last_n(courses, RECENT_PER_KIND)
        .iter()
        .map(|c| Activity::CourseAvailable {
            course_id: c.course_id.clone(),
            title: c.title.clone(),
        })
        .chain(
            last_n(&upcoming, RECENT_PER_KIND)
                .iter()
                .map(|i| Activity::InstanceScheduled {
                    title: i.course_title().map(str::to_owned),
                    term: i.term(),
                    capacity: i.student_capacity,
                }),
        )
        .take(RECENT_MAX)
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 8, 20).expect("valid date")
    }

    fn instances() -> Vec<CourseInstance> {
        vec![
            CourseInstance::new("CS101", Term::new(2023, 2)).with_enrollment(0, 40),
            CourseInstance::new("CS101", Term::new(2024, 2)).with_enrollment(10, 60),
            CourseInstance::new("CS209", Term::new(2024, 2))
                .with_course_title("Data Structures")
                .with_enrollment(0, 1200),
            CourseInstance::new("CS301", Term::new(2025, 1)).with_enrollment(0, 30),
        ]
    }

    #[test]
    fn test_compute() {
        let courses = vec![Course::new("CS101", "P"), Course::new("CS209", "DS")];
        let stats = DashboardStats::compute(&courses, &instances(), today());
        assert_eq!(stats.total_courses, 2);
        assert_eq!(stats.total_instances, 4);
        assert_eq!(stats.total_capacity, 1330);
        assert_eq!(stats.current_term_instances, 2);
        assert_eq!(stats.current_term, Some(Term::new(2024, 2)));
    }

    #[test]
    fn test_compute_empty() {
        let stats = DashboardStats::compute(&[], &[], today());
        assert_eq!(stats.total_capacity, 0);
        assert_eq!(stats.current_term_instances, 0);
    }

    #[test]
    fn test_recent_activity() {
        let courses = vec![
            Course::new("CS101", "Programming"),
            Course::new("CS209", "Data Structures"),
            Course::new("CS301", "Algorithms"),
        ];
        let activity = recent_activity(&courses, &instances(), today());
        assert_eq!(activity.len(), 4);
        assert_eq!(activity[0].details(), "Data Structures (CS209)");
        assert_eq!(activity[1].action(), "Course Available");
        assert_eq!(
            activity[2].details(),
            "Data Structures - Year 2024, Semester 2"
        );
        assert_eq!(activity[3].details(), "Course - Year 2025, Semester 1");
        assert_eq!(activity[3].note(), "Capacity: 30");
    }

    #[test]
    fn test_recent_activity_skips_past_years() {
        let past = vec![CourseInstance::new("CS101", Term::new(2020, 1))];
        let activity = recent_activity(&[Course::new("CS101", "P")], &past, today());
        assert_eq!(activity.len(), 1);
    }
}
