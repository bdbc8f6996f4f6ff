use chrono::NaiveDate;

use crate::{
    core::{
        cmd::Cmd,
        msg::pages::InstanceDetailMsg,
        state::{remote::Remote, selection},
    },
    domain::{
        instance::{CourseInstance, Student},
        term::Term,
    },
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InstanceDetailState {
    pub term: Term,
    pub course_id: String,
    pub instance: Remote<CourseInstance>,
    /// Cursor over the enrolled students
    pub selected: usize,
}

impl InstanceDetailState {
    pub fn new(term: Term, course_id: impl Into<String>) -> Self {
        Self {
            term,
            course_id: course_id.into(),
            ..Default::default()
        }
    }

    pub fn students(&self) -> &[Student] {
        self.instance
            .loaded()
            .map(|i| i.students.as_slice())
            .unwrap_or_default()
    }

    pub fn selected_student(&self) -> Option<&Student> {
        self.students().get(self.selected)
    }

    pub fn can_delete(&self, today: NaiveDate) -> bool {
        self.instance.loaded().is_some_and(|i| i.can_delete(today))
    }

    pub fn update(&mut self, msg: InstanceDetailMsg) -> Vec<Cmd> {
        match msg {
            InstanceDetailMsg::SelectNext => {
                self.selected = selection::next(self.selected, self.students().len());
            }
            InstanceDetailMsg::SelectPrev => {
                self.selected = selection::prev(self.selected);
            }
            InstanceDetailMsg::RequestDelete => {}
        }
        vec![]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn student(name: &str) -> Student {
        Student {
            id: None,
            name: name.to_owned(),
            email: format!("{}@example.edu", name.to_lowercase()),
            enrollment_date: None,
        }
    }

    #[test]
    fn test_student_cursor() {
        let term = Term::new(2024, 2);
        let mut instance = CourseInstance::new("CS101", term);
        instance.students = vec![student("Ada"), student("Grace")];
        let mut detail = InstanceDetailState {
            instance: Remote::Loaded(instance),
            ..InstanceDetailState::new(term, "CS101")
        };

        detail.update(InstanceDetailMsg::SelectNext);
        detail.update(InstanceDetailMsg::SelectNext);
        assert_eq!(detail.selected_student().map(|s| s.name.as_str()), Some("Grace"));
        detail.update(InstanceDetailMsg::SelectPrev);
        assert_eq!(detail.selected, 0);
    }

    #[test]
    fn test_nothing_loaded() {
        let detail = InstanceDetailState::new(Term::new(2024, 2), "CS101");
        assert!(detail.students().is_empty());
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date");
        assert!(!detail.can_delete(today));
    }
}
