use chrono::NaiveDate;

use crate::{
    core::{
        cmd::Cmd,
        msg::form::InstanceFormMsg,
        state::{input::TextInput, remote::Remote},
        update::UpdateContext,
    },
    domain::{
        course::Course,
        instance::NewInstance,
        term::schedulable_years,
        validation::{InstanceDraft, ValidationError},
    },
};

const SEMESTERS: [u8; 2] = [1, 2];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InstanceField {
    #[default]
    Course,
    Instructor,
    Year,
    Semester,
    Capacity,
    Submit,
}

impl InstanceField {
    const ORDER: [InstanceField; 6] = [
        InstanceField::Course,
        InstanceField::Instructor,
        InstanceField::Year,
        InstanceField::Semester,
        InstanceField::Capacity,
        InstanceField::Submit,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }

    pub fn is_text(self) -> bool {
        matches!(self, InstanceField::Instructor | InstanceField::Capacity)
    }

    pub fn is_choice(self) -> bool {
        matches!(
            self,
            InstanceField::Course | InstanceField::Year | InstanceField::Semester
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            InstanceField::Course => "Course",
            InstanceField::Instructor => "Instructor",
            InstanceField::Year => "Year",
            InstanceField::Semester => "Semester",
            InstanceField::Capacity => "Capacity",
            InstanceField::Submit => "Create Instance",
        }
    }
}

/// Moves a choice one step through `options` without wrapping.
/// An unset choice starts at the first option either way.
fn step<T: Clone + PartialEq>(current: Option<T>, options: &[T], forward: bool) -> Option<T> {
    let Some(value) = current else {
        return options.first().cloned();
    };
    let Some(position) = options.iter().position(|o| *o == value) else {
        return options.first().cloned();
    };
    let target = if forward {
        (position + 1).min(options.len().saturating_sub(1))
    } else {
        position.saturating_sub(1)
    };
    options.get(target).cloned()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InstanceFormState {
    /// Courses an instance can be scheduled for
    pub options: Remote<Vec<Course>>,
    pub course_id: Option<String>,
    pub instructor: TextInput,
    pub year: Option<i32>,
    pub semester: Option<u8>,
    pub capacity: TextInput,
    pub years: Vec<i32>,
    pub focus: InstanceField,
    pub submitting: bool,
    pub error: Option<String>,
}

impl InstanceFormState {
    /// An empty form, optionally for a given course
    pub fn new(course_id: Option<String>, today: NaiveDate) -> Self {
        Self {
            course_id,
            years: schedulable_years(today),
            ..Default::default()
        }
    }

    pub fn draft(&self) -> InstanceDraft {
        InstanceDraft {
            course_id: self.course_id.clone(),
            instructor: self.instructor.value().to_owned(),
            year: self.year,
            semester: self.semester,
            capacity: self.capacity.value().to_owned(),
        }
    }

    pub fn validate(&mut self) -> Result<NewInstance, ValidationError> {
        let result = self.draft().validate();
        self.error = result.as_ref().err().map(ToString::to_string);
        result
    }

    pub fn course_ids(&self) -> Vec<String> {
        self.options
            .loaded()
            .map(|courses| courses.iter().map(|c| c.course_id.clone()).collect())
            .unwrap_or_default()
    }

    /// Title of the chosen course, when the options are loaded
    pub fn course_title(&self) -> Option<&str> {
        let id = self.course_id.as_deref()?;
        self.options
            .loaded()?
            .iter()
            .find(|c| c.course_id == id)
            .map(|c| c.title.as_str())
    }

    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            InstanceField::Instructor => Some(&mut self.instructor),
            InstanceField::Capacity => Some(&mut self.capacity),
            _ => None,
        }
    }

    fn step_choice(&mut self, forward: bool) {
        match self.focus {
            InstanceField::Course => {
                self.course_id = step(self.course_id.take(), &self.course_ids(), forward);
            }
            InstanceField::Year => self.year = step(self.year, &self.years, forward),
            InstanceField::Semester => {
                self.semester = step(self.semester, &SEMESTERS, forward);
            }
            _ => return,
        }
        self.error = None;
    }

    pub fn update(&mut self, msg: InstanceFormMsg, ctx: &UpdateContext<'_>) -> Vec<Cmd> {
        match msg {
            InstanceFormMsg::NextField => self.focus = self.focus.next(),
            InstanceFormMsg::PrevField => self.focus = self.focus.prev(),
            InstanceFormMsg::Edit(key) => {
                if let Some(input) = self.focused_input() {
                    *input = ctx.text_area.apply_keys(input, &[key]);
                    self.error = None;
                }
            }
            InstanceFormMsg::ChoiceNext => self.step_choice(true),
            InstanceFormMsg::ChoicePrev => self.step_choice(false),
            InstanceFormMsg::Submit => {}
        }
        vec![]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::textarea_engine::NoopTextAreaEngine;

    fn ctx() -> UpdateContext<'static> {
        UpdateContext {
            text_area: &NoopTextAreaEngine,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, 1).expect("valid date")
    }

    fn form() -> InstanceFormState {
        InstanceFormState {
            options: Remote::Loaded(vec![
                Course::new("CS101", "Programming"),
                Course::new("CS209", "Data Structures"),
            ]),
            ..InstanceFormState::new(None, today())
        }
    }

    #[test]
    fn test_step() {
        assert_eq!(step(None, &[1, 2, 3], true), Some(1));
        assert_eq!(step(None, &[1, 2, 3], false), Some(1));
        assert_eq!(step(Some(2), &[1, 2, 3], true), Some(3));
        assert_eq!(step(Some(3), &[1, 2, 3], true), Some(3));
        assert_eq!(step(Some(1), &[1, 2, 3], false), Some(1));
        assert_eq!(step::<i32>(None, &[], true), None);
    }

    #[test]
    fn test_years_start_this_year() {
        assert_eq!(form().years, vec![2025, 2026, 2027, 2028, 2029]);
    }

    #[test]
    fn test_choices() {
        let mut form = form();
        form.update(InstanceFormMsg::ChoiceNext, &ctx());
        form.update(InstanceFormMsg::ChoiceNext, &ctx());
        assert_eq!(form.course_id.as_deref(), Some("CS209"));
        assert_eq!(form.course_title(), Some("Data Structures"));

        form.focus = InstanceField::Semester;
        form.update(InstanceFormMsg::ChoiceNext, &ctx());
        form.update(InstanceFormMsg::ChoiceNext, &ctx());
        assert_eq!(form.semester, Some(2));

        form.focus = InstanceField::Year;
        form.update(InstanceFormMsg::ChoicePrev, &ctx());
        assert_eq!(form.year, Some(2025));
    }

    #[test]
    fn test_validate() {
        let mut form = form();
        form.course_id = Some("CS101".into());
        form.instructor = TextInput::from("Dr. Smith");
        form.year = Some(2026);
        form.semester = Some(1);
        form.capacity = TextInput::from("500");
        assert!(form.validate().is_err());
        assert_eq!(
            form.error.as_deref(),
            Some("Capacity must be between 1 and 200")
        );

        form.capacity = TextInput::from("40");
        let instance = form.validate().expect("valid form");
        assert_eq!(instance.student_capacity, 40);
    }

    #[test]
    fn test_field_kinds() {
        assert!(InstanceField::Course.is_choice());
        assert!(InstanceField::Capacity.is_text());
        assert!(!InstanceField::Submit.is_text());
        assert_eq!(InstanceField::Submit.next(), InstanceField::Course);
    }
}
