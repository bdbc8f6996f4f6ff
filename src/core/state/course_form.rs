use std::mem;

use crate::{
    core::{
        cmd::Cmd,
        msg::form::CourseFormMsg,
        state::{input::TextInput, remote::Remote, selection},
        update::UpdateContext,
    },
    domain::{
        course::{Course, NewCourse},
        validation::{CourseDraft, ValidationError},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CourseField {
    #[default]
    Title,
    CourseId,
    Description,
    Prerequisites,
    Submit,
}

impl CourseField {
    const ORDER: [CourseField; 5] = [
        CourseField::Title,
        CourseField::CourseId,
        CourseField::Description,
        CourseField::Prerequisites,
        CourseField::Submit,
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
        matches!(
            self,
            CourseField::Title | CourseField::CourseId | CourseField::Description
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            CourseField::Title => "Course Title",
            CourseField::CourseId => "Course ID",
            CourseField::Description => "Description",
            CourseField::Prerequisites => "Prerequisites",
            CourseField::Submit => "Create Course",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseFormState {
    pub title: TextInput,
    pub course_id: TextInput,
    pub description: TextInput,
    /// Ids of the courses ticked as prerequisites, in the order they were ticked
    pub prerequisites: Vec<String>,
    /// Existing courses to pick prerequisites from
    pub options: Remote<Vec<Course>>,
    pub option_cursor: usize,
    pub focus: CourseField,
    pub submitting: bool,
    pub error: Option<String>,
}

impl CourseFormState {
    pub fn draft(&self) -> CourseDraft {
        CourseDraft {
            title: self.title.value().to_owned(),
            course_id: self.course_id.value().to_owned(),
            description: self.description.value().to_owned(),
            prerequisites: self.prerequisites.clone(),
        }
    }

    /// Validates the form, keeping the message for display on failure
    pub fn validate(&mut self) -> Result<NewCourse, ValidationError> {
        let result = self.draft().validate();
        self.error = result.as_ref().err().map(ToString::to_string);
        result
    }

    pub fn is_selected(&self, course_id: &str) -> bool {
        self.prerequisites.iter().any(|p| p == course_id)
    }

    pub fn option_count(&self) -> usize {
        self.options.loaded().map(Vec::len).unwrap_or(0)
    }

    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            CourseField::Title => Some(&mut self.title),
            CourseField::CourseId => Some(&mut self.course_id),
            CourseField::Description => Some(&mut self.description),
            CourseField::Prerequisites | CourseField::Submit => None,
        }
    }

    /// Clears what was typed; loaded options are kept
    pub fn reset(&mut self) {
        *self = Self {
            options: mem::take(&mut self.options),
            ..Default::default()
        };
    }

    fn toggle_option(&mut self) {
        let Some(id) = self
            .options
            .loaded()
            .and_then(|options| options.get(self.option_cursor))
            .map(|course| course.course_id.clone())
        else {
            return;
        };
        if self.is_selected(&id) {
            self.prerequisites.retain(|p| p != &id);
        } else {
            self.prerequisites.push(id);
        }
    }

    /// Submission needs the request tracker, so `update` handles `Submit`
    pub fn update(&mut self, msg: CourseFormMsg, ctx: &UpdateContext<'_>) -> Vec<Cmd> {
        match msg {
            CourseFormMsg::NextField => self.focus = self.focus.next(),
            CourseFormMsg::PrevField => self.focus = self.focus.prev(),
            CourseFormMsg::Edit(key) => {
                if let Some(input) = self.focused_input() {
                    *input = ctx.text_area.apply_keys(input, &[key]);
                    self.error = None;
                }
            }
            CourseFormMsg::OptionNext => {
                self.option_cursor = selection::next(self.option_cursor, self.option_count());
            }
            CourseFormMsg::OptionPrev => {
                self.option_cursor = selection::prev(self.option_cursor);
            }
            CourseFormMsg::ToggleOption => {
                self.toggle_option();
                self.error = None;
            }
            CourseFormMsg::Submit => {}
        }
        vec![]
    }
}
