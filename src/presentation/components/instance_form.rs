use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::{
    core::state::{
        instance_form::{InstanceField, InstanceFormState},
        remote::Remote,
        AppState,
    },
    domain::term::semester_name,
    presentation::{components::render_text_field, config::styles::Styles},
};

const FIELD_HEIGHT: u16 = 3;

/// Create-instance form. Course, year and semester are stepped with the
/// arrow keys; instructor and capacity are typed.
#[derive(Debug, Clone)]
pub struct InstanceFormComponent;

impl InstanceFormComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn course_value(form: &InstanceFormState) -> String {
        match (&form.options, form.course_id.as_deref()) {
            (Remote::Failed(e), _) => format!("Error: {e}"),
            (Remote::Idle | Remote::Loading, None) => "Loading courses...".to_owned(),
            (Remote::Loaded(options), None) if options.is_empty() => {
                "No courses available".to_owned()
            }
            (_, None) => "Select a course".to_owned(),
            (_, Some(id)) => match form.course_title() {
                Some(title) => format!("{id}  {title}"),
                None => id.to_owned(),
            },
        }
    }

    pub fn year_value(form: &InstanceFormState) -> String {
        form.year
            .map_or_else(|| "Select a year".to_owned(), |y| y.to_string())
    }

    pub fn semester_value(form: &InstanceFormState) -> String {
        form.semester
            .map_or_else(|| "Select a semester".to_owned(), semester_name)
    }

    pub fn submit_label(form: &InstanceFormState) -> &'static str {
        if form.submitting {
            "Creating instance..."
        } else {
            "[ Create Instance ]"
        }
    }

    /// Render the form
    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let form = &state.instance_form;

        let [course, instructor, term, capacity, submit, error] = Layout::vertical([
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);
        let [year, semester] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(term);

        render_choice(
            frame,
            course,
            InstanceField::Course,
            Self::course_value(form),
            form.focus,
            styles,
        );
        render_text_field(
            frame,
            instructor,
            InstanceField::Instructor.label(),
            &form.instructor,
            form.focus == InstanceField::Instructor,
            styles,
        );
        render_choice(
            frame,
            year,
            InstanceField::Year,
            Self::year_value(form),
            form.focus,
            styles,
        );
        render_choice(
            frame,
            semester,
            InstanceField::Semester,
            Self::semester_value(form),
            form.focus,
            styles,
        );
        render_text_field(
            frame,
            capacity,
            "Capacity (1-200)",
            &form.capacity,
            form.focus == InstanceField::Capacity,
            styles,
        );

        let submit_style = if form.focus == InstanceField::Submit {
            styles.style("form_focused")
        } else {
            styles.style("title")
        };
        frame.render_widget(
            Line::styled(Self::submit_label(form), submit_style).centered(),
            submit,
        );
        if let Some(message) = &form.error {
            frame.render_widget(
                Line::styled(message.clone(), styles.style("form_error")).centered(),
                error,
            );
        }
    }
}

impl Default for InstanceFormComponent {
    fn default() -> Self {
        Self::new()
    }
}

/// A stepped choice: `◀ value ▶` while focused
fn render_choice(
    frame: &mut Frame,
    area: Rect,
    field: InstanceField,
    value: String,
    focus: InstanceField,
    styles: &Styles,
) {
    let focused = focus == field;
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", field.label()));
    let line = if focused {
        block = block.border_style(styles.style("form_focused"));
        Line::from(vec![
            Span::styled("◀ ", styles.style("muted")),
            Span::raw(value),
            Span::styled(" ▶", styles.style("muted")),
        ])
    } else {
        Line::raw(value)
    };
    frame.render_widget(Paragraph::new(line).block(block), area);
}
