use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};
use tui_widget_list::{ListBuilder, ListView};

use crate::{
    core::state::{
        course_form::{CourseField, CourseFormState},
        remote::Remote,
        AppState,
    },
    domain::text::ellipsize,
    presentation::{components::render_text_field, config::styles::Styles},
};

const FIELD_HEIGHT: u16 = 3;

/// Create-course form: three text fields, prerequisite toggles and submit
#[derive(Debug, Clone)]
pub struct CourseFormComponent;

impl CourseFormComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn submit_label(form: &CourseFormState) -> &'static str {
        if form.submitting {
            "Creating course..."
        } else {
            "[ Create Course ]"
        }
    }

    /// Render the form
    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let form = &state.course_form;

        let [title, course_id, description, prerequisites, submit, error] = Layout::vertical([
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        for (field, input, rect) in [
            (CourseField::Title, &form.title, title),
            (CourseField::CourseId, &form.course_id, course_id),
            (CourseField::Description, &form.description, description),
        ] {
            render_text_field(frame, rect, field.label(), input, form.focus == field, styles);
        }

        self.render_prerequisites(form, styles, frame, prerequisites);

        let submit_style = if form.focus == CourseField::Submit {
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

    fn render_prerequisites(
        &self,
        form: &CourseFormState,
        styles: &Styles,
        frame: &mut Frame,
        area: Rect,
    ) {
        let focused = form.focus == CourseField::Prerequisites;
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(
                " {} ({} selected) ",
                CourseField::Prerequisites.label(),
                form.prerequisites.len()
            ));
        if focused {
            block = block.border_style(styles.style("form_focused"));
        }

        let options = match &form.options {
            Remote::Loaded(options) if !options.is_empty() => options,
            other => {
                let message = match other {
                    Remote::Failed(e) => format!("Error: {e}"),
                    Remote::Loaded(_) => "No courses available".to_owned(),
                    _ => "Loading courses...".to_owned(),
                };
                frame.render_widget(
                    Paragraph::new(Line::styled(message, styles.style("muted"))).block(block),
                    area,
                );
                return;
            }
        };

        let width = usize::from(area.width.saturating_sub(2));
        let highlight = styles.style("highlight");
        let rows: Vec<(Line<'static>, bool)> = options
            .iter()
            .map(|course| {
                let mark = if form.is_selected(&course.course_id) {
                    "[x]"
                } else {
                    "[ ]"
                };
                let text = format!("{mark} {}  {}", course.course_id, course.title);
                (Line::raw(ellipsize(&text, width)), focused)
            })
            .collect();
        let count = rows.len();

        let builder = ListBuilder::new(move |context| {
            let (line, focused) = rows[context.index].clone();
            let line = if focused && context.is_selected {
                line.style(highlight)
            } else {
                line
            };
            (line, 1)
        });

        let mut list_state = tui_widget_list::ListState::default();
        list_state.select(Some(form.option_cursor));
        frame.render_stateful_widget(ListView::new(builder, count).block(block), area, &mut list_state);
    }
}

impl Default for CourseFormComponent {
    fn default() -> Self {
        Self::new()
    }
}
