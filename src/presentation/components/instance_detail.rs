use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Row, Table, TableState},
};

use crate::{
    core::state::AppState,
    domain::{instance::CourseInstance, text::format_count},
    presentation::{
        components::{field_line, render_remote, Placeholder},
        config::styles::Styles,
        widgets::{enrollment_gauge::EnrollmentGauge, status_badge::StatusBadge},
    },
};

const OVERVIEW_HEIGHT: u16 = 8;

/// One offering: overview, enrollment and the enrolled students
#[derive(Debug, Clone)]
pub struct InstanceDetailComponent;

impl InstanceDetailComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn heading(instance: &CourseInstance) -> String {
        let id = instance.course_id();
        match instance.course_title() {
            Some(title) => format!("{title} ({id})"),
            None => id.to_owned(),
        }
    }

    fn overview(state: &AppState, instance: &CourseInstance, width: u16) -> Vec<Line<'static>> {
        let styles = &state.config.config.styles;
        let today = state.today();
        let level = instance.enrollment_level();
        let instructor = if instance.instructor.trim().is_empty() {
            "TBA".to_owned()
        } else {
            instance.instructor.clone()
        };

        let mut gauge = EnrollmentGauge::new(instance, StatusBadge::enrollment_style(level, styles))
            .line(width.saturating_sub(16));
        gauge.spans.push(Span::raw(" "));
        gauge.spans.push(StatusBadge::enrollment(level, styles).into());

        let mut lines = vec![
            Line::from(vec![
                Span::styled(Self::heading(instance), styles.style("title")),
                Span::raw(" "),
                StatusBadge::status(instance.status(today), styles).into(),
            ]),
            field_line("Term", instance.term().to_string(), styles),
            field_line("Instructor", instructor, styles),
            field_line(
                "Capacity",
                format_count(instance.student_capacity),
                styles,
            ),
            gauge,
        ];
        if !instance.can_delete(today) {
            lines.push(Line::default());
            lines.push(Line::styled(
                "Delete locked: Instance has enrolled students or is currently active",
                styles.style("error"),
            ));
        }
        lines
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let placeholder = Placeholder {
            loading: "Loading instance...",
            not_found: "Course instance not found",
        };
        let Some(instance) =
            render_remote(&state.instance_detail.instance, placeholder, state, frame, area)
        else {
            return;
        };
        let styles = &state.config.config.styles;

        let [overview, students] =
            Layout::vertical([Constraint::Length(OVERVIEW_HEIGHT), Constraint::Min(0)])
                .areas(area);
        frame.render_widget(
            Paragraph::new(Self::overview(state, instance, overview.width)),
            overview,
        );
        self.render_students(state, instance, styles, frame, students);
    }

    fn render_students(
        &self,
        state: &AppState,
        instance: &CourseInstance,
        styles: &Styles,
        frame: &mut Frame,
        area: Rect,
    ) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(styles.style("muted"))
            .title(Line::styled(
                format!(" Enrolled Students ({}) ", instance.students.len()),
                styles.style("title"),
            ));

        if instance.students.is_empty() {
            let message = if instance.enrolled > 0 {
                "Student list not available"
            } else {
                "No students enrolled"
            };
            frame.render_widget(
                Paragraph::new(Line::styled(message, styles.style("muted"))).block(block),
                area,
            );
            return;
        }

        let rows = instance.students.iter().map(|student| {
            Row::new(vec![
                student.name.clone(),
                student.email.clone(),
                student.enrollment_date.clone().unwrap_or_default(),
            ])
        });
        let table = Table::new(
            rows,
            [
                Constraint::Percentage(35),
                Constraint::Percentage(45),
                Constraint::Percentage(20),
            ],
        )
        .header(Row::new(vec!["Name", "Email", "Enrolled"]).style(styles.style("muted")))
        .row_highlight_style(styles.style("highlight"))
        .block(block);

        let mut table_state = TableState::default();
        table_state.select(Some(state.instance_detail.selected));
        frame.render_stateful_widget(table, area, &mut table_state);
    }
}

impl Default for InstanceDetailComponent {
    fn default() -> Self {
        Self::new()
    }
}
