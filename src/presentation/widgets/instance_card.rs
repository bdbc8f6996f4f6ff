use chrono::NaiveDate;
use ratatui::{prelude::*, widgets::Paragraph};

use crate::{
    domain::instance::CourseInstance,
    presentation::{
        config::styles::Styles,
        widgets::{enrollment_gauge::EnrollmentGauge, status_badge::StatusBadge},
    },
};

/// Card height: header, instructor and term, gauge, separator
pub const INSTANCE_CARD_HEIGHT: u16 = 4;

/// A scheduled offering as shown in the instance list and on the course page
#[derive(Debug, Clone)]
pub struct InstanceCard {
    title: String,
    course_id: String,
    instructor: String,
    term: String,
    status: StatusBadge,
    enrollment: StatusBadge,
    gauge: EnrollmentGauge,
    can_delete: bool,
    pub highlight: bool,
    title_style: Style,
    highlight_style: Style,
    muted_style: Style,
    warning_style: Style,
}

impl InstanceCard {
    /// `title` falls back to the course id when the backend sent none
    pub fn new(
        instance: &CourseInstance,
        title: Option<&str>,
        today: NaiveDate,
        styles: &Styles,
    ) -> Self {
        let course_id = instance.course_id().to_owned();
        let level = instance.enrollment_level();
        Self {
            title: title
                .or(instance.course_title())
                .unwrap_or(&course_id)
                .to_owned(),
            instructor: instance.instructor.clone(),
            term: instance.term().to_string(),
            status: StatusBadge::status(instance.status(today), styles),
            enrollment: StatusBadge::enrollment(level, styles),
            gauge: EnrollmentGauge::new(instance, StatusBadge::enrollment_style(level, styles)),
            can_delete: instance.can_delete(today),
            highlight: false,
            title_style: styles.style("title"),
            highlight_style: styles.style("highlight"),
            muted_style: styles.style("muted"),
            warning_style: styles.style("error"),
            course_id,
        }
    }

    pub fn instructor_line(&self) -> String {
        let instructor = if self.instructor.trim().is_empty() {
            "TBA"
        } else {
            self.instructor.as_str()
        };
        format!("{instructor} · {}", self.term)
    }
}

impl Widget for InstanceCard {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let header_style = if self.highlight {
            self.highlight_style
        } else {
            self.title_style
        };
        let mut header = vec![
            Span::styled(format!("{} ({})", self.title, self.course_id), header_style),
            Span::raw(" "),
            self.status.clone().into(),
        ];
        if !self.can_delete {
            header.push(Span::raw(" "));
            header.push(Span::styled("Delete locked", self.warning_style));
        }

        let badge_width = self.enrollment.width() + 1;
        let mut gauge = self.gauge.line(area.width.saturating_sub(badge_width));
        gauge.spans.push(Span::raw(" "));
        gauge.spans.push(self.enrollment.clone().into());

        let lines = vec![
            Line::from(header),
            Line::styled(self.instructor_line(), self.muted_style),
            gauge,
            Line::styled("─".repeat(usize::from(area.width)), self.muted_style),
        ];
        Paragraph::new(lines).render(area, buf);
    }
}
