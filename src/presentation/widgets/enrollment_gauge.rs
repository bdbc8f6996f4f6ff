use ratatui::{prelude::*, widgets::Paragraph};

use crate::domain::instance::CourseInstance;

const FILLED: &str = "█";
const EMPTY: &str = "░";

/// One-line bar: `██████░░░░ 18/30 (60%)`
#[derive(Debug, Clone, PartialEq)]
pub struct EnrollmentGauge {
    enrolled: u32,
    capacity: u32,
    ratio: f64,
    style: Style,
}

impl EnrollmentGauge {
    pub fn new(instance: &CourseInstance, style: Style) -> Self {
        Self {
            enrolled: instance.enrolled,
            capacity: instance.student_capacity,
            ratio: instance.fill_ratio(),
            style,
        }
    }

    pub fn percent(&self) -> u32 {
        (self.ratio * 100.0).round() as u32
    }

    pub fn label(&self) -> String {
        format!("{}/{} ({}%)", self.enrolled, self.capacity, self.percent())
    }

    /// The gauge fitted to `width` columns; the bar shrinks first
    pub fn line(&self, width: u16) -> Line<'static> {
        let label = self.label();
        let bar_width = usize::from(width).saturating_sub(label.chars().count() + 1);
        let filled = ((bar_width as f64) * self.ratio).round() as usize;
        let filled = filled.min(bar_width);
        Line::from(vec![
            Span::styled(FILLED.repeat(filled), self.style),
            Span::styled(EMPTY.repeat(bar_width - filled), Style::default().fg(Color::DarkGray)),
            Span::raw(if bar_width > 0 { " " } else { "" }),
            Span::raw(label),
        ])
    }
}

impl Widget for EnrollmentGauge {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.line(area.width)).render(area, buf);
    }
}
