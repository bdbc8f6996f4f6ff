use ratatui::{prelude::*, widgets::Paragraph};

use crate::{
    domain::instance::{EnrollmentLevel, InstanceStatus},
    presentation::config::styles::Styles,
};

/// A short colored label such as ` Active ` or ` Nearly Full `
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBadge {
    label: String,
    style: Style,
}

impl StatusBadge {
    pub fn new(label: impl Into<String>, style: Style) -> Self {
        Self {
            label: label.into(),
            style,
        }
    }

    pub fn status(status: InstanceStatus, styles: &Styles) -> Self {
        let style = match status {
            InstanceStatus::Active => styles.style("badge_active"),
            InstanceStatus::Completed => styles.style("badge_completed"),
            InstanceStatus::Scheduled => styles.style("badge_scheduled"),
        };
        Self::new(status.to_string(), style)
    }

    pub fn enrollment(level: EnrollmentLevel, styles: &Styles) -> Self {
        Self::new(level.to_string(), Self::enrollment_style(level, styles))
    }

    /// Shared by the enrollment badge and the gauge next to it
    pub fn enrollment_style(level: EnrollmentLevel, styles: &Styles) -> Style {
        styles.style(match level {
            EnrollmentLevel::Open => "enrollment_open",
            EnrollmentLevel::NearlyFull => "enrollment_nearly_full",
            EnrollmentLevel::Full => "enrollment_full",
        })
    }

    /// Display width including the padding on both sides
    pub fn width(&self) -> u16 {
        u16::try_from(self.label.chars().count() + 2).unwrap_or(u16::MAX)
    }
}

impl From<StatusBadge> for Span<'static> {
    fn from(badge: StatusBadge) -> Self {
        Span::styled(format!(" {} ", badge.label), badge.style)
    }
}

impl Widget for StatusBadge {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let span: Span = self.into();
        Paragraph::new(Line::from(span)).render(area, buf);
    }
}
