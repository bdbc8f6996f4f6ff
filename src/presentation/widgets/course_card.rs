use ratatui::{prelude::*, widgets::Paragraph};

use crate::{
    domain::{
        course::Course,
        text::{truncate_text, wrap_text},
    },
    presentation::config::styles::Styles,
};

const DESCRIPTION_LINES: usize = 2;

/// Catalog entry as shown in the course list
#[derive(Debug, Clone)]
pub struct CourseCard {
    course: Course,
    instance_count: usize,
    can_delete: bool,
    pub highlight: bool,
    title_style: Style,
    highlight_style: Style,
    muted_style: Style,
    warning_style: Style,
}

impl CourseCard {
    pub fn new(course: Course, instance_count: usize, can_delete: bool, styles: &Styles) -> Self {
        Self {
            course,
            instance_count,
            can_delete,
            highlight: false,
            title_style: styles.style("title"),
            highlight_style: styles.style("highlight"),
            muted_style: styles.style("muted"),
            warning_style: styles.style("error"),
        }
    }

    fn description(&self, width: u16) -> String {
        if self.course.description.trim().is_empty() {
            return "No description".to_owned();
        }
        truncate_text(
            &wrap_text(self.course.description.trim(), usize::from(width)),
            DESCRIPTION_LINES,
        )
    }

    pub fn prerequisites_line(&self) -> String {
        if self.course.prerequisites.is_empty() {
            "Prerequisites: None".to_owned()
        } else {
            format!("Prerequisites: {}", self.course.prerequisites.join(", "))
        }
    }

    pub fn instances_line(&self) -> String {
        match self.instance_count {
            1 => "1 instance".to_owned(),
            n => format!("{n} instances"),
        }
    }

    /// header + description + prerequisites + footer + separator
    pub fn calculate_height(&self, area: &Rect) -> u16 {
        let description = self.description(area.width).lines().count();
        u16::try_from(description + 4).unwrap_or(u16::MAX)
    }
}

impl Widget for CourseCard {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let header_style = if self.highlight {
            self.highlight_style
        } else {
            self.title_style
        };
        let mut text = Text::default();
        text.extend(Text::from(Line::from(vec![
            Span::styled(self.course.course_id.clone(), header_style),
            Span::styled(format!("  {}", self.course.title), header_style),
        ])));
        text.extend(Text::raw(self.description(area.width)));
        text.extend(Text::styled(self.prerequisites_line(), self.muted_style));

        let mut footer = vec![Span::raw(self.instances_line())];
        if !self.can_delete {
            footer.push(Span::raw("  "));
            footer.push(Span::styled("Delete locked", self.warning_style));
        }
        text.extend(Text::from(Line::from(footer)));
        text.extend(Text::styled(
            "─".repeat(usize::from(area.width)),
            self.muted_style,
        ));

        Paragraph::new(text).render(area, buf);
    }
}
