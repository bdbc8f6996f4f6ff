use chrono::NaiveDate;
use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::{
    core::state::AppState,
    domain::{course::Course, course_detail::CourseDetail, instance::CourseInstance},
    presentation::{
        components::{key_hint, render_remote, Placeholder},
        config::{keybindings::Action, styles::Styles},
        widgets::status_badge::StatusBadge,
    },
};

/// One course with its prerequisites, the courses it unlocks and its instances
#[derive(Debug, Clone)]
pub struct CourseDetailComponent;

/// Lines of the page plus the row of the selected entry
struct DetailLines {
    lines: Vec<Line<'static>>,
    selected_row: Option<usize>,
}

impl DetailLines {
    fn push(&mut self, line: Line<'static>) {
        self.lines.push(line);
    }

    fn heading(&mut self, title: &str, styles: &Styles) {
        self.lines.push(Line::default());
        self.lines
            .push(Line::styled(title.to_owned(), styles.style("title")));
    }

    /// Adds an entry line, marking it when it is the selected one
    fn entry(&mut self, spans: Vec<Span<'static>>, selected: bool, styles: &Styles) {
        let marker = if selected {
            self.selected_row = Some(self.lines.len());
            Span::styled("▶ ", styles.style("highlight"))
        } else {
            Span::raw("  ")
        };
        let mut line = vec![marker];
        line.extend(spans);
        self.lines.push(Line::from(line));
    }
}

impl CourseDetailComponent {
    pub fn new() -> Self {
        Self
    }

    /// `ID · N instances · N prerequisites · unlocks N`
    pub fn info_line(detail: &CourseDetail) -> String {
        format!(
            "{} · {} instances · {} prerequisites · unlocks {}",
            detail.course_id(),
            detail.instances.len(),
            detail.prerequisites.len(),
            detail.dependents.len()
        )
    }

    /// A dependent's prerequisites with the current course picked out
    pub fn requirement_spans(
        dependent: &Course,
        current: &str,
        styles: &Styles,
    ) -> Vec<Span<'static>> {
        let mut spans = vec![Span::styled("requires ", styles.style("muted"))];
        for (i, id) in dependent.prerequisites.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(", ", styles.style("muted")));
            }
            let style = if id == current {
                styles.style("stat_value")
            } else {
                styles.style("muted")
            };
            spans.push(Span::styled(id.clone(), style));
        }
        spans
    }

    fn instance_spans(
        instance: &CourseInstance,
        today: NaiveDate,
        styles: &Styles,
    ) -> Vec<Span<'static>> {
        let instructor = if instance.instructor.trim().is_empty() {
            "TBA".to_owned()
        } else {
            instance.instructor.clone()
        };
        vec![
            Span::raw(format!("{:<18}", instance.term().to_string())),
            StatusBadge::status(instance.status(today), styles).into(),
            Span::raw(format!("  {instructor}  ")),
            Span::styled(
                format!("{}/{}", instance.enrolled, instance.student_capacity),
                styles.style("muted"),
            ),
        ]
    }

    fn build(state: &AppState, detail: &CourseDetail) -> DetailLines {
        let styles = &state.config.config.styles;
        let today = state.today();
        let selected = state.course_detail.selected;
        let course = &detail.course;
        let mut out = DetailLines {
            lines: vec![],
            selected_row: None,
        };

        out.push(Line::styled(
            format!("{}  {}", course.course_id, course.title),
            styles.style("title"),
        ));
        out.push(Line::styled(Self::info_line(detail), styles.style("muted")));
        out.push(Line::default());
        let description = if course.description.trim().is_empty() {
            "No description".to_owned()
        } else {
            course.description.clone()
        };
        out.push(Line::raw(description));
        if !state.course_detail.can_delete(today) {
            out.push(Line::default());
            out.push(Line::styled(
                "Delete locked: Course has dependencies or active instances",
                styles.style("error"),
            ));
        }

        out.heading("Prerequisites", styles);
        if detail.prerequisites.is_empty() {
            out.push(Line::styled("  No Prerequisites Required", styles.style("muted")));
        }
        for (i, prerequisite) in detail.prerequisites.iter().enumerate() {
            out.entry(
                vec![
                    Span::styled(prerequisite.course_id.clone(), styles.style("title")),
                    Span::raw(format!("  {}", prerequisite.title)),
                ],
                selected == i,
                styles,
            );
        }

        out.heading("Unlocks These Courses", styles);
        if detail.dependents.is_empty() {
            out.push(Line::styled(
                "  No courses require this one",
                styles.style("muted"),
            ));
        }
        let offset = detail.prerequisites.len();
        for (i, dependent) in detail.dependents.iter().enumerate() {
            let mut spans = vec![
                Span::styled(dependent.course_id.clone(), styles.style("title")),
                Span::raw(format!("  {}  ", dependent.title)),
            ];
            spans.extend(Self::requirement_spans(dependent, course.course_id.as_str(), styles));
            out.entry(spans, selected == offset + i, styles);
        }

        out.heading("Instances", styles);
        if detail.instances.is_empty() {
            out.push(Line::styled(
                format!(
                    "  No instances yet. Press {} to schedule one",
                    key_hint(state, Action::Create, "n")
                ),
                styles.style("muted"),
            ));
        }
        let offset = detail.related_count();
        for (i, instance) in detail.instances.iter().enumerate() {
            out.entry(
                Self::instance_spans(instance, today, styles),
                selected == offset + i,
                styles,
            );
        }
        out
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let placeholder = Placeholder {
            loading: "Loading course...",
            not_found: "Course not found",
        };
        let Some(detail) =
            render_remote(&state.course_detail.detail, placeholder, state, frame, area)
        else {
            return;
        };

        let DetailLines {
            lines,
            selected_row,
        } = Self::build(state, detail);
        // keep the selected entry on screen
        let scroll = selected_row
            .map(|row| row.saturating_sub(usize::from(area.height.saturating_sub(2))))
            .unwrap_or(0);
        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0));
        frame.render_widget(paragraph, area);
    }
}

impl Default for CourseDetailComponent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::{
        core::state::{course_detail::CourseDetailState, remote::Remote},
        domain::term::Term,
        infrastructure::config::Config,
    };

    fn state(detail: Remote<CourseDetail>) -> AppState {
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date");
        let mut state = AppState::new(Config::defaults().expect("embedded config"), today);
        state.course_detail = CourseDetailState {
            detail,
            ..CourseDetailState::new("CS209")
        };
        state
    }

    fn detail() -> CourseDetail {
        CourseDetail::new(
            Course::new("CS209", "Data Structures")
                .with_description("Trees and graphs")
                .with_prerequisites(["CS101"]),
            vec![Course::new("CS101", "Programming")],
            vec![Course::new("CS301", "Algorithms").with_prerequisites(["MA110", "CS209"])],
            vec![CourseInstance::new("CS209", Term::new(2024, 1))
                .with_instructor("Dr. Smith")
                .with_enrollment(12, 30)],
        )
    }

    fn screen(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).expect("terminal");
        terminal
            .draw(|frame| CourseDetailComponent::new().view(state, frame, frame.area()))
            .expect("draw");
        let buffer = terminal.backend().buffer();
        (0..30)
            .map(|y| {
                (0..80)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_info_line() {
        assert_eq!(
            CourseDetailComponent::info_line(&detail()),
            "CS209 · 1 instances · 1 prerequisites · unlocks 1"
        );
    }

    #[test]
    fn test_sections() {
        let screen = screen(&state(Remote::Loaded(detail())));
        assert!(screen.contains("▶ CS101  Programming"));
        assert!(screen.contains("Unlocks These Courses"));
        assert!(screen.contains("requires MA110, CS209"));
        assert!(screen.contains("Active"));
        assert!(screen.contains("Dr. Smith"));
        // the running instance locks deletion
        assert!(screen.contains("Delete locked"));
    }

    #[test]
    fn test_no_prerequisites() {
        let bare = CourseDetail::new(Course::new("CS101", "Programming"), vec![], vec![], vec![]);
        let screen = screen(&state(Remote::Loaded(bare)));
        assert!(screen.contains("No Prerequisites Required"));
        assert!(screen.contains("Press n to schedule one"));
        assert!(!screen.contains("Delete locked"));
    }

    #[test]
    fn test_not_found() {
        assert!(screen(&state(Remote::NotFound)).contains("Course not found"));
    }
}
