use std::{collections::VecDeque, future::Future, pin::Pin};

use color_eyre::eyre::Result;
use futures::future;
use ratatui::{backend::TestBackend, buffer::Buffer, layout::Rect, Terminal};

use crate::infrastructure::tui::{Event, Frame, TuiLike};

/// In-memory terminal for tests.
/// - enter/exit/suspend only count calls
/// - next() pops a scripted event and never blocks
/// - draw() renders into a `TestBackend` buffer
pub struct TestTui {
    term: Terminal<TestBackend>,
    events: VecDeque<Event>,
    draws: usize,
    suspends: usize,
}

impl TestTui {
    pub fn new(width: u16, height: u16) -> Result<Self> {
        let term = Terminal::new(TestBackend::new(width, height))?;
        Ok(Self {
            term,
            events: VecDeque::new(),
            draws: 0,
            suspends: 0,
        })
    }

    pub fn with_events(
        width: u16,
        height: u16,
        events: impl IntoIterator<Item = Event>,
    ) -> Result<Self> {
        let mut this = Self::new(width, height)?;
        this.events.extend(events);
        Ok(this)
    }

    pub fn draw_count(&self) -> usize {
        self.draws
    }

    pub fn suspend_count(&self) -> usize {
        self.suspends
    }

    pub fn enqueue_event(&mut self, ev: Event) {
        self.events.push_back(ev);
    }

    pub fn buffer(&self) -> &Buffer {
        self.term.backend().buffer()
    }

    /// The rendered screen as plain text, one string per row
    pub fn screen(&self) -> Vec<String> {
        let buffer = self.buffer();
        let area = buffer.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    /// Whether any row contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.screen().iter().any(|row| row.contains(needle))
    }
}

impl TuiLike for TestTui {
    fn enter(&mut self) -> Result<()> {
        Ok(())
    }

    fn exit(&mut self) -> Result<()> {
        Ok(())
    }

    fn draw(&mut self, f: &mut dyn FnMut(&mut Frame<'_>)) -> Result<()> {
        self.term.draw(|frame| f(frame))?;
        self.draws += 1;
        Ok(())
    }

    fn resize(&mut self, area: Rect) -> Result<()> {
        self.term.backend_mut().resize(area.width, area.height);
        self.term.resize(area)?;
        Ok(())
    }

    fn next(&mut self) -> Pin<Box<dyn Future<Output = Option<Event>> + Send + '_>> {
        Box::pin(future::ready(self.events.pop_front()))
    }

    fn suspend(&mut self) -> Result<()> {
        self.suspends += 1;
        Ok(())
    }

    fn resume(&mut self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use ratatui::widgets::Paragraph;

    use super::*;

    #[test]
    fn draw_is_counted_and_captured() {
        let mut tui = TestTui::new(20, 2).expect("test tui");
        tui.draw(&mut |f: &mut Frame<'_>| f.render_widget(Paragraph::new("CS209"), f.area()))
            .expect("draw");
        assert_eq!(tui.draw_count(), 1);
        assert!(tui.contains("CS209"));
    }

    #[test]
    fn resize_changes_screen_size() {
        let mut tui = TestTui::new(20, 2).expect("test tui");
        tui.resize(Rect::new(0, 0, 30, 4)).expect("resize");
        tui.draw(&mut |_: &mut Frame<'_>| {}).expect("draw");
        assert_eq!(tui.screen().len(), 4);
    }
}
