use std::{collections::VecDeque, sync::Arc};

use tokio::sync::Mutex;

use crate::infrastructure::tui::{Event, TuiLike};

/// Where the runner pulls terminal events from
pub enum EventSource {
    Real(Arc<Mutex<dyn TuiLike + Send>>),
    /// Scripted events; `None` once drained
    Test(VecDeque<Event>),
}

impl EventSource {
    pub fn real(tui: Arc<Mutex<dyn TuiLike + Send>>) -> Self {
        EventSource::Real(tui)
    }

    pub fn test(events: impl IntoIterator<Item = Event>) -> Self {
        EventSource::Test(events.into_iter().collect())
    }

    pub async fn next(&mut self) -> Option<Event> {
        match self {
            EventSource::Real(tui) => {
                let mut guard = tui.lock().await;
                guard.next().await
            }
            EventSource::Test(queue) => queue.pop_front(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::infrastructure::tui::test::TestTui;

    #[tokio::test]
    async fn test_source_drains_in_order() {
        let mut source = EventSource::test([Event::Tick, Event::Resize(80, 24)]);
        assert_eq!(source.next().await, Some(Event::Tick));
        assert_eq!(source.next().await, Some(Event::Resize(80, 24)));
        assert_eq!(source.next().await, None);
    }

    #[tokio::test]
    async fn real_source_reads_from_tui() {
        let tui = TestTui::with_events(20, 5, [Event::Render]).expect("test tui");
        let mut source = EventSource::real(Arc::new(Mutex::new(tui)));
        assert_eq!(source.next().await, Some(Event::Render));
        assert_eq!(source.next().await, None);
    }
}
