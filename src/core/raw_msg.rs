use chrono::NaiveDate;
use crossterm::event::KeyEvent;

use crate::core::api::ApiReply;

/// Raw messages from external sources (input, network, system)
/// These represent unprocessed external events that need to be translated to domain events
#[derive(Debug, Clone, PartialEq)]
pub enum RawMsg {
    // System events
    Tick,
    Render,
    Resize(u16, u16),
    Quit,
    Suspend,
    Resume,

    /// The local date changed
    Today(NaiveDate),

    // User input (raw keyboard events)
    Key(KeyEvent),

    // Backend replies
    Api(ApiReply),

    // System status
    SystemMessage(String),
    Error(String),
}

impl RawMsg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(self, RawMsg::Tick | RawMsg::Render)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::api::{ApiFailure, ApiReply};
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn test_raw_msg_frequent_detection() {
        assert!(RawMsg::Tick.is_frequent());
        assert!(RawMsg::Render.is_frequent());
        assert!(!RawMsg::Quit.is_frequent());
        assert!(!RawMsg::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)).is_frequent());
        assert!(!RawMsg::Api(ApiReply::err(1, ApiFailure::NotFound)).is_frequent());
    }

    #[test]
    fn test_raw_msg_equality() {
        assert_eq!(RawMsg::Quit, RawMsg::Quit);
        assert_ne!(RawMsg::Tick, RawMsg::Render);
    }
}
