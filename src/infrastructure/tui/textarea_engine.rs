use crossterm::event::{Event, KeyCode, KeyEvent};
use tui_textarea::{CursorMove, TextArea};

use crate::core::{
    state::input::{CursorPosition, TextInput},
    textarea_engine::TextAreaEngine,
};

/// Production engine based on tui-textarea. It builds a throwaway TextArea
/// from the snapshot, feeds it the keys and reads the result back.
pub struct TuiTextAreaEngine;

impl TuiTextAreaEngine {
    fn restore(textarea: &mut TextArea<'_>, snapshot: &TextInput) {
        if !snapshot.content.is_empty() {
            textarea.insert_str(&snapshot.content);
        }
        textarea.move_cursor(CursorMove::Jump(
            u16::try_from(snapshot.cursor.line).unwrap_or(u16::MAX),
            u16::try_from(snapshot.cursor.column).unwrap_or(u16::MAX),
        ));
    }
}

impl TextAreaEngine for TuiTextAreaEngine {
    fn apply_keys(&self, snapshot: &TextInput, keys: &[KeyEvent]) -> TextInput {
        let mut textarea = TextArea::default();
        Self::restore(&mut textarea, snapshot);
        // Inputs are single line
        for key in keys.iter().filter(|key| key.code != KeyCode::Enter) {
            textarea.input(Event::Key(*key));
        }
        let (line, column) = textarea.cursor();
        TextInput {
            content: textarea.lines().join(" "),
            cursor: CursorPosition { line, column },
        }
    }
}
