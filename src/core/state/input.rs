/// Cursor position in text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CursorPosition {
    pub line: usize,
    pub column: usize,
}

/// Snapshot of a single-line text field, edited through a `TextAreaEngine`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextInput {
    pub content: String,
    pub cursor: CursorPosition,
}

impl TextInput {
    /// Content with the cursor placed at its end
    pub fn new(content: impl Into<String>) -> Self {
        let content = content.into();
        let column = content.chars().count();
        Self {
            content,
            cursor: CursorPosition { line: 0, column },
        }
    }

    pub fn value(&self) -> &str {
        &self.content
    }

    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl From<&str> for TextInput {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A list search box
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchState {
    pub input: TextInput,
    pub editing: bool,
}

impl SearchState {
    pub fn query(&self) -> &str {
        self.input.value()
    }
}
