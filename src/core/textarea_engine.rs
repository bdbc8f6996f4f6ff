use crossterm::event::KeyEvent;

use crate::core::state::input::TextInput;

/// Engine interface that applies a sequence of key events to a text input snapshot
/// and returns the resulting snapshot. The implementation should be deterministic
/// and free of external side effects so that it can be used from the pure update path.
pub trait TextAreaEngine: Send + Sync {
    fn apply_keys(&self, snapshot: &TextInput, keys: &[KeyEvent]) -> TextInput;
}

/// No-op engine used for tests or when no editing should occur.
pub struct NoopTextAreaEngine;

impl TextAreaEngine for NoopTextAreaEngine {
    fn apply_keys(&self, snapshot: &TextInput, _keys: &[KeyEvent]) -> TextInput {
        snapshot.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_engine_returns_same_snapshot() {
        let engine = NoopTextAreaEngine;
        let snap = TextInput::from("abc");
        let out = engine.apply_keys(&snap, &[]);
        assert_eq!(out, snap);
    }
}
