use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use derive_deref::{Deref, DerefMut};
use serde::{de::Deserializer, Deserialize, Serialize};
use strum::Display;

/// User intents that keys can be bound to in normal mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Action {
    Quit,
    Suspend,
    Up,
    Down,
    Open,
    Back,
    ToggleFocus,
    Search,
    Refresh,
    Delete,
    Create,
    CycleYear,
    CycleSemester,
    ClearFilters,
    GoDashboard,
    GoCourses,
    GoCreateCourse,
    GoInstances,
    GoCreateInstance,
    Submit,
}

#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct KeyBindings(pub HashMap<Vec<KeyEvent>, Action>);

impl<'de> Deserialize<'de> for KeyBindings {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, Action>::deserialize(deserializer)?;
        let keybindings = parsed_map
            .into_iter()
            .map(|(key_str, action)| {
                parse_key_sequence(&key_str)
                    .map(|seq| (seq, action))
                    .map_err(serde::de::Error::custom)
            })
            .collect::<Result<_, _>>()?;
        Ok(KeyBindings(keybindings))
    }
}

impl KeyBindings {
    /// Action bound to a single key press
    pub fn action_for(&self, key: KeyEvent) -> Option<Action> {
        self.get(&vec![key]).copied()
    }

    /// Shortest key sequence bound to `action`, formatted for help text
    pub fn describe(&self, action: Action) -> Option<String> {
        let mut keys: Vec<String> = self
            .iter()
            .filter(|(_, a)| **a == action)
            .map(|(seq, _)| seq.iter().map(key_event_to_string).collect::<String>())
            .collect();
        keys.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
        keys.into_iter().next()
    }
}

fn parse_key_event(raw: &str) -> Result<KeyEvent, String> {
    let raw_lower = raw.to_ascii_lowercase();
    let (remaining, modifiers) = extract_modifiers(&raw_lower);
    parse_key_code_with_modifiers(remaining, modifiers)
}

fn extract_modifiers(raw: &str) -> (&str, KeyModifiers) {
    let mut modifiers = KeyModifiers::empty();
    let mut current = raw;

    loop {
        match current {
            rest if rest.starts_with("ctrl-") => {
                modifiers.insert(KeyModifiers::CONTROL);
                current = &rest[5..];
            }
            rest if rest.starts_with("alt-") => {
                modifiers.insert(KeyModifiers::ALT);
                current = &rest[4..];
            }
            rest if rest.starts_with("shift-") => {
                modifiers.insert(KeyModifiers::SHIFT);
                current = &rest[6..];
            }
            _ => break,
        };
    }

    (current, modifiers)
}

fn parse_key_code_with_modifiers(
    raw: &str,
    mut modifiers: KeyModifiers,
) -> Result<KeyEvent, String> {
    let c = match raw {
        "esc" => KeyCode::Esc,
        "enter" => KeyCode::Enter,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "backtab" => {
            modifiers.insert(KeyModifiers::SHIFT);
            KeyCode::BackTab
        }
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "insert" => KeyCode::Insert,
        "f1" => KeyCode::F(1),
        "f2" => KeyCode::F(2),
        "f5" => KeyCode::F(5),
        "space" => KeyCode::Char(' '),
        "hyphen" | "minus" => KeyCode::Char('-'),
        "tab" => KeyCode::Tab,
        c if c.chars().count() == 1 => {
            let mut c = c.chars().next().ok_or_else(|| format!("Empty key: {raw}"))?;
            if modifiers.contains(KeyModifiers::SHIFT) {
                c = c.to_ascii_uppercase();
            }
            KeyCode::Char(c)
        }
        _ => return Err(format!("Unable to parse {raw}")),
    };
    Ok(KeyEvent::new(c, modifiers))
}

pub fn key_event_to_string(key_event: &KeyEvent) -> String {
    let char;
    let key_code = match key_event.code {
        KeyCode::Backspace => "backspace",
        KeyCode::Enter => "enter",
        KeyCode::Left => "left",
        KeyCode::Right => "right",
        KeyCode::Up => "up",
        KeyCode::Down => "down",
        KeyCode::Home => "home",
        KeyCode::End => "end",
        KeyCode::PageUp => "pageup",
        KeyCode::PageDown => "pagedown",
        KeyCode::Tab => "tab",
        KeyCode::BackTab => "backtab",
        KeyCode::Delete => "delete",
        KeyCode::Insert => "insert",
        KeyCode::Char(' ') => "space",
        KeyCode::Char(c) => {
            char = c.to_string();
            &char
        }
        KeyCode::Esc => "esc",
        _ => "?",
    };

    let mut modifiers = Vec::with_capacity(3);
    if key_event.modifiers.intersects(KeyModifiers::CONTROL) {
        modifiers.push("ctrl");
    }
    if key_event.modifiers.intersects(KeyModifiers::SHIFT)
        && !matches!(key_event.code, KeyCode::Char(_) | KeyCode::BackTab)
    {
        modifiers.push("shift");
    }
    if key_event.modifiers.intersects(KeyModifiers::ALT) {
        modifiers.push("alt");
    }

    let mut key = modifiers.join("-");
    if !key.is_empty() {
        key.push('-');
    }
    key.push_str(key_code);
    format!("<{key}>")
}

/// Parses `<ctrl-c>`, `<q><q>` style sequences
pub fn parse_key_sequence(raw: &str) -> Result<Vec<KeyEvent>, String> {
    if raw.chars().filter(|c| *c == '>').count() != raw.chars().filter(|c| *c == '<').count() {
        return Err(format!("Unable to parse `{raw}`"));
    }
    let raw = if !raw.contains("><") {
        let raw = raw.strip_prefix('<').unwrap_or(raw);
        raw.strip_suffix('>').unwrap_or(raw)
    } else {
        raw
    };
    raw.split("><")
        .map(|seq| {
            let seq = seq.strip_prefix('<').unwrap_or(seq);
            seq.strip_suffix('>').unwrap_or(seq)
        })
        .map(parse_key_event)
        .collect()
}
