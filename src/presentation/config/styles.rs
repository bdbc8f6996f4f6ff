use std::collections::HashMap;

use derive_deref::{Deref, DerefMut};
use ratatui::style::{Color, Modifier, Style};
use serde::{de::Deserializer, Deserialize};

/// Named styles, e.g. `"badge_active": "black on green"`
#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct Styles(pub HashMap<String, Style>);

impl<'de> Deserialize<'de> for Styles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, String>::deserialize(deserializer)?;
        let styles = parsed_map
            .into_iter()
            .map(|(name, style)| (name, parse_style(&style)))
            .collect();
        Ok(Styles(styles))
    }
}

impl Styles {
    /// The named style, or the terminal default when it is not configured
    pub fn style(&self, name: &str) -> Style {
        self.get(name).copied().unwrap_or_default()
    }
}

/// Parses `"[modifiers] [fg] [on bg]"`
pub fn parse_style(line: &str) -> Style {
    let (foreground, background) =
        line.split_at(line.to_lowercase().find("on ").unwrap_or(line.len()));
    let foreground = process_color_string(foreground);
    let background = process_color_string(&background.replace("on ", ""));

    let mut style = Style::default();
    if let Some(fg) = parse_color(&foreground.0) {
        style = style.fg(fg);
    }
    if let Some(bg) = parse_color(&background.0) {
        style = style.bg(bg);
    }
    style.add_modifier(foreground.1 | background.1)
}

fn process_color_string(color_str: &str) -> (String, Modifier) {
    let color = color_str
        .replace("grey", "gray")
        .replace("bold ", "")
        .replace("underline ", "")
        .replace("inverse ", "");

    let mut modifiers = Modifier::empty();
    if color_str.contains("underline") {
        modifiers |= Modifier::UNDERLINED;
    }
    if color_str.contains("bold") {
        modifiers |= Modifier::BOLD;
    }
    if color_str.contains("inverse") {
        modifiers |= Modifier::REVERSED;
    }

    (color, modifiers)
}

fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Some(index) = s.strip_prefix("color") {
        return index.trim().parse::<u8>().ok().map(Color::Indexed);
    }
    if let Some(Ok(level)) = s.strip_prefix("gray").map(|l| l.trim().parse::<u8>()) {
        // 24 gray levels starting at index 232
        return (level < 24).then(|| Color::Indexed(232 + level));
    }
    // ratatui parses names ("green", "lightblue") and "#rrggbb"
    s.parse::<Color>().ok()
}
