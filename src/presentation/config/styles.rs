use std::collections::HashMap;

use derive_deref::{Deref, DerefMut};
use ratatui::style::{Color, Modifier, Style};
use serde::{de::Deserializer, Deserialize};

/// Style keys looked up by the components
pub const TITLE: &str = "title";
pub const FOCUSED: &str = "focused";
pub const EDITING: &str = "editing";
pub const ERROR: &str = "error";
pub const AMOUNT: &str = "amount";
pub const SLIDER: &str = "slider";
pub const SELECTED: &str = "selected";
pub const STATUS: &str = "status";

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
            .map(|(key, raw)| (key, parse_style(&raw)))
            .collect();

        Ok(Styles(styles))
    }
}

impl Styles {
    /// Style for `key`, or the terminal default when unset
    pub fn style(&self, key: &str) -> Style {
        self.get(key).copied().unwrap_or_default()
    }
}

/// Parses strings like `"bold yellow on black"`. Unknown words are ignored.
pub fn parse_style(line: &str) -> Style {
    let lower = line.to_lowercase();
    let (foreground, background) = match lower.split_once(" on ") {
        Some((fg, bg)) => (fg, Some(bg)),
        None => match lower.strip_prefix("on ") {
            Some(bg) => ("", Some(bg)),
            None => (lower.as_str(), None),
        },
    };

    let mut style = Style::default();
    for word in foreground.split_whitespace() {
        if let Some(modifier) = parse_modifier(word) {
            style = style.add_modifier(modifier);
        } else if let Some(color) = parse_color(word) {
            style = style.fg(color);
        }
    }
    if let Some(color) = background.and_then(|bg| parse_color(bg.trim())) {
        style = style.bg(color);
    }
    style
}

fn parse_modifier(word: &str) -> Option<Modifier> {
    match word {
        "bold" => Some(Modifier::BOLD),
        "dim" => Some(Modifier::DIM),
        "italic" => Some(Modifier::ITALIC),
        "underline" | "underlined" => Some(Modifier::UNDERLINED),
        "reversed" | "inverse" => Some(Modifier::REVERSED),
        _ => None,
    }
}

fn parse_color(word: &str) -> Option<Color> {
    let color = match word {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        "white" => Color::White,
        "reset" => Color::Reset,
        other => {
            let index = other
                .strip_prefix("color")
                .and_then(|n| n.parse::<u8>().ok())?;
            Color::Indexed(index)
        }
    };
    Some(color)
}
