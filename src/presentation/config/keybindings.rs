use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use derive_deref::{Deref, DerefMut};
use serde::{de::Deserializer, Deserialize, Serialize};
use strum::Display;

/// User-facing intents that keys can be bound to in navigate mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Action {
    Quit,
    Suspend,
    FocusNext,
    FocusPrev,
    Increment,
    Decrement,
    IncrementLarge,
    DecrementLarge,
    Edit,
    AddParticipant,
    RemoveParticipant,
    Renormalize,
    SaveSplit,
    LoadSplit,
    NextSavedSplit,
    PrevSavedSplit,
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
                    .map(|keys| (keys, action))
                    .map_err(serde::de::Error::custom)
            })
            .collect::<Result<HashMap<_, _>, _>>()?;

        Ok(KeyBindings(keybindings))
    }
}

impl KeyBindings {
    pub fn action_for(&self, key: KeyEvent) -> Option<Action> {
        self.get(&vec![normalize(key)]).copied()
    }

    /// First key sequence bound to `action`, rendered for hints
    pub fn hint_for(&self, action: Action) -> Option<String> {
        let mut sequences: Vec<String> = self
            .iter()
            .filter(|(_, bound)| **bound == action)
            .map(|(keys, _)| keys.iter().map(key_event_to_string).collect())
            .collect();
        sequences.sort();
        sequences.into_iter().next()
    }
}

/// Drops the state bits crossterm attaches so lookups match parsed bindings.
fn normalize(key: KeyEvent) -> KeyEvent {
    KeyEvent::new(key.code, key.modifiers)
}

fn parse_key_event(raw: &str) -> Result<KeyEvent, String> {
    let raw_lower = raw.to_ascii_lowercase();
    let (remaining, modifiers) = extract_modifiers(&raw_lower);
    parse_key_code_with_modifiers(remaining, modifiers, raw)
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
    original: &str,
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
        "f3" => KeyCode::F(3),
        "f4" => KeyCode::F(4),
        "f5" => KeyCode::F(5),
        "space" => KeyCode::Char(' '),
        "hyphen" | "minus" => KeyCode::Char('-'),
        "tab" => KeyCode::Tab,
        c if c.chars().count() == 1 => {
            // Keep the case the user wrote; `<G>` means shift-g.
            let mut ch = original
                .chars()
                .last()
                .ok_or_else(|| format!("Unable to parse {original}"))?;
            if ch.is_ascii_uppercase() || modifiers.contains(KeyModifiers::SHIFT) {
                ch = ch.to_ascii_uppercase();
                modifiers.insert(KeyModifiers::SHIFT);
            }
            KeyCode::Char(ch)
        }
        _ => return Err(format!("Unable to parse {original}")),
    };
    Ok(KeyEvent::new(c, modifiers))
}

pub fn key_event_to_string(key_event: &KeyEvent) -> String {
    let code = match key_event.code {
        KeyCode::Backspace => "backspace".to_string(),
        KeyCode::Enter => "enter".to_string(),
        KeyCode::Left => "left".to_string(),
        KeyCode::Right => "right".to_string(),
        KeyCode::Up => "up".to_string(),
        KeyCode::Down => "down".to_string(),
        KeyCode::Home => "home".to_string(),
        KeyCode::End => "end".to_string(),
        KeyCode::PageUp => "pageup".to_string(),
        KeyCode::PageDown => "pagedown".to_string(),
        KeyCode::Tab => "tab".to_string(),
        KeyCode::BackTab => "backtab".to_string(),
        KeyCode::Delete => "delete".to_string(),
        KeyCode::Insert => "insert".to_string(),
        KeyCode::F(n) => format!("f{n}"),
        KeyCode::Char(' ') => "space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Esc => "esc".to_string(),
        _ => "?".to_string(),
    };

    let mut prefix = String::new();
    if key_event.modifiers.intersects(KeyModifiers::CONTROL) {
        prefix.push_str("ctrl-");
    }
    if key_event.modifiers.intersects(KeyModifiers::ALT) {
        prefix.push_str("alt-");
    }

    format!("<{prefix}{code}>")
}

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
    let sequences = raw
        .split("><")
        .map(|seq| {
            if let Some(s) = seq.strip_prefix('<') {
                s
            } else if let Some(s) = seq.strip_suffix('>') {
                s
            } else {
                seq
            }
        })
        .collect::<Vec<_>>();

    sequences.into_iter().map(parse_key_event).collect()
}
