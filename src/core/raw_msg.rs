use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

/// Terminal-level events before translation into domain messages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RawMsg {
    Quit,
    Suspend,
    Resume,
    Resize(u16, u16),
    Key(KeyEvent),
    Paste(String),
    FocusLost,
    Error(String),
    Tick,
    Render,
}

impl RawMsg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(self, RawMsg::Tick | RawMsg::Render)
    }
}
