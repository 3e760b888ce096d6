use serde::{Deserialize, Serialize};

use crate::core::state::form::Focus;

/// Edits to the active split and the form around it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FormMsg {
    FocusNext,
    FocusPrev,
    Focus(Focus),

    /// Step the focused numeric input, e.g. a slider
    AdjustFocused(f64),

    StartEditing,
    InputChar(char),
    InputText(String),
    InputBackspace,
    CommitEdit,

    AddParticipant,
    RemoveFocusedParticipant,
    RemoveParticipant(usize),
    Renormalize,
}
