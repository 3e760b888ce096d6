use serde::{Deserialize, Serialize};

/// Messages specific to SystemState
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SystemMsg {
    // System control
    Quit,
    Suspend,
    Resume,
    Resize(u16, u16),

    // Status line
    ShowMessage { label: String, message: String },
    ShowError { label: String, message: String },
    ClearStatusMessage,
}

impl SystemMsg {
    pub fn message(label: impl Into<String>, message: impl Into<String>) -> Self {
        SystemMsg::ShowMessage {
            label: label.into(),
            message: message.into(),
        }
    }

    pub fn error(label: impl Into<String>, message: impl Into<String>) -> Self {
        SystemMsg::ShowError {
            label: label.into(),
            message: message.into(),
        }
    }
}
