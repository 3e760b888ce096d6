use serde::{Deserialize, Serialize};

/// UI (TUI) specific sub-commands executed by the app runner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuiCommand {
    Resize { width: u16, height: u16 },
}

/// Side effects requested by `update`; the app runner executes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    Tui(TuiCommand),
    LogInfo { message: String },
    LogError { message: String },
}
