use serde::{Deserialize, Serialize};

/// Saving the active split and loading saved ones back
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HistoryMsg {
    Save,
    LoadSelected,
    Load(usize),
    SelectNext,
    SelectPrev,
}
