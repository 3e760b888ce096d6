use serde::{Deserialize, Serialize};

pub mod form;
pub mod history;
pub mod system;

use form::FormMsg;
use history::HistoryMsg;
use system::SystemMsg;

/// Domain messages representing user intent.
/// These are processed by the update function and carry no terminal details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    System(SystemMsg),
    Form(FormMsg),
    History(HistoryMsg),
}
