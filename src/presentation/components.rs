//! Component collection and management
//!
//! Components are renderers that receive `AppState` as a parameter. The only
//! state they keep is view bookkeeping such as scroll offsets.

use ratatui::prelude::*;

use crate::core::state::AppState;

pub mod saved_splits;
pub mod split_form;
pub mod status_bar;

pub use saved_splits::SavedSplitsComponent;
pub use split_form::SplitFormComponent;
pub use status_bar::StatusBarComponent;

/// Collection of all components
#[derive(Debug, Default)]
pub struct Components {
    pub split_form: SplitFormComponent,
    pub saved_splits: SavedSplitsComponent,
    pub status_bar: StatusBarComponent,
}

impl Components {
    pub fn new() -> Self {
        Self::default()
    }

    /// Main rendering entry point
    pub fn render(&mut self, frame: &mut Frame, state: &AppState) {
        let area = frame.area();

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![
                Constraint::Min(0),    // form and saved splits
                Constraint::Length(2), // status bar (2 rows)
            ])
            .split(area);

        let main = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(layout[0]);

        self.split_form.view(state, frame, main[0]);
        self.saved_splits.view(state, frame, main[1]);
        self.status_bar.view(state, frame, layout[1]);
    }
}
