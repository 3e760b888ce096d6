//! Status bar component
//!
//! Shows the form mode, the keys that matter in it and the latest status
//! message.

use ratatui::prelude::*;

use crate::{
    core::state::AppState,
    presentation::{
        config::{styles, Action},
        widgets::status_bar::{StatusBarWidget, ViewContext},
    },
};

const NAVIGATE_HINTS: [(Action, &str); 7] = [
    (Action::Edit, "edit"),
    (Action::Increment, "+"),
    (Action::Decrement, "-"),
    (Action::AddParticipant, "add"),
    (Action::SaveSplit, "save"),
    (Action::LoadSplit, "load"),
    (Action::Quit, "quit"),
];

#[derive(Debug, Clone, Default)]
pub struct StatusBarComponent;

impl StatusBarComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let status_bar = StatusBarWidget::new(Self::view_context(state))
            .style(state.config.config.styles.style(styles::STATUS));
        frame.render_widget(status_bar, area);
    }

    pub fn view_context(state: &AppState) -> ViewContext<'_> {
        let message = state.system.status_message().map(String::as_str);
        if state.form.is_editing() {
            return ViewContext {
                mode: "EDIT",
                hints: vec![
                    ("<enter>".to_string(), "done"),
                    ("<tab>".to_string(), "next"),
                    ("<esc>".to_string(), "done"),
                ],
                message,
            };
        }

        let keybindings = &state.config.config.keybindings;
        let hints = NAVIGATE_HINTS
            .iter()
            .filter_map(|(action, description)| {
                keybindings
                    .hint_for(*action)
                    .map(|key| (key, *description))
            })
            .collect();
        ViewContext {
            mode: "NAVIGATE",
            hints,
            message,
        }
    }
}
