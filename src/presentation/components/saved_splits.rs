//! Saved splits component
//!
//! Lists every saved split with its participant count and total.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState},
};

use crate::{
    core::state::AppState,
    domain::{text::format_amount, SplitConfiguration},
    presentation::config::{styles, Action},
};

#[derive(Debug, Default)]
pub struct SavedSplitsComponent {
    list_state: ListState,
}

impl SavedSplitsComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&mut self, state: &AppState, frame: &mut Frame, area: Rect) {
        let config_styles = &state.config.config.styles;
        let block = Block::default().borders(Borders::ALL).title(Span::styled(
            format!(" Saved ({}) ", state.saved.len()),
            config_styles.style(styles::TITLE),
        ));

        if state.saved.is_empty() {
            let hint = state
                .config
                .config
                .keybindings
                .hint_for(Action::SaveSplit)
                .map(|key| format!("Press {key} to save"))
                .unwrap_or_default();
            let empty = List::new([ListItem::new("No saved splits"), ListItem::new(hint)])
                .block(block)
                .style(Style::default().dim());
            frame.render_widget(empty, area);
            return;
        }

        let items = state
            .saved
            .iter()
            .enumerate()
            .map(|(index, split)| ListItem::new(summary(index, split)));
        let list = List::new(items)
            .block(block)
            .highlight_style(config_styles.style(styles::SELECTED))
            .highlight_symbol("> ");

        self.list_state.select(state.form.selected_saved);
        frame.render_stateful_widget(list, area, &mut self.list_state);
    }
}

/// `Split n` with its size and total, as listed
pub fn summary(index: usize, split: &SplitConfiguration) -> String {
    format!(
        "Split {} ({} people, ${})",
        index + 1,
        split.len(),
        format_amount(split.total_with_tip())
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::infrastructure::config::Config;

    fn render(state: &AppState) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(40, 8)).unwrap();
        let mut component = SavedSplitsComponent::new();
        terminal
            .draw(|frame| component.view(state, frame, frame.area()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn test_summary() {
        let split = SplitConfiguration::with_defaults(100.0, 15.0).add_participant();

        assert_eq!(summary(1, &split), "Split 2 (3 people, $115.00)");
    }

    #[test]
    fn test_render_empty() {
        let state = AppState::new_with_config(Config::embedded().unwrap());
        let rows = render(&state);

        assert!(rows[0].contains("Saved (0)"));
        assert!(rows[1].contains("No saved splits"));
        assert!(rows[2].contains("Press <s> to save"));
    }

    #[test]
    fn test_render_highlights_selected() {
        let mut state = AppState::new_with_config(Config::embedded().unwrap());
        state.saved = state
            .saved
            .save(&SplitConfiguration::with_defaults(10.0, 0.0))
            .save(&SplitConfiguration::with_defaults(20.0, 0.0));
        state.form.selected_saved = Some(1);
        let rows = render(&state);

        assert!(rows[0].contains("Saved (2)"));
        assert!(rows[1].contains("  Split 1 (2 people, $10.00)"));
        assert!(rows[2].contains("> Split 2 (2 people, $20.00)"));
    }
}
