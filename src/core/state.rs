pub mod form;
pub mod system;

use crate::{
    domain::{SavedSplits, SplitConfiguration, ValidationResult},
    infrastructure::config::Config,
};

use form::FormState;
use system::SystemState;

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    pub config: Config,
}

/// Unified application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// The split being edited
    pub split: SplitConfiguration,
    pub saved: SavedSplits,
    pub form: FormState,
    pub system: SystemState,
    pub config: ConfigState,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(SplitConfiguration::default())
    }
}

impl AppState {
    pub fn new(split: SplitConfiguration) -> Self {
        Self {
            form: FormState::new(&split),
            split,
            saved: SavedSplits::new(),
            system: SystemState::default(),
            config: ConfigState::default(),
        }
    }

    /// Starts from the configured defaults
    pub fn new_with_config(config: Config) -> Self {
        Self {
            config: ConfigState { config },
            ..Self::new(SplitConfiguration::default())
        }
        .with_initial_split()
    }

    fn with_initial_split(mut self) -> Self {
        self.split = self.config.config.initial_split();
        self.form = FormState::new(&self.split);
        self
    }

    pub fn validation(&self) -> ValidationResult {
        self.split.validate()
    }

    /// Owed amount per participant, recomputed on every read
    pub fn amounts_owed(&self) -> Vec<f64> {
        self.split.amounts_owed()
    }

    pub fn selected_saved(&self) -> Option<&SplitConfiguration> {
        self.form
            .selected_saved
            .and_then(|index| self.saved.get(index))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::infrastructure::config::DefaultsConfig;

    #[test]
    fn test_app_state_default() {
        let state = AppState::default();

        assert_eq!(state.split, SplitConfiguration::default());
        assert!(state.saved.is_empty());
        assert!(!state.system.should_quit);
        assert_eq!(state.form.bill_input, "0.00");
        assert!(state.validation().is_valid());
    }

    #[test]
    fn test_app_state_uses_configured_defaults() {
        let config = Config {
            defaults: DefaultsConfig {
                bill_amount: 60.0,
                tip_percentage: 20.0,
            },
            ..Default::default()
        };
        let state = AppState::new_with_config(config);

        assert_eq!(state.split.bill_amount, 60.0);
        assert_eq!(state.split.tip_percentage, 20.0);
        assert_eq!(state.form.bill_input, "60.00");
        assert_eq!(state.amounts_owed(), vec![36.0, 36.0]);
    }

    #[test]
    fn test_selected_saved() {
        let mut state = AppState::default();
        assert!(state.selected_saved().is_none());

        state.saved = state.saved.clone().save(&state.split);
        state.form.selected_saved = Some(0);
        assert_eq!(state.selected_saved(), Some(&state.split));
    }
}
