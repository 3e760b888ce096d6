use crate::core::{
    cmd::{Cmd, TuiCommand},
    msg::system::SystemMsg,
};

/// System-related state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SystemState {
    pub should_quit: bool,
    pub should_suspend: bool,
    pub status_message: Option<String>,
}

impl SystemState {
    fn set_message(&mut self, label: &str, message: &str) {
        let normalized_message = message.replace('\n', " ");
        self.status_message = Some(format!("[{label}] {normalized_message}"));
    }

    pub fn status_message(&self) -> Option<&String> {
        self.status_message.as_ref()
    }

    /// System-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: SystemMsg) -> Vec<Cmd> {
        match msg {
            SystemMsg::Quit => {
                self.should_quit = true;
                vec![]
            }

            SystemMsg::Suspend => {
                self.should_suspend = true;
                vec![]
            }

            SystemMsg::Resume => {
                self.should_suspend = false;
                vec![]
            }

            SystemMsg::Resize(width, height) => {
                vec![Cmd::Tui(TuiCommand::Resize { width, height })]
            }

            SystemMsg::ShowMessage { label, message } => {
                self.set_message(&label, &message);
                vec![]
            }

            SystemMsg::ShowError { label, message } => {
                self.set_message(&format!("ERR: {label}"), &message);
                vec![Cmd::LogError {
                    message: format!("{label}: {message}"),
                }]
            }

            SystemMsg::ClearStatusMessage => {
                self.status_message = None;
                vec![]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_system_state_quit_isolated() {
        let mut system = SystemState::default();
        assert!(!system.should_quit);

        let cmds = system.update(SystemMsg::Quit);

        assert!(system.should_quit);
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_system_state_resize_generates_command() {
        let mut system = SystemState::default();

        let cmds = system.update(SystemMsg::Resize(80, 24));

        assert_eq!(
            cmds,
            vec![Cmd::Tui(TuiCommand::Resize {
                width: 80,
                height: 24
            })]
        );
    }

    #[test]
    fn test_status_message_flow() {
        let mut system = SystemState::default();
        assert!(system.status_message().is_none());

        let cmds = system.update(SystemMsg::ShowMessage {
            label: "Saved".into(),
            message: "Split 1\nwith tip".into(),
        });
        assert!(cmds.is_empty());
        assert_eq!(
            system.status_message(),
            Some(&"[Saved] Split 1 with tip".to_string())
        );

        let cmds = system.update(SystemMsg::ClearStatusMessage);
        assert!(cmds.is_empty());
        assert!(system.status_message().is_none());
    }

    #[test]
    fn test_error_is_labelled_and_logged() {
        let mut system = SystemState::default();

        let cmds = system.update(SystemMsg::ShowError {
            label: "Load".into(),
            message: "saved split 2 not found (1 saved)".into(),
        });

        assert_eq!(
            system.status_message(),
            Some(&"[ERR: Load] saved split 2 not found (1 saved)".to_string())
        );
        assert_eq!(
            cmds,
            vec![Cmd::LogError {
                message: "Load: saved split 2 not found (1 saved)".into()
            }]
        );
    }

    #[test]
    fn test_suspend_resume() {
        let mut system = SystemState::default();

        system.update(SystemMsg::Suspend);
        assert!(system.should_suspend);

        system.update(SystemMsg::Resume);
        assert!(!system.should_suspend);
    }
}
