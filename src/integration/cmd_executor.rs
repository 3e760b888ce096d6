use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::core::cmd::{Cmd, TuiCommand};

/// Executes commands produced by `update`
///
/// Terminal commands are forwarded to the app runner, which owns the
/// terminal; logging commands are handled here.
#[derive(Clone, Debug, Default)]
pub struct CmdExecutor {
    tui_sender: Option<mpsc::UnboundedSender<TuiCommand>>,
}

impl CmdExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inject TUI command sender for executing TuiCommand asynchronously.
    pub fn set_tui_sender(&mut self, sender: mpsc::UnboundedSender<TuiCommand>) {
        self.tui_sender = Some(sender);
    }

    pub fn execute_command(&self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::Tui(tui_cmd) => match &self.tui_sender {
                Some(sender) => sender.send(tui_cmd.clone())?,
                None => log::warn!("{tui_cmd:?} ignored: no terminal attached"),
            },
            Cmd::LogInfo { message } => log::info!("{message}"),
            Cmd::LogError { message } => log::error!("{message}"),
        }
        Ok(())
    }

    /// Runs every command, stopping at the first failure
    pub fn execute_commands(&self, commands: &[Cmd]) -> Result<()> {
        commands
            .iter()
            .try_for_each(|cmd| self.execute_command(cmd))
    }
}
