use std::collections::VecDeque;

use crate::core::{
    cmd::Cmd, msg::Msg, raw_msg::RawMsg, state::AppState, translator::translate_raw_to_domain,
    update::update,
};

/// Owns the state and runs queued messages through translate and update
#[derive(Debug, Default)]
pub struct Runtime {
    state: AppState,
    msg_queue: VecDeque<Msg>,
    raw_msg_queue: VecDeque<RawMsg>,
    cmd_queue: VecDeque<Cmd>,
}

impl Runtime {
    pub fn new(initial_state: AppState) -> Self {
        Self {
            state: initial_state,
            ..Default::default()
        }
    }

    /// Get current state (read-only)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Send message directly (for testing)
    pub fn send_msg(&mut self, msg: Msg) {
        self.msg_queue.push_back(msg);
    }

    pub fn send_raw_msg(&mut self, raw_msg: RawMsg) {
        if !raw_msg.is_frequent() {
            log::debug!("Raw message: {raw_msg:?}");
        }
        self.raw_msg_queue.push_back(raw_msg);
    }

    /// Drains the commands produced so far
    pub fn pending_commands(&mut self) -> Vec<Cmd> {
        self.cmd_queue.drain(..).collect()
    }

    /// Process a single message
    pub fn process_message(&mut self, msg: Msg) -> Vec<Cmd> {
        let (new_state, commands) = update(msg, std::mem::take(&mut self.state));
        self.state = new_state;
        self.cmd_queue.extend(commands.iter().cloned());
        commands
    }

    /// Raw messages are translated against the state left by everything
    /// before them, so a key that starts editing changes how the next key
    /// is read.
    pub fn process_all_messages(&mut self) -> Vec<Cmd> {
        let mut all_commands = Vec::new();

        while let Some(msg) = self.msg_queue.pop_front() {
            all_commands.extend(self.process_message(msg));
        }

        while let Some(raw_msg) = self.raw_msg_queue.pop_front() {
            for msg in translate_raw_to_domain(raw_msg, &self.state) {
                all_commands.extend(self.process_message(msg));
            }
        }

        all_commands
    }

    /// Process all messages and hand back the commands to execute
    pub fn run_update_cycle(&mut self) -> Vec<Cmd> {
        self.process_all_messages();
        self.pending_commands()
    }
}
