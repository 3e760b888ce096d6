use std::sync::Arc;

use color_eyre::eyre::Result;
use ratatui::prelude::Rect;
use tokio::sync::{mpsc, Mutex};

use crate::{
    core::{cmd::TuiCommand, raw_msg::RawMsg, state::AppState},
    infrastructure::tui::{self, event_source::EventSource},
    integration::{cmd_executor::CmdExecutor, renderer::Renderer, runtime::Runtime},
};

/// Drives the application: terminal events in, state updates, commands
/// executed, frames out.
pub struct AppRunner {
    runtime: Runtime,
    executor: CmdExecutor,
    renderer: Renderer,
    tui: Arc<Mutex<dyn tui::TuiLike + Send>>,
    events: EventSource,
    tui_cmd_rx: mpsc::UnboundedReceiver<TuiCommand>,
}

impl AppRunner {
    /// Runner reading events from the terminal it draws on
    pub fn new(state: AppState, tui: Arc<Mutex<dyn tui::TuiLike + Send>>) -> Self {
        let events = EventSource::real(Arc::clone(&tui));
        Self::new_with_events(state, tui, events)
    }

    /// Runner with a separate event source, e.g. a scripted one in tests
    pub fn new_with_events(
        state: AppState,
        tui: Arc<Mutex<dyn tui::TuiLike + Send>>,
        events: EventSource,
    ) -> Self {
        let (tui_cmd_tx, tui_cmd_rx) = mpsc::unbounded_channel();
        let mut executor = CmdExecutor::new();
        executor.set_tui_sender(tui_cmd_tx);
        Self {
            runtime: Runtime::new(state),
            executor,
            renderer: Renderer::new(),
            tui,
            events,
            tui_cmd_rx,
        }
    }

    pub fn state(&self) -> &AppState {
        self.runtime.state()
    }

    /// Run until a quit is requested or the event source runs dry
    pub async fn run(&mut self) -> Result<()> {
        self.tui.lock().await.enter()?;
        self.render().await?;

        loop {
            let Some(event) = self.events.next().await else {
                log::info!("Event source closed");
                break;
            };

            let should_render = !matches!(event, tui::Event::Tick);
            if let Some(raw_msg) = raw_msg_from_event(event) {
                self.runtime.send_raw_msg(raw_msg);
            }
            self.process_update_cycle().await?;

            if self.state().system.should_suspend {
                self.suspend().await?;
            }
            if self.state().system.should_quit {
                break;
            }
            if should_render {
                self.render().await?;
            }
        }

        self.tui.lock().await.exit()?;
        Ok(())
    }

    async fn process_update_cycle(&mut self) -> Result<()> {
        let commands = self.runtime.run_update_cycle();
        if let Err(e) = self.executor.execute_commands(&commands) {
            log::error!("Command execution failed: {e}");
            self.runtime
                .send_raw_msg(RawMsg::Error(format!("Command execution failed: {e}")));
            self.runtime.run_update_cycle();
        }

        while let Ok(tui_cmd) = self.tui_cmd_rx.try_recv() {
            match tui_cmd {
                TuiCommand::Resize { width, height } => {
                    self.tui
                        .lock()
                        .await
                        .resize(Rect::new(0, 0, width, height))?;
                }
            }
        }
        Ok(())
    }

    /// Hands the terminal back to the shell until the process is resumed
    async fn suspend(&mut self) -> Result<()> {
        {
            let mut tui = self.tui.lock().await;
            tui.suspend()?;
            tui.resume()?;
        }
        self.runtime.send_raw_msg(RawMsg::Resume);
        self.process_update_cycle().await
    }

    async fn render(&mut self) -> Result<()> {
        self.renderer.render(&self.tui, self.runtime.state()).await
    }
}

/// Terminal events the application reacts to
pub fn raw_msg_from_event(event: tui::Event) -> Option<RawMsg> {
    match event {
        tui::Event::Quit | tui::Event::Closed => Some(RawMsg::Quit),
        tui::Event::Error => Some(RawMsg::Error("terminal event stream failed".to_string())),
        tui::Event::Tick => Some(RawMsg::Tick),
        tui::Event::Render => Some(RawMsg::Render),
        tui::Event::FocusLost => Some(RawMsg::FocusLost),
        tui::Event::Paste(text) => Some(RawMsg::Paste(text)),
        tui::Event::Key(key) => Some(RawMsg::Key(key)),
        tui::Event::Resize(width, height) => Some(RawMsg::Resize(width, height)),
        tui::Event::Init | tui::Event::FocusGained | tui::Event::Mouse(_) => None,
    }
}
