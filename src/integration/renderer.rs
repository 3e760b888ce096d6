use std::sync::Arc;

use color_eyre::eyre::Result;
use tokio::sync::Mutex;

use crate::{core::state::AppState, infrastructure::tui, presentation::components::Components};

#[derive(Debug, Default)]
pub struct Renderer {
    components: Components,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn render(
        &mut self,
        tui: &Arc<Mutex<dyn tui::TuiLike + Send>>,
        state: &AppState,
    ) -> Result<()> {
        let mut guard = tui.lock().await;
        let mut draw = |f: &mut tui::Frame<'_>| self.components.render(f, state);
        guard.draw(&mut draw)?;
        Ok(())
    }
}
