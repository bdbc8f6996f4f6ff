use std::sync::Arc;

use color_eyre::eyre::Result;
use tokio::sync::Mutex;

use crate::{
    core::state::AppState,
    infrastructure::tui::{Frame, TuiLike},
    presentation::components::Components,
};

/// Draws the current state onto whatever terminal the runner holds
#[derive(Debug, Default)]
pub struct Renderer {
    components: Components,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            components: Components::new(),
        }
    }

    pub async fn render(&self, tui: &Arc<Mutex<dyn TuiLike + Send>>, state: &AppState) -> Result<()> {
        let mut guard = tui.lock().await;
        guard.draw(&mut |frame: &mut Frame<'_>| self.components.render(frame, state))?;
        Ok(())
    }
}
