pub mod event_source;
pub mod real;
pub mod test;
pub mod textarea_engine;

use std::{future::Future, pin::Pin};

use color_eyre::eyre::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::layout::Rect;
use serde::{Deserialize, Serialize};

pub type Frame<'a> = ratatui::Frame<'a>;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    Init,
    Quit,
    Error,
    Closed,
    Tick,
    Render,
    FocusGained,
    FocusLost,
    Paste(String),
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
}

/// Terminal surface the runner drives. Real terminals and test backends
/// both implement it.
pub trait TuiLike: Send {
    fn enter(&mut self) -> Result<()>;
    fn exit(&mut self) -> Result<()>;
    fn draw(&mut self, f: &mut dyn FnMut(&mut Frame<'_>)) -> Result<()>;
    fn resize(&mut self, area: Rect) -> Result<()>;
    fn next(&mut self) -> Pin<Box<dyn Future<Output = Option<Event>> + Send + '_>>;

    /// Hand the terminal back to the shell (Ctrl-Z)
    fn suspend(&mut self) -> Result<()> {
        self.exit()
    }

    /// Take the terminal again after a suspend
    fn resume(&mut self) -> Result<()> {
        self.enter()
    }
}
