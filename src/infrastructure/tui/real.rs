use std::{
    future::Future,
    io::{stdout, Stdout},
    pin::Pin,
    time::Duration,
};

use color_eyre::eyre::Result;
use crossterm::{
    cursor,
    event::{
        DisableBracketedPaste, EnableBracketedPaste, Event as CrosstermEvent, EventStream,
        KeyEventKind,
    },
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::{FutureExt, StreamExt};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
#[cfg(unix)]
use signal_hook::{consts::signal::SIGTSTP, low_level::raise};
use tokio::{
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
    task::JoinHandle,
};
use tokio_util::sync::CancellationToken;

use crate::infrastructure::tui::{Event, Frame, TuiLike};

/// Crossterm terminal in raw mode on the alternate screen. A background task
/// merges terminal input with the tick and render intervals into one stream.
pub struct RealTui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    task: Option<JoinHandle<()>>,
    cancellation_token: CancellationToken,
    event_rx: UnboundedReceiver<Event>,
    event_tx: UnboundedSender<Event>,
    tick_rate: f64,
    frame_rate: f64,
    paste: bool,
}

impl RealTui {
    pub fn new() -> Result<Self> {
        let terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        Ok(Self {
            terminal,
            task: None,
            cancellation_token: CancellationToken::new(),
            event_rx,
            event_tx,
            tick_rate: 4.0,
            frame_rate: 30.0,
            paste: false,
        })
    }

    pub fn tick_rate(mut self, tick_rate: f64) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    pub fn frame_rate(mut self, frame_rate: f64) -> Self {
        self.frame_rate = frame_rate;
        self
    }

    pub fn paste(mut self, paste: bool) -> Self {
        self.paste = paste;
        self
    }

    fn start(&mut self) {
        self.cancel();
        self.cancellation_token = CancellationToken::new();
        let tick_delay = Duration::from_secs_f64(1.0 / self.tick_rate);
        let render_delay = Duration::from_secs_f64(1.0 / self.frame_rate);
        let token = self.cancellation_token.clone();
        let event_tx = self.event_tx.clone();

        self.task = Some(tokio::spawn(async move {
            let mut reader = EventStream::new();
            let mut tick_interval = tokio::time::interval(tick_delay);
            let mut render_interval = tokio::time::interval(render_delay);
            let _ = event_tx.send(Event::Init);
            loop {
                let tick = tick_interval.tick();
                let render = render_interval.tick();
                let crossterm_event = reader.next().fuse();
                let event = tokio::select! {
                    _ = token.cancelled() => break,
                    maybe_event = crossterm_event => match maybe_event {
                        Some(Ok(event)) => match translate(event) {
                            Some(event) => event,
                            None => continue,
                        },
                        Some(Err(_)) => Event::Error,
                        None => Event::Closed,
                    },
                    _ = tick => Event::Tick,
                    _ = render => Event::Render,
                };
                let closed = event == Event::Closed;
                if event_tx.send(event).is_err() || closed {
                    break;
                }
            }
        }));
    }

    fn cancel(&mut self) {
        self.cancellation_token.cancel();
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

/// Key releases and unknown events are dropped
fn translate(event: CrosstermEvent) -> Option<Event> {
    match event {
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
        CrosstermEvent::Key(_) => None,
        CrosstermEvent::Mouse(mouse) => Some(Event::Mouse(mouse)),
        CrosstermEvent::Resize(width, height) => Some(Event::Resize(width, height)),
        CrosstermEvent::FocusGained => Some(Event::FocusGained),
        CrosstermEvent::FocusLost => Some(Event::FocusLost),
        CrosstermEvent::Paste(text) => Some(Event::Paste(text)),
    }
}

impl TuiLike for RealTui {
    fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen, cursor::Hide)?;
        if self.paste {
            execute!(stdout(), EnableBracketedPaste)?;
        }
        self.start();
        Ok(())
    }

    fn exit(&mut self) -> Result<()> {
        self.cancel();
        if terminal::is_raw_mode_enabled()? {
            self.terminal.flush()?;
            if self.paste {
                execute!(stdout(), DisableBracketedPaste)?;
            }
            execute!(stdout(), LeaveAlternateScreen, cursor::Show)?;
            terminal::disable_raw_mode()?;
        }
        Ok(())
    }

    fn draw(&mut self, f: &mut dyn FnMut(&mut Frame<'_>)) -> Result<()> {
        self.terminal.draw(|frame| f(frame))?;
        Ok(())
    }

    fn resize(&mut self, area: Rect) -> Result<()> {
        self.terminal.resize(area)?;
        Ok(())
    }

    fn next(&mut self) -> Pin<Box<dyn Future<Output = Option<Event>> + Send + '_>> {
        Box::pin(self.event_rx.recv())
    }

    fn suspend(&mut self) -> Result<()> {
        self.exit()?;
        #[cfg(unix)]
        raise(SIGTSTP)?;
        Ok(())
    }

    fn resume(&mut self) -> Result<()> {
        self.enter()?;
        self.terminal.clear()?;
        Ok(())
    }
}

impl Drop for RealTui {
    fn drop(&mut self) {
        if let Err(e) = self.exit() {
            log::error!("Failed to restore terminal: {e}");
        }
    }
}
