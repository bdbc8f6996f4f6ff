use std::sync::Arc;

use chrono::{Local, NaiveDate};
use color_eyre::eyre::{eyre, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use tokio::sync::{mpsc, Mutex};
use tokio_util::sync::CancellationToken;

use crate::{
    core::{
        cmd::TuiCommand,
        msg::{nav::NavMsg, Msg},
        raw_msg::RawMsg,
        state::AppState,
    },
    infrastructure::{
        api_service::ApiService,
        config::Config,
        tui::{event_source::EventSource, Event, TuiLike},
    },
    integration::{
        coalescer::Coalescer, renderer::Renderer, runtime::Runtime,
        update_executor::UpdateExecutor,
    },
};

/// Owns the terminal, the background API service and the runtime, and
/// drives one loop iteration per terminal event.
pub struct AppRunner {
    runtime: Runtime,
    renderer: Renderer,
    tui: Arc<Mutex<dyn TuiLike + Send>>,
    source: EventSource,
    render_req_rx: mpsc::Receiver<()>,
    tui_cmd_rx: mpsc::UnboundedReceiver<TuiCommand>,
    api_cancel: CancellationToken,
    clock: fn() -> NaiveDate,
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

impl AppRunner {
    /// Runner reading events from the terminal itself
    pub async fn new_with_real(config: Config, tui: Arc<Mutex<dyn TuiLike + Send>>) -> Result<Self> {
        let source = EventSource::real(Arc::clone(&tui));
        Self::new(config, tui, source, local_today)
    }

    /// Runner fed from a fixed list of events with a pinned date
    pub fn new_with_test(
        config: Config,
        tui: Arc<Mutex<dyn TuiLike + Send>>,
        events: impl IntoIterator<Item = Event>,
        clock: fn() -> NaiveDate,
    ) -> Result<Self> {
        Self::new(config, tui, EventSource::test(events), clock)
    }

    fn new(
        config: Config,
        tui: Arc<Mutex<dyn TuiLike + Send>>,
        source: EventSource,
        clock: fn() -> NaiveDate,
    ) -> Result<Self> {
        let api = config.api.clone();
        let mut runtime = Runtime::new_with_executor(AppState::new(config, clock()));

        let (api_tx, api_cancel, api_service) = ApiService::new(&api, runtime.get_raw_sender())?;
        api_service.run();

        // Capacity 1: a full channel already holds a pending render
        let (render_req_tx, render_req_rx) = mpsc::channel(1);
        let (tui_cmd_tx, tui_cmd_rx) = mpsc::unbounded_channel();
        runtime.add_api_sender(api_tx).map_err(|e| eyre!(e))?;
        runtime
            .add_render_request_sender(render_req_tx)
            .map_err(|e| eyre!(e))?;
        runtime.add_tui_sender(tui_cmd_tx).map_err(|e| eyre!(e))?;

        Ok(Self {
            runtime,
            renderer: Renderer::new(),
            tui,
            source,
            render_req_rx,
            tui_cmd_rx,
            api_cancel,
            clock,
        })
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut Runtime {
        &mut self.runtime
    }

    /// Run until the user quits or the terminal goes away
    pub async fn run(&mut self) -> Result<()> {
        self.start().await?;
        let result = loop {
            match self.step().await {
                Ok(true) => continue,
                Ok(false) => break Ok(()),
                Err(e) => break Err(e),
            }
        };
        self.shutdown().await?;
        result
    }

    /// Enter the terminal and load the first page
    pub async fn start(&mut self) -> Result<()> {
        self.tui.lock().await.enter()?;
        self.runtime.send_msg(Msg::Nav(NavMsg::Refresh));
        Ok(())
    }

    /// One loop iteration. Returns false once the app should exit.
    pub async fn step(&mut self) -> Result<bool> {
        let mut saw_render = false;
        let mut resizes = Vec::new();

        match self.source.next().await {
            Some(event) => self.handle_event(event, &mut saw_render, &mut resizes),
            None if matches!(self.source, EventSource::Real(_)) => {
                log::info!("Terminal event stream closed");
                self.runtime.send_raw_msg(RawMsg::Quit);
            }
            None => {}
        }

        let mut pending_resize = Coalescer::last_resize(None, &resizes);
        UpdateExecutor::process_update_cycle(&mut self.runtime, &mut pending_resize);

        while let Ok(command) = self.tui_cmd_rx.try_recv() {
            match command {
                TuiCommand::Resize { width, height } => {
                    self.tui
                        .lock()
                        .await
                        .resize(Rect::new(0, 0, width, height))?;
                    saw_render = true;
                }
            }
        }

        if self.runtime.state().system.should_suspend {
            self.suspend().await?;
            saw_render = true;
        }

        let mut queued_renders = 0;
        while self.render_req_rx.try_recv().is_ok() {
            queued_renders += 1;
        }
        if Coalescer::should_render(queued_renders, saw_render) {
            self.renderer.render(&self.tui, self.runtime.state()).await?;
        }

        Ok(!self.runtime.state().system.should_quit)
    }

    fn handle_event(
        &mut self,
        event: Event,
        saw_render: &mut bool,
        resizes: &mut Vec<(u16, u16)>,
    ) {
        match event {
            Event::Tick => {
                self.runtime.send_raw_msg(RawMsg::Tick);
                let shown = self.runtime.state().today();
                if let Some(today) = Coalescer::day_changed(shown, (self.clock)()) {
                    log::info!("Date changed to {today}");
                    self.runtime.send_raw_msg(RawMsg::Today(today));
                }
            }
            Event::Render => *saw_render = true,
            Event::Resize(width, height) => resizes.push((width, height)),
            Event::Key(key) => self.runtime.send_raw_msg(RawMsg::Key(key)),
            Event::Paste(text) => self.paste(&text),
            Event::Quit | Event::Closed => self.runtime.send_raw_msg(RawMsg::Quit),
            Event::Error => log::warn!("Terminal reported an input error"),
            Event::Init | Event::FocusGained | Event::FocusLost | Event::Mouse(_) => {}
        }
    }

    /// Pasted text is typed into the focused input; elsewhere it is ignored
    fn paste(&mut self, text: &str) {
        if !self.runtime.state().accepts_text() {
            return;
        }
        for c in text.chars().filter(|c| !c.is_control()) {
            let key = KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE);
            self.runtime.send_raw_msg(RawMsg::Key(key));
        }
    }

    async fn suspend(&mut self) -> Result<()> {
        {
            let mut tui = self.tui.lock().await;
            tui.suspend()?;
            tui.resume()?;
        }
        self.runtime.send_raw_msg(RawMsg::Resume);
        UpdateExecutor::process_update_cycle(&mut self.runtime, &mut None);
        Ok(())
    }

    /// Stop the API service and restore the terminal
    pub async fn shutdown(&mut self) -> Result<()> {
        self.api_cancel.cancel();
        self.tui.lock().await.exit()?;
        Ok(())
    }
}
