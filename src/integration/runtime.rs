use std::{collections::VecDeque, mem};

use tokio::sync::mpsc;

use crate::{
    core::{
        api::ApiCall,
        cmd::{Cmd, TuiCommand},
        cmd_executor::CmdExecutor,
        msg::Msg,
        raw_msg::RawMsg,
        state::{nav::Route, AppState},
        translator::translate_raw_to_domain,
        update::{update_with_context, UpdateContext},
    },
    infrastructure::tui::textarea_engine::TuiTextAreaEngine,
};

const NO_EXECUTOR: &str = "No executor available. Use new_with_executor() or set_executor() first.";

/// Drives the translate -> update -> command pipeline
///
/// Raw events queue up until `process_all_messages` runs. Each one is
/// translated against the state at that moment, the resulting messages go
/// through `update`, and the emitted commands are handed to the executor.
pub struct Runtime {
    ctx: UpdateContext<'static>,
    state: AppState,
    msg_queue: VecDeque<Msg>,
    raw_msg_queue: VecDeque<RawMsg>,
    cmd_queue: VecDeque<Cmd>,
    raw_msg_tx: mpsc::UnboundedSender<RawMsg>,
    raw_msg_rx: mpsc::UnboundedReceiver<RawMsg>,
    cmd_executor: Option<CmdExecutor>,
}

impl Runtime {
    pub fn new(initial_state: AppState) -> Self {
        static ENGINE: TuiTextAreaEngine = TuiTextAreaEngine;
        let (raw_msg_tx, raw_msg_rx) = mpsc::unbounded_channel();

        Self {
            ctx: UpdateContext { text_area: &ENGINE },
            state: initial_state,
            msg_queue: VecDeque::new(),
            raw_msg_queue: VecDeque::new(),
            cmd_queue: VecDeque::new(),
            raw_msg_tx,
            raw_msg_rx,
            cmd_executor: None,
        }
    }

    pub fn new_with_executor(initial_state: AppState) -> Self {
        let mut runtime = Self::new(initial_state);
        runtime.set_executor();
        runtime
    }

    pub fn new_with_api_executor(
        initial_state: AppState,
        api_sender: mpsc::UnboundedSender<ApiCall>,
    ) -> Self {
        let mut runtime = Self::new(initial_state);
        runtime.cmd_executor = Some(CmdExecutor::new_with_api(api_sender));
        runtime
    }

    pub fn set_executor(&mut self) {
        self.cmd_executor = Some(CmdExecutor::new());
    }

    fn executor_mut(&mut self) -> Result<&mut CmdExecutor, String> {
        self.cmd_executor.as_mut().ok_or_else(|| NO_EXECUTOR.to_owned())
    }

    pub fn add_api_sender(&mut self, api_sender: mpsc::UnboundedSender<ApiCall>) -> Result<(), String> {
        self.executor_mut()?.set_api_sender(api_sender);
        Ok(())
    }

    pub fn add_tui_sender(
        &mut self,
        tui_sender: mpsc::UnboundedSender<TuiCommand>,
    ) -> Result<(), String> {
        self.executor_mut()?.set_tui_sender(tui_sender);
        Ok(())
    }

    pub fn add_render_request_sender(
        &mut self,
        render_sender: mpsc::Sender<()>,
    ) -> Result<(), String> {
        self.executor_mut()?.set_render_request_sender(render_sender);
        Ok(())
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn send_msg(&mut self, msg: Msg) {
        self.msg_queue.push_back(msg);
    }

    pub fn send_raw_msg(&mut self, raw_msg: RawMsg) {
        self.raw_msg_queue.push_back(raw_msg);
    }

    /// Sender for producers outside the loop, such as the API service
    pub fn get_raw_sender(&self) -> mpsc::UnboundedSender<RawMsg> {
        self.raw_msg_tx.clone()
    }

    pub fn pending_commands(&mut self) -> Vec<Cmd> {
        self.cmd_queue.drain(..).collect()
    }

    pub fn execute_pending_commands(&mut self) -> Result<Vec<String>, String> {
        let commands = self.pending_commands();
        let Some(executor) = &self.cmd_executor else {
            return Err(NO_EXECUTOR.to_owned());
        };
        if commands.is_empty() {
            return Ok(vec![]);
        }
        executor
            .execute_commands(&commands)
            .map_err(|e| format!("Command execution failed: {e}"))
    }

    pub fn process_message(&mut self, msg: Msg) -> Vec<Cmd> {
        if !msg.is_frequent() {
            log::trace!("Runtime: {msg:?}");
        }
        let state = mem::take(&mut self.state);
        let (new_state, commands) = update_with_context(msg, state, &self.ctx);
        self.state = new_state;
        self.cmd_queue.extend(commands.iter().cloned());
        commands
    }

    fn translate(&mut self, raw_msg: RawMsg) {
        let msgs = translate_raw_to_domain(raw_msg, &self.state);
        self.msg_queue.extend(msgs);
    }

    /// Translates and applies everything queued so far.
    /// Raw events are translated one at a time so each sees the state left
    /// by the previous one.
    pub fn process_all_messages(&mut self) -> Vec<Cmd> {
        let mut all_commands = Vec::new();

        while let Some(msg) = self.msg_queue.pop_front() {
            all_commands.extend(self.process_message(msg));
        }

        loop {
            let raw_msg = match self.raw_msg_queue.pop_front() {
                Some(raw_msg) => raw_msg,
                None => match self.raw_msg_rx.try_recv() {
                    Ok(raw_msg) => raw_msg,
                    Err(_) => break,
                },
            };
            self.translate(raw_msg);
            while let Some(msg) = self.msg_queue.pop_front() {
                all_commands.extend(self.process_message(msg));
            }
        }

        all_commands
    }

    pub fn run_update_cycle(&mut self) -> Result<Vec<String>, String> {
        self.process_all_messages();
        self.execute_pending_commands()
    }

    pub fn get_stats(&self) -> RuntimeStats {
        let has_api_support = self
            .cmd_executor
            .as_ref()
            .is_some_and(|executor| executor.get_stats().has_api_sender);

        RuntimeStats {
            queued_messages: self.msg_queue.len() + self.raw_msg_queue.len(),
            queued_commands: self.cmd_queue.len(),
            route: self.state.nav.route.clone(),
            pending_requests: self.state.requests.len(),
            has_executor: self.cmd_executor.is_some(),
            has_api_support,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RuntimeStats {
    pub queued_messages: usize,
    pub queued_commands: usize,
    pub route: Route,
    pub pending_requests: usize,
    pub has_executor: bool,
    pub has_api_support: bool,
}
