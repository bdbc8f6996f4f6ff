use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::core::{
    api::ApiCall,
    cmd::{Cmd, TuiCommand},
};

/// Command executor that routes Elm commands to the API service and the host
#[derive(Clone, Default)]
pub struct CmdExecutor {
    api_sender: Option<mpsc::UnboundedSender<ApiCall>>,
    tui_sender: Option<mpsc::UnboundedSender<TuiCommand>>,
    render_req_sender: Option<mpsc::Sender<()>>,
}

impl CmdExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_with_api(api_sender: mpsc::UnboundedSender<ApiCall>) -> Self {
        Self {
            api_sender: Some(api_sender),
            ..Default::default()
        }
    }

    pub fn set_api_sender(&mut self, api_sender: mpsc::UnboundedSender<ApiCall>) {
        self.api_sender = Some(api_sender);
    }

    /// Inject TUI command sender for executing TuiCommand asynchronously.
    pub fn set_tui_sender(&mut self, sender: mpsc::UnboundedSender<TuiCommand>) {
        self.tui_sender = Some(sender);
    }

    /// Inject render request sender for AppRunner-orchestrated rendering.
    pub fn set_render_request_sender(&mut self, sender: mpsc::Sender<()>) {
        self.render_req_sender = Some(sender);
    }

    pub fn execute_command(&self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::None => {}

            Cmd::Api(call) => {
                if let Some(api_sender) = &self.api_sender {
                    log::debug!("CmdExecutor: request {} {}", call.request, call.endpoint.name());
                    api_sender.send(call.clone())?;
                } else {
                    log::warn!(
                        "{} ignored: API service not available",
                        call.endpoint.name()
                    );
                }
            }

            Cmd::RequestRender => {
                if let Some(tx) = &self.render_req_sender {
                    // A full channel already holds a pending render
                    let _ = tx.try_send(());
                }
            }

            Cmd::Tui(TuiCommand::Resize { width, height }) => {
                if let Some(tx) = &self.tui_sender {
                    let _ = tx.send(TuiCommand::Resize {
                        width: *width,
                        height: *height,
                    });
                } else {
                    log::warn!(
                        "CmdExecutor: TUI sender not configured; dropping Resize command {width}x{height}"
                    );
                }
            }

            Cmd::LogError { message } => {
                log::error!("{message}");
            }

            Cmd::LogInfo { message } => {
                log::info!("{message}");
            }

            Cmd::Batch(commands) => {
                for cmd in commands {
                    self.execute_command(cmd)?;
                }
            }
        }

        Ok(())
    }

    /// Execute multiple commands
    pub fn execute_commands(&self, commands: &[Cmd]) -> Result<Vec<String>> {
        let mut execution_log = Vec::new();

        for cmd in commands {
            match self.execute_command(cmd) {
                Ok(()) => {
                    execution_log.push(format!("✓ Executed: {}", cmd.name()));
                }
                Err(e) => {
                    let error_msg = format!("✗ Failed to execute {}: {}", cmd.name(), e);
                    log::error!("{error_msg}");
                    execution_log.push(error_msg);
                }
            }
        }

        Ok(execution_log)
    }

    pub fn get_stats(&self) -> CmdExecutorStats {
        CmdExecutorStats {
            has_api_sender: self.api_sender.is_some(),
            is_api_sender_closed: self.api_sender.as_ref().map(|sender| sender.is_closed()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CmdExecutorStats {
    pub has_api_sender: bool,
    pub is_api_sender_closed: Option<bool>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::api::Endpoint;

    #[test]
    fn test_api_call_is_forwarded() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let executor = CmdExecutor::new_with_api(tx);
        executor
            .execute_command(&Cmd::api(3, Endpoint::Courses))
            .expect("send succeeds");
        assert_eq!(
            rx.try_recv().ok(),
            Some(ApiCall {
                request: 3,
                endpoint: Endpoint::Courses
            })
        );
    }

    #[test]
    fn test_api_call_without_service_is_dropped() {
        let executor = CmdExecutor::new();
        assert!(executor
            .execute_command(&Cmd::api(1, Endpoint::Catalog))
            .is_ok());
        assert!(!executor.get_stats().has_api_sender);
    }

    #[test]
    fn test_closed_api_channel_is_reported() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        let executor = CmdExecutor::new_with_api(tx);
        let log = executor
            .execute_commands(&[Cmd::api(1, Endpoint::Catalog)])
            .expect("log is returned");
        assert!(log[0].starts_with("✗ Failed to execute Api(Catalog)"));
        assert_eq!(executor.get_stats().is_api_sender_closed, Some(true));
    }

    #[test]
    fn test_execute_resize() {
        let mut executor = CmdExecutor::new();
        let (tui_tx, mut tui_rx) = mpsc::unbounded_channel::<TuiCommand>();
        executor.set_tui_sender(tui_tx);

        executor
            .execute_command(&Cmd::Tui(TuiCommand::Resize {
                width: 80,
                height: 24,
            }))
            .expect("resize succeeds");

        assert_eq!(
            tui_rx.try_recv().ok(),
            Some(TuiCommand::Resize {
                width: 80,
                height: 24
            })
        );
    }

    #[test]
    fn test_render_requests_coalesce() {
        let mut executor = CmdExecutor::new();
        let (tx, mut rx) = mpsc::channel::<()>(1);
        executor.set_render_request_sender(tx);

        let batch = Cmd::Batch(vec![Cmd::RequestRender, Cmd::RequestRender]);
        executor.execute_command(&batch).expect("render succeeds");

        assert!(rx.try_recv().is_ok());
        assert!(rx.try_recv().is_err());
    }
}
