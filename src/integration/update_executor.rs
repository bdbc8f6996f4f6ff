use crate::{core::raw_msg::RawMsg, integration::runtime::Runtime};

/// One pass of the update loop as seen from the runner
pub struct UpdateExecutor;

impl UpdateExecutor {
    /// Applies a coalesced resize, then runs update and executes the
    /// resulting commands. Failures surface in the status bar next loop.
    pub fn process_update_cycle(runtime: &mut Runtime, pending_resize: &mut Option<(u16, u16)>) {
        if let Some((width, height)) = pending_resize.take() {
            runtime.send_raw_msg(RawMsg::Resize(width, height));
        }
        if let Err(e) = runtime.run_update_cycle() {
            log::error!("Update cycle failed: {e}");
            runtime.send_raw_msg(RawMsg::Error(e));
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use tokio::sync::mpsc;

    use super::*;
    use crate::{
        core::{cmd::TuiCommand, state::AppState},
        infrastructure::config::Config,
    };

    fn state() -> AppState {
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date");
        AppState::new(Config::defaults().expect("embedded config"), today)
    }

    #[test]
    fn test_pending_resize_reaches_tui() {
        let mut runtime = Runtime::new_with_executor(state());
        let (tui_tx, mut tui_rx) = mpsc::unbounded_channel();
        runtime.add_tui_sender(tui_tx).expect("executor present");

        let mut pending = Some((100, 30));
        UpdateExecutor::process_update_cycle(&mut runtime, &mut pending);

        assert_eq!(pending, None);
        assert_eq!(
            tui_rx.try_recv().ok(),
            Some(TuiCommand::Resize {
                width: 100,
                height: 30
            })
        );
    }

    #[test]
    fn test_failure_becomes_error_message() {
        let mut runtime = Runtime::new(state());
        UpdateExecutor::process_update_cycle(&mut runtime, &mut None);
        assert_eq!(runtime.get_stats().queued_messages, 1);
    }
}
