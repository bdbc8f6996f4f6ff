use chrono::NaiveDate;

use crate::core::{
    cmd::{Cmd, TuiCommand},
    msg::system::SystemMsg,
};

/// System-related state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SystemState {
    pub should_quit: bool,
    pub should_suspend: bool,
    pub status_message: Option<String>,
    /// Local date used for term status
    pub today: NaiveDate,
}

impl SystemState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            ..Default::default()
        }
    }

    /// System-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: SystemMsg) -> Vec<Cmd> {
        match msg {
            SystemMsg::Quit => {
                self.should_quit = true;
                vec![]
            }

            SystemMsg::Suspend => {
                self.should_suspend = true;
                vec![]
            }

            SystemMsg::Resume => {
                self.should_suspend = false;
                vec![Cmd::RequestRender]
            }

            SystemMsg::Resize(width, height) => {
                vec![Cmd::Tui(TuiCommand::Resize { width, height })]
            }

            SystemMsg::SetToday(today) => {
                self.today = today;
                vec![Cmd::RequestRender]
            }

            SystemMsg::UpdateStatusMessage(message) => {
                self.status_message = Some(message);
                vec![]
            }

            SystemMsg::ClearStatusMessage => {
                self.status_message = None;
                vec![]
            }

            SystemMsg::ShowError(error) => {
                let message = format!("Error: {error}");
                self.status_message = Some(message.clone());
                vec![Cmd::LogError { message }]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_system_state_quit_isolated() {
        let mut system = SystemState::default();
        assert!(!system.should_quit);

        let cmds = system.update(SystemMsg::Quit);

        assert!(system.should_quit);
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_system_state_suspend_resume() {
        let mut system = SystemState::default();
        system.update(SystemMsg::Suspend);
        assert!(system.should_suspend);
        let cmds = system.update(SystemMsg::Resume);
        assert!(!system.should_suspend);
        assert_eq!(cmds, vec![Cmd::RequestRender]);
    }

    #[test]
    fn test_system_state_resize() {
        let mut system = SystemState::default();
        let cmds = system.update(SystemMsg::Resize(100, 40));
        assert_eq!(
            cmds,
            vec![Cmd::Tui(TuiCommand::Resize {
                width: 100,
                height: 40
            })]
        );
    }

    #[test]
    fn test_system_state_set_today() {
        let mut system = SystemState::default();
        let day = NaiveDate::from_ymd_opt(2025, 7, 1).expect("valid date");
        system.update(SystemMsg::SetToday(day));
        assert_eq!(system.today, day);
    }

    #[test]
    fn test_system_state_status_messages() {
        let mut system = SystemState::default();
        system.update(SystemMsg::UpdateStatusMessage("Test".to_string()));
        assert_eq!(system.status_message, Some("Test".to_string()));

        let cmds = system.update(SystemMsg::ShowError("boom".to_string()));
        assert_eq!(system.status_message, Some("Error: boom".to_string()));
        assert_eq!(cmds.len(), 1);

        system.update(SystemMsg::ClearStatusMessage);
        assert!(system.status_message.is_none());
    }
}
