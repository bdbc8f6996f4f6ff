use crate::core::api::{ApiCall, Endpoint, RequestId};

/// UI (TUI) specific sub-commands executed by the host/runtime
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiCommand {
    // Render is orchestrated exclusively by AppRunner, not via TuiCommand.
    Resize { width: u16, height: u16 },
}

/// Elm-like command definitions
/// Represents side effects (network communication, terminal control, logging)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Backend request; the reply comes back as `RawMsg::Api` with the same id
    Api(ApiCall),

    // UI-related commands
    Tui(TuiCommand),
    /// Request a render; coalesced by AppRunner
    RequestRender,

    // Logging related
    LogError {
        message: String,
    },
    LogInfo {
        message: String,
    },

    // Batch command (execute multiple commands together)
    Batch(Vec<Cmd>),

    // Do nothing (for testing)
    None,
}

impl Cmd {
    pub fn api(request: RequestId, endpoint: Endpoint) -> Cmd {
        Cmd::Api(ApiCall { request, endpoint })
    }

    /// Combine multiple commands into one
    pub fn batch(commands: Vec<Cmd>) -> Cmd {
        let mut commands = commands;
        match commands.len() {
            0 => Cmd::None,
            1 => commands.pop().unwrap_or(Cmd::None),
            _ => Cmd::Batch(commands),
        }
    }

    /// Whether the command requires asynchronous processing
    pub fn is_async(&self) -> bool {
        match self {
            Cmd::Api(_) => true,
            Cmd::Tui(..)
            | Cmd::RequestRender
            | Cmd::LogError { .. }
            | Cmd::LogInfo { .. }
            | Cmd::None => false,
            Cmd::Batch(cmds) => cmds.iter().any(|cmd| cmd.is_async()),
        }
    }

    /// Get command priority (smaller numbers = higher priority)
    pub fn priority(&self) -> u8 {
        match self {
            Cmd::Tui(..) | Cmd::RequestRender => 0,
            // Mutations are user actions
            Cmd::Api(call) if call.endpoint.is_mutation() => 1,
            Cmd::Api(_) => 2,
            Cmd::LogError { .. } | Cmd::LogInfo { .. } => 4,
            Cmd::Batch(cmds) => cmds.iter().map(|cmd| cmd.priority()).min().unwrap_or(255),
            Cmd::None => 255,
        }
    }

    pub fn name(&self) -> String {
        match self {
            Cmd::Api(call) => format!("Api({})", call.endpoint.name()),
            Cmd::Tui(TuiCommand::Resize { .. }) => "Tui(Resize)".to_owned(),
            Cmd::RequestRender => "RequestRender".to_owned(),
            Cmd::LogError { .. } => "LogError".to_owned(),
            Cmd::LogInfo { .. } => "LogInfo".to_owned(),
            Cmd::Batch(cmds) => format!("Batch({})", cmds.len()),
            Cmd::None => "None".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::course::NewCourse;

    fn create_course() -> Cmd {
        Cmd::api(
            7,
            Endpoint::CreateCourse(NewCourse {
                course_id: "CS209".into(),
                title: "Intro".into(),
                description: "Basics".into(),
                prerequisites: vec![],
            }),
        )
    }

    #[test]
    fn test_cmd_batch_empty() {
        assert_eq!(Cmd::batch(vec![]), Cmd::None);
    }

    #[test]
    fn test_cmd_batch_single() {
        assert_eq!(Cmd::batch(vec![Cmd::RequestRender]), Cmd::RequestRender);
    }

    #[test]
    fn test_cmd_batch_multiple() {
        let cmds = vec![Cmd::RequestRender, Cmd::api(1, Endpoint::Courses)];
        assert_eq!(Cmd::batch(cmds.clone()), Cmd::Batch(cmds));
    }

    #[test]
    fn test_cmd_is_async() {
        assert!(Cmd::api(1, Endpoint::Catalog).is_async());
        assert!(!Cmd::Tui(TuiCommand::Resize {
            width: 100,
            height: 50
        })
        .is_async());
        assert!(Cmd::Batch(vec![Cmd::None, Cmd::api(1, Endpoint::Courses)]).is_async());
    }

    #[test]
    fn test_cmd_priority() {
        assert_eq!(Cmd::RequestRender.priority(), 0);
        assert_eq!(create_course().priority(), 1);
        assert_eq!(Cmd::api(1, Endpoint::Courses).priority(), 2);
        assert_eq!(
            Cmd::LogInfo {
                message: "test".to_string()
            }
            .priority(),
            4
        );
        assert_eq!(Cmd::None.priority(), 255);
        assert_eq!(
            Cmd::Batch(vec![Cmd::api(1, Endpoint::Courses), create_course()]).priority(),
            1
        );
    }

    #[test]
    fn test_cmd_name() {
        assert_eq!(create_course().name(), "Api(CreateCourse)");
        assert_eq!(Cmd::Batch(vec![Cmd::None]).name(), "Batch(1)");
    }
}
