use chrono::NaiveDate;

/// Messages specific to SystemState
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SystemMsg {
    // System control
    Quit,
    Suspend,
    Resume,
    Resize(u16, u16),
    SetToday(NaiveDate),

    // Status management
    UpdateStatusMessage(String),
    ClearStatusMessage,
    ShowError(String),
}
