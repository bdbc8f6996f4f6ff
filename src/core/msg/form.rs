//! Messages for the create forms

use crossterm::event::KeyEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CourseFormMsg {
    NextField,
    PrevField,
    /// Key for the focused text field
    Edit(KeyEvent),
    OptionNext,
    OptionPrev,
    ToggleOption,
    Submit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstanceFormMsg {
    NextField,
    PrevField,
    Edit(KeyEvent),
    ChoiceNext,
    ChoicePrev,
    Submit,
}
