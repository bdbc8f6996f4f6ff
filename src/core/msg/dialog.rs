#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogMsg {
    Confirm,
    Cancel,
}
