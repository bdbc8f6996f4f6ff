//! Cursor movement over lists that may shrink under the cursor

pub fn next(selected: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (selected + 1).min(len - 1)
    }
}

pub fn prev(selected: usize) -> usize {
    selected.saturating_sub(1)
}

pub fn clamp(selected: usize, len: usize) -> usize {
    selected.min(len.saturating_sub(1))
}
