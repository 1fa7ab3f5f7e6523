//! Cursor helpers for a list of `len` rows

pub fn select_prev(index: &mut usize) {
    *index = index.saturating_sub(1);
}

pub fn select_next(index: &mut usize, len: usize) {
    if len == 0 {
        *index = 0;
        return;
    }
    if *index + 1 < len {
        *index += 1;
    }
}

pub fn clamp_selection(index: &mut usize, len: usize) {
    if len == 0 {
        *index = 0;
        return;
    }
    if *index >= len {
        *index = len - 1;
    }
}
