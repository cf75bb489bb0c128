use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncates to at most `max_width` terminal columns, ending in "..." when cut.
pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let budget = max_width.saturating_sub(3);
    let mut out = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > budget {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push_str("...");
    out
}

/// Byte offset of the `char_index`-th char, or the string length past the end.
pub fn byte_offset(s: &str, char_index: usize) -> usize {
    s.char_indices()
        .nth(char_index)
        .map(|(idx, _)| idx)
        .unwrap_or(s.len())
}

/// Terminal column of a cursor sitting before the `char_index`-th char.
pub fn cursor_column(s: &str, char_index: usize) -> usize {
    s.chars()
        .take(char_index)
        .map(|ch| ch.width().unwrap_or(0))
        .sum()
}

/// Horizontal scroll for a single-line field `width` columns wide, keeping the
/// cursor at `column` on screen. Returns `(scroll_offset, cursor_column_in_field)`.
pub fn input_scroll(column: usize, width: u16) -> (u16, u16) {
    let last_visible = usize::from(width.saturating_sub(1));
    let column = column.min(usize::from(u16::MAX));
    let offset = column.saturating_sub(last_visible);
    let visible = (column - offset).min(last_visible);
    (offset as u16, visible as u16)
}
