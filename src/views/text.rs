use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Byte offset of the longest prefix of `s` that fits in `max_width` columns.
pub fn truncate_to_width(s: &str, max_width: usize) -> usize {
    if max_width == 0 || s.is_empty() {
        return 0;
    }

    let mut used = 0usize;
    let mut end = 0usize;
    for (idx, ch) in s.char_indices() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > max_width {
            break;
        }
        used += w;
        end = idx + ch.len_utf8();
    }

    end
}

/// Fits `title` into `max_width` columns, ending in `…` when cut.
pub fn ellipsize(title: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }

    if UnicodeWidthStr::width(title) <= max_width {
        return title.to_string();
    }

    if max_width == 1 {
        return "…".to_string();
    }

    let keep = truncate_to_width(title, max_width - 1);
    if keep == 0 {
        return "…".to_string();
    }

    let mut out = String::with_capacity(keep + 3);
    out.push_str(&title[..keep]);
    out.push('…');
    out
}

/// Pads `s` with spaces on the right until it spans `width` columns.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let used = UnicodeWidthStr::width(s);
    let mut out = String::with_capacity(s.len() + width.saturating_sub(used));
    out.push_str(s);
    out.extend(std::iter::repeat(' ').take(width.saturating_sub(used)));
    out
}

#[cfg(test)]
#[path = "../../tests/unit/views/text.rs"]
mod tests;
