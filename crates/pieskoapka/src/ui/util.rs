use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: char = '…';

/// Shortens `text` to at most `max_width` display columns, ending it with an
/// ellipsis when anything was cut.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut truncated = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let char_width = ch.width().unwrap_or(0);
        if width + char_width > budget {
            break;
        }
        truncated.push(ch);
        width += char_width;
    }
    truncated.push(ELLIPSIS);

    truncated
}

/// Joins `(key, description)` pairs into a `key: description | …` hint line.
pub fn keybinding_hint(keybindings: &[(&str, &str)]) -> String {
    keybindings
        .iter()
        .map(|(key, description)| format!("{key}: {description}"))
        .collect::<Vec<_>>()
        .join(" | ")
}
