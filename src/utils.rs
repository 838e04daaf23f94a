//! Small text helpers for card rendering.

/// Wrap text into at most `max_lines` lines of at most `width` characters,
/// breaking on whitespace. The final line gets an ellipsis when text had to
/// be dropped.
pub fn wrap_text_lines(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    if width == 0 || max_lines == 0 {
        return vec![];
    }

    let text = text.trim();
    if text.is_empty() {
        return vec![];
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut truncated = false;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        let current_len = current.chars().count();

        if current.is_empty() {
            if word_len > width {
                truncated = true;
            }
            current = truncate_chars(word, width);
        } else if current_len + 1 + word_len <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            if lines.len() + 1 == max_lines {
                // The line in progress is the last one allowed.
                truncated = true;
                break;
            }
            lines.push(std::mem::take(&mut current));
            if word_len > width {
                truncated = true;
            }
            current = truncate_chars(word, width);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    if truncated && let Some(last) = lines.last_mut() {
        let shortened = truncate_chars(last, width.saturating_sub(1));
        *last = format!("{shortened}\u{2026}");
    }

    lines
}

fn truncate_chars(s: &str, width: usize) -> String {
    s.chars().take(width).collect()
}

/// Up-to-two-letter initials from a display name, for avatar badges.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}
