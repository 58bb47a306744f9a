//! Display-width-aware text wrapping.
//!
//! Section heights feed the active-section tracker, so wrapping must be
//! done before measurement rather than delegated to the paragraph
//! widget: the page is built from pre-wrapped rows whose count is the
//! section height.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Word-wrap `text` to `width` display columns.
///
/// Blank input lines are preserved as blank output rows. Words wider
/// than the full width are hard-split at character boundaries. A width
/// of zero is treated as one column.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut out = Vec::new();

    for raw in text.lines() {
        wrap_line(raw, width, &mut out);
    }
    if out.is_empty() {
        out.push(String::new());
    }
    out
}

fn wrap_line(raw: &str, width: usize, out: &mut Vec<String>) {
    let mut current = String::new();
    let mut current_width = 0usize;
    let mut wrote = false;

    for word in raw.split_whitespace() {
        let mut word = word;
        loop {
            let word_width = UnicodeWidthStr::width(word);
            let sep = usize::from(current_width > 0);

            if current_width + sep + word_width <= width {
                if sep == 1 {
                    current.push(' ');
                }
                current.push_str(word);
                current_width += sep + word_width;
                break;
            }

            if current_width > 0 {
                out.push(std::mem::take(&mut current));
                wrote = true;
                current_width = 0;
                continue;
            }

            // A single word wider than the line: hard-split it.
            let split = split_at_width(word, width);
            out.push(word[..split].to_string());
            wrote = true;
            word = &word[split..];
            if word.is_empty() {
                break;
            }
        }
    }

    if !current.is_empty() || !wrote {
        out.push(current);
    }
}

/// Byte index of the longest prefix of `word` that fits in `width`
/// columns. Always consumes at least one character.
fn split_at_width(word: &str, width: usize) -> usize {
    let mut used = 0usize;
    let mut consumed_any = false;

    for (byte_offset, ch) in word.char_indices() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if consumed_any && used + ch_width > width {
            return byte_offset;
        }
        used += ch_width;
        consumed_any = true;
    }
    word.len()
}
