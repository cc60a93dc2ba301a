//! Source excerpts for parse errors

/// Characters of context kept on each side of the error column
const CONTEXT_WIDTH: usize = 30;

/// Render the offending line with a caret under `column` (both one-based).
///
/// `column` counts bytes, as serde_json reports it. Long lines are cut to a
/// window around the column so minified files stay readable. Returns `None`
/// when the line does not exist.
pub fn error_preview(content: &str, line: usize, column: usize) -> Option<String> {
    let text = content.lines().nth(line.checked_sub(1)?)?;
    let chars: Vec<char> = text.chars().collect();
    let caret = char_index(text, column.saturating_sub(1));

    let start = caret.saturating_sub(CONTEXT_WIDTH);
    let end = (caret + CONTEXT_WIDTH).min(chars.len());

    let mut excerpt = String::new();
    if start > 0 {
        excerpt.push_str("...");
    }
    excerpt.extend(&chars[start..end]);
    if end < chars.len() {
        excerpt.push_str("...");
    }

    let offset = caret - start + if start > 0 { 3 } else { 0 };
    let gutter = line.to_string();
    Some(format!(
        "{} | {}\n{} | {}^",
        gutter,
        excerpt,
        " ".repeat(gutter.len()),
        " ".repeat(offset)
    ))
}

/// Number of characters before `byte_offset`, rounded down to a char boundary
fn char_index(text: &str, byte_offset: usize) -> usize {
    let mut offset = byte_offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    text[..offset].chars().count()
}
