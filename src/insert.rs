use crate::error::{Result, SlashError};

/// Replacement line and cursor column for the host to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertionSpec {
    pub new_line_text: String,
    pub new_cursor_offset: usize,
}

/// Splices `insert_text` over the last `trigger` before `cursor_column`.
///
/// Columns count chars, not bytes. A column past the end of the line is
/// clamped to the line length. Everything between the trigger and the
/// cursor is replaced; text after the cursor is kept. `insert_text` is
/// opaque, so a multi-line snippet just advances the cursor by its length.
pub fn resolve(
    original_line: &str,
    cursor_column: usize,
    insert_text: &str,
    trigger: char,
) -> Result<InsertionSpec> {
    let split = byte_offset(original_line, cursor_column);
    let (before, after) = original_line.split_at(split);

    let trigger_byte = before
        .rfind(trigger)
        .ok_or(SlashError::TriggerNotFound { trigger })?;
    let trigger_col = before[..trigger_byte].chars().count();

    let mut new_line_text =
        String::with_capacity(trigger_byte + insert_text.len() + after.len());
    new_line_text.push_str(&before[..trigger_byte]);
    new_line_text.push_str(insert_text);
    new_line_text.push_str(after);

    Ok(InsertionSpec {
        new_line_text,
        new_cursor_offset: trigger_col + insert_text.chars().count(),
    })
}

fn byte_offset(s: &str, col: usize) -> usize {
    s.char_indices().nth(col).map(|(i, _)| i).unwrap_or(s.len())
}
