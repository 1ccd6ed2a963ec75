//! Text shaping for notification payloads

/// Maximum title length
pub const TITLE_MAX_LEN: usize = 100;

/// Maximum subtitle length
pub const SUBTITLE_MAX_LEN: usize = 150;

/// Maximum message length
pub const MESSAGE_MAX_LEN: usize = 200;

const ELLIPSIS: &str = "...";

/// Control characters notification daemons choke on.
/// Tab, newline and carriage return are kept.
fn is_stripped_control(ch: char) -> bool {
    matches!(ch, '\u{00}'..='\u{08}' | '\u{0B}' | '\u{0C}' | '\u{0E}'..='\u{1F}' | '\u{7F}')
}

/// Remove control characters and bound the length (in characters).
///
/// Truncated text ends with `...` and is exactly `max_len` characters long.
pub fn sanitize(text: &str, max_len: usize) -> String {
    let cleaned: Vec<char> = text.chars().filter(|ch| !is_stripped_control(*ch)).collect();

    if cleaned.len() <= max_len {
        return cleaned.into_iter().collect();
    }

    if max_len < ELLIPSIS.len() {
        return cleaned.into_iter().take(max_len).collect();
    }

    let mut truncated: String = cleaned.into_iter().take(max_len - ELLIPSIS.len()).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}

/// Escape the five XML special characters
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Escape text for a single-quoted PowerShell string literal
pub fn escape_powershell(text: &str) -> String {
    text.replace('\'', "''")
}
