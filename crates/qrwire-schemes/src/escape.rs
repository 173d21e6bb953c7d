//! Reserved-character escaping for the payload micro-formats.
//!
//! Each function escapes exactly once; callers apply it at formatting
//! time and never to already-escaped text.

/// Escapes text for vCard 3.0 property values.
///
/// Escapes backslash, comma, semicolon; newlines become the literal
/// `\n` sequence. CR is dropped.
pub fn vcard_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            ',' => result.push_str("\\,"),
            ';' => result.push_str("\\;"),
            '\n' => result.push_str("\\n"),
            '\r' => {}
            _ => result.push(c),
        }
    }
    result
}

/// Escapes text for iCalendar TEXT values (RFC 5545 §3.3.11).
///
/// Same reserved set as vCard: backslash, comma, semicolon, newline.
pub fn ical_text(s: &str) -> String {
    vcard_text(s)
}

/// Escapes a field value for the WIFI config grammar.
///
/// `\`, `;`, `,`, `:` and `"` are field separators or quoting characters
/// in that format and are backslash-escaped.
pub fn wifi_value(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '\\' | ';' | ',' | ':' | '"' => {
                result.push('\\');
                result.push(c);
            }
            _ => result.push(c),
        }
    }
    result
}
