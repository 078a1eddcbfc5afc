//! Logging utilities for sanitizing raw player input so logs stay
//! single-line. Escapes control characters that otherwise break log
//! readability.

/// Escape a string for single-line logging:
/// - `\n` => `\\n`
/// - `\r` => `\\r`
/// - `\t` => `\\t`
/// - backslash => `\\\\`
///   Truncates very long input (over `MAX_PREVIEW` chars) with an ellipsis
///   to cap log noise.
pub fn escape_log(s: &str) -> String {
    const MAX_PREVIEW: usize = 200;
    let mut out = String::with_capacity(s.len().min(MAX_PREVIEW) + 8);
    for (count, ch) in s.chars().enumerate() {
        if count >= MAX_PREVIEW {
            out.push('…');
            break;
        }
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                // Represent other control chars as hex \xNN
                use std::fmt::Write;
                let _ = write!(&mut out, "\\x{:02X}", c as u32);
            }
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::escape_log;

    #[test]
    fn escapes_line_breaks_and_tabs() {
        assert_eq!(escape_log("take\ntorch\r\tnow"), "take\\ntorch\\r\\tnow");
    }

    #[test]
    fn escapes_other_control_chars_as_hex() {
        assert_eq!(escape_log("go\u{7}north"), "go\\x07north");
    }

    #[test]
    fn truncates_very_long_input() {
        let long = "x".repeat(500);
        let escaped = escape_log(&long);
        assert!(escaped.chars().count() <= 201);
        assert!(escaped.ends_with('…'));
    }
}
