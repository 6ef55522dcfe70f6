//! Escaping of free-text input before it leaves the form

/// Escape HTML-significant characters, turn every CR/LF into a space and trim.
///
/// One-way transform, applied once per field right before the payload is built.
/// `&` is passed through untouched.
pub fn sanitize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            '\r' | '\n' => out.push(' '),
            other => out.push(other),
        }
    }
    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_and_quotes() {
        assert_eq!(
            sanitize("<b>it's \"ok\"</b>"),
            "&lt;b&gt;it&#039;s &quot;ok&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(sanitize("   hello  "), "hello");
    }

    #[test]
    fn each_line_break_becomes_one_space() {
        assert_eq!(sanitize("a\r\nb\nc"), "a  b c");
    }

    #[test]
    fn leading_newlines_are_trimmed_away() {
        assert_eq!(sanitize("\n\nhi\n"), "hi");
    }

    #[test]
    fn leaves_ampersands_alone() {
        assert_eq!(sanitize("Tom & Jerry"), "Tom & Jerry");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn preserves_unicode() {
        let input = "Héllo wörld 日本語";
        assert_eq!(sanitize(input), input);
    }
}
