//! Shared text utilities for code generation.

/// Check whether `text` is a plain numeric literal (e.g. `3`, `-2`, `1.5`).
///
/// Surrounding whitespace is allowed; exponents, hex and `+` signs are not.
pub fn is_number(text: &str) -> bool {
    let s = text.trim();
    let s = s.strip_prefix('-').unwrap_or(s);
    let (int, frac) = match s.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (s, None),
    };
    let digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    digits(int) && frac.is_none_or(digits)
}

/// Parse a numeric literal accepted by [`is_number`].
pub fn parse_number(text: &str) -> Option<f64> {
    if is_number(text) {
        text.trim().parse().ok()
    } else {
        None
    }
}

/// Format a number the way it should appear in generated code.
///
/// Integral values print without a fractional part (`4`, not `4.0`).
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        // Normalise negative zero.
        let int = value as i64;
        int.to_string()
    } else {
        value.to_string()
    }
}

/// Word-wrap `text` so that no line exceeds `width` characters.
///
/// Explicit newlines are kept as paragraph breaks. A single word longer
/// than `width` is placed on its own line unbroken.
pub fn wrap(text: &str, width: usize) -> String {
    let width = width.max(1);
    let mut out = Vec::new();
    for paragraph in text.split('\n') {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            if line.is_empty() {
                line.push_str(word);
            } else if line.chars().count() + 1 + word.chars().count() <= width {
                line.push(' ');
                line.push_str(word);
            } else {
                out.push(std::mem::take(&mut line));
                line.push_str(word);
            }
        }
        out.push(line);
    }
    out.join("\n")
}

/// Prepend `prefix` to every line of `text`.
///
/// A trailing newline does not start a new (prefixed) line.
pub fn prefix_lines(text: &str, prefix: &str) -> String {
    let body = text.strip_suffix('\n');
    let (content, trailing) = match body {
        Some(content) => (content, "\n"),
        None => (text, ""),
    };
    let mut out = String::with_capacity(text.len() + prefix.len());
    for (i, line) in content.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(prefix);
        out.push_str(line);
    }
    out.push_str(trailing);
    out
}

/// Turn an arbitrary display name into a legal identifier.
///
/// Spaces and non-word characters become `_`, a leading digit gets a
/// `my_` prefix and an empty name becomes `unnamed`.
pub fn safe_identifier(name: &str) -> String {
    if name.is_empty() {
        return "unnamed".to_string();
    }
    let sanitized: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if sanitized.starts_with(|c: char| c.is_ascii_digit()) {
        format!("my_{}", sanitized)
    } else {
        sanitized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_number() {
        assert!(is_number("0"));
        assert!(is_number("42"));
        assert!(is_number("-3"));
        assert!(is_number("1.5"));
        assert!(is_number(" 7 "));
        assert!(!is_number(""));
        assert!(!is_number("-"));
        assert!(!is_number("1."));
        assert!(!is_number(".5"));
        assert!(!is_number("$x"));
        assert!(!is_number("1e3"));
        assert!(!is_number("x + 1"));
    }

    #[test]
    fn test_parse_and_format_number() {
        assert_eq!(parse_number("5"), Some(5.0));
        assert_eq!(parse_number("$i"), None);
        assert_eq!(format_number(4.0), "4");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(-6.0), "-6");
        assert_eq!(format_number(1.5), "1.5");
    }

    #[test]
    fn test_wrap_short_text_is_untouched() {
        assert_eq!(wrap("hello world", 20), "hello world");
    }

    #[test]
    fn test_wrap_breaks_on_words() {
        assert_eq!(
            wrap("the quick brown fox jumps", 10),
            "the quick\nbrown fox\njumps"
        );
    }

    #[test]
    fn test_wrap_keeps_paragraphs_and_long_words() {
        assert_eq!(wrap("a\nb", 10), "a\nb");
        assert_eq!(wrap("supercalifragilistic ok", 5), "supercalifragilistic\nok");
    }

    #[test]
    fn test_prefix_lines() {
        assert_eq!(prefix_lines("a\nb", "// "), "// a\n// b");
        assert_eq!(prefix_lines("a\nb\n", "// "), "// a\n// b\n");
        assert_eq!(prefix_lines("x = 1;\n", "  "), "  x = 1;\n");
    }

    #[test]
    fn test_safe_identifier() {
        assert_eq!(safe_identifier("count"), "count");
        assert_eq!(safe_identifier("my var"), "my_var");
        assert_eq!(safe_identifier("a-b"), "a_b");
        assert_eq!(safe_identifier("2nd"), "my_2nd");
        assert_eq!(safe_identifier(""), "unnamed");
    }
}
