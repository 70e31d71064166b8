use once_cell::sync::Lazy;
use regex::Regex;

static CONTROL_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\t\x0C\r]+").unwrap());
static SPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r" {2,}").unwrap());

/// Collapses whitespace noise from extracted document text.
///
/// Non-breaking spaces become ordinary spaces, runs of tab/form-feed/CR
/// collapse to a single space, runs of 2+ spaces collapse to one, and the
/// result is trimmed. Newlines are kept so later passes still see line
/// structure. Total function: always returns a (possibly empty) string.
pub fn normalize(text: &str) -> String {
    let text = text.replace('\u{00A0}', " ");
    let text = CONTROL_RUN.replace_all(&text, " ");
    let text = SPACE_RUN.replace_all(&text, " ");
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_nbsp_and_double_spaces() {
        assert_eq!(normalize("A\u{00A0}B  C"), "A B C");
    }

    #[test]
    fn collapses_control_runs() {
        assert_eq!(normalize("a\t\tb\r\nc\x0Cd"), "a b\nc d");
    }

    #[test]
    fn trims_and_handles_empty() {
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("  hello  "), "hello");
    }

    #[test]
    fn preserves_newlines() {
        assert_eq!(normalize("line one\nline two"), "line one\nline two");
    }
}
