//! Rendering of caller-controlled strings for log output.
//!
//! Header values and request fields are attacker controlled. Wrapping them in
//! [`UntrustedText`] before handing them to `tracing` escapes control and
//! line-separator characters, so a value can never start a new log line or
//! smuggle terminal escape sequences.

use std::fmt::{self, Write};

/// Display adapter that escapes control characters in untrusted text.
///
/// # Examples
/// ```
/// use login_backend::inbound::http::log_safe::UntrustedText;
///
/// let rendered = UntrustedText::new("curl/8.0\r\nforged=1").to_string();
/// assert_eq!(rendered, "curl/8.0\\r\\nforged=1");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct UntrustedText<'a>(&'a str);

impl<'a> UntrustedText<'a> {
    /// Wrap a borrowed string.
    pub fn new(value: &'a str) -> Self {
        Self(value)
    }
}

fn needs_escape(c: char) -> bool {
    c.is_control() || matches!(c, '\u{2028}' | '\u{2029}')
}

impl fmt::Display for UntrustedText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            if needs_escape(c) {
                write!(f, "{}", c.escape_default())?;
            } else {
                f.write_char(c)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Mozilla/5.0 (X11; Linux x86_64)", "Mozilla/5.0 (X11; Linux x86_64)")]
    #[case("agent\nINFO fake entry", "agent\\nINFO fake entry")]
    #[case("a\rb", "a\\rb")]
    #[case("tab\there", "tab\\there")]
    #[case("\u{1b}[31mred", "\\u{1b}[31mred")]
    #[case("line\u{2028}sep", "line\\u{2028}sep")]
    #[case("caf\u{e9}", "caf\u{e9}")]
    #[case("", "")]
    fn escapes_only_unsafe_characters(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(UntrustedText::new(raw).to_string(), expected);
    }
}
