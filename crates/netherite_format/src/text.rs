//! Discord markdown and humanization helpers.

/// Prefix `text` with a no-entry sign.
pub fn error(text: &str) -> String {
    format!("\u{1F6AB} {text}")
}

/// Prefix `text` with a warning sign.
pub fn warning(text: &str) -> String {
    format!("\u{26A0} {text}")
}

/// Prefix `text` with an information source.
pub fn info(text: &str) -> String {
    format!("\u{2139} {text}")
}

/// Prefix `text` with a question mark ornament.
pub fn question(text: &str) -> String {
    format!("\u{2753} {text}")
}

/// Get the given text in bold.
pub fn bold(text: &str) -> String {
    format!("**{}**", escape(text, false, true))
}

/// Get the given text in italics.
pub fn italics(text: &str) -> String {
    format!("*{}*", escape(text, false, true))
}

/// Get the given text with an underline.
pub fn underline(text: &str) -> String {
    format!("__{}__", escape(text, false, true))
}

/// Get the given text with a strikethrough.
pub fn strikethrough(text: &str) -> String {
    format!("~~{}~~", escape(text, false, true))
}

/// Get the given text in a code block.
pub fn box_text(text: &str, lang: &str) -> String {
    format!("```{lang}\n{text}\n```")
}

/// Get the given text as inline code.
pub fn inline(text: &str) -> String {
    if text.contains('`') {
        format!("``{text}``")
    } else {
        format!("`{text}`")
    }
}

/// Get text with mass mentions and/or markdown escaped.
///
/// Mass-mention escaping inserts a zero-width space after the `@`; markdown
/// escaping backslashes the formatting metacharacters.
pub fn escape(text: &str, mass_mentions: bool, formatting: bool) -> String {
    let mut out = text.to_string();
    if mass_mentions {
        out = out.replace("@everyone", "@\u{200b}everyone");
        out = out.replace("@here", "@\u{200b}here");
    }
    if formatting {
        let mut escaped = String::with_capacity(out.len());
        for c in out.chars() {
            if matches!(c, '*' | '_' | '`' | '~' | '|' | '\\') {
                escaped.push('\\');
            }
            escaped.push(c);
        }
        out = escaped;
    }
    out
}

/// Get a comma-separated list with the last element joined with *and*.
///
/// Uses an Oxford comma; without one, items containing the word *and* make
/// the output difficult to interpret. Empty input yields an empty string.
pub fn humanize_list(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [head @ .., last] => format!("{}, and {}", head.join(", "), last),
    }
}

const PERIODS: [(&str, &str, u64); 6] = [
    ("year", "years", 60 * 60 * 24 * 365),
    ("month", "months", 60 * 60 * 24 * 30),
    ("day", "days", 60 * 60 * 24),
    ("hour", "hours", 60 * 60),
    ("minute", "minutes", 60),
    ("second", "seconds", 1),
];

/// Get a human duration representation from whole seconds.
///
/// Fractional values are omitted; durations under one second yield an empty
/// string.
pub fn humanize_timedelta(total_seconds: u64) -> String {
    let mut seconds = total_seconds;
    let mut strings = Vec::new();
    for (name, plural, period_seconds) in PERIODS {
        if seconds >= period_seconds {
            let value = seconds / period_seconds;
            seconds %= period_seconds;
            if value == 0 {
                continue;
            }
            let unit = if value > 1 { plural } else { name };
            strings.push(format!("{value} {unit}"));
        }
    }
    strings.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_handles_backticks() {
        assert_eq!(inline("plain"), "`plain`");
        assert_eq!(inline("has ` tick"), "``has ` tick``");
    }

    #[test]
    fn escape_neutralizes_mass_mentions() {
        let out = escape("hi @everyone and @here", true, false);
        assert!(!out.contains("@everyone"));
        assert!(!out.contains("@here"));
    }

    #[test]
    fn escape_backslashes_markdown() {
        assert_eq!(escape("a*b", false, true), "a\\*b");
        assert_eq!(escape("x_y", false, true), "x\\_y");
    }

    #[test]
    fn humanize_list_uses_oxford_comma() {
        let items: Vec<String> = ["red", "green", "blue"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(humanize_list(&items), "red, green, and blue");
        assert_eq!(humanize_list(&items[..1]), "red");
        assert_eq!(humanize_list(&[]), "");
    }

    #[test]
    fn humanize_timedelta_reads_naturally() {
        assert_eq!(humanize_timedelta(0), "");
        assert_eq!(humanize_timedelta(1), "1 second");
        assert_eq!(humanize_timedelta(61), "1 minute, 1 second");
        assert_eq!(
            humanize_timedelta(60 * 60 * 24 * 3 + 60 * 60 * 4),
            "3 days, 4 hours"
        );
        assert_eq!(humanize_timedelta(60 * 60 * 24 * 365 * 2), "2 years");
    }
}
