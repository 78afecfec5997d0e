//! Standard galactic alphabet transforms.
//!
//! Maps latin letters onto the glyphs used by Minecraft's enchanting table
//! and digits onto roman numerals. Characters outside the table pass
//! through unchanged in both directions.

/// Letter-to-glyph table, longest glyphs first so `unenchant` can
/// greedy-match multi-character entries (the roman numerals).
const TABLE: [(&str, &str); 35] = [
    ("8", "VIII"),
    ("7", "VII"),
    ("3", "III"),
    ("9", "IX"),
    ("4", "IV"),
    ("6", "VI"),
    ("2", "II"),
    ("1", "I"),
    ("5", "V"),
    ("a", "\u{1511}"),
    ("b", "\u{0296}"),
    ("c", "\u{14F5}"),
    ("d", "\u{21B8}"),
    ("e", "\u{14B7}"),
    ("f", "\u{2393}"),
    ("g", "\u{22A3}"),
    ("h", "\u{2351}"),
    ("i", "\u{254E}"),
    ("j", "\u{22EE}"),
    ("k", "\u{A58C}"),
    ("l", "\u{A58E}"),
    ("m", "\u{14B2}"),
    ("n", "\u{30EA}"),
    ("o", "\u{1D679}"),
    ("p", "\u{00A1}"),
    ("q", "\u{1451}"),
    ("r", "\u{2237}"),
    ("s", "\u{14ED}"),
    ("t", "\u{2138}"),
    ("u", "\u{228D}"),
    ("v", "\u{234A}"),
    ("w", "\u{2234}"),
    ("x", "\u{2E2C}"),
    ("y", "\u{2016}"),
    ("z", "\u{2A45}"),
];

/// Transcribe a message into the standard galactic alphabet.
pub fn enchant(message: &str) -> String {
    let mut out = String::with_capacity(message.len());
    for c in message.chars() {
        let lower = c.to_ascii_lowercase().to_string();
        match TABLE.iter().find(|(plain, _)| *plain == lower) {
            Some((_, glyph)) => out.push_str(glyph),
            None => out.push(c),
        }
    }
    out
}

/// Transcribe an enchanted message back into latin letters.
pub fn unenchant(message: &str) -> String {
    let mut out = String::with_capacity(message.len());
    let mut rest = message;
    'outer: while !rest.is_empty() {
        for (plain, glyph) in TABLE {
            if let Some(stripped) = rest.strip_prefix(glyph) {
                out.push_str(plain);
                rest = stripped;
                continue 'outer;
            }
        }
        let mut chars = rest.chars();
        if let Some(c) = chars.next() {
            out.push(c);
        }
        rest = chars.as_str();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enchant_maps_letters_and_digits() {
        assert_eq!(enchant("abc"), "\u{1511}\u{0296}\u{14F5}");
        assert_eq!(enchant("4"), "IV");
    }

    #[test]
    fn unknown_characters_pass_through() {
        assert_eq!(enchant("a b!"), "\u{1511} \u{0296}!");
        assert_eq!(unenchant("? ?"), "? ?");
    }

    #[test]
    fn unenchant_inverts_enchant() {
        for message in ["the quick brown fox", "diamond pickaxe 42", "creeper"] {
            assert_eq!(unenchant(&enchant(message)), message);
        }
    }

    #[test]
    fn roman_numerals_greedy_match() {
        // VIII must decode as 8, not 5-1-1-1.
        assert_eq!(unenchant("VIII"), "8");
        assert_eq!(unenchant("IX"), "9");
    }
}
