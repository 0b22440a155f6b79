use crate::{
    error::Error,
    utf16::{code_units, push_hex, surrogate_pair_to_scalar},
};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::{fmt, ops::Range, str::FromStr};

/// One of the emoji categories recognized by the replacer.
///
/// Variants are declared in the order the replacer applies them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// A pair of regional indicators, U+1F1E8..=U+1F1FA followed by U+1F1E7..=U+1F1FA.
    Flag,
    /// A character in U+0023..=U+0039 followed by COMBINING ENCLOSING KEYCAP (U+20E3).
    Keycap,
    /// Any single character in U+2139..=U+3299.
    Standard,
    /// DOUBLE EXCLAMATION MARK (U+203C) or EXCLAMATION QUESTION MARK (U+2049).
    Punctuation,
    /// Any character outside the BMP, i.e. one encoded as a surrogate pair.
    Surrogate,
}

static FLAG_RE: Lazy<Regex> = Lazy::new(|| compile(r"[\x{1F1E8}-\x{1F1FA}][\x{1F1E7}-\x{1F1FA}]"));
static KEYCAP_RE: Lazy<Regex> = Lazy::new(|| compile(r"[\x{23}-\x{39}]\x{20E3}"));
static STANDARD_RE: Lazy<Regex> = Lazy::new(|| compile(r"[\x{2139}-\x{3299}]"));
static PUNCTUATION_RE: Lazy<Regex> = Lazy::new(|| compile(r"[\x{203C}\x{2049}]"));
static SURROGATE_RE: Lazy<Regex> = Lazy::new(|| compile(r"[\x{10000}-\x{10FFFF}]"));

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("emoji rule patterns are valid")
}

impl RuleKind {
    /// Every rule, in application order.
    pub const ALL: [RuleKind; 5] = [
        RuleKind::Flag,
        RuleKind::Keycap,
        RuleKind::Standard,
        RuleKind::Punctuation,
        RuleKind::Surrogate,
    ];

    /// Name used by `Display`, `FromStr` and serde.
    pub const fn as_str(self) -> &'static str {
        match self {
            RuleKind::Flag => "flag",
            RuleKind::Keycap => "keycap",
            RuleKind::Standard => "standard",
            RuleKind::Punctuation => "punctuation",
            RuleKind::Surrogate => "surrogate",
        }
    }

    fn regex(self) -> &'static Regex {
        match self {
            RuleKind::Flag => &*FLAG_RE,
            RuleKind::Keycap => &*KEYCAP_RE,
            RuleKind::Standard => &*STANDARD_RE,
            RuleKind::Punctuation => &*PUNCTUATION_RE,
            RuleKind::Surrogate => &*SURROGATE_RE,
        }
    }

    /// Returns true if this rule matches anywhere in `text`.
    pub fn is_match(self, text: &str) -> bool {
        self.regex().is_match(text)
    }

    /// Finds the leftmost match of this rule in `text`.
    pub fn find(self, text: &str) -> Option<EmojiMatch<'_>> {
        self.regex().find(text).map(|m| EmojiMatch::new(self, text, m.range()))
    }

    /// Iterates over all non-overlapping matches of this rule in `text`.
    pub fn find_iter(self, text: &str) -> impl Iterator<Item = EmojiMatch<'_>> + '_ {
        self.regex()
            .find_iter(text)
            .map(move |m| EmojiMatch::new(self, text, m.range()))
    }

    /// Computes the glyph identifier for text matched by this rule.
    ///
    /// The identifier is built from the UTF-16 code units of the match:
    /// flags decode both surrogate pairs and join the two scalars, keycaps
    /// join the raw hex of both units, single-unit symbols use that unit,
    /// and surrogate pairs are decoded into one scalar.
    fn hex_id(self, matched: &str) -> String {
        let units = code_units(matched);
        let mut hex = String::with_capacity(12);
        match (self, &units[..]) {
            (RuleKind::Flag, &[h1, l1, h2, l2]) => {
                push_hex(&mut hex, surrogate_pair_to_scalar(h1, l1));
                push_hex(&mut hex, surrogate_pair_to_scalar(h2, l2));
            }
            (RuleKind::Keycap, &[base, keycap]) => {
                push_hex(&mut hex, u32::from(base));
                push_hex(&mut hex, u32::from(keycap));
            }
            (RuleKind::Standard | RuleKind::Punctuation, &[unit]) => {
                push_hex(&mut hex, u32::from(unit));
            }
            (RuleKind::Surrogate, &[high, low]) => {
                push_hex(&mut hex, surrogate_pair_to_scalar(high, low));
            }
            _ => unreachable!("{} rule matched {:?}", self, matched),
        }
        hex
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleKind::ALL
            .into_iter()
            .find(|kind| s.trim().eq_ignore_ascii_case(kind.as_str()))
            .ok_or_else(|| Error::UnknownRule(s.to_owned()))
    }
}

/// A single rule match and the glyph identifier computed for it.
#[derive(Clone, PartialEq, Eq)]
pub struct EmojiMatch<'t> {
    kind: RuleKind,
    text: &'t str,
    range: Range<usize>,
    hex: String,
}

impl<'t> EmojiMatch<'t> {
    fn new(kind: RuleKind, text: &'t str, range: Range<usize>) -> Self {
        let hex = kind.hex_id(&text[range.clone()]);
        EmojiMatch { kind, text, range, hex }
    }

    /// The rule that produced this match.
    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    /// Byte offset where the match starts.
    pub fn start(&self) -> usize {
        self.range.start
    }

    /// Byte offset just past the end of the match.
    pub fn end(&self) -> usize {
        self.range.end
    }

    /// Byte range of the match within the searched text.
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    /// The matched text.
    pub fn as_str(&self) -> &'t str {
        &self.text[self.range.clone()]
    }

    /// Lowercase hex glyph identifier, e.g. `1f1fa1f1f8` for a US flag.
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// The glyph markup replacing this match.
    pub fn to_html(&self) -> String {
        crate::markup::code_point_to_html(&self.hex)
    }
}

impl fmt::Debug for EmojiMatch<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmojiMatch")
            .field("kind", &self.kind)
            .field("range", &self.range)
            .field("text", &self.as_str())
            .field("hex", &self.hex)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::RuleKind;

    fn hex_of(kind: RuleKind, text: &str) -> Option<String> {
        kind.find(text).map(|m| m.hex().to_owned())
    }

    #[test]
    fn test_flag_hex() {
        // regional indicators U and S
        assert_eq!(
            Some("1f1fa1f1f8".to_owned()),
            hex_of(RuleKind::Flag, "\u{1F1FA}\u{1F1F8}")
        );
        // first indicator below U+1F1E8 is not a flag
        assert_eq!(None, hex_of(RuleKind::Flag, "\u{1F1E6}\u{1F1E8}"));
        // second indicator range starts one lower
        assert_eq!(
            Some("1f1e81f1e7".to_owned()),
            hex_of(RuleKind::Flag, "\u{1F1E8}\u{1F1E7}")
        );
    }

    #[test]
    fn test_keycap_hex() {
        assert_eq!(Some("3320e3".to_owned()), hex_of(RuleKind::Keycap, "3\u{20E3}"));
        assert_eq!(Some("2320e3".to_owned()), hex_of(RuleKind::Keycap, "#\u{20E3}"));
        assert_eq!(Some("2a20e3".to_owned()), hex_of(RuleKind::Keycap, "*\u{20E3}"));
        assert_eq!(None, hex_of(RuleKind::Keycap, "!\u{20E3}"));
        assert_eq!(None, hex_of(RuleKind::Keycap, "3"));
    }

    #[test]
    fn test_single_unit_hex() {
        assert_eq!(Some("2139".to_owned()), hex_of(RuleKind::Standard, "\u{2139}"));
        assert_eq!(Some("3299".to_owned()), hex_of(RuleKind::Standard, "a\u{3299}b"));
        assert_eq!(None, hex_of(RuleKind::Standard, "\u{2138}\u{329A}"));
        assert_eq!(Some("203c".to_owned()), hex_of(RuleKind::Punctuation, "\u{203C}"));
        assert_eq!(Some("2049".to_owned()), hex_of(RuleKind::Punctuation, "\u{2049}"));
    }

    #[test]
    fn test_surrogate_hex() {
        assert_eq!(Some("1f600".to_owned()), hex_of(RuleKind::Surrogate, "\u{1F600}"));
        assert_eq!(Some("10000".to_owned()), hex_of(RuleKind::Surrogate, "\u{10000}"));
        assert_eq!(None, hex_of(RuleKind::Surrogate, "\u{FFFF}"));
    }

    #[test]
    fn test_match_offsets() {
        let text = "hi \u{1F600}!";
        let m = RuleKind::Surrogate.find(text).unwrap();
        assert_eq!(3..7, m.range());
        assert_eq!("\u{1F600}", m.as_str());
        assert_eq!(RuleKind::Surrogate, m.kind());
        assert_eq!(2, RuleKind::Surrogate.find_iter("\u{1F600}\u{1F601}").count());
    }

    #[test]
    fn test_parse_and_display() {
        for kind in RuleKind::ALL {
            assert_eq!(Ok(kind), kind.to_string().parse());
        }
        assert_eq!(Ok(RuleKind::Keycap), " Keycap ".parse());
        assert!("flags".parse::<RuleKind>().is_err());
    }
}
