use crate::{
    config::ReplacerConfig,
    error::Error,
    markup::push_html,
    rule_ty::{EmojiMatch, RuleKind},
};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::{fmt, str::FromStr};

/// How many matches each rule replaces per call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplaceMode {
    /// Each rule replaces only its leftmost match; later occurrences stay as raw characters.
    #[default]
    First,
    /// Each rule replaces every non-overlapping match.
    All,
}

impl ReplaceMode {
    /// Name used by `Display`, `FromStr` and serde.
    pub const fn as_str(self) -> &'static str {
        match self {
            ReplaceMode::First => "first",
            ReplaceMode::All => "all",
        }
    }
}

impl fmt::Display for ReplaceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReplaceMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [ReplaceMode::First, ReplaceMode::All]
            .into_iter()
            .find(|mode| s.trim().eq_ignore_ascii_case(mode.as_str()))
            .ok_or_else(|| Error::UnknownMode(s.to_owned()))
    }
}

type RuleVec = SmallVec<[RuleKind; 5]>;

/// Replaces emoji in text with glyph markup.
///
/// Rules run once each, in [`RuleKind::ALL`] order, every rule seeing the
/// output of the one before it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiReplacer {
    mode: ReplaceMode,
    rules: RuleVec,
}

impl Default for EmojiReplacer {
    fn default() -> Self {
        EmojiReplacer {
            mode: ReplaceMode::First,
            rules: RuleKind::ALL.into_iter().collect(),
        }
    }
}

static DEFAULT_REPLACER: Lazy<EmojiReplacer> = Lazy::new(EmojiReplacer::default);

/// Replaces emoji in `source` using the default replacer.
///
/// ```
/// let html = emoji_markup::replace("1\u{20E3} go");
/// assert!(html.starts_with(r#"<span class="emojic"><span class="emoji emoji3120e3">"#));
/// assert!(html.ends_with(" go"));
/// ```
pub fn replace(source: &str) -> String {
    DEFAULT_REPLACER.replace(source)
}

impl EmojiReplacer {
    /// A replacer applying every rule in [`ReplaceMode::First`] mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the replace mode.
    pub fn with_mode(mut self, mode: ReplaceMode) -> Self {
        self.mode = mode;
        self
    }

    /// Builds a replacer from configuration.
    ///
    /// Listed rules always run in their canonical order; duplicates are ignored.
    pub fn from_config(config: &ReplacerConfig) -> Self {
        let rules: RuleVec = RuleKind::ALL
            .into_iter()
            .filter(|kind| config.rules.contains(kind))
            .collect();

        tracing::debug!(mode = %config.mode, rules = ?rules, "configured emoji replacer");

        EmojiReplacer {
            mode: config.mode,
            rules,
        }
    }

    /// The replace mode in use.
    pub fn mode(&self) -> ReplaceMode {
        self.mode
    }

    /// Enabled rules, in application order.
    pub fn rules(&self) -> &[RuleKind] {
        &self.rules
    }

    /// Runs every enabled rule over `source` and returns the result.
    pub fn replace(&self, source: &str) -> String {
        let mut text = source.to_owned();
        for &kind in self.rules.iter() {
            if kind.is_match(&text) {
                text = self.apply(kind, &text);
            }
        }
        text
    }

    fn apply(&self, kind: RuleKind, text: &str) -> String {
        let mut out = String::with_capacity(text.len() + 96);
        let mut last = 0;
        match self.mode {
            ReplaceMode::First => {
                if let Some(m) = kind.find(text) {
                    last = splice(&mut out, text, last, &m);
                }
            }
            ReplaceMode::All => {
                for m in kind.find_iter(text) {
                    last = splice(&mut out, text, last, &m);
                }
            }
        }
        out.push_str(&text[last..]);
        out
    }
}

/// Copies the text between `last` and the match, then the match's markup.
fn splice(out: &mut String, text: &str, last: usize, m: &EmojiMatch<'_>) -> usize {
    tracing::trace!(rule = %m.kind(), hex = m.hex(), at = m.start(), "replacing emoji");

    out.push_str(&text[last..m.start()]);
    push_html(out, m.hex());
    m.end()
}
