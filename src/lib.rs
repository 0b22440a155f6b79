#![deny(missing_docs, missing_debug_implementations)]
//! Emoji to HTML glyph markup.
//!
//! [`replace`] scans text for emoji and swaps each one for a snippet like
//!
//! ```html
//! <span class="emojic"><span class="emoji emoji1f600"></span><span class="emojit">&#x1f600;</span></span>
//! ```
//!
//! The `emoji{hex}` class lets a stylesheet draw the glyph from a sprite sheet
//! or icon font; the `emojit` span holds the character itself as a fallback.
//!
//! # Rules
//!
//! Five rules run in a fixed order, see [`RuleKind`]:
//!
//! * flags, two regional indicators;
//! * keycaps, `#`..`9` followed by U+20E3;
//! * the symbol range U+2139..U+3299;
//! * the punctuation emoji U+203C and U+2049;
//! * anything else outside the BMP.
//!
//! Identifiers are computed from UTF-16 code units. A keycap therefore becomes
//! `3320e3`, its two units joined, and a flag becomes the two decoded
//! regional indicators joined, e.g. `1f1fa1f1f8`.
//!
//! # Replace mode
//!
//! By default each rule replaces only its first match in the text, so a
//! string with two smileys gets one of them converted. Use
//! [`ReplaceMode::All`] to convert every occurrence.

pub(crate) mod utf16;

pub(crate) mod markup;

pub(crate) mod rule_ty;

pub(crate) mod replacer;

pub(crate) mod config;

pub(crate) mod error;

pub use utf16::surrogate_pair_to_scalar;

pub use markup::code_point_to_html;

pub use rule_ty::{EmojiMatch, RuleKind};

pub use replacer::{replace, EmojiReplacer, ReplaceMode};

pub use config::ReplacerConfig;

pub use error::{Error, Result};
