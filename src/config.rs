use crate::{replacer::ReplaceMode, rule_ty::RuleKind};
use serde::{Deserialize, Serialize};

/// Settings for building an [`EmojiReplacer`](crate::EmojiReplacer).
///
/// Missing fields fall back to the defaults: `first` mode with every rule.
///
/// ```
/// let config: emoji_markup::ReplacerConfig =
///     serde_json::from_str(r#"{ "mode": "all", "rules": ["flag", "surrogate"] }"#).unwrap();
/// let replacer = emoji_markup::EmojiReplacer::from_config(&config);
/// assert_eq!(2, replacer.rules().len());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplacerConfig {
    /// How many matches each rule replaces.
    pub mode: ReplaceMode,
    /// Rules to enable. Order does not affect application order.
    pub rules: Vec<RuleKind>,
}

impl Default for ReplacerConfig {
    fn default() -> Self {
        ReplacerConfig {
            mode: ReplaceMode::default(),
            rules: RuleKind::ALL.to_vec(),
        }
    }
}
