//! Suffix-rewrite rule table and resolution
//!
//! The table is keyed by normalized tag. Each tag holds two rule maps:
//! whole-form overrides keyed by the full lowercase form, and suffix
//! rules keyed by a form suffix. Resolution tries the whole-form map
//! first, then walks the form's suffixes from longest to shortest
//! (ending with the empty suffix, which matches every form) and takes
//! the first suffix with a registered rule.

use crate::error::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// A single rewrite: strip `from` off the end of a lowercase form,
/// then append `to`.
///
/// Deserializes from the two-element array shape of `rules.json`;
/// arrays of any other length are rejected at load time.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "(String, String)")]
pub struct Rewrite {
    /// Suffix removed from the form, possibly empty.
    pub from: String,
    /// Replacement appended in its place, possibly empty.
    pub to: String,
}

impl From<(String, String)> for Rewrite {
    fn from((from, to): (String, String)) -> Self {
        Self { from, to }
    }
}

impl Rewrite {
    /// Create a rewrite pair.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Apply the rewrite to a lowercase form. Returns `None` when
    /// `from` is not actually a suffix of the form, which only happens
    /// for malformed rules.
    pub fn apply(&self, form: &str) -> Option<String> {
        let stem = form.strip_suffix(&self.from)?;
        let mut lemma = String::with_capacity(stem.len() + self.to.len());
        lemma.push_str(stem);
        lemma.push_str(&self.to);
        Some(lemma)
    }
}

/// The rules registered for one normalized tag
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TagRules {
    /// Whole-form overrides, keyed by the full lowercase form.
    #[serde(default)]
    pub form: HashMap<String, Rewrite>,
    /// Suffix rules, keyed by the suffix they match.
    #[serde(default)]
    pub suffix: HashMap<String, Rewrite>,
}

impl TagRules {
    /// Find the rewrite for a lowercase form: whole-form override
    /// first, then the longest registered suffix.
    ///
    /// Suffix candidates are enumerated on char boundaries, so
    /// multi-byte letters never split a suffix key.
    pub fn resolve(&self, form_lower: &str) -> Option<&Rewrite> {
        if let Some(rule) = self.form.get(form_lower) {
            return Some(rule);
        }

        for (pos, _) in form_lower.char_indices() {
            if let Some(rule) = self.suffix.get(&form_lower[pos..]) {
                return Some(rule);
            }
        }

        // The empty suffix matches everything.
        self.suffix.get("")
    }
}

/// The full rule table, keyed by normalized tag
///
/// Immutable after construction.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    by_tag: HashMap<String, TagRules>,
}

impl RuleSet {
    /// Build a rule set from an in-memory table.
    pub fn new(by_tag: HashMap<String, TagRules>) -> Self {
        Self { by_tag }
    }

    /// Parse a rule set from `rules.json`-shaped JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let by_tag: HashMap<String, TagRules> = serde_json::from_str(json)?;
        Ok(Self::new(by_tag))
    }

    /// Read a rule set from a JSON reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let by_tag: HashMap<String, TagRules> = serde_json::from_reader(reader)?;
        Ok(Self::new(by_tag))
    }

    /// Load a rule set from a `rules.json` file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// The rules for a normalized tag, if any are registered.
    pub fn get(&self, normalized_tag: &str) -> Option<&TagRules> {
        self.by_tag.get(normalized_tag)
    }

    /// Number of normalized tags with rules.
    pub fn len(&self) -> usize {
        self.by_tag.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.by_tag.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag_rules(suffixes: &[(&str, &str, &str)], forms: &[(&str, &str, &str)]) -> TagRules {
        TagRules {
            form: forms
                .iter()
                .map(|(k, f, t)| (k.to_string(), Rewrite::new(*f, *t)))
                .collect(),
            suffix: suffixes
                .iter()
                .map(|(k, f, t)| (k.to_string(), Rewrite::new(*f, *t)))
                .collect(),
        }
    }

    #[test]
    fn apply_strips_suffix_and_appends() {
        let rule = Rewrite::new("inum", "ur");
        assert_eq!(rule.apply("hestinum").as_deref(), Some("hestur"));
    }

    #[test]
    fn apply_with_empty_from_appends_only() {
        let rule = Rewrite::new("", "inn");
        assert_eq!(rule.apply("dagur").as_deref(), Some("dagurinn"));
    }

    #[test]
    fn apply_rejects_non_suffix() {
        let rule = Rewrite::new("xyz", "");
        assert_eq!(rule.apply("hestur"), None);
    }

    #[test]
    fn whole_form_override_beats_suffix_rule() {
        let rules = tag_rules(&[("ur", "ur", "")], &[("hestur", "estur", "ross")]);
        let rule = rules.resolve("hestur").unwrap();
        assert_eq!(rule, &Rewrite::new("estur", "ross"));
    }

    #[test]
    fn longest_suffix_wins() {
        let rules = tag_rules(&[("s", "s", "X"), ("órs", "s", "")], &[]);
        // "órs" is longer than "s" and must be preferred.
        let rule = rules.resolve("halldórs").unwrap();
        assert_eq!(rule, &Rewrite::new("s", ""));
    }

    #[test]
    fn empty_suffix_matches_everything() {
        let rules = tag_rules(&[("", "", "")], &[]);
        assert!(rules.resolve("hvaðsemer").is_some());
    }

    #[test]
    fn no_registered_suffix_resolves_to_none() {
        let rules = tag_rules(&[("inum", "inum", "ur")], &[]);
        assert_eq!(rules.resolve("bók"), None);
    }

    #[test]
    fn suffix_enumeration_respects_char_boundaries() {
        // Keys around multi-byte Icelandic letters must still match.
        let rules = tag_rules(&[("ðinum", "ðinum", "ður")], &[]);
        let rule = rules.resolve("þræðinum").unwrap();
        assert_eq!(rule.apply("þræðinum").as_deref(), Some("þræður"));
    }

    #[test]
    fn from_json_str_parses_table() {
        let json = r#"{
            "nke": {
                "form": {"maður": ["anns", "aður"]},
                "suffix": {"s": ["s", ""]}
            }
        }"#;
        let rules = RuleSet::from_json_str(json).unwrap();
        let tag_rules = rules.get("nke").unwrap();
        assert_eq!(tag_rules.suffix.get("s"), Some(&Rewrite::new("s", "")));
    }

    #[test]
    fn from_json_str_rejects_bad_pair_shape() {
        let three = r#"{"nke": {"form": {}, "suffix": {"s": ["s", "", "extra"]}}}"#;
        assert!(RuleSet::from_json_str(three).is_err());

        let one = r#"{"nke": {"form": {}, "suffix": {"s": ["s"]}}}"#;
        assert!(RuleSet::from_json_str(one).is_err());
    }

    #[test]
    fn missing_rule_categories_default_to_empty() {
        let rules = RuleSet::from_json_str(r#"{"nke": {"suffix": {"s": ["s", ""]}}}"#).unwrap();
        assert!(rules.get("nke").unwrap().form.is_empty());
    }
}
