//! The lemmatizer orchestrator
//!
//! Composes the tag lexicon, the rule table and the recaser into the
//! single public operation [`Lemmatizer::lemmatize`]. Every input pair
//! yields a lemma string; the failure conditions (unknown tag, no rule
//! table for the tag, no matching rule, empty rewrite result) are soft
//! and fall back to a best-effort result, logged through the `log`
//! facade.

use crate::error::Result;
use crate::recase::recase;
use crate::rules::RuleSet;
use crate::tags::TagLexicon;
use std::path::Path;

/// A rule-based lemmatizer
///
/// Owns its immutable tables; `lemmatize` is a pure function of those
/// tables and its arguments, so a shared reference can be used from
/// multiple threads without locking.
#[derive(Debug, Clone)]
pub struct Lemmatizer {
    tags: TagLexicon,
    rules: RuleSet,
}

impl Lemmatizer {
    /// Create a lemmatizer from pre-built tables.
    pub fn new(tags: TagLexicon, rules: RuleSet) -> Self {
        Self { tags, rules }
    }

    /// Load a lemmatizer from `tags.json` and `rules.json` files.
    pub fn from_paths<P: AsRef<Path>, Q: AsRef<Path>>(tags_path: P, rules_path: Q) -> Result<Self> {
        Ok(Self::new(
            TagLexicon::from_path(tags_path)?,
            RuleSet::from_path(rules_path)?,
        ))
    }

    /// The tag lexicon backing this lemmatizer.
    pub fn tags(&self) -> &TagLexicon {
        &self.tags
    }

    /// The rule table backing this lemmatizer.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Lemmatize a word form given its part-of-speech tag.
    ///
    /// Never panics and never returns an error: malformed input
    /// degrades to returning the form itself.
    pub fn lemmatize(&self, form: &str, tag: &str) -> String {
        let Some(ntag) = self.tags.normalize(tag) else {
            // Punctuation-only tags are expected to be unknown; only
            // tags with alphabetic content are worth a warning.
            if tag.chars().any(char::is_alphabetic) {
                log::warn!("Unknown tag: ({:?}, {:?})", form, tag);
            }
            return form.to_string();
        };

        // Websites and interjections
        if self.tags.is_web_or_interjection(tag) {
            return form.to_lowercase();
        }

        // Unanalyzed words
        if self.tags.is_unanalyzed(tag) || self.tags.is_unanalyzed(ntag) {
            return form.to_string();
        }

        let proper = self.tags.is_proper(tag);

        let Some(last) = form.chars().last() else {
            return form.to_string();
        };

        // Words that end with a hyphen
        if last == '-' {
            if proper {
                return recase(form, true, form);
            }
            return form.to_lowercase();
        }

        // Words that end with a punctuation mark
        if !last.is_alphabetic() {
            return form.to_string();
        }

        let form_lower = form.to_lowercase();

        let Some(tag_rules) = self.rules.get(ntag) else {
            log::debug!("No rules for this tag: {} {} {}", form, tag, ntag);
            return recase(form, proper, form);
        };

        let Some(rule) = tag_rules.resolve(&form_lower) else {
            log::debug!("No rules for this word form: {} {} {}", form, tag, ntag);
            return recase(form, proper, form);
        };

        let lemma = match rule.apply(&form_lower) {
            Some(lemma) if lemma.is_empty() => {
                log::warn!(
                    "Rule produced an empty lemma: ({}, {}, {}) ({:?} -> {:?})",
                    form,
                    tag,
                    ntag,
                    rule.from,
                    rule.to
                );
                form_lower
            }
            Some(lemma) => lemma,
            None => {
                // The rule's strip suffix does not occur in the form;
                // only possible with a malformed table entry.
                log::warn!(
                    "Rule does not apply to form: ({}, {}, {}) ({:?} -> {:?})",
                    form,
                    tag,
                    ntag,
                    rule.from,
                    rule.to
                );
                return recase(form, proper, form);
            }
        };

        recase(form, proper, &lemma)
    }
}
