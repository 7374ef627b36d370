//! Rule-based lemmatization for Icelandic
//!
//! Maps an inflected word form plus its part-of-speech tag to its
//! dictionary base form. Fine tags are normalized through a tag map,
//! the normalized tag selects suffix-rewrite rules (whole-form
//! overrides first, then longest matching suffix), and the original
//! capitalization pattern is restored afterwards, including
//! per-segment handling of hyphenated compounds.
//!
//! ```
//! use nefnir_core::{Lemmatizer, RuleSet, TagLexicon};
//!
//! let tags = TagLexicon::from_json_str(r#"{"nken-s": "nke-s"}"#).unwrap();
//! let rules = RuleSet::from_json_str(r#"{"nke-s": {"suffix": {"s": ["s", ""]}}}"#).unwrap();
//!
//! let lemmatizer = Lemmatizer::new(tags, rules);
//! assert_eq!(lemmatizer.lemmatize("Halldórs", "nken-s"), "Halldór");
//! ```
//!
//! All tables are immutable after construction and `lemmatize` never
//! fails; see [`Lemmatizer::lemmatize`] for the fallback behavior.

#![warn(missing_docs)]

pub mod error;
pub mod lemmatizer;
pub mod recase;
pub mod rules;
pub mod tags;

pub use error::LexiconError;
pub use lemmatizer::Lemmatizer;
pub use rules::{Rewrite, RuleSet, TagRules};
pub use tags::TagLexicon;
