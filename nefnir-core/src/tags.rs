//! Tag map and tag classification
//!
//! Fine-grained part-of-speech tags are normalized to the coarser tags
//! that index the rule table. The lexicon also classifies tags into the
//! two special categories the lemmatizer branches on: proper-noun tags
//! and unanalyzed tags. Both classifications follow the tagset's
//! character conventions and are cached as sets at construction time.

use crate::error::Result;
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Raw tags for web addresses and interjections, lemmatized by
/// lowercasing alone.
const WEB_OR_INTERJECTION: [&str; 2] = ["v", "au"];

/// Tags outside the `nx` prefix convention whose forms still pass
/// through unanalyzed (foreign words, ungrammatical forms,
/// abbreviations).
const UNANALYZED_LITERALS: [&str; 3] = ["x", "e", "as"];

/// A tag starting with `n` (noun) whose final character is a
/// masculine/feminine/strong-declension marker denotes a proper noun.
fn marks_proper_noun(tag: &str) -> bool {
    tag.starts_with('n') && matches!(tag.chars().last(), Some('m' | 'ö' | 's'))
}

/// Tags with the `nx` prefix mark unanalyzable nominals.
fn marks_unanalyzed(tag: &str) -> bool {
    tag.starts_with("nx")
}

/// The tag map plus the derived classification sets
///
/// Immutable after construction; every query is a read-only lookup.
#[derive(Debug, Clone)]
pub struct TagLexicon {
    map: HashMap<String, String>,
    proper: HashSet<String>,
    unanalyzed: HashSet<String>,
}

impl TagLexicon {
    /// Build a lexicon from a fine-tag to normalized-tag map,
    /// deriving the classification sets from its keys.
    pub fn new(map: HashMap<String, String>) -> Self {
        let proper = map
            .keys()
            .filter(|t| marks_proper_noun(t))
            .cloned()
            .collect();

        let unanalyzed = map
            .keys()
            .filter(|t| marks_unanalyzed(t))
            .cloned()
            .chain(UNANALYZED_LITERALS.iter().map(|t| t.to_string()))
            .collect();

        Self {
            map,
            proper,
            unanalyzed,
        }
    }

    /// Parse a lexicon from tag map JSON (an object of
    /// fine tag → normalized tag strings).
    pub fn from_json_str(json: &str) -> Result<Self> {
        let map: HashMap<String, String> = serde_json::from_str(json)?;
        Ok(Self::new(map))
    }

    /// Read a lexicon from a JSON reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let map: HashMap<String, String> = serde_json::from_reader(reader)?;
        Ok(Self::new(map))
    }

    /// Load a lexicon from a `tags.json` file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Map a fine tag to its normalized tag, or `None` for tags the
    /// map does not know.
    pub fn normalize(&self, tag: &str) -> Option<&str> {
        self.map.get(tag).map(String::as_str)
    }

    /// Whether `tag` denotes a proper noun.
    pub fn is_proper(&self, tag: &str) -> bool {
        self.proper.contains(tag)
    }

    /// Whether `tag` belongs to the unanalyzed class. Callers check
    /// both the raw and the normalized tag against this set.
    pub fn is_unanalyzed(&self, tag: &str) -> bool {
        self.unanalyzed.contains(tag)
    }

    /// Whether the raw `tag` is one of the web-address/interjection
    /// literals, which lemmatize by lowercasing.
    pub fn is_web_or_interjection(&self, tag: &str) -> bool {
        WEB_OR_INTERJECTION.contains(&tag)
    }

    /// Number of fine tags in the map.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
