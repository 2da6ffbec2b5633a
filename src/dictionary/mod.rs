//! # Type Dictionaries
//!
//! Named interval patterns (chord types, scale types) indexed for constant-time
//! lookup by name, by alias and by chroma.
//!
//! ## Structure
//! ```text
//! TypeDictionary<T>
//!   ├── entries: Vec<T>                      (declaration order)
//!   ├── by_name: name -> index               (non-empty names, unique)
//!   ├── by_alias: alias -> index             (first declaration wins)
//!   └── by_chroma: chroma -> [index, ...]    (several types may share a chroma)
//! ```
//!
//! Aliases are not folded into the chroma index. Detection finds every entry
//! for a chroma, and alias resolution happens when a symbol is looked up.
//!
//! ## Construction
//! Dictionaries are built once from static data. Every interval list is parsed
//! and every name checked while building, so a bad table fails at startup and
//! never at lookup time. The built-in dictionaries are lazily initialized
//! statics and are immutable afterwards.
//!
//! ## Sub-modules
//! - `chord_type` - [`ChordType`], [`ChordQuality`], built-in chord data
//! - `scale_type` - [`ScaleType`], built-in scale data

mod chord_type;
mod scale_type;

use std::collections::HashMap;

use crate::error::TheoryError;
use crate::pcset::Chroma;

pub use chord_type::{ChordQuality, ChordType, ChordTypeDictionary, CHORD_TYPES};
pub use scale_type::{ScaleType, ScaleTypeDictionary, SCALE_TYPES};

/// One row of static type data: `(intervals, name, aliases)`.
pub type TypeRow = (&'static str, &'static str, &'static [&'static str]);

/// What a dictionary needs to know about its entries.
pub trait DictionaryEntry {
    fn name(&self) -> &str;
    fn aliases(&self) -> &[String];
    fn chroma(&self) -> Chroma;
}

#[derive(Debug)]
pub struct TypeDictionary<T> {
    kind: &'static str,
    entries: Vec<T>,
    by_name: HashMap<String, usize>,
    by_alias: HashMap<String, usize>,
    by_chroma: HashMap<Chroma, Vec<usize>>,
}

impl<T: DictionaryEntry> TypeDictionary<T> {
    /// Index `entries`. Fails on duplicate names or empty chromas.
    pub fn new(kind: &'static str, entries: Vec<T>) -> Result<Self, TheoryError> {
        let invalid = |message: String| TheoryError::InvalidTable {
            table: kind.to_string(),
            message,
        };

        let mut by_name = HashMap::new();
        let mut by_alias = HashMap::new();
        let mut by_chroma: HashMap<Chroma, Vec<usize>> = HashMap::new();

        for (idx, entry) in entries.iter().enumerate() {
            if entry.chroma().is_empty() {
                return Err(invalid(format!("'{}' has no intervals", entry.name())));
            }
            if entry.name().is_empty() && entry.aliases().is_empty() {
                return Err(invalid(format!(
                    "entry {} has neither a name nor an alias",
                    idx
                )));
            }
            if !entry.name().is_empty()
                && by_name.insert(entry.name().to_string(), idx).is_some()
            {
                return Err(invalid(format!("name '{}' is declared twice", entry.name())));
            }
            for alias in entry.aliases() {
                if let Some(first) = by_alias.get(alias) {
                    log::warn!(
                        "{} alias '{}' of entry {} already belongs to entry {}",
                        kind,
                        alias,
                        idx,
                        first
                    );
                    continue;
                }
                by_alias.insert(alias.clone(), idx);
            }
            by_chroma.entry(entry.chroma()).or_default().push(idx);
        }

        log::debug!(
            "{} dictionary built: {} entries, {} distinct chromas",
            kind,
            entries.len(),
            by_chroma.len()
        );

        Ok(Self {
            kind,
            entries,
            by_name,
            by_alias,
            by_chroma,
        })
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Look up by full name first, then by alias.
    pub fn get(&self, name_or_alias: &str) -> Option<&T> {
        self.by_name
            .get(name_or_alias)
            .or_else(|| self.by_alias.get(name_or_alias))
            .map(|&idx| &self.entries[idx])
    }

    /// Exact full-name lookup.
    pub fn get_by_name(&self, name: &str) -> Option<&T> {
        self.by_name.get(name).map(|&idx| &self.entries[idx])
    }

    /// Every entry with this chroma, in declaration order.
    pub fn with_chroma(&self, chroma: Chroma) -> impl Iterator<Item = (usize, &T)> + '_ {
        self.by_chroma
            .get(&chroma)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
            .iter()
            .map(move |&idx| (idx, &self.entries[idx]))
    }

    /// Entries whose chroma is a proper superset of `chroma`, in declaration order.
    pub fn supersets_of(&self, chroma: Chroma) -> impl Iterator<Item = &T> + '_ {
        self.entries
            .iter()
            .filter(move |e| e.chroma().is_superset_of(chroma))
    }

    /// All entries in declaration order.
    pub fn all(&self) -> &[T] {
        &self.entries
    }

    /// Non-empty full names in declaration order.
    pub fn names(&self) -> Vec<&str> {
        self.entries
            .iter()
            .map(|e| e.name())
            .filter(|n| !n.is_empty())
            .collect()
    }

    /// Every alias in declaration order.
    pub fn symbols(&self) -> Vec<&str> {
        self.entries
            .iter()
            .flat_map(|e| e.aliases().iter().map(|a| a.as_str()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Split a row into parsed intervals, chroma and owned strings.
fn parse_row(
    kind: &str,
    (intervals, name, aliases): TypeRow,
) -> Result<(Vec<String>, Chroma, String, Vec<String>), TheoryError> {
    let parsed = crate::interval::parse_intervals(intervals).map_err(|e| {
        TheoryError::InvalidTable {
            table: kind.to_string(),
            message: format!("'{}': {}", name, e),
        }
    })?;
    Ok((
        intervals.split_whitespace().map(str::to_string).collect(),
        Chroma::from_intervals(&parsed),
        name.to_string(),
        aliases.iter().map(|a| a.to_string()).collect(),
    ))
}
