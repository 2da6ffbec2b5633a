//! # Voicing Module
//!
//! Named tables mapping chord symbols to voicings (interval stacks, lowest note
//! first), and alias-tolerant lookup into them.
//!
//! ## Lookup
//! 1. The symbol is looked up as a key of the dictionary.
//! 2. Otherwise the symbol is resolved to a chord type through the chord
//!    dictionary (`maj7`, `Δ` and `^7` are all the major seventh), and the first
//!    key, in the dictionary's own order, that names the same chord type wins.
//! 3. Otherwise there is no voicing.
//!
//! A dictionary keyed only by canonical symbols therefore answers for every
//! alias of those symbols.
//!
//! ## Built-in Dictionaries
//! - `triads` - root position and inversions of M, m, o, aug
//! - `lefthand` - rootless jazz voicings (the default)
//! - `all` - both of the above
//!
//! ## Example
//! ```rust
//! use harmonia::voicing::{lookup, VoicingDictionary, VoicingSet};
//!
//! assert_eq!(lookup("m7", None), Some(&["3m 5P 7m 9M".to_string(), "7m 9M 10m 12P".to_string()][..]));
//! assert_eq!(lookup("-7", None), lookup("m7", None));
//!
//! let triads = VoicingDictionary::builtin(VoicingSet::Triads);
//! assert_eq!(lookup("dim", Some(triads)), triads.get("o"));
//! assert_eq!(lookup("xyz", None), None);
//! ```

mod data;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;

use crate::dictionary::ChordTypeDictionary;
use crate::error::TheoryError;
use crate::interval;

pub use data::{VoicingRow, LEFTHAND, TRIADS};

/// Ordered chord symbol -> voicings table.
#[derive(Debug, Clone)]
pub struct VoicingDictionary {
    name: String,
    entries: Vec<(String, Vec<String>)>,
    index: HashMap<String, usize>,
}

impl VoicingDictionary {
    /// Build a dictionary from rows, keeping their order. Duplicate symbols and
    /// voicings that are not interval lists are rejected.
    pub fn from_rows(name: &str, rows: &[VoicingRow]) -> Result<Self, TheoryError> {
        let invalid = |message: String| TheoryError::InvalidTable {
            table: format!("{} voicing", name),
            message,
        };

        let mut entries = Vec::with_capacity(rows.len());
        let mut index = HashMap::new();

        for (symbol, voicings) in rows {
            if index.insert(symbol.to_string(), entries.len()).is_some() {
                return Err(invalid(format!("symbol '{}' is declared twice", symbol)));
            }
            for voicing in voicings.iter() {
                interval::parse_intervals(voicing)
                    .map_err(|e| invalid(format!("'{}': {}", symbol, e)))?;
            }
            entries.push((
                symbol.to_string(),
                voicings.iter().map(|v| v.to_string()).collect(),
            ));
        }

        log::debug!("{} voicing dictionary built: {} symbols", name, entries.len());

        Ok(Self {
            name: name.to_string(),
            entries,
            index,
        })
    }

    /// One of the process-wide built-in dictionaries.
    pub fn builtin(set: VoicingSet) -> &'static VoicingDictionary {
        match set {
            VoicingSet::Triads => &BUILTIN_TRIADS,
            VoicingSet::Lefthand => &BUILTIN_LEFTHAND,
            VoicingSet::All => &BUILTIN_ALL,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Voicings stored under exactly `symbol`.
    pub fn get(&self, symbol: &str) -> Option<&[String]> {
        self.index
            .get(symbol)
            .map(|&idx| self.entries[idx].1.as_slice())
    }

    /// Symbols in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(symbol, _)| symbol.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

static BUILTIN_TRIADS: Lazy<VoicingDictionary> = Lazy::new(|| {
    VoicingDictionary::from_rows("triads", TRIADS).expect("built-in triads table is consistent")
});

static BUILTIN_LEFTHAND: Lazy<VoicingDictionary> = Lazy::new(|| {
    VoicingDictionary::from_rows("lefthand", LEFTHAND)
        .expect("built-in lefthand table is consistent")
});

static BUILTIN_ALL: Lazy<VoicingDictionary> = Lazy::new(|| {
    let rows: Vec<VoicingRow> = TRIADS.iter().chain(LEFTHAND.iter()).copied().collect();
    VoicingDictionary::from_rows("all", &rows).expect("built-in voicing tables do not overlap")
});

/// The built-in voicing dictionaries, by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VoicingSet {
    Triads,
    #[default]
    Lefthand,
    All,
}

impl VoicingSet {
    pub const ALL: [VoicingSet; 3] = [VoicingSet::Triads, VoicingSet::Lefthand, VoicingSet::All];

    pub fn name(self) -> &'static str {
        match self {
            VoicingSet::Triads => "triads",
            VoicingSet::Lefthand => "lefthand",
            VoicingSet::All => "all",
        }
    }
}

impl FromStr for VoicingSet {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VoicingSet::ALL
            .into_iter()
            .find(|set| set.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TheoryError::UnknownVoicingDictionary(s.to_string()))
    }
}

impl fmt::Display for VoicingSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Look `symbol` up in `dictionary`, falling back to any key that `chords`
/// knows as the same chord type.
pub fn lookup_with_aliases<'d>(
    symbol: &str,
    dictionary: &'d VoicingDictionary,
    chords: &ChordTypeDictionary,
) -> Option<&'d [String]> {
    if let Some(voicings) = dictionary.get(symbol) {
        return Some(voicings);
    }

    let chord_type = chords.get(symbol)?;
    let key = dictionary.keys().find(|key| chord_type.is_known_as(key))?;
    log::debug!(
        "voicing '{}' resolved to '{}' in {}",
        symbol,
        key,
        dictionary.name()
    );
    dictionary.get(key)
}

/// Voicings for `symbol` (or one of its aliases). Without a dictionary the
/// default `lefthand` set is used.
pub fn lookup<'d>(symbol: &str, dictionary: Option<&'d VoicingDictionary>) -> Option<&'d [String]> {
    let dictionary = dictionary.unwrap_or_else(|| VoicingDictionary::builtin(VoicingSet::default()));
    lookup_with_aliases(symbol, dictionary, ChordTypeDictionary::builtin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::TypeRow;

    #[test]
    fn test_builtin_sizes() {
        assert_eq!(VoicingDictionary::builtin(VoicingSet::Triads).len(), 4);
        assert_eq!(VoicingDictionary::builtin(VoicingSet::Lefthand).len(), 12);
        assert_eq!(VoicingDictionary::builtin(VoicingSet::All).len(), 16);
    }

    #[test]
    fn test_keys_keep_declaration_order() {
        let keys: Vec<&str> = VoicingDictionary::builtin(VoicingSet::All).keys().collect();
        assert_eq!(&keys[..5], &["M", "m", "o", "aug", "m7"]);
        assert_eq!(keys.last(), Some(&"m6"));
    }

    #[test]
    fn test_direct_lookup() {
        let voicings = lookup("^7", None).unwrap();
        assert_eq!(voicings, &["3M 5P 7M 9M", "7M 9M 10M 12P"]);
    }

    #[test]
    fn test_alias_lookup() {
        assert_eq!(lookup("maj7", None), lookup("^7", None));
        assert_eq!(lookup("Δ", None), lookup("^7", None));
        assert_eq!(lookup("-7", None), lookup("m7", None));
        assert_eq!(lookup("dom", None), lookup("7", None));
        assert_eq!(lookup("ø", None), lookup("m7b5", None));
        assert_eq!(lookup("dim7", None), lookup("o7", None));

        let triads = VoicingDictionary::builtin(VoicingSet::Triads);
        assert_eq!(lookup("dim", Some(triads)), triads.get("o"));
        assert_eq!(lookup("+", Some(triads)), triads.get("aug"));
        assert_eq!(lookup("maj", Some(triads)), triads.get("M"));
    }

    #[test]
    fn test_missing_symbol() {
        assert_eq!(lookup("xyz", None), None);
        // known chord type, but not in the default dictionary
        assert_eq!(lookup("M", None), None);
        assert_eq!(lookup("", None), None);
    }

    #[test]
    fn test_custom_chord_dictionary() {
        let rows: &[VoicingRow] = &[("maj", &["1P 3M 5P"])];
        let voicings = VoicingDictionary::from_rows("custom", rows).unwrap();
        let chord_rows: &[TypeRow] = &[("1P 3M 5P", "major", &["M", "maj"])];
        let chords = ChordTypeDictionary::from_rows(chord_rows).unwrap();

        assert_eq!(
            lookup_with_aliases("M", &voicings, &chords),
            Some(&["1P 3M 5P".to_string()][..])
        );
        assert_eq!(lookup_with_aliases("major", &voicings, &chords), voicings.get("maj"));
        assert_eq!(lookup_with_aliases("m", &voicings, &chords), None);
    }

    #[test]
    fn test_invalid_tables() {
        let duplicate: &[VoicingRow] = &[("M", &["1P 3M 5P"]), ("M", &["3M 5P 8P"])];
        assert!(matches!(
            VoicingDictionary::from_rows("dup", duplicate),
            Err(TheoryError::InvalidTable { .. })
        ));

        let bad_interval: &[VoicingRow] = &[("M", &["1P 3Q 5P"])];
        assert!(VoicingDictionary::from_rows("bad", bad_interval).is_err());
    }

    #[test]
    fn test_voicing_set_names() {
        assert_eq!("triads".parse::<VoicingSet>().unwrap(), VoicingSet::Triads);
        assert_eq!("LeftHand".parse::<VoicingSet>().unwrap(), VoicingSet::Lefthand);
        assert_eq!(VoicingSet::All.to_string(), "all");
        assert_eq!(VoicingSet::default(), VoicingSet::Lefthand);
        assert_eq!(
            "jazz".parse::<VoicingSet>(),
            Err(TheoryError::UnknownVoicingDictionary("jazz".to_string()))
        );
    }
}
