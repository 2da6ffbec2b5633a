//! Scale types.

use once_cell::sync::Lazy;
use serde::Serialize;

use super::{parse_row, DictionaryEntry, TypeDictionary, TypeRow};
use crate::error::TheoryError;
use crate::pcset::Chroma;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleType {
    pub name: String,
    pub aliases: Vec<String>,
    pub intervals: Vec<String>,
    pub chroma: Chroma,
}

impl DictionaryEntry for ScaleType {
    fn name(&self) -> &str {
        &self.name
    }

    fn aliases(&self) -> &[String] {
        &self.aliases
    }

    fn chroma(&self) -> Chroma {
        self.chroma
    }
}

pub type ScaleTypeDictionary = TypeDictionary<ScaleType>;

static BUILTIN: Lazy<ScaleTypeDictionary> = Lazy::new(|| {
    ScaleTypeDictionary::from_rows(SCALE_TYPES).expect("built-in scale table is consistent")
});

impl TypeDictionary<ScaleType> {
    pub fn from_rows(rows: &[TypeRow]) -> Result<Self, TheoryError> {
        let entries = rows
            .iter()
            .map(|row| {
                let (intervals, chroma, name, aliases) = parse_row("scale", *row)?;
                if name.is_empty() {
                    return Err(TheoryError::InvalidTable {
                        table: "scale".to_string(),
                        message: format!("scale with intervals '{}' has no name", row.0),
                    });
                }
                Ok(ScaleType {
                    name,
                    aliases,
                    intervals,
                    chroma,
                })
            })
            .collect::<Result<Vec<_>, TheoryError>>()?;
        TypeDictionary::new("scale", entries)
    }

    /// The process-wide built-in scale dictionary.
    pub fn builtin() -> &'static ScaleTypeDictionary {
        &BUILTIN
    }
}

pub const SCALE_TYPES: &[TypeRow] = &[
    // Basic
    ("1P 2M 3M 5P 6M", "major pentatonic", &["pentatonic"]),
    ("1P 2M 3M 4P 5P 6M 7M", "major", &["ionian"]),
    ("1P 2M 3m 4P 5P 6m 7m", "minor", &["aeolian"]),
    // Jazz
    ("1P 2M 3m 3M 5P 6M", "major blues", &[]),
    ("1P 3m 4P 5d 5P 7m", "minor blues", &["blues"]),
    ("1P 2M 3m 4P 5P 6M 7M", "melodic minor", &[]),
    ("1P 2M 3m 4P 5P 6m 7M", "harmonic minor", &[]),
    ("1P 2M 3M 4P 5P 6M 7m 7M", "bebop", &[]),
    ("1P 2M 3m 4P 5d 6m 6M 7M", "diminished", &["whole-half diminished"]),
    // Modes
    ("1P 2M 3m 4P 5P 6M 7m", "dorian", &[]),
    ("1P 2M 3M 4A 5P 6M 7M", "lydian", &[]),
    ("1P 2M 3M 4P 5P 6M 7m", "mixolydian", &["dominant"]),
    ("1P 2m 3m 4P 5P 6m 7m", "phrygian", &[]),
    ("1P 2m 3m 4P 5d 6m 7m", "locrian", &[]),
    // 5 notes
    ("1P 3M 4P 5P 7M", "ionian pentatonic", &[]),
    ("1P 3M 4P 5P 7m", "mixolydian pentatonic", &["indian"]),
    ("1P 2M 4P 5P 6M", "ritusen", &[]),
    ("1P 2M 4P 5P 7m", "egyptian", &[]),
    ("1P 3M 4P 5d 7m", "neopolitan major pentatonic", &[]),
    ("1P 3m 4P 5P 6m", "vietnamese 1", &[]),
    ("1P 2m 3m 5P 6m", "pelog", &[]),
    ("1P 2m 4P 5P 6m", "kumoijoshi", &[]),
    ("1P 2M 3m 5P 6m", "hirajoshi", &[]),
    ("1P 2m 4P 5d 7m", "iwato", &[]),
    ("1P 2m 4P 5P 7m", "in-sen", &[]),
    ("1P 3M 4A 5P 7M", "lydian pentatonic", &["chinese"]),
    ("1P 3m 4P 6m 7m", "malkos raga", &[]),
    ("1P 3m 4P 5d 7m", "locrian pentatonic", &["minor seven flat five pentatonic"]),
    ("1P 3m 4P 5P 7m", "minor pentatonic", &["vietnamese 2"]),
    ("1P 3m 4P 5P 6M", "minor six pentatonic", &[]),
    ("1P 2M 3m 5P 6M", "flat three pentatonic", &["kumoi"]),
    ("1P 2M 3M 5P 6m", "flat six pentatonic", &[]),
    ("1P 2m 3M 5P 6M", "scriabin", &[]),
    ("1P 3M 5d 6m 7m", "whole tone pentatonic", &[]),
    ("1P 3M 4A 5A 7M", "lydian #5P pentatonic", &[]),
    ("1P 3M 4A 5P 7m", "lydian dominant pentatonic", &[]),
    ("1P 3m 4P 5P 7M", "minor #7M pentatonic", &[]),
    ("1P 3m 4d 5d 7m", "super locrian pentatonic", &[]),
    // 6 notes
    ("1P 2M 3m 4P 5P 7M", "minor hexatonic", &[]),
    ("1P 2A 3M 5P 5A 7M", "augmented", &[]),
    ("1P 2M 4P 5P 6M 7m", "piongio", &[]),
    ("1P 2m 3M 4A 6M 7m", "prometheus neopolitan", &[]),
    ("1P 2M 3M 4A 6M 7m", "prometheus", &[]),
    ("1P 2m 3M 5d 6m 7m", "mystery #1", &[]),
    ("1P 2m 3M 4P 5A 6M", "six tone symmetric", &[]),
    ("1P 2M 3M 4A 5A 6A", "whole tone", &["messiaen's mode #1"]),
    ("1P 2m 4P 4A 5P 7M", "messiaen's mode #5", &[]),
    // 7 notes
    ("1P 2M 3M 4P 5d 6m 7m", "locrian major", &["arabian"]),
    ("1P 2m 3M 4A 5P 6m 7M", "double harmonic lydian", &[]),
    (
        "1P 2m 2A 3M 4A 6m 7m",
        "altered",
        &["super locrian", "diminished whole tone", "pomeroy"],
    ),
    ("1P 2M 3m 4P 5d 6m 7m", "locrian #2", &["half-diminished", "aeolian b5"]),
    (
        "1P 2M 3M 4P 5P 6m 7m",
        "mixolydian b6",
        &["melodic minor fifth mode", "hindu"],
    ),
    ("1P 2M 3M 4A 5P 6M 7m", "lydian dominant", &["lydian b7", "overtone"]),
    ("1P 2M 3M 4A 5A 6M 7M", "lydian augmented", &[]),
    (
        "1P 2m 3m 4P 5P 6M 7m",
        "dorian b2",
        &["phrygian #6", "melodic minor second mode"],
    ),
    (
        "1P 2m 3m 4d 5d 6m 7d",
        "ultralocrian",
        &["superlocrian bb7", "superlocrian diminished"],
    ),
    (
        "1P 2m 3m 4P 5d 6M 7m",
        "locrian 6",
        &["locrian natural 6", "locrian sharp 6"],
    ),
    ("1P 2A 3M 4P 5P 5A 7M", "augmented heptatonic", &[]),
    (
        "1P 2M 3m 4A 5P 6M 7m",
        "dorian #4",
        &["ukrainian dorian", "romanian minor", "altered dorian"],
    ),
    ("1P 2M 3m 4A 5P 6M 7M", "lydian diminished", &[]),
    ("1P 2M 3M 4A 5A 7m 7M", "leading whole tone", &[]),
    ("1P 2M 3M 4A 5P 6m 7m", "lydian minor", &[]),
    ("1P 2m 3M 4P 5P 6m 7m", "phrygian dominant", &["spanish", "phrygian major"]),
    ("1P 2m 3m 4P 5P 6m 7M", "balinese", &[]),
    ("1P 2m 3m 4P 5P 6M 7M", "neopolitan major", &[]),
    ("1P 2M 3M 4P 5P 6m 7M", "harmonic major", &[]),
    ("1P 2m 3M 4P 5P 6m 7M", "double harmonic major", &["gypsy"]),
    ("1P 2M 3m 4A 5P 6m 7M", "hungarian minor", &[]),
    ("1P 2A 3M 4A 5P 6M 7m", "hungarian major", &[]),
    ("1P 2m 3M 4P 5d 6M 7m", "oriental", &[]),
    ("1P 2m 3m 3M 4A 5P 7m", "flamenco", &[]),
    ("1P 2m 3m 4A 5P 6m 7M", "todi raga", &[]),
    ("1P 2m 3M 4P 5d 6m 7M", "persian", &[]),
    ("1P 2m 3M 5d 6m 7m 7M", "enigmatic", &[]),
    (
        "1P 2M 3M 4P 5A 6M 7M",
        "major augmented",
        &["major #5", "ionian augmented", "ionian #5"],
    ),
    ("1P 2A 3M 4A 5P 6M 7M", "lydian #9", &[]),
    // 8 notes
    ("1P 2m 2M 4P 4A 5P 6m 7M", "messiaen's mode #4", &[]),
    ("1P 2m 3M 4P 4A 5P 6m 7M", "purvi raga", &[]),
    ("1P 2m 3m 3M 4P 5P 6m 7m", "spanish heptatonic", &[]),
    ("1P 2M 3m 3M 4P 5P 6M 7m", "bebop minor", &[]),
    ("1P 2M 3M 4P 5P 5A 6M 7M", "bebop major", &[]),
    ("1P 2m 3m 4P 5d 5P 6m 7m", "bebop locrian", &[]),
    ("1P 2M 3m 4P 5P 6m 7m 7M", "minor bebop", &[]),
    ("1P 2M 3M 4P 5d 5P 6M 7M", "ichikosucho", &[]),
    ("1P 2M 3m 4P 5P 6m 6M 7M", "minor six diminished", &[]),
    (
        "1P 2m 3m 3M 4A 5P 6M 7m",
        "half-whole diminished",
        &["dominant diminished", "messiaen's mode #2"],
    ),
    ("1P 3m 3M 4P 5P 6M 7m 7M", "kafi raga", &[]),
    ("1P 2M 3M 4P 4A 5A 6A 7M", "messiaen's mode #6", &[]),
    // 9 notes
    ("1P 2M 3m 3M 4P 5d 5P 6M 7m", "composite blues", &[]),
    ("1P 2M 3m 3M 4A 5P 6m 7m 7M", "messiaen's mode #3", &[]),
    // 10 notes
    ("1P 2m 2M 3m 4P 4A 5P 6m 6M 7M", "messiaen's mode #7", &[]),
    // 12 notes
    ("1P 2m 2M 3m 3M 4P 5d 5P 6m 6M 7m 7M", "chromatic", &[]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_scales() {
        let dict = ScaleTypeDictionary::builtin();
        assert_eq!(dict.len(), SCALE_TYPES.len());

        let major = dict.get("major").unwrap();
        assert_eq!(major.chroma.binary(), "101011010101");
        assert_eq!(dict.get("ionian").unwrap(), major);
        assert_eq!(dict.get("chromatic").unwrap().chroma.len(), 12);
    }

    #[test]
    fn test_supersets() {
        let dict = ScaleTypeDictionary::builtin();
        let pentatonic = dict.get("major pentatonic").unwrap().chroma;
        let names: Vec<&str> = dict
            .supersets_of(pentatonic)
            .map(|s| s.name.as_str())
            .collect();
        assert!(names.contains(&"major"));
        assert!(names.contains(&"chromatic"));
        assert!(!names.contains(&"major pentatonic"));
    }

    #[test]
    fn test_nameless_scale_is_rejected() {
        let rows: &[TypeRow] = &[("1P 2M", "", &[])];
        assert!(ScaleTypeDictionary::from_rows(rows).is_err());
    }
}
