//! Note names and pitch classes.
//!
//! Pitch classes are `u8` values `0..12` with `0 = C`. Enharmonic spellings
//! (`C#`/`Db`, `E#`/`F`, `Cb`/`B`) reduce to the same pitch class; the spelling
//! is kept on [`Note`] so detection results can echo the caller's names.

use std::fmt;

use crate::error::TheoryError;

/// Note letters A through G
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NoteName {
    #[default]
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl NoteName {
    fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'C' => Some(NoteName::C),
            'D' => Some(NoteName::D),
            'E' => Some(NoteName::E),
            'F' => Some(NoteName::F),
            'G' => Some(NoteName::G),
            'A' => Some(NoteName::A),
            'B' => Some(NoteName::B),
            _ => None,
        }
    }

    /// Semitones above C
    pub fn semitones(self) -> i8 {
        match self {
            NoteName::C => 0,
            NoteName::D => 2,
            NoteName::E => 4,
            NoteName::F => 5,
            NoteName::G => 7,
            NoteName::A => 9,
            NoteName::B => 11,
        }
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Accidentals: natural, sharp (#), flat (b), double sharp (## or x), double flat (bb)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Accidental {
    #[default]
    Natural,
    Sharp,
    Flat,
    DoubleSharp,
    DoubleFlat,
}

impl Accidental {
    pub fn alteration(self) -> i8 {
        match self {
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
            Accidental::Flat => -1,
            Accidental::DoubleSharp => 2,
            Accidental::DoubleFlat => -2,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            Accidental::Natural => "",
            Accidental::Sharp => "#",
            Accidental::Flat => "b",
            Accidental::DoubleSharp => "##",
            Accidental::DoubleFlat => "bb",
        }
    }
}

/// A parsed note: letter, accidental and optional octave (`C#4`, `Bb`, `fx`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Note {
    pub name: NoteName,
    pub accidental: Accidental,
    pub octave: Option<i8>,
}

impl Note {
    pub fn pitch_class(&self) -> u8 {
        (self.name.semitones() + self.accidental.alteration()).rem_euclid(12) as u8
    }

    /// Letter and accidental without octave, e.g. `"Db"`.
    pub fn spelling(&self) -> String {
        format!("{}{}", self.name, self.accidental.symbol())
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.octave {
            Some(octave) => write!(f, "{}{}", self.spelling(), octave),
            None => write!(f, "{}", self.spelling()),
        }
    }
}

/// Parse a note name such as `"C"`, `"f#"`, `"Bb3"`, `"Ebb"`, `"Gx"` or `"A-1"`.
///
/// ```
/// use harmonia::pitch::parse_note;
///
/// assert_eq!(parse_note("Db4").unwrap().pitch_class(), 1);
/// assert_eq!(parse_note("B#").unwrap().pitch_class(), 0);
/// assert!(parse_note("H").is_err());
/// ```
pub fn parse_note(source: &str) -> Result<Note, TheoryError> {
    let invalid = || TheoryError::InvalidNote(source.to_string());
    let trimmed = source.trim();

    let mut chars = trimmed.chars();
    let name = chars
        .next()
        .and_then(NoteName::from_char)
        .ok_or_else(invalid)?;
    let rest = chars.as_str();

    let accidental_len = rest
        .find(|c: char| c != '#' && c != 'b' && c != 'x')
        .unwrap_or(rest.len());
    let (accidentals, octave_str) = rest.split_at(accidental_len);

    let accidental = match accidentals {
        "" => Accidental::Natural,
        "#" => Accidental::Sharp,
        "b" => Accidental::Flat,
        "##" | "x" => Accidental::DoubleSharp,
        "bb" => Accidental::DoubleFlat,
        _ => return Err(invalid()),
    };

    let octave = if octave_str.is_empty() {
        None
    } else {
        Some(octave_str.parse::<i8>().map_err(|_| invalid())?)
    };

    Ok(Note {
        name,
        accidental,
        octave,
    })
}

/// Pitch class of a note name, or `None` when it does not parse.
pub fn pitch_class(source: &str) -> Option<u8> {
    parse_note(source).ok().map(|n| n.pitch_class())
}

/// Spell a pitch class with a single accidental.
/// 0=C, 1=C#/Db, 2=D, 3=D#/Eb, 4=E, 5=F, 6=F#/Gb, 7=G, 8=G#/Ab, 9=A, 10=A#/Bb, 11=B
pub fn pitch_class_name(pc: u8, prefer_flat: bool) -> &'static str {
    const SHARPS: [&str; 12] = [
        "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
    ];
    const FLATS: [&str; 12] = [
        "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
    ];
    let idx = usize::from(pc % 12);
    if prefer_flat {
        FLATS[idx]
    } else {
        SHARPS[idx]
    }
}

pub fn midi_to_pitch_class(midi: u8) -> u8 {
    midi % 12
}

/// Scientific pitch name of a MIDI note (C4 = 60), sharp spelling.
pub fn midi_to_note_name(midi: u8) -> String {
    let octave = i16::from(midi) / 12 - 1;
    format!("{}{}", pitch_class_name(midi_to_pitch_class(midi), false), octave)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_note_names() {
        let n = parse_note("C#4").unwrap();
        assert_eq!(n.name, NoteName::C);
        assert_eq!(n.accidental, Accidental::Sharp);
        assert_eq!(n.octave, Some(4));
        assert_eq!(n.pitch_class(), 1);
        assert_eq!(n.to_string(), "C#4");

        assert_eq!(parse_note("bb").unwrap().pitch_class(), 10);
        assert_eq!(parse_note("Cb").unwrap().pitch_class(), 11);
        assert_eq!(parse_note("Fx").unwrap().pitch_class(), 7);
        assert_eq!(parse_note("Ebb").unwrap().pitch_class(), 2);
        assert_eq!(parse_note("A-1").unwrap().octave, Some(-1));
    }

    #[test]
    fn test_enharmonics_share_pitch_class() {
        assert_eq!(pitch_class("C#"), pitch_class("Db"));
        assert_eq!(pitch_class("E#"), pitch_class("F"));
        assert_eq!(pitch_class("G#3"), pitch_class("Ab5"));
    }

    #[test]
    fn test_invalid_notes() {
        for s in ["", "H", "C#b", "Cbbb", "C4x", "#"] {
            assert!(parse_note(s).is_err(), "{:?} should not parse", s);
        }
    }

    #[test]
    fn test_spelling() {
        assert_eq!(parse_note("db3").unwrap().spelling(), "Db");
        assert_eq!(pitch_class_name(10, true), "Bb");
        assert_eq!(pitch_class_name(10, false), "A#");
        assert_eq!(pitch_class_name(13, false), "C#");
    }

    #[test]
    fn test_midi() {
        assert_eq!(midi_to_pitch_class(60), 0);
        assert_eq!(midi_to_pitch_class(61), 1);
        assert_eq!(midi_to_note_name(60), "C4");
        assert_eq!(midi_to_note_name(70), "A#4");
        assert_eq!(midi_to_note_name(0), "C-1");
    }
}
