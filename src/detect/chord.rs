//! Chord detection over a chord-type dictionary.

use serde::Serialize;

use super::{DetectOptions, TonicHint};
use crate::dictionary::{ChordType, ChordTypeDictionary};
use crate::pcset::Chroma;
use crate::pitch;

const THIRDS: Chroma = Chroma::from_bits(0b0000_0001_1000);
const PERFECT_FIFTH: u8 = 7;
const ALTERED_FIFTHS: Chroma = Chroma::from_bits(0b0001_0100_0000);
const SEVENTHS: Chroma = Chroma::from_bits(0b1100_0000_0000);

/// One interpretation of the input notes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordMatch {
    /// Display name, e.g. `"Cmaj7"` or `"CM/E"`.
    pub name: String,
    pub root: u8,
    pub root_name: String,
    pub symbol: String,
    /// Full chord type name; empty for symbol-only types.
    pub type_name: String,
    /// Bass spelling for inversions.
    pub bass: Option<String>,
    pub inversion: bool,
    /// 1.0 for root position (or unknown tonic), 0.5 for inversions.
    pub weight: f64,
    #[serde(skip)]
    order: usize,
}

/// Chord detection bound to a dictionary and a set of options.
#[derive(Debug, Clone, Copy)]
pub struct ChordDetector<'a> {
    dictionary: &'a ChordTypeDictionary,
    options: DetectOptions,
}

impl<'a> ChordDetector<'a> {
    pub fn new(dictionary: &'a ChordTypeDictionary, options: DetectOptions) -> Self {
        Self {
            dictionary,
            options,
        }
    }

    pub fn options(&self) -> DetectOptions {
        self.options
    }

    /// Detect from note names. Unparseable names are skipped; the first
    /// spelling given for a pitch class is used in the results.
    pub fn detect<S: AsRef<str>>(&self, notes: &[S]) -> Vec<ChordMatch> {
        let mut spellings: [Option<String>; 12] = Default::default();
        let mut first: Option<u8> = None;
        let mut chroma = Chroma::EMPTY;

        for n in notes {
            match pitch::parse_note(n.as_ref()) {
                Ok(note) => {
                    let pc = note.pitch_class();
                    chroma = chroma.with(pc);
                    first.get_or_insert(pc);
                    let slot = &mut spellings[usize::from(pc)];
                    if slot.is_none() {
                        *slot = Some(note.spelling());
                    }
                }
                Err(e) => log::warn!("skipping note: {}", e),
            }
        }

        self.find(chroma, first, |pc| spellings[usize::from(pc)].clone())
    }

    /// Detect from pitch classes (taken modulo 12), spelled with sharps.
    pub fn detect_pitch_classes(&self, pcs: &[u8]) -> Vec<ChordMatch> {
        let chroma = Chroma::from_pitch_classes(pcs.iter().copied());
        let first = pcs.first().map(|pc| pc % 12);
        self.find(chroma, first, |pc| Some(pitch::pitch_class_name(pc, false).to_string()))
    }

    fn find<F>(&self, chroma: Chroma, first: Option<u8>, spell: F) -> Vec<ChordMatch>
    where
        F: Fn(u8) -> Option<String>,
    {
        if chroma.len() < 2 {
            log::debug!("{} pitch classes, nothing to detect", chroma.len());
            return Vec::new();
        }

        let tonic = match self.options.tonic {
            TonicHint::None => None,
            TonicHint::FirstNote => first,
            TonicHint::PitchClass(pc) => Some(pc % 12),
        };
        let name_of = |pc: u8| spell(pc).unwrap_or_else(|| pitch::pitch_class_name(pc, false).to_string());

        let mut found = Vec::new();
        for root in chroma.pitch_classes() {
            let mode = chroma.rotate(root);
            log::trace!("root {} -> {}", root, mode);

            for (order, chord_type) in self.candidates(mode) {
                let root_name = name_of(root);
                let inversion = tonic.map_or(false, |t| t != root);
                let bass = if inversion { tonic.map(name_of) } else { None };
                let name = match &bass {
                    Some(b) => format!("{}{}/{}", root_name, chord_type.symbol(), b),
                    None => format!("{}{}", root_name, chord_type.symbol()),
                };
                found.push(ChordMatch {
                    name,
                    root,
                    root_name,
                    symbol: chord_type.symbol().to_string(),
                    type_name: chord_type.name.clone(),
                    bass,
                    inversion,
                    weight: if inversion { 0.5 } else { 1.0 },
                    order,
                });
            }
        }

        found.sort_by_key(|m| (m.inversion, m.order, m.root));
        log::debug!(
            "{} -> {:?}",
            chroma,
            found.iter().map(|m| m.name.as_str()).collect::<Vec<_>>()
        );
        found
    }

    /// Chord types matching a chroma already rotated to its root.
    fn candidates(&self, mode: Chroma) -> Vec<(usize, &'a ChordType)> {
        let dictionary: &'a ChordTypeDictionary = self.dictionary;
        if !self.options.assume_perfect_fifth {
            return dictionary.with_chroma(mode).collect();
        }

        let with_fifth = with_perfect_fifth(mode);
        let mut out: Vec<(usize, &'a ChordType)> = dictionary
            .with_chroma(mode)
            .filter(|(_, t)| !has_third_fifth_and_seventh(t.chroma))
            .collect();
        out.extend(
            dictionary
                .with_chroma(with_fifth)
                .filter(|(_, t)| has_third_fifth_and_seventh(t.chroma)),
        );
        out
    }
}

fn has_third_fifth_and_seventh(chroma: Chroma) -> bool {
    chroma.bits() & THIRDS.bits() != 0
        && chroma.contains(PERFECT_FIFTH)
        && chroma.bits() & SEVENTHS.bits() != 0
}

fn with_perfect_fifth(chroma: Chroma) -> Chroma {
    if chroma.bits() & ALTERED_FIFTHS.bits() != 0 {
        chroma
    } else {
        chroma.with(PERFECT_FIFTH)
    }
}

/// Chord names for `notes`, best first, using the built-in dictionary and
/// treating the notes as an unordered set.
pub fn detect<S: AsRef<str>>(notes: &[S]) -> Vec<String> {
    detect_with(notes, &DetectOptions::default())
}

pub fn detect_with<S: AsRef<str>>(notes: &[S], options: &DetectOptions) -> Vec<String> {
    detect_chords(notes, options)
        .into_iter()
        .map(|m| m.name)
        .collect()
}

pub fn detect_chords<S: AsRef<str>>(notes: &[S], options: &DetectOptions) -> Vec<ChordMatch> {
    ChordDetector::new(ChordTypeDictionary::builtin(), *options).detect(notes)
}
