//! # Detection
//!
//! Recognize chords and scales in an arbitrary collection of notes.
//!
//! ## Chords
//! 1. The notes are reduced to a [`Chroma`](crate::pcset::Chroma); fewer than
//!    two distinct pitch classes never match.
//! 2. Each present pitch class is tried as the root: the chroma is rotated so
//!    that root sits at bit 0, and the rotated set is looked up in the chord
//!    dictionary's chroma index.
//! 3. Every hit is a [`ChordMatch`] `(root, chord type)`.
//! 4. Matches are ranked:
//!    - with a known tonic ([`TonicHint`]), root-position matches come before
//!      inversions, and inversions are displayed as slash chords (`CM/E`);
//!    - ties are broken by the chord type's declaration order, then by root.
//!
//! With the default [`TonicHint::None`] the result depends only on the set of
//! pitch classes, so `["C", "E", "G"]` and `["G", "C", "E"]` give the same list.
//!
//! ## Scales
//! The tonic (given, or the first note) is added to the set, the set is
//! rotated to the tonic and matched exactly; with [`ScaleMatch::Fit`] every
//! scale containing the notes follows.
//!
//! ## Example
//! ```rust
//! use harmonia::{detect, detect_with, DetectOptions, TonicHint};
//!
//! assert_eq!(detect(&["C", "E", "G"])[0], "CM");
//! assert_eq!(detect(&["G", "C", "E"]), detect(&["C", "E", "G"]));
//!
//! let options = DetectOptions { tonic: TonicHint::FirstNote, ..Default::default() };
//! assert_eq!(detect_with(&["E", "G", "C"], &options)[0], "Em#5");
//! assert!(detect_with(&["E", "G", "C"], &options).contains(&"CM/E".to_string()));
//! ```
//!
//! ## Sub-modules
//! - `chord` - [`ChordDetector`] and the chord entry points
//! - `scale` - [`detect_scales`]

mod chord;
mod scale;

#[cfg(test)]
mod tests;

pub use chord::{detect, detect_chords, detect_with, ChordDetector, ChordMatch};
pub use scale::{detect_scales, detect_scales_in, ScaleDetectOptions, ScaleMatch};

/// Which pitch class, if any, is known to be the bass/tonic of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TonicHint {
    /// Treat the notes as an unordered set.
    #[default]
    None,
    /// The first recognizable note is the tonic (e.g. the lowest key held).
    FirstNote,
    /// An explicit pitch class (0 = C).
    PitchClass(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DetectOptions {
    pub tonic: TonicHint,
    /// Let chords with a third, a perfect fifth and a seventh match voicings
    /// that leave the fifth out (e.g. `C E B` as `Cmaj7`).
    pub assume_perfect_fifth: bool,
}
