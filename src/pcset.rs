//! # Pitch-Class Sets
//!
//! A [`Chroma`] is a 12-bit mask of the pitch classes present in a collection
//! of notes; bit `pc` is set when pitch class `pc` (0 = C) occurs. Octaves,
//! order and duplicates of the input never change it.
//!
//! ```text
//! C E G        -> bits 0, 4, 7  -> binary "100010010000"
//! rotate(.., 4) -> E is now bit 0 -> intervals 1P 3m 6m
//! ```
//!
//! Rotation is how the detection engine tries every root: rotating by `r`
//! moves pitch class `r` to bit 0, so the rotated set can be compared with
//! dictionary entries, which are all stored relative to their own root.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::interval::{Interval, SEMITONE_NAMES};
use crate::pitch;

const MASK: u16 = 0x0fff;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Chroma(u16);

impl Chroma {
    pub const EMPTY: Chroma = Chroma(0);

    /// Wrap a raw mask; bits above 11 are dropped.
    pub const fn from_bits(bits: u16) -> Self {
        Chroma(bits & MASK)
    }

    pub fn bits(&self) -> u16 {
        self.0
    }

    /// Pitch classes are taken modulo 12.
    pub fn from_pitch_classes<I: IntoIterator<Item = u8>>(pcs: I) -> Self {
        pcs.into_iter()
            .fold(Chroma::EMPTY, |acc, pc| acc.with(pc))
    }

    /// Chroma of an interval list anchored at pitch class 0.
    pub fn from_intervals(intervals: &[Interval]) -> Self {
        Self::from_pitch_classes(intervals.iter().map(|i| i.chroma()))
    }

    /// Chroma of note names. Names that do not parse are skipped.
    ///
    /// ```
    /// use harmonia::pcset::Chroma;
    ///
    /// let a = Chroma::from_notes(&["C4", "E4", "G4", "C5"]);
    /// let b = Chroma::from_notes(&["G", "c", "E"]);
    /// assert_eq!(a, b);
    /// assert_eq!(a.binary(), "100010010000");
    /// ```
    pub fn from_notes<S: AsRef<str>>(notes: &[S]) -> Self {
        notes
            .iter()
            .filter_map(|n| {
                let pc = pitch::pitch_class(n.as_ref());
                if pc.is_none() {
                    log::warn!("skipping unrecognized note '{}'", n.as_ref());
                }
                pc
            })
            .fold(Chroma::EMPTY, |acc, pc| acc.with(pc))
    }

    /// Copy with pitch class `pc` (mod 12) added.
    pub fn with(self, pc: u8) -> Self {
        Chroma(self.0 | (1 << (pc % 12)))
    }

    pub fn contains(&self, pc: u8) -> bool {
        self.0 & (1 << (pc % 12)) != 0
    }

    /// Number of distinct pitch classes.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Cyclic rotation that moves pitch class `steps` to bit 0.
    pub fn rotate(self, steps: u8) -> Self {
        let r = u32::from(steps % 12);
        if r == 0 {
            return self;
        }
        Chroma(((self.0 >> r) | (self.0 << (12 - r))) & MASK)
    }

    /// Shift every pitch class up by `semitones`.
    pub fn transpose(self, semitones: u8) -> Self {
        self.rotate((12 - semitones % 12) % 12)
    }

    /// Present pitch classes in ascending order.
    pub fn pitch_classes(&self) -> Vec<u8> {
        (0..12).filter(|pc| self.contains(*pc)).collect()
    }

    /// Interval names of the present pitch classes, relative to bit 0.
    pub fn intervals(&self) -> Vec<&'static str> {
        self.pitch_classes()
            .into_iter()
            .map(|pc| SEMITONE_NAMES[usize::from(pc)])
            .collect()
    }

    /// All twelve rotations (index = new root). With `normalize`, only the
    /// rotations that start on a present pitch class are kept.
    pub fn modes(&self, normalize: bool) -> Vec<Chroma> {
        (0..12)
            .filter(|r| !normalize || self.contains(*r))
            .map(|r| self.rotate(r))
            .collect()
    }

    /// Proper subset: every pitch class of `self` is in `other`, and they differ.
    pub fn is_subset_of(&self, other: Chroma) -> bool {
        self.0 != other.0 && self.0 & other.0 == self.0
    }

    /// Proper superset.
    pub fn is_superset_of(&self, other: Chroma) -> bool {
        other.is_subset_of(*self)
    }

    /// Twelve `0`/`1` characters, C first.
    pub fn binary(&self) -> String {
        (0..12)
            .map(|pc| if self.contains(pc) { '1' } else { '0' })
            .collect()
    }

    /// The binary string read as a base-2 number (C is the most significant bit).
    pub fn num(&self) -> u16 {
        (0..12).fold(0u16, |acc, pc| (acc << 1) | u16::from(self.contains(pc)))
    }
}

impl fmt::Display for Chroma {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.binary())
    }
}

impl Serialize for Chroma {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.binary())
    }
}

pub fn chroma_of<S: AsRef<str>>(notes: &[S]) -> Chroma {
    Chroma::from_notes(notes)
}

pub fn rotate(chroma: Chroma, steps: u8) -> Chroma {
    chroma.rotate(steps)
}

pub fn intervals(chroma: Chroma) -> Vec<&'static str> {
    chroma.intervals()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pcs(list: &[u8]) -> Chroma {
        Chroma::from_pitch_classes(list.iter().copied())
    }

    #[test]
    fn test_duplicates_and_octaves_collapse() {
        assert_eq!(pcs(&[0, 4, 7, 12, 16, 0]), pcs(&[7, 4, 0]));
        assert_eq!(chroma_of(&["C", "C", "E5", "G2"]).len(), 3);
    }

    #[test]
    fn test_rotate() {
        let c_major = pcs(&[0, 4, 7]);
        assert_eq!(rotate(c_major, 0), c_major);
        assert_eq!(rotate(c_major, 4), pcs(&[0, 3, 8]));
        assert_eq!(rotate(c_major, 7), pcs(&[0, 5, 9]));
        assert_eq!(c_major.rotate(12), c_major);

        let mut r = c_major;
        for _ in 0..12 {
            r = r.rotate(1);
        }
        assert_eq!(r, c_major);
    }

    #[test]
    fn test_transpose() {
        assert_eq!(pcs(&[0, 4, 7]).transpose(2), pcs(&[2, 6, 9]));
        assert_eq!(pcs(&[10, 2, 5]).transpose(2), pcs(&[0, 4, 7]));
    }

    #[test]
    fn test_intervals() {
        assert_eq!(intervals(pcs(&[0, 4, 7, 11])), vec!["1P", "3M", "5P", "7M"]);
        assert_eq!(intervals(pcs(&[0, 3, 6])), vec!["1P", "3m", "5d"]);
    }

    #[test]
    fn test_binary_and_num() {
        let c_major = pcs(&[0, 4, 7]);
        assert_eq!(c_major.binary(), "100010010000");
        assert_eq!(c_major.num(), 0b1000_1001_0000);
        assert_eq!(Chroma::EMPTY.binary(), "000000000000");
    }

    #[test]
    fn test_modes() {
        let c_major = pcs(&[0, 4, 7]);
        assert_eq!(c_major.modes(false).len(), 12);
        assert_eq!(
            c_major.modes(true),
            vec![c_major, pcs(&[0, 3, 8]), pcs(&[0, 5, 9])]
        );
    }

    #[test]
    fn test_subsets() {
        let triad = pcs(&[0, 4, 7]);
        let seventh = pcs(&[0, 4, 7, 11]);
        assert!(triad.is_subset_of(seventh));
        assert!(seventh.is_superset_of(triad));
        assert!(!triad.is_subset_of(triad));
        assert!(!seventh.is_subset_of(triad));
    }

    #[test]
    fn test_invalid_notes_are_skipped() {
        assert_eq!(chroma_of(&["C", "H", "G"]), pcs(&[0, 7]));
    }
}
