//! Interval names in number-quality shorthand (`"3M"`, `"5P"`, `"9m"`, `"13A"`).
//!
//! The quality may also come first (`"M3"`). Repeated `A`/`d` mean doubly
//! augmented/diminished. Compound intervals keep their number (`9M` is 14
//! semitones) but share a chroma with their simple form.

use std::fmt;

use crate::error::TheoryError;

/// Simple interval names for each semitone above the root, as used when a
/// pitch-class set is listed as intervals.
pub const SEMITONE_NAMES: [&str; 12] = [
    "1P", "2m", "2M", "3m", "3M", "4P", "5d", "5P", "6m", "6M", "7m", "7M",
];

const BASE_SEMITONES: [i16; 7] = [0, 2, 4, 5, 7, 9, 11];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quality {
    Perfect,
    Major,
    Minor,
    /// Augmented `n` times
    Augmented(u8),
    /// Diminished `n` times
    Diminished(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    pub number: u8,
    pub quality: Quality,
    pub semitones: i16,
}

impl Interval {
    /// Semitones reduced to one octave (0..12).
    pub fn chroma(&self) -> u8 {
        self.semitones.rem_euclid(12) as u8
    }

    /// Size of the interval ignoring octaves (1..=7).
    pub fn simple_number(&self) -> u8 {
        (self.number - 1) % 7 + 1
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quality = match self.quality {
            Quality::Perfect => "P".to_string(),
            Quality::Major => "M".to_string(),
            Quality::Minor => "m".to_string(),
            Quality::Augmented(n) => "A".repeat(usize::from(n)),
            Quality::Diminished(n) => "d".repeat(usize::from(n)),
        };
        write!(f, "{}{}", self.number, quality)
    }
}

/// Parse an interval name.
///
/// ```
/// use harmonia::interval::parse_interval;
///
/// assert_eq!(parse_interval("3M").unwrap().semitones, 4);
/// assert_eq!(parse_interval("13m").unwrap().chroma(), 8);
/// assert_eq!(parse_interval("d5").unwrap().semitones, 6);
/// assert!(parse_interval("3P").is_err());
/// ```
pub fn parse_interval(source: &str) -> Result<Interval, TheoryError> {
    let invalid = || TheoryError::InvalidInterval(source.to_string());
    let trimmed = source.trim();

    let digits_at_start = trimmed.starts_with(|c: char| c.is_ascii_digit());
    let (number_str, quality_str) = if digits_at_start {
        let split = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .ok_or_else(invalid)?;
        trimmed.split_at(split)
    } else {
        let split = trimmed
            .find(|c: char| c.is_ascii_digit())
            .ok_or_else(invalid)?;
        let (q, n) = trimmed.split_at(split);
        (n, q)
    };

    let number: u8 = number_str.parse().map_err(|_| invalid())?;
    if number == 0 {
        return Err(invalid());
    }

    let simple = usize::from((number - 1) % 7);
    let octaves = i16::from((number - 1) / 7);
    let perfectable = matches!(simple, 0 | 3 | 4);

    let repeated = |c: char| -> Option<u8> {
        if !quality_str.is_empty() && quality_str.chars().all(|q| q == c) {
            u8::try_from(quality_str.len()).ok()
        } else {
            None
        }
    };

    let (quality, alteration) = match quality_str {
        "P" if perfectable => (Quality::Perfect, 0),
        "M" if !perfectable => (Quality::Major, 0),
        "m" if !perfectable => (Quality::Minor, -1),
        _ => {
            if let Some(n) = repeated('A') {
                (Quality::Augmented(n), i16::from(n))
            } else if let Some(n) = repeated('d') {
                let flat = if perfectable { i16::from(n) } else { i16::from(n) + 1 };
                (Quality::Diminished(n), -flat)
            } else {
                return Err(invalid());
            }
        }
    };

    Ok(Interval {
        number,
        quality,
        semitones: BASE_SEMITONES[simple] + alteration + 12 * octaves,
    })
}

/// Parse a whitespace-separated interval list such as `"1P 3M 5P"`.
pub fn parse_intervals(source: &str) -> Result<Vec<Interval>, TheoryError> {
    source.split_whitespace().map(parse_interval).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_intervals() {
        let cases = [
            ("1P", 0),
            ("2m", 1),
            ("2M", 2),
            ("3m", 3),
            ("3M", 4),
            ("4P", 5),
            ("4A", 6),
            ("5d", 6),
            ("5P", 7),
            ("5A", 8),
            ("6m", 8),
            ("6M", 9),
            ("7d", 9),
            ("7m", 10),
            ("7M", 11),
            ("8P", 12),
        ];
        for (name, semitones) in cases {
            assert_eq!(parse_interval(name).unwrap().semitones, semitones, "{}", name);
        }
    }

    #[test]
    fn test_compound_intervals() {
        assert_eq!(parse_interval("9m").unwrap().semitones, 13);
        assert_eq!(parse_interval("9A").unwrap().chroma(), 3);
        assert_eq!(parse_interval("10m").unwrap().chroma(), 3);
        assert_eq!(parse_interval("11A").unwrap().chroma(), 6);
        assert_eq!(parse_interval("12d").unwrap().chroma(), 6);
        assert_eq!(parse_interval("13M").unwrap().simple_number(), 6);
    }

    #[test]
    fn test_quality_first_and_repeated() {
        assert_eq!(parse_interval("M3").unwrap(), parse_interval("3M").unwrap());
        assert_eq!(parse_interval("4d").unwrap().semitones, 4);
        assert_eq!(parse_interval("6A").unwrap().semitones, 10);
        assert_eq!(parse_interval("5AA").unwrap().semitones, 9);
        assert_eq!(parse_interval("3dd").unwrap().semitones, 1);
    }

    #[test]
    fn test_invalid_intervals() {
        for s in ["", "3P", "5M", "0P", "P", "3", "3X", "3Ad"] {
            assert!(parse_interval(s).is_err(), "{:?} should not parse", s);
        }
    }

    #[test]
    fn test_semitone_names_round_trip() {
        for (i, name) in SEMITONE_NAMES.iter().enumerate() {
            assert_eq!(usize::from(parse_interval(name).unwrap().chroma()), i);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(parse_interval("M9").unwrap().to_string(), "9M");
        assert_eq!(parse_interval("4AA").unwrap().to_string(), "4AA");
    }
}
