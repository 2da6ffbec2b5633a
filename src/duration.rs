//! # Duration Values
//!
//! Named rhythmic values ("quarter", "q", "crotchet" ...) resolved to exact
//! fractions of a whole note, with augmentation dots.
//!
//! ## Table
//! Twelve base values from the large (8 wholes) down to the 256th note. Each row
//! carries a shorthand, its full names, the exact base fraction and the decimal
//! value it is declared with; the two must agree or the table is rejected when
//! it is built.
//!
//! ## Dots
//! Each dot adds half of the previous augmentation:
//! - `q` = 1/4
//! - `q.` = 1/4 + 1/8 = 3/8
//! - `q..` = 1/4 + 1/8 + 1/16 = 7/16
//!
//! The sum is built in a common `2^dots` denominator and reduced once, so the
//! result is exact.
//!
//! ## Example
//! ```rust
//! use harmonia::duration;
//!
//! let dotted = duration::get("quarter.");
//! assert!(!dotted.empty);
//! assert_eq!(dotted.value, 0.375);
//! assert_eq!(dotted.shorthand, "q");
//! assert_eq!(dotted.dots, ".");
//!
//! assert!(duration::get("semibrevissima").empty);
//! ```

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::error::TheoryError;
use crate::fraction::Fraction;

/// One row of a duration table.
#[derive(Debug, Clone, Copy)]
pub struct DurationRow {
    /// Length as a fraction of a whole note.
    pub fraction: Fraction,
    /// Declared decimal length; must equal `fraction`.
    pub value: f64,
    pub shorthand: &'static str,
    pub names: &'static [&'static str],
}

const fn row(
    numerator: i64,
    denominator: i64,
    value: f64,
    shorthand: &'static str,
    names: &'static [&'static str],
) -> DurationRow {
    DurationRow {
        fraction: Fraction::raw(numerator, denominator),
        value,
        shorthand,
        names,
    }
}

/// Built-in durations, longest first. Lookup is first-match in this order.
pub const DURATIONS: &[DurationRow] = &[
    row(8, 1, 8.0, "dl", &["large", "duplex longa", "maxima", "octuple", "octuple whole"]),
    row(4, 1, 4.0, "l", &["long", "longa"]),
    row(2, 1, 2.0, "d", &["double whole", "double", "breve"]),
    row(1, 1, 1.0, "w", &["whole", "semibreve"]),
    row(1, 2, 0.5, "h", &["half", "minim"]),
    row(1, 4, 0.25, "q", &["quarter", "crotchet"]),
    row(1, 8, 0.125, "e", &["eighth", "quaver"]),
    row(1, 16, 0.0625, "s", &["sixteenth", "semiquaver"]),
    row(1, 32, 0.03125, "t", &["thirty-second", "demisemiquaver"]),
    row(1, 64, 0.015625, "sf", &["sixty-fourth", "hemidemisemiquaver"]),
    row(1, 128, 0.0078125, "ht", &["hundred twenty-eighth"]),
    row(1, 256, 0.00390625, "th", &["two hundred fifty-sixth"]),
];

/// A resolved duration.
///
/// `empty` marks "no such duration"; the empty value has `value == 0.0` and a
/// `0/0` fraction, so always check the flag rather than the numbers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DurationValue {
    pub empty: bool,
    pub value: f64,
    pub name: String,
    pub fraction: Fraction,
    pub shorthand: String,
    pub dots: String,
    pub names: Vec<String>,
}

impl DurationValue {
    /// The "not found" value.
    pub fn empty() -> Self {
        Self {
            empty: true,
            value: 0.0,
            name: String::new(),
            fraction: Fraction::raw(0, 0),
            shorthand: String::new(),
            dots: String::new(),
            names: Vec::new(),
        }
    }
}

/// An immutable, verified duration table.
#[derive(Debug)]
pub struct DurationTable {
    rows: Vec<DurationRow>,
}

static BUILTIN: Lazy<DurationTable> = Lazy::new(|| {
    DurationTable::new(DURATIONS).expect("built-in duration table is consistent")
});

impl DurationTable {
    /// Build a table, checking that shorthands and names are unique and that
    /// every fraction matches its declared decimal value.
    pub fn new(rows: &[DurationRow]) -> Result<Self, TheoryError> {
        let invalid = |message: String| TheoryError::InvalidTable {
            table: "duration".to_string(),
            message,
        };

        let mut seen: Vec<&str> = Vec::new();
        for r in rows {
            if r.fraction.denominator() <= 0 || r.fraction.numerator() <= 0 {
                return Err(invalid(format!(
                    "'{}' has non-positive fraction {}",
                    r.shorthand, r.fraction
                )));
            }
            let exact = r.fraction.to_f64()?;
            if exact != r.value {
                return Err(invalid(format!(
                    "'{}' is declared as {} but its fraction {} is {}",
                    r.shorthand, r.value, r.fraction, exact
                )));
            }
            for key in std::iter::once(&r.shorthand).chain(r.names.iter()) {
                if key.is_empty() || key.contains('.') {
                    return Err(invalid(format!("'{}' is not a usable duration name", key)));
                }
                if seen.contains(key) {
                    return Err(invalid(format!("'{}' is declared twice", key)));
                }
                seen.push(*key);
            }
        }

        log::debug!("duration table built with {} rows", rows.len());
        Ok(Self {
            rows: rows.to_vec(),
        })
    }

    /// The process-wide built-in table.
    pub fn builtin() -> &'static DurationTable {
        &BUILTIN
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Resolve a name with optional trailing dots (`"q.."`, `"half."`).
    pub fn get(&self, name: &str) -> DurationValue {
        let Some((simple, dots)) = split_dots(name) else {
            return DurationValue::empty();
        };
        let Some(base) = self
            .rows
            .iter()
            .find(|r| r.shorthand == simple || r.names.iter().any(|n| *n == simple))
        else {
            return DurationValue::empty();
        };

        match augment(base.fraction, dots.len()) {
            Ok((fraction, value)) => DurationValue {
                empty: false,
                value,
                name: name.to_string(),
                fraction,
                shorthand: base.shorthand.to_string(),
                dots: dots.to_string(),
                names: base.names.iter().map(|n| n.to_string()).collect(),
            },
            Err(e) => {
                log::warn!("duration '{}' cannot be augmented: {}", name, e);
                DurationValue::empty()
            }
        }
    }

    /// Every full name, in table order.
    pub fn names(&self) -> Vec<&'static str> {
        self.rows.iter().flat_map(|r| r.names.iter().copied()).collect()
    }

    /// One shorthand per row, in table order.
    pub fn shorthands(&self) -> Vec<&'static str> {
        self.rows.iter().map(|r| r.shorthand).collect()
    }
}

/// Split `"q.."` into `("q", "..")`. The base must be non-empty and dot-free.
fn split_dots(name: &str) -> Option<(&str, &str)> {
    let simple = name.trim_end_matches('.');
    if simple.is_empty() || simple.contains('.') {
        return None;
    }
    Some((simple, &name[simple.len()..]))
}

/// Apply `dots` augmentation dots to `base` and reduce the result.
fn augment(base: Fraction, dots: usize) -> Result<(Fraction, f64), TheoryError> {
    let overflow = || TheoryError::Overflow(format!("{} with {} dots", base, dots));

    let exponent = u32::try_from(dots).map_err(|_| overflow())?;
    let scale = 2i64.checked_pow(exponent).ok_or_else(overflow)?;
    let start = base.numerator().checked_mul(scale).ok_or_else(overflow)?;
    let denominator = base.denominator().checked_mul(scale).ok_or_else(overflow)?;

    // every term shares the 2^dots denominator, and start is divisible by
    // 2^dots, so each halving is exact
    let mut total = Fraction::new(start, denominator)?;
    for i in 1..=exponent {
        total = total.add(Fraction::new(start >> i, denominator)?)?;
    }

    let fraction = total.simplify()?;
    Ok((fraction, fraction.to_f64()?))
}

/// Resolve a duration name against the built-in table.
pub fn get(name: &str) -> DurationValue {
    DurationTable::builtin().get(name)
}

/// Decimal length of `name` in whole notes; `0.0` when unknown.
pub fn value(name: &str) -> f64 {
    get(name).value
}

/// Exact length of `name`; `0/0` when unknown.
pub fn fraction(name: &str) -> Fraction {
    get(name).fraction
}

pub fn names() -> Vec<&'static str> {
    DurationTable::builtin().names()
}

pub fn shorthands() -> Vec<&'static str> {
    DurationTable::builtin().shorthands()
}
