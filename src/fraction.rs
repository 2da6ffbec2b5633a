//! Exact rational values for note durations.
//!
//! [`Fraction`] keeps the numerator and denominator exactly as produced: `add`
//! never reduces, and only [`Fraction::simplify`] divides out the greatest
//! common divisor. This lets the duration engine sum augmentation dots in a
//! common power-of-two denominator and reduce once at the end.
//!
//! Arithmetic is checked. Overflow is a [`TheoryError::Overflow`], so a
//! denominator can never wrap to zero.

use std::fmt;

use num_rational::Rational64;
use serde::Serialize;

use crate::error::TheoryError;

/// An un-normalized `numerator / denominator` pair.
///
/// Equality is structural: `3/8` and `6/16` are different values until one of
/// them is simplified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Fraction {
    numerator: i64,
    denominator: i64,
}

impl Fraction {
    /// Create a fraction, rejecting a zero denominator.
    ///
    /// ```
    /// use harmonia::Fraction;
    ///
    /// let q = Fraction::new(1, 4).unwrap();
    /// assert_eq!(q.to_f64().unwrap(), 0.25);
    /// assert!(Fraction::new(1, 0).is_err());
    /// ```
    pub fn new(numerator: i64, denominator: i64) -> Result<Self, TheoryError> {
        if denominator == 0 {
            return Err(TheoryError::InvalidFraction {
                numerator,
                denominator,
            });
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// Build a fraction without checking the denominator. Only for table data
    /// and the `0/0` marker carried by the empty duration.
    pub(crate) const fn raw(numerator: i64, denominator: i64) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    pub fn denominator(&self) -> i64 {
        self.denominator
    }

    /// Exact addition without reduction. Equal denominators are kept and the
    /// numerators summed; otherwise the operands are cross-multiplied.
    ///
    /// ```
    /// use harmonia::{Fraction, TheoryError};
    ///
    /// let a = Fraction::new(1, 4).unwrap();
    /// let b = Fraction::new(1, 8).unwrap();
    /// assert_eq!(a.add(b).unwrap(), Fraction::new(12, 32).unwrap());
    /// assert_eq!(b.add(b).unwrap(), Fraction::new(2, 8).unwrap());
    ///
    /// let tiny = Fraction::new(1, 1 << 40).unwrap();
    /// let tinier = Fraction::new(1, 1 << 41).unwrap();
    /// assert!(matches!(tiny.add(tinier), Err(TheoryError::Overflow(_))));
    /// ```
    pub fn add(self, other: Fraction) -> Result<Fraction, TheoryError> {
        for f in [self, other] {
            if f.denominator == 0 {
                return Err(TheoryError::InvalidFraction {
                    numerator: f.numerator,
                    denominator: f.denominator,
                });
            }
        }
        let overflow = || TheoryError::Overflow(format!("{} + {}", self, other));

        if self.denominator == other.denominator {
            return Ok(Fraction {
                numerator: self
                    .numerator
                    .checked_add(other.numerator)
                    .ok_or_else(overflow)?,
                denominator: self.denominator,
            });
        }

        let left = self
            .numerator
            .checked_mul(other.denominator)
            .ok_or_else(overflow)?;
        let right = other
            .numerator
            .checked_mul(self.denominator)
            .ok_or_else(overflow)?;
        Ok(Fraction {
            numerator: left.checked_add(right).ok_or_else(overflow)?,
            denominator: self
                .denominator
                .checked_mul(other.denominator)
                .ok_or_else(overflow)?,
        })
    }

    /// Reduce by the greatest common divisor. The sign ends up on the numerator.
    ///
    /// ```
    /// use harmonia::Fraction;
    ///
    /// let f = Fraction::new(12, 32).unwrap().simplify().unwrap();
    /// assert_eq!((f.numerator(), f.denominator()), (3, 8));
    /// ```
    pub fn simplify(self) -> Result<Fraction, TheoryError> {
        let ratio = Rational64::try_from(self)?;
        Ok(Fraction::from(ratio))
    }

    /// Decimal value. Fails instead of producing NaN or infinity.
    pub fn to_f64(self) -> Result<f64, TheoryError> {
        if self.denominator == 0 {
            return Err(TheoryError::InvalidFraction {
                numerator: self.numerator,
                denominator: self.denominator,
            });
        }
        Ok(self.numerator as f64 / self.denominator as f64)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl TryFrom<Fraction> for Rational64 {
    type Error = TheoryError;

    fn try_from(value: Fraction) -> Result<Self, Self::Error> {
        if value.denominator == 0 {
            return Err(TheoryError::InvalidFraction {
                numerator: value.numerator,
                denominator: value.denominator,
            });
        }
        // moving the sign to the numerator up front keeps the reduction from
        // negating i64::MIN
        let (numerator, denominator) = if value.denominator < 0 {
            let overflow = || TheoryError::Overflow(format!("sign of {}", value));
            (
                value.numerator.checked_neg().ok_or_else(overflow)?,
                value.denominator.checked_neg().ok_or_else(overflow)?,
            )
        } else {
            (value.numerator, value.denominator)
        };
        Ok(Rational64::new(numerator, denominator))
    }
}

impl From<Rational64> for Fraction {
    fn from(value: Rational64) -> Self {
        Fraction {
            numerator: *value.numer(),
            denominator: *value.denom(),
        }
    }
}
