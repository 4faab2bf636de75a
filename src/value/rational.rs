//! Exact rational numbers in lowest terms.
//!
//! Every `Rational` satisfies `denominator > 0` and
//! `gcd(|numerator|, denominator) == 1`. Arithmetic is checked: an
//! intermediate that does not fit in `i64` after reduction is reported as
//! `ValueError::Overflow` instead of wrapping.
//!
//! ```
//! use hackenbush::value::Rational;
//!
//! let half = Rational::new(2, 4).unwrap();
//! assert_eq!(half.to_string(), "1/2");
//!
//! let total = Rational::sum([half, Rational::new(-3, 6).unwrap()]).unwrap();
//! assert_eq!(total, Rational::ZERO);
//! ```

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::core::{ValueError, ZeroDenominatorPolicy};

/// Numerator stored by the legacy zero-denominator sentinel.
pub const LEGACY_SENTINEL: i64 = i32::MAX as i64;

/// Greatest common divisor by iterative Euclid. `gcd(x, 0) == x`.
#[must_use]
pub fn gcd(x: u128, y: u128) -> u128 {
    let (mut a, mut b) = if x >= y { (x, y) } else { (y, x) };
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Exact rational value in lowest terms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRational", into = "RawRational")]
pub struct Rational {
    num: i64,
    den: i64,
}

#[derive(Serialize, Deserialize)]
struct RawRational {
    num: i64,
    den: i64,
}

impl TryFrom<RawRational> for Rational {
    type Error = ValueError;

    fn try_from(raw: RawRational) -> Result<Self, Self::Error> {
        Rational::new(raw.num, raw.den)
    }
}

impl From<Rational> for RawRational {
    fn from(value: Rational) -> Self {
        RawRational {
            num: value.num,
            den: value.den,
        }
    }
}

impl Rational {
    pub const ZERO: Rational = Rational { num: 0, den: 1 };
    pub const ONE: Rational = Rational { num: 1, den: 1 };
    pub const MINUS_ONE: Rational = Rational { num: -1, den: 1 };

    /// Create `num / den` reduced to lowest terms with a positive denominator.
    pub fn new(num: i64, den: i64) -> Result<Self, ValueError> {
        Self::reduce(i128::from(num), i128::from(den))
    }

    /// The integer `n` as `n/1`.
    #[must_use]
    pub const fn integer(n: i64) -> Self {
        Self { num: n, den: 1 }
    }

    /// Sum a sequence of values, folding left to right.
    ///
    /// Each step combines the running total with the next value over the
    /// product of denominators and reduces. The empty sum is `0/1`.
    pub fn sum<I>(values: I) -> Result<Self, ValueError>
    where
        I: IntoIterator<Item = Rational>,
    {
        values
            .into_iter()
            .try_fold(Self::ZERO, |total, value| total.checked_add(value))
    }

    /// Replace this value with `num / den`, renormalized.
    ///
    /// A zero denominator is rejected and the value is left unchanged.
    pub fn update(&mut self, num: i64, den: i64) -> Result<(), ValueError> {
        *self = Self::new(num, den)?;
        Ok(())
    }

    /// Replace this value with `num / den` under a zero-denominator policy.
    ///
    /// With `LegacySentinel`, a zero denominator stores `i32::MAX / 1` when
    /// `num > 0` and `-i32::MAX / 1` otherwise.
    pub fn update_with(
        &mut self,
        num: i64,
        den: i64,
        policy: ZeroDenominatorPolicy,
    ) -> Result<(), ValueError> {
        match (den, policy) {
            (0, ZeroDenominatorPolicy::LegacySentinel) => {
                log::warn!("zero denominator in update({num}, 0), storing legacy sentinel");
                let num = if num > 0 { LEGACY_SENTINEL } else { -LEGACY_SENTINEL };
                *self = Self::integer(num);
                Ok(())
            }
            _ => self.update(num, den),
        }
    }

    #[inline]
    #[must_use]
    pub const fn numerator(&self) -> i64 {
        self.num
    }

    /// Always positive.
    #[inline]
    #[must_use]
    pub const fn denominator(&self) -> i64 {
        self.den
    }

    /// Canonical `"numerator/denominator"` text.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    /// `self + other`, reduced.
    pub fn checked_add(self, other: Rational) -> Result<Self, ValueError> {
        let num = (i128::from(self.num) * i128::from(other.den))
            .checked_add(i128::from(other.num) * i128::from(self.den))
            .ok_or(ValueError::Overflow)?;
        let den = i128::from(self.den) * i128::from(other.den);
        Self::reduce(num, den)
    }

    /// `(self - n) / 2^k`, reduced.
    ///
    /// The unreduced denominator is `2^k * denominator`.
    pub fn shift_and_halve(self, n: i64, k: u32) -> Result<Self, ValueError> {
        let scale = 2i128.checked_pow(k).ok_or(ValueError::Overflow)?;
        let num = i128::from(self.num) - i128::from(n) * i128::from(self.den);
        let den = scale
            .checked_mul(i128::from(self.den))
            .ok_or(ValueError::Overflow)?;
        Self::reduce(num, den)
    }

    /// `-self`.
    pub fn checked_neg(self) -> Result<Self, ValueError> {
        let num = self.num.checked_neg().ok_or(ValueError::Overflow)?;
        Ok(Self { num, den: self.den })
    }

    /// Compare against the integer `n`.
    #[must_use]
    pub fn cmp_integer(&self, n: i64) -> Ordering {
        i128::from(self.num).cmp(&(i128::from(n) * i128::from(self.den)))
    }

    fn reduce(mut num: i128, mut den: i128) -> Result<Self, ValueError> {
        if den == 0 {
            return Err(ValueError::ZeroDenominator);
        }
        if den < 0 {
            num = -num;
            den = -den;
        }
        let divisor = gcd(num.unsigned_abs(), den.unsigned_abs());
        // den > 0, so divisor >= 1
        let divisor = divisor as i128;
        let num = i64::try_from(num / divisor).map_err(|_| ValueError::Overflow)?;
        let den = i64::try_from(den / divisor).map_err(|_| ValueError::Overflow)?;
        Ok(Self { num, den })
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = i128::from(self.num) * i128::from(other.den);
        let rhs = i128::from(other.num) * i128::from(self.den);
        lhs.cmp(&rhs)
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Rational {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}
