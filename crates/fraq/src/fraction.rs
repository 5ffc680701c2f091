use crate::error::FractionError;

mod arith;
mod cmp;
mod text;


/// Fixed precision factor: float interop rounds to three decimal digits.
pub(crate) const FACTOR: f64 = 1000.0;

pub(crate) fn round_to_factor(value: f64) -> f64 {
    (value * FACTOR).round() / FACTOR
}

/// A ratio of two `i32` values in canonical form: lowest terms, denominator
/// strictly positive, sign carried by the numerator, zero stored as `0/1`.
///
/// Equality and ordering compare at the fixed three-decimal resolution (see
/// the `PartialEq`/`PartialOrd` impls), so the type is deliberately not `Eq`,
/// `Ord`, or `Hash`.
#[derive(Debug, Clone, Copy)]
pub struct Fraction {
    numer: i32,
    denom: i32,
}

impl Fraction {
    pub const ZERO: Fraction = Fraction { numer: 0, denom: 1 };
    pub const ONE: Fraction = Fraction { numer: 1, denom: 1 };

    /// Builds `numer/denom` reduced to canonical form.
    ///
    /// Fails with `DivideByZero` when `denom == 0`, and with `Overflow` for
    /// the one pair whose canonical numerator does not fit (`i32::MIN` over a
    /// negative denominator).
    pub fn new(numer: i32, denom: i32) -> Result<Self, FractionError> {
        if denom == 0 {
            return Err(FractionError::DivideByZero);
        }
        Self::reduced(i64::from(numer), i64::from(denom))
    }

    pub const fn from_integer(numer: i32) -> Self {
        Fraction { numer, denom: 1 }
    }

    /// Lossy conversion: `value` is rounded to the nearest thousandth and the
    /// rounded count of thousandths is reduced over 1000. Three decimal
    /// digits of precision are retained; everything beyond is discarded.
    ///
    /// Fails with `Overflow` when the scaled value is not finite or falls
    /// outside the `i32` range.
    pub fn from_f64(value: f64) -> Result<Self, FractionError> {
        let scaled = (value * FACTOR).round();
        if !scaled.is_finite() || scaled < i32::MIN as f64 || scaled > i32::MAX as f64 {
            return Err(FractionError::Overflow);
        }
        Self::reduced(scaled as i64, FACTOR as i64)
    }

    pub fn numerator(&self) -> i32 {
        self.numer
    }

    pub fn denominator(&self) -> i32 {
        self.denom
    }

    pub fn to_f64(&self) -> f64 {
        f64::from(self.numer) / f64::from(self.denom)
    }

    /// Truncating quotient of numerator by denominator.
    pub fn to_i32(&self) -> i32 {
        self.numer / self.denom
    }

    /// Narrows a widened arithmetic result back to `i32`, then reduces.
    /// The overflow check runs on the raw cross products, before reduction.
    pub(crate) fn narrowed(numer: i64, denom: i64) -> Result<Self, FractionError> {
        if i32::try_from(numer).is_err() || i32::try_from(denom).is_err() {
            return Err(FractionError::Overflow);
        }
        Self::reduced(numer, denom)
    }

    // Callers guarantee denom != 0. Sign folding and reduction stay in the
    // widened type so that pairs like (i32::MIN, -1) surface Overflow
    // instead of wrapping.
    pub(crate) fn reduced(numer: i64, denom: i64) -> Result<Self, FractionError> {
        debug_assert!(denom != 0);
        if numer == 0 {
            return Ok(Self::ZERO);
        }
        let negative = (numer < 0) != (denom < 0);
        let g = gcd(numer.unsigned_abs(), denom.unsigned_abs());
        let n = numer.unsigned_abs() / g;
        let d = denom.unsigned_abs() / g;
        let max = i32::MAX as u64;
        if d > max || n > max + u64::from(negative) {
            return Err(FractionError::Overflow);
        }
        let numer = if negative { (-(n as i64)) as i32 } else { n as i32 };
        Ok(Fraction {
            numer,
            denom: d as i32,
        })
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<i32> for Fraction {
    fn from(numer: i32) -> Self {
        Self::from_integer(numer)
    }
}

impl TryFrom<f64> for Fraction {
    type Error = FractionError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_f64(value)
    }
}

impl TryFrom<f32> for Fraction {
    type Error = FractionError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::from_f64(f64::from(value))
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let next = a % b;
        a = b;
        b = next;
    }
    a
}
