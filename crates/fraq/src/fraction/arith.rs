use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::{One, Zero};

use super::{round_to_factor, Fraction};
use crate::error::FractionError;

impl Fraction {
    /// `a/b + c/d = (a*d + c*b) / (b*d)`, cross products in `i64`.
    pub fn checked_add(self, other: Fraction) -> Result<Fraction, FractionError> {
        let numer = i64::from(self.numer) * i64::from(other.denom)
            + i64::from(other.numer) * i64::from(self.denom);
        let denom = i64::from(self.denom) * i64::from(other.denom);
        Fraction::narrowed(numer, denom)
    }

    pub fn checked_sub(self, other: Fraction) -> Result<Fraction, FractionError> {
        let numer = i64::from(self.numer) * i64::from(other.denom)
            - i64::from(other.numer) * i64::from(self.denom);
        let denom = i64::from(self.denom) * i64::from(other.denom);
        Fraction::narrowed(numer, denom)
    }

    pub fn checked_mul(self, other: Fraction) -> Result<Fraction, FractionError> {
        let numer = i64::from(self.numer) * i64::from(other.numer);
        let denom = i64::from(self.denom) * i64::from(other.denom);
        Fraction::narrowed(numer, denom)
    }

    /// Fails with `DivideByZero` when `other` is zero; the check runs before
    /// any cross product is formed.
    pub fn checked_div(self, other: Fraction) -> Result<Fraction, FractionError> {
        if other.numer == 0 {
            return Err(FractionError::DivideByZero);
        }
        let numer = i64::from(self.numer) * i64::from(other.denom);
        let denom = i64::from(self.denom) * i64::from(other.numer);
        Fraction::narrowed(numer, denom)
    }

    pub fn checked_neg(self) -> Result<Fraction, FractionError> {
        let numer = self.numer.checked_neg().ok_or(FractionError::Overflow)?;
        Ok(Fraction {
            numer,
            denom: self.denom,
        })
    }

    /// Adds one denominator-unit and returns the new value (prefix
    /// increment). The receiver is left unchanged on overflow.
    pub fn inc(&mut self) -> Result<Fraction, FractionError> {
        let next = Fraction::reduced(
            i64::from(self.numer) + i64::from(self.denom),
            i64::from(self.denom),
        )?;
        *self = next;
        Ok(next)
    }

    pub fn dec(&mut self) -> Result<Fraction, FractionError> {
        let next = Fraction::reduced(
            i64::from(self.numer) - i64::from(self.denom),
            i64::from(self.denom),
        )?;
        *self = next;
        Ok(next)
    }

    /// Postfix increment: returns the value held before the mutation. The
    /// snapshot is taken up front, so it can never observe the updated state.
    pub fn inc_post(&mut self) -> Result<Fraction, FractionError> {
        let before = *self;
        self.inc()?;
        Ok(before)
    }

    pub fn dec_post(&mut self) -> Result<Fraction, FractionError> {
        let before = *self;
        self.dec()?;
        Ok(before)
    }

    /// Scalar arithmetic rounds both operands to the precision factor,
    /// computes in `f64`, rounds the result at the same resolution, and
    /// rebuilds a fraction from it. Keeps the float path aligned with the
    /// fraction/fraction path to three decimal digits.
    pub fn add_f64(self, other: f64) -> Result<Fraction, FractionError> {
        let lhs = round_to_factor(self.to_f64());
        let rhs = round_to_factor(other);
        Fraction::from_f64(round_to_factor(lhs + rhs))
    }

    pub fn sub_f64(self, other: f64) -> Result<Fraction, FractionError> {
        let lhs = round_to_factor(self.to_f64());
        let rhs = round_to_factor(other);
        Fraction::from_f64(round_to_factor(lhs - rhs))
    }

    pub fn mul_f64(self, other: f64) -> Result<Fraction, FractionError> {
        let lhs = round_to_factor(self.to_f64());
        let rhs = round_to_factor(other);
        Fraction::from_f64(round_to_factor(lhs * rhs))
    }

    /// Fails with `DivideByZero` when the scalar divisor rounds to zero at
    /// the precision factor.
    pub fn div_f64(self, other: f64) -> Result<Fraction, FractionError> {
        let rhs = round_to_factor(other);
        if rhs == 0.0 {
            return Err(FractionError::DivideByZero);
        }
        let lhs = round_to_factor(self.to_f64());
        Fraction::from_f64(round_to_factor(lhs / rhs))
    }

    /// `scalar - fraction`; kept separate from [`Fraction::sub_f64`] because
    /// subtraction does not commute.
    pub fn f64_sub(scalar: f64, fraction: Fraction) -> Result<Fraction, FractionError> {
        let lhs = round_to_factor(scalar);
        let rhs = round_to_factor(fraction.to_f64());
        Fraction::from_f64(round_to_factor(lhs - rhs))
    }

    /// `scalar / fraction`; fails with `DivideByZero` when the fraction is
    /// zero.
    pub fn f64_div(scalar: f64, fraction: Fraction) -> Result<Fraction, FractionError> {
        if fraction.numer == 0 {
            return Err(FractionError::DivideByZero);
        }
        let lhs = round_to_factor(scalar);
        let rhs = round_to_factor(fraction.to_f64());
        if rhs == 0.0 {
            return Err(FractionError::DivideByZero);
        }
        Fraction::from_f64(round_to_factor(lhs / rhs))
    }
}

fn expect_arith(result: Result<Fraction, FractionError>, op: &str) -> Fraction {
    match result {
        Ok(value) => value,
        Err(err) => panic!("fraction {op}: {err}"),
    }
}

// Operator sugar over the checked operations. Each impl panics where the
// checked form would return an error; callers that need to observe failures
// use the `checked_*` / `*_f64` methods directly.

impl Add for Fraction {
    type Output = Fraction;

    fn add(self, other: Fraction) -> Fraction {
        expect_arith(self.checked_add(other), "addition")
    }
}

impl Sub for Fraction {
    type Output = Fraction;

    fn sub(self, other: Fraction) -> Fraction {
        expect_arith(self.checked_sub(other), "subtraction")
    }
}

impl Mul for Fraction {
    type Output = Fraction;

    fn mul(self, other: Fraction) -> Fraction {
        expect_arith(self.checked_mul(other), "multiplication")
    }
}

impl Div for Fraction {
    type Output = Fraction;

    fn div(self, other: Fraction) -> Fraction {
        expect_arith(self.checked_div(other), "division")
    }
}

impl Neg for Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        expect_arith(self.checked_neg(), "negation")
    }
}

impl Add<f64> for Fraction {
    type Output = Fraction;

    fn add(self, other: f64) -> Fraction {
        expect_arith(self.add_f64(other), "addition")
    }
}

impl Sub<f64> for Fraction {
    type Output = Fraction;

    fn sub(self, other: f64) -> Fraction {
        expect_arith(self.sub_f64(other), "subtraction")
    }
}

impl Mul<f64> for Fraction {
    type Output = Fraction;

    fn mul(self, other: f64) -> Fraction {
        expect_arith(self.mul_f64(other), "multiplication")
    }
}

impl Div<f64> for Fraction {
    type Output = Fraction;

    fn div(self, other: f64) -> Fraction {
        expect_arith(self.div_f64(other), "division")
    }
}

impl Add<Fraction> for f64 {
    type Output = Fraction;

    fn add(self, other: Fraction) -> Fraction {
        expect_arith(other.add_f64(self), "addition")
    }
}

impl Sub<Fraction> for f64 {
    type Output = Fraction;

    fn sub(self, other: Fraction) -> Fraction {
        expect_arith(Fraction::f64_sub(self, other), "subtraction")
    }
}

impl Mul<Fraction> for f64 {
    type Output = Fraction;

    fn mul(self, other: Fraction) -> Fraction {
        expect_arith(other.mul_f64(self), "multiplication")
    }
}

impl Div<Fraction> for f64 {
    type Output = Fraction;

    fn div(self, other: Fraction) -> Fraction {
        expect_arith(Fraction::f64_div(self, other), "division")
    }
}

impl AddAssign for Fraction {
    fn add_assign(&mut self, other: Fraction) {
        *self = *self + other;
    }
}

impl SubAssign for Fraction {
    fn sub_assign(&mut self, other: Fraction) {
        *self = *self - other;
    }
}

impl MulAssign for Fraction {
    fn mul_assign(&mut self, other: Fraction) {
        *self = *self * other;
    }
}

impl DivAssign for Fraction {
    fn div_assign(&mut self, other: Fraction) {
        *self = *self / other;
    }
}

impl AddAssign<f64> for Fraction {
    fn add_assign(&mut self, other: f64) {
        *self = *self + other;
    }
}

impl SubAssign<f64> for Fraction {
    fn sub_assign(&mut self, other: f64) {
        *self = *self - other;
    }
}

impl MulAssign<f64> for Fraction {
    fn mul_assign(&mut self, other: f64) {
        *self = *self * other;
    }
}

impl DivAssign<f64> for Fraction {
    fn div_assign(&mut self, other: f64) {
        *self = *self / other;
    }
}

impl Zero for Fraction {
    fn zero() -> Self {
        Fraction::ZERO
    }

    fn is_zero(&self) -> bool {
        self.numer == 0
    }
}

impl One for Fraction {
    fn one() -> Self {
        Fraction::ONE
    }
}
