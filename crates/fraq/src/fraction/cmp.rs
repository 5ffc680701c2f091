use std::cmp::Ordering;

use super::{round_to_factor, Fraction};

// Equality and ordering compare float magnitudes rounded at the precision
// factor, the same resolution the scalar arithmetic uses. Two fractions that
// differ only beyond the third decimal digit compare equal.

impl PartialEq for Fraction {
    fn eq(&self, other: &Self) -> bool {
        round_to_factor(self.to_f64()) == round_to_factor(other.to_f64())
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        round_to_factor(self.to_f64()).partial_cmp(&round_to_factor(other.to_f64()))
    }
}

impl PartialEq<f64> for Fraction {
    fn eq(&self, other: &f64) -> bool {
        round_to_factor(self.to_f64()) == round_to_factor(*other)
    }
}

impl PartialEq<Fraction> for f64 {
    fn eq(&self, other: &Fraction) -> bool {
        round_to_factor(*self) == round_to_factor(other.to_f64())
    }
}

impl PartialOrd<f64> for Fraction {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        round_to_factor(self.to_f64()).partial_cmp(&round_to_factor(*other))
    }
}

impl PartialOrd<Fraction> for f64 {
    fn partial_cmp(&self, other: &Fraction) -> Option<Ordering> {
        round_to_factor(*self).partial_cmp(&round_to_factor(other.to_f64()))
    }
}
