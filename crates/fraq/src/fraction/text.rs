use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::Fraction;
use crate::error::FractionError;

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numer, self.denom)
    }
}

impl FromStr for Fraction {
    type Err = FractionError;

    /// Accepts `"n/d"` or two whitespace-separated integers. A missing
    /// second integer, an unparsable token, or a zero denominator is
    /// `InvalidInput`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let (numer, denom) = match text.split_once('/') {
            Some((lhs, rhs)) => (lhs.trim(), rhs.trim()),
            None => {
                let mut parts = text.split_whitespace();
                match (parts.next(), parts.next(), parts.next()) {
                    (Some(lhs), Some(rhs), None) => (lhs, rhs),
                    _ => return Err(FractionError::InvalidInput),
                }
            }
        };
        let numer: i32 = numer.parse().map_err(|_| FractionError::InvalidInput)?;
        let denom: i32 = denom.parse().map_err(|_| FractionError::InvalidInput)?;
        if denom == 0 {
            return Err(FractionError::InvalidInput);
        }
        Fraction::new(numer, denom)
    }
}

// Serialized as the canonical "n/d" string. A derived form would admit
// unreduced or zero-denominator states on deserialization; routing through
// `FromStr` keeps the invariant.

impl Serialize for Fraction {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Fraction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
