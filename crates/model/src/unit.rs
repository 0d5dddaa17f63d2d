use serde::{Deserialize, Serialize};
use std::fmt;

/// The physical measure a serving basis is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Measure {
    #[serde(rename = "g")]
    Grams,
    #[serde(rename = "ml")]
    Milliliters,
    #[serde(rename = "serving")]
    Serving,
}

impl Measure {
    /// The short form stored alongside persisted records.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Measure::Grams => "g",
            Measure::Milliliters => "ml",
            Measure::Serving => "serving",
        }
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The serving basis a [`crate::NutrientRecord`]'s values are expressed per,
/// e.g. `(g, 100)` for a per-100g record or `(serving, 2)` for a two-serving
/// pack.
///
/// The amount is always positive; extraction rejects tables that declare a
/// zero amount.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanonicalUnit {
    pub measure: Measure,
    pub amount: f64,
}

impl CanonicalUnit {
    #[must_use]
    pub fn new(measure: Measure, amount: f64) -> Self {
        Self { measure, amount }
    }
}

impl fmt::Display for CanonicalUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.measure)
    }
}
