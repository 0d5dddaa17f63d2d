//! Column classification: deciding what each value column of a table is
//! measured in and which single column to read.

use crate::rules::{parse_amount, COLUMN_RULES};
use nutritable_model::Measure;

/// The classified kind of one value column, with the amount declared in its
/// header (e.g. `Grams(100.0)` for "per 100g").
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnKind {
    Grams(f64),
    Milliliters(f64),
    Servings(f64),
}

impl ColumnKind {
    #[must_use]
    pub fn measure(self) -> Measure {
        match self {
            ColumnKind::Grams(_) => Measure::Grams,
            ColumnKind::Milliliters(_) => Measure::Milliliters,
            ColumnKind::Servings(_) => Measure::Serving,
        }
    }

    #[must_use]
    pub fn amount(self) -> f64 {
        match self {
            ColumnKind::Grams(amount)
            | ColumnKind::Milliliters(amount)
            | ColumnKind::Servings(amount) => amount,
        }
    }
}

/// Classify one column-header text. Rules are tried in order and the first
/// match wins; a rule without a numeric capture declares an amount of 1.
#[must_use]
pub(crate) fn classify_header(text: &str) -> Option<ColumnKind> {
    for rule in COLUMN_RULES.iter() {
        let Some(caps) = rule.pattern.captures(text) else {
            continue;
        };
        let amount = caps
            .get(1)
            .and_then(|m| parse_amount(m.as_str()))
            .unwrap_or(1.0);
        return Some(match rule.measure {
            Measure::Grams => ColumnKind::Grams(amount),
            Measure::Milliliters => ColumnKind::Milliliters(amount),
            Measure::Serving => ColumnKind::Servings(amount),
        });
    }
    None
}

/// Classify every value column of a table. Unmatched headers stay `None` so
/// the caller can still check row widths against the full column count.
#[must_use]
pub(crate) fn classify_columns(headers: &[String]) -> Vec<Option<ColumnKind>> {
    headers.iter().map(|h| classify_header(h)).collect()
}

/// Select the column to read values from: the first grams column, else the
/// first milliliters column, else the first servings column. Ties within a
/// kind go to the leftmost occurrence.
#[must_use]
pub(crate) fn best_column(cols: &[Option<ColumnKind>]) -> Option<usize> {
    let first_of = |want: Measure| {
        cols.iter()
            .position(|c| c.map(ColumnKind::measure) == Some(want))
    };
    first_of(Measure::Grams)
        .or_else(|| first_of(Measure::Milliliters))
        .or_else(|| first_of(Measure::Serving))
}
