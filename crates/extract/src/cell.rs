//! Parsing one data cell's free text into a numeric amount and a unit
//! marker.

use crate::rules::{parse_amount, CellUnit, CELL_RULES};

/// A parsed cell value. The amount has already been multiplied by the
/// matching rule's conversion factor, so concrete units are grams or
/// kilocalories; `Unitless`/`Slash` amounts await recovery against the row
/// label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct CellValue {
    pub unit: CellUnit,
    pub amount: f64,
}

/// Parse one cell. "Trace" wording short-circuits to a unitless zero; every
/// other cell runs through the cell-unit rules in order, first match wins.
/// Cells matching no rule contribute nothing.
pub(crate) fn parse_cell(text: &str) -> Option<CellValue> {
    if text.to_lowercase().contains("trace") {
        return Some(CellValue {
            unit: CellUnit::Unitless,
            amount: 0.0,
        });
    }

    for rule in CELL_RULES.iter() {
        let Some(caps) = rule.pattern.captures(text) else {
            continue;
        };
        let amount = caps.get(1).and_then(|m| parse_amount(m.as_str()))?;
        return Some(CellValue {
            unit: rule.unit,
            amount: amount * rule.factor,
        });
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(text: &str) -> CellValue {
        parse_cell(text).unwrap()
    }

    #[test]
    fn test_kcal() {
        assert_eq!(
            parsed("200kcal"),
            CellValue {
                unit: CellUnit::Kcal,
                amount: 200.0,
            }
        );
    }

    #[test]
    fn test_kj_converted_to_kcal() {
        let value = parsed("150kJ");
        assert_eq!(value.unit, CellUnit::Kcal);
        assert!((value.amount - 35.85).abs() < 1e-9);
    }

    #[test]
    fn test_gram_units() {
        assert_eq!(parsed("5g").amount, 5.0);
        assert_eq!(parsed("5 g").amount, 5.0);
        assert_eq!(parsed("12,5g").amount, 12.5);
        assert_eq!(parsed("300mg").amount, 300e-3);
        assert_eq!(parsed("5 µg").amount, 5e-6);
        assert_eq!(parsed("5g").unit, CellUnit::Grams);
    }

    #[test]
    fn test_less_than_prefix() {
        assert_eq!(parsed("<0.5g").amount, 0.5);
    }

    #[test]
    fn test_parenthesized_insert_between_number_and_unit() {
        assert_eq!(parsed("5 (approx.) g").amount, 5.0);
    }

    #[test]
    fn test_trace_is_unitless_zero() {
        for text in ["Trace", "trace", "TRACE amounts"] {
            assert_eq!(
                parsed(text),
                CellValue {
                    unit: CellUnit::Unitless,
                    amount: 0.0,
                }
            );
        }
    }

    #[test]
    fn test_bare_number_is_unitless() {
        let value = parsed("834");
        assert_eq!(value.unit, CellUnit::Unitless);
        assert_eq!(value.amount, 834.0);
    }

    #[test]
    fn test_slash_pair_keeps_numerator() {
        let value = parsed("834 / 200");
        assert_eq!(value.unit, CellUnit::Slash);
        assert_eq!(value.amount, 834.0);

        let value = parsed("834 (200)");
        assert_eq!(value.unit, CellUnit::Slash);
        assert_eq!(value.amount, 834.0);
    }

    #[test]
    fn test_unparsable_cell() {
        assert_eq!(parse_cell(""), None);
        assert_eq!(parse_cell("n/a"), None);
        assert_eq!(parse_cell("see pack"), None);
    }
}
