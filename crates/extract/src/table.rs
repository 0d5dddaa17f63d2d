//! Per-table extraction: reading the selected column of a flattened table
//! into an in-progress nutrient record.

use crate::cell::parse_cell;
use crate::column::{best_column, classify_columns};
use crate::header::{map_row_label, recover_slash_unit, recover_unit};
use crate::html::RawTable;
use crate::rules::CellUnit;
use nutritable_model::{Measure, NutrientKey, NutrientRecord};

/// What a table contributes to the document-level unit reconciliation once
/// at least one of its rows produced a value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct TableContribution {
    pub measure: Measure,
    pub amount: f64,
}

/// Extract one table into `record`.
///
/// Returns the table's serving-basis contribution, or `None` when the table
/// was unusable (no classifiable column, zero declared amount) or produced
/// no values. Values land in `record` normalized onto a per-100 basis for
/// gram/milliliter tables; serving tables keep their declared serving
/// count.
pub(crate) fn extract_table(
    table: &RawTable,
    record: &mut NutrientRecord,
) -> Option<TableContribution> {
    let cols = classify_columns(&table.columns);
    let col_idx = best_column(&cols)?;
    let kind = cols[col_idx]?;

    if kind.amount() == 0.0 {
        tracing::debug!(header = %table.columns[col_idx], "column declares zero amount, rejecting table");
        return None;
    }

    let (unit_scale, unit_amount) = match kind.measure() {
        Measure::Grams | Measure::Milliliters => (kind.amount() / 100.0, 100.0),
        Measure::Serving => (1.0, kind.amount()),
    };

    let mut set_any = false;

    for row in &table.rows {
        // Rows misaligned with the column grid or missing a label cannot be
        // attributed reliably.
        if row.cells.len() != cols.len() || row.label.is_empty() {
            continue;
        }

        let Some(cell) = parse_cell(&row.cells[col_idx]) else {
            continue;
        };
        let mut unit = cell.unit;
        let mut amount = cell.amount;

        let (key, factor) = match map_row_label(&row.label) {
            Some(mapping) => mapping,
            // A kcal value under an unrecognized label is still an energy
            // reading.
            None if unit == CellUnit::Kcal => (NutrientKey::Energy, 1.0),
            None => continue,
        };
        amount *= factor;

        if unit == CellUnit::Unitless {
            if let Some((recovered, conv)) = recover_unit(&row.label) {
                unit = recovered;
                amount *= conv;
            } else if amount == 0.0 {
                unit = CellUnit::Grams;
            } else {
                continue;
            }
        }

        if unit == CellUnit::Slash {
            if let Some((recovered, conv)) = recover_slash_unit(&row.label) {
                unit = recovered;
                amount *= conv;
            } else if amount == 0.0 {
                unit = CellUnit::Grams;
            } else {
                continue;
            }
        }

        // The rule tables only ever resolve to grams or kcal; skip the row
        // rather than poison the table if that ever stops holding.
        if !matches!(unit, CellUnit::Grams | CellUnit::Kcal) {
            tracing::debug!(label = %row.label, ?unit, "row resolved to a non-storable unit, skipping");
            continue;
        }

        record.set(key, amount / unit_scale);
        set_any = true;
    }

    set_any.then_some(TableContribution {
        measure: kind.measure(),
        amount: unit_amount,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::TableRow;

    fn table(columns: &[&str], rows: &[(&str, &[&str])]) -> RawTable {
        RawTable {
            columns: columns.iter().map(|c| (*c).to_string()).collect(),
            rows: rows
                .iter()
                .map(|(label, cells)| TableRow {
                    label: (*label).to_string(),
                    cells: cells.iter().map(|c| (*c).to_string()).collect(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_per_100g_table() {
        let table = table(
            &["per 100g", "per pack (250g)"],
            &[
                ("Energy", &["200kcal", "500kcal"]),
                ("Protein", &["5g", "12.5g"]),
            ],
        );
        let mut record = NutrientRecord::new();
        let contribution = extract_table(&table, &mut record).unwrap();

        assert_eq!(contribution.measure, Measure::Grams);
        assert_eq!(contribution.amount, 100.0);
        assert_eq!(record.get(NutrientKey::Energy), Some(200.0));
        assert_eq!(record.get(NutrientKey::Protein), Some(5.0));
    }

    #[test]
    fn test_per_250g_table_rescales_to_100() {
        let table = table(&["per 250g"], &[("Protein", &["10g"])]);
        let mut record = NutrientRecord::new();
        let contribution = extract_table(&table, &mut record).unwrap();

        assert_eq!(contribution.amount, 100.0);
        assert_eq!(record.get(NutrientKey::Protein), Some(4.0));
    }

    #[test]
    fn test_serving_table_not_rescaled() {
        let table = table(&["per 2 tablets"], &[("Vitamin C", &["80mg"])]);
        let mut record = NutrientRecord::new();
        let contribution = extract_table(&table, &mut record).unwrap();

        assert_eq!(contribution.measure, Measure::Serving);
        assert_eq!(contribution.amount, 2.0);
        assert_eq!(record.get(NutrientKey::VitC), Some(80e-3));
    }

    #[test]
    fn test_salt_converted_to_sodium() {
        let table = table(&["per 100g"], &[("Salt", &["2.5g"])]);
        let mut record = NutrientRecord::new();
        extract_table(&table, &mut record).unwrap();
        assert_eq!(record.get(NutrientKey::Sodium), Some(1.0));
    }

    #[test]
    fn test_unmapped_kcal_row_falls_back_to_energy() {
        let table = table(&["per 100g"], &[("Typical values", &["150kcal"])]);
        let mut record = NutrientRecord::new();
        extract_table(&table, &mut record).unwrap();
        assert_eq!(record.get(NutrientKey::Energy), Some(150.0));
    }

    #[test]
    fn test_unmapped_non_kcal_row_skipped() {
        let table = table(
            &["per 100g"],
            &[("of which polyols", &["3g"]), ("Protein", &["5g"])],
        );
        let mut record = NutrientRecord::new();
        extract_table(&table, &mut record).unwrap();
        assert!(record.get(NutrientKey::Protein).is_some());
        assert_eq!(record.iter_set().count(), 1);
    }

    #[test]
    fn test_misaligned_row_skipped() {
        let table = table(
            &["per 100g", "per serving"],
            &[("Protein", &["5g"]), ("Fat", &["2g", "4g"])],
        );
        let mut record = NutrientRecord::new();
        extract_table(&table, &mut record).unwrap();
        assert_eq!(record.get(NutrientKey::Protein), None);
        assert_eq!(record.get(NutrientKey::Fat), Some(2.0));
    }

    #[test]
    fn test_trace_stores_zero() {
        let table = table(&["per 100g"], &[("Salt", &["Trace"])]);
        let mut record = NutrientRecord::new();
        extract_table(&table, &mut record).unwrap();
        assert_eq!(record.get(NutrientKey::Sodium), Some(0.0));
    }

    #[test]
    fn test_unitless_recovery_from_label() {
        let table = table(&["per 100g"], &[("Potassium (mg)", &["300"])]);
        let mut record = NutrientRecord::new();
        extract_table(&table, &mut record).unwrap();
        assert_eq!(record.get(NutrientKey::Potassium), Some(300e-3));
    }

    #[test]
    fn test_unitless_without_recovery_skipped() {
        let table = table(
            &["per 100g"],
            &[("Vitamin C", &["80"]), ("Protein", &["5g"])],
        );
        let mut record = NutrientRecord::new();
        extract_table(&table, &mut record).unwrap();
        assert_eq!(record.get(NutrientKey::VitC), None);
        assert_eq!(record.get(NutrientKey::Protein), Some(5.0));
    }

    #[test]
    fn test_slash_recovery_from_label() {
        let table = table(&["per 100g"], &[("Energy kJ/kcal", &["834/200"])]);
        let mut record = NutrientRecord::new();
        extract_table(&table, &mut record).unwrap();
        let energy = record.get(NutrientKey::Energy).unwrap();
        assert!((energy - 834.0 * 0.239).abs() < 1e-9);
    }

    #[test]
    fn test_slash_without_recovery_skipped() {
        let table = table(&["per 100g"], &[("Energy", &["834/200"])]);
        let mut record = NutrientRecord::new();
        assert_eq!(extract_table(&table, &mut record), None);
        assert!(record.is_empty());
    }

    #[test]
    fn test_no_classifiable_column() {
        let table = table(&["% RI", "RI*"], &[("Protein", &["5g", "6g"])]);
        let mut record = NutrientRecord::new();
        assert_eq!(extract_table(&table, &mut record), None);
    }

    #[test]
    fn test_zero_amount_column_rejected() {
        let table = table(&["per 0g"], &[("Protein", &["5g"])]);
        let mut record = NutrientRecord::new();
        assert_eq!(extract_table(&table, &mut record), None);
    }

    #[test]
    fn test_contributes_nothing_without_parsable_rows() {
        let table = table(&["per 100g"], &[("Protein", &["see pack"])]);
        let mut record = NutrientRecord::new();
        assert_eq!(extract_table(&table, &mut record), None);
        assert!(record.is_empty());
    }

    #[test]
    fn test_micro_unit_conversion() {
        let table = table(&["per 100g"], &[("Vitamin D", &["5 µg"])]);
        let mut record = NutrientRecord::new();
        extract_table(&table, &mut record).unwrap();
        assert_eq!(record.get(NutrientKey::VitD), Some(5e-6));
    }
}
