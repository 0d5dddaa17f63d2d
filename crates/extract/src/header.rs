//! Mapping row labels to nutrient keys, and recovering units from labels
//! for cells that did not declare one.

use crate::rules::{CellUnit, HEADER_RULES, SLASH_RECOVERY_RULES, UNITLESS_RECOVERY_RULES};
use nutritable_model::NutrientKey;

/// Map a row label to a nutrient key and a conversion factor, e.g.
/// "Salt" → `(Sodium, 0.4)`. First matching rule wins; unmatched labels
/// return `None`.
pub(crate) fn map_row_label(label: &str) -> Option<(NutrientKey, f64)> {
    HEADER_RULES
        .iter()
        .find(|rule| rule.pattern.is_match(label))
        .map(|rule| (rule.key, rule.factor))
}

/// Recover a concrete unit for a unitless cell from its row label, e.g.
/// "Sodium (mg)" → milligrams or "Energy kJ" → kilojoules.
pub(crate) fn recover_unit(label: &str) -> Option<(CellUnit, f64)> {
    UNITLESS_RECOVERY_RULES
        .iter()
        .find(|rule| rule.pattern.is_match(label))
        .map(|rule| (rule.unit, rule.factor))
}

/// Recover which side of an "a/b" energy pair the numerator was, from row
/// labels like "Energy kJ/kcal".
pub(crate) fn recover_slash_unit(label: &str) -> Option<(CellUnit, f64)> {
    SLASH_RECOVERY_RULES
        .iter()
        .find(|rule| rule.pattern.is_match(label))
        .map(|rule| (rule.unit, rule.factor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{KJ_TO_KCAL, SALT_TO_SODIUM};

    #[test]
    fn test_basic_labels() {
        assert_eq!(map_row_label("Energy"), Some((NutrientKey::Energy, 1.0)));
        assert_eq!(map_row_label("Protein"), Some((NutrientKey::Protein, 1.0)));
        assert_eq!(
            map_row_label("Carbohydrate"),
            Some((NutrientKey::Carbohydrate, 1.0))
        );
        assert_eq!(
            map_row_label("of which sugars"),
            Some((NutrientKey::TotalSugar, 1.0))
        );
    }

    #[test]
    fn test_salt_maps_to_sodium_with_factor() {
        assert_eq!(
            map_row_label("Salt"),
            Some((NutrientKey::Sodium, SALT_TO_SODIUM))
        );
        assert_eq!(map_row_label("Sodium"), Some((NutrientKey::Sodium, 1.0)));
    }

    #[test]
    fn test_fat_requires_anchor_or_qualifier() {
        assert_eq!(map_row_label("Fat"), Some((NutrientKey::Fat, 1.0)));
        assert_eq!(map_row_label("Total Fat"), Some((NutrientKey::Fat, 1.0)));
        assert_eq!(
            map_row_label("of which saturates"),
            Some((NutrientKey::SatFat, 1.0))
        );
    }

    #[test]
    fn test_vitamins() {
        assert_eq!(map_row_label("Vitamin D"), Some((NutrientKey::VitD, 1.0)));
        assert_eq!(map_row_label("Thiamin (B1)"), Some((NutrientKey::VitB1, 1.0)));
        assert_eq!(
            map_row_label("Riboflavin (B2)"),
            Some((NutrientKey::VitB2, 1.0))
        );
        assert_eq!(map_row_label("Niacin"), Some((NutrientKey::VitB3, 1.0)));
        assert_eq!(
            map_row_label("Folic acid"),
            Some((NutrientKey::VitB9, 1.0))
        );
    }

    #[test]
    fn test_unmapped_label() {
        assert_eq!(map_row_label("of which polyols"), None);
        assert_eq!(map_row_label(""), None);
    }

    #[test]
    fn test_recover_unit_from_parenthesized_marker() {
        assert_eq!(
            recover_unit("Potassium (mg)"),
            Some((CellUnit::Grams, 1e-3))
        );
        assert_eq!(recover_unit("Iodine (µg)"), Some((CellUnit::Grams, 1e-6)));
        assert_eq!(recover_unit("Selenium, ug"), Some((CellUnit::Grams, 1e-6)));
    }

    #[test]
    fn test_recover_unit_kj_before_kcal() {
        assert_eq!(recover_unit("Energy kJ"), Some((CellUnit::Kcal, KJ_TO_KCAL)));
        assert_eq!(recover_unit("Energy kcal"), Some((CellUnit::Kcal, 1.0)));
    }

    #[test]
    fn test_recover_unit_macro_nutrient_fallback() {
        assert_eq!(recover_unit("Protein"), Some((CellUnit::Grams, 1.0)));
        assert_eq!(
            recover_unit("Salt"),
            Some((CellUnit::Grams, SALT_TO_SODIUM))
        );
        assert_eq!(recover_unit("Vitamin C"), None);
    }

    #[test]
    fn test_recover_slash_unit_orderings() {
        assert_eq!(
            recover_slash_unit("Energy kJ/kcal"),
            Some((CellUnit::Kcal, KJ_TO_KCAL))
        );
        assert_eq!(
            recover_slash_unit("Energy kcal/kJ"),
            Some((CellUnit::Kcal, 1.0))
        );
        assert_eq!(
            recover_slash_unit("Energy kJ (kcal)"),
            Some((CellUnit::Kcal, KJ_TO_KCAL))
        );
        assert_eq!(recover_slash_unit("Energy"), None);
    }
}
