//! Static rule tables driving extraction.
//!
//! Every table is an ordered list evaluated first-match-wins; the order is
//! load-bearing (e.g. "salt" must match before the generic "sodium" rule,
//! and kJ before kcal in the recovery lexicon would invert conversions if
//! swapped). Keep them as literal sequences, never maps.

use lazy_static::lazy_static;
use nutritable_model::{Measure, NutrientKey};
use regex::Regex;

/// Conversion factor from kilojoules to kilocalories.
pub(crate) const KJ_TO_KCAL: f64 = 0.239;

/// Conversion factor from salt mass to sodium mass.
pub(crate) const SALT_TO_SODIUM: f64 = 0.4;

/// Words recognized as denoting a per-item serving column.
const SERVING_SYNONYMS: &str =
    "serving|capsule|tablet|portion|cake|sachet|pastille|pie|softie|gummy|caplet";

/// A decimal number, accepting either `.` or `,` as the separator.
const FLOAT: &str = r"\d+(?:(?:\.|,)\d+)?";

/// Optional parenthesized insert between a number and its unit,
/// e.g. "5 (approx.) g".
const UNIT_SKIP: &str = r"(?:\s*\(.+\))?\s*";

/// The unit marker attached to a parsed cell value.
///
/// `Unitless` and `Slash` are provisional: the table extractor must resolve
/// them against the row label before a value may be stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CellUnit {
    Kcal,
    Grams,
    Unitless,
    Slash,
}

pub(crate) struct ColumnRule {
    pub pattern: Regex,
    pub measure: Measure,
}

pub(crate) struct CellRule {
    pub pattern: Regex,
    pub unit: CellUnit,
    pub factor: f64,
}

pub(crate) struct HeaderRule {
    pub pattern: Regex,
    pub key: NutrientKey,
    pub factor: f64,
}

pub(crate) struct UnitRule {
    pub pattern: Regex,
    pub unit: CellUnit,
    pub factor: f64,
}

fn rule(pattern: &str) -> Regex {
    Regex::new(&format!("(?i){pattern}")).expect("valid rule pattern")
}

lazy_static! {
    /// Column-header classification rules. Group 1, when present, captures
    /// the declared amount; rules without a capture default to 1.
    pub(crate) static ref COLUMN_RULES: Vec<ColumnRule> = vec![
        ColumnRule {
            pattern: rule(&format!(r"({FLOAT})\s*ml")),
            measure: Measure::Milliliters,
        },
        ColumnRule {
            pattern: rule(&format!(r"({FLOAT})\s*g")),
            measure: Measure::Grams,
        },
        // Denominator form, e.g. "½ pot /150g" reduced to "/150".
        ColumnRule {
            pattern: rule(r"(?:^|[^\d])/\s*(\d+)"),
            measure: Measure::Grams,
        },
        ColumnRule {
            pattern: rule(&format!(r"(\d+)\s+(?:{SERVING_SYNONYMS})")),
            measure: Measure::Serving,
        },
        ColumnRule {
            pattern: rule(&format!(r"(?:{SERVING_SYNONYMS})")),
            measure: Measure::Serving,
        },
    ];

    /// Cell value formats. Group 1 captures the numeric token; the factor
    /// converts the parsed amount into grams or kilocalories.
    pub(crate) static ref CELL_RULES: Vec<CellRule> = vec![
        CellRule {
            pattern: rule(&format!(r"<?\s*({FLOAT}){UNIT_SKIP}kcal")),
            unit: CellUnit::Kcal,
            factor: 1.0,
        },
        CellRule {
            pattern: rule(&format!(r"<?\s*({FLOAT}){UNIT_SKIP}kj")),
            unit: CellUnit::Kcal,
            factor: KJ_TO_KCAL,
        },
        CellRule {
            pattern: rule(&format!(r"<?\s*({FLOAT}){UNIT_SKIP}g")),
            unit: CellUnit::Grams,
            factor: 1.0,
        },
        CellRule {
            pattern: rule(&format!(r"<?\s*({FLOAT}){UNIT_SKIP}mg")),
            unit: CellUnit::Grams,
            factor: 1e-3,
        },
        CellRule {
            pattern: rule(&format!(r"<?\s*({FLOAT}){UNIT_SKIP}µg")),
            unit: CellUnit::Grams,
            factor: 1e-6,
        },
        CellRule {
            pattern: rule(&format!(r"^<?\s*({FLOAT})$")),
            unit: CellUnit::Unitless,
            factor: 1.0,
        },
        // "200/834" style pairs: keep the numerator, resolve the unit later.
        CellRule {
            pattern: rule(&format!(r"^({FLOAT})\s*/\s*{FLOAT}")),
            unit: CellUnit::Slash,
            factor: 1.0,
        },
        CellRule {
            pattern: rule(&format!(r"^({FLOAT})\s*\(\s*{FLOAT}\s*\)")),
            unit: CellUnit::Slash,
            factor: 1.0,
        },
    ];

    /// Row-label to nutrient key rules. "salt" precedes "sodium" so salted
    /// labels convert by mass fraction instead of matching one-to-one.
    pub(crate) static ref HEADER_RULES: Vec<HeaderRule> = vec![
        header(r"energy|kj|kcal|calorie", NutrientKey::Energy, 1.0),
        header(r"protein", NutrientKey::Protein, 1.0),
        header(r"total fat|^fat", NutrientKey::Fat, 1.0),
        header(r"(^|[^\w])(saturates|saturated)", NutrientKey::SatFat, 1.0),
        header(r"cholesterol", NutrientKey::Cholesterol, 1.0),
        header(r"carbohydrate|carbs", NutrientKey::Carbohydrate, 1.0),
        header(r"sugar", NutrientKey::TotalSugar, 1.0),
        header(r"starch", NutrientKey::Starch, 1.0),
        header(r"fiber|fibre", NutrientKey::Fibre, 1.0),
        header(r"salt", NutrientKey::Sodium, SALT_TO_SODIUM),
        header(r"sodium", NutrientKey::Sodium, 1.0),
        header(r"potassium", NutrientKey::Potassium, 1.0),
        header(r"calcium", NutrientKey::Calcium, 1.0),
        header(r"magnesium", NutrientKey::Magnesium, 1.0),
        header(r"phosphorus|phosphorous", NutrientKey::Phosphorus, 1.0),
        header(r"iron", NutrientKey::Iron, 1.0),
        header(r"copper", NutrientKey::Copper, 1.0),
        header(r"zinc", NutrientKey::Zinc, 1.0),
        header(r"manganese", NutrientKey::Manganese, 1.0),
        header(r"selenium", NutrientKey::Selenium, 1.0),
        header(r"iodine", NutrientKey::Iodine, 1.0),
        header(r"vitamin a", NutrientKey::VitA, 1.0),
        header(r"vitamin c|ascorbic", NutrientKey::VitC, 1.0),
        header(r"vitamin d|d2", NutrientKey::VitD, 1.0),
        header(r"vitamin e", NutrientKey::VitE, 1.0),
        header(r"vitamin k", NutrientKey::VitK, 1.0),
        header(r"thiamin|b1($|[^\d])", NutrientKey::VitB1, 1.0),
        header(r"riboflavin|b2($|[^\d])", NutrientKey::VitB2, 1.0),
        // TODO: confirm whether "b2" here should read "b3" before changing;
        // scraped corpora were ingested with this pattern as-is.
        header(r"niacin|b2($|[^\d])", NutrientKey::VitB3, 1.0),
        header(r"pantothenic|b5($|[^\d])", NutrientKey::VitB5, 1.0),
        header(r"pyridoxine|b6($|[^\d])", NutrientKey::VitB6, 1.0),
        header(r"biotin|b7($|[^\d])", NutrientKey::VitB7, 1.0),
        header(r"folate|folic\s+acid|b9($|[^\d])", NutrientKey::VitB9, 1.0),
        header(r"cobalamin|b12($|[^\d])", NutrientKey::VitB12, 1.0),
    ];

    /// Recovery lexicon for unitless cells: the unit is read off the row
    /// label instead ("Sodium (mg)", "Energy, kJ", or a macro-nutrient name
    /// implying grams).
    pub(crate) static ref UNITLESS_RECOVERY_RULES: Vec<UnitRule> = vec![
        unit_rule(r"kj", CellUnit::Kcal, KJ_TO_KCAL),
        unit_rule(r"kcal|calories", CellUnit::Kcal, 1.0),
        unit_rule(r",\s+g", CellUnit::Grams, 1.0),
        unit_rule(r",\s+mg", CellUnit::Grams, 1e-3),
        unit_rule(r",\s+µg", CellUnit::Grams, 1e-6),
        unit_rule(r",\s+ug", CellUnit::Grams, 1e-6),
        unit_rule(r"\(\s*g\s*\)", CellUnit::Grams, 1.0),
        unit_rule(r"\(\s*mg\s*\)", CellUnit::Grams, 1e-3),
        unit_rule(r"\(\s*µg\s*\)", CellUnit::Grams, 1e-6),
        unit_rule(r"\(\s*ug\s*\)", CellUnit::Grams, 1e-6),
        unit_rule(r"protein", CellUnit::Grams, 1.0),
        unit_rule(r"total fat|^fat", CellUnit::Grams, 1.0),
        unit_rule(r"(^|[^\w])(saturates|saturated)", CellUnit::Grams, 1.0),
        unit_rule(r"carbohydrate|carbs", CellUnit::Grams, 1.0),
        unit_rule(r"sugar", CellUnit::Grams, 1.0),
        unit_rule(r"starch", CellUnit::Grams, 1.0),
        unit_rule(r"fiber|fibre", CellUnit::Grams, 1.0),
        unit_rule(r"salt", CellUnit::Grams, SALT_TO_SODIUM),
    ];

    /// Recovery lexicon for slash cells: which side of an "a/b" energy pair
    /// the numerator was, read off the row label.
    pub(crate) static ref SLASH_RECOVERY_RULES: Vec<UnitRule> = vec![
        unit_rule(r"kj\s*/\s*kcal", CellUnit::Kcal, KJ_TO_KCAL),
        unit_rule(r"kcal\s*/\s*kj", CellUnit::Kcal, 1.0),
        unit_rule(r"kj\s*\(\s*kcal\s*\)", CellUnit::Kcal, KJ_TO_KCAL),
        unit_rule(r"kcal\s*\(\s*kj\s*\)", CellUnit::Kcal, 1.0),
    ];
}

fn header(pattern: &str, key: NutrientKey, factor: f64) -> HeaderRule {
    HeaderRule {
        pattern: rule(pattern),
        key,
        factor,
    }
}

fn unit_rule(pattern: &str, unit: CellUnit, factor: f64) -> UnitRule {
    UnitRule {
        pattern: rule(pattern),
        unit,
        factor,
    }
}

/// Parse a numeric token captured by a rule, normalizing decimal commas.
pub(crate) fn parse_amount(token: &str) -> Option<f64> {
    token.replace(',', ".").parse().ok()
}
