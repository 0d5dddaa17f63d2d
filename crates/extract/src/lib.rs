//! # nutritable-extract
//!
//! Extraction engine turning scraped retail product markup into normalized
//! nutrient records.
//!
//! Retailer product pages embed nutrition data as loosely structured HTML
//! tables: headers mix per-100g, per-100ml, per-pack and per-serving
//! columns; cells mix kcal/kJ, g/mg/µg, decimal commas, "trace" wording and
//! "kJ/kcal" pairs; labels span rows. The engine resolves all of that with
//! ordered, first-match-wins rule tables and produces at most one
//! [`NutrientRecord`] per document, expressed against a single
//! [`CanonicalUnit`].
//!
//! Extraction is a pure function of the document: absence of usable data is
//! `None`, never an error, and the same input always yields the same
//! output.
//!
//! # Examples
//!
//! ```
//! use nutritable_extract::extract_document;
//! use nutritable_model::{Measure, NutrientKey};
//!
//! let html = r#"
//!     <table class="nutritionTable">
//!         <thead><tr><th>Typical Values</th><th>per 100g</th></tr></thead>
//!         <tbody>
//!             <tr><th>Energy</th><td>200kcal</td></tr>
//!             <tr><th>Protein</th><td>5g</td></tr>
//!         </tbody>
//!     </table>
//! "#;
//!
//! let (record, unit) = extract_document(html).unwrap();
//! assert_eq!(record.get(NutrientKey::Energy), Some(200.0));
//! assert_eq!(record.get(NutrientKey::Protein), Some(5.0));
//! assert_eq!(unit.measure, Measure::Grams);
//! assert_eq!(unit.amount, 100.0);
//! ```

mod cell;
mod column;
mod header;
mod html;
mod rules;
mod table;

pub use html::{find_nutrition_tables, RawTable, TableRow};

use nutritable_model::{CanonicalUnit, NutrientRecord};
use table::extract_table;

/// Extract the nutrition data of one product document.
///
/// Tables are processed in document order; for an attribute present in
/// several tables, the last table to parse it wins. All contributing tables
/// must agree on the serving basis: any disagreement discards the whole
/// document as unreliable. `None` means "no usable nutrition data" and is a
/// normal outcome.
#[must_use]
pub fn extract_document(html: &str) -> Option<(NutrientRecord, CanonicalUnit)> {
    let tables = find_nutrition_tables(html);

    let mut record = NutrientRecord::new();
    let mut unit: Option<CanonicalUnit> = None;

    for table in &tables {
        let Some(contribution) = extract_table(table, &mut record) else {
            continue;
        };

        match unit {
            None => {
                unit = Some(CanonicalUnit::new(contribution.measure, contribution.amount));
            }
            Some(current)
                if current.measure != contribution.measure
                    || current.amount != contribution.amount =>
            {
                tracing::debug!(
                    current = %current,
                    conflicting = %CanonicalUnit::new(contribution.measure, contribution.amount),
                    "tables disagree on serving basis, discarding document"
                );
                return None;
            }
            Some(_) => {}
        }
    }

    unit.map(|unit| (record, unit))
}
