//! Locating nutrition tables in product markup and flattening them into
//! [`RawTable`]s.
//!
//! The scraper DOM never escapes this module: each candidate table is walked
//! once into plain strings, with multi-row header labels resolved during the
//! walk. Retailer markup declares nutrition tables with the
//! `nutritionTable` class; anything else in the document is ignored.

use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};

lazy_static! {
    static ref TABLE_SELECTOR: Selector =
        Selector::parse("table.nutritionTable").expect("valid selector");
    static ref THEAD_SELECTOR: Selector = Selector::parse("thead").expect("valid selector");
    static ref TBODY_SELECTOR: Selector = Selector::parse("tbody").expect("valid selector");
    static ref TR_SELECTOR: Selector = Selector::parse("tr").expect("valid selector");
    static ref TH_SELECTOR: Selector = Selector::parse("th").expect("valid selector");
    static ref TD_SELECTOR: Selector = Selector::parse("td").expect("valid selector");
}

/// One data row of a nutrition table, with its resolved label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    /// The row-header text, either from the row's own `<th>` or carried
    /// over from a preceding multi-row header cell.
    pub label: String,
    /// The row's `<td>` texts, whitespace-trimmed, in document order.
    pub cells: Vec<String>,
}

/// A nutrition table flattened out of the markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTable {
    /// Header-cell texts of the value columns. The leading label column is
    /// excluded; unclassifiable headers are kept so that row widths can be
    /// checked against the full column count.
    pub columns: Vec<String>,
    /// Resolved data rows. Rows that could not be attributed to any label
    /// are already dropped.
    pub rows: Vec<TableRow>,
}

/// Find all candidate nutrition tables in a document, in document order.
///
/// Tables without a `<thead>` are skipped; an empty result is a normal
/// outcome for products without nutrition markup.
#[must_use]
pub fn find_nutrition_tables(html: &str) -> Vec<RawTable> {
    let document = Html::parse_document(html);
    document
        .select(&TABLE_SELECTOR)
        .filter_map(flatten_table)
        .collect()
}

fn flatten_table(table: ElementRef<'_>) -> Option<RawTable> {
    let thead = table.select(&THEAD_SELECTOR).next()?;
    let title_row = thead.select(&TR_SELECTOR).next()?;

    let columns: Vec<String> = title_row
        .select(&TH_SELECTOR)
        .skip(1)
        .map(|th| element_text(th))
        .collect();

    // Data rows live in <tbody>, or follow <thead> directly when the
    // retailer omits it.
    let body_rows: Vec<ElementRef<'_>> = match table.select(&TBODY_SELECTOR).next() {
        Some(tbody) => tbody.select(&TR_SELECTOR).collect(),
        None => thead
            .next_siblings()
            .filter_map(ElementRef::wrap)
            .filter(|el| el.value().name() == "tr")
            .collect(),
    };

    if body_rows.is_empty() {
        return None;
    }

    Some(RawTable {
        columns,
        rows: resolve_rows(&body_rows),
    })
}

/// Walk physical rows, applying carry-over semantics for multi-row header
/// cells: a `<th>` with `rowspan > 1` labels every following header-less
/// row until the next `<th>` appears. Rows with neither a header cell nor a
/// carried label cannot be attributed and are dropped.
fn resolve_rows(trs: &[ElementRef<'_>]) -> Vec<TableRow> {
    let mut rows = Vec::new();
    let mut carry: Option<String> = None;

    for tr in trs {
        let label = match tr.select(&TH_SELECTOR).next() {
            Some(th) => {
                let label = element_text(th);
                carry = (rowspan(th) > 1).then(|| label.clone());
                label
            }
            None => match &carry {
                Some(label) => label.clone(),
                None => continue,
            },
        };

        let cells = tr.select(&TD_SELECTOR).map(element_text).collect();
        rows.push(TableRow { label, cells });
    }

    rows
}

fn rowspan(th: ElementRef<'_>) -> usize {
    th.value()
        .attr("rowspan")
        .and_then(|v| v.parse().ok())
        .unwrap_or(1)
}

fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}
