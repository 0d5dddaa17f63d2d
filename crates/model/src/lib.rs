//! # nutritable-model
//!
//! Core type definitions shared across the nutritable ecosystem: the
//! nutrient key enumeration, the per-product nutrient record, and the
//! canonical serving unit a record is expressed against.
//!
//! These types carry no extraction logic; the engine lives in
//! `nutritable-extract`.

mod nutrient;
mod record;
mod unit;

pub use nutrient::NutrientKey;
pub use record::NutrientRecord;
pub use unit::{CanonicalUnit, Measure};
