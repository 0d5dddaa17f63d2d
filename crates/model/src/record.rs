use crate::NutrientKey;
use serde::{Deserialize, Serialize};

/// A normalized nutrient record for one product.
///
/// Every value is expressed per the product's [`crate::CanonicalUnit`], in
/// grams except `energy` which is in kilocalories. Absent attributes stay
/// `None`; a freshly created record is entirely empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sat_fat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cholesterol: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carbohydrate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_sugar: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starch: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fibre: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sodium: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub potassium: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calcium: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub magnesium: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chromium: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub molybdenum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phosphorus: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iron: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copper: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zinc: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manganese: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selenium: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iodine: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vit_a: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vit_c: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vit_d: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vit_e: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vit_k: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vit_b1: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vit_b2: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vit_b3: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vit_b5: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vit_b6: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vit_b7: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vit_b9: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vit_b12: Option<f64>,
}

impl NutrientRecord {
    /// Create an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the value stored under `key`, if any.
    #[must_use]
    pub fn get(&self, key: NutrientKey) -> Option<f64> {
        *self.slot(key)
    }

    /// Store `value` under `key`, replacing any previous value.
    pub fn set(&mut self, key: NutrientKey, value: f64) {
        *self.slot_mut(key) = Some(value);
    }

    /// True if no attribute has been set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        NutrientKey::ALL.iter().all(|&k| self.get(k).is_none())
    }

    /// Iterate over the set attributes in schema order.
    pub fn iter_set(&self) -> impl Iterator<Item = (NutrientKey, f64)> + '_ {
        NutrientKey::ALL
            .iter()
            .filter_map(move |&k| self.get(k).map(|v| (k, v)))
    }

    fn slot(&self, key: NutrientKey) -> &Option<f64> {
        match key {
            NutrientKey::Energy => &self.energy,
            NutrientKey::Protein => &self.protein,
            NutrientKey::Fat => &self.fat,
            NutrientKey::SatFat => &self.sat_fat,
            NutrientKey::Cholesterol => &self.cholesterol,
            NutrientKey::Carbohydrate => &self.carbohydrate,
            NutrientKey::TotalSugar => &self.total_sugar,
            NutrientKey::Starch => &self.starch,
            NutrientKey::Fibre => &self.fibre,
            NutrientKey::Sodium => &self.sodium,
            NutrientKey::Potassium => &self.potassium,
            NutrientKey::Calcium => &self.calcium,
            NutrientKey::Magnesium => &self.magnesium,
            NutrientKey::Chromium => &self.chromium,
            NutrientKey::Molybdenum => &self.molybdenum,
            NutrientKey::Phosphorus => &self.phosphorus,
            NutrientKey::Iron => &self.iron,
            NutrientKey::Copper => &self.copper,
            NutrientKey::Zinc => &self.zinc,
            NutrientKey::Manganese => &self.manganese,
            NutrientKey::Selenium => &self.selenium,
            NutrientKey::Iodine => &self.iodine,
            NutrientKey::VitA => &self.vit_a,
            NutrientKey::VitC => &self.vit_c,
            NutrientKey::VitD => &self.vit_d,
            NutrientKey::VitE => &self.vit_e,
            NutrientKey::VitK => &self.vit_k,
            NutrientKey::VitB1 => &self.vit_b1,
            NutrientKey::VitB2 => &self.vit_b2,
            NutrientKey::VitB3 => &self.vit_b3,
            NutrientKey::VitB5 => &self.vit_b5,
            NutrientKey::VitB6 => &self.vit_b6,
            NutrientKey::VitB7 => &self.vit_b7,
            NutrientKey::VitB9 => &self.vit_b9,
            NutrientKey::VitB12 => &self.vit_b12,
        }
    }

    fn slot_mut(&mut self, key: NutrientKey) -> &mut Option<f64> {
        match key {
            NutrientKey::Energy => &mut self.energy,
            NutrientKey::Protein => &mut self.protein,
            NutrientKey::Fat => &mut self.fat,
            NutrientKey::SatFat => &mut self.sat_fat,
            NutrientKey::Cholesterol => &mut self.cholesterol,
            NutrientKey::Carbohydrate => &mut self.carbohydrate,
            NutrientKey::TotalSugar => &mut self.total_sugar,
            NutrientKey::Starch => &mut self.starch,
            NutrientKey::Fibre => &mut self.fibre,
            NutrientKey::Sodium => &mut self.sodium,
            NutrientKey::Potassium => &mut self.potassium,
            NutrientKey::Calcium => &mut self.calcium,
            NutrientKey::Magnesium => &mut self.magnesium,
            NutrientKey::Chromium => &mut self.chromium,
            NutrientKey::Molybdenum => &mut self.molybdenum,
            NutrientKey::Phosphorus => &mut self.phosphorus,
            NutrientKey::Iron => &mut self.iron,
            NutrientKey::Copper => &mut self.copper,
            NutrientKey::Zinc => &mut self.zinc,
            NutrientKey::Manganese => &mut self.manganese,
            NutrientKey::Selenium => &mut self.selenium,
            NutrientKey::Iodine => &mut self.iodine,
            NutrientKey::VitA => &mut self.vit_a,
            NutrientKey::VitC => &mut self.vit_c,
            NutrientKey::VitD => &mut self.vit_d,
            NutrientKey::VitE => &mut self.vit_e,
            NutrientKey::VitK => &mut self.vit_k,
            NutrientKey::VitB1 => &mut self.vit_b1,
            NutrientKey::VitB2 => &mut self.vit_b2,
            NutrientKey::VitB3 => &mut self.vit_b3,
            NutrientKey::VitB5 => &mut self.vit_b5,
            NutrientKey::VitB6 => &mut self.vit_b6,
            NutrientKey::VitB7 => &mut self.vit_b7,
            NutrientKey::VitB9 => &mut self.vit_b9,
            NutrientKey::VitB12 => &mut self.vit_b12,
        }
    }
}
