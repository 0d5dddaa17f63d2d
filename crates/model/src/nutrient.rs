use serde::{Deserialize, Serialize};
use std::fmt;

/// One attribute of a [`crate::NutrientRecord`].
///
/// Every key is stored in grams, except [`NutrientKey::Energy`] which is
/// stored in kilocalories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NutrientKey {
    Energy,
    Protein,
    Fat,
    SatFat,
    Cholesterol,
    Carbohydrate,
    TotalSugar,
    Starch,
    Fibre,
    Sodium,
    Potassium,
    Calcium,
    Magnesium,
    Chromium,
    Molybdenum,
    Phosphorus,
    Iron,
    Copper,
    Zinc,
    Manganese,
    Selenium,
    Iodine,
    VitA,
    VitC,
    VitD,
    VitE,
    VitK,
    VitB1,
    VitB2,
    VitB3,
    VitB5,
    VitB6,
    VitB7,
    VitB9,
    VitB12,
}

impl NutrientKey {
    /// All keys, in record-schema order.
    pub const ALL: [NutrientKey; 35] = [
        NutrientKey::Energy,
        NutrientKey::Protein,
        NutrientKey::Fat,
        NutrientKey::SatFat,
        NutrientKey::Cholesterol,
        NutrientKey::Carbohydrate,
        NutrientKey::TotalSugar,
        NutrientKey::Starch,
        NutrientKey::Fibre,
        NutrientKey::Sodium,
        NutrientKey::Potassium,
        NutrientKey::Calcium,
        NutrientKey::Magnesium,
        NutrientKey::Chromium,
        NutrientKey::Molybdenum,
        NutrientKey::Phosphorus,
        NutrientKey::Iron,
        NutrientKey::Copper,
        NutrientKey::Zinc,
        NutrientKey::Manganese,
        NutrientKey::Selenium,
        NutrientKey::Iodine,
        NutrientKey::VitA,
        NutrientKey::VitC,
        NutrientKey::VitD,
        NutrientKey::VitE,
        NutrientKey::VitK,
        NutrientKey::VitB1,
        NutrientKey::VitB2,
        NutrientKey::VitB3,
        NutrientKey::VitB5,
        NutrientKey::VitB6,
        NutrientKey::VitB7,
        NutrientKey::VitB9,
        NutrientKey::VitB12,
    ];

    /// The snake_case attribute name used in serialized records.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            NutrientKey::Energy => "energy",
            NutrientKey::Protein => "protein",
            NutrientKey::Fat => "fat",
            NutrientKey::SatFat => "sat_fat",
            NutrientKey::Cholesterol => "cholesterol",
            NutrientKey::Carbohydrate => "carbohydrate",
            NutrientKey::TotalSugar => "total_sugar",
            NutrientKey::Starch => "starch",
            NutrientKey::Fibre => "fibre",
            NutrientKey::Sodium => "sodium",
            NutrientKey::Potassium => "potassium",
            NutrientKey::Calcium => "calcium",
            NutrientKey::Magnesium => "magnesium",
            NutrientKey::Chromium => "chromium",
            NutrientKey::Molybdenum => "molybdenum",
            NutrientKey::Phosphorus => "phosphorus",
            NutrientKey::Iron => "iron",
            NutrientKey::Copper => "copper",
            NutrientKey::Zinc => "zinc",
            NutrientKey::Manganese => "manganese",
            NutrientKey::Selenium => "selenium",
            NutrientKey::Iodine => "iodine",
            NutrientKey::VitA => "vit_a",
            NutrientKey::VitC => "vit_c",
            NutrientKey::VitD => "vit_d",
            NutrientKey::VitE => "vit_e",
            NutrientKey::VitK => "vit_k",
            NutrientKey::VitB1 => "vit_b1",
            NutrientKey::VitB2 => "vit_b2",
            NutrientKey::VitB3 => "vit_b3",
            NutrientKey::VitB5 => "vit_b5",
            NutrientKey::VitB6 => "vit_b6",
            NutrientKey::VitB7 => "vit_b7",
            NutrientKey::VitB9 => "vit_b9",
            NutrientKey::VitB12 => "vit_b12",
        }
    }
}

impl fmt::Display for NutrientKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
