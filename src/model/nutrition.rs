use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Nutrients recognised on a label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nutrient {
    Sodium,
    Sugar,
    Fat,
    Calories,
    Protein,
    Carbs,
}

impl Nutrient {
    pub const ALL: [Nutrient; 6] = [
        Nutrient::Sodium,
        Nutrient::Sugar,
        Nutrient::Fat,
        Nutrient::Calories,
        Nutrient::Protein,
        Nutrient::Carbs,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Nutrient::Sodium => "sodium",
            Nutrient::Sugar => "sugar",
            Nutrient::Fat => "fat",
            Nutrient::Calories => "calories",
            Nutrient::Protein => "protein",
            Nutrient::Carbs => "carbs",
        }
    }
}

/// Nutrition facts per 100g. A nutrient that was not stated stays `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NutritionValues {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sodium: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sugar: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbs: Option<f64>,
}

impl NutritionValues {
    pub fn get(&self, nutrient: Nutrient) -> Option<f64> {
        match nutrient {
            Nutrient::Sodium => self.sodium,
            Nutrient::Sugar => self.sugar,
            Nutrient::Fat => self.fat,
            Nutrient::Calories => self.calories,
            Nutrient::Protein => self.protein,
            Nutrient::Carbs => self.carbs,
        }
    }

    /// Value used for threshold comparisons, where a missing nutrient counts as zero
    pub fn amount(&self, nutrient: Nutrient) -> f64 {
        self.get(nutrient).unwrap_or(0.0)
    }

    pub fn set(&mut self, nutrient: Nutrient, value: f64) {
        let slot = match nutrient {
            Nutrient::Sodium => &mut self.sodium,
            Nutrient::Sugar => &mut self.sugar,
            Nutrient::Fat => &mut self.fat,
            Nutrient::Calories => &mut self.calories,
            Nutrient::Protein => &mut self.protein,
            Nutrient::Carbs => &mut self.carbs,
        };
        *slot = Some(value);
    }

    pub fn is_empty(&self) -> bool {
        Nutrient::ALL.iter().all(|n| self.get(*n).is_none())
    }
}
