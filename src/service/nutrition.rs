//! Nutrition fact extraction from free label text

use regex::Regex;

use crate::model::{Nutrient, NutritionValues};

/// Extracts "<nutrient> <number>[unit]" pairs from label text.
///
/// Units are not converted: sodium is read as milligrams and everything
/// else as grams, matching how the scoring thresholds are expressed.
pub struct NutritionExtractor {
    patterns: Vec<(Nutrient, Regex)>,
}

impl NutritionExtractor {
    pub fn new() -> Self {
        let patterns = Nutrient::ALL
            .iter()
            .map(|nutrient| {
                let name = match nutrient {
                    Nutrient::Carbs => r"carb(?:s|ohydrates?)",
                    other => other.name(),
                };
                let pattern = Regex::new(&format!(r"{name}[\s:]*(\d+(?:\.\d+)?)\s*(?:mg|g)?"))
                    .expect("nutrient pattern is a valid regex");
                (*nutrient, pattern)
            })
            .collect();

        Self { patterns }
    }

    /// Extract every nutrient stated in `text`, keeping the first value per nutrient
    pub fn extract(&self, text: &str) -> NutritionValues {
        let text = text.to_lowercase();
        let mut values = NutritionValues::default();

        for (nutrient, pattern) in &self.patterns {
            let value = pattern
                .captures(&text)
                .and_then(|caps| caps.get(1))
                .and_then(|m| m.as_str().parse::<f64>().ok());

            if let Some(value) = value {
                values.set(*nutrient, value);
            }
        }

        tracing::debug!(nutrition = ?values, "Extracted nutrition values");
        values
    }
}

impl Default for NutritionExtractor {
    fn default() -> Self {
        Self::new()
    }
}
