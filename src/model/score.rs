use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{HarmfulIngredients, NutritionValues};

/// Categorical rating derived from the final score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Rating {
    Good,
    Fair,
    Poor,
    Avoid,
}

impl Rating {
    pub fn from_score(score: i32) -> Self {
        match score {
            s if s >= 70 => Rating::Good,
            s if s >= 50 => Rating::Fair,
            s if s >= 30 => Rating::Poor,
            _ => Rating::Avoid,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScoreResult {
    /// Composite safety score in `0..=100`
    pub score: i32,
    pub rating: Rating,
    pub warnings: Vec<String>,
    pub contradictions: Vec<String>,
    pub harmful_ingredients: HarmfulIngredients,
    pub nutrition_extracted: NutritionValues,
}
