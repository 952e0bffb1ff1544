pub mod claims;
pub mod config;
pub mod ingredients;
pub mod nutrition;
pub mod score;

pub use claims::{ClaimVerdict, Severity};
pub use config::{Config, NutrientLimit, NutritionThresholds, ScoringConfig};
pub use ingredients::{HarmfulIngredients, RiskFinding, RiskTier};
pub use nutrition::{Nutrient, NutritionValues};
pub use score::{Rating, ScoreResult};
