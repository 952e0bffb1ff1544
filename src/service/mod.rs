pub mod claims;
pub mod ingredients;
pub mod nutrition;
pub mod scoring;

pub use claims::{ClaimCatalog, ClaimVerificationService};
pub use ingredients::IngredientRiskScanner;
pub use nutrition::NutritionExtractor;
pub use scoring::{SafetyScoreService, ScoreInput};
