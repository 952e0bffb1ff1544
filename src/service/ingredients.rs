//! Harmful ingredient detection against a tiered catalog

use crate::model::{HarmfulIngredients, RiskFinding, RiskTier};

/// Ingredients with strong evidence of harm or banned in some markets
const HIGH_RISK: &[(&str, &str)] = &[
    (
        "sodium benzoate",
        "May form benzene with vitamin C, linked to hyperactivity",
    ),
    ("potassium bromate", "Possible carcinogen, banned in many countries"),
    ("partially hydrogenated", "Source of trans fats linked to heart disease"),
    ("sodium nitrite", "Can form carcinogenic nitrosamines"),
    ("butylated hydroxyanisole", "Possible carcinogen (BHA)"),
    ("tartrazine", "Synthetic dye linked to hyperactivity in children"),
    ("titanium dioxide", "Whitening agent banned as a food additive in the EU"),
];

/// Ingredients best limited in a regular diet
const MEDIUM_RISK: &[(&str, &str)] = &[
    ("palm oil", "High in saturated fat"),
    ("high fructose corn syrup", "Linked to obesity and insulin resistance"),
    ("monosodium glutamate", "May cause sensitivity reactions"),
    ("maltodextrin", "High glycemic index, spikes blood sugar"),
    ("aspartame", "Artificial sweetener under ongoing safety review"),
    ("carrageenan", "May irritate the digestive tract"),
    ("artificial flavor", "Synthetic flavoring of undisclosed composition"),
];

/// Ingredients of minor concern, scored but not reported as warnings
const LOW_RISK: &[(&str, &str)] = &[
    ("salt", "Adds to daily sodium intake"),
    ("maida", "Refined flour with little fiber"),
    ("refined flour", "Refined flour with little fiber"),
    ("soy lecithin", "Common allergen source"),
    ("xanthan gum", "May cause bloating in large amounts"),
    ("dextrose", "Added simple sugar"),
];

const TIERS: [(RiskTier, &[(&str, &str)]); 3] = [
    (RiskTier::HighRisk, HIGH_RISK),
    (RiskTier::MediumRisk, MEDIUM_RISK),
    (RiskTier::LowRisk, LOW_RISK),
];

/// Scans label text and ingredient lists for catalog ingredients
#[derive(Debug, Clone, Copy, Default)]
pub struct IngredientRiskScanner;

impl IngredientRiskScanner {
    pub fn new() -> Self {
        Self
    }

    /// Number of ingredients across all tiers of the catalog
    pub fn catalog_size(&self) -> usize {
        TIERS.iter().map(|(_, entries)| entries.len()).sum()
    }

    /// Match every catalog ingredient against `text` plus the ingredient list.
    ///
    /// Tiers are checked independently, so one phrase may produce findings
    /// in more than one tier.
    pub fn scan(&self, text: &str, ingredients: &[String]) -> HarmfulIngredients {
        let corpus = format!("{} {}", text, ingredients.join(" ")).to_lowercase();
        let mut found = HarmfulIngredients::default();

        for (tier, entries) in TIERS {
            for (ingredient, warning) in entries {
                if corpus.contains(ingredient) {
                    tracing::debug!(ingredient = ingredient, tier = ?tier, "Matched harmful ingredient");
                    found.push(RiskFinding {
                        ingredient: ingredient.to_string(),
                        warning: warning.to_string(),
                        tier,
                    });
                }
            }
        }

        found
    }
}
