//! Composite safety score
//!
//! Combines ingredient risk deductions, a nutrition sub-score and claim
//! contradiction penalties. The order of steps is fixed:
//!
//! 1. Start the base score at 100 and deduct per high, medium and low risk
//!    ingredient finding (only high and medium findings produce warnings).
//! 2. Compute a separate nutrition sub-score from 100, clamped to `0..=100`.
//! 3. Merge both with integer division: `(base + nutrition) / 2`.
//! 4. Deduct per supplied claim that was not verified.
//! 5. Clamp to `0..=100` and derive the rating.

use std::sync::Arc;

use crate::model::{
    ClaimVerdict, HarmfulIngredients, Nutrient, NutrientLimit, NutritionThresholds,
    NutritionValues, Rating, RiskTier, ScoreResult, ScoringConfig,
};
use crate::service::ingredients::IngredientRiskScanner;
use crate::service::nutrition::NutritionExtractor;

const MAX_SCORE: i32 = 100;

/// Everything the scoring pipeline can take from a caller
#[derive(Debug, Clone, Default)]
pub struct ScoreInput {
    pub text: String,
    pub ingredients: Vec<String>,
    /// Used verbatim instead of text extraction when it holds any nutrient
    pub nutrition: Option<NutritionValues>,
    pub claims: Vec<ClaimVerdict>,
}

pub struct ScoreAggregator {
    config: ScoringConfig,
}

impl ScoreAggregator {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn aggregate(
        &self,
        harmful_ingredients: HarmfulIngredients,
        nutrition: NutritionValues,
        claims: &[ClaimVerdict],
    ) -> ScoreResult {
        let penalties = &self.config.ingredient_penalties;
        let mut warnings = Vec::new();
        let mut score = MAX_SCORE;

        for (tier, penalty) in [
            (RiskTier::HighRisk, penalties.high),
            (RiskTier::MediumRisk, penalties.medium),
            (RiskTier::LowRisk, penalties.low),
        ] {
            for finding in harmful_ingredients.tier(tier) {
                score = score.saturating_sub(penalty);
                if tier != RiskTier::LowRisk {
                    warnings.push(format!("Contains {}: {}", finding.ingredient, finding.warning));
                }
            }
        }
        let score = score.clamp(0, MAX_SCORE);

        let nutrition_score = nutrition_score(&nutrition, &self.config.nutrition, &mut warnings);

        let mut score = (score + nutrition_score) / 2;

        let mut contradictions = Vec::new();
        for claim in claims.iter().filter(|c| !c.verified) {
            score = score.saturating_sub(self.config.claim_penalty);
            contradictions.push(format!("Claim '{}' appears misleading", claim.claim));
        }

        let score = score.clamp(0, MAX_SCORE);
        let rating = Rating::from_score(score);

        tracing::debug!(
            nutrition_score = nutrition_score,
            contradictions = contradictions.len(),
            score = score,
            rating = ?rating,
            "Aggregated safety score"
        );

        ScoreResult {
            score,
            rating,
            warnings,
            contradictions,
            harmful_ingredients,
            nutrition_extracted: nutrition,
        }
    }
}

/// Nutrition sub-score; missing nutrients count as zero
fn nutrition_score(
    nutrition: &NutritionValues,
    thresholds: &NutritionThresholds,
    warnings: &mut Vec<String>,
) -> i32 {
    let mut score = MAX_SCORE;

    let limited = [
        (Nutrient::Sodium, &thresholds.sodium, "mg"),
        (Nutrient::Sugar, &thresholds.sugar, "g"),
        (Nutrient::Fat, &thresholds.fat, "g"),
    ];
    for (nutrient, limit, unit) in limited {
        let penalty = limit_penalty(nutrient, nutrition.amount(nutrient), limit, unit, warnings);
        score = score.saturating_sub(penalty);
    }

    if nutrition.amount(Nutrient::Protein) > thresholds.protein_bonus.above {
        score = score.saturating_add(thresholds.protein_bonus.bonus);
    }

    score.clamp(0, MAX_SCORE)
}

fn limit_penalty(
    nutrient: Nutrient,
    value: f64,
    limit: &NutrientLimit,
    unit: &str,
    warnings: &mut Vec<String>,
) -> i32 {
    let name = nutrient.name();
    if value > limit.very_high {
        warnings.push(format!("Very high {name}: {value}{unit} per 100g"));
        limit.very_high_penalty
    } else if value > limit.high {
        warnings.push(format!("High {name}: {value}{unit} per 100g"));
        limit.high_penalty
    } else {
        0
    }
}

/// Full scoring pipeline over caller input
pub struct SafetyScoreService {
    extractor: Arc<NutritionExtractor>,
    scanner: IngredientRiskScanner,
    aggregator: ScoreAggregator,
}

impl SafetyScoreService {
    pub fn new(
        extractor: Arc<NutritionExtractor>,
        scanner: IngredientRiskScanner,
        config: ScoringConfig,
    ) -> Self {
        Self {
            extractor,
            scanner,
            aggregator: ScoreAggregator::new(config),
        }
    }

    pub fn scanner(&self) -> &IngredientRiskScanner {
        &self.scanner
    }

    pub fn score(&self, input: &ScoreInput) -> ScoreResult {
        let nutrition = match &input.nutrition {
            Some(values) if !values.is_empty() => values.clone(),
            _ => self.extractor.extract(&input.text),
        };
        let harmful = self.scanner.scan(&input.text, &input.ingredients);

        let result = self.aggregator.aggregate(harmful, nutrition, &input.claims);

        tracing::info!(
            score = result.score,
            rating = ?result.rating,
            warnings = result.warnings.len(),
            contradictions = result.contradictions.len(),
            "Safety score computed"
        );

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "100% NATURAL - contains preservative (E211), sugar 18g, sodium 700mg";

    fn service() -> SafetyScoreService {
        SafetyScoreService::new(
            Arc::new(NutritionExtractor::new()),
            IngredientRiskScanner::new(),
            ScoringConfig::default(),
        )
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_text_only_sample() {
        let result = service().score(&ScoreInput {
            text: SAMPLE.to_string(),
            ..Default::default()
        });

        assert_eq!(result.score, 85);
        assert_eq!(result.rating, Rating::Good);
        assert_eq!(
            result.warnings,
            strings(&["High sodium: 700mg per 100g", "High sugar: 18g per 100g"])
        );
        assert!(result.contradictions.is_empty());
        assert_eq!(result.nutrition_extracted.sodium, Some(700.0));
        assert_eq!(result.nutrition_extracted.sugar, Some(18.0));
    }

    #[test]
    fn test_supplied_misleading_claim_is_penalised() {
        let result = service().score(&ScoreInput {
            text: SAMPLE.to_string(),
            claims: vec![ClaimVerdict::misleading(
                "100% Natural",
                "Contains artificial ingredients, flavors or preservatives",
                crate::model::Severity::High,
            )],
            ..Default::default()
        });

        assert_eq!(result.score, 75);
        assert_eq!(
            result.contradictions,
            strings(&["Claim '100% Natural' appears misleading"])
        );
    }

    #[test]
    fn test_verified_claims_are_not_penalised() {
        let result = service().score(&ScoreInput {
            claims: vec![ClaimVerdict::verified("Organic")],
            ..Default::default()
        });
        assert_eq!(result.score, 100);
        assert!(result.contradictions.is_empty());
    }

    #[test]
    fn test_ingredient_deductions_and_warnings() {
        let result = service().score(&ScoreInput {
            ingredients: strings(&["Sodium Benzoate", "Palm Oil", "Salt"]),
            ..Default::default()
        });

        // base 100 - 15 - 8 - 3 = 74, nutrition 100, merged 87
        assert_eq!(result.score, 87);
        assert_eq!(
            result.warnings,
            strings(&[
                "Contains sodium benzoate: May form benzene with vitamin C, linked to hyperactivity",
                "Contains palm oil: High in saturated fat",
            ])
        );
        assert_eq!(result.harmful_ingredients.low_risk.len(), 1);
    }

    #[test]
    fn test_merge_truncates() {
        let result = service().score(&ScoreInput {
            text: "sugar 18g sodium 700mg".to_string(),
            ingredients: strings(&["Sodium Benzoate", "Palm Oil"]),
            ..Default::default()
        });
        // (77 + 70) / 2 = 73
        assert_eq!(result.score, 73);
    }

    #[test]
    fn test_very_high_nutrients() {
        let nutrition = NutritionValues {
            sodium: Some(1300.0),
            sugar: Some(25.0),
            fat: Some(22.5),
            ..Default::default()
        };
        let result = service().score(&ScoreInput {
            nutrition: Some(nutrition),
            ..Default::default()
        });

        // nutrition 100 - 25 - 25 - 20 = 30, merged (100 + 30) / 2 = 65
        assert_eq!(result.score, 65);
        assert_eq!(result.rating, Rating::Fair);
        assert_eq!(
            result.warnings,
            strings(&[
                "Very high sodium: 1300mg per 100g",
                "Very high sugar: 25g per 100g",
                "Very high fat: 22.5g per 100g",
            ])
        );
    }

    #[test]
    fn test_thresholds_are_strict() {
        let nutrition = NutritionValues {
            sodium: Some(600.0),
            sugar: Some(15.0),
            fat: Some(17.5),
            ..Default::default()
        };
        let result = service().score(&ScoreInput {
            nutrition: Some(nutrition),
            ..Default::default()
        });
        assert_eq!(result.score, 100);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_very_high_boundaries_land_in_high_band() {
        let nutrition = NutritionValues {
            sodium: Some(1200.0),
            sugar: Some(22.5),
            fat: Some(21.0),
            ..Default::default()
        };
        let result = service().score(&ScoreInput {
            nutrition: Some(nutrition),
            ..Default::default()
        });

        // nutrition 100 - 15 - 15 - 10 = 60, merged (100 + 60) / 2 = 80
        assert_eq!(result.score, 80);
        assert_eq!(
            result.warnings,
            strings(&[
                "High sodium: 1200mg per 100g",
                "High sugar: 22.5g per 100g",
                "High fat: 21g per 100g",
            ])
        );
    }

    #[test]
    fn test_high_fat_band() {
        let nutrition = NutritionValues {
            fat: Some(18.0),
            ..Default::default()
        };
        let result = service().score(&ScoreInput {
            nutrition: Some(nutrition),
            ..Default::default()
        });

        // nutrition 100 - 10 = 90, merged (100 + 90) / 2 = 95
        assert_eq!(result.score, 95);
        assert_eq!(result.warnings, strings(&["High fat: 18g per 100g"]));
    }

    #[test]
    fn test_protein_bonus_threshold_is_strict() {
        let thresholds = ScoringConfig::default().nutrition;
        let mut warnings = Vec::new();
        let nutrition = NutritionValues {
            sodium: Some(700.0),
            protein: Some(15.0),
            ..Default::default()
        };
        assert_eq!(nutrition_score(&nutrition, &thresholds, &mut warnings), 85);

        let nutrition = NutritionValues {
            sodium: Some(700.0),
            protein: Some(15.5),
            ..Default::default()
        };
        assert_eq!(nutrition_score(&nutrition, &thresholds, &mut warnings), 95);
    }

    #[test]
    fn test_extreme_weights_saturate() {
        let mut config = ScoringConfig::default();
        config.ingredient_penalties.high = i32::MAX;
        config.nutrition.protein_bonus.bonus = i32::MAX;
        config.claim_penalty = i32::MAX;
        let service = SafetyScoreService::new(
            Arc::new(NutritionExtractor::new()),
            IngredientRiskScanner::new(),
            config,
        );

        let result = service.score(&ScoreInput {
            text: "sodium benzoate tartrazine protein 30g".to_string(),
            claims: vec![
                ClaimVerdict::misleading("Organic", "issue", crate::model::Severity::Medium);
                2
            ],
            ..Default::default()
        });

        assert_eq!(result.score, 0);
        assert_eq!(result.rating, Rating::Avoid);
        assert_eq!(result.contradictions.len(), 2);
    }

    #[test]
    fn test_protein_bonus_is_clamped() {
        let aggregator = ScoreAggregator::new(ScoringConfig::default());
        let mut warnings = Vec::new();
        let nutrition = NutritionValues {
            protein: Some(20.0),
            ..Default::default()
        };
        assert_eq!(
            nutrition_score(&nutrition, &ScoringConfig::default().nutrition, &mut warnings),
            100
        );

        let nutrition = NutritionValues {
            sodium: Some(700.0),
            protein: Some(20.0),
            ..Default::default()
        };
        let result = aggregator.aggregate(HarmfulIngredients::default(), nutrition, &[]);
        // nutrition 100 - 15 + 10 = 95, merged (100 + 95) / 2 = 97
        assert_eq!(result.score, 97);
    }

    #[test]
    fn test_supplied_nutrition_takes_precedence() {
        let supplied = NutritionValues {
            sodium: Some(100.0),
            ..Default::default()
        };
        let result = service().score(&ScoreInput {
            text: "sodium 1300mg".to_string(),
            nutrition: Some(supplied.clone()),
            ..Default::default()
        });
        assert_eq!(result.nutrition_extracted, supplied);
        assert_eq!(result.score, 100);
    }

    #[test]
    fn test_empty_supplied_nutrition_falls_back_to_text() {
        let result = service().score(&ScoreInput {
            text: "sodium 700mg".to_string(),
            nutrition: Some(NutritionValues::default()),
            ..Default::default()
        });
        assert_eq!(result.nutrition_extracted.sodium, Some(700.0));
        assert_eq!(result.score, 92);
    }

    #[test]
    fn test_score_floor_and_avoid_rating() {
        let text = "sodium benzoate, potassium bromate, partially hydrogenated oil, \
                    sodium nitrite, tartrazine, titanium dioxide, palm oil, aspartame, \
                    sodium 1500mg, sugar 40g, fat 30g";
        let claims: Vec<_> = ["Organic", "Healthy", "Low Fat"]
            .iter()
            .map(|c| ClaimVerdict::misleading(c, "issue", crate::model::Severity::Medium))
            .collect();

        let result = service().score(&ScoreInput {
            text: text.to_string(),
            claims,
            ..Default::default()
        });

        // base clamps at 0, nutrition 30, merged 15, minus 30 for claims
        assert_eq!(result.score, 0);
        assert_eq!(result.rating, Rating::Avoid);
        assert_eq!(result.contradictions.len(), 3);
    }

    #[test]
    fn test_empty_input_scores_perfectly() {
        let result = service().score(&ScoreInput::default());
        assert_eq!(result.score, 100);
        assert_eq!(result.rating, Rating::Good);
        assert!(result.nutrition_extracted.is_empty());
        assert_eq!(result.harmful_ingredients.total(), 0);
    }

    #[test]
    fn test_scoring_is_idempotent() {
        let input = ScoreInput {
            text: SAMPLE.to_string(),
            ingredients: strings(&["Palm Oil", "Maltodextrin"]),
            nutrition: None,
            claims: vec![ClaimVerdict::verified("Organic")],
        };
        let service = service();
        assert_eq!(service.score(&input), service.score(&input));
    }

    #[test]
    fn test_score_always_in_range() {
        let service = service();
        let texts = [
            "",
            SAMPLE,
            "protein 40g",
            "sodium 99999mg sugar 999g fat 999g palm oil tartrazine",
        ];
        for text in texts {
            let result = service.score(&ScoreInput {
                text: text.to_string(),
                claims: vec![ClaimVerdict::misleading("X", "y", crate::model::Severity::High); 12],
                ..Default::default()
            });
            assert!((0..=100).contains(&result.score));
        }
    }
}
