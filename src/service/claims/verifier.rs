//! Claim verification against contradicting evidence in the same text

use super::catalog::{ClaimRule, Verification};
use crate::model::{ClaimVerdict, NutritionValues};
use crate::service::nutrition::NutritionExtractor;

/// Words that close the ingredients section
const SECTION_TERMINATORS: &[&str] = &["nutrition", "allergen", "contains"];

const SECTION_START: &str = "ingredients";

/// Verdicts for one analysis, split by outcome and kept in catalog order
#[derive(Debug, Default)]
pub struct ClaimVerification {
    pub misleading: Vec<ClaimVerdict>,
    pub verified: Vec<ClaimVerdict>,
}

pub struct ClaimVerifier<'a> {
    extractor: &'a NutritionExtractor,
}

impl<'a> ClaimVerifier<'a> {
    pub fn new(extractor: &'a NutritionExtractor) -> Self {
        Self { extractor }
    }

    /// Check each detected rule against the full `text`
    pub fn verify(&self, rules: &[&ClaimRule], text: &str) -> ClaimVerification {
        let lowered = text.to_lowercase();
        let mut nutrition: Option<NutritionValues> = None;
        let mut result = ClaimVerification::default();

        for rule in rules {
            let misleading = match rule.verification {
                Verification::ContainsAny(terms) => terms.iter().any(|t| lowered.contains(t)),
                Verification::LacksAll(terms) => !terms.iter().any(|t| lowered.contains(t)),
                Verification::NutrientAbove(nutrient, limit) => {
                    let values = nutrition.get_or_insert_with(|| self.extractor.extract(text));
                    values.amount(nutrient) > limit
                }
                Verification::NutrientBelow(nutrient, minimum) => {
                    let values = nutrition.get_or_insert_with(|| self.extractor.extract(text));
                    values.amount(nutrient) < minimum
                }
                Verification::IngredientsMention(term) => {
                    ingredients_section(&lowered).contains(term)
                }
            };

            tracing::debug!(claim = rule.label, misleading = misleading, "Verified claim");

            if misleading {
                result
                    .misleading
                    .push(ClaimVerdict::misleading(rule.label, rule.issue, rule.severity));
            } else {
                result.verified.push(ClaimVerdict::verified(rule.label));
            }
        }

        result
    }
}

/// Text between the first "ingredients" label and the nearest following
/// terminator (or end of text). Falls back to the whole text when there is
/// no ingredients label. Expects lower-cased input.
pub fn ingredients_section(text: &str) -> &str {
    let Some(start) = text.find(SECTION_START) else {
        return text;
    };
    let rest = &text[start + SECTION_START.len()..];

    let end = SECTION_TERMINATORS
        .iter()
        .filter_map(|term| rest.find(term))
        .min()
        .unwrap_or(rest.len());

    &rest[..end]
}
