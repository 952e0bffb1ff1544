//! Marketing claim detection and verification

pub mod catalog;
pub mod matcher;
pub mod verifier;

use std::sync::Arc;

use crate::model::Severity;
use crate::service::nutrition::NutritionExtractor;

pub use catalog::ClaimCatalog;
pub use matcher::PatternMatcher;
pub use verifier::{ClaimVerification, ClaimVerifier};

/// Risk weight per misleading claim, by severity
const HIGH_SEVERITY_WEIGHT: u32 = 25;
const MEDIUM_SEVERITY_WEIGHT: u32 = 10;

/// Detects claims in label text and checks each one against the same text
pub struct ClaimVerificationService {
    catalog: Arc<ClaimCatalog>,
    extractor: Arc<NutritionExtractor>,
}

impl ClaimVerificationService {
    pub fn new(catalog: Arc<ClaimCatalog>, extractor: Arc<NutritionExtractor>) -> Self {
        Self { catalog, extractor }
    }

    pub fn catalog(&self) -> &ClaimCatalog {
        &self.catalog
    }

    pub fn analyze(&self, text: &str) -> ClaimVerification {
        let detected = PatternMatcher::new(&self.catalog).detect(text);
        let result = ClaimVerifier::new(&self.extractor).verify(&detected, text);

        tracing::info!(
            claims_found = detected.len(),
            misleading = result.misleading.len(),
            "Claim analysis completed"
        );

        result
    }
}

impl ClaimVerification {
    pub fn total(&self) -> usize {
        self.misleading.len() + self.verified.len()
    }

    /// Claim-only risk indicator: 25 per high and 10 per medium severity
    /// misleading claim, capped at 100
    pub fn risk_score(&self) -> u32 {
        let weighted: u32 = self
            .misleading
            .iter()
            .map(|verdict| match verdict.severity {
                Some(Severity::High) => HIGH_SEVERITY_WEIGHT,
                Some(Severity::Medium) => MEDIUM_SEVERITY_WEIGHT,
                None => 0,
            })
            .sum();

        weighted.min(100)
    }
}
