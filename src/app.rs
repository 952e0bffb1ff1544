//! Application state and service initialization
//!
//! The claim catalog, ingredient catalog and scoring table are built once
//! here and shared read-only by every request handler.

use std::sync::Arc;

use crate::model::Config;
use crate::service::{
    ClaimCatalog, ClaimVerificationService, IngredientRiskScanner, NutritionExtractor,
    SafetyScoreService,
};

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    /// Name reported by the health endpoint
    pub service_name: String,
    /// Claim detection and verification
    pub claim_service: Arc<ClaimVerificationService>,
    /// Composite safety scoring
    pub score_service: Arc<SafetyScoreService>,
}

impl AppState {
    /// Build the engine from configuration, rejecting an incoherent scoring table
    pub fn new(config: &Config) -> Result<Self, AppError> {
        config
            .scoring
            .validate()
            .map_err(AppError::InvalidConfig)?;

        let extractor = Arc::new(NutritionExtractor::new());
        let catalog = Arc::new(ClaimCatalog::builtin());

        let claim_service = ClaimVerificationService::new(catalog, Arc::clone(&extractor));
        let score_service = SafetyScoreService::new(
            extractor,
            IngredientRiskScanner::new(),
            config.scoring.clone(),
        );

        tracing::info!(
            claim_rules = claim_service.catalog().len(),
            harmful_ingredients = score_service.scanner().catalog_size(),
            "Catalogs loaded"
        );

        Ok(Self {
            service_name: config.service_name.clone(),
            claim_service: Arc::new(claim_service),
            score_service: Arc::new(score_service),
        })
    }
}

/// Application-level errors
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum AppError {
    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
