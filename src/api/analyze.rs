//! Claim analysis endpoint

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::error::{ApiError, ErrorResponse};
use crate::app::AppState;
use crate::model::ClaimVerdict;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    /// Label or advertisement text, e.g. OCR output
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AnalyzeResponse {
    /// Claims contradicted by the text
    pub claims: Vec<ClaimVerdict>,
    /// Claims found and not contradicted
    pub verified_claims: Vec<ClaimVerdict>,
    pub total_claims_found: usize,
    pub misleading_count: usize,
    /// Claim-only risk indicator in `0..=100`
    pub risk_score: u32,
    pub claim_count: usize,
    /// Character count of the analysed text
    pub text_length: usize,
}

/// Detect marketing claims in text and flag the misleading ones
#[utoipa::path(
    post,
    path = "/analyze",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Claims analysed", body = AnalyzeResponse),
        (status = 400, description = "Missing text", body = ErrorResponse)
    ),
    tag = "claims"
)]
#[post("/analyze")]
pub async fn analyze(
    state: web::Data<AppState>,
    body: web::Json<AnalyzeRequest>,
) -> Result<HttpResponse, ApiError> {
    let text = body
        .into_inner()
        .text
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::BadRequest("text required".to_string()))?;

    let result = state.claim_service.analyze(&text);
    let total = result.total();
    let risk_score = result.risk_score();

    Ok(HttpResponse::Ok().json(AnalyzeResponse {
        misleading_count: result.misleading.len(),
        claims: result.misleading,
        verified_claims: result.verified,
        total_claims_found: total,
        risk_score,
        claim_count: total,
        text_length: text.chars().count(),
    }))
}

/// Configure claim analysis routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(analyze);
}
