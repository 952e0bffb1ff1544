//! Composite safety score endpoint

use actix_web::{HttpResponse, post, web};
use serde::Deserialize;
use utoipa::ToSchema;

use super::error::{ApiError, ErrorResponse};
use crate::app::AppState;
use crate::model::{ClaimVerdict, NutritionValues, ScoreResult};
use crate::service::ScoreInput;

/// All fields are optional; absent fields behave as empty
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct ScoreRequest {
    pub text: Option<String>,
    pub ingredients: Option<Vec<String>>,
    /// Overrides nutrition extracted from `text`
    pub nutrition: Option<NutritionValues>,
    /// Claim verdicts, typically fed back from `/analyze`
    pub claims: Option<Vec<ClaimVerdict>>,
}

impl From<ScoreRequest> for ScoreInput {
    fn from(req: ScoreRequest) -> Self {
        Self {
            text: req.text.unwrap_or_default(),
            ingredients: req.ingredients.unwrap_or_default(),
            nutrition: req.nutrition,
            claims: req.claims.unwrap_or_default(),
        }
    }
}

/// Compute the composite safety score for a product
#[utoipa::path(
    post,
    path = "/score",
    request_body = ScoreRequest,
    responses(
        (status = 200, description = "Score computed", body = ScoreResult),
        (status = 400, description = "Malformed request body", body = ErrorResponse)
    ),
    tag = "scoring"
)]
#[post("/score")]
pub async fn score(
    state: web::Data<AppState>,
    body: web::Json<ScoreRequest>,
) -> Result<HttpResponse, ApiError> {
    let input = ScoreInput::from(body.into_inner());
    let result = state.score_service.score(&input);
    Ok(HttpResponse::Ok().json(result))
}

/// Configure scoring routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(score);
}
