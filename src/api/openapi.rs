//! OpenAPI specification endpoints

use actix_web::{HttpResponse, Responder, get};
use utoipa::OpenApi;

use super::analyze::{AnalyzeRequest, AnalyzeResponse};
use super::error::ErrorResponse;
use super::health::HealthStatus;
use super::score::ScoreRequest;
use crate::model::{
    ClaimVerdict, HarmfulIngredients, NutritionValues, Rating, RiskFinding, RiskTier,
    ScoreResult, Severity,
};

#[derive(OpenApi)]
#[openapi(
    paths(super::health::health, super::analyze::analyze, super::score::score),
    components(schemas(
        HealthStatus,
        AnalyzeRequest,
        AnalyzeResponse,
        ScoreRequest,
        ScoreResult,
        Rating,
        ClaimVerdict,
        Severity,
        NutritionValues,
        HarmfulIngredients,
        RiskFinding,
        RiskTier,
        ErrorResponse
    )),
    tags(
        (name = "health", description = "Service liveness"),
        (name = "claims", description = "Marketing claim verification"),
        (name = "scoring", description = "Composite safety scoring")
    )
)]
pub struct ApiDoc;

/// Serve OpenAPI JSON specification
#[get("/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

/// Serve OpenAPI YAML specification
#[get("/openapi.yaml")]
pub async fn openapi_yaml() -> impl Responder {
    match ApiDoc::openapi().to_yaml() {
        Ok(yaml) => HttpResponse::Ok().content_type("text/yaml").body(yaml),
        Err(e) => {
            tracing::error!(error = %e, "Failed to render OpenAPI YAML");
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: e.to_string(),
            })
        }
    }
}

/// Configure OpenAPI routes
pub fn configure(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(openapi_json).service(openapi_yaml);
}
