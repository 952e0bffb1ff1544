//! Health check endpoint

use actix_web::{HttpResponse, Responder, get, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::app::AppState;

#[derive(Serialize, ToSchema)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
    /// Number of recognised marketing claims
    pub claim_rules: usize,
    /// Number of ingredients across all risk tiers
    pub harmful_ingredients: usize,
}

/// Liveness endpoint
///
/// Always returns 200 OK while the process is serving; there are no
/// external dependencies to check.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is alive", body = HealthStatus)
    ),
    tag = "health"
)]
#[get("/health")]
pub async fn health(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthStatus {
        status: "ok".to_string(),
        service: state.service_name.clone(),
        claim_rules: state.claim_service.catalog().len(),
        harmful_ingredients: state.score_service.scanner().catalog_size(),
    })
}

/// Configure health check routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health);
}
