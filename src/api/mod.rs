pub mod analyze;
pub mod error;
pub mod health;
pub mod openapi;
pub mod score;

use actix_web::web;

use crate::app::AppState;

/// Register shared state, body handling and every route
pub fn configure(cfg: &mut web::ServiceConfig, state: web::Data<AppState>) {
    cfg.app_data(state)
        .app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .configure(health::configure)
        .configure(analyze::configure)
        .configure(score::configure)
        .configure(openapi::configure);
}
