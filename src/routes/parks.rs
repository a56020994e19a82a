use actix_web::{web, HttpResponse, Responder};

use crate::models::{unique_locations, ErrorResponse, LocationsResponse};
use crate::routes::AppState;

/// Configure catalogue routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/parks/locations", web::get().to(get_locations));
}

/// Distinct park locations, for the client's location picker
///
/// GET /api/v1/parks/locations
async fn get_locations(state: web::Data<AppState>) -> impl Responder {
    match state
        .catalogue
        .get_or_load(state.postgres.get_all_facilities())
        .await
    {
        Ok(catalogue) => HttpResponse::Ok().json(LocationsResponse {
            locations: unique_locations(&catalogue),
        }),
        Err(e) => {
            tracing::error!("Failed to load park catalogue: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to load parks".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}
