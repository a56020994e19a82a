use actix_web::{web, HttpRequest, HttpResponse, Responder};
use validator::Validate;

use crate::core::{evaluate, validate_criteria, EngineError};
use crate::models::{
    Criterion, ErrorResponse, HealthResponse, HistoryEntry, HistoryResponse, SearchRecord,
    SearchRequest, SearchResponse,
};
use crate::routes::AppState;

/// Header carrying the caller identity set by the upstream gateway
pub const CLIENT_ID_HEADER: &str = "X-Client-Id";

/// Configure search and health routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/search", web::post().to(search))
        .route("/search/history", web::get().to(search_history));
}

fn bad_request(error: &str, message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: 400,
    })
}

/// Caller identity from the gateway header, if present and non-blank
pub fn client_id(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(CLIENT_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let pg_healthy = state.postgres.health_check().await.unwrap_or(false);

    let status = if pg_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Rank the park catalogue
///
/// POST /api/v1/search
///
/// Request body:
/// ```json
/// {
///   "criteria": [
///     { "key": "cost", "value": 500, "priority": 5 },
///     { "key": "hasParking", "value": true, "priority": 3 }
///   ]
/// }
/// ```
async fn search(
    state: web::Data<AppState>,
    req: web::Json<SearchRequest>,
    http_req: HttpRequest,
) -> impl Responder {
    let Some(client_id) = client_id(&http_req) else {
        return bad_request(
            "Missing client id",
            format!("{} header is required", CLIENT_ID_HEADER),
        );
    };

    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for search request: field_errors={:?}", errors);
        return bad_request("Validation failed", errors.to_string());
    }

    // Reject bad criteria before touching the catalogue
    let criteria: Vec<Criterion> = match req
        .to_criteria()
        .and_then(|criteria| validate_criteria(&criteria).map(|_| criteria))
    {
        Ok(criteria) => criteria,
        Err(e) => {
            tracing::info!("Rejected criteria from {}: {}", client_id, e);
            return bad_request("Invalid criteria", e.to_string());
        }
    };

    tracing::info!("Searching for client: {}, criteria: {}", client_id, criteria.len());

    let catalogue = match state
        .catalogue
        .get_or_load(state.postgres.get_all_facilities())
        .await
    {
        Ok(catalogue) => catalogue,
        Err(e) => {
            tracing::error!("Failed to load park catalogue: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to load parks".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    let evaluation = match evaluate(&criteria, &catalogue) {
        Ok(evaluation) => evaluation,
        Err(EngineError::InvalidCriteria(e)) => {
            tracing::info!("Engine rejected criteria from {}: {}", client_id, e);
            return bad_request("Invalid criteria", e.to_string());
        }
    };

    tracing::info!(
        "Search for {} ranked {} of {} parks",
        client_id,
        evaluation.results.len(),
        catalogue.len()
    );

    // History is an audit trail; losing an entry does not fail the search
    if let Err(e) = state
        .postgres
        .save_search(&client_id, &req.criteria, &evaluation.results)
        .await
    {
        tracing::warn!("Failed to save search history for {}: {}", client_id, e);
    }

    HttpResponse::Ok().json(SearchResponse {
        message: "Search completed successfully.".to_string(),
        result: evaluation.results,
        weights: evaluation.weights,
        consistency_ratio: evaluation.consistency_ratio,
    })
}

/// Latest searches of the calling client
///
/// GET /api/v1/search/history
async fn search_history(state: web::Data<AppState>, http_req: HttpRequest) -> impl Responder {
    let Some(client_id) = client_id(&http_req) else {
        return bad_request(
            "Missing client id",
            format!("{} header is required", CLIENT_ID_HEADER),
        );
    };

    match state
        .postgres
        .get_search_history(&client_id, state.history_limit)
        .await
    {
        Ok(records) => HttpResponse::Ok().json(HistoryResponse {
            history: records.into_iter().map(history_entry).collect(),
        }),
        Err(e) => {
            tracing::error!("Failed to fetch search history for {}: {}", client_id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch search history".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Shape a stored record for the client; unreadable results become empty
///
/// Older rows may hold the result as a JSON-encoded string.
pub fn history_entry(record: SearchRecord) -> HistoryEntry {
    let result = match record.result {
        serde_json::Value::Array(items) => items,
        serde_json::Value::String(raw) => match serde_json::from_str::<Vec<serde_json::Value>>(&raw) {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!("Search {} has an unparseable result: {}", record.id, e);
                Vec::new()
            }
        },
        other => {
            tracing::warn!("Search {} has a non-list result ({}), returning none", record.id, other);
            Vec::new()
        }
    };

    HistoryEntry {
        id: record.id,
        criteria: record.criteria,
        result,
        created_at: record.created_at,
    }
}
