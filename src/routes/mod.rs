// Route exports
pub mod parks;
pub mod search;

use actix_web::web;
use std::sync::Arc;

use crate::services::{CatalogueCache, PostgresClient};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub postgres: Arc<PostgresClient>,
    pub catalogue: CatalogueCache,
    pub history_limit: usize,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(search::configure)
            .configure(parks::configure),
    );
}
