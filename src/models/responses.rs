use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::domain::{CriterionKey, RankedResult};

/// Response for the search endpoint
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub message: String,
    pub result: Vec<RankedResult>,
    pub weights: BTreeMap<CriterionKey, f64>,
    #[serde(rename = "consistencyRatio")]
    pub consistency_ratio: f64,
}

/// One entry of a client's search history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: uuid::Uuid,
    pub criteria: serde_json::Value,
    pub result: Vec<serde_json::Value>,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Response for the search history endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub history: Vec<HistoryEntry>,
}

/// Response for the locations endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationsResponse {
    pub locations: Vec<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
