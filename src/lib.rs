//! AHP Search - multi-criteria ranking of business parks
//!
//! The decision engine in [`core`] weights user criteria with the Analytic
//! Hierarchy Process and ranks a facility catalogue by them. The remaining
//! modules wrap it in an HTTP service backed by PostgreSQL.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{best_results, evaluate, rank, CriteriaError, EngineError};
pub use crate::models::{Criterion, CriterionKey, CriterionValue, Evaluation, Facility, RankedResult, SearchRequest};
