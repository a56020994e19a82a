// Core decision engine exports
pub mod criteria;
pub mod matrix;
pub mod ranker;
pub mod scoring;

pub use criteria::{validate_criteria, CriteriaError};
pub use matrix::{ahp_weights, ComparisonMatrix};
pub use ranker::{best_results, evaluate, rank, EngineError};
pub use scoring::{cost_factor, score_facility, FacilityScore};
