// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{unique_locations, Criterion, CriterionKey, CriterionValue, Evaluation, Facility, RankedResult, SearchRecord};
pub use requests::{CriterionInput, SearchRequest};
pub use responses::{ErrorResponse, HealthResponse, HistoryEntry, HistoryResponse, LocationsResponse, SearchResponse};
