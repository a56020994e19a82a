// Service exports
pub mod cache;
pub mod postgres;

pub use cache::{CacheError, CacheKey, CatalogueCache};
pub use postgres::{PostgresClient, PostgresError};
