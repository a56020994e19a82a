use sqlx::postgres::PgPoolOptions;
use sqlx::types::Json;
use sqlx::{PgPool, Row};
use std::time::Duration;
use thiserror::Error;

use crate::models::{Facility, SearchRecord};

/// Errors that can occur when interacting with PostgreSQL
#[derive(Debug, Error)]
pub enum PostgresError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// PostgreSQL client for the park catalogue and the search history
pub struct PostgresClient {
    pool: PgPool,
}

impl PostgresClient {
    /// Connect, then run the embedded migrations
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
        acquire_timeout: Duration,
        idle_timeout: Duration,
    ) -> Result<Self, PostgresError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(acquire_timeout)
            .idle_timeout(idle_timeout)
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        // Run migrations on startup
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self::from_pool(pool))
    }

    /// Create a new PostgreSQL client from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
        acquire_timeout_secs: Option<u64>,
        idle_timeout_secs: Option<u64>,
    ) -> Result<Self, PostgresError> {
        tracing::info!("Connecting to PostgreSQL");

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
            Duration::from_secs(acquire_timeout_secs.unwrap_or(5)),
            Duration::from_secs(idle_timeout_secs.unwrap_or(600)),
        )
        .await
    }

    /// Wrap an existing pool without touching the database
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Load the full park catalogue in insertion order
    pub async fn get_all_facilities(&self) -> Result<Vec<Facility>, PostgresError> {
        let query = r#"
            SELECT id, name, location, cost::float8 AS cost,
                   has_parking, has_meeting_rooms, has_office_with_furniture,
                   has_transport, has_canteen
            FROM parks
            ORDER BY id
        "#;

        let rows = sqlx::query(query).fetch_all(&self.pool).await?;

        let facilities: Vec<Facility> = rows
            .iter()
            .map(|row| Facility {
                id: row.get("id"),
                name: row.get("name"),
                location: row.get("location"),
                cost: row.get("cost"),
                has_parking: row.get("has_parking"),
                has_meeting_rooms: row.get("has_meeting_rooms"),
                has_office_with_furniture: row.get("has_office_with_furniture"),
                has_transport: row.get("has_transport"),
                has_canteen: row.get("has_canteen"),
            })
            .collect();

        tracing::debug!("Loaded {} parks from PostgreSQL", facilities.len());

        Ok(facilities)
    }

    /// Persist a completed search for a client
    pub async fn save_search<C, R>(
        &self,
        client_id: &str,
        criteria: &C,
        result: &R,
    ) -> Result<uuid::Uuid, PostgresError>
    where
        C: serde::Serialize + Sync,
        R: serde::Serialize + Sync,
    {
        let query = r#"
            INSERT INTO searches (id, client_id, criteria, result, created_at)
            VALUES ($1, $2, $3, $4, NOW())
        "#;

        let id = uuid::Uuid::new_v4();
        let criteria = serde_json::to_value(criteria)?;
        let result = serde_json::to_value(result)?;

        sqlx::query(query)
            .bind(id)
            .bind(client_id)
            .bind(Json(criteria))
            .bind(Json(result))
            .execute(&self.pool)
            .await?;

        tracing::debug!("Saved search {} for client {}", id, client_id);

        Ok(id)
    }

    /// Most recent searches of a client, newest first
    pub async fn get_search_history(
        &self,
        client_id: &str,
        limit: usize,
    ) -> Result<Vec<SearchRecord>, PostgresError> {
        let query = r#"
            SELECT id, client_id, criteria, result, created_at
            FROM searches
            WHERE client_id = $1
            ORDER BY created_at DESC
            LIMIT $2
        "#;

        let rows = sqlx::query(query)
            .bind(client_id)
            .bind(limit as i64)
            .fetch_all(&self.pool)
            .await?;

        let records = rows
            .iter()
            .map(|row| {
                let Json(criteria): Json<serde_json::Value> = row.get("criteria");
                let Json(result): Json<serde_json::Value> = row.get("result");
                SearchRecord {
                    id: row.get("id"),
                    client_id: row.get("client_id"),
                    criteria,
                    result,
                    created_at: row.get("created_at"),
                }
            })
            .collect();

        Ok(records)
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<bool, PostgresError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}
